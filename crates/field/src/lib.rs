// Copyright 2023-2024 Irreducible Inc.
// Copyright 2025 ULDE Team

//! Prime field arithmetic for univariate low-degree extensions.
//!
//! Elements are stored as their canonical representative in `[0, p)`. Concrete fields are
//! declared with the [`prime_field!`] macro; [`Goldilocks`] and [`Mersenne31`] are provided.

pub mod arithmetic_traits;
pub mod error;
pub mod field;
pub mod prime_field;
#[cfg(test)]
mod tests;

pub use error::*;
pub use field::Field;
pub use prime_field::{Goldilocks, Mersenne31, PrimeField};

#[doc(hidden)]
pub use rand;
