// Copyright 2024-2025 Irreducible Inc.
// Copyright 2025 ULDE Team

//! Univariate low-degree extensions over prime fields.
//!
//! A message of `n` symbols is read as the evaluations of the unique polynomial of degree `< n`
//! on the integer domain `{0, …, n-1}`. This crate evaluates that polynomial at any field point:
//!
//! * [`evaluate_univariate_extension`] does it in $O(n)$ with a Lagrange basis recurrence;
//! * [`UnivariateExtension`] owns a validated message and evaluates it at one or many points;
//! * [`EvaluationDomain`] provides barycentric evaluation over arbitrary distinct points.

mod encoding;
mod error;
mod extension;
mod lagrange;
mod univariate;

pub use encoding::*;
pub use error::*;
pub use extension::*;
pub use lagrange::*;
pub use univariate::*;
