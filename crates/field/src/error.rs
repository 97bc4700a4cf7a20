// Copyright 2023-2024 Irreducible Inc.
// Copyright 2025 ULDE Team

/// Error thrown when a field operation fails.
#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
	/// Thrown when trying to initialize a field element from an integer that is not a canonical
	/// representative, i.e. not below the modulus.
	#[error("value {value} is not in the field with modulus {modulus}")]
	NotInField { value: u64, modulus: u64 },
}
