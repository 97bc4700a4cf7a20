// Copyright 2024 Irreducible Inc.
// Copyright 2025 ULDE Team

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("cannot extend an empty message")]
	EmptyMessage,
	#[error("basis index {index} is out of range for a domain of size {domain_size}")]
	InvalidIndex { index: usize, domain_size: usize },
	#[error("point {point} lies in the interpolation domain 0..{domain_size}")]
	DomainPoint { point: u64, domain_size: usize },
	#[error("domain size is larger than the field")]
	DomainSizeTooLarge,
	#[error("duplicate point in domain")]
	DuplicateDomainPoint,
	#[error("expected the number of evaluations to match the domain size")]
	ExtrapolateNumberOfEvaluations,
	#[error("{0}")]
	FieldError(#[from] ulde_field::Error),
}
