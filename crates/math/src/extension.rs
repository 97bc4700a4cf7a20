// Copyright 2025 ULDE Team

use rayon::prelude::*;
use tracing::instrument;
use ulde_field::PrimeField;
use ulde_utils::ensure;

use crate::{
	evaluate_univariate_extension, lagrange_basis_evals, ByteEncoder, CodePointEncoder, Error,
	SymbolEncoder,
};

/// A non-empty message read as the evaluations of a polynomial of degree $< n$ on the integer
/// domain $\{0, \ldots, n - 1\}$.
///
/// The message is validated once on construction; evaluations never mutate it, so the same
/// extension can be opened at many points concurrently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnivariateExtension<F> {
	values: Vec<F>,
}

impl<F: PrimeField> UnivariateExtension<F> {
	pub fn new(values: Vec<F>) -> Result<Self, Error> {
		ensure!(!values.is_empty(), Error::EmptyMessage);
		ensure!(
			u64::try_from(values.len()).is_ok_and(|n| n <= F::MODULUS),
			Error::DomainSizeTooLarge
		);
		Ok(Self { values })
	}

	/// Builds the extension of a message, encoding each symbol with `encoder`.
	pub fn from_symbols<E>(encoder: E, symbols: &[E::Symbol]) -> Result<Self, Error>
	where
		E: SymbolEncoder<F>,
	{
		Self::new(encoder.encode_all(symbols))
	}

	/// Builds the extension of a text message, one coefficient per character code.
	pub fn from_text(text: &str) -> Result<Self, Error> {
		let symbols = text.chars().collect::<Vec<_>>();
		Self::from_symbols(CodePointEncoder, &symbols)
	}

	pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
		Self::from_symbols(ByteEncoder, bytes)
	}

	pub fn size(&self) -> usize {
		self.values.len()
	}

	pub fn values(&self) -> &[F] {
		&self.values
	}

	/// Evaluates the extension at `x` in $O(n)$.
	pub fn evaluate(&self, x: F) -> Result<F, Error> {
		evaluate_univariate_extension(&self.values, x)
	}

	/// Evaluates the extension at every point in `points`, in parallel.
	#[instrument(
		"UnivariateExtension::evaluate_many",
		skip_all,
		level = "debug",
		fields(size = self.size(), n_points = points.len())
	)]
	pub fn evaluate_many(&self, points: &[F]) -> Result<Vec<F>, Error> {
		points.par_iter().map(|&x| self.evaluate(x)).collect()
	}

	/// Returns $L_0(x), \ldots, L_{n-1}(x)$ for this extension's domain.
	pub fn lagrange_basis_evals(&self, x: F) -> Result<Vec<F>, Error> {
		lagrange_basis_evals(self.size(), x)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use assert_matches::assert_matches;
	use ulde_field::{Field, Goldilocks};

	ulde_field::prime_field!(F5, 5);

	#[test]
	fn test_empty_message() {
		assert_matches!(UnivariateExtension::<Goldilocks>::new(vec![]), Err(Error::EmptyMessage));
		assert_matches!(UnivariateExtension::<Goldilocks>::from_text(""), Err(Error::EmptyMessage));
	}

	#[test]
	fn test_message_longer_than_field() {
		assert_matches!(
			UnivariateExtension::<F5>::from_bytes(b"abcdef"),
			Err(Error::DomainSizeTooLarge)
		);
		assert!(UnivariateExtension::<F5>::from_bytes(b"abcde").is_ok());
	}

	#[test]
	fn test_text_and_bytes_agree_on_ascii() {
		let text = UnivariateExtension::<Goldilocks>::from_text("hello").unwrap();
		let bytes = UnivariateExtension::<Goldilocks>::from_bytes(b"hello").unwrap();
		assert_eq!(text, bytes);
		assert_eq!(text.size(), 5);
	}

	#[test]
	fn test_basis_evals_sum_to_one() {
		let extension = UnivariateExtension::<Goldilocks>::from_text("basis").unwrap();
		let evals = extension.lagrange_basis_evals(Goldilocks::new(1234)).unwrap();
		assert_eq!(evals.iter().sum::<Goldilocks>(), Goldilocks::ONE);
	}
}
