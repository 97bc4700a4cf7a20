// Copyright 2025 ULDE Team

use std::iter::FusedIterator;

use tracing::{debug, instrument};
use ulde_field::{Field, PrimeField};
use ulde_utils::{bail, ensure};

use crate::Error;

/// Returns the integer domain $\{0, 1, \ldots, n - 1\}$ as field elements.
///
/// Fails with [`Error::DomainSizeTooLarge`] if the points would not be distinct in `F`.
pub fn integer_domain<F: PrimeField>(size: usize) -> Result<Vec<F>, Error> {
	check_domain_size::<F>(size)?;
	Ok((0..size).map(F::from_usize).collect())
}

fn check_domain_size<F: PrimeField>(size: usize) -> Result<(), Error> {
	let fits = u64::try_from(size).is_ok_and(|size| size <= F::MODULUS);
	ensure!(fits, Error::DomainSizeTooLarge);
	Ok(())
}

/// Evaluates the Lagrange basis polynomial $L_i$ of an arbitrary domain at `x`.
///
/// Uses the product definition
/// $$L_i(x) = \prod_{j \neq i}\frac{x - \pi_j}{\pi_i - \pi_j},$$
/// which costs $O(N)$ multiplications and a single inversion.
pub fn lagrange_basis_at<F: Field>(index: usize, points: &[F], x: F) -> Result<F, Error> {
	ensure!(
		index < points.len(),
		Error::InvalidIndex {
			index,
			domain_size: points.len(),
		}
	);

	let point = points[index];
	let (numerator, denominator) = points
		.iter()
		.enumerate()
		.filter(|&(j, _)| j != index)
		.fold((F::ONE, F::ONE), |(num, den), (_, &other)| {
			(num * (x - other), den * (point - other))
		});

	let denominator_inv = denominator.invert().ok_or(Error::DuplicateDomainPoint)?;
	Ok(numerator * denominator_inv)
}

/// Computes $L_i(x)$ from $L_{i-1}(x)$ on the integer domain of size `domain_size`.
///
/// Consecutive basis polynomials share all but two linear factors, which gives
/// $$L_i(x) = L_{i-1}(x) \cdot \frac{(x - (i - 1)) \cdot (-(n - i))}{(x - i) \cdot i}.$$
///
/// The index must be in `1..domain_size` and `x` must lie outside the domain, otherwise one of
/// the denominators vanishes.
pub fn next_lagrange_basis<F: PrimeField>(
	index: usize,
	domain_size: usize,
	x: F,
	prev: F,
) -> Result<F, Error> {
	check_domain_size::<F>(domain_size)?;
	ensure!(
		index >= 1 && index < domain_size,
		Error::InvalidIndex { index, domain_size }
	);
	if x.try_to_index(domain_size).is_some() {
		bail!(Error::DomainPoint {
			point: x.to_canonical_u64(),
			domain_size,
		});
	}

	Ok(lagrange_basis_step(index, domain_size, x, prev))
}

#[inline]
fn lagrange_basis_step<F: PrimeField>(index: usize, domain_size: usize, x: F, prev: F) -> F {
	debug_assert!(index >= 1 && index < domain_size);
	debug_assert!(x.try_to_index(domain_size).is_none());

	let i = F::from_usize(index);
	let numerator = prev * (x - F::from_usize(index - 1)) * -F::from_usize(domain_size - index);
	let denominator = (x - i) * i;
	// Non-zero: x is outside the domain and 0 < i < n <= p.
	numerator * denominator.invert_or_zero()
}

/// Iterator over $L_0(x), L_1(x), \ldots, L_{n-1}(x)$ for the integer domain of size $n$.
///
/// $L_0(x)$ is computed once from the product definition, every following value is derived from
/// its predecessor with [`next_lagrange_basis`]. Only the running value is retained, so the whole
/// sweep takes $O(n)$ field operations and constant extra memory.
#[derive(Debug, Clone)]
pub struct LagrangeBasisSweep<F> {
	domain_size: usize,
	x: F,
	next_index: usize,
	current: F,
}

impl<F: PrimeField> LagrangeBasisSweep<F> {
	/// Starts a sweep at a point outside the domain.
	pub fn new(domain_size: usize, x: F) -> Result<Self, Error> {
		ensure!(domain_size > 0, Error::EmptyMessage);
		if x.try_to_index(domain_size).is_some() {
			bail!(Error::DomainPoint {
				point: x.to_canonical_u64(),
				domain_size,
			});
		}

		// The domain itself is only needed to seed the sweep.
		let points = integer_domain::<F>(domain_size)?;
		let first = lagrange_basis_at(0, &points, x)?;

		Ok(Self {
			domain_size,
			x,
			next_index: 0,
			current: first,
		})
	}

	/// Number of basis values the sweep yields in total.
	pub fn domain_size(&self) -> usize {
		self.domain_size
	}
}

impl<F: PrimeField> Iterator for LagrangeBasisSweep<F> {
	type Item = F;

	fn next(&mut self) -> Option<F> {
		if self.next_index >= self.domain_size {
			return None;
		}
		if self.next_index > 0 {
			self.current =
				lagrange_basis_step(self.next_index, self.domain_size, self.x, self.current);
		}
		self.next_index += 1;
		Some(self.current)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.domain_size - self.next_index;
		(remaining, Some(remaining))
	}
}

impl<F: PrimeField> ExactSizeIterator for LagrangeBasisSweep<F> {}

impl<F: PrimeField> FusedIterator for LagrangeBasisSweep<F> {}

/// Computes the vector of all Lagrange basis evaluations $L_i(x)$ on the integer domain.
///
/// If `x` is a domain point the result is its indicator vector.
pub fn lagrange_basis_evals<F: PrimeField>(domain_size: usize, x: F) -> Result<Vec<F>, Error> {
	ensure!(domain_size > 0, Error::EmptyMessage);
	check_domain_size::<F>(domain_size)?;

	if let Some(index) = x.try_to_index(domain_size) {
		let mut evals = vec![F::ZERO; domain_size];
		evals[index] = F::ONE;
		return Ok(evals);
	}

	Ok(LagrangeBasisSweep::new(domain_size, x)?.collect())
}

/// Evaluates the univariate extension of `values` at `x` in $O(n)$.
///
/// `values` are the evaluations on $\{0, \ldots, n - 1\}$ of the unique polynomial of degree
/// $< n$; the result is that polynomial evaluated at `x`. When `x` is itself a domain point the
/// stored value is returned without touching the basis.
#[instrument(skip_all, level = "trace", fields(size = values.len()))]
pub fn evaluate_univariate_extension<F: PrimeField>(values: &[F], x: F) -> Result<F, Error> {
	ensure!(!values.is_empty(), Error::EmptyMessage);
	check_domain_size::<F>(values.len())?;

	if let Some(index) = x.try_to_index(values.len()) {
		debug!(index, "evaluation point is in the domain");
		return Ok(values[index]);
	}

	let result = LagrangeBasisSweep::new(values.len(), x)?
		.zip(values)
		.map(|(basis, &value)| basis * value)
		.sum();
	Ok(result)
}
