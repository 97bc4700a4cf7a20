// Copyright 2025 ULDE Team

use crate::{Error, Field};

/// A field of prime order `p < 2^64` whose elements have a canonical integer representative.
///
/// The canonical view is what lets callers compare an element against small integers, for
/// example to decide whether an evaluation point coincides with an interpolation domain point.
pub trait PrimeField: Field + Ord + From<u64> {
	/// The prime order of the field.
	const MODULUS: u64;

	/// Creates an element from an arbitrary integer, reducing it modulo the field order.
	fn from_u64(value: u64) -> Self;

	/// Returns the canonical representative in `[0, MODULUS)`.
	fn to_canonical_u64(self) -> u64;

	/// Creates an element from a canonical representative.
	fn from_canonical(value: u64) -> Result<Self, Error> {
		if value < Self::MODULUS {
			Ok(Self::from_u64(value))
		} else {
			Err(Error::NotInField {
				value,
				modulus: Self::MODULUS,
			})
		}
	}

	fn from_usize(value: usize) -> Self {
		Self::from_u64(value as u64)
	}

	/// Returns the canonical representative as an index if it is strictly below `bound`.
	fn try_to_index(self, bound: usize) -> Option<usize> {
		usize::try_from(self.to_canonical_u64())
			.ok()
			.filter(|&index| index < bound)
	}
}

#[doc(hidden)]
#[inline]
pub const fn add_mod(a: u64, b: u64, modulus: u64) -> u64 {
	let (sum, overflow) = a.overflowing_add(b);
	if overflow || sum >= modulus {
		sum.wrapping_sub(modulus)
	} else {
		sum
	}
}

#[doc(hidden)]
#[inline]
pub const fn sub_mod(a: u64, b: u64, modulus: u64) -> u64 {
	if a >= b {
		a - b
	} else {
		a.wrapping_sub(b).wrapping_add(modulus)
	}
}

#[doc(hidden)]
#[inline]
pub const fn neg_mod(a: u64, modulus: u64) -> u64 {
	if a == 0 {
		0
	} else {
		modulus - a
	}
}

#[doc(hidden)]
#[inline]
pub const fn mul_mod(a: u64, b: u64, modulus: u64) -> u64 {
	((a as u128 * b as u128) % modulus as u128) as u64
}

/// Rejection-samples a value in `[0, modulus)`.
#[doc(hidden)]
pub fn random_mod(mut rng: impl rand::RngCore, modulus: u64) -> u64 {
	let mask = u64::MAX >> modulus.leading_zeros();
	loop {
		let candidate = rng.next_u64() & mask;
		if candidate < modulus {
			return candidate;
		}
	}
}

/// Declares a prime field type with the given modulus.
///
/// The modulus must be an odd prime below `2^64`; primality is not checked.
///
/// ```
/// ulde_field::prime_field!(pub F17, 17);
///
/// use ulde_field::{Field, PrimeField};
///
/// let x = F17::from_u64(20);
/// assert_eq!(x.to_canonical_u64(), 3);
/// assert_eq!(x * x.invert().unwrap(), F17::ONE);
/// ```
#[macro_export]
macro_rules! prime_field {
	($vis:vis $name:ident, $modulus:expr) => {
		#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
		#[repr(transparent)]
		$vis struct $name(u64);

		impl $name {
			/// Creates an element, reducing `value` modulo the field order.
			pub const fn new(value: u64) -> Self {
				Self(value % <Self as $crate::PrimeField>::MODULUS)
			}

			pub const fn val(self) -> u64 {
				self.0
			}
		}

		impl ::std::ops::Neg for $name {
			type Output = Self;

			fn neg(self) -> Self::Output {
				Self($crate::prime_field::neg_mod(self.0, <Self as $crate::PrimeField>::MODULUS))
			}
		}

		impl ::std::ops::Add<Self> for $name {
			type Output = Self;

			fn add(self, rhs: Self) -> Self::Output {
				Self($crate::prime_field::add_mod(
					self.0,
					rhs.0,
					<Self as $crate::PrimeField>::MODULUS,
				))
			}
		}

		impl ::std::ops::Add<&Self> for $name {
			type Output = Self;

			fn add(self, rhs: &Self) -> Self::Output {
				self + *rhs
			}
		}

		impl ::std::ops::Sub<Self> for $name {
			type Output = Self;

			fn sub(self, rhs: Self) -> Self::Output {
				Self($crate::prime_field::sub_mod(
					self.0,
					rhs.0,
					<Self as $crate::PrimeField>::MODULUS,
				))
			}
		}

		impl ::std::ops::Sub<&Self> for $name {
			type Output = Self;

			fn sub(self, rhs: &Self) -> Self::Output {
				self - *rhs
			}
		}

		impl ::std::ops::Mul<Self> for $name {
			type Output = Self;

			fn mul(self, rhs: Self) -> Self::Output {
				Self($crate::prime_field::mul_mod(
					self.0,
					rhs.0,
					<Self as $crate::PrimeField>::MODULUS,
				))
			}
		}

		impl ::std::ops::Mul<&Self> for $name {
			type Output = Self;

			fn mul(self, rhs: &Self) -> Self::Output {
				self * *rhs
			}
		}

		impl ::std::ops::AddAssign<Self> for $name {
			fn add_assign(&mut self, rhs: Self) {
				*self = *self + rhs;
			}
		}

		impl ::std::ops::AddAssign<&Self> for $name {
			fn add_assign(&mut self, rhs: &Self) {
				*self = *self + *rhs;
			}
		}

		impl ::std::ops::SubAssign<Self> for $name {
			fn sub_assign(&mut self, rhs: Self) {
				*self = *self - rhs;
			}
		}

		impl ::std::ops::SubAssign<&Self> for $name {
			fn sub_assign(&mut self, rhs: &Self) {
				*self = *self - *rhs;
			}
		}

		impl ::std::ops::MulAssign<Self> for $name {
			fn mul_assign(&mut self, rhs: Self) {
				*self = *self * rhs;
			}
		}

		impl ::std::ops::MulAssign<&Self> for $name {
			fn mul_assign(&mut self, rhs: &Self) {
				*self = *self * *rhs;
			}
		}

		impl ::std::iter::Sum<Self> for $name {
			fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
				iter.fold(<Self as $crate::Field>::ZERO, |acc, x| acc + x)
			}
		}

		impl<'a> ::std::iter::Sum<&'a Self> for $name {
			fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
				iter.fold(<Self as $crate::Field>::ZERO, |acc, x| acc + x)
			}
		}

		impl ::std::iter::Product<Self> for $name {
			fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
				iter.fold(<Self as $crate::Field>::ONE, |acc, x| acc * x)
			}
		}

		impl<'a> ::std::iter::Product<&'a Self> for $name {
			fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
				iter.fold(<Self as $crate::Field>::ONE, |acc, x| acc * x)
			}
		}

		impl $crate::arithmetic_traits::Square for $name {
			fn square(self) -> Self {
				self * self
			}
		}

		impl $crate::arithmetic_traits::InvertOrZero for $name {
			fn invert_or_zero(self) -> Self {
				// Fermat: x^(p-2) = x^(-1) for x != 0, and 0 stays 0.
				<Self as $crate::Field>::pow(&self, [<Self as $crate::PrimeField>::MODULUS - 2])
			}
		}

		impl $crate::Field for $name {
			const ZERO: Self = Self(0);
			const ONE: Self = Self(1);
			const CHARACTERISTIC: u64 = $modulus;

			fn random(rng: impl $crate::rand::RngCore) -> Self {
				Self($crate::prime_field::random_mod(rng, <Self as $crate::PrimeField>::MODULUS))
			}
		}

		impl $crate::PrimeField for $name {
			const MODULUS: u64 = $modulus;

			fn from_u64(value: u64) -> Self {
				Self::new(value)
			}

			fn to_canonical_u64(self) -> u64 {
				self.0
			}
		}

		impl ::std::fmt::Display for $name {
			fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
				write!(f, "{}", self.0)
			}
		}

		impl From<u8> for $name {
			fn from(val: u8) -> Self {
				Self::new(val as u64)
			}
		}

		impl From<u32> for $name {
			fn from(val: u32) -> Self {
				Self::new(val as u64)
			}
		}

		impl From<u64> for $name {
			fn from(val: u64) -> Self {
				Self::new(val)
			}
		}

		impl From<$name> for u64 {
			fn from(val: $name) -> Self {
				val.0
			}
		}
	};
}

prime_field!(pub Goldilocks, 0xFFFF_FFFF_0000_0001);
prime_field!(pub Mersenne31, (1 << 31) - 1);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_add_mod_wraps_past_u64() {
		let p = Goldilocks::MODULUS;
		assert_eq!(add_mod(p - 1, p - 1, p), p - 2);
		assert_eq!(add_mod(p - 1, 1, p), 0);
	}

	#[test]
	fn test_sub_mod_borrows() {
		let p = Mersenne31::MODULUS;
		assert_eq!(sub_mod(0, 1, p), p - 1);
		assert_eq!(sub_mod(5, 3, p), 2);
	}

	#[test]
	fn test_mul_mod_full_width() {
		let p = Goldilocks::MODULUS;
		// (-1) * (-1) = 1
		assert_eq!(mul_mod(p - 1, p - 1, p), 1);
	}
}
