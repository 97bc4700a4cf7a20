// Copyright 2025 ULDE Team

use assert_matches::assert_matches;
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use crate::{Error, Field, Goldilocks, Mersenne31, PrimeField};

crate::prime_field!(F17, 17);

#[test]
fn test_field_text_debug() {
	assert_eq!(format!("{:?}", Goldilocks::new(42)), "Goldilocks(42)");
	assert_eq!(format!("{}", Mersenne31::new(7)), "7");
}

#[test]
fn test_new_reduces() {
	assert_eq!(Mersenne31::new(Mersenne31::MODULUS), Mersenne31::ZERO);
	assert_eq!(Mersenne31::new(Mersenne31::MODULUS + 5), Mersenne31::new(5));
	assert_eq!(Goldilocks::from_u64(u64::MAX).val(), u64::MAX - Goldilocks::MODULUS);
}

#[test]
fn test_from_canonical() {
	assert_eq!(Goldilocks::from_canonical(65).unwrap(), Goldilocks::from(65u8));
	assert_matches!(
		Mersenne31::from_canonical(Mersenne31::MODULUS),
		Err(Error::NotInField { value, modulus }) if value == modulus
	);
}

#[test]
fn test_try_to_index() {
	assert_eq!(Goldilocks::new(3).try_to_index(4), Some(3));
	assert_eq!(Goldilocks::new(4).try_to_index(4), None);
	assert_eq!((-Goldilocks::ONE).try_to_index(1 << 20), None);
}

#[test]
fn test_negation() {
	assert_eq!(-Goldilocks::ZERO, Goldilocks::ZERO);
	assert_eq!((-Goldilocks::ONE).val(), Goldilocks::MODULUS - 1);
	assert_eq!(-F17::new(5), F17::new(12));
}

#[test]
fn test_invert_small_field_exhaustive() {
	assert_eq!(F17::ZERO.invert(), None);
	for value in 1..17 {
		let x = F17::new(value);
		assert_eq!(x * x.invert().unwrap(), F17::ONE);
	}
}

#[test]
fn test_invert_two_goldilocks() {
	let two = Goldilocks::new(2);
	assert_eq!(two.invert().unwrap().val(), (Goldilocks::MODULUS + 1) / 2);
}

#[test]
fn test_pow() {
	let x = Mersenne31::new(3);
	assert_eq!(x.pow([4u64]), Mersenne31::new(81));
	assert_eq!(x.pow([0u64]), Mersenne31::ONE);
	// Fermat's little theorem
	assert_eq!(x.pow([Mersenne31::MODULUS - 1]), Mersenne31::ONE);
}

#[test]
fn test_random_is_canonical() {
	let mut rng = StdRng::seed_from_u64(0);
	for _ in 0..1000 {
		assert!(F17::random(&mut rng).val() < 17);
		assert!(Mersenne31::random(&mut rng).val() < Mersenne31::MODULUS);
	}
}

#[test]
fn test_sum_and_product() {
	let values = [1u64, 2, 3, 4].map(Goldilocks::new);
	assert_eq!(values.iter().sum::<Goldilocks>(), Goldilocks::new(10));
	assert_eq!(values.into_iter().product::<Goldilocks>(), Goldilocks::new(24));
}

macro_rules! field_axiom_tests {
	($($name:ident, $field:ty);* $(;)?) => {
		proptest! {
			$(
				#[test]
				fn $name(a in any::<u64>(), b in any::<u64>(), c in any::<u64>()) {
					let (a, b, c) = (<$field>::from_u64(a), <$field>::from_u64(b), <$field>::from_u64(c));
					prop_assert_eq!(a + b, b + a);
					prop_assert_eq!(a * b, b * a);
					prop_assert_eq!((a + b) + c, a + (b + c));
					prop_assert_eq!((a * b) * c, a * (b * c));
					prop_assert_eq!(a * (b + c), a * b + a * c);
					prop_assert_eq!(a - b + b, a);
					prop_assert_eq!(a + (-a), <$field>::ZERO);
					prop_assert_eq!(a.double(), a + a);
					if let Some(inv) = a.invert() {
						prop_assert_eq!(a * inv, <$field>::ONE);
					} else {
						prop_assert!(a.is_zero());
					}
				}
			)*
		}
	};
}

field_axiom_tests! {
	test_goldilocks_axioms, Goldilocks;
	test_mersenne31_axioms, Mersenne31;
}
