// Copyright 2025 ULDE Team

use auto_impl::auto_impl;
use ulde_field::{Field, PrimeField};

/// Maps message symbols to field elements.
///
/// Implementations must be total and deterministic: every symbol of the alphabet has exactly one
/// code.
#[auto_impl(&)]
pub trait SymbolEncoder<F: Field> {
	type Symbol;

	fn encode(&self, symbol: &Self::Symbol) -> F;

	/// Encodes a whole message, one field element per symbol.
	fn encode_all(&self, symbols: &[Self::Symbol]) -> Vec<F> {
		symbols.iter().map(|symbol| self.encode(symbol)).collect()
	}
}

/// Encodes a byte as its numeric value.
#[derive(Debug, Default, Clone, Copy)]
pub struct ByteEncoder;

impl<F: PrimeField> SymbolEncoder<F> for ByteEncoder {
	type Symbol = u8;

	fn encode(&self, symbol: &u8) -> F {
		F::from_u64(*symbol as u64)
	}
}

/// Encodes a character as its Unicode scalar value, which is the ASCII code for ASCII text.
#[derive(Debug, Default, Clone, Copy)]
pub struct CodePointEncoder;

impl<F: PrimeField> SymbolEncoder<F> for CodePointEncoder {
	type Symbol = char;

	fn encode(&self, symbol: &char) -> F {
		F::from_u64(u32::from(*symbol) as u64)
	}
}
