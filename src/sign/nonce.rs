//! Injectable randomness for per-request nonces.

// self
use crate::_prelude::*;

/// Supplies 128-bit values rendered into signature nonces.
pub trait NonceSource
where
	Self: Send + Sync,
{
	/// Draws the next value. Successive draws must not repeat in practice.
	fn next(&self) -> u128;
}

/// Thread-local CSPRNG source; each call stack gets an independent generator.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomNonceSource;
impl NonceSource for RandomNonceSource {
	fn next(&self) -> u128 {
		rand::random()
	}
}

/// Source that always yields the same value, for reproducible signatures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedNonceSource(pub u128);
impl NonceSource for FixedNonceSource {
	fn next(&self) -> u128 {
		self.0
	}
}

/// Renders a value as a 36-character dashed hex token (8-4-4-4-12).
pub fn format_nonce(value: u128) -> String {
	let hex = format!("{value:032x}");

	format!("{}-{}-{}-{}-{}", &hex[..8], &hex[8..12], &hex[12..16], &hex[16..20], &hex[20..])
}
