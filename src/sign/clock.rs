//! Injectable time source for signing timestamps.

// self
use crate::_prelude::*;

/// Supplies the instant a signature is issued at.
pub trait Clock
where
	Self: Send + Sync,
{
	/// Current instant; implementations need not return UTC, the signer converts.
	fn now(&self) -> OffsetDateTime;
}

/// Wall clock backed by [`OffsetDateTime::now_utc`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;
impl Clock for SystemClock {
	fn now(&self) -> OffsetDateTime {
		OffsetDateTime::now_utc()
	}
}

/// Clock frozen at one instant, for reproducible signatures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub OffsetDateTime);
impl Clock for FixedClock {
	fn now(&self) -> OffsetDateTime {
		self.0
	}
}
