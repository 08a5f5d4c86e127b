//! Optional observability helpers for reconciliation runs.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `edgegrid_dns.reconcile` with the `mode`
//!   and `stage` fields, plus debug events for every API call and warn events for failures and
//!   propagation warnings.
//! - Enable `metrics` to increment the `edgegrid_dns_reconcile_total` counter for every
//!   attempt/success/failure, labeled by `mode` + `outcome`, and the
//!   `edgegrid_dns_api_call_total` counter labeled by `operation` + `result`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each reconciliation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RunOutcome {
	/// Entry to a reconciler workflow.
	Attempt,
	/// Run finished with a SUCCESS outcome.
	Success,
	/// Run finished with a FAILED outcome.
	Failure,
}
impl RunOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RunOutcome::Attempt => "attempt",
			RunOutcome::Success => "success",
			RunOutcome::Failure => "failure",
		}
	}
}
impl Display for RunOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Result labels recorded for each API call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallResult {
	/// The status was one the step accepts.
	Accepted,
	/// The API answered with a status the step does not accept.
	Rejected,
	/// No response arrived.
	TransportFailure,
}
impl CallResult {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallResult::Accepted => "accepted",
			CallResult::Rejected => "rejected",
			CallResult::TransportFailure => "transport_failure",
		}
	}
}
impl Display for CallResult {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
