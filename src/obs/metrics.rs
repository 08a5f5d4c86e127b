// self
use crate::{
	client::ApiOperation,
	obs::{CallResult, RunOutcome},
	reconcile::ReconcileMode,
};

/// Records a reconciliation outcome via the global metrics recorder (when enabled).
pub fn record_reconcile_outcome(mode: ReconcileMode, outcome: RunOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"edgegrid_dns_reconcile_total",
			"mode" => mode.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (mode, outcome);
	}
}

/// Records one API call via the global metrics recorder (when enabled).
pub fn record_api_call(operation: ApiOperation, result: CallResult) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"edgegrid_dns_api_call_total",
			"operation" => operation.as_str(),
			"result" => result.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (operation, result);
	}
}
