// self
use crate::{_prelude::*, client::ApiOperation, reconcile::ReconcileMode};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedRun<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedRun<F> = F;

/// A span builder used by reconciler workflows.
#[derive(Clone, Debug)]
pub struct ReconcileSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl ReconcileSpan {
	/// Creates a new span tagged with the provided mode + stage.
	pub fn new(mode: ReconcileMode, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("edgegrid_dns.reconcile", mode = mode.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (mode, stage);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedRun<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits a debug event for one completed API call.
pub fn trace_api_response(operation: ApiOperation, status: u16) {
	#[cfg(feature = "tracing")]
	tracing::debug!(operation = operation.as_str(), status, "DNS API call completed.");

	#[cfg(not(feature = "tracing"))]
	let _ = (operation, status);
}

/// Emits a warn event for a run that ended FAILED.
pub fn trace_failure(message: &str) {
	#[cfg(feature = "tracing")]
	tracing::warn!(reason = message, "Reconciliation failed.");

	#[cfg(not(feature = "tracing"))]
	let _ = message;
}

/// Emits a warn event for a SUCCESS outcome that carries a warning.
pub fn trace_warning(warning: &str) {
	#[cfg(feature = "tracing")]
	tracing::warn!(warning, "Reconciliation succeeded with a warning.");

	#[cfg(not(feature = "tracing"))]
	let _ = warning;
}
