//! Reconciliation workflows driving the signed client.
//!
//! A [`Reconciler`] reads the record set, decides from the read whether to create, update,
//! delete, or do nothing, and maps every exit path to a [`ReconciliationOutcome`]:
//!
//! ```text
//! START -> READING -> {NOT_FOUND, FOUND, READ_ERROR} -> {CREATING | UPDATING | DELETING | done} -> {SUCCESS, FAILED}
//! ```
//!
//! Calls are awaited one after another and nothing is retried. Entry points never return
//! `Err`; failures become [`ReconcileStatus::Failed`] outcomes.

pub mod outcome;

mod ensure_absent;
mod ensure_present;
mod full;

pub use outcome::*;

// self
use crate::{
	_prelude::*,
	client::EdgeDnsClient,
	http::DnsHttpClient,
	obs::{self, ReconcileSpan, RunOutcome},
	record::DesiredRecord,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Reconciler specialized for the crate's default reqwest transport stack.
pub type ReqwestReconciler = Reconciler<ReqwestHttpClient>;

/// Caller intent selecting one of the three workflows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconcileMode {
	/// Create the record when missing; never update it.
	EnsurePresent,
	/// Create the record when missing; update it when it diverges.
	FullReconcile,
	/// Delete the record when present.
	EnsureAbsent,
}
impl ReconcileMode {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::EnsurePresent => "ensure_present",
			Self::FullReconcile => "full_reconcile",
			Self::EnsureAbsent => "ensure_absent",
		}
	}
}
impl Display for ReconcileMode {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for ReconcileMode {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"ensure_present" => Ok(Self::EnsurePresent),
			"full_reconcile" => Ok(Self::FullReconcile),
			"ensure_absent" => Ok(Self::EnsureAbsent),
			other => Err(format!("Unknown reconcile mode `{other}`.")),
		}
	}
}

/// Brings one remote record set to the desired state.
///
/// The reconciler holds no state between runs; concurrent runs against different records
/// may share it.
#[derive(Clone)]
pub struct Reconciler<C>
where
	C: ?Sized + DnsHttpClient,
{
	/// Signed client used for every call.
	pub client: EdgeDnsClient<C>,
	verify_deletion: bool,
}
impl<C> Reconciler<C>
where
	C: ?Sized + DnsHttpClient,
{
	/// Wraps a client; ensure-absent verifies deletions by default.
	pub fn new(client: EdgeDnsClient<C>) -> Self {
		Self { client, verify_deletion: true }
	}

	/// Enables or disables the post-delete verification read.
	pub fn with_verify_deletion(mut self, verify: bool) -> Self {
		self.verify_deletion = verify;

		self
	}

	/// Returns `true` when ensure-absent re-reads after deleting.
	pub fn verify_deletion(&self) -> bool {
		self.verify_deletion
	}

	/// Runs the workflow selected by `mode`.
	///
	/// [`ReconcileMode::EnsureAbsent`] only uses the record's key.
	pub async fn reconcile(
		&self,
		desired: &DesiredRecord,
		mode: ReconcileMode,
	) -> ReconciliationOutcome {
		match mode {
			ReconcileMode::EnsurePresent => self.ensure_present(desired).await,
			ReconcileMode::FullReconcile => self.full_reconcile(desired).await,
			ReconcileMode::EnsureAbsent => self.ensure_absent(&desired.key).await,
		}
	}

	async fn create(&self, desired: &DesiredRecord) -> Result<ReconciliationOutcome> {
		let response = self.client.create_record(desired).await?;

		Ok(ReconciliationOutcome::success(ReconcileAction::Created, "DNS record created successfully")
			.with_detail(response))
	}
}
impl<C> Debug for Reconciler<C>
where
	C: ?Sized + DnsHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Reconciler")
			.field("client", &self.client)
			.field("verify_deletion", &self.verify_deletion)
			.finish()
	}
}

/// Runs `work` inside the mode's span and records its outcome.
async fn observed<F>(mode: ReconcileMode, stage: &'static str, work: F) -> ReconciliationOutcome
where
	F: Future<Output = Result<ReconciliationOutcome>>,
{
	let span = ReconcileSpan::new(mode, stage);

	obs::record_reconcile_outcome(mode, RunOutcome::Attempt);

	let outcome = span
		.instrument(async move {
			let outcome = work.await.unwrap_or_else(|e| ReconciliationOutcome::from_error(&e));

			if let Some(warning) = &outcome.warning {
				obs::trace_warning(warning);
			}
			if !outcome.is_success() {
				obs::trace_failure(&outcome.message);
			}

			outcome
		})
		.await;

	match outcome.status {
		ReconcileStatus::Success => obs::record_reconcile_outcome(mode, RunOutcome::Success),
		ReconcileStatus::Failed => obs::record_reconcile_outcome(mode, RunOutcome::Failure),
	}

	outcome
}
