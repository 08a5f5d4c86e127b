//! Ensure-absent: delete when present, then optionally confirm.

// self
use crate::{
	_prelude::*,
	client::ReadState,
	http::DnsHttpClient,
	reconcile::{
		self, PROPAGATION_WARNING, ReconcileAction, ReconcileMode, ReconciliationOutcome, Reconciler,
	},
	record::RecordKey,
};

impl<C> Reconciler<C>
where
	C: ?Sized + DnsHttpClient,
{
	/// Deletes the record set when the read finds it.
	///
	/// With verification enabled, a follow-up read that does not return 404 adds
	/// [`PROPAGATION_WARNING`] to an otherwise successful outcome.
	pub async fn ensure_absent(&self, key: &RecordKey) -> ReconciliationOutcome {
		reconcile::observed(ReconcileMode::EnsureAbsent, "ensure_absent", self.try_ensure_absent(key))
			.await
	}

	async fn try_ensure_absent(&self, key: &RecordKey) -> Result<ReconciliationOutcome> {
		if let ReadState::NotFound = self.client.read_record(key).await? {
			return Ok(ReconciliationOutcome::success(
				ReconcileAction::AlreadyAbsent,
				"DNS record does not exist, nothing to delete",
			));
		}

		let response = self.client.delete_record(key).await?;
		let outcome =
			ReconciliationOutcome::success(ReconcileAction::Deleted, "DNS record deleted successfully")
				.with_detail(response);

		if !self.verify_deletion {
			return Ok(outcome);
		}

		// Deletion may apply asynchronously; anything but a 404 is only worth a warning.
		Ok(match self.client.read_record(key).await {
			Ok(ReadState::NotFound) => outcome,
			_ => outcome.with_warning(PROPAGATION_WARNING),
		})
	}
}
