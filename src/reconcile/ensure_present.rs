//! Ensure-present: create when missing, never compare fields.

// self
use crate::{
	_prelude::*,
	client::ReadState,
	error::ConfigError,
	http::DnsHttpClient,
	reconcile::{self, ReconcileAction, ReconcileMode, ReconciliationOutcome, Reconciler},
	record::DesiredRecord,
};

impl<C> Reconciler<C>
where
	C: ?Sized + DnsHttpClient,
{
	/// Creates the record when the read returns 404; an existing record counts as success.
	pub async fn ensure_present(&self, desired: &DesiredRecord) -> ReconciliationOutcome {
		reconcile::observed(ReconcileMode::EnsurePresent, "ensure_present", self.try_ensure_present(desired))
			.await
	}

	async fn try_ensure_present(&self, desired: &DesiredRecord) -> Result<ReconciliationOutcome> {
		desired.validate().map_err(ConfigError::from)?;

		match self.client.read_record(&desired.key).await? {
			ReadState::NotFound => self.create(desired).await,
			ReadState::Found(_) =>
				Ok(ReconciliationOutcome::success(ReconcileAction::AlreadyPresent, "DNS record already exists")),
		}
	}
}
