//! Full reconcile: create when missing, replace when divergent.

// self
use crate::{
	_prelude::*,
	client::{ApiOperation, ReadState},
	error::ConfigError,
	http::DnsHttpClient,
	reconcile::{self, ReconcileAction, ReconcileMode, ReconciliationOutcome, Reconciler},
	record::{DesiredRecord, ObservedRecord},
};

impl<C> Reconciler<C>
where
	C: ?Sized + DnsHttpClient,
{
	/// Creates the record when missing, or replaces it when a desired address is absent
	/// remotely or the TTL differs.
	///
	/// Extra remote addresses do not trigger an update.
	pub async fn full_reconcile(&self, desired: &DesiredRecord) -> ReconciliationOutcome {
		reconcile::observed(ReconcileMode::FullReconcile, "full_reconcile", self.try_full_reconcile(desired))
			.await
	}

	async fn try_full_reconcile(&self, desired: &DesiredRecord) -> Result<ReconciliationOutcome> {
		desired.validate().map_err(ConfigError::from)?;

		let response = match self.client.read_record(&desired.key).await? {
			ReadState::NotFound => return self.create(desired).await,
			ReadState::Found(response) => response,
		};
		let observed = ObservedRecord::from_json(&response.body).map_err(|source| {
			Error::UnexpectedResponse {
				operation: ApiOperation::Read,
				status: response.status,
				body: response.body.clone(),
				source,
			}
		})?;

		if !observed.needs_update(desired) {
			return Ok(ReconciliationOutcome::success(
				ReconcileAction::AlreadyCorrect,
				"DNS record exists with correct values",
			));
		}

		let response = self.client.update_record(desired).await?;

		Ok(ReconciliationOutcome::success(ReconcileAction::Updated, "DNS record updated successfully")
			.with_detail(response))
	}
}
