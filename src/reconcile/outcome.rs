//! Terminal value of one reconciliation run.

// self
use crate::{_prelude::*, client::ApiOperation, http::HttpResponse};

/// Warning attached when a deleted record is still readable.
pub const PROPAGATION_WARNING: &str = "Record still exists - may take time to propagate";

/// Final status of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReconcileStatus {
	/// Remote state matches the request (possibly after a write).
	Success,
	/// A step failed; the run stopped there.
	Failed,
}
impl ReconcileStatus {
	/// Returns the persisted label (`success` or `failed`).
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Success => "success",
			Self::Failed => "failed",
		}
	}
}
impl Display for ReconcileStatus {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// What a successful run did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconcileAction {
	/// The record was missing and has been created.
	Created,
	/// The record diverged and has been replaced.
	Updated,
	/// The record existed and has been deleted.
	Deleted,
	/// The record exists; ensure-present does not compare fields.
	AlreadyPresent,
	/// The record already holds the desired addresses and TTL.
	AlreadyCorrect,
	/// The record does not exist; nothing was deleted.
	AlreadyAbsent,
}

/// Raw status and body of the response that decided the outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseDetail {
	/// HTTP status code.
	pub http_status: u16,
	/// Response body text.
	pub response_body: String,
}
impl From<HttpResponse> for ResponseDetail {
	fn from(response: HttpResponse) -> Self {
		Self { http_status: response.status, response_body: response.body }
	}
}

/// Status, message, and optional response detail returned to the caller.
///
/// Serializes with lowercase status strings so callers can persist it as is:
///
/// ```
/// use edgegrid_dns::reconcile::{ReconcileAction, ReconciliationOutcome};
///
/// let outcome =
/// 	ReconciliationOutcome::success(ReconcileAction::AlreadyPresent, "DNS record already exists");
///
/// assert_eq!(
/// 	serde_json::to_string(&outcome).expect("Outcome should serialize."),
/// 	r#"{"status":"success","action":"already_present","message":"DNS record already exists"}"#
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationOutcome {
	/// Terminal status.
	pub status: ReconcileStatus,
	/// Action taken; `None` for failed runs.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub action: Option<ReconcileAction>,
	/// Human-readable summary.
	pub message: String,
	/// Response that decided the outcome, when one exists.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub detail: Option<ResponseDetail>,
	/// Non-fatal observation, such as a deletion not yet visible.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub warning: Option<String>,
}
impl ReconciliationOutcome {
	/// Successful outcome for `action`.
	pub fn success(action: ReconcileAction, message: impl Into<String>) -> Self {
		Self {
			status: ReconcileStatus::Success,
			action: Some(action),
			message: message.into(),
			detail: None,
			warning: None,
		}
	}

	/// Failed outcome with no response attached.
	pub fn failed(message: impl Into<String>) -> Self {
		Self {
			status: ReconcileStatus::Failed,
			action: None,
			message: message.into(),
			detail: None,
			warning: None,
		}
	}

	/// Maps any step error to a failed outcome.
	///
	/// Rejected statuses keep their status and body in [`Self::detail`]; transport and
	/// configuration failures carry the error chain in the message only.
	pub fn from_error(error: &Error) -> Self {
		let message = match error {
			Error::Api { operation: ApiOperation::Read, status, body } =>
				format!("Unexpected status code: {status}. Response: {body}"),
			Error::Api { operation, status, body } =>
				format!("Failed to {operation} DNS record. Status: {status}. Error: {body}"),
			_ => format!("Exception occurred: {}", describe(error)),
		};
		let detail = error.response_detail().map(|(http_status, body)| ResponseDetail {
			http_status,
			response_body: body.to_owned(),
		});

		Self { detail, ..Self::failed(message) }
	}

	/// Attaches the deciding response.
	pub fn with_detail(mut self, detail: impl Into<ResponseDetail>) -> Self {
		self.detail = Some(detail.into());

		self
	}

	/// Attaches a warning without changing the status.
	pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
		self.warning = Some(warning.into());

		self
	}

	/// Returns `true` for [`ReconcileStatus::Success`].
	pub fn is_success(&self) -> bool {
		self.status == ReconcileStatus::Success
	}
}
impl Display for ReconciliationOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "{}: {}", self.status, self.message)?;

		if let Some(warning) = &self.warning {
			write!(f, " ({warning})")?;
		}

		Ok(())
	}
}

fn describe(error: &dyn StdError) -> String {
	let mut text = error.to_string();
	let mut source = error.source();

	while let Some(cause) = source {
		text.push_str(": ");
		text.push_str(&cause.to_string());

		source = cause.source();
	}

	text
}
