//! Crate-level error types shared across signing, transport, and reconciliation.

// self
use crate::{_prelude::*, client::ApiOperation};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error produced by every signed API step.
///
/// [`Reconciler`](crate::reconcile::Reconciler) entry points never return this type; they
/// convert it into a failed [`ReconciliationOutcome`](crate::reconcile::ReconciliationOutcome).
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem; no request was attempted.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// The API answered with a status the current step does not accept.
	#[error("The {operation} call returned unexpected status {status}.")]
	Api {
		/// Step that received the response.
		operation: ApiOperation,
		/// HTTP status code.
		status: u16,
		/// Raw response body.
		body: String,
	},
	/// A successful response carried a body that does not describe a record set.
	#[error("The {operation} call returned a malformed record set.")]
	UnexpectedResponse {
		/// Step that received the response.
		operation: ApiOperation,
		/// HTTP status code.
		status: u16,
		/// Raw response body.
		body: String,
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}
impl Error {
	/// HTTP status and body attached to the failure, when the API answered at all.
	pub fn response_detail(&self) -> Option<(u16, &str)> {
		match self {
			Self::Api { status, body, .. } | Self::UnexpectedResponse { status, body, .. } =>
				Some((*status, body.as_str())),
			_ => None,
		}
	}
}

/// Configuration and validation failures raised before any request leaves the process.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// A credential field is absent or blank.
	#[error("Credential `{name}` is missing or blank.")]
	MissingCredential {
		/// Credential field name.
		name: &'static str,
	},
	/// A credential store could not be read.
	#[error(transparent)]
	CredentialStore(#[from] crate::store::CredentialStoreError),
	/// Desired record failed validation.
	#[error("Desired record is invalid.")]
	InvalidRecord(#[from] crate::record::RecordError),
	/// The API base URL cannot be parsed.
	#[error("API base URL `{url}` is invalid.")]
	InvalidBaseUrl {
		/// Offending URL text.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// The signing timestamp could not be rendered.
	#[error("Signing timestamp could not be formatted.")]
	Timestamp(#[from] time::error::Format),
	/// The HMAC key could not be initialized.
	#[error("Signing key could not be initialized.")]
	SigningKey,
	/// The request body could not be serialized.
	#[error("Request body could not be serialized.")]
	Body(#[from] serde_json::Error),
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the DNS API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the DNS API.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
