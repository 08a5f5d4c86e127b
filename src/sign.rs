//! EdgeGrid (`EG1-HMAC-SHA256`) request signing.
//!
//! A [`Signer`] turns a [`SignableRequest`] into an [`AuthorizationToken`] in two steps:
//!
//! 1. [`Signer::context`] draws a fresh [`SignatureContext`] (timestamp, nonce, and the body
//!    digest when the [`ContentDigestPolicy`] asks for one) from the injected [`Clock`] and
//!    [`NonceSource`].
//! 2. [`Signer::sign_with`] is a pure function of the request, the credentials, and that
//!    context. Given the same inputs it always yields the same token.
//!
//! The canonical text signed in step 2 is byte-exact:
//!
//! ```text
//! {METHOD}\thttps\t{host}\t{path[?query]}\t\t{digest or empty}\tEG1-HMAC-SHA256 client_token=..;access_token=..;timestamp=..;nonce=..;
//! ```
//!
//! The signing key is `base64(HMAC-SHA256(client_secret, timestamp))` and the signature is
//! `base64(HMAC-SHA256(signing_key, canonical_text))`.

pub mod clock;
pub mod nonce;
pub mod policy;

pub use clock::*;
pub use nonce::*;
pub use policy::*;

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use time::{UtcOffset, macros::format_description};
// self
use crate::{_prelude::*, auth::Credentials, error::ConfigError};

type HmacSha256 = Hmac<Sha256>;

/// Scheme tag opening both the signed preamble and the header value.
pub const AUTH_SCHEME: &str = "EG1-HMAC-SHA256";

/// HTTP methods used by the DNS control-plane API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
	/// Read a record set.
	Get,
	/// Create a record set.
	Post,
	/// Replace a record set.
	Put,
	/// Remove a record set.
	Delete,
}
impl HttpMethod {
	/// Upper-case method token as it appears on the wire and in the signed text.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Get => "GET",
			Self::Post => "POST",
			Self::Put => "PUT",
			Self::Delete => "DELETE",
		}
	}

	/// Returns `true` for methods that carry a request body.
	pub const fn has_body(self) -> bool {
		matches!(self, Self::Post | Self::Put)
	}
}
impl Display for HttpMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// The parts of an outbound request that are covered by the signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignableRequest {
	/// Request method.
	pub method: HttpMethod,
	/// Resource path without query.
	pub path: String,
	/// Query string without the leading `?`; empty when absent.
	pub query: String,
	/// Request body; empty for bodiless methods.
	pub body: String,
}
impl SignableRequest {
	/// Creates a request with no query and an empty body.
	pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
		Self { method, path: path.into(), query: String::new(), body: String::new() }
	}

	/// Sets the query string (without `?`).
	pub fn with_query(mut self, query: impl Into<String>) -> Self {
		self.query = query.into();

		self
	}

	/// Sets the request body.
	pub fn with_body(mut self, body: impl Into<String>) -> Self {
		self.body = body.into();

		self
	}

	/// Path as signed: `path?query` when a query is present, otherwise `path`.
	pub fn effective_path(&self) -> String {
		if self.query.is_empty() {
			self.path.clone()
		} else {
			format!("{}?{}", self.path, self.query)
		}
	}
}

/// Single-use timestamp, nonce, and optional body digest for one signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureContext {
	/// UTC timestamp formatted as `YYYYMMDDTHH:MM:SS+0000`.
	pub timestamp: String,
	/// Dashed hex nonce.
	pub nonce: String,
	/// Base64 SHA-256 of the body, present only when the policy requires it.
	pub content_hash: Option<String>,
}

/// `Authorization` header value produced by [`Signer::sign`].
#[derive(Clone, PartialEq, Eq)]
pub struct AuthorizationToken(String);
impl AuthorizationToken {
	/// Header value to send verbatim.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Consumes the token, returning the header value.
	pub fn into_header_value(self) -> String {
		self.0
	}

	/// Value of one `key=value` field of the token, if present.
	pub fn field(&self, key: &str) -> Option<&str> {
		let fields = self.0.strip_prefix(AUTH_SCHEME)?.trim_start();

		fields.split(';').find_map(|pair| pair.strip_prefix(key)?.strip_prefix('='))
	}
}
impl Debug for AuthorizationToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AuthorizationToken")
			.field("timestamp", &self.field("timestamp"))
			.field("nonce", &self.field("nonce"))
			.finish_non_exhaustive()
	}
}
impl Display for AuthorizationToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}

/// Stateless EdgeGrid signer bound to one credential set and digest policy.
///
/// The clock and nonce source are the only side effects and are injected, so a signer
/// built with [`FixedClock`] and [`FixedNonceSource`] is fully deterministic. Cloning is
/// cheap; concurrent runs should still use independent nonce sources.
#[derive(Clone)]
pub struct Signer {
	credentials: Credentials,
	policy: ContentDigestPolicy,
	clock: Arc<dyn Clock>,
	nonces: Arc<dyn NonceSource>,
}
impl Signer {
	/// Creates a signer backed by the system clock and a random nonce source.
	pub fn new(credentials: Credentials, policy: ContentDigestPolicy) -> Self {
		Self { credentials, policy, clock: Arc::new(SystemClock), nonces: Arc::new(RandomNonceSource) }
	}

	/// Replaces the clock.
	pub fn with_clock(mut self, clock: impl 'static + Clock) -> Self {
		self.clock = Arc::new(clock);

		self
	}

	/// Replaces the nonce source.
	pub fn with_nonce_source(mut self, nonces: impl 'static + NonceSource) -> Self {
		self.nonces = Arc::new(nonces);

		self
	}

	/// Credentials the signer was built with.
	pub fn credentials(&self) -> &Credentials {
		&self.credentials
	}

	/// Active digest policy.
	pub fn policy(&self) -> ContentDigestPolicy {
		self.policy
	}

	/// Signs `request` with a freshly drawn context.
	pub fn sign(&self, request: &SignableRequest) -> Result<AuthorizationToken, ConfigError> {
		let ctx = self.context(request)?;

		self.sign_with(request, &ctx)
	}

	/// Draws a new timestamp and nonce and computes the digest the policy calls for.
	pub fn context(&self, request: &SignableRequest) -> Result<SignatureContext, ConfigError> {
		let timestamp = format_timestamp(self.clock.now())?;
		let nonce = format_nonce(self.nonces.next());

		Ok(self.context_with(request, timestamp, nonce))
	}

	/// Builds a context from caller-provided timestamp and nonce strings.
	pub fn context_with(
		&self,
		request: &SignableRequest,
		timestamp: impl Into<String>,
		nonce: impl Into<String>,
	) -> SignatureContext {
		let content_hash =
			self.policy.includes(request.method).then(|| content_digest(&request.body));

		SignatureContext { timestamp: timestamp.into(), nonce: nonce.into(), content_hash }
	}

	/// Pure signing step: identical inputs always produce an identical token.
	pub fn sign_with(
		&self,
		request: &SignableRequest,
		ctx: &SignatureContext,
	) -> Result<AuthorizationToken, ConfigError> {
		let signing_key = hmac_base64(self.credentials.client_secret().expose(), &ctx.timestamp)?;
		let signature = hmac_base64(&signing_key, &self.canonical_text(request, ctx))?;

		Ok(AuthorizationToken(format!("{}signature={signature}", self.auth_preamble(ctx))))
	}

	/// Tab-separated text covered by the signature.
	pub fn canonical_text(&self, request: &SignableRequest, ctx: &SignatureContext) -> String {
		format!(
			"{method}\thttps\t{host}\t{path}\t\t{hash}\t{preamble}",
			method = request.method,
			host = self.credentials.host(),
			path = request.effective_path(),
			hash = ctx.content_hash.as_deref().unwrap_or_default(),
			preamble = self.auth_preamble(ctx),
		)
	}

	fn auth_preamble(&self, ctx: &SignatureContext) -> String {
		format!(
			"{AUTH_SCHEME} client_token={};access_token={};timestamp={};nonce={};",
			self.credentials.client_token(),
			self.credentials.access_token().expose(),
			ctx.timestamp,
			ctx.nonce,
		)
	}
}
impl Debug for Signer {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Signer")
			.field("credentials", &self.credentials)
			.field("policy", &self.policy)
			.finish_non_exhaustive()
	}
}

/// Formats an instant as the EdgeGrid timestamp `YYYYMMDDTHH:MM:SS+0000` in UTC.
pub fn format_timestamp(at: OffsetDateTime) -> Result<String, ConfigError> {
	let format = format_description!("[year][month][day]T[hour]:[minute]:[second]+0000");

	Ok(at.to_offset(UtcOffset::UTC).format(format)?)
}

/// Base64 (standard, padded) SHA-256 of the body; the empty body hashes like any other.
pub fn content_digest(body: &str) -> String {
	STANDARD.encode(Sha256::digest(body.as_bytes()))
}

fn hmac_base64(key: &str, message: &str) -> Result<String, ConfigError> {
	let mut mac = HmacSha256::new_from_slice(key.as_bytes()).map_err(|_| ConfigError::SigningKey)?;

	mac.update(message.as_bytes());

	Ok(STANDARD.encode(mac.finalize().into_bytes()))
}
