//! Signed client for the record-set endpoint of the DNS control-plane API.

// self
use crate::{
	_prelude::*,
	error::ConfigError,
	http::{DnsHttpClient, HttpRequest, HttpResponse},
	obs::{self, CallResult},
	record::{DesiredRecord, RecordKey, RecordSetBody},
	sign::{HttpMethod, SignableRequest, Signer},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

const JSON: &str = "application/json";

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport stack.
pub type ReqwestEdgeDnsClient = EdgeDnsClient<ReqwestHttpClient>;

/// One signed call against a record set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiOperation {
	/// `GET`; 200 means found, 404 means not found.
	Read,
	/// `POST`; 200 or 201 means created.
	Create,
	/// `PUT`; 200 or 201 means replaced.
	Update,
	/// `DELETE`; 200 or 204 means removed.
	Delete,
}
impl ApiOperation {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Read => "read",
			Self::Create => "create",
			Self::Update => "update",
			Self::Delete => "delete",
		}
	}

	/// HTTP method used for the operation.
	pub const fn method(self) -> HttpMethod {
		match self {
			Self::Read => HttpMethod::Get,
			Self::Create => HttpMethod::Post,
			Self::Update => HttpMethod::Put,
			Self::Delete => HttpMethod::Delete,
		}
	}

	/// Status codes the operation treats as a definite answer.
	pub const fn accepted_statuses(self) -> &'static [u16] {
		match self {
			Self::Read => &[200, 404],
			Self::Create | Self::Update => &[200, 201],
			Self::Delete => &[200, 204],
		}
	}

	/// Returns `true` when `status` is one of [`Self::accepted_statuses`].
	pub fn accepts(self, status: u16) -> bool {
		self.accepted_statuses().contains(&status)
	}
}
impl Display for ApiOperation {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Result of a read that the API answered definitively.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReadState {
	/// 404: the record set does not exist.
	NotFound,
	/// 200: the record set exists; the response carries its JSON.
	Found(HttpResponse),
}

/// Signs and sends record-set requests.
///
/// Each method issues exactly one request and awaits it; nothing is retried. Statuses outside
/// [`ApiOperation::accepted_statuses`] are returned as [`Error::Api`] with the raw body.
#[derive(Clone)]
pub struct EdgeDnsClient<C>
where
	C: ?Sized + DnsHttpClient,
{
	/// Transport used for every outbound request.
	pub http_client: Arc<C>,
	signer: Signer,
	base_url: Url,
	account_query: Option<String>,
}
impl<C> EdgeDnsClient<C>
where
	C: ?Sized + DnsHttpClient,
{
	/// Creates a client that sends to `https://{host}` using the caller-provided transport.
	pub fn with_http_client(
		signer: Signer,
		http_client: impl Into<Arc<C>>,
	) -> Result<Self, ConfigError> {
		let raw = format!("https://{}", signer.credentials().host());
		let base_url =
			Url::parse(&raw).map_err(|source| ConfigError::InvalidBaseUrl { url: raw, source })?;

		Ok(Self { http_client: http_client.into(), signer, base_url, account_query: None })
	}

	/// Overrides the URL requests are sent to.
	///
	/// The signed host stays the credential host; only the transport target changes.
	pub fn with_base_url(mut self, base_url: Url) -> Self {
		self.base_url = base_url;

		self
	}

	/// Scopes every request to another account.
	///
	/// The key is rendered once as `accountSwitchKey=<key>`, percent-encoded the way
	/// `encodeURIComponent` does, and used verbatim in both the URL and the signed path. A blank
	/// key clears the scoping.
	pub fn with_account_switch_key(mut self, key: impl AsRef<str>) -> Self {
		let key = key.as_ref().trim();

		self.account_query = (!key.is_empty()).then(|| {
			format!("accountSwitchKey={}", encode_uri_component(key))
		});

		self
	}

	/// Signer used for every request.
	pub fn signer(&self) -> &Signer {
		&self.signer
	}

	/// URL requests are sent to.
	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	/// Query string appended to every request, if account scoping is active.
	pub fn account_query(&self) -> Option<&str> {
		self.account_query.as_deref()
	}

	/// Reads the record set identified by `key`.
	pub async fn read_record(&self, key: &RecordKey) -> Result<ReadState> {
		let response = self.call(ApiOperation::Read, key.path(), String::new()).await?;

		Ok(match response.status {
			404 => ReadState::NotFound,
			_ => ReadState::Found(response),
		})
	}

	/// Creates the record set with the desired fields.
	pub async fn create_record(&self, record: &DesiredRecord) -> Result<HttpResponse> {
		let body = serde_json::to_string(&RecordSetBody::from(record)).map_err(ConfigError::from)?;

		self.call(ApiOperation::Create, record.path(), body).await
	}

	/// Replaces the record set with the desired fields.
	pub async fn update_record(&self, record: &DesiredRecord) -> Result<HttpResponse> {
		let body = serde_json::to_string(&RecordSetBody::from(record)).map_err(ConfigError::from)?;

		self.call(ApiOperation::Update, record.path(), body).await
	}

	/// Deletes the record set identified by `key`.
	pub async fn delete_record(&self, key: &RecordKey) -> Result<HttpResponse> {
		self.call(ApiOperation::Delete, key.path(), String::new()).await
	}

	/// Builds the signed request for one operation without sending it.
	pub fn prepare(
		&self,
		operation: ApiOperation,
		path: String,
		body: String,
	) -> Result<HttpRequest, ConfigError> {
		let mut request = SignableRequest::new(operation.method(), path);

		if let Some(query) = &self.account_query {
			request = request.with_query(query.as_str());
		}
		if operation.method().has_body() {
			request = request.with_body(body);
		}

		let token = self.signer.sign(&request)?;
		let url = format!("{}{}", self.base_url.as_str().trim_end_matches('/'), request.effective_path());

		Ok(HttpRequest {
			method: request.method,
			url,
			headers: vec![
				("Authorization", token.into_header_value()),
				("Content-Type", JSON.into()),
				("Accept", JSON.into()),
			],
			body: request.body,
		})
	}

	async fn call(&self, operation: ApiOperation, path: String, body: String) -> Result<HttpResponse> {
		let request = self.prepare(operation, path, body)?;
		let response = match self.http_client.execute(request).await {
			Ok(response) => response,
			Err(e) => {
				obs::record_api_call(operation, CallResult::TransportFailure);

				return Err(e.into());
			},
		};

		obs::trace_api_response(operation, response.status);

		if !operation.accepts(response.status) {
			obs::record_api_call(operation, CallResult::Rejected);

			return Err(Error::Api { operation, status: response.status, body: response.body });
		}

		obs::record_api_call(operation, CallResult::Accepted);

		Ok(response)
	}
}
#[cfg(feature = "reqwest")]
impl EdgeDnsClient<ReqwestHttpClient> {
	/// Creates a client backed by a default reqwest transport.
	pub fn new(signer: Signer) -> Result<Self, ConfigError> {
		Self::with_http_client(signer, ReqwestHttpClient::default())
	}
}
impl<C> Debug for EdgeDnsClient<C>
where
	C: ?Sized + DnsHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("EdgeDnsClient")
			.field("signer", &self.signer)
			.field("base_url", &self.base_url.as_str())
			.field("account_query", &self.account_query)
			.finish_non_exhaustive()
	}
}

/// Percent-encodes a query value, leaving the `encodeURIComponent` marks `!'()*` literal.
fn encode_uri_component(raw: &str) -> String {
	const MARKS: [(&str, &str); 5] =
		[("%21", "!"), ("%27", "'"), ("%28", "("), ("%29", ")"), ("%2A", "*")];

	MARKS
		.iter()
		.fold(urlencoding::encode(raw).into_owned(), |encoded, (escape, mark)| encoded.replace(escape, mark))
}
