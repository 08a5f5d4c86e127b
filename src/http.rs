//! Transport contract for signed DNS API calls.
//!
//! The crate depends on an HTTP stack only through [`DnsHttpClient`]. Callers provide an
//! implementation (typically behind `Arc<T>`) that executes one fully prepared
//! [`HttpRequest`] and reports the status code and body. Transport failures are surfaced as
//! [`TransportError`]; every HTTP status, including 4xx/5xx, is a successful execution and is
//! classified later by [`EdgeDnsClient`](crate::client::EdgeDnsClient).

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// self
use crate::{_prelude::*, error::TransportError, sign::HttpMethod};

/// Boxed future returned by [`DnsHttpClient::execute`].
pub type HttpFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, TransportError>> + 'a + Send>>;

/// Fully signed request ready to hand to a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
	/// Request method.
	pub method: HttpMethod,
	/// Absolute URL including any query string.
	pub url: String,
	/// Header name/value pairs in send order.
	pub headers: Vec<(&'static str, String)>,
	/// Request body; empty for bodiless methods.
	pub body: String,
}
impl HttpRequest {
	/// Value of the first header named `name` (ASCII case-insensitive).
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.iter().find(|(k, _)| k.eq_ignore_ascii_case(name)).map(|(_, v)| v.as_str())
	}
}

/// Status code and raw body returned by the API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response body as text.
	pub body: String,
}
impl HttpResponse {
	/// Creates a response value.
	pub fn new(status: u16, body: impl Into<String>) -> Self {
		Self { status, body: body.into() }
	}
}

/// Abstraction over HTTP transports capable of executing signed DNS API requests.
///
/// Implementations must be `Send + Sync + 'static` so one transport can back several
/// clients, and the returned future must be `Send`.
pub trait DnsHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Executes `request` and returns the status code and body.
	fn execute(&self, request: HttpRequest) -> HttpFuture<'_, HttpResponse>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// The default client is built by reqwest with rustls. Supply a custom [`ReqwestClient`]
/// through [`ReqwestHttpClient::with_client`] to control timeouts or proxies; the core never
/// imposes a timeout of its own.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl DnsHttpClient for ReqwestHttpClient {
	fn execute(&self, request: HttpRequest) -> HttpFuture<'_, HttpResponse> {
		Box::pin(async move {
			let method = match request.method {
				HttpMethod::Get => reqwest::Method::GET,
				HttpMethod::Post => reqwest::Method::POST,
				HttpMethod::Put => reqwest::Method::PUT,
				HttpMethod::Delete => reqwest::Method::DELETE,
			};
			let mut builder = self.0.request(method, &request.url);

			for (name, value) in &request.headers {
				builder = builder.header(*name, value);
			}
			if request.method.has_body() {
				builder = builder.body(request.body);
			}

			let response = builder.send().await?;
			let status = response.status().as_u16();
			let body = response.text().await?;

			Ok(HttpResponse { status, body })
		})
	}
}
