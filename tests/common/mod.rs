//! Fixtures shared by the integration tests.

#![allow(dead_code)]

// std
use std::{collections::VecDeque, sync::Arc};
// crates.io
use parking_lot::Mutex;
use time::macros::datetime;
// self
use edgegrid_dns::{
	auth::Credentials,
	client::EdgeDnsClient,
	error::TransportError,
	http::{DnsHttpClient, HttpFuture, HttpRequest, HttpResponse},
	reconcile::Reconciler,
	record::DesiredRecord,
	sign::{ContentDigestPolicy, FixedClock, FixedNonceSource, Signer},
};

pub const CLIENT_TOKEN: &str = "akab-client-token-xxx-xxxxxxxxxxxxxxxx";
pub const CLIENT_SECRET: &str = "SOME/client+secret=";
pub const ACCESS_TOKEN: &str = "akab-access-token-xxx-xxxxxxxxxxxxxxxx";
pub const HOST: &str = "akab-host-xxx.luna.akamaiapis.net";
pub const NONCE: u128 = 0x0123_4567_89ab_cdef_0123_4567_89ab_cdef;
pub const RECORD_PATH: &str = "/config-dns/v2/zones/example.com/names/www.example.com/types/A";
pub const RECORD_BODY: &str =
	r#"{"name":"www.example.com","type":"A","ttl":300,"rdata":["192.0.2.10"]}"#;

pub fn credentials() -> Credentials {
	Credentials::new(CLIENT_TOKEN, CLIENT_SECRET, ACCESS_TOKEN, HOST)
		.expect("Credential fixture should be valid.")
}

/// Signer pinned to 2023-10-30 12:34:56 UTC and a constant nonce.
pub fn fixed_signer(policy: ContentDigestPolicy) -> Signer {
	Signer::new(credentials(), policy)
		.with_clock(FixedClock(datetime!(2023-10-30 12:34:56 UTC)))
		.with_nonce_source(FixedNonceSource(NONCE))
}

pub fn desired() -> DesiredRecord {
	DesiredRecord::builder("example.com", "www.example.com")
		.address("192.0.2.10")
		.build()
		.expect("Desired record fixture should be valid.")
}

/// One scripted transport reply.
pub enum Reply {
	Status(u16, &'static str),
	NetworkFailure,
}

/// In-process transport that answers from a script and records every request.
#[derive(Default)]
pub struct ScriptedHttpClient {
	script: Mutex<VecDeque<Reply>>,
	requests: Mutex<Vec<HttpRequest>>,
}
impl ScriptedHttpClient {
	pub fn new(script: impl IntoIterator<Item = Reply>) -> Arc<Self> {
		Arc::new(Self { script: Mutex::new(script.into_iter().collect()), requests: Mutex::default() })
	}

	pub fn requests(&self) -> Vec<HttpRequest> {
		self.requests.lock().clone()
	}

	/// `METHOD path` for each request, in send order.
	pub fn calls(&self) -> Vec<String> {
		self.requests
			.lock()
			.iter()
			.map(|r| {
				let path = r.url.strip_prefix(&format!("https://{HOST}")).unwrap_or(&r.url);

				format!("{} {path}", r.method)
			})
			.collect()
	}

	pub fn remaining(&self) -> usize {
		self.script.lock().len()
	}
}
impl DnsHttpClient for ScriptedHttpClient {
	fn execute(&self, request: HttpRequest) -> HttpFuture<'_, HttpResponse> {
		self.requests.lock().push(request);

		let reply = self.script.lock().pop_front();

		Box::pin(async move {
			match reply.expect("Transport script should cover every request.") {
				Reply::Status(status, body) => Ok(HttpResponse::new(status, body)),
				Reply::NetworkFailure => Err(TransportError::network(std::io::Error::other(
					"connection reset by peer",
				))),
			}
		})
	}
}

/// Reqwest transport that accepts the self-signed certificates served by `httpmock`.
#[cfg(feature = "reqwest")]
pub fn test_reqwest_http_client() -> edgegrid_dns::http::ReqwestHttpClient {
	let client = edgegrid_dns::reqwest::Client::builder()
		.danger_accept_invalid_certs(true)
		.danger_accept_invalid_hostnames(true)
		.build()
		.expect("Failed to build insecure Reqwest client for tests.");

	edgegrid_dns::http::ReqwestHttpClient::with_client(client)
}

pub fn reconciler(http_client: &Arc<ScriptedHttpClient>) -> Reconciler<ScriptedHttpClient> {
	let client = EdgeDnsClient::with_http_client(
		fixed_signer(ContentDigestPolicy::PostOnly),
		Arc::clone(http_client),
	)
	.expect("Client should build for the fixture host.");

	Reconciler::new(client)
}
