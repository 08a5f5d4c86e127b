//! Demonstrates a full reconcile against a local mock of the record-set endpoint: the read
//! finds a stale TTL, so the reconciler replaces the record and reports the update.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use edgegrid_dns::{
	auth::{CredentialName, Credentials},
	config::EdgeDnsConfig,
	http::ReqwestHttpClient,
	reconcile::{ReconcileMode, ReqwestReconciler},
	record::DesiredRecord,
	reqwest,
	store::MemoryCredentialStore,
	url::Url,
};

const RECORD_PATH: &str = "/config-dns/v2/zones/example.com/names/www.example.com/types/A";

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let read_mock = server
		.mock_async(|when, then| {
			when.method(GET).path(RECORD_PATH).header_exists("authorization");
			then.status(200).header("content-type", "application/json").body(
				r#"{"name":"www.example.com","type":"A","ttl":60,"rdata":["192.0.2.10"]}"#,
			);
		})
		.await;
	let update_mock = server
		.mock_async(|when, then| {
			when.method(PUT).path(RECORD_PATH);
			then.status(200).header("content-type", "application/json").body(
				r#"{"name":"www.example.com","type":"A","ttl":300,"rdata":["192.0.2.10"]}"#,
			);
		})
		.await;
	let store = MemoryCredentialStore::default()
		.with(CredentialName::ClientToken, "akab-demo-client-token")
		.with(CredentialName::ClientSecret, "demo/secret+value=")
		.with(CredentialName::AccessToken, "akab-demo-access-token")
		.with(CredentialName::Host, "akab-demo.luna.akamaiapis.net");
	let credentials = Credentials::from_store(&store)?;
	// The mock server presents a self-signed certificate.
	let mock_tls_client = reqwest::Client::builder()
		.danger_accept_invalid_certs(true)
		.danger_accept_invalid_hostnames(true)
		.build()?;
	let reconciler: ReqwestReconciler = EdgeDnsConfig::default()
		.with_base_url(Url::parse(&server.base_url())?)
		.reconciler(credentials, ReqwestHttpClient::with_client(mock_tls_client))?;
	let desired = DesiredRecord::builder("example.com", "www.example.com")
		.address("192.0.2.10")
		.ttl(300)
		.build()?;
	let outcome = reconciler.reconcile(&desired, ReconcileMode::FullReconcile).await;

	println!("{outcome}");
	println!("{}", serde_json::to_string_pretty(&outcome)?);

	read_mock.assert_async().await;
	update_mock.assert_async().await;

	Ok(())
}
