//! Deployment settings that sit beside the credentials.

// self
use crate::{
	_prelude::*,
	auth::Credentials,
	client::EdgeDnsClient,
	error::ConfigError,
	http::DnsHttpClient,
	reconcile::Reconciler,
	sign::{ContentDigestPolicy, Signer},
};

/// Serde-loadable reconciler settings; every field has a default.
///
/// ```
/// use edgegrid_dns::{config::EdgeDnsConfig, sign::ContentDigestPolicy};
///
/// let config: EdgeDnsConfig =
/// 	serde_json::from_str(r#"{"digest_policy":"post_and_put","verify_deletion":false}"#)
/// 		.expect("Config should parse.");
///
/// assert_eq!(config.digest_policy, ContentDigestPolicy::PostAndPut);
/// assert!(!config.verify_deletion);
/// assert!(config.account_switch_key.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeDnsConfig {
	/// Account to act on when the credentials belong to a parent account.
	pub account_switch_key: Option<String>,
	/// Which methods bind a body digest into the signature.
	pub digest_policy: ContentDigestPolicy,
	/// Whether ensure-absent re-reads the record after deleting it.
	pub verify_deletion: bool,
	/// Transport target; `https://{host}` when unset.
	pub base_url: Option<Url>,
}
impl EdgeDnsConfig {
	/// Sets the account switch key.
	pub fn with_account_switch_key(mut self, key: impl Into<String>) -> Self {
		self.account_switch_key = Some(key.into());

		self
	}

	/// Sets the digest policy.
	pub fn with_digest_policy(mut self, policy: ContentDigestPolicy) -> Self {
		self.digest_policy = policy;

		self
	}

	/// Enables or disables the post-delete verification read.
	pub fn with_verify_deletion(mut self, verify: bool) -> Self {
		self.verify_deletion = verify;

		self
	}

	/// Overrides the transport target.
	pub fn with_base_url(mut self, base_url: Url) -> Self {
		self.base_url = Some(base_url);

		self
	}

	/// Builds the signer described by these settings.
	pub fn signer(&self, credentials: Credentials) -> Signer {
		Signer::new(credentials, self.digest_policy)
	}

	/// Builds a client around `signer` and `http_client`, applying the base URL and account key.
	pub fn client<C>(
		&self,
		signer: Signer,
		http_client: impl Into<Arc<C>>,
	) -> Result<EdgeDnsClient<C>, ConfigError>
	where
		C: ?Sized + DnsHttpClient,
	{
		let mut client = EdgeDnsClient::with_http_client(signer, http_client)?;

		if let Some(base_url) = &self.base_url {
			client = client.with_base_url(base_url.clone());
		}
		if let Some(key) = &self.account_switch_key {
			client = client.with_account_switch_key(key);
		}

		Ok(client)
	}

	/// Builds a reconciler from credentials and a transport.
	pub fn reconciler<C>(
		&self,
		credentials: Credentials,
		http_client: impl Into<Arc<C>>,
	) -> Result<Reconciler<C>, ConfigError>
	where
		C: ?Sized + DnsHttpClient,
	{
		let client = self.client(self.signer(credentials), http_client)?;

		Ok(Reconciler::new(client).with_verify_deletion(self.verify_deletion))
	}
}
impl Default for EdgeDnsConfig {
	fn default() -> Self {
		Self {
			account_switch_key: None,
			digest_policy: ContentDigestPolicy::default(),
			verify_deletion: true,
			base_url: None,
		}
	}
}
