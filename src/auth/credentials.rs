//! The four EdgeGrid credentials and the names they are stored under.

// self
use crate::{_prelude::*, auth::Secret, error::ConfigError, store::CredentialStore};

/// Names of the credential fields a [`CredentialStore`] must supply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CredentialName {
	/// Client token identifying the API client.
	ClientToken,
	/// Client secret used to derive the signing key.
	ClientSecret,
	/// Access token granting the client its permissions.
	AccessToken,
	/// API host the credentials are issued for.
	Host,
}
impl CredentialName {
	/// Every credential name, in load order.
	pub const ALL: [Self; 4] = [Self::ClientToken, Self::ClientSecret, Self::AccessToken, Self::Host];

	/// Returns the key used in `.edgerc` files and memory stores.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::ClientToken => "client_token",
			Self::ClientSecret => "client_secret",
			Self::AccessToken => "access_token",
			Self::Host => "host",
		}
	}
}
impl Display for CredentialName {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Immutable EdgeGrid credential set.
///
/// Values are validated once at construction so the signer never hashes with a
/// blank field. The secret fields are wrapped in [`Secret`] and never appear in
/// `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
	client_token: String,
	client_secret: Secret,
	access_token: Secret,
	host: String,
}
impl Credentials {
	/// Validates and wraps the four credential values.
	///
	/// The host may be given with an `https://` prefix or a trailing `/`; both are stripped.
	pub fn new(
		client_token: impl Into<String>,
		client_secret: impl Into<String>,
		access_token: impl Into<String>,
		host: impl Into<String>,
	) -> Result<Self, ConfigError> {
		let client_token = client_token.into().trim().to_owned();
		let client_secret = Secret::new(client_secret.into().trim());
		let access_token = Secret::new(access_token.into().trim());
		let host = normalize_host(&host.into());

		if client_token.is_empty() {
			return Err(ConfigError::MissingCredential { name: CredentialName::ClientToken.as_str() });
		}
		if client_secret.is_blank() {
			return Err(ConfigError::MissingCredential {
				name: CredentialName::ClientSecret.as_str(),
			});
		}
		if access_token.is_blank() {
			return Err(ConfigError::MissingCredential { name: CredentialName::AccessToken.as_str() });
		}
		if host.is_empty() {
			return Err(ConfigError::MissingCredential { name: CredentialName::Host.as_str() });
		}

		Ok(Self { client_token, client_secret, access_token, host })
	}

	/// Loads all four credentials from a store, failing on the first missing one.
	pub fn from_store(store: &dyn CredentialStore) -> Result<Self, ConfigError> {
		let client_token = store.get_credential(CredentialName::ClientToken)?;
		let client_secret = store.get_credential(CredentialName::ClientSecret)?;
		let access_token = store.get_credential(CredentialName::AccessToken)?;
		let host = store.get_credential(CredentialName::Host)?;

		Self::new(client_token, client_secret, access_token, host)
	}

	/// Client token; safe to log.
	pub fn client_token(&self) -> &str {
		&self.client_token
	}

	/// Client secret used only to derive signing keys.
	pub fn client_secret(&self) -> &Secret {
		&self.client_secret
	}

	/// Access token embedded in every authorization header.
	pub fn access_token(&self) -> &Secret {
		&self.access_token
	}

	/// API host without scheme.
	pub fn host(&self) -> &str {
		&self.host
	}
}
impl Debug for Credentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credentials")
			.field("client_token", &self.client_token)
			.field("client_secret", &self.client_secret)
			.field("access_token", &self.access_token)
			.field("host", &self.host)
			.finish()
	}
}

fn normalize_host(raw: &str) -> String {
	let trimmed = raw.trim();
	let without_scheme = trimmed.strip_prefix("https://").unwrap_or(trimmed);

	without_scheme.trim_end_matches('/').to_owned()
}
