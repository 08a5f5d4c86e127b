//! Environment-variable [`CredentialStore`] following the `AKAMAI_*` naming convention.

// std
use std::env;
// self
use crate::{
	_prelude::*,
	auth::CredentialName,
	store::{CredentialStore, CredentialStoreError},
};

/// Reads credentials from `{PREFIX}_CLIENT_TOKEN`, `{PREFIX}_CLIENT_SECRET`,
/// `{PREFIX}_ACCESS_TOKEN`, and `{PREFIX}_HOST`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvCredentialStore {
	prefix: String,
}
impl EnvCredentialStore {
	/// Prefix used when none is supplied.
	pub const DEFAULT_PREFIX: &'static str = "AKAMAI";

	/// Creates a store reading variables under a custom prefix.
	pub fn with_prefix(prefix: impl Into<String>) -> Self {
		Self { prefix: prefix.into() }
	}

	/// Returns the variable name consulted for `name`.
	pub fn variable(&self, name: CredentialName) -> String {
		format!("{}_{}", self.prefix, name.as_str().to_ascii_uppercase())
	}
}
impl Default for EnvCredentialStore {
	fn default() -> Self {
		Self::with_prefix(Self::DEFAULT_PREFIX)
	}
}
impl CredentialStore for EnvCredentialStore {
	fn get_credential(&self, name: CredentialName) -> Result<String, CredentialStoreError> {
		let variable = self.variable(name);

		match env::var(&variable) {
			Ok(value) => Ok(value),
			Err(env::VarError::NotPresent) =>
				Err(CredentialStoreError::missing(name, format!("environment (`{variable}`)"))),
			Err(env::VarError::NotUnicode(_)) => Err(CredentialStoreError::Backend {
				message: format!("`{variable}` is not valid unicode"),
			}),
		}
	}
}
