//! Credential storage contracts and built-in store implementations.
//!
//! A [`CredentialStore`] is read once per process or session to build
//! [`Credentials`](crate::auth::Credentials); nothing in the crate writes back to it.

pub mod env;
pub mod file;
pub mod memory;

pub use env::EnvCredentialStore;
pub use file::EdgercStore;
pub use memory::MemoryCredentialStore;

// self
use crate::{_prelude::*, auth::CredentialName};

/// Lookup contract implemented by credential sources.
pub trait CredentialStore
where
	Self: Send + Sync,
{
	/// Returns the raw value stored under `name`, failing if it is unset.
	fn get_credential(&self, name: CredentialName) -> Result<String, CredentialStoreError>;
}

/// Error type produced by [`CredentialStore`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum CredentialStoreError {
	/// The store holds no value for the requested credential.
	#[error("Credential `{name}` is not set in the {store} store.")]
	Missing {
		/// Credential field name.
		name: &'static str,
		/// Human-readable store label.
		store: String,
	},
	/// Backend-level failure while reading the store.
	#[error("Credential store backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
	/// The store contents could not be parsed.
	#[error("Credential store parse error at line {line}: {message}.")]
	Parse {
		/// One-based line number.
		line: usize,
		/// Human-readable error payload.
		message: String,
	},
}
impl CredentialStoreError {
	pub(crate) fn missing(name: CredentialName, store: impl Into<String>) -> Self {
		Self::Missing { name: name.as_str(), store: store.into() }
	}
}
