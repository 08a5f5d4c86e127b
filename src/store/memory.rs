//! Thread-safe in-memory [`CredentialStore`] for embedding and tests.

// self
use crate::{
	_prelude::*,
	auth::CredentialName,
	store::{CredentialStore, CredentialStoreError},
};

type CredentialMap = Arc<RwLock<HashMap<CredentialName, String>>>;

/// Storage backend that keeps credential values in-process.
#[derive(Clone, Default)]
pub struct MemoryCredentialStore(CredentialMap);
impl MemoryCredentialStore {
	/// Inserts or replaces a credential value.
	pub fn insert(&self, name: CredentialName, value: impl Into<String>) {
		self.0.write().insert(name, value.into());
	}

	/// Builder-style variant of [`MemoryCredentialStore::insert`].
	pub fn with(self, name: CredentialName, value: impl Into<String>) -> Self {
		self.insert(name, value);

		self
	}

	/// Removes a credential value, returning it if present.
	pub fn remove(&self, name: CredentialName) -> Option<String> {
		self.0.write().remove(&name)
	}
}
impl CredentialStore for MemoryCredentialStore {
	fn get_credential(&self, name: CredentialName) -> Result<String, CredentialStoreError> {
		self.0.read().get(&name).cloned().ok_or_else(|| CredentialStoreError::missing(name, "memory"))
	}
}
impl Debug for MemoryCredentialStore {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let names = self.0.read().keys().map(|name| name.as_str()).collect::<Vec<_>>();

		f.debug_struct("MemoryCredentialStore").field("names", &names).finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn insert_fetch_and_remove() {
		let store = MemoryCredentialStore::default().with(CredentialName::Host, "h.example.net");

		assert_eq!(
			store.get_credential(CredentialName::Host).expect("Host should be stored."),
			"h.example.net"
		);
		assert_eq!(store.remove(CredentialName::Host).as_deref(), Some("h.example.net"));
		assert_eq!(
			store.get_credential(CredentialName::Host),
			Err(CredentialStoreError::Missing { name: "host", store: "memory".into() })
		);
	}

	#[test]
	fn debug_lists_names_only() {
		let store = MemoryCredentialStore::default().with(CredentialName::ClientSecret, "hidden");
		let rendered = format!("{store:?}");

		assert!(rendered.contains("client_secret"));
		assert!(!rendered.contains("hidden"));
	}
}
