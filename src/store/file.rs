//! `.edgerc`-backed [`CredentialStore`] for workstation and CI deployments.

// std
use std::{
	fs,
	path::{Path, PathBuf},
};
// self
use crate::{
	_prelude::*,
	auth::CredentialName,
	store::{CredentialStore, CredentialStoreError},
};

/// Reads one `[section]` of an `.edgerc` file into memory.
///
/// The file is parsed eagerly on [`EdgercStore::open`]; later edits are not observed.
#[derive(Clone)]
pub struct EdgercStore {
	path: PathBuf,
	section: String,
	values: HashMap<String, String>,
}
impl EdgercStore {
	/// Section read when none is specified.
	pub const DEFAULT_SECTION: &'static str = "default";

	/// Opens `path` and loads the requested section.
	pub fn open(path: impl Into<PathBuf>, section: &str) -> Result<Self, CredentialStoreError> {
		let path = path.into();
		let contents = fs::read_to_string(&path).map_err(|e| CredentialStoreError::Backend {
			message: format!("Failed to read {}: {e}", path.display()),
		})?;
		let values = parse_section(&contents, section)?.ok_or_else(|| {
			CredentialStoreError::Backend {
				message: format!("Section [{section}] not found in {}", path.display()),
			}
		})?;

		Ok(Self { path, section: section.to_owned(), values })
	}

	/// Parses an in-memory `.edgerc` document; useful when the file comes from a secret manager.
	pub fn from_contents(contents: &str, section: &str) -> Result<Self, CredentialStoreError> {
		let values = parse_section(contents, section)?.ok_or_else(|| {
			CredentialStoreError::Backend { message: format!("Section [{section}] not found") }
		})?;

		Ok(Self { path: PathBuf::new(), section: section.to_owned(), values })
	}

	/// Path the store was loaded from (empty for in-memory documents).
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Section the store was loaded from.
	pub fn section(&self) -> &str {
		&self.section
	}
}
impl CredentialStore for EdgercStore {
	fn get_credential(&self, name: CredentialName) -> Result<String, CredentialStoreError> {
		self.values.get(name.as_str()).cloned().ok_or_else(|| {
			CredentialStoreError::missing(name, format!("edgerc [{}]", self.section))
		})
	}
}
impl Debug for EdgercStore {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("EdgercStore")
			.field("path", &self.path)
			.field("section", &self.section)
			.field("keys", &self.values.keys().collect::<Vec<_>>())
			.finish()
	}
}

/// Returns the key/value pairs of `section`, or `None` when the header never appears.
fn parse_section(
	contents: &str,
	section: &str,
) -> Result<Option<HashMap<String, String>>, CredentialStoreError> {
	let mut current: Option<&str> = None;
	let mut found = false;
	let mut values = HashMap::new();

	for (idx, raw) in contents.lines().enumerate() {
		let line = raw.trim();

		if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
			continue;
		}
		if let Some(header) = line.strip_prefix('[') {
			let name = header.strip_suffix(']').ok_or_else(|| CredentialStoreError::Parse {
				line: idx + 1,
				message: "unterminated section header".into(),
			})?;
			let name = name.trim();

			found |= name == section;
			current = Some(name);

			continue;
		}

		let (key, value) = line.split_once('=').ok_or_else(|| CredentialStoreError::Parse {
			line: idx + 1,
			message: "expected `key = value`".into(),
		})?;

		if current == Some(section) {
			values.insert(key.trim().to_owned(), unquote(value.trim()).to_owned());
		}
	}

	Ok(found.then_some(values))
}

fn unquote(value: &str) -> &str {
	for quote in ['"', '\''] {
		if let Some(inner) = value.strip_prefix(quote).and_then(|v| v.strip_suffix(quote)) {
			return inner;
		}
	}

	value
}
