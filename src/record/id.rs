//! Validated path segments identifying one record set.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

macro_rules! def_id {
	($name:ident, $doc:literal, $kind:literal) => {
		#[doc = $doc]
		#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(try_from = "String", into = "String")]
		pub struct $name(String);
		impl $name {
			/// Creates a new identifier after validation.
			pub fn new(value: impl AsRef<str>) -> Result<Self, IdentifierError> {
				let view = value.as_ref();

				validate_view($kind, view)?;

				Ok(Self(view.to_owned()))
			}
		}
		impl Deref for $name {
			type Target = str;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}
		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				&self.0
			}
		}
		impl From<$name> for String {
			fn from(value: $name) -> Self {
				value.0
			}
		}
		impl TryFrom<String> for $name {
			type Error = IdentifierError;

			fn try_from(value: String) -> Result<Self, Self::Error> {
				validate_view($kind, &value)?;

				Ok(Self(value))
			}
		}
		impl Borrow<str> for $name {
			fn borrow(&self) -> &str {
				&self.0
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				write!(f, concat!($kind, "({})"), self.0)
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(&self.0)
			}
		}
		impl FromStr for $name {
			type Err = IdentifierError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Self::new(s)
			}
		}
	};
}

const IDENTIFIER_MAX_LEN: usize = 253;
const RESERVED_CHARS: [char; 3] = ['/', '?', '#'];

/// Error returned when identifier validation fails.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum IdentifierError {
	/// The identifier was empty.
	#[error("{kind} cannot be empty.")]
	Empty {
		/// Kind of identifier (zone, hostname, record type).
		kind: &'static str,
	},
	/// The identifier contains whitespace characters.
	#[error("{kind} contains whitespace.")]
	ContainsWhitespace {
		/// Kind of identifier (zone, hostname, record type).
		kind: &'static str,
	},
	/// The identifier contains a character that would alter the resource path.
	#[error("{kind} contains the reserved character `{ch}`.")]
	ReservedCharacter {
		/// Kind of identifier (zone, hostname, record type).
		kind: &'static str,
		/// Offending character.
		ch: char,
	},
	/// The identifier exceeded the allowed character count.
	#[error("{kind} exceeds {max} characters.")]
	TooLong {
		/// Kind of identifier (zone, hostname, record type).
		kind: &'static str,
		/// Maximum permitted character count.
		max: usize,
	},
}

def_id! { Zone, "DNS zone the record belongs to, e.g. `example.com`.", "Zone" }
def_id! { Hostname, "Fully qualified record owner name, e.g. `www.example.com`.", "Hostname" }
def_id! { RecordType, "Record type token, e.g. `A` or `AAAA`.", "RecordType" }

fn validate_view(kind: &'static str, view: &str) -> Result<(), IdentifierError> {
	if view.is_empty() {
		return Err(IdentifierError::Empty { kind });
	}
	if view.chars().any(char::is_whitespace) {
		return Err(IdentifierError::ContainsWhitespace { kind });
	}
	if let Some(ch) = view.chars().find(|c| RESERVED_CHARS.contains(c)) {
		return Err(IdentifierError::ReservedCharacter { kind, ch });
	}
	if view.len() > IDENTIFIER_MAX_LEN {
		return Err(IdentifierError::TooLong { kind, max: IDENTIFIER_MAX_LEN });
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn identifiers_reject_whitespace_and_path_characters() {
		assert!(Zone::new(" example.com").is_err(), "Leading whitespace must be rejected.");
		assert_eq!(
			Hostname::new("www.example.com/../x"),
			Err(IdentifierError::ReservedCharacter { kind: "Hostname", ch: '/' })
		);
		assert_eq!(
			RecordType::new("A?x=1"),
			Err(IdentifierError::ReservedCharacter { kind: "RecordType", ch: '?' })
		);
		assert_eq!(RecordType::new(""), Err(IdentifierError::Empty { kind: "RecordType" }));

		let zone = Zone::new("example.com").expect("Zone fixture should be considered valid.");

		assert_eq!(zone.as_ref(), "example.com");
		assert_eq!(format!("{zone:?}"), "Zone(example.com)");
	}

	#[test]
	fn serde_round_trip_enforces_validation() {
		let hostname: Hostname = serde_json::from_str("\"www.example.com\"")
			.expect("Hostname should deserialize successfully.");

		assert_eq!(hostname.as_ref(), "www.example.com");
		assert!(serde_json::from_str::<Hostname>("\"with space\"").is_err());
	}

	#[test]
	fn length_limit_is_inclusive() {
		Zone::new("a".repeat(IDENTIFIER_MAX_LEN)).expect("Exact length should succeed.");

		assert!(Zone::new("a".repeat(IDENTIFIER_MAX_LEN + 1)).is_err());
	}
}
