//! Which methods bind a body digest into the signed text.

// self
use crate::{_prelude::*, sign::HttpMethod};

/// Content digest inclusion policy.
///
/// The two variants produce different signatures for PUT requests and are not
/// interchangeable: the remote verifier accepts exactly one of them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentDigestPolicy {
	/// Only POST carries a digest; GET, PUT, and DELETE leave the field empty.
	#[default]
	PostOnly,
	/// POST and PUT carry a digest; GET and DELETE leave the field empty.
	PostAndPut,
}
impl ContentDigestPolicy {
	/// Returns `true` when requests using `method` must include a content digest.
	pub const fn includes(self, method: HttpMethod) -> bool {
		match (self, method) {
			(_, HttpMethod::Post) => true,
			(Self::PostAndPut, HttpMethod::Put) => true,
			_ => false,
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn policies_differ_only_on_put() {
		for method in [HttpMethod::Get, HttpMethod::Post, HttpMethod::Delete] {
			assert_eq!(
				ContentDigestPolicy::PostOnly.includes(method),
				ContentDigestPolicy::PostAndPut.includes(method),
				"{method} should be treated the same by both policies.",
			);
		}

		assert!(!ContentDigestPolicy::PostOnly.includes(HttpMethod::Put));
		assert!(ContentDigestPolicy::PostAndPut.includes(HttpMethod::Put));
	}

	#[test]
	fn serde_uses_snake_case_labels() {
		let policy: ContentDigestPolicy =
			serde_json::from_str("\"post_and_put\"").expect("Policy label should deserialize.");

		assert_eq!(policy, ContentDigestPolicy::PostAndPut);
	}
}
