//! JSON shapes exchanged with the record-set endpoint.

// self
use crate::{_prelude::*, record::DesiredRecord};

/// Request body for create and update calls.
///
/// Fields serialize in the order `name, type, ttl, rdata`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RecordSetBody<'a> {
	/// Owner name.
	pub name: &'a str,
	/// Record type.
	#[serde(rename = "type")]
	pub record_type: &'a str,
	/// TTL in seconds.
	pub ttl: u32,
	/// Addresses in caller order.
	pub rdata: &'a [String],
}
impl<'a> From<&'a DesiredRecord> for RecordSetBody<'a> {
	fn from(record: &'a DesiredRecord) -> Self {
		Self {
			name: &record.key.hostname,
			record_type: &record.key.record_type,
			ttl: record.ttl,
			rdata: &record.addresses,
		}
	}
}

/// Remote record state parsed from a successful read.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ObservedRecord {
	/// Addresses currently published; empty when the response omits `rdata`.
	#[serde(default, rename = "rdata")]
	pub addresses: Vec<String>,
	/// Published TTL; `None` when the response omits it.
	#[serde(default)]
	pub ttl: Option<u32>,
}
impl ObservedRecord {
	/// Parses a read response body, keeping the JSON path of the first bad field.
	pub fn from_json(body: &str) -> Result<Self, serde_path_to_error::Error<serde_json::Error>> {
		let mut de = serde_json::Deserializer::from_str(body);

		serde_path_to_error::deserialize(&mut de)
	}

	/// Returns `true` when a desired address is missing remotely or the TTL differs.
	///
	/// Extra remote addresses are ignored.
	pub fn needs_update(&self, desired: &DesiredRecord) -> bool {
		let missing_address = desired.addresses.iter().any(|a| !self.addresses.contains(a));

		missing_address || self.ttl != Some(desired.ttl)
	}
}
