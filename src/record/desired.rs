//! Desired record state supplied by callers, plus its builder.

// self
use crate::{
	_prelude::*,
	record::{Hostname, IdentifierError, RecordType, Zone},
};

/// Path prefix of the record-set resource.
const RECORD_SET_ROOT: &str = "/config-dns/v2/zones";

/// Errors raised while constructing or validating a [`DesiredRecord`].
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum RecordError {
	/// A zone, hostname, or record type failed validation.
	#[error(transparent)]
	Identifier(#[from] IdentifierError),
	/// At least one address is required.
	#[error("Desired record must list at least one address.")]
	NoAddresses,
	/// An address entry was blank.
	#[error("Desired record address #{index} is blank.")]
	BlankAddress {
		/// Zero-based position of the blank entry.
		index: usize,
	},
	/// TTL must be positive.
	#[error("Desired record TTL must be positive.")]
	ZeroTtl,
}

/// Identity of one remote record set: the zone/hostname/type triple.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordKey {
	/// Zone the record lives in.
	pub zone: Zone,
	/// Owner name of the record.
	pub hostname: Hostname,
	/// Record type.
	#[serde(rename = "type")]
	pub record_type: RecordType,
}
impl RecordKey {
	/// Creates a key from already validated identifiers.
	pub fn new(zone: Zone, hostname: Hostname, record_type: RecordType) -> Self {
		Self { zone, hostname, record_type }
	}

	/// Validates raw strings and creates a key.
	pub fn parse(zone: &str, hostname: &str, record_type: &str) -> Result<Self, RecordError> {
		Ok(Self::new(Zone::new(zone)?, Hostname::new(hostname)?, RecordType::new(record_type)?))
	}

	/// Resource path `/config-dns/v2/zones/{zone}/names/{hostname}/types/{type}`.
	pub fn path(&self) -> String {
		format!(
			"{RECORD_SET_ROOT}/{}/names/{}/types/{}",
			self.zone, self.hostname, self.record_type
		)
	}
}
impl Display for RecordKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "{} {} in {}", self.hostname, self.record_type, self.zone)
	}
}

/// Target state for one record set; immutable input to a reconciliation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDesiredRecord")]
pub struct DesiredRecord {
	/// Record identity.
	#[serde(flatten)]
	pub key: RecordKey,
	/// Addresses (rdata) in caller order; never empty.
	pub addresses: Vec<String>,
	/// TTL in seconds; always positive.
	pub ttl: u32,
}
impl DesiredRecord {
	/// Record type used when the builder is not told otherwise.
	pub const DEFAULT_RECORD_TYPE: &'static str = "A";
	/// TTL used when the builder is not told otherwise.
	pub const DEFAULT_TTL: u32 = 300;

	/// Returns a builder seeded with the zone and hostname.
	pub fn builder(zone: impl Into<String>, hostname: impl Into<String>) -> DesiredRecordBuilder {
		DesiredRecordBuilder::new(zone, hostname)
	}

	/// Resource path of the record set.
	pub fn path(&self) -> String {
		self.key.path()
	}

	/// Checks the address and TTL invariants.
	///
	/// Records assembled by hand skip [`DesiredRecordBuilder::build`], so the reconciler re-checks
	/// them here before any request.
	pub fn validate(&self) -> Result<(), RecordError> {
		if self.addresses.is_empty() {
			return Err(RecordError::NoAddresses);
		}
		if let Some(index) = self.addresses.iter().position(|a| a.trim().is_empty()) {
			return Err(RecordError::BlankAddress { index });
		}
		if self.ttl == 0 {
			return Err(RecordError::ZeroTtl);
		}

		Ok(())
	}
}

#[derive(Deserialize)]
struct RawDesiredRecord {
	#[serde(flatten)]
	key: RecordKey,
	addresses: Vec<String>,
	ttl: u32,
}
impl TryFrom<RawDesiredRecord> for DesiredRecord {
	type Error = RecordError;

	fn try_from(raw: RawDesiredRecord) -> Result<Self, Self::Error> {
		let record = Self { key: raw.key, addresses: raw.addresses, ttl: raw.ttl };

		record.validate()?;

		Ok(record)
	}
}

/// Builder for [`DesiredRecord`] values.
#[derive(Debug)]
pub struct DesiredRecordBuilder {
	/// Zone text, validated on build.
	pub zone: String,
	/// Hostname text, validated on build.
	pub hostname: String,
	/// Record type text, validated on build.
	pub record_type: String,
	/// Addresses collected so far.
	pub addresses: Vec<String>,
	/// TTL in seconds.
	pub ttl: u32,
}
impl DesiredRecordBuilder {
	/// Creates a builder with the default record type and TTL.
	pub fn new(zone: impl Into<String>, hostname: impl Into<String>) -> Self {
		Self {
			zone: zone.into(),
			hostname: hostname.into(),
			record_type: DesiredRecord::DEFAULT_RECORD_TYPE.into(),
			addresses: Vec::new(),
			ttl: DesiredRecord::DEFAULT_TTL,
		}
	}

	/// Overrides the record type.
	pub fn record_type(mut self, record_type: impl Into<String>) -> Self {
		self.record_type = record_type.into();

		self
	}

	/// Appends one address.
	pub fn address(mut self, address: impl Into<String>) -> Self {
		self.addresses.push(address.into());

		self
	}

	/// Appends several addresses.
	pub fn addresses<I>(mut self, addresses: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<String>,
	{
		self.addresses.extend(addresses.into_iter().map(Into::into));

		self
	}

	/// Overrides the TTL.
	pub fn ttl(mut self, ttl: u32) -> Self {
		self.ttl = ttl;

		self
	}

	/// Consumes the builder and validates the resulting record.
	pub fn build(self) -> Result<DesiredRecord, RecordError> {
		let key = RecordKey::parse(&self.zone, &self.hostname, &self.record_type)?;
		let record = DesiredRecord {
			key,
			addresses: self.addresses.into_iter().map(|a| a.trim().to_owned()).collect(),
			ttl: self.ttl,
		};

		record.validate()?;

		Ok(record)
	}
}
