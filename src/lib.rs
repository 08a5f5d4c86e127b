//! EdgeGrid-signed DNS record reconciliation: sign `EG1-HMAC-SHA256` requests, read a record
//! set, and converge it with the fewest writes.
//!
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use edgegrid_dns::{
//! 	auth::Credentials,
//! 	config::EdgeDnsConfig,
//! 	http::ReqwestHttpClient,
//! 	reconcile::{ReconcileMode, ReqwestReconciler},
//! 	record::DesiredRecord,
//! 	store::EnvCredentialStore,
//! };
//!
//! let credentials = Credentials::from_store(&EnvCredentialStore::default())?;
//! let reconciler: ReqwestReconciler =
//! 	EdgeDnsConfig::default().reconciler(credentials, ReqwestHttpClient::default())?;
//! let desired = DesiredRecord::builder("example.com", "www.example.com")
//! 	.address("192.0.2.10")
//! 	.build()?;
//! let outcome = reconciler.reconcile(&desired, ReconcileMode::FullReconcile).await;
//!
//! println!("{outcome}");
//! # Ok(())
//! # }
//! ```

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod obs;
pub mod reconcile;
pub mod record;
pub mod sign;
pub mod store;

mod _prelude {
	pub use std::{
		collections::HashMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::RwLock;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(all(test, feature = "reqwest"))] use {color_eyre as _, httpmock as _};
