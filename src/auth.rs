//! Credential model and secret wrappers used by the signer.

pub mod credentials;
pub mod secret;

pub use credentials::*;
pub use secret::*;
