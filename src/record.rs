//! Record identity, desired state, and the JSON shapes of the record-set endpoint.

pub mod desired;
pub mod id;
pub mod wire;

pub use desired::*;
pub use id::*;
pub use wire::*;
