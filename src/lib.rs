//! PTP (IEEE 1588) management and signaling message codec: wire-format
//! encode/decode, a typed object model, a canonical JSON bridge, and a
//! pmc-style CLI option model.

pub mod cli;
pub mod error;
pub mod header;
#[cfg(feature = "json")]
pub mod json;
pub mod management_id;
pub mod message;
pub mod signaling;
pub mod tlv;
pub mod types;
pub mod wire;

pub use error::{Error, Result};
pub use management_id::ManagementId;
pub use message::Message;
pub use types::ActionField;
