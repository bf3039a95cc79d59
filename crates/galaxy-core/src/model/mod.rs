//! Modelos neutrales (Wrapper, Fingerprint, traits comunes).

pub mod fingerprint;
pub mod record;
pub mod tracked;

pub use fingerprint::Fingerprint;
pub use record::{as_record, Record, Wrapper};
pub use serde_json::Value;
pub use tracked::{FromRecord, Tracked};
