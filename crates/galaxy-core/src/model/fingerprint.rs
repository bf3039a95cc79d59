use crate::config::FingerprintAlgorithm;
use crate::hashing::{digest_hex, to_canonical_record};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Digest hex del JSON canónico de un record.
///
/// Se trata como string opaco: sirve como clave de mapas y para igualdad,
/// nunca como número.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn of(record: &Map<String, Value>, algorithm: FingerprintAlgorithm) -> Self {
        Fingerprint(digest_hex(algorithm, &to_canonical_record(record)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
