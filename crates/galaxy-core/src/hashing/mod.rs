//! Módulo de hashing y canonicalización JSON.

pub mod canonical_json;
pub mod hash;

pub use canonical_json::{to_canonical_json, to_canonical_record};
pub use hash::{digest_hex, hash_str, hash_value, sha256_hex};
