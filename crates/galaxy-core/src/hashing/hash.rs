//! Hash helpers – abstracción para permitir cambiar de algoritmo sin tocar resto del core.

use crate::config::FingerprintAlgorithm;
use blake3::Hasher;
use serde_json::Value;
use sha2::{Digest, Sha256};

/// Hashea un string con blake3 y devuelve hex.
pub fn hash_str(input: &str) -> String {
    let mut h = Hasher::new();
    h.update(input.as_bytes());
    h.finalize().to_hex().to_string()
}

/// Hashea un string con SHA-256 y devuelve hex en minúsculas.
pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hasher.finalize().iter().map(|b| format!("{b:02x}")).collect()
}

/// Despacha al algoritmo configurado. Ambos producen 64 caracteres hex.
pub fn digest_hex(algorithm: FingerprintAlgorithm, input: &str) -> String {
    match algorithm {
        FingerprintAlgorithm::Sha256 => sha256_hex(input),
        FingerprintAlgorithm::Blake3 => hash_str(input),
    }
}

/// Hash blake3 de la forma canónica de un `Value`.
pub fn hash_value(value: &Value) -> String {
    hash_str(&super::to_canonical_json(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_known_vector() {
        assert_eq!(
            sha256_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn algorithms_differ_but_share_length() {
        let a = digest_hex(FingerprintAlgorithm::Sha256, "{}");
        let b = digest_hex(FingerprintAlgorithm::Blake3, "{}");
        assert_eq!(a.len(), 64);
        assert_eq!(b.len(), 64);
        assert_ne!(a, b);
    }
}
