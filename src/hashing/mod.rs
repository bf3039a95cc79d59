// Reexport de la implementación única ubicada en `galaxy-core` para evitar
// duplicación de lógica de canonicalización/hashing a nivel de workspace.
pub use galaxy_core::hashing::canonical_json;
pub use galaxy_core::hashing::{digest_hex, to_canonical_json};
