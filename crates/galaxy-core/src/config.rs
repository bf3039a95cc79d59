//! Configuración del core.
//! Carga variables de entorno (.env) y expone una estructura inmutable (`CONFIG`).
//! Hoy sólo decide el algoritmo de digest usado para los fingerprints de los
//! wrappers raíz; los hijos heredan el de su dueño.
use log::warn;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Variable de entorno que selecciona el algoritmo de fingerprint.
pub const FINGERPRINT_ALGORITHM_VAR: &str = "GALAXY_FINGERPRINT_ALGORITHM";

/// Algoritmo de digest sobre la serialización canónica de un record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FingerprintAlgorithm {
    #[default]
    Sha256,
    Blake3,
}

impl FingerprintAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            FingerprintAlgorithm::Sha256 => "sha256",
            FingerprintAlgorithm::Blake3 => "blake3",
        }
    }
}

impl fmt::Display for FingerprintAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FingerprintAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(FingerprintAlgorithm::Sha256),
            "blake3" => Ok(FingerprintAlgorithm::Blake3),
            other => Err(format!("unknown fingerprint algorithm: {other}")),
        }
    }
}

/// Configuración global del core (extensible para más secciones).
#[derive(Debug, Clone)]
pub struct CoreConfig {
    pub fingerprint_algorithm: FingerprintAlgorithm,
}

impl CoreConfig {
    /// Lee el entorno (cargando `.env` si existe). Valores inválidos caen al
    /// default con un warning en vez de abortar.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        let fingerprint_algorithm = match env::var(FINGERPRINT_ALGORITHM_VAR) {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                let fallback = FingerprintAlgorithm::default();
                warn!("{FINGERPRINT_ALGORITHM_VAR}: {e}; using {fallback}");
                FingerprintAlgorithm::default()
            }),
            Err(_) => FingerprintAlgorithm::default(),
        };
        CoreConfig { fingerprint_algorithm }
    }
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<CoreConfig> = Lazy::new(CoreConfig::from_env);
