//! Constantes del formato de records de Galaxy.

/// Valor de `type` que marca un step como invocación de herramienta.
pub const TOOL_STEP_TYPE: &str = "tool";

/// Versiones de `format-version` de workflows exportados que sabemos leer.
/// Un valor fuera de esta lista no impide construir el wrapper; sólo se
/// reporta con un warning.
pub const KNOWN_FORMAT_VERSIONS: &[&str] = &["0.1"];

/// Nombres de campos del record que el core interpreta.
pub mod fields {
    pub const STEPS: &str = "steps";
    pub const TYPE: &str = "type";
    pub const TOOL_STATE: &str = "tool_state";
    pub const TOOL_ID: &str = "tool_id";
    pub const TOOL_VERSION: &str = "tool_version";
    pub const TOOL_ERRORS: &str = "tool_errors";
    pub const FORMAT_VERSION: &str = "format-version";
    pub const LINK_LABEL: &str = "label";
}
