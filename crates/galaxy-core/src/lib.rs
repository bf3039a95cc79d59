//! galaxy-core: wrappers con seguimiento de mutaciones sobre records JSON de
//! Galaxy (workflows, steps, estado de herramientas).
//!
//! - `model`: `Wrapper` genérico, `Fingerprint` y los traits comunes.
//! - `workflow`: `Workflow`, `Step` y `ToolState` con propagación de cambios
//!   hacia el dueño.
//! - `hashing`: JSON canónico y digests.
pub mod config;
pub mod constants;
pub mod errors;
pub mod hashing;
mod macros;
pub mod model;
pub mod workflow;

pub use config::{CoreConfig, FingerprintAlgorithm, CONFIG};
pub use errors::{WrapperError, WrapperResult};
pub use model::{Fingerprint, FromRecord, Record, Tracked, Wrapper};
pub use workflow::{Links, Step, StepHost, StepMut, Tool, ToolMut, ToolState, Workflow};
