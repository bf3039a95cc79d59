//! Workflows de Galaxy: el workflow posee sus steps y cada step de tipo
//! `tool` posee el estado de parámetros de la herramienta.
//!
//! Las mutaciones de un hijo suben por los handles `StepMut` / `ToolMut`,
//! que tienen el préstamo mutable del dueño y le avisan al terminar.

pub mod step;
pub mod tool;
#[allow(clippy::module_inception)]
pub mod workflow;

pub use step::{Step, StepHost};
pub use tool::{decode_param, encode_param, Tool, ToolMut, ToolState};
pub use workflow::{Links, StepMut, Workflow};
