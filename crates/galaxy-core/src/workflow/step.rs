//! Step: wrapper de un nodo del grafo de un workflow.
use crate::config::FingerprintAlgorithm;
use crate::constants::fields::{TOOL_STATE, TYPE};
use crate::constants::TOOL_STEP_TYPE;
use crate::errors::{WrapperError, WrapperResult};
use crate::model::{Fingerprint, FromRecord, Record, Tracked, Wrapper};
use crate::workflow::tool::{Tool, ToolMut, ToolState};
use serde_json::Value;
use std::hash::{Hash, Hasher};

/// Quien tiene el préstamo mutable de un `Step` y debe enterarse cuando
/// éste cambia: el propio step (sin dueño) o un `StepMut` de un workflow.
pub trait StepHost {
    fn host_step(&self) -> &Step;
    fn host_step_mut(&mut self) -> &mut Step;
    /// Se llama después de que el step ya se tocó a sí mismo.
    fn step_touched(&mut self);
}

#[derive(Debug, Clone)]
pub struct Step {
    inner: Wrapper,
    tool: Option<ToolState>,
    position: Option<usize>,
}

impl Step {
    /// Step suelto, sin workflow dueño.
    pub fn new(record: &Record) -> WrapperResult<Self> {
        Self::build(Wrapper::new(record), None)
    }

    pub(crate) fn owned(
        record: &Record,
        position: usize,
        algorithm: FingerprintAlgorithm,
    ) -> WrapperResult<Self> {
        Self::build(Wrapper::with_algorithm(record, algorithm), Some(position))
    }

    fn build(inner: Wrapper, position: Option<usize>) -> WrapperResult<Self> {
        let tool = if inner.get(TYPE)?.as_str() == Some(TOOL_STEP_TYPE) {
            Some(ToolState::from_step(inner.record())?)
        } else {
            None
        };
        Ok(Step { inner, tool, position })
    }

    /// Copia limpia (sin `dirty`) del contenido actual.
    pub(crate) fn fresh_copy(&self) -> Step {
        Step {
            inner: Wrapper::with_algorithm(self.inner.record(), self.inner.algorithm()),
            tool: self.tool.clone(),
            position: self.position,
        }
    }

    pub fn step_type(&self) -> Option<&str> {
        self.inner.record().get(TYPE).and_then(Value::as_str)
    }

    pub fn is_tool(&self) -> bool {
        self.tool.is_some()
    }

    /// Índice dentro del workflow dueño.
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub(crate) fn ensure_tool(&self) -> WrapperResult<&ToolState> {
        self.tool.as_ref().ok_or_else(|| not_a_tool(self.inner.record()))
    }

    pub fn tool(&self) -> WrapperResult<Tool<'_>> {
        let state = self.ensure_tool()?;
        Ok(Tool::new(self.inner.record(), state))
    }

    pub fn tool_mut(&mut self) -> WrapperResult<ToolMut<'_, Step>> {
        self.ensure_tool()?;
        Ok(ToolMut::new(self))
    }

    /// Escribe un parámetro, re-serializa el estado en `tool_state` y toca
    /// el step. El step se sincroniza antes del touch para que su fingerprint
    /// ya incluya el estado nuevo.
    pub(crate) fn set_tool_param(&mut self, key: &str, value: &Value) -> WrapperResult<()> {
        let inner = &mut self.inner;
        let state = self.tool.as_mut().ok_or_else(|| not_a_tool(inner.record()))?;
        state.assign(key, value)?;
        inner.record_mut().insert(TOOL_STATE.to_string(), Value::String(state.encode()));
        inner.touch();
        Ok(())
    }
}

fn not_a_tool(record: &Record) -> WrapperError {
    WrapperError::NotATool(record.get(TYPE).map(Value::to_string).unwrap_or_default())
}

impl Tracked for Step {
    fn wrapper(&self) -> &Wrapper {
        &self.inner
    }

    /// Cambiar `type` o reemplazar `tool_state` entero reconstruye el estado
    /// de la herramienta; si no se puede decodificar no se escribe nada.
    fn set(&mut self, name: &str, value: Value) -> WrapperResult<()> {
        if !self.inner.has_field(name) {
            return Err(WrapperError::UnknownField(name.to_string()));
        }
        let tool = match name {
            TYPE if value.as_str() == Some(TOOL_STEP_TYPE) => {
                Some(ToolState::from_step(self.inner.record())?)
            }
            TYPE => None,
            TOOL_STATE if self.tool.is_some() => Some(ToolState::from_value(&value)?),
            _ => return self.inner.set(name, value),
        };
        self.inner.set(name, value)?;
        self.tool = tool;
        Ok(())
    }

    fn touch(&mut self) {
        self.inner.touch()
    }
}

impl StepHost for Step {
    fn host_step(&self) -> &Step {
        self
    }

    fn host_step_mut(&mut self) -> &mut Step {
        self
    }

    fn step_touched(&mut self) {}
}

impl FromRecord for Step {
    fn from_record(record: &Record) -> WrapperResult<Self> {
        Step::new(record)
    }
}

impl PartialEq for Step {
    fn eq(&self, other: &Self) -> bool {
        self.fingerprint() == other.fingerprint()
    }
}

impl Eq for Step {}

impl Hash for Step {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Fingerprint::hash(self.fingerprint(), state)
    }
}
