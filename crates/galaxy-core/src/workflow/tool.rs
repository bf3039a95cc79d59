//! Estado de parámetros de un step de herramienta.
//!
//! El step guarda `tool_state` como un string JSON cuyo objeto, a su vez,
//! tiene cada valor codificado como otro string JSON. `ToolState` es la
//! frontera de decode/encode: hacia fuera los parámetros son `Value`
//! estructurados.
use crate::constants::fields::{TOOL_ERRORS, TOOL_ID, TOOL_STATE, TOOL_VERSION};
use crate::errors::{WrapperError, WrapperResult};
use crate::hashing::{to_canonical_json, to_canonical_record};
use crate::model::Record;
use crate::workflow::step::StepHost;
use serde_json::Value;

/// Codifica un parámetro para guardarlo dentro del tool state.
pub fn encode_param(value: &Value) -> String {
    to_canonical_json(value)
}

/// Inversa de `encode_param`.
pub fn decode_param(key: &str, raw: &Value) -> WrapperResult<Value> {
    match raw {
        Value::String(s) => serde_json::from_str(s)
            .map_err(|e| WrapperError::Encoding(format!("tool parameter `{key}`: {e}"))),
        other => Err(WrapperError::Encoding(format!(
            "tool parameter `{key}` is stored as `{other}`, expected an encoded string"
        ))),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToolState {
    state: Record,
}

impl ToolState {
    pub fn decode(raw: &str) -> WrapperResult<Self> {
        let value: Value = serde_json::from_str(raw)
            .map_err(|e| WrapperError::MalformedInput(format!("{TOOL_STATE}: {e}")))?;
        match value {
            Value::Object(state) => Ok(ToolState { state }),
            _ => Err(WrapperError::MalformedInput(format!(
                "{TOOL_STATE} must encode a JSON object"
            ))),
        }
    }

    /// Lee `tool_state` de un record de step.
    pub(crate) fn from_step(step: &Record) -> WrapperResult<Self> {
        let raw = step
            .get(TOOL_STATE)
            .ok_or_else(|| WrapperError::UnknownField(TOOL_STATE.to_string()))?;
        Self::from_value(raw)
    }

    pub(crate) fn from_value(raw: &Value) -> WrapperResult<Self> {
        match raw.as_str() {
            Some(text) => Self::decode(text),
            None => Err(WrapperError::MalformedInput(format!("{TOOL_STATE} must be a string"))),
        }
    }

    pub fn encode(&self) -> String {
        to_canonical_record(&self.state)
    }

    /// Parámetros tal como están guardados (valores aún codificados).
    pub fn raw_params(&self) -> &Record {
        &self.state
    }

    pub fn contains(&self, key: &str) -> bool {
        self.state.contains_key(key)
    }

    pub fn get(&self, key: &str) -> WrapperResult<Value> {
        let raw = self
            .state
            .get(key)
            .ok_or_else(|| WrapperError::UnknownField(key.to_string()))?;
        decode_param(key, raw)
    }

    /// Todos los parámetros decodificados. Los valores guardados sin
    /// codificar (`"__page__": 0`, `null`) se devuelven tal cual.
    pub fn params(&self) -> WrapperResult<Record> {
        self.state
            .iter()
            .map(|(k, raw)| match raw {
                Value::String(_) => decode_param(k, raw).map(|v| (k.clone(), v)),
                other => Ok((k.clone(), other.clone())),
            })
            .collect()
    }

    pub(crate) fn assign(&mut self, key: &str, value: &Value) -> WrapperResult<()> {
        let slot = self
            .state
            .get_mut(key)
            .ok_or_else(|| WrapperError::UnknownField(key.to_string()))?;
        *slot = Value::String(encode_param(value));
        Ok(())
    }
}

/// Vista de lectura de la herramienta de un step.
#[derive(Debug, Clone, Copy)]
pub struct Tool<'a> {
    step: &'a Record,
    state: &'a ToolState,
}

impl<'a> Tool<'a> {
    pub(crate) fn new(step: &'a Record, state: &'a ToolState) -> Self {
        Tool { step, state }
    }

    fn field(&self, name: &str) -> WrapperResult<&'a Value> {
        self.step.get(name).ok_or_else(|| WrapperError::UnknownField(name.to_string()))
    }

    fn str_field(&self, name: &str) -> WrapperResult<&'a str> {
        let value = self.field(name)?;
        value
            .as_str()
            .ok_or_else(|| {
                WrapperError::Encoding(format!("field `{name}` is `{value}`, expected a string"))
            })
    }

    pub fn id(&self) -> WrapperResult<&'a str> {
        self.str_field(TOOL_ID)
    }

    pub fn version(&self) -> WrapperResult<&'a str> {
        self.str_field(TOOL_VERSION)
    }

    pub fn errors(&self) -> WrapperResult<&'a Value> {
        self.field(TOOL_ERRORS)
    }

    pub fn params(&self) -> WrapperResult<Record> {
        self.state.params()
    }

    pub fn raw_params(&self) -> &'a Record {
        self.state.raw_params()
    }

    pub fn get(&self, key: &str) -> WrapperResult<Value> {
        self.state.get(key)
    }

    pub fn state(&self) -> &'a ToolState {
        self.state
    }
}

/// Handle mutable sobre la herramienta de un step. Al escribir un
/// parámetro re-sincroniza `tool_state`, toca el step y avisa al host.
pub struct ToolMut<'a, H: StepHost + ?Sized> {
    host: &'a mut H,
}

impl<'a, H: StepHost + ?Sized> ToolMut<'a, H> {
    /// El host ya comprobó que el step es de herramienta.
    pub(crate) fn new(host: &'a mut H) -> Self {
        ToolMut { host }
    }

    pub fn view(&self) -> WrapperResult<Tool<'_>> {
        self.host.host_step().tool()
    }

    pub fn get(&self, key: &str) -> WrapperResult<Value> {
        self.view()?.get(key)
    }

    pub fn set(&mut self, key: &str, value: Value) -> WrapperResult<()> {
        self.host.host_step_mut().set_tool_param(key, &value)?;
        self.host.step_touched();
        Ok(())
    }
}
