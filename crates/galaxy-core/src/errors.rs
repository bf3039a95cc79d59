//! Errores del core de wrappers.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum WrapperError {
    /// Lectura o escritura de un campo que no existe en el record (o de un
    /// parámetro ausente en el tool state).
    #[error("no property with name \"{0}\"")]
    UnknownField(String),
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("encoding error: {0}")]
    Encoding(String),
    #[error("step is not a tool invocation (type: {0})")]
    NotATool(String),
    #[error("workflow has no step at index {0}")]
    NoSuchStep(usize),
}

impl From<serde_json::Error> for WrapperError {
    fn from(e: serde_json::Error) -> Self {
        WrapperError::MalformedInput(e.to_string())
    }
}

pub type WrapperResult<T> = Result<T, WrapperError>;
