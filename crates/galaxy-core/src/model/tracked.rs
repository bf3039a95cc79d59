//! Interfaz común de todos los wrappers.
use crate::errors::WrapperResult;
use crate::model::{as_record, Fingerprint, Record, Wrapper};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Un objeto que envuelve un record y registra sus mutaciones.
///
/// `set` y `touch` son obligatorios porque cada wrapper decide qué más
/// ocurre al mutar (p.ej. `Workflow` olvida su id de servidor). El resto son
/// lecturas que se resuelven contra el `Wrapper` interno.
pub trait Tracked {
    fn wrapper(&self) -> &Wrapper;

    fn set(&mut self, name: &str, value: Value) -> WrapperResult<()>;

    fn touch(&mut self);

    fn get(&self, name: &str) -> WrapperResult<&Value> {
        self.wrapper().get(name)
    }

    fn get_as<T: DeserializeOwned>(&self, name: &str) -> WrapperResult<T> {
        self.wrapper().get_as(name)
    }

    fn has_field(&self, name: &str) -> bool {
        self.wrapper().has_field(name)
    }

    fn is_dirty(&self) -> bool {
        self.wrapper().is_dirty()
    }

    fn fingerprint(&self) -> &Fingerprint {
        self.wrapper().fingerprint()
    }

    fn record(&self) -> &Record {
        self.wrapper().record()
    }

    fn to_json(&self) -> String {
        self.wrapper().to_json()
    }
}

/// Wrappers que se pueden reconstruir sólo a partir de un record.
///
/// Los que necesitan metadatos extra (`Folder`, `History`, `Dataset` base)
/// no lo implementan.
pub trait FromRecord: Sized {
    fn from_record(record: &Record) -> WrapperResult<Self>;

    /// El wrapper resultante es raíz: no conserva dueño ni estado `dirty`.
    fn from_json(text: &str) -> WrapperResult<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_record(as_record(&value, "document")?)
    }
}
