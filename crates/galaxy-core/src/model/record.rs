//! Wrapper genérico sobre un record JSON.
//!
//! El wrapper posee una copia propia del record recibido y vigila tres cosas:
//! - sólo se pueden escribir campos que ya existen (el conjunto de claves es
//!   cerrado desde la construcción);
//! - cualquier escritura marca el wrapper como modificado (`dirty`);
//! - el `fingerprint` se recalcula tras cada mutación, así que nunca queda
//!   desfasado respecto del contenido.
//!
//! La propagación hacia un dueño (workflow → step → tool state) no vive aquí:
//! la hacen los handles mutables que entrega el dueño (ver `workflow`).
use crate::config::{FingerprintAlgorithm, CONFIG};
use crate::errors::{WrapperError, WrapperResult};
use crate::hashing::to_canonical_record;
use crate::model::{Fingerprint, FromRecord, Tracked};
use log::trace;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::hash::{Hash, Hasher};

/// Record crudo tal como llega del servicio.
pub type Record = Map<String, Value>;

/// Ve un `Value` como record, o falla con `MalformedInput`.
pub fn as_record<'a>(value: &'a Value, what: &str) -> WrapperResult<&'a Record> {
    value
        .as_object()
        .ok_or_else(|| WrapperError::MalformedInput(format!("{what} must be a JSON object")))
}

#[derive(Debug, Clone)]
pub struct Wrapper {
    record: Record,
    dirty: bool,
    fingerprint: Fingerprint,
    algorithm: FingerprintAlgorithm,
}

impl Wrapper {
    /// Copia el record usando el algoritmo de `CONFIG`.
    pub fn new(record: &Record) -> Self {
        Self::with_algorithm(record, CONFIG.fingerprint_algorithm)
    }

    pub fn with_algorithm(record: &Record, algorithm: FingerprintAlgorithm) -> Self {
        let record = record.clone();
        let fingerprint = Fingerprint::of(&record, algorithm);
        Wrapper { record, dirty: false, fingerprint, algorithm }
    }

    pub fn from_value(value: &Value) -> WrapperResult<Self> {
        as_record(value, "record").map(Self::new)
    }

    pub fn algorithm(&self) -> FingerprintAlgorithm {
        self.algorithm
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Acceso crudo para los dueños dentro del crate (sincronizar hijos).
    /// Quien lo use debe llamar a `touch` después.
    pub(crate) fn record_mut(&mut self) -> &mut Record {
        &mut self.record
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.record.contains_key(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.record.keys().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> WrapperResult<&Value> {
        self.record.get(name).ok_or_else(|| WrapperError::UnknownField(name.to_string()))
    }

    /// Lectura tipada de un campo.
    pub fn get_as<T: DeserializeOwned>(&self, name: &str) -> WrapperResult<T> {
        let value = self.get(name)?;
        T::deserialize(value).map_err(|e| WrapperError::Encoding(format!("field `{name}`: {e}")))
    }

    /// Escribe un campo existente y toca el wrapper. Un nombre desconocido
    /// falla sin modificar nada.
    pub fn set(&mut self, name: &str, value: Value) -> WrapperResult<()> {
        match self.record.get_mut(name) {
            Some(slot) => *slot = value,
            None => return Err(WrapperError::UnknownField(name.to_string())),
        }
        self.touch();
        Ok(())
    }

    pub fn touch(&mut self) {
        self.dirty = true;
        self.fingerprint = Fingerprint::of(&self.record, self.algorithm);
        trace!("touched record, fingerprint={}", self.fingerprint);
    }

    /// Serialización canónica (claves ordenadas, sin espacios).
    pub fn to_json(&self) -> String {
        to_canonical_record(&self.record)
    }
}

impl Tracked for Wrapper {
    fn wrapper(&self) -> &Wrapper {
        self
    }

    fn set(&mut self, name: &str, value: Value) -> WrapperResult<()> {
        Wrapper::set(self, name, value)
    }

    fn touch(&mut self) {
        Wrapper::touch(self)
    }
}

impl FromRecord for Wrapper {
    fn from_record(record: &Record) -> WrapperResult<Self> {
        Ok(Wrapper::new(record))
    }
}

impl PartialEq for Wrapper {
    fn eq(&self, other: &Self) -> bool {
        self.fingerprint == other.fingerprint
    }
}

impl Eq for Wrapper {}

impl Hash for Wrapper {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fingerprint.hash(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashing::digest_hex;
    use serde_json::json;

    fn fixture() -> Record {
        json!({"name": "reads", "deleted": false, "tags": ["a"]})
            .as_object()
            .cloned()
            .expect("object fixture")
    }

    fn expected_fingerprint(w: &Wrapper) -> String {
        digest_hex(w.algorithm(), &w.to_json())
    }

    #[test]
    fn construction_copies_and_starts_clean() {
        let mut raw = fixture();
        let w = Wrapper::with_algorithm(&raw, FingerprintAlgorithm::Sha256);
        raw.insert("name".into(), json!("changed"));
        assert!(!w.is_dirty());
        assert_eq!(w.get("name").expect("name"), &json!("reads"));
        assert_eq!(w.fingerprint().as_str(), expected_fingerprint(&w));
    }

    #[test]
    fn set_existing_field_marks_dirty_and_refreshes_fingerprint() {
        let mut w = Wrapper::with_algorithm(&fixture(), FingerprintAlgorithm::Sha256);
        let before = w.fingerprint().clone();
        w.set("name", json!("trimmed")).expect("existing field");
        assert!(w.is_dirty());
        assert_ne!(&before, w.fingerprint());
        assert_eq!(w.fingerprint().as_str(), expected_fingerprint(&w));
    }

    #[test]
    fn set_unknown_field_fails_without_side_effects() {
        let mut w = Wrapper::with_algorithm(&fixture(), FingerprintAlgorithm::Sha256);
        let before = w.fingerprint().clone();
        let err = w.set("nmae", json!("x")).expect_err("closed field set");
        assert_eq!(err, WrapperError::UnknownField("nmae".into()));
        assert!(!w.is_dirty());
        assert!(!w.has_field("nmae"));
        assert_eq!(&before, w.fingerprint());
    }

    #[test]
    fn from_value_exposes_the_closed_field_set() {
        let w = Wrapper::from_value(&Value::Object(fixture())).expect("object value");
        let mut fields: Vec<&str> = w.fields().collect();
        fields.sort_unstable();
        assert_eq!(fields, ["deleted", "name", "tags"]);
        assert!(matches!(
            Wrapper::from_value(&json!("text")),
            Err(WrapperError::MalformedInput(_))
        ));
    }

    #[test]
    fn get_unknown_field_is_an_error() {
        let w = Wrapper::with_algorithm(&fixture(), FingerprintAlgorithm::Sha256);
        assert!(matches!(w.get("missing"), Err(WrapperError::UnknownField(n)) if n == "missing"));
    }

    #[test]
    fn typed_reads() {
        let w = Wrapper::with_algorithm(&fixture(), FingerprintAlgorithm::Sha256);
        assert!(!w.get_as::<bool>("deleted").expect("bool field"));
        assert_eq!(w.get_as::<Vec<String>>("tags").expect("list field"), vec!["a".to_string()]);
        assert!(matches!(w.get_as::<u32>("name"), Err(WrapperError::Encoding(_))));
    }

    #[test]
    fn equality_follows_content() {
        let a = Wrapper::with_algorithm(&fixture(), FingerprintAlgorithm::Sha256);
        let mut b = Wrapper::with_algorithm(&fixture(), FingerprintAlgorithm::Sha256);
        assert_eq!(a, b);
        b.set("deleted", json!(true)).expect("existing field");
        assert_ne!(a, b);
        b.set("deleted", json!(false)).expect("existing field");
        assert_eq!(a, b, "same content again means same fingerprint, dirty or not");
    }

    #[test]
    fn json_round_trip_is_root_level_and_clean() {
        let mut w = Wrapper::with_algorithm(&fixture(), FingerprintAlgorithm::Sha256);
        w.set("name", json!("renamed")).expect("existing field");
        let back = Wrapper::from_json(&w.to_json()).expect("valid json");
        assert!(!back.is_dirty());
        assert_eq!(back.record(), w.record());
    }

    #[test]
    fn from_json_rejects_non_objects() {
        assert!(matches!(Wrapper::from_json("[1, 2]"), Err(WrapperError::MalformedInput(_))));
        assert!(matches!(Wrapper::from_json("{oops"), Err(WrapperError::MalformedInput(_))));
    }
}
