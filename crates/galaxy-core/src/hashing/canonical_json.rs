//! Canonical JSON: claves ordenadas y sin espacios redundantes.
//!
//! Es la forma que se hashea para el fingerprint de un wrapper y la que se
//! devuelve en `to_json`, de modo que dos records con el mismo contenido
//! producen el mismo texto aunque sus claves se hayan insertado en distinto
//! orden.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub fn to_canonical_json(value: &Value) -> String {
    let mut out = String::new();
    write_value(value, &mut out);
    out
}

/// Igual que `to_canonical_json` pero sobre un record sin envolverlo en un
/// `Value::Object` (evita clonar el mapa entero en cada touch).
pub fn to_canonical_record(record: &Map<String, Value>) -> String {
    let mut out = String::new();
    write_object(record, &mut out);
    out
}

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => write_str(s, out),
        Value::Array(arr) => {
            out.push('[');
            for (i, item) in arr.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => write_object(map, out),
    }
}

fn write_object(map: &Map<String, Value>, out: &mut String) {
    let tree: BTreeMap<&String, &Value> = map.iter().collect();
    out.push('{');
    for (i, (k, v)) in tree.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_str(k, out);
        out.push(':');
        write_value(v, out);
    }
    out.push('}');
}

// El Display de `Value::String` ya aplica el escapado JSON y no puede fallar.
fn write_str(s: &str, out: &mut String) {
    out.push_str(&Value::String(s.to_owned()).to_string());
}
