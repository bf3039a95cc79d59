//! Galaxy Objects
//!
//! Este crate actúa como la fachada de los wrappers de Galaxy:
//! - Reexporta `galaxy_core` (wrapper genérico, workflows, steps, tool state).
//! - Reexporta `galaxy_domain` (bibliotecas, carpetas, historias, datasets).
//! - Expone `hashing` para serializar JSON en forma canónica.
//!
//! La capa que habla con el servidor (HTTP) queda fuera: aquí sólo entran y
//! salen records JSON.

pub mod hashing;

pub use galaxy_core::{
    config, errors, Fingerprint, FingerprintAlgorithm, FromRecord, Links, Record, Step, StepMut,
    Tool, ToolMut, ToolState, Tracked, Workflow, Wrapper, WrapperError, WrapperResult,
};
pub use galaxy_domain::{
    Dataset, DatasetSrc, Folder, History, HistoryDatasetAssociation, Library, LibraryDataset,
    LibraryDatasetDatasetAssociation,
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn record(v: Value) -> Record {
        v.as_object().cloned().expect("object fixture")
    }

    #[test]
    fn facade_covers_core_and_domain() {
        let raw = record(json!({"name": "reads.fq", "state": "ok", "file_ext": "fastqsanger"}));
        let hda = HistoryDatasetAssociation::from_record(&raw).expect("hda");
        assert_eq!(hda.src(), DatasetSrc::Hda);
        assert_eq!(hda.to_json(), hashing::to_canonical_json(&Value::Object(raw)));

        let wf_raw = record(json!({"name": "empty", "steps": {}}));
        let mut wf = Workflow::new(&wf_raw, Some("f2db41e1fa331b3e".into()), None).expect("wf");
        assert!(matches!(wf.step_mut(0), Err(WrapperError::NoSuchStep(0))));
        let digest = hashing::digest_hex(wf.wrapper().algorithm(), &wf.to_json());
        assert_eq!(wf.fingerprint().as_str(), digest);
    }
}
