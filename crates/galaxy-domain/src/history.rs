use crate::HistoryDatasetAssociation;
use galaxy_core::{impl_tracked, record_accessors, Record, Wrapper};

/// Historia de análisis junto con los datasets que contiene.
#[derive(Debug, Clone)]
pub struct History {
    inner: Wrapper,
    datasets: Vec<HistoryDatasetAssociation>,
}

impl History {
    pub fn new(record: &Record, datasets: Vec<HistoryDatasetAssociation>) -> Self {
        History { inner: Wrapper::new(record), datasets }
    }

    pub fn datasets(&self) -> &[HistoryDatasetAssociation] {
        &self.datasets
    }
}

impl_tracked!(History => inner);

record_accessors!(History {
    name: String => "name",
    deleted: bool => "deleted",
});

#[cfg(test)]
mod tests {
    use super::*;
    use galaxy_core::{FromRecord, Tracked};
    use serde_json::json;

    #[test]
    fn datasets_are_wrapper_metadata() {
        let ds_raw = json!({"name": "reads.fastq", "state": "ok", "file_ext": "fastqsanger"});
        let hda = HistoryDatasetAssociation::from_record(ds_raw.as_object().expect("object"))
            .expect("hda");
        let raw = json!({"name": "rna-seq", "deleted": false})
            .as_object()
            .cloned()
            .expect("object");
        let mut history = History::new(&raw, vec![hda]);
        let empty = History::new(&raw, Vec::new());
        assert_eq!(history, empty, "datasets do not enter the fingerprint");
        assert_eq!(history.datasets().len(), 1);
        assert_eq!(history.datasets()[0].src().as_str(), "hda");
        history.set("name", json!("rna-seq v2")).expect("existing field");
        assert!(history.is_dirty());
        assert!(!history.datasets()[0].is_dirty());
        assert!(!history.deleted().expect("deleted"));
    }
}
