use galaxy_core::{impl_tracked, record_accessors, FromRecord, Record, Wrapper, WrapperResult};

/// Biblioteca de datos. `id` es metadato del wrapper: no forma parte del
/// record ni del fingerprint.
#[derive(Debug, Clone)]
pub struct Library {
    inner: Wrapper,
    id: Option<String>,
}

impl Library {
    pub fn new(record: &Record, id: Option<String>) -> Self {
        Library { inner: Wrapper::new(record), id }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl_tracked!(Library => inner);

record_accessors!(Library {
    name: String => "name",
    description: String => "description",
    deleted: bool => "deleted",
});

impl FromRecord for Library {
    fn from_record(record: &Record) -> WrapperResult<Self> {
        Ok(Library::new(record, None))
    }
}
