use crate::Library;
use galaxy_core::{impl_tracked, record_accessors, Record, Wrapper};
use std::rc::Rc;

/// Carpeta dentro de una biblioteca. Varias carpetas comparten la misma
/// `Library`; la referencia no participa del fingerprint.
#[derive(Debug, Clone)]
pub struct Folder {
    inner: Wrapper,
    library: Rc<Library>,
}

impl Folder {
    pub fn new(record: &Record, library: Rc<Library>) -> Self {
        Folder { inner: Wrapper::new(record), library }
    }

    pub fn library(&self) -> &Library {
        &self.library
    }
}

impl_tracked!(Folder => inner);

record_accessors!(Folder {
    name: String => "name",
    description: String => "description",
});
