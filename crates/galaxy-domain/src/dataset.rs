//! Datasets y sus tres variantes según el origen (`src`) que usa la API de
//! Galaxy para referenciarlos.
use galaxy_core::{impl_tracked, record_accessors, FromRecord, Record, Wrapper, WrapperResult};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetSrc {
    /// HistoryDatasetAssociation
    Hda,
    /// LibraryDatasetDatasetAssociation
    Ldda,
    /// LibraryDataset
    Ld,
}

impl DatasetSrc {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetSrc::Hda => "hda",
            DatasetSrc::Ldda => "ldda",
            DatasetSrc::Ld => "ld",
        }
    }
}

impl fmt::Display for DatasetSrc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Dataset {
    inner: Wrapper,
    src: DatasetSrc,
}

impl Dataset {
    pub fn new(record: &Record, src: DatasetSrc) -> Self {
        Dataset { inner: Wrapper::new(record), src }
    }

    pub fn src(&self) -> DatasetSrc {
        self.src
    }
}

impl_tracked!(Dataset => inner);

record_accessors!(Dataset {
    name: String => "name",
    state: String => "state",
    file_ext: String => "file_ext",
});

/// Declara un tipo de dataset con `src` fijo.
macro_rules! dataset_kind {
    ($(#[$meta:meta])* $name:ident => $src:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            dataset: Dataset,
        }

        impl $name {
            pub fn new(record: &Record) -> Self {
                $name { dataset: Dataset::new(record, $src) }
            }

            pub fn src(&self) -> DatasetSrc {
                self.dataset.src()
            }

            pub fn as_dataset(&self) -> &Dataset {
                &self.dataset
            }
        }

        impl_tracked!($name => dataset);

        impl FromRecord for $name {
            fn from_record(record: &Record) -> WrapperResult<Self> {
                Ok($name::new(record))
            }
        }
    };
}

dataset_kind!(
    /// Dataset dentro de una historia.
    HistoryDatasetAssociation => DatasetSrc::Hda
);
dataset_kind!(
    /// Dataset de biblioteca visto como asociación concreta.
    LibraryDatasetDatasetAssociation => DatasetSrc::Ldda
);
dataset_kind!(LibraryDataset => DatasetSrc::Ld);
