// galaxy-domain library entry point
pub mod dataset;
pub mod folder;
pub mod history;
pub mod library;
pub use dataset::{
    Dataset, DatasetSrc, HistoryDatasetAssociation, LibraryDataset,
    LibraryDatasetDatasetAssociation,
};
pub use folder::Folder;
pub use history::History;
pub use library::Library;
