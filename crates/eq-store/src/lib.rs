//! eq-store: on-disk persistence for assembled phase documents.

pub mod hash;
pub mod manifest;
pub mod store;

pub use hash::compute_report_digest;
pub use manifest::{CategoryCounts, RunManifest};
pub use store::{PhaseStore, SavedDocuments};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
