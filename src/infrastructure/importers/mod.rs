use async_trait::async_trait;

use crate::domain::{ImportRequest, ImportSource, TaskRecord};
use crate::shared::errors::ImportResult;

mod csv_url;
mod epicollect;
mod flickr;
mod gdocs;
mod registry;
mod tabular;

pub use csv_url::CsvImporter;
pub use epicollect::EpiCollectImporter;
pub use flickr::FlickrImporter;
pub use gdocs::GoogleDocsImporter;
pub use registry::ImporterRegistry;

/// Lazy sequence of normalized records produced by one importer call.
pub type TaskStream = Box<dyn Iterator<Item = ImportResult<TaskRecord>> + Send>;

/// Source-specific fetch/validate/normalize capability.
///
/// Implementations are constructed once, hold no per-call state and are
/// shared behind `Arc` across import operations.
#[async_trait]
pub trait TaskImporter: Send + Sync {
    /// The source tag this importer handles.
    fn source(&self) -> ImportSource;

    /// Number of records the source currently holds.
    ///
    /// Agrees with [`tasks`](Self::tasks) on cardinality, barring source
    /// mutation between the two calls.
    async fn count_tasks(&self, request: &ImportRequest) -> ImportResult<usize>;

    /// Fetch and validate the source, returning its records lazily.
    ///
    /// Structural validation completes before the stream is handed back; no
    /// record is ever yielded ahead of a validation failure.
    async fn tasks(&self, request: &ImportRequest) -> ImportResult<TaskStream>;
}
