//! Bulk task import subsystem for the TaskHive crowdsourcing platform.
//!
//! Turns heterogeneous external sources (a Flickr album, a Google Docs
//! spreadsheet, a CSV file behind a URL, an EpiCollect Plus project) into a
//! uniform stream of task records, then converts those records into
//! created-or-skipped tasks against the platform's storage.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use application::{ImportReport, ImportService};
pub use domain::{ImportRequest, ImportSource, NewTask, StoredTask, TaskRecord, TaskRepository};
pub use infrastructure::importers::{ImporterRegistry, TaskImporter, TaskStream};
pub use shared::{init_logger, BulkImportError, ImportResult, ImporterConfig};
