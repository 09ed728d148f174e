use std::sync::Arc;

use async_trait::async_trait;

use super::{tabular, TaskImporter, TaskStream};
use crate::domain::{ImportRequest, ImportSource};
use crate::infrastructure::http::Transport;
use crate::shared::errors::ImportResult;

/// Imports tasks from a spreadsheet shared through Google Docs.
///
/// Delegates to the same fetch-and-parse routine as the CSV importer once
/// the document's CSV export URL is built, so both report identical
/// validation failures.
pub struct GoogleDocsImporter {
    transport: Arc<dyn Transport>,
}

impl GoogleDocsImporter {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Force the CSV rendition of the shared document.
    fn export_url(document_url: &str) -> String {
        format!("{}&output=csv", document_url)
    }
}

#[async_trait]
impl TaskImporter for GoogleDocsImporter {
    fn source(&self) -> ImportSource {
        ImportSource::GoogleDocs
    }

    async fn count_tasks(&self, request: &ImportRequest) -> ImportResult<usize> {
        let url = Self::export_url(request.require("googledocs_url")?);
        tabular::count(self.transport.as_ref(), &url).await
    }

    async fn tasks(&self, request: &ImportRequest) -> ImportResult<TaskStream> {
        let url = Self::export_url(request.require("googledocs_url")?);
        tabular::fetch(self.transport.as_ref(), &url).await
    }
}
