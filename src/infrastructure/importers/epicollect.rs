use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::debug;

use super::{TaskImporter, TaskStream};
use crate::domain::{ImportRequest, ImportSource, TaskRecord};
use crate::infrastructure::http::Transport;
use crate::shared::errors::{BulkImportError, ImportResult};

const MSG_FORBIDDEN: &str =
    "Oops! It looks like you don't have permission to access the EpiCollect Plus project";
const MSG_NOT_JSON: &str = "Oops! That project and form do not look like the right one.";

/// Imports tasks from an EpiCollect Plus mobile data-collection project.
///
/// A single response is authoritative; the endpoint does not paginate.
pub struct EpiCollectImporter {
    transport: Arc<dyn Transport>,
}

impl EpiCollectImporter {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    fn form_url(project: &str, form: &str) -> String {
        format!("https://plus.epicollect.net/{}/{}.json", project, form)
    }

    async fn get_entries(&self, request: &ImportRequest) -> ImportResult<Vec<Map<String, Value>>> {
        let project = request.require("epicollect_project")?;
        let form = request.require("epicollect_form")?;

        let response = self
            .transport
            .get(&Self::form_url(project, form), &[])
            .await?;

        if response.status == 403 {
            return Err(BulkImportError::PermissionDenied(MSG_FORBIDDEN.to_string()));
        }
        if response.mime_type() != Some("application/json") {
            return Err(BulkImportError::WrongContentType(MSG_NOT_JSON.to_string()));
        }

        let entries: Vec<Map<String, Value>> = serde_json::from_str(&response.body)?;
        debug!(
            "EpiCollect project {} form {} returned {} entries",
            project,
            form,
            entries.len()
        );
        Ok(entries)
    }
}

#[async_trait]
impl TaskImporter for EpiCollectImporter {
    fn source(&self) -> ImportSource {
        ImportSource::EpiCollect
    }

    async fn count_tasks(&self, request: &ImportRequest) -> ImportResult<usize> {
        Ok(self.get_entries(request).await?.len())
    }

    /// Each form entry lands verbatim under `info`; nothing is promoted to
    /// a top-level field, unlike the tabular importers.
    async fn tasks(&self, request: &ImportRequest) -> ImportResult<TaskStream> {
        let entries = self.get_entries(request).await?;

        let records = entries
            .into_iter()
            .map(|entry| -> ImportResult<TaskRecord> { Ok(TaskRecord::new(entry)) });
        Ok(Box::new(records))
    }
}
