use std::sync::Arc;

use async_trait::async_trait;

use super::{tabular, TaskImporter, TaskStream};
use crate::domain::{ImportRequest, ImportSource};
use crate::infrastructure::http::Transport;
use crate::shared::errors::ImportResult;

/// Imports tasks from a CSV file reachable by URL.
pub struct CsvImporter {
    transport: Arc<dyn Transport>,
}

impl CsvImporter {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl TaskImporter for CsvImporter {
    fn source(&self) -> ImportSource {
        ImportSource::Csv
    }

    async fn count_tasks(&self, request: &ImportRequest) -> ImportResult<usize> {
        let url = request.require("csv_url")?;
        tabular::count(self.transport.as_ref(), url).await
    }

    async fn tasks(&self, request: &ImportRequest) -> ImportResult<TaskStream> {
        let url = request.require("csv_url")?;
        tabular::fetch(self.transport.as_ref(), url).await
    }
}
