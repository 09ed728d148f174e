use std::fmt;

use tracing::{debug, info};

use crate::domain::{ImportRequest, ImportSource, NewTask, TaskRepository};
use crate::infrastructure::importers::ImporterRegistry;
use crate::shared::config::ImporterConfig;
use crate::shared::errors::ImportResult;

/// Outcome of one `create_tasks` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportReport {
    pub created: usize,
    pub skipped: usize,
}

impl ImportReport {
    /// Canonical user-facing summary.
    pub fn message(&self) -> String {
        match self.created {
            0 => "It looks like there were no new records to import".to_string(),
            1 => "1 new task was imported successfully".to_string(),
            n => format!("{} new tasks were imported successfully", n),
        }
    }
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Facade converting importer output into created-or-skipped tasks.
///
/// Importer failures pass through untouched; the service owns only the
/// resolution of the source tag and the create/skip accounting.
pub struct ImportService {
    registry: ImporterRegistry,
}

impl ImportService {
    pub fn new(registry: ImporterRegistry) -> Self {
        Self { registry }
    }

    pub fn from_config(config: &ImporterConfig) -> ImportResult<Self> {
        Ok(Self::new(ImporterRegistry::from_config(config)?))
    }

    /// Mutable access to the registry, for registering configured
    /// importers after construction.
    pub fn registry_mut(&mut self) -> &mut ImporterRegistry {
        &mut self.registry
    }

    pub fn available_sources(&self) -> Vec<ImportSource> {
        self.registry.available_sources()
    }

    pub async fn count_tasks(&self, request: &ImportRequest) -> ImportResult<usize> {
        let importer = self.registry.resolve(request.source())?;
        importer.count_tasks(request).await
    }

    /// Import every record the source yields, creating a task for each one
    /// whose `info` is not already stored under `project_id` and skipping
    /// the rest.
    pub async fn create_tasks(
        &self,
        repo: &dyn TaskRepository,
        project_id: i64,
        request: &ImportRequest,
    ) -> ImportResult<ImportReport> {
        let importer = self.registry.resolve(request.source())?;
        let mut report = ImportReport::default();

        for record in importer.tasks(request).await? {
            let record = record?;

            if repo
                .find_by_info(project_id, &record.info)
                .await?
                .is_some()
            {
                debug!("Skipping duplicate record for project {}", project_id);
                report.skipped += 1;
                continue;
            }

            repo.create(NewTask { project_id, record }).await?;
            report.created += 1;
        }

        info!(
            "Import for project {} from {}: {} created, {} skipped",
            project_id,
            request.source(),
            report.created,
            report.skipped
        );
        Ok(report)
    }
}
