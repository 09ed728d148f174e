use crate::domain::entities::{NewTask, StoredTask};
use crate::shared::errors::ImportResult;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Storage collaborator for imported tasks.
///
/// The import subsystem only needs duplicate lookup and creation; how the
/// platform persists tasks is not its concern.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Find a task under `project_id` whose info map is structurally equal
    /// to `info`.
    async fn find_by_info(
        &self,
        project_id: i64,
        info: &Map<String, Value>,
    ) -> ImportResult<Option<StoredTask>>;

    async fn create(&self, task: NewTask) -> ImportResult<StoredTask>;

    async fn filter_by_project(&self, project_id: i64) -> ImportResult<Vec<StoredTask>>;
}
