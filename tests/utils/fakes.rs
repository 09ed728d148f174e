use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Map, Value};

use taskhive_import::infrastructure::http::{FetchedResponse, Transport};
use taskhive_import::{BulkImportError, ImportResult, NewTask, StoredTask, TaskRepository};

/// One outbound request captured by [`FakeTransport`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_query_key(&self, key: &str) -> bool {
        self.query_value(key).is_some()
    }
}

/// Transport double that pops canned responses in order and records every
/// outbound request.
pub struct FakeTransport {
    responses: Mutex<Vec<FetchedResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl FakeTransport {
    pub fn new(responses: Vec<FetchedResponse>) -> Self {
        Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn single(response: FetchedResponse) -> Self {
        Self::new(vec![response])
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn get(&self, url: &str, query: &[(String, String)]) -> ImportResult<FetchedResponse> {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            query: query.to_vec(),
        });

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(BulkImportError::Transport(
                "FakeTransport ran out of canned responses".to_string(),
            ));
        }
        Ok(responses.remove(0))
    }
}

/// In-memory [`TaskRepository`] for exercising the import service.
#[derive(Default)]
pub struct InMemoryTaskRepository {
    tasks: Mutex<Vec<StoredTask>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(tasks: Vec<StoredTask>) -> Self {
        Self {
            tasks: Mutex::new(tasks),
        }
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn find_by_info(
        &self,
        project_id: i64,
        info: &Map<String, Value>,
    ) -> ImportResult<Option<StoredTask>> {
        Ok(self
            .tasks
            .lock()
            .unwrap()
            .iter()
            .find(|task| task.project_id == project_id && &task.record.info == info)
            .cloned())
    }

    async fn create(&self, task: NewTask) -> ImportResult<StoredTask> {
        let mut tasks = self.tasks.lock().unwrap();
        let stored = StoredTask {
            id: tasks.len() as i64 + 1,
            project_id: task.project_id,
            record: task.record,
        };
        tasks.push(stored.clone());
        Ok(stored)
    }

    async fn filter_by_project(&self, project_id: i64) -> ImportResult<Vec<StoredTask>> {
        Ok(self
            .tasks
            .lock()
            .unwrap()
            .iter()
            .filter(|task| task.project_id == project_id)
            .cloned()
            .collect())
    }
}
