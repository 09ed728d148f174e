use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One normalized unit of source data produced by an importer.
///
/// Every record carries an `info` map, even an empty one. Columns a source
/// marks as special (reserved tabular headers such as `priority_0`) are kept
/// out of `info` and become top-level task fields instead.
///
/// Records carry no identity; duplicate detection is structural equality on
/// `info`, scoped to one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TaskRecord {
    pub info: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TaskRecord {
    pub fn new(info: Map<String, Value>) -> Self {
        Self {
            info,
            extra: Map::new(),
        }
    }

    pub fn with_extra(info: Map<String, Value>, extra: Map<String, Value>) -> Self {
        Self { info, extra }
    }
}

/// A record bound to the project it will be created under.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask {
    pub project_id: i64,
    pub record: TaskRecord,
}

/// A task as handed back by the storage collaborator.
///
/// The import subsystem never inspects anything here beyond `record.info`;
/// the rest is opaque platform state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredTask {
    pub id: i64,
    pub project_id: i64,
    pub record: TaskRecord,
}
