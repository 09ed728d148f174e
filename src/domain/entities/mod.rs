mod task;

pub use task::{NewTask, StoredTask, TaskRecord};
