pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::{NewTask, StoredTask, TaskRecord};
pub use repositories::TaskRepository;
pub use value_objects::{ImportRequest, ImportSource};
