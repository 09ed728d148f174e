mod import_request;
mod import_source;

pub use import_request::ImportRequest;
pub use import_source::ImportSource;
