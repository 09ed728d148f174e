use std::collections::HashMap;

use crate::domain::value_objects::ImportSource;
use crate::shared::errors::{BulkImportError, ImportResult};

/// One caller invocation of the import subsystem: a source tag plus the
/// backend-specific parameters that source understands.
///
/// Parameters are not validated here; the resolved importer pulls what it
/// needs and fails at call time when something is missing.
#[derive(Debug, Clone)]
pub struct ImportRequest {
    source: ImportSource,
    params: HashMap<String, String>,
}

impl ImportRequest {
    pub fn new(source: ImportSource) -> Self {
        Self {
            source,
            params: HashMap::new(),
        }
    }

    pub fn with_param(mut self, key: &str, value: impl Into<String>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    pub fn source(&self) -> ImportSource {
        self.source
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Fetch a required parameter, failing the call when it is absent.
    pub fn require(&self, key: &'static str) -> ImportResult<&str> {
        self.param(key)
            .ok_or(BulkImportError::MissingParameter(key))
    }
}
