use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use super::{CsvImporter, EpiCollectImporter, FlickrImporter, GoogleDocsImporter, TaskImporter};
use crate::domain::ImportSource;
use crate::infrastructure::http::{ReqwestTransport, Transport};
use crate::shared::config::ImporterConfig;
use crate::shared::errors::{BulkImportError, ImportResult};

/// Resolution table from source tag to a constructed importer.
///
/// Importers are built once and reused across import operations. Sources
/// that need runtime configuration (Flickr and its API key) are registered
/// after construction.
pub struct ImporterRegistry {
    importers: HashMap<ImportSource, Arc<dyn TaskImporter>>,
}

impl ImporterRegistry {
    /// Build the default registry over the given transport: CSV, Google
    /// Docs and EpiCollect Plus.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        let mut importers: HashMap<ImportSource, Arc<dyn TaskImporter>> = HashMap::new();
        importers.insert(
            ImportSource::Csv,
            Arc::new(CsvImporter::new(Arc::clone(&transport))),
        );
        importers.insert(
            ImportSource::GoogleDocs,
            Arc::new(GoogleDocsImporter::new(Arc::clone(&transport))),
        );
        importers.insert(
            ImportSource::EpiCollect,
            Arc::new(EpiCollectImporter::new(transport)),
        );

        Self { importers }
    }

    /// Build a registry from startup configuration, creating the shared
    /// HTTP transport and registering Flickr when an API key is present.
    pub fn from_config(config: &ImporterConfig) -> ImportResult<Self> {
        let transport: Arc<dyn Transport> = Arc::new(ReqwestTransport::new(
            config.http_timeout_secs,
            &config.user_agent,
        )?);

        let mut registry = Self::new(Arc::clone(&transport));
        if let Some(api_key) = &config.flickr_api_key {
            registry.register(Arc::new(FlickrImporter::new(transport, api_key.clone())));
        }
        Ok(registry)
    }

    /// Add or override an importer under its own source tag.
    pub fn register(&mut self, importer: Arc<dyn TaskImporter>) {
        info!("Registered {} importer", importer.source());
        self.importers.insert(importer.source(), importer);
    }

    pub fn resolve(&self, source: ImportSource) -> ImportResult<Arc<dyn TaskImporter>> {
        self.importers
            .get(&source)
            .cloned()
            .ok_or_else(|| BulkImportError::UnknownSource(source.to_string()))
    }

    /// Source tags currently registered, for discoverability by callers.
    pub fn available_sources(&self) -> Vec<ImportSource> {
        self.importers.keys().copied().collect()
    }
}
