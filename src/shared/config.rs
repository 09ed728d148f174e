use std::env;

/// Startup configuration for the import subsystem.
///
/// Populated once from external configuration (environment variables by
/// default), passed into registry construction and read-only afterwards.
#[derive(Debug, Clone)]
pub struct ImporterConfig {
    /// API key for the Flickr album importer. The importer is only
    /// registered when a key is present.
    pub flickr_api_key: Option<String>,
    /// Timeout applied to every outbound request, in seconds.
    pub http_timeout_secs: u64,
    /// User agent sent with every outbound request.
    pub user_agent: String,
}

impl ImporterConfig {
    /// Load configuration from the environment, falling back to defaults.
    ///
    /// Reads `FLICKR_API_KEY`, `IMPORT_HTTP_TIMEOUT_SECS` and
    /// `IMPORT_USER_AGENT`. A `.env` file is honored when present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self {
            flickr_api_key: env::var("FLICKR_API_KEY").ok(),
            http_timeout_secs: env::var("IMPORT_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.http_timeout_secs),
            user_agent: env::var("IMPORT_USER_AGENT").unwrap_or(defaults.user_agent),
        }
    }
}

impl Default for ImporterConfig {
    fn default() -> Self {
        Self {
            flickr_api_key: None,
            http_timeout_secs: 30,
            user_agent: format!("TaskHive-Import/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
