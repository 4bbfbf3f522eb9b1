//! Configuration types for the search gateway.

use std::env;

/// Default OpenSearch URL.
const DEFAULT_OPENSEARCH_URL: &str = "http://localhost:9200";

/// Connection configuration for the search backend.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// The search engine URL, e.g. `http://localhost:9200`.
    pub url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_OPENSEARCH_URL.to_string(),
        }
    }
}

impl BackendConfig {
    /// Create a config for the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Read the config from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `OPENSEARCH_URL`: search engine URL (default: http://localhost:9200)
    pub fn from_env() -> Self {
        let url = env::var("OPENSEARCH_URL").unwrap_or_else(|_| DEFAULT_OPENSEARCH_URL.to_string());
        Self { url }
    }
}

/// Configuration for the `IndexService`.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Maximum number of documents allowed in a single batch operation.
    /// Set to None to disable the limit (not recommended for production).
    pub max_batch_size: Option<usize>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_batch_size: Some(1000),
        }
    }
}

impl ServiceConfig {
    /// Create a config with no batch size limit (use with caution).
    pub fn unlimited() -> Self {
        Self {
            max_batch_size: None,
        }
    }

    /// Create a config with a custom batch size limit.
    pub fn with_max_batch_size(max_batch_size: usize) -> Self {
        Self {
            max_batch_size: Some(max_batch_size),
        }
    }
}
