//! OpenSearch backend implementation.
//!
//! This module provides the concrete implementation of `SearchEngineClient`
//! using the OpenSearch Rust client.

use async_trait::async_trait;
use opensearch::{
    http::request::JsonBody,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    indices::{IndicesCreateParts, IndicesDeleteParts, IndicesExistsParts, IndicesGetParts},
    BulkParts, IndexParts, OpenSearch, SearchParts,
};
use serde_json::{json, Value};
use tracing::{debug, error, info, warn};
use url::Url;

use crate::config::BackendConfig;
use crate::errors::IndexServiceError;
use crate::interfaces::SearchEngineClient;
use crate::opensearch::index_config::create_index_body;
use crate::types::{BulkItemError, BulkSummary, DocumentReceipt};
use search_gateway_shared::{Document, IndexSettings, SearchSpec};

/// Error type the engine reports when creating an index that already exists.
const ALREADY_EXISTS_EXCEPTION: &str = "resource_already_exists_exception";

/// OpenSearch backend implementation.
///
/// Each method is a single request against the engine's HTTP API with the
/// client's default request options; there is no retry, caching, or local
/// timeout enforcement at this layer.
///
/// # Example
///
/// ```ignore
/// use search_gateway_repository::{BackendConfig, OpenSearchBackend};
/// use search_gateway_shared::IndexSettings;
///
/// let backend = OpenSearchBackend::new(&BackendConfig::from_env())?;
/// backend.create_index(&IndexSettings::new("index", 3, 2)).await?;
/// ```
pub struct OpenSearchBackend {
    client: OpenSearch,
}

impl OpenSearchBackend {
    /// Create a new backend connected to the configured URL.
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchBackend)` - A new backend instance
    /// * `Err(IndexServiceError)` - If connection setup fails
    pub fn new(config: &BackendConfig) -> Result<Self, IndexServiceError> {
        let parsed_url =
            Url::parse(&config.url).map_err(|e| IndexServiceError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let transport = TransportBuilder::new(conn_pool)
            .disable_proxy()
            .build()
            .map_err(|e| IndexServiceError::connection(e.to_string()))?;

        let client = OpenSearch::new(transport);

        info!(url = %config.url, "Created OpenSearch backend");

        Ok(Self { client })
    }

    /// Parse a document body into a JSON value.
    fn parse_body(document: &Document) -> Result<Value, IndexServiceError> {
        serde_json::from_str(&document.body).map_err(|e| {
            IndexServiceError::serialization(format!(
                "Document '{}' body is not valid JSON: {}",
                document.id, e
            ))
        })
    }

    /// Build the interleaved action/source lines of a bulk index request.
    fn bulk_index_lines(documents: &[Document]) -> Result<Vec<Value>, IndexServiceError> {
        let mut lines = Vec::with_capacity(documents.len() * 2);
        for document in documents {
            lines.push(json!({ "index": { "_id": document.id } }));
            lines.push(Self::parse_body(document)?);
        }
        Ok(lines)
    }

    /// Build the action lines of a bulk delete request.
    fn bulk_delete_lines(ids: &[String]) -> Vec<Value> {
        ids.iter()
            .map(|id| json!({ "delete": { "_id": id } }))
            .collect()
    }

    /// Fold a bulk response body into a `BulkSummary`.
    ///
    /// Each item is an object keyed by its action (`index`, `delete`, ...);
    /// an item failed when its action object carries an `error`.
    fn parse_bulk_response(body: &Value) -> BulkSummary {
        let empty = Vec::new();
        let items = body["items"].as_array().unwrap_or(&empty);

        let mut summary = BulkSummary {
            total: items.len(),
            ..BulkSummary::empty()
        };

        for item in items {
            let action = item
                .as_object()
                .and_then(|obj| obj.values().next())
                .cloned()
                .unwrap_or(Value::Null);

            if let Some(err) = action.get("error") {
                let reason = err["reason"]
                    .as_str()
                    .map(str::to_string)
                    .unwrap_or_else(|| err.to_string());
                summary.failed += 1;
                summary.failures.push(BulkItemError {
                    id: action["_id"].as_str().unwrap_or_default().to_string(),
                    status: action["status"].as_u64().unwrap_or(0) as u16,
                    reason,
                });
            } else {
                summary.succeeded += 1;
            }
        }

        summary
    }

    /// Extract hit bodies from a search response, in result order.
    fn extract_hits(body: &Value) -> Vec<String> {
        body["hits"]["hits"]
            .as_array()
            .map(|hits| {
                hits.iter()
                    .filter_map(|hit| hit.get("_source"))
                    .filter_map(|source| serde_json::to_string(source).ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Interpret the status of an existence check.
    ///
    /// Success means the index exists, 404 means it does not; any other
    /// status is an engine failure the caller must see, not an answer.
    fn exists_outcome(status: u16) -> Option<bool> {
        if (200..300).contains(&status) {
            Some(true)
        } else if status == 404 {
            Some(false)
        } else {
            None
        }
    }

    /// Check the `acknowledged` flag of an index administration response.
    fn check_acknowledged(
        body: &Value,
        operation: &str,
        index: &str,
    ) -> Result<(), IndexServiceError> {
        if body["acknowledged"].as_bool() == Some(true) {
            Ok(())
        } else {
            Err(IndexServiceError::unacknowledged(operation, index))
        }
    }
}

#[async_trait]
impl SearchEngineClient for OpenSearchBackend {
    /// Create an index with the configured sharding.
    ///
    /// The engine's create call is atomic: an already-existing index comes
    /// back as a `resource_already_exists_exception`, which is treated as the
    /// soft "already in desired state" condition rather than an error. This
    /// avoids the race a separate existence pre-check would introduce.
    async fn create_index(&self, settings: &IndexSettings) -> Result<(), IndexServiceError> {
        if let Some(ref description) = settings.description {
            info!(index = %settings.name, description = %description, "Creating index");
        }

        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(&settings.name))
            .body(create_index_body(settings))
            .send()
            .await
            .map_err(|e| IndexServiceError::index(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            if error_body.contains(ALREADY_EXISTS_EXCEPTION) {
                warn!(index = %settings.name, "Index already exists, skipping creation");
                return Ok(());
            }
            error!(status = %status, body = %error_body, "Create index request failed");
            return Err(IndexServiceError::index(format!(
                "Create index failed with status {}: {}",
                status, error_body
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| IndexServiceError::parse(e.to_string()))?;

        Self::check_acknowledged(&body, "create_index", &settings.name)?;

        debug!(index = %settings.name, shards = settings.shards, replicas = settings.replicas, "Index created");
        Ok(())
    }

    async fn get_index(&self, name: &str) -> Result<Value, IndexServiceError> {
        let response = self
            .client
            .indices()
            .get(IndicesGetParts::Index(&[name]))
            .send()
            .await
            .map_err(|e| IndexServiceError::metadata(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Get index request failed");
            return Err(IndexServiceError::metadata(format!(
                "Get index failed with status {}: {}",
                status, error_body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| IndexServiceError::parse(e.to_string()))
    }

    async fn index_exists(&self, name: &str) -> Result<bool, IndexServiceError> {
        let response = self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&[name]))
            .send()
            .await
            .map_err(|e| IndexServiceError::metadata(e.to_string()))?;

        let status = response.status_code();
        match Self::exists_outcome(status.as_u16()) {
            Some(exists) => Ok(exists),
            None => {
                let error_body = response.text().await.unwrap_or_default();
                error!(status = %status, body = %error_body, "Exists check failed");
                Err(IndexServiceError::metadata(format!(
                    "Exists check failed with status {}: {}",
                    status, error_body
                )))
            }
        }
    }

    /// Delete an index.
    ///
    /// A 404 means there is nothing to delete; like create-on-existing, this
    /// is a soft condition that is logged and returned as success.
    async fn delete_index(&self, name: &str) -> Result<(), IndexServiceError> {
        let response = self
            .client
            .indices()
            .delete(IndicesDeleteParts::Index(&[name]))
            .send()
            .await
            .map_err(|e| IndexServiceError::delete(e.to_string()))?;

        let status = response.status_code();

        if status.as_u16() == 404 {
            warn!(index = %name, "Index does not exist, skipping deletion");
            return Ok(());
        }

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Delete index request failed");
            return Err(IndexServiceError::delete(format!(
                "Delete index failed with status {}: {}",
                status, error_body
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| IndexServiceError::parse(e.to_string()))?;

        Self::check_acknowledged(&body, "delete_index", name)?;

        debug!(index = %name, "Index deleted");
        Ok(())
    }

    async fn index_document(
        &self,
        index: &str,
        document: &Document,
    ) -> Result<DocumentReceipt, IndexServiceError> {
        let source = Self::parse_body(document)?;

        let response = self
            .client
            .index(IndexParts::IndexId(index, &document.id))
            .body(source)
            .send()
            .await
            .map_err(|e| IndexServiceError::index(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Index document request failed");
            return Err(IndexServiceError::index(format!(
                "Index document failed with status {}: {}",
                status, error_body
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| IndexServiceError::parse(e.to_string()))?;

        let receipt = DocumentReceipt {
            id: body["_id"].as_str().unwrap_or(&document.id).to_string(),
            index: body["_index"].as_str().unwrap_or(index).to_string(),
            outcome: body["result"].as_str().unwrap_or_default().to_string(),
        };

        debug!(index = %index, doc_id = %receipt.id, outcome = %receipt.outcome, "Document indexed");
        Ok(receipt)
    }

    async fn bulk_index(
        &self,
        index: &str,
        documents: &[Document],
    ) -> Result<BulkSummary, IndexServiceError> {
        if documents.is_empty() {
            return Ok(BulkSummary::empty());
        }

        let lines: Vec<JsonBody<Value>> = Self::bulk_index_lines(documents)?
            .into_iter()
            .map(Into::into)
            .collect();

        let response = self
            .client
            .bulk(BulkParts::Index(index))
            .body(lines)
            .send()
            .await
            .map_err(|e| IndexServiceError::bulk(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Bulk index request failed");
            return Err(IndexServiceError::bulk(format!(
                "Bulk index failed with status {}: {}",
                status, error_body
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| IndexServiceError::parse(e.to_string()))?;

        let summary = Self::parse_bulk_response(&body);
        if summary.failed > 0 {
            warn!(
                index = %index,
                failed = summary.failed,
                total = summary.total,
                "Bulk index completed with item failures"
            );
        }
        Ok(summary)
    }

    async fn search(
        &self,
        index: &str,
        spec: &SearchSpec,
    ) -> Result<Vec<String>, IndexServiceError> {
        let mut body = json!({ "query": spec.query });
        if let Some(timeout) = spec.timeout_expr() {
            body["timeout"] = json!(timeout);
        }

        let response = self
            .client
            .search(SearchParts::Index(&[index]))
            .from(spec.from)
            .size(spec.size)
            .body(body)
            .send()
            .await
            .map_err(|e| IndexServiceError::query(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Search request failed");
            return Err(IndexServiceError::query(format!(
                "Search failed with status {}: {}",
                status, error_body
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| IndexServiceError::parse(e.to_string()))?;

        Ok(Self::extract_hits(&body))
    }

    async fn bulk_delete(
        &self,
        index: &str,
        ids: &[String],
    ) -> Result<BulkSummary, IndexServiceError> {
        if ids.is_empty() {
            return Ok(BulkSummary::empty());
        }

        let lines: Vec<JsonBody<Value>> = Self::bulk_delete_lines(ids)
            .into_iter()
            .map(Into::into)
            .collect();

        let response = self
            .client
            .bulk(BulkParts::Index(index))
            .body(lines)
            .send()
            .await
            .map_err(|e| IndexServiceError::bulk(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Bulk delete request failed");
            return Err(IndexServiceError::bulk(format!(
                "Bulk delete failed with status {}: {}",
                status, error_body
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| IndexServiceError::parse(e.to_string()))?;

        let summary = Self::parse_bulk_response(&body);
        if summary.failed > 0 {
            warn!(
                index = %index,
                failed = summary.failed,
                total = summary.total,
                "Bulk delete completed with item failures"
            );
        }
        Ok(summary)
    }
}
