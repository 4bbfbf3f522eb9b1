//! Search engine client trait definition.
//!
//! This module defines the abstract interface for search engine operations,
//! allowing for different backend implementations (OpenSearch, mock, etc.).

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::IndexServiceError;
use crate::types::{BulkSummary, DocumentReceipt};
use search_gateway_shared::{Document, IndexSettings, SearchSpec};

/// Abstract interface for search engine operations.
///
/// Implementations are injected into `IndexService` to enable mock-based
/// testing and backend swaps. Each method is a single request to the engine;
/// no retries are performed at this layer.
///
/// All implementations must be `Send + Sync` to allow use across async tasks.
#[async_trait]
pub trait SearchEngineClient: Send + Sync {
    /// Create an index with the given settings.
    ///
    /// Creating an index that already exists is a soft condition: it is
    /// logged and the call returns `Ok(())` without changing the index.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the index was created or already existed
    /// * `Err(IndexServiceError::Unacknowledged)` - If the engine did not
    ///   acknowledge the creation
    /// * `Err(IndexServiceError)` - If the request fails
    async fn create_index(&self, settings: &IndexSettings) -> Result<(), IndexServiceError>;

    /// Fetch the engine's metadata for an index, passed through unmodified.
    ///
    /// The index should exist; a missing index surfaces as an error.
    async fn get_index(&self, name: &str) -> Result<Value, IndexServiceError>;

    /// Check whether an index exists.
    async fn index_exists(&self, name: &str) -> Result<bool, IndexServiceError>;

    /// Delete an index.
    ///
    /// Deleting an index that does not exist is a soft condition: it is
    /// logged and the call returns `Ok(())`.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the index was deleted or did not exist
    /// * `Err(IndexServiceError::Unacknowledged)` - If the engine did not
    ///   acknowledge the deletion
    /// * `Err(IndexServiceError)` - If the request fails
    async fn delete_index(&self, name: &str) -> Result<(), IndexServiceError>;

    /// Index a single document.
    ///
    /// If a document with the same id already exists, it is replaced.
    async fn index_document(
        &self,
        index: &str,
        document: &Document,
    ) -> Result<DocumentReceipt, IndexServiceError>;

    /// Index multiple documents in a single bulk request.
    ///
    /// Per-item failures do not fail the call; they are reported in the
    /// returned summary.
    async fn bulk_index(
        &self,
        index: &str,
        documents: &[Document],
    ) -> Result<BulkSummary, IndexServiceError>;

    /// Execute a search and return the matching document bodies as
    /// JSON-encoded strings, in the engine's result order.
    async fn search(&self, index: &str, spec: &SearchSpec)
        -> Result<Vec<String>, IndexServiceError>;

    /// Delete multiple documents by id in a single bulk request.
    ///
    /// Per-item failures do not fail the call; they are reported in the
    /// returned summary.
    async fn bulk_delete(
        &self,
        index: &str,
        ids: &[String],
    ) -> Result<BulkSummary, IndexServiceError>;
}
