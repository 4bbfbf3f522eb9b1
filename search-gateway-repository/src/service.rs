//! Index service façade.
//!
//! This module provides the service application code calls. It validates
//! inputs, then delegates one-to-one to the injected `SearchEngineClient`;
//! every call is stateless and runs to completion on the caller's task.

use serde_json::Value;

use crate::config::ServiceConfig;
use crate::errors::IndexServiceError;
use crate::interfaces::SearchEngineClient;
use crate::types::{BulkSummary, DocumentReceipt};
use search_gateway_shared::{Document, IndexSettings, SearchSpec};

/// The main service for interacting with the search engine.
pub struct IndexService {
    backend: Box<dyn SearchEngineClient>,
    config: ServiceConfig,
}

impl IndexService {
    /// Create a new IndexService with default configuration.
    pub fn new(backend: Box<dyn SearchEngineClient>) -> Self {
        Self {
            backend,
            config: ServiceConfig::default(),
        }
    }

    /// Create a new IndexService with custom configuration.
    pub fn with_config(backend: Box<dyn SearchEngineClient>, config: ServiceConfig) -> Self {
        Self { backend, config }
    }

    /// Check if batch size exceeds the configured limit.
    fn validate_batch_size(&self, size: usize) -> Result<(), IndexServiceError> {
        if let Some(max) = self.config.max_batch_size {
            if size > max {
                return Err(IndexServiceError::batch_size_exceeded(size, max));
            }
        }
        Ok(())
    }

    /// Create an index with the given settings.
    ///
    /// Creating an index that already exists is a no-op from the caller's
    /// perspective: the condition is logged by the backend and the call
    /// returns `Ok(())`.
    pub async fn create_index(&self, settings: &IndexSettings) -> Result<(), IndexServiceError> {
        if settings.name.is_empty() {
            return Err(IndexServiceError::validation("index name is required"));
        }

        self.backend.create_index(settings).await
    }

    /// Fetch the engine's metadata for an index, passed through unmodified.
    pub async fn get_index(&self, name: &str) -> Result<Value, IndexServiceError> {
        self.backend.get_index(name).await
    }

    /// Check whether an index exists.
    pub async fn index_exists(&self, name: &str) -> Result<bool, IndexServiceError> {
        self.backend.index_exists(name).await
    }

    /// Delete an index.
    ///
    /// Deleting an index that does not exist is a no-op from the caller's
    /// perspective, mirroring `create_index`.
    pub async fn delete_index(&self, name: &str) -> Result<(), IndexServiceError> {
        self.backend.delete_index(name).await
    }

    /// Index a single document. Re-indexing an existing id overwrites it.
    pub async fn add(
        &self,
        index: &str,
        document: &Document,
    ) -> Result<DocumentReceipt, IndexServiceError> {
        if document.id.is_empty() {
            return Err(IndexServiceError::validation("document id is required"));
        }

        self.backend.index_document(index, document).await
    }

    /// Index multiple documents in a single bulk request.
    ///
    /// An empty batch short-circuits to an empty summary. Per-item failures
    /// do not fail the call; they are reported in the returned summary.
    ///
    /// The batch size is limited by the configured max_batch_size (default: 1000).
    pub async fn batch_add(
        &self,
        index: &str,
        documents: &[Document],
    ) -> Result<BulkSummary, IndexServiceError> {
        if documents.is_empty() {
            return Ok(BulkSummary::empty());
        }

        self.validate_batch_size(documents.len())?;

        if documents.iter().any(|d| d.id.is_empty()) {
            return Err(IndexServiceError::validation(
                "all documents must have an id",
            ));
        }

        self.backend.bulk_index(index, documents).await
    }

    /// Execute a search and return the matching document bodies as
    /// JSON-encoded strings, in the engine's result order.
    pub async fn search(
        &self,
        index: &str,
        spec: &SearchSpec,
    ) -> Result<Vec<String>, IndexServiceError> {
        self.backend.search(index, spec).await
    }

    /// Delete multiple documents by id in a single bulk request.
    ///
    /// An empty id list short-circuits to an empty summary. Ids that do not
    /// exist count as successful deletions.
    ///
    /// The batch size is limited by the configured max_batch_size (default: 1000).
    pub async fn delete_batch(
        &self,
        index: &str,
        ids: &[String],
    ) -> Result<BulkSummary, IndexServiceError> {
        if ids.is_empty() {
            return Ok(BulkSummary::empty());
        }

        self.validate_batch_size(ids.len())?;

        if ids.iter().any(|id| id.is_empty()) {
            return Err(IndexServiceError::validation("ids must be non-empty"));
        }

        self.backend.bulk_delete(index, ids).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opensearch::queries;
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::Mutex;
    use uuid::Uuid;

    /// In-memory backend for testing.
    ///
    /// Indices map document ids to JSON bodies; search supports `term` and
    /// `match_all` queries with pagination, enough to exercise the façade's
    /// contract without a running engine.
    struct MockBackend {
        indices: Arc<Mutex<BTreeMap<String, BTreeMap<String, String>>>>,
    }

    impl MockBackend {
        fn new() -> Self {
            Self {
                indices: Arc::new(Mutex::new(BTreeMap::new())),
            }
        }

        fn matches(query: &Value, body: &str) -> bool {
            if let Some(term) = query.get("term").and_then(Value::as_object) {
                let parsed: Value = serde_json::from_str(body).unwrap_or(Value::Null);
                term.iter().all(|(field, value)| &parsed[field] == value)
            } else {
                // match_all and anything else the mock does not model
                true
            }
        }
    }

    #[async_trait]
    impl SearchEngineClient for MockBackend {
        async fn create_index(&self, settings: &IndexSettings) -> Result<(), IndexServiceError> {
            let mut indices = self.indices.lock().await;
            // Soft condition: creating an existing index leaves it untouched
            indices
                .entry(settings.name.clone())
                .or_insert_with(BTreeMap::new);
            Ok(())
        }

        async fn get_index(&self, name: &str) -> Result<Value, IndexServiceError> {
            let indices = self.indices.lock().await;
            if indices.contains_key(name) {
                Ok(json!({ name: { "settings": {} } }))
            } else {
                Err(IndexServiceError::metadata(format!(
                    "no such index [{}]",
                    name
                )))
            }
        }

        async fn index_exists(&self, name: &str) -> Result<bool, IndexServiceError> {
            Ok(self.indices.lock().await.contains_key(name))
        }

        async fn delete_index(&self, name: &str) -> Result<(), IndexServiceError> {
            self.indices.lock().await.remove(name);
            Ok(())
        }

        async fn index_document(
            &self,
            index: &str,
            document: &Document,
        ) -> Result<DocumentReceipt, IndexServiceError> {
            let mut indices = self.indices.lock().await;
            let docs = indices.entry(index.to_string()).or_default();
            let outcome = if docs.contains_key(&document.id) {
                "updated"
            } else {
                "created"
            };
            docs.insert(document.id.clone(), document.body.clone());
            Ok(DocumentReceipt {
                id: document.id.clone(),
                index: index.to_string(),
                outcome: outcome.to_string(),
            })
        }

        async fn bulk_index(
            &self,
            index: &str,
            documents: &[Document],
        ) -> Result<BulkSummary, IndexServiceError> {
            let mut indices = self.indices.lock().await;
            let docs = indices.entry(index.to_string()).or_default();
            for document in documents {
                docs.insert(document.id.clone(), document.body.clone());
            }
            Ok(BulkSummary {
                total: documents.len(),
                succeeded: documents.len(),
                failed: 0,
                failures: vec![],
            })
        }

        async fn search(
            &self,
            index: &str,
            spec: &SearchSpec,
        ) -> Result<Vec<String>, IndexServiceError> {
            let indices = self.indices.lock().await;
            let docs = indices
                .get(index)
                .ok_or_else(|| IndexServiceError::query(format!("no such index [{}]", index)))?;

            Ok(docs
                .values()
                .filter(|body| Self::matches(&spec.query, body))
                .skip(spec.from as usize)
                .take(spec.size as usize)
                .cloned()
                .collect())
        }

        async fn bulk_delete(
            &self,
            index: &str,
            ids: &[String],
        ) -> Result<BulkSummary, IndexServiceError> {
            let mut indices = self.indices.lock().await;
            if let Some(docs) = indices.get_mut(index) {
                for id in ids {
                    docs.remove(id);
                }
            }
            Ok(BulkSummary {
                total: ids.len(),
                succeeded: ids.len(),
                failed: 0,
                failures: vec![],
            })
        }
    }

    fn service() -> IndexService {
        IndexService::new(Box::new(MockBackend::new()))
    }

    fn person_doc(id: &str, name: &str) -> Document {
        Document::from_value(id, &json!({ "name": name, "age": 30, "location": "beijing" }))
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_index_then_exists() {
        let service = service();
        let settings = IndexSettings::new("index", 3, 2);

        assert!(!service.index_exists("index").await.unwrap());
        service.create_index(&settings).await.unwrap();
        assert!(service.index_exists("index").await.unwrap());
    }

    #[tokio::test]
    async fn test_create_index_twice_is_noop() {
        let service = service();
        let settings = IndexSettings::new("index", 3, 2);

        service.create_index(&settings).await.unwrap();
        service.add("index", &person_doc("1", "alex")).await.unwrap();

        // Second create must not error and must not wipe existing documents
        service.create_index(&settings).await.unwrap();

        let spec = SearchSpec::new(queries::match_all());
        assert_eq!(service.search("index", &spec).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_index_empty_name() {
        let service = service();
        let settings = IndexSettings::new("", 1, 1);

        let err = service.create_index(&settings).await.unwrap_err();
        assert!(matches!(err, IndexServiceError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_delete_index() {
        let service = service();
        service
            .create_index(&IndexSettings::new("index", 1, 1))
            .await
            .unwrap();

        service.delete_index("index").await.unwrap();
        assert!(!service.index_exists("index").await.unwrap());

        // Deleting an absent index is a no-op
        service.delete_index("index").await.unwrap();
    }

    #[tokio::test]
    async fn test_get_index_metadata() {
        let service = service();
        service
            .create_index(&IndexSettings::new("index", 1, 1))
            .await
            .unwrap();

        let metadata = service.get_index("index").await.unwrap();
        assert!(metadata["index"].is_object());

        assert!(service.get_index("missing").await.is_err());
    }

    #[tokio::test]
    async fn test_add_requires_id() {
        let service = service();
        let document = Document::new("", r#"{"name":"alex"}"#);

        let err = service.add("index", &document).await.unwrap_err();
        assert!(matches!(err, IndexServiceError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_add_then_search_by_term() {
        let service = service();
        service
            .create_index(&IndexSettings::new("index", 3, 2))
            .await
            .unwrap();

        let receipt = service.add("index", &person_doc("1", "alex")).await.unwrap();
        assert_eq!(receipt.id, "1");
        assert_eq!(receipt.outcome, "created");

        let spec = SearchSpec::new(queries::term("name", "alex"))
            .with_from(0)
            .with_size(2)
            .with_timeout(Duration::from_secs(60));

        let results = service.search("index", &spec).await.unwrap();
        assert!(!results.is_empty());

        let first: Value = serde_json::from_str(&results[0]).unwrap();
        assert_eq!(first["name"], "alex");
    }

    #[tokio::test]
    async fn test_add_same_id_overwrites() {
        let service = service();

        let first = service.add("index", &person_doc("1", "alex")).await.unwrap();
        assert_eq!(first.outcome, "created");

        let second = service.add("index", &person_doc("1", "bob")).await.unwrap();
        assert_eq!(second.outcome, "updated");

        let results = service
            .search("index", &SearchSpec::new(queries::match_all()))
            .await
            .unwrap();
        assert_eq!(results.len(), 1);
    }

    #[tokio::test]
    async fn test_batch_add_empty() {
        let service = service();

        let summary = service.batch_add("index", &[]).await.unwrap();

        assert_eq!(summary.total, 0);
        assert!(summary.is_complete());
    }

    #[tokio::test]
    async fn test_batch_add_then_limited_search() {
        let service = service();
        service
            .create_index(&IndexSettings::new("index", 3, 2))
            .await
            .unwrap();

        let documents: Vec<Document> = (0..10)
            .map(|i| {
                Document::from_value(
                    i.to_string(),
                    &json!({ "name": "alex", "age": 30, "location": "beijing", "number": i }),
                )
                .unwrap()
            })
            .collect();

        let summary = service.batch_add("index", &documents).await.unwrap();
        assert_eq!(summary.total, 10);
        assert_eq!(summary.succeeded, 10);

        let spec = SearchSpec::new(queries::term("name", "alex"))
            .with_from(0)
            .with_size(2);
        let results = service.search("index", &spec).await.unwrap();
        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn test_batch_add_validates_ids() {
        let service = service();
        let documents = vec![
            Document::new("1", "{}"),
            Document::new("", "{}"),
        ];

        let err = service.batch_add("index", &documents).await.unwrap_err();
        assert!(matches!(err, IndexServiceError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_batch_add_size_exceeded() {
        let backend = MockBackend::new();
        let service = IndexService::with_config(Box::new(backend), ServiceConfig::with_max_batch_size(5));

        let documents: Vec<Document> = (0..10)
            .map(|_| Document::new(Uuid::new_v4().to_string(), "{}"))
            .collect();

        let err = service.batch_add("index", &documents).await.unwrap_err();
        assert!(matches!(
            err,
            IndexServiceError::BatchSizeExceeded {
                provided: 10,
                max: 5
            }
        ));
    }

    #[tokio::test]
    async fn test_batch_size_unlimited() {
        let backend = MockBackend::new();
        let service = IndexService::with_config(Box::new(backend), ServiceConfig::unlimited());

        let documents: Vec<Document> = (0..5000)
            .map(|_| Document::new(Uuid::new_v4().to_string(), "{}"))
            .collect();

        let summary = service.batch_add("index", &documents).await.unwrap();
        assert_eq!(summary.total, 5000);
    }

    #[tokio::test]
    async fn test_delete_batch_removes_exactly_those_ids() {
        let service = service();

        let documents: Vec<Document> = (0..5)
            .map(|i| person_doc(&i.to_string(), "alex"))
            .collect();
        service.batch_add("index", &documents).await.unwrap();

        let ids = vec!["1".to_string(), "3".to_string()];
        let summary = service.delete_batch("index", &ids).await.unwrap();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.succeeded, 2);

        let results = service
            .search("index", &SearchSpec::new(queries::match_all()))
            .await
            .unwrap();
        assert_eq!(results.len(), 3);
    }

    #[tokio::test]
    async fn test_delete_batch_empty() {
        let service = service();

        let summary = service.delete_batch("index", &[]).await.unwrap();
        assert_eq!(summary.total, 0);
    }

    #[tokio::test]
    async fn test_delete_batch_size_exceeded() {
        let backend = MockBackend::new();
        let service = IndexService::with_config(Box::new(backend), ServiceConfig::with_max_batch_size(2));

        let ids: Vec<String> = (0..3).map(|i| i.to_string()).collect();
        let err = service.delete_batch("index", &ids).await.unwrap_err();
        assert!(matches!(err, IndexServiceError::BatchSizeExceeded { .. }));
    }

    #[tokio::test]
    async fn test_delete_batch_validates_ids() {
        let service = service();
        let ids = vec!["1".to_string(), String::new()];

        let err = service.delete_batch("index", &ids).await.unwrap_err();
        assert!(matches!(err, IndexServiceError::ValidationError(_)));
    }
}
