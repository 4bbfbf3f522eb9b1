//! Index service error types.
//!
//! This module defines the error type shared by every gateway operation.

use thiserror::Error;

/// Errors that can occur during index service operations.
#[derive(Debug, Clone, Error)]
pub enum IndexServiceError {
    /// Validation error (e.g., empty index name or document id).
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Failed to reach or set up the connection to the search engine.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The engine responded but did not acknowledge a cluster-state change.
    /// This is fatal: the administrative operation may not have been applied.
    #[error("Operation '{operation}' on index '{index}' was not acknowledged")]
    Unacknowledged { operation: String, index: String },

    /// Failed to index a single document.
    #[error("Index error: {0}")]
    IndexError(String),

    /// A bulk request failed at the transport level.
    #[error("Bulk error: {0}")]
    BulkError(String),

    /// Search query execution failed.
    #[error("Query error: {0}")]
    QueryError(String),

    /// Failed to delete an index or document.
    #[error("Delete error: {0}")]
    DeleteError(String),

    /// Failed to fetch index metadata.
    #[error("Metadata error: {0}")]
    MetadataError(String),

    /// Failed to parse a response from the search engine.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Failed to serialize data for the search engine.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Batch size exceeds the configured maximum.
    #[error("Batch size {provided} exceeds maximum {max}")]
    BatchSizeExceeded { provided: usize, max: usize },
}

impl IndexServiceError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create an unacknowledged-operation error.
    pub fn unacknowledged(operation: impl Into<String>, index: impl Into<String>) -> Self {
        Self::Unacknowledged {
            operation: operation.into(),
            index: index.into(),
        }
    }

    /// Create an index error.
    pub fn index(msg: impl Into<String>) -> Self {
        Self::IndexError(msg.into())
    }

    /// Create a bulk error.
    pub fn bulk(msg: impl Into<String>) -> Self {
        Self::BulkError(msg.into())
    }

    /// Create a query error.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::QueryError(msg.into())
    }

    /// Create a delete error.
    pub fn delete(msg: impl Into<String>) -> Self {
        Self::DeleteError(msg.into())
    }

    /// Create a metadata error.
    pub fn metadata(msg: impl Into<String>) -> Self {
        Self::MetadataError(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }

    /// Create a batch size exceeded error.
    pub fn batch_size_exceeded(provided: usize, max: usize) -> Self {
        Self::BatchSizeExceeded { provided, max }
    }
}
