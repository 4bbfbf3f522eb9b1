//! # Search Gateway Repository
//!
//! This crate provides the service layer for interacting with the search
//! engine. It includes definitions for errors, the abstract client
//! interface, a concrete implementation for OpenSearch, and the
//! `IndexService` façade that application code calls.

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod opensearch;
pub mod service;
pub mod types;

pub use config::{BackendConfig, ServiceConfig};
pub use errors::IndexServiceError;
pub use interfaces::SearchEngineClient;
pub use opensearch::OpenSearchBackend;
pub use service::IndexService;
pub use types::{BulkItemError, BulkSummary, DocumentReceipt};
