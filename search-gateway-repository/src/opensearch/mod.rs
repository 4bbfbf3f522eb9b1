//! OpenSearch implementation of the search engine client.
//!
//! This module provides a concrete implementation of `SearchEngineClient`
//! using OpenSearch as the backend.

mod client;
mod index_config;
pub mod queries;

pub use client::OpenSearchBackend;
pub use index_config::create_index_body;
