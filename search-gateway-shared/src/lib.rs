//! # Search Gateway Shared
//!
//! Shared data types for the search gateway: documents, index settings,
//! and search specifications. These types carry no behavior beyond
//! construction helpers and are used on both sides of the
//! `SearchEngineClient` boundary.

pub mod document;
pub mod index;
pub mod query;

pub use document::Document;
pub use index::IndexSettings;
pub use query::SearchSpec;
