//! Error types for the search gateway.

mod index_service_error;

pub use index_service_error::IndexServiceError;
