//! OpenSearch index creation bodies.
//!
//! This module renders `IndexSettings` into the JSON body of an index
//! creation request.

use serde_json::{json, Value};

use search_gateway_shared::IndexSettings;

/// Build the index creation body for the given settings.
///
/// Only the sharding configuration is sent; mappings are left to the
/// engine's dynamic mapping, since document bodies are opaque to this layer.
pub fn create_index_body(settings: &IndexSettings) -> Value {
    json!({
        "settings": {
            "number_of_shards": settings.shards,
            "number_of_replicas": settings.replicas
        }
    })
}
