//! Index creation settings.

use serde::{Deserialize, Serialize};

/// Creation-time settings for a search index.
///
/// The `description` is informational only: it is logged when the index is
/// created but never sent to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSettings {
    /// Index name (non-empty).
    pub name: String,
    /// Number of primary shards.
    pub shards: u32,
    /// Number of replicas per shard.
    pub replicas: u32,
    /// Optional human-readable description, logged at creation.
    pub description: Option<String>,
}

impl IndexSettings {
    /// Create settings with the given sharding configuration.
    pub fn new(name: impl Into<String>, shards: u32, replicas: u32) -> Self {
        Self {
            name: name.into(),
            shards,
            replicas,
            description: None,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let settings = IndexSettings::new("index", 3, 2).with_description("user profiles");

        assert_eq!(settings.name, "index");
        assert_eq!(settings.shards, 3);
        assert_eq!(settings.replicas, 2);
        assert_eq!(settings.description.as_deref(), Some("user profiles"));
    }

    #[test]
    fn test_default_description() {
        let settings = IndexSettings::new("index", 1, 1);
        assert!(settings.description.is_none());
    }
}
