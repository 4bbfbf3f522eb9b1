//! Search request specification.

use std::time::Duration;

use serde_json::Value;

/// Default page size when none is specified.
const DEFAULT_SIZE: i64 = 10;

/// A fully caller-constructed search request.
///
/// The `query` holds the engine's query DSL as JSON; this layer does not
/// interpret it. Pagination (`from`/`size`) and the optional `timeout` are
/// applied by the engine, not enforced locally.
#[derive(Debug, Clone)]
pub struct SearchSpec {
    /// Query DSL, e.g. `{"term": {"name": "alex"}}`.
    pub query: Value,
    /// Offset of the first hit to return.
    pub from: i64,
    /// Maximum number of hits to return.
    pub size: i64,
    /// Engine-side search timeout.
    pub timeout: Option<Duration>,
}

impl SearchSpec {
    /// Create a spec for the given query with default pagination.
    pub fn new(query: Value) -> Self {
        Self {
            query,
            from: 0,
            size: DEFAULT_SIZE,
            timeout: None,
        }
    }

    /// Set the offset of the first hit.
    pub fn with_from(mut self, from: i64) -> Self {
        self.from = from;
        self
    }

    /// Set the maximum number of hits.
    pub fn with_size(mut self, size: i64) -> Self {
        self.size = size;
        self
    }

    /// Set the engine-side timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Render the timeout as an engine time expression (`60s`, `500ms`).
    ///
    /// Granularity is one millisecond: whole seconds render as `Ns`,
    /// anything else in milliseconds, and a non-zero sub-millisecond
    /// duration rounds up to `1ms` so it never renders as a zero timeout.
    pub fn timeout_expr(&self) -> Option<String> {
        self.timeout.map(|t| {
            if t.subsec_nanos() == 0 {
                format!("{}s", t.as_secs())
            } else {
                format!("{}ms", t.as_millis().max(1))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let spec = SearchSpec::new(json!({"match_all": {}}));

        assert_eq!(spec.from, 0);
        assert_eq!(spec.size, DEFAULT_SIZE);
        assert!(spec.timeout.is_none());
        assert!(spec.timeout_expr().is_none());
    }

    #[test]
    fn test_builder() {
        let spec = SearchSpec::new(json!({"term": {"name": "alex"}}))
            .with_from(0)
            .with_size(2)
            .with_timeout(Duration::from_secs(60));

        assert_eq!(spec.from, 0);
        assert_eq!(spec.size, 2);
        assert_eq!(spec.timeout, Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_timeout_expr_seconds() {
        let spec = SearchSpec::new(json!({"match_all": {}})).with_timeout(Duration::from_secs(60));
        assert_eq!(spec.timeout_expr().as_deref(), Some("60s"));
    }

    #[test]
    fn test_timeout_expr_millis() {
        let spec =
            SearchSpec::new(json!({"match_all": {}})).with_timeout(Duration::from_millis(1500));
        assert_eq!(spec.timeout_expr().as_deref(), Some("1500ms"));
    }

    #[test]
    fn test_timeout_expr_sub_millisecond_rounds_up() {
        let spec =
            SearchSpec::new(json!({"match_all": {}})).with_timeout(Duration::from_micros(500));
        assert_eq!(spec.timeout_expr().as_deref(), Some("1ms"));
    }

    #[test]
    fn test_timeout_expr_zero() {
        let spec = SearchSpec::new(json!({"match_all": {}})).with_timeout(Duration::ZERO);
        assert_eq!(spec.timeout_expr().as_deref(), Some("0s"));
    }
}
