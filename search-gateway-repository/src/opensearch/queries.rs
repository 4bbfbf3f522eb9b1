//! Query DSL builders.
//!
//! Small helpers for constructing the query half of a `SearchSpec`. Callers
//! are free to build arbitrary DSL themselves; these cover the common cases.

use serde_json::{json, Value};

/// Build a term query for an exact match on a single field.
pub fn term(field: &str, value: impl Into<Value>) -> Value {
    json!({
        "term": { field: value.into() }
    })
}

/// Build a match query with full-text analysis on a single field.
pub fn match_field(field: &str, value: impl Into<Value>) -> Value {
    json!({
        "match": { field: value.into() }
    })
}

/// Build a query matching every document in the index.
pub fn match_all() -> Value {
    json!({ "match_all": {} })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term() {
        let query = term("name", "alex");
        assert_eq!(query["term"]["name"], "alex");
    }

    #[test]
    fn test_term_numeric() {
        let query = term("age", 30);
        assert_eq!(query["term"]["age"], 30);
    }

    #[test]
    fn test_match_field() {
        let query = match_field("description", "knowledge graph");
        assert_eq!(query["match"]["description"], "knowledge graph");
    }

    #[test]
    fn test_match_all() {
        let query = match_all();
        assert!(query["match_all"].is_object());
    }
}
