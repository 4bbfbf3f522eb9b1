//! Response types for index service operations.

use serde::Serialize;

/// Receipt for a single indexed document, extracted from the engine response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentReceipt {
    /// The document id as stored by the engine.
    pub id: String,
    /// The index the document was written to.
    pub index: String,
    /// Engine-reported outcome, e.g. `created` or `updated`.
    pub outcome: String,
}

/// Failure of a single item within a bulk request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkItemError {
    /// The document id the failed action referred to.
    pub id: String,
    /// HTTP status reported for the item.
    pub status: u16,
    /// Engine-reported failure reason.
    pub reason: String,
}

/// Summary of a bulk operation.
///
/// A bulk request succeeds or fails per item; this summary carries the
/// aggregate counts plus the individual failures so callers can handle
/// partial failures explicitly.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BulkSummary {
    /// Total number of actions in the bulk request.
    pub total: usize,
    /// Number of actions the engine applied.
    pub succeeded: usize,
    /// Number of actions that failed.
    pub failed: usize,
    /// One entry per failed action.
    pub failures: Vec<BulkItemError>,
}

impl BulkSummary {
    /// Summary for an empty batch.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether some, but not all, actions failed.
    pub fn is_partial_failure(&self) -> bool {
        self.failed > 0 && self.succeeded > 0
    }

    /// Whether every action was applied.
    pub fn is_complete(&self) -> bool {
        self.failed == 0
    }
}
