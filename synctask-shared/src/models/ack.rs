/// Write acknowledgments
///
/// Structured results describing the outcome of a store write, sent back
/// to HTTP clients verbatim. Field names are camelCase on the wire
/// (`insertedId`, `matchedCount`, ...); clients key off these spellings.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Result of a successful insert
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    /// Whether the write was acknowledged by the store
    pub acknowledged: bool,

    /// Store-generated identifier of the new document
    pub inserted_id: Uuid,
}

impl InsertAck {
    pub fn new(inserted_id: Uuid) -> Self {
        Self {
            acknowledged: true,
            inserted_id,
        }
    }
}

/// Result of an update
///
/// With Postgres a matched row is always rewritten, so the two counts
/// are equal; both are kept for wire compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAck {
    pub acknowledged: bool,

    /// Rows matching the identifier (0 or 1)
    pub matched_count: u64,

    /// Rows actually rewritten
    pub modified_count: u64,
}

impl UpdateAck {
    pub fn new(rows_affected: u64) -> Self {
        Self {
            acknowledged: true,
            matched_count: rows_affected,
            modified_count: rows_affected,
        }
    }
}

/// Result of a delete
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    pub acknowledged: bool,

    /// Rows removed (0 or 1)
    pub deleted_count: u64,
}

impl DeleteAck {
    pub fn new(deleted_count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }
}
