//! Error types for the Reorder Subsystem
//!
//! Every `ReorderError` variant carries a stable wire code and an
//! HTTP-equivalent status so the boundary never has to guess.

use super::entities::ItemId;
use thiserror::Error;

/// All errors that can occur while reordering
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReorderError {
    /// `order` missing, not a sequence, or empty after sanitization
    #[error("Order needs to be an array")]
    Validation { reason: &'static str },

    /// `object_type` is unknown or has no registered strategy
    #[error("Sorry this object type is not sortable at the moment.")]
    UnsupportedObjectType { object_type: String },

    /// The store reported zero affected records
    #[error("Nothing happened. Try again.")]
    NoOp,

    /// Some, but not all, independent writes succeeded
    #[error("Only {written} of {attempted} items were saved. Try again.")]
    PartialWrite {
        written: usize,
        attempted: usize,
        failed: Vec<ItemId>,
    },

    /// `start` is an integer beyond the storable range
    #[error("Start offset {start} is out of range")]
    StartOutOfRange { start: String },

    /// Too many identifiers in one request
    #[error("Batch size exceeded: {size} > {max}")]
    BatchTooLarge { size: usize, max: usize },

    /// Caller lacks the required capability
    #[error("Sorry, you are not allowed to do that.")]
    Unauthorized { capability: String },

    /// Backing store failure
    #[error("Storage failure: {0}")]
    Storage(#[from] StoreError),
}

impl ReorderError {
    /// Wire code reported in the response envelope.
    pub fn code(&self) -> &'static str {
        match self {
            ReorderError::Validation { .. } => "order-not-array",
            ReorderError::UnsupportedObjectType { .. } => "not-sortable",
            ReorderError::NoOp => "nothing-happened",
            ReorderError::PartialWrite { .. } => "partial-write",
            ReorderError::StartOutOfRange { .. } => "invalid-start",
            ReorderError::BatchTooLarge { .. } => "batch-too-large",
            ReorderError::Unauthorized { .. } => "rest_forbidden",
            ReorderError::Storage(_) => "storage-failure",
        }
    }

    /// HTTP-equivalent status.
    ///
    /// Validation keeps the legacy 500 so existing callers see the same status.
    pub fn status(&self) -> u16 {
        match self {
            ReorderError::Validation { .. } => 500,
            ReorderError::UnsupportedObjectType { .. } => 400,
            ReorderError::NoOp => 400,
            ReorderError::PartialWrite { .. } => 500,
            ReorderError::StartOutOfRange { .. } => 400,
            ReorderError::BatchTooLarge { .. } => 400,
            ReorderError::Unauthorized { .. } => 403,
            ReorderError::Storage(_) => 500,
        }
    }
}

/// Errors raised by key-value stores and the strategies built on them
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The record the write targets does not exist
    #[error("Record not found: {key}")]
    NotFound { key: String },

    /// Underlying I/O failure
    #[error("I/O error: {message}")]
    Io { message: String },

    /// A stored value could not be decoded
    #[error("Corrupted value at {key}")]
    Corrupted { key: String },
}
