//! Inbound Ports (Driving Ports / API)

use crate::domain::entities::{ReorderReceipt, ReorderRequest};
use crate::domain::errors::ReorderError;
use async_trait::async_trait;

/// Primary Reorder API
#[async_trait]
pub trait ReorderApi: Send + Sync {
    /// Persist a new ordering for the identifiers in `request`.
    ///
    /// This is the main entry point. It:
    /// 1. Sanitizes and validates the identifier sequence
    /// 2. Selects the strategy registered for `object_type`
    /// 3. Applies the new order values through that strategy
    /// 4. Maps a zero-record outcome to [`ReorderError::NoOp`]
    async fn reorder(&self, request: ReorderRequest) -> Result<ReorderReceipt, ReorderError>;
}
