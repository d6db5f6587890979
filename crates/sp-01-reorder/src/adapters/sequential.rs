//! Sequential Order Store
//!
//! Implements `OrderStrategy` for posts by writing a dense menu order,
//! `start, start+1, ...`, in a single atomic batch.

use super::storage::{decode_value, encode_value, menu_order_key};
use crate::domain::assignment::sequential_assignments;
use crate::domain::entities::{ItemId, OrderValue};
use crate::domain::errors::{ReorderError, StoreError};
use crate::ports::outbound::{BatchOperation, KeyValueStore, OrderStrategy};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Menu-order strategy over a key-value store.
///
/// Behaves like a set-membership `UPDATE`: identifiers without a post record
/// are skipped, and by default only rows whose value actually changes count
/// as affected.
pub struct SequentialOrderStore {
    kv: Arc<dyn KeyValueStore>,
    count_matched_rows: bool,
}

impl SequentialOrderStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            kv,
            count_matched_rows: false,
        }
    }

    /// Count every matched row, changed or not.
    pub fn with_matched_rows(mut self, count_matched_rows: bool) -> Self {
        self.count_matched_rows = count_matched_rows;
        self
    }

    /// Create a post record with an initial menu order.
    pub fn register_post(&self, id: &ItemId, menu_order: OrderValue) -> Result<(), StoreError> {
        self.kv.put(&menu_order_key(id), &encode_value(menu_order))
    }

    /// Current menu order of a post, `None` if the post does not exist.
    pub fn menu_order(&self, id: &ItemId) -> Result<Option<OrderValue>, StoreError> {
        let key = menu_order_key(id);
        self.kv
            .get(&key)?
            .map(|bytes| decode_value(&key, &bytes))
            .transpose()
    }
}

#[async_trait]
impl OrderStrategy for SequentialOrderStore {
    fn name(&self) -> &'static str {
        "sequential"
    }

    async fn apply(&self, order: &[ItemId], start: u32) -> Result<usize, ReorderError> {
        let assignments = sequential_assignments(order, start);
        let mut batch = Vec::with_capacity(assignments.len());
        let mut missing = 0usize;

        for assignment in &assignments {
            let key = menu_order_key(&assignment.id);
            let Some(current) = self.kv.get(&key)? else {
                missing += 1;
                continue;
            };

            let unchanged = decode_value(&key, &current)? == assignment.value;
            if unchanged && !self.count_matched_rows {
                continue;
            }
            batch.push(BatchOperation::put(key, encode_value(assignment.value)));
        }

        let affected = batch.len();
        if affected > 0 {
            self.kv.atomic_batch_write(batch)?;
        }

        debug!(
            requested = order.len(),
            distinct = assignments.len(),
            missing,
            affected,
            start,
            "Menu order batch applied"
        );

        Ok(affected)
    }
}
