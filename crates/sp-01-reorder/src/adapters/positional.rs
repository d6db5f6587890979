//! Positional Meta Store
//!
//! Implements `OrderStrategy` for taxonomy terms by recording each term's
//! 1-based position as a meta value. Writes are independent per term.

use super::storage::{decode_value, encode_value, term_key, term_meta_key};
use crate::domain::assignment::{positional_assignments, Assignment};
use crate::domain::entities::{ItemId, OrderValue};
use crate::domain::errors::{ReorderError, StoreError};
use crate::ports::outbound::{KeyValueStore, OrderStrategy};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

/// Term-meta strategy over a key-value store.
pub struct PositionalMetaStore {
    kv: Arc<dyn KeyValueStore>,
    meta_key: String,
}

impl PositionalMetaStore {
    pub fn new(kv: Arc<dyn KeyValueStore>, meta_key: impl Into<String>) -> Self {
        Self {
            kv,
            meta_key: meta_key.into(),
        }
    }

    /// Create a term record.
    pub fn register_term(&self, id: &ItemId) -> Result<(), StoreError> {
        self.kv.put(&term_key(id), &[])
    }

    /// Current position of a term, `None` if never written.
    pub fn term_order(&self, id: &ItemId) -> Result<Option<OrderValue>, StoreError> {
        let key = term_meta_key(id, &self.meta_key);
        self.kv
            .get(&key)?
            .map(|bytes| decode_value(&key, &bytes))
            .transpose()
    }

    fn write_position(&self, assignment: &Assignment) -> Result<(), StoreError> {
        let term = term_key(&assignment.id);
        if !self.kv.exists(&term)? {
            return Err(StoreError::NotFound {
                key: String::from_utf8_lossy(&term).into_owned(),
            });
        }
        self.kv.put(
            &term_meta_key(&assignment.id, &self.meta_key),
            &encode_value(assignment.value),
        )
    }
}

#[async_trait]
impl OrderStrategy for PositionalMetaStore {
    fn name(&self) -> &'static str {
        "positional"
    }

    /// `start` is ignored; positions always begin at 1.
    async fn apply(&self, order: &[ItemId], _start: u32) -> Result<usize, ReorderError> {
        let assignments = positional_assignments(order);
        let attempted = assignments.len();
        let mut written = 0usize;
        let mut failed = Vec::new();
        let mut first_io_error = None;

        for assignment in &assignments {
            match self.write_position(assignment) {
                Ok(()) => written += 1,
                Err(e) => {
                    warn!(term_id = %assignment.id, error = %e, "Term position write failed");
                    if first_io_error.is_none() && !matches!(e, StoreError::NotFound { .. }) {
                        first_io_error = Some(e);
                    }
                    failed.push(assignment.id.clone());
                }
            }
        }

        debug!(attempted, written, failed = failed.len(), "Term positions applied");

        if written == 0 {
            // Nothing landed: a store fault is a hard error, missing terms are a no-op
            return match first_io_error {
                Some(e) => Err(ReorderError::Storage(e)),
                None => Ok(0),
            };
        }

        if !failed.is_empty() {
            return Err(ReorderError::PartialWrite {
                written,
                attempted,
                failed,
            });
        }

        Ok(written)
    }
}
