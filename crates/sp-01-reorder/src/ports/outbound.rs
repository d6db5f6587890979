//! Outbound Ports (Driven Ports / SPI)
//!
//! These are the interfaces the reorder service requires from the host.

use crate::domain::entities::ItemId;
use crate::domain::errors::{ReorderError, StoreError};
use async_trait::async_trait;

/// A pluggable reorder write for one object kind.
///
/// Implementations must only touch the identifiers in `order`.
#[async_trait]
pub trait OrderStrategy: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Write new order values for `order`.
    ///
    /// Returns the number of records affected. `Ok(0)` is the no-op outcome;
    /// the caller decides how to report it.
    async fn apply(&self, order: &[ItemId], start: u32) -> Result<usize, ReorderError>;
}

/// Abstract interface for key-value database operations.
///
/// Production: `RocksDbStore` (feature `rocksdb`)
/// Testing: `InMemoryKVStore`
///
/// Implementations synchronize internally so one store can back concurrent
/// reorder calls.
pub trait KeyValueStore: Send + Sync {
    /// Get a value by key.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;

    /// Put a single key-value pair.
    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError>;

    /// Execute an atomic batch write.
    ///
    /// Either ALL operations in the batch succeed, or NONE are applied.
    fn atomic_batch_write(&self, operations: Vec<BatchOperation>) -> Result<(), StoreError>;

    /// Check if a key exists.
    fn exists(&self, key: &[u8]) -> Result<bool, StoreError> {
        Ok(self.get(key)?.is_some())
    }
}

/// Put operation inside an atomic batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOperation {
    pub key: Vec<u8>,
    pub value: Vec<u8>,
}

impl BatchOperation {
    /// Create a Put operation.
    pub fn put(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
