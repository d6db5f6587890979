//! Strategy Registry
//!
//! Maps each `ObjectType` to the `OrderStrategy` that persists it. New object
//! kinds are added by registering a strategy, never by editing the dispatcher.

use crate::adapters::{PositionalMetaStore, SequentialOrderStore};
use crate::config::ReorderConfig;
use crate::domain::entities::ObjectType;
use crate::ports::outbound::{KeyValueStore, OrderStrategy};
use std::collections::HashMap;
use std::sync::Arc;

/// Immutable once built; shared across concurrent calls.
#[derive(Clone, Default)]
pub struct StrategyRegistry {
    strategies: HashMap<ObjectType, Arc<dyn OrderStrategy>>,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard wiring: menu order for posts, term meta for terms, both over `kv`.
    pub fn standard(kv: Arc<dyn KeyValueStore>, config: &ReorderConfig) -> Self {
        let posts = SequentialOrderStore::new(Arc::clone(&kv))
            .with_matched_rows(config.count_matched_rows);
        let terms = PositionalMetaStore::new(kv, config.term_meta_key.clone());

        Self::new()
            .with_strategy(ObjectType::Post, Arc::new(posts))
            .with_strategy(ObjectType::Term, Arc::new(terms))
    }

    /// Register (or replace) the strategy for `object_type`.
    pub fn register(&mut self, object_type: ObjectType, strategy: Arc<dyn OrderStrategy>) {
        self.strategies.insert(object_type, strategy);
    }

    /// Builder form of [`register`](Self::register).
    pub fn with_strategy(mut self, object_type: ObjectType, strategy: Arc<dyn OrderStrategy>) -> Self {
        self.register(object_type, strategy);
        self
    }

    pub fn get(&self, object_type: ObjectType) -> Option<Arc<dyn OrderStrategy>> {
        self.strategies.get(&object_type).cloned()
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}
