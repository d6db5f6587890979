//! Shared fixtures for the integration flows.

use serde_json::{json, Value};
use sp_01_reorder::{
    InMemoryKVStore, KeyValueStore, PositionalMetaStore, Principal, ReorderConfig, ReorderHandler,
    ReorderPayload, SequentialOrderStore,
};
use std::sync::Arc;

/// API key accepted by gateway fixtures
pub const TEST_API_KEY: &str = "integration-test-key";

/// Handler plus direct views of both stores over one key-value store.
pub struct Site {
    pub kv: Arc<dyn KeyValueStore>,
    pub handler: ReorderHandler,
    pub posts: SequentialOrderStore,
    pub terms: PositionalMetaStore,
}

impl Site {
    /// In-memory site with the given posts (menu order 0) and terms.
    pub fn with_records(posts: &[&str], terms: &[&str]) -> Self {
        Self::over(Arc::new(InMemoryKVStore::new()), posts, terms)
    }

    /// Site over an existing store.
    pub fn over(kv: Arc<dyn KeyValueStore>, posts: &[&str], terms: &[&str]) -> Self {
        let config = ReorderConfig::default();
        let site = Self {
            handler: ReorderHandler::with_store(Arc::clone(&kv), config.clone()),
            posts: SequentialOrderStore::new(Arc::clone(&kv)),
            terms: PositionalMetaStore::new(Arc::clone(&kv), config.term_meta_key),
            kv,
        };
        for id in posts {
            site.posts
                .register_post(&(*id).into(), 0)
                .expect("register post");
        }
        for id in terms {
            site.terms.register_term(&(*id).into()).expect("register term");
        }
        site
    }

    pub fn menu_order(&self, id: &str) -> Option<i64> {
        self.posts.menu_order(&id.into()).expect("read menu order")
    }

    pub fn term_order(&self, id: &str) -> Option<i64> {
        self.terms.term_order(&id.into()).expect("read term order")
    }
}

/// Caller holding the default reorder capability.
pub fn editor() -> Principal {
    Principal::new("editor").with_capability("publish_posts")
}

/// Caller with read-only rights.
pub fn subscriber() -> Principal {
    Principal::new("subscriber").with_capability("read")
}

pub fn payload(order: Value, start: Value, object_type: &str) -> ReorderPayload {
    ReorderPayload {
        order: Some(order),
        start: Some(start),
        object_type: Some(json!(object_type)),
    }
}
