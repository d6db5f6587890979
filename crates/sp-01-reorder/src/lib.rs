//! # SP-01: Reorder Subsystem
//!
//! Persists a new display ordering for posts and taxonomy terms submitted by
//! the drag-and-drop admin list.
//!
//! ## Architecture
//!
//! - **Domain**: Request model, sanitization, errors, and ordering invariants
//! - **Ports**: Inbound (`ReorderApi`) and Outbound (`OrderStrategy`, `KeyValueStore`)
//! - **Adapters**: Sequential (menu order) and positional (term meta) strategies,
//!   in-memory and RocksDB key-value stores
//! - **Application**: Strategy registry and service orchestration
//! - **IPC**: Handler enforcing the capability check and building the response envelope
//!
//! ## Flow
//!
//! ```text
//! payload ──► ReorderHandler ──► ReorderService ──► StrategyRegistry
//!                 (auth)          (validate)          │
//!                                                     ├─► SequentialOrderStore (post)
//!                                                     └─► PositionalMetaStore  (term)
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ipc;
pub mod ports;

pub use adapters::{InMemoryKVStore, PositionalMetaStore, SequentialOrderStore};
pub use application::registry::StrategyRegistry;
pub use application::service::ReorderService;
pub use config::ReorderConfig;
pub use domain::entities::*;
pub use domain::errors::{ReorderError, StoreError};
pub use ipc::{Principal, ReorderHandler, ReorderPayload, ResponseEnvelope, RestResponse};
pub use ports::inbound::ReorderApi;
pub use ports::outbound::{BatchOperation, KeyValueStore, OrderStrategy};

#[cfg(feature = "rocksdb")]
pub use adapters::storage::rocksdb_adapter::{RocksDbConfig, RocksDbStore};
