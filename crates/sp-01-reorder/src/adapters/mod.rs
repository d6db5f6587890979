//! # Adapters Layer (Hexagonal Architecture)
//!
//! Order strategies for each object kind and the key-value stores backing them.

mod positional;
mod sequential;
pub mod storage;

pub use positional::PositionalMetaStore;
pub use sequential::SequentialOrderStore;
pub use storage::memory::InMemoryKVStore;
