//! # Sortable-Posts Test Suite
//!
//! Cross-crate flows that exercise the reorder handler, the strategies and
//! the HTTP gateway together.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── flows.rs        # Handler-level reorder flows
//!     ├── http_flows.rs   # Same flows through the axum router
//!     └── rocksdb_flows.rs  # Persistence across reopen (feature `rocksdb`)
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p sp-tests
//! cargo test -p sp-tests --features rocksdb
//! ```

pub mod fixtures;
pub mod integration;
