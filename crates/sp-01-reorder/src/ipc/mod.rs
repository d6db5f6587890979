//! IPC Module for the Reorder Subsystem
//!
//! ## Security Boundaries
//!
//! - Accept: `ReorderPayload` from an authenticated `Principal`
//! - Require: the configured capability (`publish_posts` by default)
//! - Send: `RestResponse` carrying the legacy response envelope

pub mod handler;
pub mod payloads;

pub use handler::ReorderHandler;
pub use payloads::*;
