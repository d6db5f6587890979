//! Request-level concerns applied before the reorder handler runs.

pub mod auth;

pub use auth::{constant_time_compare, resolve_principal, AuthConfig};
