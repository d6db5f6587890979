//! Domain module for the Reorder Subsystem
//!
//! Contains the request model, input sanitization, errors, order assignment
//! and invariants.

pub mod assignment;
pub mod entities;
pub mod errors;
pub mod invariants;
pub mod sanitize;

pub use assignment::*;
pub use entities::*;
pub use errors::*;
