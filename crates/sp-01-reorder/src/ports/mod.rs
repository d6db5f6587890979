//! Ports module for the Reorder Subsystem
//!
//! Defines inbound (API) and outbound (SPI) port traits.

pub mod inbound;
pub mod outbound;

pub use inbound::ReorderApi;
pub use outbound::{BatchOperation, KeyValueStore, OrderStrategy};
