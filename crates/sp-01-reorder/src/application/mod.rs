//! Application layer: strategy selection and the reorder pipeline.

pub mod registry;
pub mod service;

pub use registry::StrategyRegistry;
pub use service::ReorderService;
