//! Reorder Service
//!
//! Main service implementing ReorderApi.

use crate::application::registry::StrategyRegistry;
use crate::config::ReorderConfig;
use crate::domain::entities::{ItemId, ObjectType, ReorderReceipt, ReorderRequest};
use crate::domain::errors::ReorderError;
use crate::domain::sanitize::sanitize_order;
use crate::ports::inbound::ReorderApi;
use crate::ports::outbound::KeyValueStore;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Reorder Service
///
/// Orchestrates the reorder pipeline:
/// 1. Validate the submitted sequence
/// 2. Sanitize identifiers
/// 3. Resolve the strategy for the object type
/// 4. Apply the new order
/// 5. Map a zero-record outcome to `NoOp`
///
/// Holds no per-call state, so one instance serves concurrent requests.
pub struct ReorderService {
    registry: StrategyRegistry,
    config: ReorderConfig,
}

impl ReorderService {
    /// Create a new service with default config
    pub fn new(registry: StrategyRegistry) -> Self {
        Self::with_config(registry, ReorderConfig::default())
    }

    /// Create a new service with custom config
    pub fn with_config(registry: StrategyRegistry, config: ReorderConfig) -> Self {
        Self { registry, config }
    }

    /// Service with the standard post and term strategies over `kv`.
    pub fn standard(kv: Arc<dyn KeyValueStore>, config: ReorderConfig) -> Self {
        let registry = StrategyRegistry::standard(kv, &config);
        Self::with_config(registry, config)
    }

    pub fn config(&self) -> &ReorderConfig {
        &self.config
    }

    /// Validate batch size and sanitize identifiers
    fn validate_order(&self, order: &[String]) -> Result<Vec<ItemId>, ReorderError> {
        if order.is_empty() {
            return Err(ReorderError::Validation { reason: "empty" });
        }

        if order.len() > self.config.max_batch_size {
            return Err(ReorderError::BatchTooLarge {
                size: order.len(),
                max: self.config.max_batch_size,
            });
        }

        let sanitized = sanitize_order(order, &self.config.id_prefixes);
        if sanitized.is_empty() {
            return Err(ReorderError::Validation {
                reason: "no usable identifiers",
            });
        }

        if sanitized.len() < order.len() {
            debug!(
                submitted = order.len(),
                kept = sanitized.len(),
                "Dropped identifiers that sanitized to nothing"
            );
        }

        Ok(sanitized)
    }
}

#[async_trait]
impl ReorderApi for ReorderService {
    async fn reorder(&self, request: ReorderRequest) -> Result<ReorderReceipt, ReorderError> {
        // 1. Validate input
        let order = self.validate_order(&request.order)?;

        // 2. Resolve strategy
        let object_type: ObjectType = request.object_type.parse()?;
        let strategy = self.registry.get(object_type).ok_or_else(|| {
            ReorderError::UnsupportedObjectType {
                object_type: request.object_type.clone(),
            }
        })?;

        info!(
            object_type = %object_type,
            strategy = strategy.name(),
            items = order.len(),
            start = request.start,
            "Applying new order"
        );

        // 3. Apply
        let affected = strategy.apply(&order, request.start).await.map_err(|e| {
            warn!(object_type = %object_type, error = %e, "Reorder write failed");
            e
        })?;

        // 4. Zero records is a soft failure
        if affected == 0 {
            warn!(object_type = %object_type, "Reorder touched no records");
            return Err(ReorderError::NoOp);
        }

        info!(object_type = %object_type, affected, "Reorder complete");

        Ok(ReorderReceipt::saved(object_type, affected))
    }
}
