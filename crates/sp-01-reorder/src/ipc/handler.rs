//! IPC Handler for the Reorder Subsystem
//!
//! ## Security Boundaries
//!
//! - MUST check the caller's capability before looking at the payload
//! - MUST enforce batch size limits (delegated to the service)

use crate::application::service::ReorderService;
use crate::config::ReorderConfig;
use crate::domain::entities::ReorderRequest;
use crate::domain::errors::ReorderError;
use crate::ipc::payloads::{Principal, ReorderPayload, RestResponse};
use crate::ports::inbound::ReorderApi;
use crate::ports::outbound::KeyValueStore;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};

/// IPC Handler for reorder updates.
///
/// Validates security boundaries and delegates to the domain service.
#[derive(Clone)]
pub struct ReorderHandler {
    service: Arc<ReorderService>,
    required_capability: String,
}

impl ReorderHandler {
    pub fn new(service: Arc<ReorderService>) -> Self {
        let required_capability = service.config().required_capability.clone();
        Self {
            service,
            required_capability,
        }
    }

    /// Handler over the standard strategies backed by `kv`.
    pub fn with_store(kv: Arc<dyn KeyValueStore>, config: ReorderConfig) -> Self {
        Self::new(Arc::new(ReorderService::standard(kv, config)))
    }

    pub fn required_capability(&self) -> &str {
        &self.required_capability
    }

    /// Handle an update call.
    ///
    /// ## Security
    ///
    /// - Rejects callers without the required capability with 403, before
    ///   validation or storage
    /// - Every outcome is returned as an envelope; nothing panics on bad input
    pub async fn handle_update(&self, principal: &Principal, payload: ReorderPayload) -> RestResponse {
        let start_time = Instant::now();

        // Security: capability check runs first
        if !principal.can(&self.required_capability) {
            warn!(
                "[sp-01] Caller '{}' lacks capability '{}'",
                principal.login, self.required_capability
            );
            return RestResponse::from_error(&ReorderError::Unauthorized {
                capability: self.required_capability.clone(),
            });
        }

        // Convert IPC payload to a domain request
        let request = match ReorderRequest::from_fields(
            payload.order.as_ref(),
            payload.start.as_ref(),
            payload.object_type.as_ref(),
        ) {
            Ok(request) => request,
            Err(e) => {
                warn!("[sp-01] Rejected payload from '{}': {:?}", principal.login, e);
                return RestResponse::from_error(&e);
            }
        };

        info!(
            "[sp-01] Processing reorder of {} {} item(s) from '{}'",
            request.order.len(),
            request.object_type,
            principal.login
        );

        // Delegate to domain service
        match self.service.reorder(request).await {
            Ok(receipt) => {
                info!(
                    "[sp-01] ✓ Saved order for {} {} item(s) in {}ms",
                    receipt.affected,
                    receipt.object_type,
                    start_time.elapsed().as_millis()
                );
                RestResponse::saved(receipt.affected)
            }
            Err(e) if e.status() < 500 => {
                warn!("[sp-01] Reorder refused: {}", e);
                RestResponse::from_error(&e)
            }
            Err(e) => {
                error!("[sp-01] ❌ Reorder failed: {:?}", e);
                RestResponse::from_error(&e)
            }
        }
    }
}
