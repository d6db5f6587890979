//! SP-02 API Gateway - HTTP interface for the reorder subsystem.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    API GATEWAY (sp-02)                    │
//! ├──────────────────────────────────────────────────────────┤
//! │   POST|PUT|PATCH /sortable-posts/update                   │
//! │   GET /health         GET /metrics                        │
//! │                 │                                         │
//! │   ┌─────────────┴──────────────┐                          │
//! │   │ Trace → BodyLimit → Auth   │                          │
//! │   └─────────────┬──────────────┘                          │
//! │                 │                                         │
//! └─────────────────┼─────────────────────────────────────────┘
//!                   ▼
//!         sp-01 ReorderHandler
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use sp_02_api_gateway::{ApiGatewayService, GatewayConfig};
//!
//! let config = GatewayConfig::from_env();
//! let service = ApiGatewayService::new(config, kv)?;
//! service.start().await?;
//! ```
//!
//! # Security
//!
//! - API key compared in constant time
//! - Capability checked before the body is interpreted
//! - Request body size limit

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod middleware;
pub mod service;

pub use domain::{ConfigError, GatewayConfig, GatewayError};
pub use middleware::AuthConfig;
pub use service::{build_router, ApiGatewayService, UPDATE_ROUTE};
