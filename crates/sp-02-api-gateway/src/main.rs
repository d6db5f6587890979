//! # Sortable-Posts Gateway
//!
//! Serves the reorder endpoint over HTTP.
//!
//! ## Startup Sequence
//!
//! 1. Initialize telemetry (logs and metrics)
//! 2. Load and validate configuration
//! 3. Open the key-value store
//! 4. Serve until Ctrl+C

use anyhow::{Context, Result};
use sp_01_reorder::KeyValueStore;
use sp_02_api_gateway::{ApiGatewayService, GatewayConfig};
use sp_telemetry::{init_telemetry, TelemetryConfig};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let _telemetry = init_telemetry(TelemetryConfig::for_service("sp-gateway"))
        .context("failed to initialize telemetry")?;

    let config = GatewayConfig::from_env();
    info!(
        addr = %config.http_addr(),
        max_batch_size = config.reorder.max_batch_size,
        "Loaded gateway configuration"
    );

    let kv = open_store(&config)?;
    let service = ApiGatewayService::new(config, kv)?;

    info!("Gateway is running. Press Ctrl+C to stop.");
    service.start().await?;

    Ok(())
}

#[cfg(feature = "rocksdb")]
fn open_store(config: &GatewayConfig) -> Result<Arc<dyn KeyValueStore>> {
    use sp_01_reorder::{RocksDbConfig, RocksDbStore};

    let rocks_config = RocksDbConfig {
        path: config.data_dir.to_string_lossy().into_owned(),
        ..Default::default()
    };
    let store = RocksDbStore::open(rocks_config)
        .with_context(|| format!("failed to open RocksDB at {}", config.data_dir.display()))?;
    info!(path = %config.data_dir.display(), "Opened RocksDB store");
    Ok(Arc::new(store))
}

#[cfg(not(feature = "rocksdb"))]
fn open_store(_config: &GatewayConfig) -> Result<Arc<dyn KeyValueStore>> {
    tracing::warn!("Built without the rocksdb feature; order values live in memory only");
    Ok(Arc::new(sp_01_reorder::InMemoryKVStore::new()))
}
