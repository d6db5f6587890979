//! Gateway configuration.
//!
//! Loaded from `SP_*` environment variables, validated before the server binds.

use sp_01_reorder::ReorderConfig;
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Default HTTP port
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Default request body limit (1 MiB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Main gateway configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Bind address
    pub host: IpAddr,
    /// Bind port
    pub port: u16,
    /// Bearer token granting the editor principal
    pub api_key: Option<String>,
    /// RocksDB directory (used with the `rocksdb` feature)
    pub data_dir: PathBuf,
    /// Maximum accepted request body
    pub max_body_bytes: usize,
    /// Reorder subsystem settings
    pub reorder: ReorderConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_HTTP_PORT,
            api_key: None,
            data_dir: PathBuf::from("./data/sortable-posts"),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            reorder: ReorderConfig::default(),
        }
    }
}

impl GatewayConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SP_HTTP_HOST`: Bind address (default: 127.0.0.1)
    /// - `SP_HTTP_PORT`: Bind port (default: 8080)
    /// - `SP_API_KEY`: Editor bearer token (required)
    /// - `SP_DATA_DIR`: Storage directory (default: ./data/sortable-posts)
    /// - `SP_MAX_BATCH_SIZE`: Identifiers per request (default: 1000)
    /// - `SP_MAX_BODY_BYTES`: Request body limit (default: 1 MiB)
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let mut reorder = ReorderConfig::default();
        if let Some(max) = env::var("SP_MAX_BATCH_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            reorder.max_batch_size = max;
        }

        Self {
            host: env::var("SP_HTTP_HOST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.host),

            port: env::var("SP_HTTP_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),

            api_key: env::var("SP_API_KEY").ok().filter(|k| !k.is_empty()),

            data_dir: env::var("SP_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),

            max_body_bytes: env::var("SP_MAX_BODY_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_body_bytes),

            reorder,
        }
    }

    /// Socket address to bind.
    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.api_key {
            None => return Err(ConfigError::MissingApiKey),
            Some(key) if key.len() < 16 => {
                return Err(ConfigError::WeakApiKey(key.len()));
            }
            Some(_) => {}
        }

        if self.reorder.max_batch_size == 0 {
            return Err(ConfigError::InvalidLimit(
                "max_batch_size cannot be 0".into(),
            ));
        }

        if self.max_body_bytes == 0 {
            return Err(ConfigError::InvalidLimit(
                "max_body_bytes cannot be 0".into(),
            ));
        }

        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SP_API_KEY is not set")]
    MissingApiKey,

    #[error("API key too short: {0} characters, need at least 16")]
    WeakApiKey(usize),

    #[error("invalid limit: {0}")]
    InvalidLimit(String),
}
