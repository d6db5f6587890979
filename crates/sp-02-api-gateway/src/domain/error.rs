//! Gateway-level errors.

/// Errors raised while starting or running the gateway
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Server socket bind error
    #[error("server bind error: {0}")]
    Bind(String),

    /// Server stopped with an I/O error
    #[error("server error: {0}")]
    Serve(String),
}

impl From<super::config::ConfigError> for GatewayError {
    fn from(err: super::config::ConfigError) -> Self {
        GatewayError::Config(err.to_string())
    }
}
