//! Caller authentication.
//!
//! A request presenting the configured API key (as a Bearer token or an
//! `X-API-Key` header) acts as the editor principal, holding the capability
//! the reorder handler requires. Anything else is anonymous.

use axum::http::HeaderMap;
use sp_01_reorder::Principal;
use tracing::debug;

/// Login reported for callers authenticated by API key
pub const EDITOR_LOGIN: &str = "api-key";

/// Authentication configuration
#[derive(Clone, Debug, Default)]
pub struct AuthConfig {
    /// API key for the editor principal (None = nobody is an editor)
    pub api_key: Option<String>,
    /// Capability granted to the editor principal
    pub capability: String,
}

/// Resolve the caller from request headers.
pub fn resolve_principal(headers: &HeaderMap, config: &AuthConfig) -> Principal {
    if check_api_key(headers, config) {
        Principal::new(EDITOR_LOGIN).with_capability(config.capability.clone())
    } else {
        debug!("No valid API key presented, treating caller as anonymous");
        Principal::anonymous()
    }
}

/// Check API key from request headers
fn check_api_key(headers: &HeaderMap, config: &AuthConfig) -> bool {
    let Some(expected_key) = &config.api_key else {
        return false;
    };

    // Check Authorization header (Bearer token)
    if let Some(auth) = headers.get("authorization") {
        if let Ok(auth_str) = auth.to_str() {
            if let Some(token) = auth_str.strip_prefix("Bearer ") {
                return constant_time_compare(token.trim(), expected_key);
            }
        }
    }

    // Check X-API-Key header
    if let Some(api_key) = headers.get("x-api-key") {
        if let Ok(key_str) = api_key.to_str() {
            return constant_time_compare(key_str.trim(), expected_key);
        }
    }

    false
}

/// Constant-time string comparison to prevent timing attacks
///
/// Takes the same time regardless of how many characters match.
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    use subtle::ConstantTimeEq;

    // Pad both to the longer length so the comparison leaks no length
    let max_len = std::cmp::max(a.len(), b.len());

    // Different pad bytes guarantee a mismatch when lengths differ
    let mut a_padded = vec![0u8; max_len];
    let mut b_padded = vec![0xFFu8; max_len];

    a_padded[..a.len()].copy_from_slice(a.as_bytes());
    b_padded[..b.len()].copy_from_slice(b.as_bytes());

    let lengths_equal = a.len().ct_eq(&b.len());
    let contents_equal = a_padded.ct_eq(&b_padded);

    (lengths_equal & contents_equal).into()
}
