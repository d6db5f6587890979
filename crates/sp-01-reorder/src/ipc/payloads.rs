//! IPC Payloads for the Reorder Subsystem
//!
//! Payloads carry no caller identity. Identity arrives separately as a
//! `Principal` resolved by the transport.

use crate::domain::entities::SAVED_MESSAGE;
use crate::domain::errors::ReorderError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

// ============================================================
// INCOMING REQUESTS
// ============================================================

/// Body of the update call.
///
/// Fields stay loosely typed here: `start` may be a number or a numeric
/// string, and a malformed `order` must reach the handler so it can be
/// reported with the legacy code rather than rejected by the decoder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReorderPayload {
    pub order: Option<Value>,
    pub start: Option<Value>,
    pub object_type: Option<Value>,
}

/// Authenticated caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Principal {
    pub login: String,
    pub capabilities: BTreeSet<String>,
}

impl Principal {
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            capabilities: BTreeSet::new(),
        }
    }

    /// Caller with no capabilities.
    pub fn anonymous() -> Self {
        Self::new("anonymous")
    }

    pub fn with_capability(mut self, capability: impl Into<String>) -> Self {
        self.capabilities.insert(capability.into());
        self
    }

    pub fn can(&self, capability: &str) -> bool {
        self.capabilities.contains(capability)
    }
}

// ============================================================
// OUTGOING RESPONSES
// ============================================================

/// Code reported on success.
pub const UPDATED_CODE: &str = "sortable-posts-updated";

/// `data` member of the envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseData {
    pub status: u16,
    /// Always empty; kept for clients that render it after the message
    pub after_message: String,
}

/// `{ code, message, data: { status, after_message } }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub code: String,
    pub message: String,
    pub data: ResponseData,
}

/// Envelope plus the HTTP-equivalent status it travels with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestResponse {
    pub status: u16,
    pub body: ResponseEnvelope,
    /// Records written; not part of the wire body
    pub affected: usize,
}

impl RestResponse {
    fn new(status: u16, code: &str, message: impl Into<String>) -> Self {
        Self {
            status,
            affected: 0,
            body: ResponseEnvelope {
                code: code.to_string(),
                message: message.into(),
                data: ResponseData {
                    status,
                    after_message: String::new(),
                },
            },
        }
    }

    pub fn saved(affected: usize) -> Self {
        Self {
            affected,
            ..Self::new(200, UPDATED_CODE, SAVED_MESSAGE)
        }
    }

    pub fn from_error(err: &ReorderError) -> Self {
        Self::new(err.status(), err.code(), err.to_string())
    }

    /// Body that is not valid JSON at all.
    pub fn invalid_json(detail: impl std::fmt::Display) -> Self {
        Self::new(400, "rest_invalid_json", format!("Invalid JSON body passed. {}", detail))
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}
