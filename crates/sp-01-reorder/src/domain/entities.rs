//! Core entities for the Reorder Subsystem

use super::errors::ReorderError;
use super::sanitize::{normalize_object_type, normalize_order, normalize_start};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Message returned on every successful reorder.
pub const SAVED_MESSAGE: &str = "Saved successfully.";

/// Order value stored in the menu-order column or the term meta.
pub type OrderValue = i64;

/// A sanitized item identifier (post ID or term ID).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(String);

impl ItemId {
    /// Wrap an already sanitized identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Kind of content being reordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    /// Posts, ordered by a dense menu-order column
    Post,
    /// Taxonomy terms, ordered by a position meta value
    Term,
}

impl ObjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Post => "post",
            ObjectType::Term => "term",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectType {
    type Err = ReorderError;

    /// Accepts the canonical names and the admin screen names the list UI sends
    /// (`edit` for posts, `edit-tags` for terms).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "post" | "edit" => Ok(ObjectType::Post),
            "term" | "edit-tags" => Ok(ObjectType::Term),
            other => Err(ReorderError::UnsupportedObjectType {
                object_type: other.to_string(),
            }),
        }
    }
}

/// One reorder call, normalized once at construction.
///
/// `order` holds the raw submitted identifiers; sanitization into [`ItemId`]s
/// happens in the service so prefix rules stay configurable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReorderRequest {
    pub order: Vec<String>,
    pub start: u32,
    pub object_type: String,
}

impl ReorderRequest {
    pub fn new(
        order: impl IntoIterator<Item = impl Into<String>>,
        start: u32,
        object_type: impl Into<String>,
    ) -> Self {
        Self {
            order: order.into_iter().map(Into::into).collect(),
            start,
            object_type: object_type.into(),
        }
    }

    /// Build a request from loosely typed inbound fields.
    ///
    /// Fails when `order` is absent or not a sequence, or when `start` is an
    /// integer too large to store. A blank, negative or unparseable `start`
    /// becomes `0`.
    pub fn from_fields(
        order: Option<&serde_json::Value>,
        start: Option<&serde_json::Value>,
        object_type: Option<&serde_json::Value>,
    ) -> Result<Self, ReorderError> {
        Ok(Self {
            order: normalize_order(order)?,
            start: normalize_start(start)?,
            object_type: normalize_object_type(object_type),
        })
    }
}

/// Outcome of a successful reorder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReorderReceipt {
    pub object_type: ObjectType,
    /// Records the strategy reported as affected
    pub affected: usize,
    pub message: &'static str,
}

impl ReorderReceipt {
    pub fn saved(object_type: ObjectType, affected: usize) -> Self {
        Self {
            object_type,
            affected,
            message: SAVED_MESSAGE,
        }
    }
}
