//! Configuration for the Reorder Subsystem

use serde::{Deserialize, Serialize};

/// Reorder configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ReorderConfig {
    /// Maximum identifiers accepted in one request (anti-DoS)
    pub max_batch_size: usize,
    /// Type prefixes stripped from submitted identifiers (`post-123` -> `123`)
    pub id_prefixes: Vec<String>,
    /// Meta key holding a term's position
    pub term_meta_key: String,
    /// Capability a caller must hold to reorder anything
    pub required_capability: String,
    /// Count every matched record instead of only the ones whose value changed
    pub count_matched_rows: bool,
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            max_batch_size: 1000,
            id_prefixes: vec!["post-".to_string(), "tag-".to_string()],
            term_meta_key: "term_order".to_string(),
            required_capability: "publish_posts".to_string(),
            count_matched_rows: false,
        }
    }
}
