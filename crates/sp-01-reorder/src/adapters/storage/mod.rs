//! Key-value storage backends and the record key layout.
//!
//! ## Key Layout
//!
//! - `posts/{id}/menu_order` - a post's menu order (presence means the post exists)
//! - `terms/{id}` - marks an existing taxonomy term
//! - `termmeta/{id}/{meta_key}` - a term's meta value
//!
//! Order values are stored as big-endian `i64`.

pub mod memory;
#[cfg(feature = "rocksdb")]
pub mod rocksdb_adapter;

use crate::domain::entities::{ItemId, OrderValue};
use crate::domain::errors::StoreError;

pub(crate) fn menu_order_key(id: &ItemId) -> Vec<u8> {
    format!("posts/{}/menu_order", id).into_bytes()
}

pub(crate) fn term_key(id: &ItemId) -> Vec<u8> {
    format!("terms/{}", id).into_bytes()
}

pub(crate) fn term_meta_key(id: &ItemId, meta_key: &str) -> Vec<u8> {
    format!("termmeta/{}/{}", id, meta_key).into_bytes()
}

pub(crate) fn encode_value(value: OrderValue) -> Vec<u8> {
    value.to_be_bytes().to_vec()
}

pub(crate) fn decode_value(key: &[u8], bytes: &[u8]) -> Result<OrderValue, StoreError> {
    let raw: [u8; 8] = bytes.try_into().map_err(|_| StoreError::Corrupted {
        key: String::from_utf8_lossy(key).into_owned(),
    })?;
    Ok(OrderValue::from_be_bytes(raw))
}
