//! Integration flows.

mod flows;
mod http_flows;
#[cfg(feature = "rocksdb")]
mod rocksdb_flows;
