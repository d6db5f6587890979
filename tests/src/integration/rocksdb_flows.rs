//! # RocksDB Flows
//!
//! Order values written through the handler survive reopening the database.

#[cfg(test)]
mod tests {
    use crate::fixtures::{editor, payload, Site};
    use serde_json::json;
    use sp_01_reorder::{RocksDbConfig, RocksDbStore};
    use std::sync::Arc;
    use tempfile::TempDir;

    fn open(dir: &TempDir) -> Arc<RocksDbStore> {
        let path = dir.path().to_string_lossy().into_owned();
        Arc::new(RocksDbStore::open(RocksDbConfig::for_testing(path)).unwrap())
    }

    #[tokio::test]
    async fn test_order_persists_across_reopen() {
        let dir = TempDir::new().unwrap();

        {
            let site = Site::over(open(&dir), &["1", "2", "3"], &["a", "b"]);

            let posts = site
                .handler
                .handle_update(&editor(), payload(json!(["3", "1", "2"]), json!(1), "post"))
                .await;
            let terms = site
                .handler
                .handle_update(&editor(), payload(json!(["b", "a"]), json!(0), "term"))
                .await;

            assert!(posts.is_success());
            assert!(terms.is_success());
        }

        let site = Site::over(open(&dir), &[], &[]);
        assert_eq!(site.menu_order("3"), Some(1));
        assert_eq!(site.menu_order("1"), Some(2));
        assert_eq!(site.menu_order("2"), Some(3));
        assert_eq!(site.term_order("b"), Some(1));
        assert_eq!(site.term_order("a"), Some(2));
    }
}
