//! # Reorder Flows
//!
//! Handler → service → registry → strategy → store, with a real in-memory
//! store underneath.

#[cfg(test)]
mod tests {
    use crate::fixtures::{editor, payload, subscriber, Site};
    use proptest::prelude::*;
    use serde_json::json;
    use sp_01_reorder::domain::invariants::invariant_dense_sequence;
    use sp_01_reorder::{ItemId, KeyValueStore, Principal, ReorderPayload};
    use std::sync::Arc;

    // =============================================================================
    // SEQUENTIAL (POSTS)
    // =============================================================================

    #[tokio::test]
    async fn test_posts_get_dense_order_from_start() {
        let site = Site::with_records(&["5", "9", "2"], &[]);

        let response = site
            .handler
            .handle_update(&editor(), payload(json!(["5", "9", "2"]), json!(3), "post"))
            .await;

        assert!(response.is_success());
        assert_eq!(site.menu_order("5"), Some(3));
        assert_eq!(site.menu_order("9"), Some(4));
        assert_eq!(site.menu_order("2"), Some(5));
    }

    #[tokio::test]
    async fn test_only_listed_posts_are_touched() {
        let site = Site::with_records(&["1", "2", "3", "4"], &[]);

        site.handler
            .handle_update(&editor(), payload(json!(["2", "1"]), json!(7), "post"))
            .await;

        assert_eq!(site.menu_order("2"), Some(7));
        assert_eq!(site.menu_order("1"), Some(8));
        assert_eq!(site.menu_order("3"), Some(0));
        assert_eq!(site.menu_order("4"), Some(0));
    }

    #[tokio::test]
    async fn test_repeat_request_leaves_same_order() {
        let site = Site::with_records(&["1", "2", "3"], &[]);
        let request = || payload(json!(["3", "2", "1"]), json!("10"), "post");

        let first = site.handler.handle_update(&editor(), request()).await;
        let snapshot: Vec<_> = ["1", "2", "3"].iter().map(|id| site.menu_order(id)).collect();
        let second = site.handler.handle_update(&editor(), request()).await;
        let again: Vec<_> = ["1", "2", "3"].iter().map(|id| site.menu_order(id)).collect();

        assert!(first.is_success());
        // Nothing left to change, so the second call is the soft failure
        assert_eq!(second.status, 400);
        assert_eq!(second.body.code, "nothing-happened");
        assert_eq!(snapshot, vec![Some(12), Some(11), Some(10)]);
        assert_eq!(snapshot, again);
    }

    #[tokio::test]
    async fn test_unknown_posts_are_noop() {
        let site = Site::with_records(&["1"], &[]);

        let response = site
            .handler
            .handle_update(&editor(), payload(json!(["404", "405"]), json!(0), "post"))
            .await;

        assert_eq!(response.status, 400);
        assert_eq!(response.body.code, "nothing-happened");
        assert_eq!(response.body.message, "Nothing happened. Try again.");
        assert_eq!(site.menu_order("1"), Some(0));
    }

    #[tokio::test]
    async fn test_duplicates_resolve_to_last_occurrence() {
        for _ in 0..10 {
            let site = Site::with_records(&["1", "2"], &[]);

            let response = site
                .handler
                .handle_update(&editor(), payload(json!(["1", "2", "1"]), json!(0), "post"))
                .await;

            assert!(response.is_success());
            assert_eq!(site.menu_order("1"), Some(2));
            assert_eq!(site.menu_order("2"), Some(1));
        }
    }

    // =============================================================================
    // POSITIONAL (TERMS)
    // =============================================================================

    #[tokio::test]
    async fn test_terms_get_one_based_positions_ignoring_start() {
        let site = Site::with_records(&[], &["a", "b", "c"]);

        let response = site
            .handler
            .handle_update(&editor(), payload(json!(["a", "b", "c"]), json!(40), "term"))
            .await;

        assert!(response.is_success());
        assert_eq!(site.term_order("a"), Some(1));
        assert_eq!(site.term_order("b"), Some(2));
        assert_eq!(site.term_order("c"), Some(3));
    }

    #[tokio::test]
    async fn test_terms_via_admin_screen_alias_and_prefix() {
        let site = Site::with_records(&[], &["12", "30"]);

        let response = site
            .handler
            .handle_update(&editor(), payload(json!(["tag-30", "tag-12"]), json!(0), "edit-tags"))
            .await;

        assert!(response.is_success());
        assert_eq!(site.term_order("30"), Some(1));
        assert_eq!(site.term_order("12"), Some(2));
    }

    #[tokio::test]
    async fn test_partial_term_write_is_not_success() {
        let site = Site::with_records(&[], &["1", "2", "3"]);

        let response = site
            .handler
            .handle_update(&editor(), payload(json!(["1", "2", "3", "4", "5"]), json!(0), "term"))
            .await;

        assert_eq!(response.status, 500);
        assert_eq!(response.body.code, "partial-write");
        assert_eq!(site.term_order("1"), Some(1));
        assert_eq!(site.term_order("4"), None);
    }

    // =============================================================================
    // REJECTIONS
    // =============================================================================

    #[tokio::test]
    async fn test_unsupported_type_touches_nothing() {
        let site = Site::with_records(&["1"], &["1"]);
        let before = site.kv.get(b"posts/1/menu_order").unwrap();

        let response = site
            .handler
            .handle_update(&editor(), payload(json!(["1"]), json!(9), "widget"))
            .await;

        assert_eq!(response.status, 400);
        assert_eq!(response.body.code, "not-sortable");
        assert_eq!(
            response.body.message,
            "Sorry this object type is not sortable at the moment."
        );
        assert_eq!(site.kv.get(b"posts/1/menu_order").unwrap(), before);
        assert_eq!(site.term_order("1"), None);
    }

    #[tokio::test]
    async fn test_malformed_order_rejected_before_store() {
        let site = Site::with_records(&["1"], &[]);

        for order in [json!(null), json!([]), json!("1,2"), json!({"0": "1"})] {
            let response = site
                .handler
                .handle_update(&editor(), payload(order.clone(), json!(5), "post"))
                .await;

            assert_eq!(response.status, 500, "order {} should be rejected", order);
            assert_eq!(response.body.code, "order-not-array");
        }
        assert_eq!(site.menu_order("1"), Some(0));
    }

    #[tokio::test]
    async fn test_missing_capability_short_circuits() {
        let site = Site::with_records(&["1"], &[]);

        for principal in [Principal::anonymous(), subscriber()] {
            // Even a malformed payload is answered with 403
            let response = site
                .handler
                .handle_update(&principal, ReorderPayload::default())
                .await;
            assert_eq!(response.status, 403);
            assert_eq!(response.body.code, "rest_forbidden");

            let response = site
                .handler
                .handle_update(&principal, payload(json!(["1"]), json!(4), "post"))
                .await;
            assert_eq!(response.status, 403);
        }
        assert_eq!(site.menu_order("1"), Some(0));
    }

    // =============================================================================
    // CONCURRENCY
    // =============================================================================

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_requests_on_disjoint_ids() {
        let ids: Vec<String> = (0..40).map(|i| i.to_string()).collect();
        let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        let site = Arc::new(Site::with_records(&id_refs, &id_refs));

        let mut handles = Vec::new();
        for chunk in 0..4 {
            let site = Arc::clone(&site);
            let chunk_ids: Vec<String> = (chunk * 10..chunk * 10 + 10).map(|i| i.to_string()).collect();
            handles.push(tokio::spawn(async move {
                let posts = site
                    .handler
                    .handle_update(
                        &editor(),
                        payload(json!(chunk_ids), json!(chunk * 100 + 1), "post"),
                    )
                    .await;
                let terms = site
                    .handler
                    .handle_update(&editor(), payload(json!(chunk_ids), json!(0), "term"))
                    .await;
                (posts.is_success(), terms.is_success())
            }));
        }

        for handle in handles {
            assert_eq!(handle.await.unwrap(), (true, true));
        }

        for chunk in 0..4i64 {
            for offset in 0..10i64 {
                let id = (chunk * 10 + offset).to_string();
                assert_eq!(site.menu_order(&id), Some(chunk * 100 + 1 + offset));
                assert_eq!(site.term_order(&id), Some(offset + 1));
            }
        }
    }

    // =============================================================================
    // PROPERTIES
    // =============================================================================

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_post_order_is_dense_from_start(
            order in prop::collection::vec(0u8..20, 1..30),
            start in 1u32..10_000,
        ) {
            let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let ids: Vec<String> = (0..20).map(|i| i.to_string()).collect();
            let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
            let site = Site::with_records(&id_refs, &[]);
            let submitted: Vec<String> = order.iter().map(|i| i.to_string()).collect();

            let response = rt.block_on(
                site.handler
                    .handle_update(&editor(), payload(json!(submitted), json!(start), "post")),
            );

            prop_assert!(response.is_success());
            let order: Vec<ItemId> = submitted.iter().map(|id| ItemId::new(id.as_str())).collect();
            prop_assert!(invariant_dense_sequence(&order, start, |id| site.menu_order(id.as_str())));
        }
    }
}
