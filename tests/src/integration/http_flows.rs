//! # HTTP Flows
//!
//! The same reorder flows driven through the gateway router.

#[cfg(test)]
mod tests {
    use crate::fixtures::{Site, TEST_API_KEY};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use sp_02_api_gateway::{ApiGatewayService, GatewayConfig, UPDATE_ROUTE};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn gateway(site: &Site) -> Router {
        let config = GatewayConfig {
            api_key: Some(TEST_API_KEY.to_string()),
            ..Default::default()
        };
        ApiGatewayService::new(config, Arc::clone(&site.kv))
            .unwrap()
            .router()
    }

    async fn post(router: Router, key: Option<&str>, body: Value) -> (StatusCode, Value) {
        let mut builder = Request::post(UPDATE_ROUTE).header("content-type", "application/json");
        if let Some(key) = key {
            builder = builder.header("x-api-key", key);
        }
        let response = router
            .oneshot(builder.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_http_post_and_term_flow() {
        let site = Site::with_records(&["10", "11"], &["7", "8"]);
        let router = gateway(&site);

        let (status, body) = post(
            router.clone(),
            Some(TEST_API_KEY),
            json!({ "order": ["post-11", "post-10"], "start": "3", "object_type": "edit" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "code": "sortable-posts-updated",
                "message": "Saved successfully.",
                "data": { "status": 200, "after_message": "" }
            })
        );
        assert_eq!(site.menu_order("11"), Some(3));
        assert_eq!(site.menu_order("10"), Some(4));

        let (status, _) = post(
            router,
            Some(TEST_API_KEY),
            json!({ "order": [8, 7], "object_type": "term" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(site.term_order("8"), Some(1));
        assert_eq!(site.term_order("7"), Some(2));
    }

    #[tokio::test]
    async fn test_http_error_envelopes() {
        let site = Site::with_records(&["1"], &[]);
        let router = gateway(&site);

        let cases = [
            (None, json!({ "order": ["1"], "object_type": "post" }), 403, "rest_forbidden"),
            (Some(TEST_API_KEY), json!({ "object_type": "post" }), 500, "order-not-array"),
            (Some(TEST_API_KEY), json!({ "order": ["1"], "object_type": "page" }), 400, "not-sortable"),
            (Some(TEST_API_KEY), json!({ "order": ["99"], "object_type": "post" }), 400, "nothing-happened"),
            (Some(TEST_API_KEY), json!({ "order": ["1"], "start": 5_000_000_000u64, "object_type": "post" }), 400, "invalid-start"),
        ];

        for (key, request, expected_status, expected_code) in cases {
            let (status, body) = post(router.clone(), key, request).await;
            assert_eq!(status.as_u16(), expected_status, "{}", expected_code);
            assert_eq!(body["code"], expected_code);
            assert_eq!(body["data"]["status"], expected_status);
            assert_eq!(body["data"]["after_message"], "");
        }
        assert_eq!(site.menu_order("1"), Some(0));
    }

    #[tokio::test]
    async fn test_http_flow_is_counted() {
        sp_telemetry::register_metrics().unwrap();
        let site = Site::with_records(&["1", "2"], &[]);
        let saved = sp_telemetry::REORDER_REQUESTS.with_label_values(&["post", "sortable-posts-updated"]);
        let refused = sp_telemetry::REORDER_REQUESTS.with_label_values(&["unknown", "rest_forbidden"]);
        let (saved_before, refused_before) = (saved.get(), refused.get());

        let (status, _) = post(
            gateway(&site),
            Some(TEST_API_KEY),
            json!({ "order": ["2", "1"], "object_type": "post" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = post(gateway(&site), None, json!({ "order": ["1"], "object_type": "page" })).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        assert!(saved.get() >= saved_before + 1.0);
        assert!(refused.get() >= refused_before + 1.0);

        let exposition = sp_telemetry::encode_metrics().unwrap();
        assert!(exposition.contains("sp_reorder_requests_total"));
        assert!(exposition.contains("sp_reorder_duration_seconds"));
    }
}
