use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use syncify_config::{AppConfig, ServerConfig, ShopifyConfig};
use syncify_shopify::logic::{list_customers, update_customer_tags};
use syncify_shopify::routes::routes;
use syncify_shopify::ShopifyError;
use tower::ServiceExt;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn shopify_config(base_url: &str) -> ShopifyConfig {
    ShopifyConfig {
        store_domain: base_url.to_string(),
        admin_token: "shpat_test_token".to_string(),
        api_version: "2025-04".to_string(),
    }
}

fn app_config(base_url: &str) -> Arc<AppConfig> {
    Arc::new(AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8086,
        },
        use_salesforce: false,
        use_shopify: true,
        salesforce: None,
        shopify: Some(shopify_config(base_url)),
    })
}

#[tokio::test]
async fn list_customers_unwraps_customers_array() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/api/2025-04/customers.json"))
        .and(header("X-Shopify-Access-Token", "shpat_test_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "customers": [
                { "id": 1, "email": "a@example.com", "tags": "VIP" },
                { "id": 2, "email": "b@example.com" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let customers = list_customers(&shopify_config(&server.uri())).await.unwrap();
    assert_eq!(customers.len(), 2);
    assert_eq!(customers[0].tags.as_deref(), Some("VIP"));
    assert!(customers[1].tags.is_none());
}

#[tokio::test]
async fn list_customers_maps_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/api/2025-04/customers.json"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_string(r#"{"errors":"[API] Invalid API key or access token"}"#),
        )
        .mount(&server)
        .await;

    let err = list_customers(&shopify_config(&server.uri()))
        .await
        .expect_err("401 must map to an API error");
    match err {
        ShopifyError::Api { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("Invalid API key"));
        }
        other => panic!("expected Api error, got: {other}"),
    }
}

#[tokio::test]
async fn update_customer_tags_puts_replacement_tags() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/admin/api/2025-04/customers/8123.json"))
        .and(header("X-Shopify-Access-Token", "shpat_test_token"))
        .and(body_json(serde_json::json!({
            "customer": { "id": "8123", "tags": "gold" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "customer": { "id": 8123, "tags": "gold" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    update_customer_tags(&shopify_config(&server.uri()), "8123", "gold")
        .await
        .expect("update should succeed");
}

#[tokio::test]
async fn customers_endpoint_passes_list_through() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/api/2025-04/customers.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "customers": [ { "id": 42, "email": "c@example.com" } ]
        })))
        .mount(&server)
        .await;

    let app = routes(app_config(&server.uri()));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/shopify/customers")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let customers: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(customers[0]["id"], 42);
}
