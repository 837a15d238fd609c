mod fixtures;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use syncify_config::{AppConfig, SalesforceConfig, ServerConfig};
use syncify_salesforce::routes::routes;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app_config(login_url: &str, key_path: &str, enabled: bool) -> Arc<AppConfig> {
    Arc::new(AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8086,
        },
        use_salesforce: enabled,
        use_shopify: false,
        salesforce: Some(SalesforceConfig {
            client_id: "3MVG9test.client.id".to_string(),
            username: "integration@example.com".to_string(),
            login_url: login_url.to_string(),
            key_path: key_path.to_string(),
        }),
        shopify: None,
    })
}

async fn mount_token_mock(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/services/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "00Dxx0000000000!AQEAQ",
            "instance_url": server.uri(),
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn list_members_returns_empty_array_for_empty_query_result() {
    let server = MockServer::start().await;
    mount_token_mock(&server).await;

    Mock::given(method("GET"))
        .and(path("/services/data/v60.0/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "totalSize": 0,
            "done": true,
            "records": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let key_path = fixtures::write_test_key("members-empty");
    let app = routes(app_config(&server.uri(), key_path.to_str().unwrap(), true));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/salesforce/members")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let records: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(records, serde_json::json!([]));
}

#[tokio::test]
async fn list_members_reports_500_when_exchange_fails() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/oauth2/token"))
        .respond_with(ResponseTemplate::new(400).set_body_string("invalid_grant"))
        .mount(&server)
        .await;

    let key_path = fixtures::write_test_key("members-authfail");
    let app = routes(app_config(&server.uri(), key_path.to_str().unwrap(), true));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/salesforce/members")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn salesforce_routes_are_unavailable_when_disabled() {
    let key_path = fixtures::write_test_key("disabled");
    let app = routes(app_config(
        "https://login.salesforce.com",
        key_path.to_str().unwrap(),
        false,
    ));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/salesforce/jwt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
