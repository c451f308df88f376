//! tests/global_errors.rs
//! Responses outside the auth route use the JSON error envelope.

mod common;

use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn returns_404_for_nonexistent_route() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/does-not-exist", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: String = resp.text().await.unwrap();
    let json: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(json["status"], "NOT_FOUND");
    assert_eq!(json["code"], 404);
    assert!(json["messages"][0].as_str().unwrap().contains("/does-not-exist"));
    assert!(json["date"].is_string());
}

#[tokio::test]
async fn neighbouring_paths_are_not_routed() {
    let base_url: String = common::spawn_app();
    let client: reqwest::Client = reqwest::Client::new();

    for path in ["/auth", "/api/v1", "/api/v2/auth", "/api/v1/auth/extra"] {
        let resp: reqwest::Response = client
            .get(format!("{}{}", base_url, path))
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "path {path}");
    }
}

#[tokio::test]
async fn other_methods_on_auth_route_are_rejected() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/api/v1/auth", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
