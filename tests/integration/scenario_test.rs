//! End-to-end walk through the folder and model lifecycle.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::{TestApp, id_of};

#[tokio::test]
async fn test_sales_eu_invoice_flow() {
    let app = TestApp::new();

    let sales = app.create_folder("Sales", "root").await;
    assert_eq!(sales["path"], "/");

    let eu = app.create_folder("EU", &id_of(&sales)).await;
    assert_eq!(eu["path"], "/Sales/");

    let model = app
        .create_model(json!({
            "name": "Invoice Flow",
            "xml": "<definitions/>",
            "folderId": id_of(&eu)
        }))
        .await;

    let listed = app
        .request("GET", &format!("/api/models?folderId={}", id_of(&eu)), None)
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    let models = listed.body.as_array().expect("array");
    assert_eq!(models.len(), 1);
    assert_eq!(id_of(&models[0]), id_of(&model));

    let refused = app
        .request("DELETE", &format!("/api/folders?id={}", id_of(&sales)), None)
        .await;
    assert_eq!(refused.status, StatusCode::BAD_REQUEST);
    assert_eq!(refused.body["subFolders"], 1);
    assert_eq!(refused.body["models"], 0);
}

#[tokio::test]
async fn test_store_connects_lazily() {
    let app = TestApp::new();
    assert!(!app.stores.is_connected().await);

    let health = app.request("GET", "/api/health", None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["status"], "ok");
    assert_eq!(health.body["store"], "connected");
    assert!(app.stores.is_connected().await);
}

#[tokio::test]
async fn test_unwinding_a_hierarchy() {
    let app = TestApp::new();
    let sales = app.create_folder("Sales", "root").await;
    let eu = app.create_folder("EU", &id_of(&sales)).await;
    let model = app
        .create_model(json!({ "name": "Invoice Flow", "xml": "<x/>", "folderId": id_of(&eu) }))
        .await;

    // Move the model out, then the folders empty bottom-up.
    let moved = app
        .request(
            "PUT",
            &format!("/api/models/{}", id_of(&model)),
            Some(json!({ "folderId": "root" })),
        )
        .await;
    assert_eq!(moved.status, StatusCode::OK);
    assert_eq!(moved.body["folderId"], "root");

    for folder in [&eu, &sales] {
        let response = app
            .request("DELETE", &format!("/api/folders?id={}", id_of(folder)), None)
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    }

    let all = app.request("GET", "/api/folders/all", None).await;
    assert_eq!(all.body, json!([]));
}
