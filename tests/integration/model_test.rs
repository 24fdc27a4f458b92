//! Integration tests for model operations.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::{TestApp, id_of};

const XML: &str = "<definitions><process id=\"p1\"/></definitions>";

#[tokio::test]
async fn test_create_model_defaults_to_root() {
    let app = TestApp::new();

    let model = app
        .create_model(json!({ "name": "Invoice Flow", "xml": XML }))
        .await;

    assert_eq!(model["folderId"], "root");
    assert_eq!(model["isFolder"], false);
    assert_eq!(model["createdBy"], "Anonymous");
    assert_eq!(model["tags"], json!([]));
    assert_eq!(id_of(&model).len(), 24);
    assert!(model.get("svg").is_none());
}

#[tokio::test]
async fn test_create_model_requires_name_and_xml() {
    let app = TestApp::new();

    let missing = app
        .request("POST", "/api/models", Some(json!({ "xml": XML })))
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.body["error"], "Name is required");

    let blank = app
        .request(
            "POST",
            "/api/models",
            Some(json!({ "name": "Invoice Flow", "xml": "   " })),
        )
        .await;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);

    let list = app.request("GET", "/api/models", None).await;
    assert_eq!(list.body, json!([]));
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let app = TestApp::new();

    let response = app.request_raw("POST", "/api/models", "{ not json").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Invalid request body");
    assert!(response.body["details"].is_string());
}

#[tokio::test]
async fn test_get_model() {
    let app = TestApp::new();
    let model = app
        .create_model(json!({ "name": "Invoice Flow", "xml": XML, "svg": "<svg/>" }))
        .await;

    let response = app
        .request("GET", &format!("/api/models/{}", id_of(&model)), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Invoice Flow");
    assert_eq!(response.body["svg"], "<svg/>");
}

#[tokio::test]
async fn test_get_model_invalid_and_missing_ids() {
    let app = TestApp::new();

    let invalid = app.request("GET", "/api/models/not-an-id", None).await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
    assert_eq!(invalid.body["error"], "Invalid model ID");

    let missing = app
        .request("GET", "/api/models/65a1f0c2b3d4e5f607182930", None)
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body["error"], "Model not found");
}

#[tokio::test]
async fn test_update_never_changes_id() {
    let app = TestApp::new();
    let model = app
        .create_model(json!({ "name": "Invoice Flow", "xml": XML, "tags": ["finance"] }))
        .await;
    let id = id_of(&model);

    let response = app
        .request(
            "PUT",
            &format!("/api/models/{id}"),
            Some(json!({
                "_id": "65a1f0c2b3d4e5f607182930",
                "name": "Invoice Flow v2",
                "isFolder": true,
                "createdAt": "2001-01-01T00:00:00Z"
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.id(), id);
    assert_eq!(response.body["name"], "Invoice Flow v2");
    assert_eq!(response.body["xml"], XML);
    assert_eq!(response.body["tags"], json!(["finance"]));
    assert_eq!(response.body["isFolder"], false);
    assert_eq!(response.body["createdAt"], model["createdAt"]);

    let stale = app
        .request("GET", "/api/models/65a1f0c2b3d4e5f607182930", None)
        .await;
    assert_eq!(stale.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_by_body_id() {
    let app = TestApp::new();
    let model = app
        .create_model(json!({ "name": "Invoice Flow", "xml": XML }))
        .await;
    let id = id_of(&model);

    let response = app
        .request(
            "POST",
            "/api/models/update",
            Some(json!({ "_id": id, "xml": "<definitions/>" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.id(), id);
    assert_eq!(response.body["xml"], "<definitions/>");

    let no_id = app
        .request("POST", "/api/models/update", Some(json!({ "name": "x" })))
        .await;
    assert_eq!(no_id.status, StatusCode::BAD_REQUEST);
    assert_eq!(no_id.body["error"], "No model ID provided");

    let unknown = app
        .request(
            "POST",
            "/api/models/update",
            Some(json!({ "_id": "65a1f0c2b3d4e5f607182930", "name": "x" })),
        )
        .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_model_by_path_and_query() {
    let app = TestApp::new();
    let first = app
        .create_model(json!({ "name": "First", "xml": XML }))
        .await;
    let second = app
        .create_model(json!({ "name": "Second", "xml": XML }))
        .await;

    let by_path = app
        .request("DELETE", &format!("/api/models/{}", id_of(&first)), None)
        .await;
    assert_eq!(by_path.status, StatusCode::OK);
    assert_eq!(by_path.body["id"], id_of(&first));
    assert!(by_path.body["message"].is_string());

    let by_query = app
        .request("DELETE", &format!("/api/models?id={}", id_of(&second)), None)
        .await;
    assert_eq!(by_query.status, StatusCode::OK);
    assert_eq!(by_query.body["id"], id_of(&second));

    let again = app
        .request("DELETE", &format!("/api/models/{}", id_of(&first)), None)
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);

    let no_id = app.request("DELETE", "/api/models", None).await;
    assert_eq!(no_id.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_is_scoped_to_folder_and_newest_first() {
    let app = TestApp::new();
    let folder = app.create_folder("Sales", "root").await;
    let folder_id = id_of(&folder);

    app.create_model(json!({
        "name": "Older",
        "xml": XML,
        "folderId": folder_id,
        "createdAt": "2023-01-01T00:00:00Z"
    }))
    .await;
    app.create_model(json!({ "name": "Newer", "xml": XML, "folderId": folder_id }))
        .await;
    app.create_model(json!({ "name": "Elsewhere", "xml": XML }))
        .await;

    let response = app
        .request("GET", &format!("/api/models?folderId={folder_id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let names: Vec<&str> = response
        .body
        .as_array()
        .expect("array")
        .iter()
        .map(|m| m["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, vec!["Newer", "Older"]);

    let root = app.request("GET", "/api/models", None).await;
    assert_eq!(root.body.as_array().expect("array").len(), 1);
}

#[tokio::test]
async fn test_search_by_tag_and_miss() {
    let app = TestApp::new();
    let tagged = app
        .create_model(json!({
            "name": "Invoice Flow",
            "xml": XML,
            "tags": ["finance", "billing"]
        }))
        .await;
    app.create_model(json!({ "name": "Onboarding", "xml": XML, "description": "new hires" }))
        .await;

    let hit = app.request("GET", "/api/models?query=finance", None).await;
    assert_eq!(hit.status, StatusCode::OK);
    let hits = hit.body.as_array().expect("array");
    assert_eq!(hits.len(), 1);
    assert_eq!(id_of(&hits[0]), id_of(&tagged));

    let miss = app.request("GET", "/api/models?query=warehouse", None).await;
    assert_eq!(miss.status, StatusCode::OK);
    assert_eq!(miss.body, json!([]));
}

#[tokio::test]
async fn test_search_ranks_by_relevance() {
    let app = TestApp::new();
    let weak = app
        .create_model(json!({ "name": "Order archive", "xml": XML }))
        .await;
    let strong = app
        .create_model(json!({
            "name": "Order intake",
            "xml": XML,
            "description": "every order lands here",
            "createdAt": "2022-01-01T00:00:00Z"
        }))
        .await;

    let response = app.request("GET", "/api/models?query=order", None).await;
    let ids: Vec<String> = response
        .body
        .as_array()
        .expect("array")
        .iter()
        .map(id_of)
        .collect();
    assert_eq!(ids, vec![id_of(&strong), id_of(&weak)]);
}

#[tokio::test]
async fn test_bad_query_string_gets_error_body() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/api/models?folderId=a&folderId=b", None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Invalid query string");
    assert!(response.body["details"].is_string());
}

#[tokio::test]
async fn test_uppercase_folder_id_lists_the_same_models() {
    let app = TestApp::new();
    let folder = app.create_folder("Sales", "root").await;
    let folder_id = id_of(&folder);
    app.create_model(json!({
        "name": "Invoice Flow",
        "xml": "<x/>",
        "folderId": folder_id.to_uppercase()
    }))
    .await;

    let listed = app
        .request("GET", &format!("/api/models?folderId={folder_id}"), None)
        .await;
    assert_eq!(listed.body.as_array().expect("array").len(), 1);
    assert_eq!(listed.body[0]["folderId"], folder_id);
}
