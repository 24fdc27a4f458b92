//! Integration tests for folder operations.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::{TestApp, id_of};

#[tokio::test]
async fn test_create_folder_paths() {
    let app = TestApp::new();

    let sales = app.create_folder("Sales", "root").await;
    assert_eq!(sales["path"], "/");
    assert_eq!(sales["parentId"], "root");
    assert_eq!(sales["description"], "");

    let eu = app.create_folder("EU", &id_of(&sales)).await;
    assert_eq!(eu["path"], "/Sales/");

    let de = app.create_folder("DE", &id_of(&eu)).await;
    assert_eq!(de["path"], "/Sales/EU/");
}

#[tokio::test]
async fn test_create_folder_without_parent_goes_to_root() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/api/folders", Some(json!({ "name": "Sales" })))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["parentId"], "root");
    assert_eq!(response.body["path"], "/");
}

#[tokio::test]
async fn test_duplicate_folder_name_is_rejected() {
    let app = TestApp::new();
    app.create_folder("Sales", "root").await;

    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(json!({ "name": "Sales", "parentId": "root" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["error"].is_string());

    let list = app.request("GET", "/api/folders", None).await;
    assert_eq!(list.body.as_array().expect("array").len(), 1);
}

#[tokio::test]
async fn test_create_folder_requires_name() {
    let app = TestApp::new();

    let missing = app
        .request("POST", "/api/folders", Some(json!({ "parentId": "root" })))
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.body["error"], "Folder name is required");

    let blank = app
        .request("POST", "/api/folders", Some(json!({ "name": "   " })))
        .await;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_folders_by_parent_sorted_by_name() {
    let app = TestApp::new();
    let sales = app.create_folder("Sales", "root").await;
    app.create_folder("Marketing", "root").await;
    app.create_folder("EU", &id_of(&sales)).await;
    app.create_folder("APAC", &id_of(&sales)).await;

    let root = app.request("GET", "/api/folders?parentId=root", None).await;
    let names: Vec<&str> = root
        .body
        .as_array()
        .expect("array")
        .iter()
        .map(|f| f["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, vec!["Marketing", "Sales"]);

    let children = app
        .request("GET", &format!("/api/folders?parentId={}", id_of(&sales)), None)
        .await;
    let names: Vec<&str> = children
        .body
        .as_array()
        .expect("array")
        .iter()
        .map(|f| f["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, vec!["APAC", "EU"]);
}

#[tokio::test]
async fn test_list_all_folders_by_path_then_name() {
    let app = TestApp::new();
    let sales = app.create_folder("Sales", "root").await;
    app.create_folder("EU", &id_of(&sales)).await;
    app.create_folder("Archive", "root").await;

    let response = app.request("GET", "/api/folders/all", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let listed: Vec<(String, String)> = response
        .body
        .as_array()
        .expect("array")
        .iter()
        .map(|f| {
            (
                f["path"].as_str().expect("path").to_string(),
                f["name"].as_str().expect("name").to_string(),
            )
        })
        .collect();
    assert_eq!(
        listed,
        vec![
            ("/".to_string(), "Archive".to_string()),
            ("/".to_string(), "Sales".to_string()),
            ("/Sales/".to_string(), "EU".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_get_folder() {
    let app = TestApp::new();
    let sales = app.create_folder("Sales", "root").await;

    let found = app
        .request("GET", &format!("/api/folders/{}", id_of(&sales)), None)
        .await;
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(found.body["name"], "Sales");

    let invalid = app.request("GET", "/api/folders/xyz", None).await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);

    let missing = app
        .request("GET", "/api/folders/65a1f0c2b3d4e5f607182930", None)
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rename_keeps_stored_paths() {
    let app = TestApp::new();
    let sales = app.create_folder("Sales", "root").await;
    let eu = app.create_folder("EU", &id_of(&sales)).await;

    let renamed = app
        .request(
            "PUT",
            "/api/folders",
            Some(json!({ "id": id_of(&sales), "name": "Revenue", "path": "/hacked/" })),
        )
        .await;
    assert_eq!(renamed.status, StatusCode::OK);
    assert_eq!(renamed.body["name"], "Revenue");
    assert_eq!(renamed.body["path"], "/");

    let child = app
        .request("GET", &format!("/api/folders/{}", id_of(&eu)), None)
        .await;
    assert_eq!(child.body["path"], "/Sales/");
}

#[tokio::test]
async fn test_update_folder_errors() {
    let app = TestApp::new();
    let sales = app.create_folder("Sales", "root").await;
    app.create_folder("Finance", "root").await;

    let no_id = app
        .request("PUT", "/api/folders", Some(json!({ "name": "x" })))
        .await;
    assert_eq!(no_id.status, StatusCode::BAD_REQUEST);
    assert_eq!(no_id.body["error"], "No folder ID provided");

    let invalid = app
        .request("PUT", "/api/folders", Some(json!({ "id": "123", "name": "x" })))
        .await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
    assert_eq!(invalid.body["error"], "Invalid folder ID");

    let missing = app
        .request(
            "PUT",
            "/api/folders",
            Some(json!({ "id": "65a1f0c2b3d4e5f607182930", "name": "x" })),
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let taken = app
        .request(
            "PUT",
            "/api/folders",
            Some(json!({ "_id": id_of(&sales), "name": "Finance" })),
        )
        .await;
    assert_eq!(taken.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_non_empty_folder_reports_counts() {
    let app = TestApp::new();
    let sales = app.create_folder("Sales", "root").await;
    let sales_id = id_of(&sales);
    app.create_folder("EU", &sales_id).await;
    app.create_folder("US", &sales_id).await;
    app.create_model(json!({ "name": "Pipeline", "xml": "<x/>", "folderId": sales_id }))
        .await;

    let response = app
        .request("DELETE", &format!("/api/folders?id={sales_id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["subFolders"], 2);
    assert_eq!(response.body["models"], 1);

    let still_there = app
        .request("GET", &format!("/api/folders/{sales_id}"), None)
        .await;
    assert_eq!(still_there.status, StatusCode::OK);
}

#[tokio::test]
async fn test_delete_empty_folder() {
    let app = TestApp::new();
    let sales = app.create_folder("Sales", "root").await;
    let sales_id = id_of(&sales);

    let response = app
        .request("DELETE", &format!("/api/folders?id={sales_id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], sales_id);

    let gone = app
        .request("GET", &format!("/api/folders/{sales_id}"), None)
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);

    let again = app
        .request("DELETE", &format!("/api/folders?id={sales_id}"), None)
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_folder_id_checks() {
    let app = TestApp::new();

    let no_id = app.request("DELETE", "/api/folders", None).await;
    assert_eq!(no_id.status, StatusCode::BAD_REQUEST);

    let invalid = app.request("DELETE", "/api/folders?id=nope", None).await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
    assert_eq!(invalid.body["error"], "Invalid folder ID");
}

#[tokio::test]
async fn test_uppercase_parent_id_still_guards_delete() {
    let app = TestApp::new();
    let sales = app.create_folder("Sales", "root").await;
    let sales_id = id_of(&sales);

    let eu = app.create_folder("EU", &sales_id.to_uppercase()).await;
    assert_eq!(eu["parentId"], sales_id);
    assert_eq!(eu["path"], "/Sales/");

    let response = app
        .request("DELETE", &format!("/api/folders?id={sales_id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["subFolders"], 1);
    assert_eq!(response.body["models"], 0);
}

#[tokio::test]
async fn test_bad_query_string_gets_error_body() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/api/folders?parentId=a&parentId=b", None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Invalid query string");
    assert!(response.body["details"].is_string());
}
