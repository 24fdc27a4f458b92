//! Store tests against a real PostgreSQL database.
//!
//! Set `MODELHUB_TEST_DATABASE_URL` to run them; without it every test
//! returns early. Names carry a fresh id so runs can share one database.

use modelhub_core::config::DatabaseConfig;
use modelhub_core::error::ErrorKind;
use modelhub_core::types::DocumentId;
use modelhub_database::{
    DocumentStore, FolderRemoval, FolderStore, ModelQuery, ModelStore, PostgresStore,
};
use modelhub_entity::folder::{Folder, FolderPatch, NewFolder};
use modelhub_entity::model::NewModel;

async fn connect() -> Option<PostgresStore> {
    let Ok(url) = std::env::var("MODELHUB_TEST_DATABASE_URL") else {
        eprintln!("MODELHUB_TEST_DATABASE_URL not set, skipping");
        return None;
    };
    let config = DatabaseConfig {
        url,
        max_connections: 2,
        run_migrations: true,
        ..DatabaseConfig::default()
    };
    Some(PostgresStore::connect(&config).await.expect("connect"))
}

fn unique(name: &str) -> String {
    format!("{name}-{}", DocumentId::new())
}

async fn child(store: &PostgresStore, name: &str, parent: &Folder) -> Folder {
    let mut data = NewFolder::new(name);
    data.parent_id = parent.id.to_string();
    data.path = parent.child_path();
    store.insert_folder(data).await.expect("insert child")
}

#[tokio::test]
async fn test_document_id_round_trips_through_text_column() {
    let Some(store) = connect().await else { return };
    assert!(store.health_check().await.expect("health"));

    let folder = store
        .insert_folder(NewFolder::new(unique("Sales")))
        .await
        .expect("insert");
    let found = store
        .find_folder(&folder.id)
        .await
        .expect("find")
        .expect("present");
    assert_eq!(found.id, folder.id);
    assert_eq!(found.path, "/");

    store.close().await;
}

#[tokio::test]
async fn test_duplicate_folder_name_is_a_conflict() {
    let Some(store) = connect().await else { return };
    let parent = store
        .insert_folder(NewFolder::new(unique("Sales")))
        .await
        .expect("insert");
    child(&store, "EU", &parent).await;
    let us = child(&store, "US", &parent).await;

    let mut again = NewFolder::new("EU");
    again.parent_id = parent.id.to_string();
    let err = store.insert_folder(again).await.expect_err("duplicate");
    assert_eq!(err.kind, ErrorKind::Conflict);

    let rename = FolderPatch {
        name: Some("EU".into()),
        ..FolderPatch::default()
    };
    let err = store
        .update_folder(&us.id, &rename)
        .await
        .expect_err("taken slot");
    assert_eq!(err.kind, ErrorKind::Conflict);

    store.close().await;
}

#[tokio::test]
async fn test_search_uses_term_overlap_and_folder_scope() {
    let Some(store) = connect().await else { return };
    let folder = store
        .insert_folder(NewFolder::new(unique("Finance")))
        .await
        .expect("insert");
    let folder_id = folder.id.to_string();

    let mut invoice = NewModel::new("Invoice Flow", "<x/>");
    invoice.folder_id = folder_id.clone();
    invoice.tags = vec!["billing".into()];
    let invoice = store.insert_model(invoice).await.expect("insert");

    let mut approval = NewModel::new("Invoice Approval", "<x/>");
    approval.folder_id = folder_id.clone();
    approval.description = Some("invoice sign-off for billing".into());
    let approval = store.insert_model(approval).await.expect("insert");

    let mut elsewhere = NewModel::new("Billing Elsewhere", "<x/>");
    elsewhere.tags = vec!["billing".into()];
    store.insert_model(elsewhere).await.expect("insert");

    let hits = store
        .find_models(&ModelQuery::search(folder_id.clone(), "invoice billing"))
        .await
        .expect("search");
    let ids: Vec<DocumentId> = hits.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![approval.id, invoice.id]);

    let misses = store
        .find_models(&ModelQuery::search(folder_id.clone(), "warehouse"))
        .await
        .expect("search");
    assert!(misses.is_empty());

    store.close().await;
}

#[tokio::test]
async fn test_guarded_delete() {
    let Some(store) = connect().await else { return };
    let parent = store
        .insert_folder(NewFolder::new(unique("Sales")))
        .await
        .expect("insert");
    let eu = child(&store, "EU", &parent).await;
    let mut model = NewModel::new("Invoice Flow", "<x/>");
    model.folder_id = parent.id.to_string();
    let model = store.insert_model(model).await.expect("insert");

    let outcome = store.remove_empty_folder(&parent.id).await.expect("delete");
    assert_eq!(
        outcome,
        FolderRemoval::NotEmpty {
            sub_folders: 1,
            models: 1
        }
    );
    assert!(store.find_folder(&parent.id).await.expect("find").is_some());

    assert_eq!(
        store.remove_empty_folder(&eu.id).await.expect("delete"),
        FolderRemoval::Removed
    );
    assert!(store.delete_model(&model.id).await.expect("delete"));
    assert_eq!(
        store.remove_empty_folder(&parent.id).await.expect("delete"),
        FolderRemoval::Removed
    );
    assert!(store.find_folder(&parent.id).await.expect("find").is_none());
    assert_eq!(
        store.remove_empty_folder(&parent.id).await.expect("delete"),
        FolderRemoval::NotFound
    );

    store.close().await;
}
