//! Folder CRUD with materialized paths and a guarded delete.

use std::sync::Arc;

use tracing::{info, warn};

use modelhub_core::error::AppError;
use modelhub_core::result::AppResult;
use modelhub_core::types::{ANONYMOUS, DocumentId, ROOT_PATH, is_root};
use modelhub_database::{DocumentStore, FolderRemoval, StoreManager};
use modelhub_entity::folder::{Folder, FolderPatch, NewFolder};

use crate::input;

/// Manages the folder hierarchy.
#[derive(Debug, Clone)]
pub struct FolderService {
    /// Shared document store.
    stores: Arc<StoreManager>,
}

/// Request to create a new folder.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct CreateFolderRequest {
    /// Folder name; must not be blank.
    pub name: String,
    /// Parent folder ID, or `root` when absent.
    pub parent_id: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Author name.
    pub created_by: Option<String>,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(stores: Arc<StoreManager>) -> Self {
        Self { stores }
    }

    /// Lists the direct children of a parent, ordered by name.
    pub async fn list(&self, parent_id: Option<&str>) -> AppResult<Vec<Folder>> {
        let parent_id = input::folder_ref(parent_id);
        let store = self.stores.acquire().await.map_err(list_failed)?;
        store.find_folders(&parent_id).await.map_err(list_failed)
    }

    /// Lists every folder, ordered by path then name.
    pub async fn list_all(&self) -> AppResult<Vec<Folder>> {
        let store = self.stores.acquire().await.map_err(list_all_failed)?;
        store.find_all_folders().await.map_err(list_all_failed)
    }

    /// Gets a folder by ID.
    pub async fn get(&self, id: &DocumentId) -> AppResult<Folder> {
        let store = self.stores.acquire().await.map_err(get_failed)?;
        store
            .find_folder(id)
            .await
            .map_err(get_failed)?
            .ok_or_else(not_found)
    }

    /// Creates a folder under its parent.
    ///
    /// The path is the parent's path followed by the parent's name. A root
    /// parent, or one that cannot be found, yields `/`.
    pub async fn create(&self, req: CreateFolderRequest) -> AppResult<Folder> {
        let name = input::required("Folder name", &req.name)?;
        let parent_id = input::folder_ref(req.parent_id.as_deref());

        let store = self.stores.acquire().await.map_err(create_failed)?;
        if store
            .find_folder_by_name(&parent_id, &name)
            .await
            .map_err(create_failed)?
            .is_some()
        {
            return Err(duplicate_name());
        }

        let path = resolve_path(store.as_ref(), &parent_id)
            .await
            .map_err(create_failed)?;
        let data = NewFolder {
            name,
            description: input::trimmed(req.description).unwrap_or_default(),
            parent_id,
            path,
            created_by: input::trimmed(req.created_by)
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| ANONYMOUS.to_string()),
        };

        let folder = store.insert_folder(data).await.map_err(create_failed)?;
        info!(
            folder_id = %folder.id,
            parent_id = %folder.parent_id,
            path = %folder.path,
            name = %folder.name,
            "Folder created"
        );
        Ok(folder)
    }

    /// Renames, re-describes, or re-parents a folder.
    ///
    /// The stored path is left as it was.
    pub async fn update(&self, id: &DocumentId, patch: FolderPatch) -> AppResult<Folder> {
        let patch = FolderPatch {
            name: patch
                .name
                .map(|n| input::required("Folder name", &n))
                .transpose()?,
            description: input::trimmed(patch.description),
            parent_id: patch.parent_id.map(|p| input::folder_ref(Some(&p))),
        };
        if patch.parent_id.as_deref() == Some(id.to_string().as_str()) {
            return Err(AppError::validation("A folder cannot be its own parent"));
        }

        let store = self.stores.acquire().await.map_err(update_failed)?;
        let folder = store
            .update_folder(id, &patch)
            .await
            .map_err(update_failed)?
            .ok_or_else(not_found)?;

        info!(folder_id = %folder.id, parent_id = %folder.parent_id, "Folder updated");
        Ok(folder)
    }

    /// Deletes a folder that owns no subfolders and no models.
    pub async fn delete(&self, id: &DocumentId) -> AppResult<DocumentId> {
        let store = self.stores.acquire().await.map_err(delete_failed)?;
        match store.remove_empty_folder(id).await.map_err(delete_failed)? {
            FolderRemoval::Removed => {
                info!(folder_id = %id, "Folder deleted");
                Ok(*id)
            }
            FolderRemoval::NotFound => Err(not_found()),
            FolderRemoval::NotEmpty {
                sub_folders,
                models,
            } => {
                warn!(folder_id = %id, sub_folders, models, "Refusing to delete non-empty folder");
                Err(AppError::conflict(
                    "The folder cannot be deleted because it contains subfolders or models",
                )
                .with_count("subFolders", sub_folders)
                .with_count("models", models))
            }
        }
    }
}

/// Materialized path for a new child of `parent_id`.
async fn resolve_path(store: &dyn DocumentStore, parent_id: &str) -> AppResult<String> {
    if is_root(parent_id) {
        return Ok(ROOT_PATH.to_string());
    }
    let Ok(id) = parent_id.parse::<DocumentId>() else {
        return Ok(ROOT_PATH.to_string());
    };
    Ok(store
        .find_folder(&id)
        .await?
        .map(|parent| parent.child_path())
        .unwrap_or_else(|| ROOT_PATH.to_string()))
}

fn not_found() -> AppError {
    AppError::not_found("Folder not found")
}

fn duplicate_name() -> AppError {
    AppError::conflict("A folder with this name already exists in the selected folder")
}

fn list_failed(e: AppError) -> AppError {
    e.context("Failed to list folders")
}

fn list_all_failed(e: AppError) -> AppError {
    e.context("Failed to list all folders")
}

fn get_failed(e: AppError) -> AppError {
    e.context("Failed to fetch folder")
}

fn create_failed(e: AppError) -> AppError {
    e.context("Failed to create folder")
}

fn update_failed(e: AppError) -> AppError {
    e.context("Failed to update folder")
}

fn delete_failed(e: AppError) -> AppError {
    e.context("Failed to delete folder")
}
