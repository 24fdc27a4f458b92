//! Store traits implemented by every document store backend.

use std::fmt;

use async_trait::async_trait;

use modelhub_core::result::AppResult;
use modelhub_core::types::{DocumentId, ROOT_FOLDER};
use modelhub_entity::folder::{Folder, FolderPatch, NewFolder};
use modelhub_entity::model::{Model, ModelPatch, NewModel};

/// Filter for listing models.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelQuery {
    /// Only models whose `folder_id` equals this value.
    pub folder_id: String,
    /// Free-text search over name, description, and tags.
    pub text: Option<String>,
}

impl ModelQuery {
    /// All models in a folder, newest first.
    pub fn in_folder(folder_id: impl Into<String>) -> Self {
        Self {
            folder_id: folder_id.into(),
            text: None,
        }
    }

    /// Models in a folder matching `text`, most relevant first.
    pub fn search(folder_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            folder_id: folder_id.into(),
            text: Some(text.into()),
        }
    }
}

impl Default for ModelQuery {
    fn default() -> Self {
        Self::in_folder(ROOT_FOLDER)
    }
}

/// Outcome of a guarded folder delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderRemoval {
    /// The folder was empty and has been deleted.
    Removed,
    /// No folder has this identifier.
    NotFound,
    /// The folder still owns children; nothing was deleted.
    NotEmpty {
        /// Folders whose `parent_id` is this folder.
        sub_folders: u64,
        /// Models whose `folder_id` is this folder.
        models: u64,
    },
}

/// Persistence for diagram models.
#[async_trait]
pub trait ModelStore: Send + Sync + fmt::Debug + 'static {
    /// List models matching `query`.
    ///
    /// Without text the result is ordered by `created_at` descending; with
    /// text it is ordered by [`crate::search::SearchQuery::rank`].
    async fn find_models(&self, query: &ModelQuery) -> AppResult<Vec<Model>>;

    /// Find a model by identifier.
    async fn find_model(&self, id: &DocumentId) -> AppResult<Option<Model>>;

    /// Persist a new model under a fresh identifier.
    async fn insert_model(&self, data: NewModel) -> AppResult<Model>;

    /// Merge `patch` into a stored model. Returns `None` if it does not exist.
    async fn update_model(&self, id: &DocumentId, patch: &ModelPatch)
    -> AppResult<Option<Model>>;

    /// Delete a model. Returns `true` if it existed.
    async fn delete_model(&self, id: &DocumentId) -> AppResult<bool>;
}

/// Persistence for the folder hierarchy.
#[async_trait]
pub trait FolderStore: Send + Sync + fmt::Debug + 'static {
    /// Direct children of `parent_id`, ordered by name.
    async fn find_folders(&self, parent_id: &str) -> AppResult<Vec<Folder>>;

    /// Every folder, ordered by path then name.
    async fn find_all_folders(&self) -> AppResult<Vec<Folder>>;

    /// Find a folder by identifier.
    async fn find_folder(&self, id: &DocumentId) -> AppResult<Option<Folder>>;

    /// Find the folder named `name` under `parent_id`.
    async fn find_folder_by_name(&self, parent_id: &str, name: &str)
    -> AppResult<Option<Folder>>;

    /// Persist a new folder. Fails with a conflict if the name is taken
    /// under the same parent.
    async fn insert_folder(&self, data: NewFolder) -> AppResult<Folder>;

    /// Merge `patch` into a stored folder. Returns `None` if it does not
    /// exist and fails with a conflict if the target name is taken.
    async fn update_folder(
        &self,
        id: &DocumentId,
        patch: &FolderPatch,
    ) -> AppResult<Option<Folder>>;

    /// Delete a folder only if no folder or model references it.
    ///
    /// The emptiness check and the delete are atomic with respect to
    /// concurrent inserts that reference the folder.
    async fn remove_empty_folder(&self, id: &DocumentId) -> AppResult<FolderRemoval>;
}

/// A complete document store backend.
#[async_trait]
pub trait DocumentStore: ModelStore + FolderStore {
    /// Backend name for logs and health output.
    fn backend(&self) -> &'static str;

    /// Check store connectivity.
    async fn health_check(&self) -> AppResult<bool>;

    /// Release connections held by the backend.
    async fn close(&self);
}
