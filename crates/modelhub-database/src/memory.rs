//! In-memory document store.
//!
//! Both collections live behind a single async `RwLock`, so every write,
//! including the folder emptiness check and its delete, is atomic.

use std::cmp::Reverse;
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use modelhub_core::error::AppError;
use modelhub_core::result::AppResult;
use modelhub_core::types::DocumentId;
use modelhub_entity::folder::{Folder, FolderPatch, NewFolder};
use modelhub_entity::model::{Model, ModelPatch, NewModel};

use crate::search::SearchQuery;
use crate::store::{DocumentStore, FolderRemoval, FolderStore, ModelQuery, ModelStore};

#[derive(Debug, Default)]
struct Collections {
    models: HashMap<DocumentId, Model>,
    folders: HashMap<DocumentId, Folder>,
}

impl Collections {
    fn name_taken(&self, parent_id: &str, name: &str, except: Option<&DocumentId>) -> bool {
        self.folders
            .values()
            .any(|f| f.parent_id == parent_id && f.name == name && Some(&f.id) != except)
    }

    fn count_subfolders(&self, parent_id: &str) -> u64 {
        self.folders
            .values()
            .filter(|f| f.parent_id == parent_id)
            .count() as u64
    }

    fn count_models(&self, folder_id: &str) -> u64 {
        self.models
            .values()
            .filter(|m| m.folder_id == folder_id)
            .count() as u64
    }
}

/// Process-local document store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn duplicate_name(name: &str) -> AppError {
    AppError::conflict(format!(
        "A folder named '{name}' already exists in the selected folder"
    ))
}

#[async_trait]
impl ModelStore for MemoryStore {
    async fn find_models(&self, query: &ModelQuery) -> AppResult<Vec<Model>> {
        let inner = self.inner.read().await;
        let candidates: Vec<Model> = inner
            .models
            .values()
            .filter(|m| !m.is_folder && m.folder_id == query.folder_id)
            .cloned()
            .collect();

        let models = match query.text.as_deref() {
            Some(text) => SearchQuery::parse(text).rank(candidates),
            None => {
                let mut models = candidates;
                models.sort_by_key(|m| (Reverse(m.created_at), Reverse(m.id)));
                models
            }
        };
        Ok(models)
    }

    async fn find_model(&self, id: &DocumentId) -> AppResult<Option<Model>> {
        Ok(self.inner.read().await.models.get(id).cloned())
    }

    async fn insert_model(&self, data: NewModel) -> AppResult<Model> {
        let model = data.into_model(DocumentId::new(), Utc::now());
        self.inner
            .write()
            .await
            .models
            .insert(model.id, model.clone());
        debug!(model_id = %model.id, "Model inserted into memory store");
        Ok(model)
    }

    async fn update_model(
        &self,
        id: &DocumentId,
        patch: &ModelPatch,
    ) -> AppResult<Option<Model>> {
        let mut inner = self.inner.write().await;
        Ok(inner.models.get_mut(id).map(|model| {
            patch.apply(model, Utc::now());
            model.clone()
        }))
    }

    async fn delete_model(&self, id: &DocumentId) -> AppResult<bool> {
        Ok(self.inner.write().await.models.remove(id).is_some())
    }
}

#[async_trait]
impl FolderStore for MemoryStore {
    async fn find_folders(&self, parent_id: &str) -> AppResult<Vec<Folder>> {
        let inner = self.inner.read().await;
        let mut folders: Vec<Folder> = inner
            .folders
            .values()
            .filter(|f| f.parent_id == parent_id)
            .cloned()
            .collect();
        folders.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(folders)
    }

    async fn find_all_folders(&self) -> AppResult<Vec<Folder>> {
        let inner = self.inner.read().await;
        let mut folders: Vec<Folder> = inner.folders.values().cloned().collect();
        folders.sort_by(|a, b| {
            a.path
                .cmp(&b.path)
                .then_with(|| a.name.cmp(&b.name))
                .then(a.id.cmp(&b.id))
        });
        Ok(folders)
    }

    async fn find_folder(&self, id: &DocumentId) -> AppResult<Option<Folder>> {
        Ok(self.inner.read().await.folders.get(id).cloned())
    }

    async fn find_folder_by_name(
        &self,
        parent_id: &str,
        name: &str,
    ) -> AppResult<Option<Folder>> {
        let inner = self.inner.read().await;
        Ok(inner
            .folders
            .values()
            .find(|f| f.parent_id == parent_id && f.name == name)
            .cloned())
    }

    async fn insert_folder(&self, data: NewFolder) -> AppResult<Folder> {
        let mut inner = self.inner.write().await;
        if inner.name_taken(&data.parent_id, &data.name, None) {
            return Err(duplicate_name(&data.name));
        }
        let folder = data.into_folder(DocumentId::new(), Utc::now());
        inner.folders.insert(folder.id, folder.clone());
        debug!(folder_id = %folder.id, "Folder inserted into memory store");
        Ok(folder)
    }

    async fn update_folder(
        &self,
        id: &DocumentId,
        patch: &FolderPatch,
    ) -> AppResult<Option<Folder>> {
        let mut inner = self.inner.write().await;
        let Some(current) = inner.folders.get(id) else {
            return Ok(None);
        };

        if patch.changes_slot(current) {
            let (parent_id, name) = patch.target_slot(current);
            if inner.name_taken(parent_id, name, Some(id)) {
                return Err(duplicate_name(name));
            }
        }

        Ok(inner.folders.get_mut(id).map(|folder| {
            patch.apply(folder, Utc::now());
            folder.clone()
        }))
    }

    async fn remove_empty_folder(&self, id: &DocumentId) -> AppResult<FolderRemoval> {
        let mut inner = self.inner.write().await;
        if !inner.folders.contains_key(id) {
            return Ok(FolderRemoval::NotFound);
        }

        let key = id.to_string();
        let sub_folders = inner.count_subfolders(&key);
        let models = inner.count_models(&key);
        if sub_folders > 0 || models > 0 {
            return Ok(FolderRemoval::NotEmpty {
                sub_folders,
                models,
            });
        }

        inner.folders.remove(id);
        Ok(FolderRemoval::Removed)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }

    async fn close(&self) {}
}
