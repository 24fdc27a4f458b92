//! Model CRUD and search.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use modelhub_core::error::AppError;
use modelhub_core::result::AppResult;
use modelhub_core::types::{ANONYMOUS, DocumentId};
use modelhub_database::{ModelQuery, StoreManager};
use modelhub_entity::model::{Model, ModelPatch, NewModel};

use crate::input;

/// Manages diagram models.
#[derive(Debug, Clone)]
pub struct ModelService {
    /// Shared document store.
    stores: Arc<StoreManager>,
}

/// Request to create a new model.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct CreateModelRequest {
    /// Display name; must not be blank.
    pub name: String,
    /// Diagram definition; must not be blank.
    pub xml: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional rendered preview.
    pub svg: Option<String>,
    /// Tags.
    pub tags: Vec<String>,
    /// Containing folder; `root` when absent.
    pub folder_id: Option<String>,
    /// Author name; `Anonymous` when absent.
    pub created_by: Option<String>,
    /// Creation time supplied by the caller, e.g. when importing.
    pub created_at: Option<DateTime<Utc>>,
}

impl ModelService {
    /// Creates a new model service.
    pub fn new(stores: Arc<StoreManager>) -> Self {
        Self { stores }
    }

    /// Lists models in a folder, ranked by relevance when `query` has text.
    pub async fn list(&self, folder_id: Option<&str>, query: Option<&str>) -> AppResult<Vec<Model>> {
        let folder_id = input::folder_ref(folder_id);
        let query = match query.map(str::trim) {
            Some(text) if !text.is_empty() => ModelQuery::search(folder_id, text),
            _ => ModelQuery::in_folder(folder_id),
        };

        let store = self.stores.acquire().await.map_err(list_failed)?;
        let models = store.find_models(&query).await.map_err(list_failed)?;
        debug!(
            folder_id = %query.folder_id,
            search = query.text.is_some(),
            count = models.len(),
            "Listed models"
        );
        Ok(models)
    }

    /// Gets a model by ID.
    pub async fn get(&self, id: &DocumentId) -> AppResult<Model> {
        let store = self.stores.acquire().await.map_err(get_failed)?;
        store
            .find_model(id)
            .await
            .map_err(get_failed)?
            .ok_or_else(not_found)
    }

    /// Creates a new model.
    pub async fn create(&self, req: CreateModelRequest) -> AppResult<Model> {
        let name = input::required("Name", &req.name)?;
        if req.xml.trim().is_empty() {
            return Err(AppError::validation("XML is required"));
        }

        let data = NewModel {
            name,
            description: input::trimmed(req.description),
            xml: req.xml,
            svg: req.svg,
            tags: input::tags(req.tags),
            folder_id: input::folder_ref(req.folder_id.as_deref()),
            created_by: input::trimmed(req.created_by)
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| ANONYMOUS.to_string()),
            created_at: req.created_at,
        };

        let store = self.stores.acquire().await.map_err(create_failed)?;
        let model = store.insert_model(data).await.map_err(create_failed)?;

        info!(
            model_id = %model.id,
            folder_id = %model.folder_id,
            name = %model.name,
            "Model created"
        );
        Ok(model)
    }

    /// Merges the allowed fields of `patch` into a model.
    ///
    /// No field is required here: a partial or odd payload is still saved.
    pub async fn update(&self, id: &DocumentId, patch: ModelPatch) -> AppResult<Model> {
        let patch = ModelPatch {
            name: input::trimmed(patch.name),
            description: input::trimmed(patch.description),
            xml: patch.xml,
            svg: patch.svg,
            tags: patch.tags.map(input::tags),
            folder_id: patch.folder_id.map(|f| input::folder_ref(Some(&f))),
            created_by: input::trimmed(patch.created_by),
        };

        let store = self.stores.acquire().await.map_err(update_failed)?;
        let model = store
            .update_model(id, &patch)
            .await
            .map_err(update_failed)?
            .ok_or_else(not_found)?;

        info!(model_id = %model.id, folder_id = %model.folder_id, "Model updated");
        Ok(model)
    }

    /// Deletes a model and returns its ID.
    pub async fn delete(&self, id: &DocumentId) -> AppResult<DocumentId> {
        let store = self.stores.acquire().await.map_err(delete_failed)?;
        if !store.delete_model(id).await.map_err(delete_failed)? {
            return Err(not_found());
        }

        info!(model_id = %id, "Model deleted");
        Ok(*id)
    }
}

fn not_found() -> AppError {
    AppError::not_found("Model not found")
}

fn list_failed(e: AppError) -> AppError {
    e.context("Failed to list models")
}

fn get_failed(e: AppError) -> AppError {
    e.context("Failed to fetch model")
}

fn create_failed(e: AppError) -> AppError {
    e.context("Failed to create model")
}

fn update_failed(e: AppError) -> AppError {
    e.context("Failed to update model")
}

fn delete_failed(e: AppError) -> AppError {
    e.context("Failed to delete model")
}
