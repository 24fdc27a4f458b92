//! Model repository implementation.

use chrono::Utc;
use sqlx::{PgPool, Postgres, Transaction};

use modelhub_core::result::AppResult;
use modelhub_core::types::{DocumentId, is_root};
use modelhub_entity::model::{Model, ModelPatch, NewModel};

use super::db_error;
use crate::search::{SearchQuery, model_terms, search_terms};
use crate::store::ModelQuery;

const MODEL_COLUMNS: &str = "id, name, description, xml, svg, tags, folder_id, is_folder, \
                             created_by, created_at, last_modified";

/// Repository for model CRUD and search queries.
#[derive(Debug, Clone)]
pub struct ModelRepository {
    pool: PgPool,
}

impl ModelRepository {
    /// Create a new model repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List models in a folder, newest first, or ranked by relevance when
    /// the query carries text.
    pub async fn find(&self, query: &ModelQuery) -> AppResult<Vec<Model>> {
        let Some(text) = query.text.as_deref() else {
            return sqlx::query_as::<_, Model>(&format!(
                "SELECT {MODEL_COLUMNS} FROM models \
                 WHERE folder_id = $1 AND is_folder = FALSE \
                 ORDER BY created_at DESC, id DESC"
            ))
            .bind(&query.folder_id)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list models"));
        };

        let search = SearchQuery::parse(text);
        if search.is_empty() {
            return Ok(Vec::new());
        }

        let candidates = sqlx::query_as::<_, Model>(&format!(
            "SELECT {MODEL_COLUMNS} FROM models \
             WHERE folder_id = $1 AND is_folder = FALSE AND search_terms && $2"
        ))
        .bind(&query.folder_id)
        .bind(search.terms().to_vec())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to search models"))?;

        Ok(search.rank(candidates))
    }

    /// Find a model by ID.
    pub async fn find_by_id(&self, id: &DocumentId) -> AppResult<Option<Model>> {
        sqlx::query_as::<_, Model>(&format!("SELECT {MODEL_COLUMNS} FROM models WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find model"))
    }

    /// Create a new model.
    pub async fn create(&self, data: NewModel) -> AppResult<Model> {
        let model = data.into_model(DocumentId::new(), Utc::now());
        let terms = model_terms(&model);

        let mut tx = self.pool.begin().await.map_err(db_error("Failed to begin transaction"))?;
        lock_folder(&mut tx, &model.folder_id).await?;

        let created = sqlx::query_as::<_, Model>(&format!(
            "INSERT INTO models (id, name, description, xml, svg, tags, folder_id, is_folder, \
                                 created_by, created_at, last_modified, search_terms) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, FALSE, $8, $9, $10, $11) \
             RETURNING {MODEL_COLUMNS}"
        ))
        .bind(model.id)
        .bind(&model.name)
        .bind(&model.description)
        .bind(&model.xml)
        .bind(&model.svg)
        .bind(&model.tags)
        .bind(&model.folder_id)
        .bind(&model.created_by)
        .bind(model.created_at)
        .bind(model.last_modified)
        .bind(&terms)
        .fetch_one(&mut *tx)
        .await
        .map_err(db_error("Failed to create model"))?;

        tx.commit().await.map_err(db_error("Failed to commit model"))?;
        Ok(created)
    }

    /// Merge a patch into a stored model.
    pub async fn update(&self, id: &DocumentId, patch: &ModelPatch) -> AppResult<Option<Model>> {
        let mut tx = self.pool.begin().await.map_err(db_error("Failed to begin transaction"))?;

        let Some(mut model) = sqlx::query_as::<_, Model>(&format!(
            "SELECT {MODEL_COLUMNS} FROM models WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(db_error("Failed to load model"))?
        else {
            return Ok(None);
        };

        let moved = patch
            .folder_id
            .as_ref()
            .is_some_and(|f| *f != model.folder_id);
        patch.apply(&mut model, Utc::now());
        if moved {
            lock_folder(&mut tx, &model.folder_id).await?;
        }

        let terms = search_terms(&model.name, model.description.as_deref(), &model.tags);
        let updated = sqlx::query_as::<_, Model>(&format!(
            "UPDATE models SET name = $2, description = $3, xml = $4, svg = $5, tags = $6, \
                 folder_id = $7, created_by = $8, last_modified = $9, search_terms = $10 \
             WHERE id = $1 RETURNING {MODEL_COLUMNS}"
        ))
        .bind(id)
        .bind(&model.name)
        .bind(&model.description)
        .bind(&model.xml)
        .bind(&model.svg)
        .bind(&model.tags)
        .bind(&model.folder_id)
        .bind(&model.created_by)
        .bind(model.last_modified)
        .bind(&terms)
        .fetch_one(&mut *tx)
        .await
        .map_err(db_error("Failed to update model"))?;

        tx.commit().await.map_err(db_error("Failed to commit model"))?;
        Ok(Some(updated))
    }

    /// Delete a model.
    pub async fn delete(&self, id: &DocumentId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM models WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete model"))?;
        Ok(result.rows_affected() > 0)
    }
}

/// Take a share lock on the referenced folder row so a concurrent guarded
/// delete of that folder waits for this transaction.
pub(crate) async fn lock_folder(
    tx: &mut Transaction<'_, Postgres>,
    folder_ref: &str,
) -> AppResult<()> {
    if is_root(folder_ref) {
        return Ok(());
    }
    sqlx::query("SELECT 1 FROM folders WHERE id = $1 FOR SHARE")
        .bind(folder_ref)
        .fetch_optional(&mut **tx)
        .await
        .map_err(db_error("Failed to lock folder"))?;
    Ok(())
}
