//! Folder repository implementation.

use chrono::Utc;
use sqlx::PgPool;

use modelhub_core::error::{AppError, ErrorKind};
use modelhub_core::result::AppResult;
use modelhub_core::types::DocumentId;
use modelhub_entity::folder::{Folder, FolderPatch, NewFolder};

use super::db_error;
use super::model::lock_folder;
use crate::store::FolderRemoval;

const FOLDER_COLUMNS: &str =
    "id, name, description, parent_id, path, created_by, created_at, last_modified";

const SLOT_CONSTRAINT: &str = "folders_parent_name_key";

/// Repository for folder hierarchy queries.
#[derive(Debug, Clone)]
pub struct FolderRepository {
    pool: PgPool,
}

impl FolderRepository {
    /// Create a new folder repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Direct children of a parent, ordered by name.
    pub async fn find_children(&self, parent_id: &str) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(&format!(
            "SELECT {FOLDER_COLUMNS} FROM folders WHERE parent_id = $1 \
             ORDER BY name COLLATE \"C\", id"
        ))
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list folders"))
    }

    /// Every folder, ordered by path then name.
    pub async fn find_all(&self) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(&format!(
            "SELECT {FOLDER_COLUMNS} FROM folders \
             ORDER BY path COLLATE \"C\", name COLLATE \"C\", id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list all folders"))
    }

    /// Find a folder by ID.
    pub async fn find_by_id(&self, id: &DocumentId) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>(&format!("SELECT {FOLDER_COLUMNS} FROM folders WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find folder"))
    }

    /// Find a folder by name under a parent.
    pub async fn find_by_name(&self, parent_id: &str, name: &str) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>(&format!(
            "SELECT {FOLDER_COLUMNS} FROM folders WHERE parent_id = $1 AND name = $2"
        ))
        .bind(parent_id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to find folder by name"))
    }

    /// Create a new folder.
    pub async fn create(&self, data: NewFolder) -> AppResult<Folder> {
        let folder = data.into_folder(DocumentId::new(), Utc::now());

        let mut tx = self.pool.begin().await.map_err(db_error("Failed to begin transaction"))?;
        lock_folder(&mut tx, &folder.parent_id).await?;

        let created = sqlx::query_as::<_, Folder>(&format!(
            "INSERT INTO folders (id, name, description, parent_id, path, created_by, \
                                  created_at, last_modified) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING {FOLDER_COLUMNS}"
        ))
        .bind(folder.id)
        .bind(&folder.name)
        .bind(&folder.description)
        .bind(&folder.parent_id)
        .bind(&folder.path)
        .bind(&folder.created_by)
        .bind(folder.created_at)
        .bind(folder.last_modified)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| slot_error(e, &folder.name, "Failed to create folder"))?;

        tx.commit().await.map_err(db_error("Failed to commit folder"))?;
        Ok(created)
    }

    /// Merge a patch into a stored folder. The path is never rewritten.
    pub async fn update(&self, id: &DocumentId, patch: &FolderPatch) -> AppResult<Option<Folder>> {
        let mut tx = self.pool.begin().await.map_err(db_error("Failed to begin transaction"))?;

        let Some(mut folder) = sqlx::query_as::<_, Folder>(&format!(
            "SELECT {FOLDER_COLUMNS} FROM folders WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(db_error("Failed to load folder"))?
        else {
            return Ok(None);
        };

        let reparented = patch
            .parent_id
            .as_ref()
            .is_some_and(|p| *p != folder.parent_id);
        patch.apply(&mut folder, Utc::now());
        if reparented {
            lock_folder(&mut tx, &folder.parent_id).await?;
        }

        let updated = sqlx::query_as::<_, Folder>(&format!(
            "UPDATE folders SET name = $2, description = $3, parent_id = $4, last_modified = $5 \
             WHERE id = $1 RETURNING {FOLDER_COLUMNS}"
        ))
        .bind(id)
        .bind(&folder.name)
        .bind(&folder.description)
        .bind(&folder.parent_id)
        .bind(folder.last_modified)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| slot_error(e, &folder.name, "Failed to update folder"))?;

        tx.commit().await.map_err(db_error("Failed to commit folder"))?;
        Ok(Some(updated))
    }

    /// Delete a folder if nothing references it.
    ///
    /// The row lock taken here conflicts with the share lock every insert
    /// or move into the folder takes, so no child can appear between the
    /// count and the delete.
    pub async fn remove_empty(&self, id: &DocumentId) -> AppResult<FolderRemoval> {
        let mut tx = self.pool.begin().await.map_err(db_error("Failed to begin transaction"))?;

        let locked: Option<DocumentId> =
            sqlx::query_scalar("SELECT id FROM folders WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(db_error("Failed to lock folder"))?;
        if locked.is_none() {
            return Ok(FolderRemoval::NotFound);
        }

        let key = id.to_string();
        let sub_folders: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM folders WHERE parent_id = $1")
            .bind(&key)
            .fetch_one(&mut *tx)
            .await
            .map_err(db_error("Failed to count subfolders"))?;
        let models: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM models WHERE folder_id = $1")
            .bind(&key)
            .fetch_one(&mut *tx)
            .await
            .map_err(db_error("Failed to count models"))?;

        if sub_folders > 0 || models > 0 {
            return Ok(FolderRemoval::NotEmpty {
                sub_folders: sub_folders as u64,
                models: models as u64,
            });
        }

        sqlx::query("DELETE FROM folders WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to delete folder"))?;
        tx.commit().await.map_err(db_error("Failed to commit folder delete"))?;
        Ok(FolderRemoval::Removed)
    }
}

fn slot_error(e: sqlx::Error, name: &str, message: &'static str) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err) if db_err.constraint() == Some(SLOT_CONSTRAINT) => {
            AppError::conflict(format!(
                "A folder named '{name}' already exists in the selected folder"
            ))
        }
        _ => AppError::with_source(ErrorKind::Database, message, e),
    }
}
