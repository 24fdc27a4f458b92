//! PostgreSQL document store.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;

use modelhub_core::config::DatabaseConfig;
use modelhub_core::error::{AppError, ErrorKind};
use modelhub_core::result::AppResult;
use modelhub_core::types::DocumentId;
use modelhub_entity::folder::{Folder, FolderPatch, NewFolder};
use modelhub_entity::model::{Model, ModelPatch, NewModel};

use crate::connection::open_pool;
use crate::migration::run_migrations;
use crate::repositories::{FolderRepository, ModelRepository};
use crate::store::{DocumentStore, FolderRemoval, FolderStore, ModelQuery, ModelStore};

/// Document store backed by a PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
    models: ModelRepository,
    folders: FolderRepository,
}

impl PostgresStore {
    /// Open a pool from config and apply migrations when enabled.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let pool = open_pool(config).await?;
        if config.run_migrations {
            run_migrations(&pool).await?;
        }
        Ok(Self::new(pool))
    }

    /// Build the store over an open pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            models: ModelRepository::new(pool.clone()),
            folders: FolderRepository::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl ModelStore for PostgresStore {
    async fn find_models(&self, query: &ModelQuery) -> AppResult<Vec<Model>> {
        self.models.find(query).await
    }

    async fn find_model(&self, id: &DocumentId) -> AppResult<Option<Model>> {
        self.models.find_by_id(id).await
    }

    async fn insert_model(&self, data: NewModel) -> AppResult<Model> {
        self.models.create(data).await
    }

    async fn update_model(
        &self,
        id: &DocumentId,
        patch: &ModelPatch,
    ) -> AppResult<Option<Model>> {
        self.models.update(id, patch).await
    }

    async fn delete_model(&self, id: &DocumentId) -> AppResult<bool> {
        self.models.delete(id).await
    }
}

#[async_trait]
impl FolderStore for PostgresStore {
    async fn find_folders(&self, parent_id: &str) -> AppResult<Vec<Folder>> {
        self.folders.find_children(parent_id).await
    }

    async fn find_all_folders(&self) -> AppResult<Vec<Folder>> {
        self.folders.find_all().await
    }

    async fn find_folder(&self, id: &DocumentId) -> AppResult<Option<Folder>> {
        self.folders.find_by_id(id).await
    }

    async fn find_folder_by_name(
        &self,
        parent_id: &str,
        name: &str,
    ) -> AppResult<Option<Folder>> {
        self.folders.find_by_name(parent_id, name).await
    }

    async fn insert_folder(&self, data: NewFolder) -> AppResult<Folder> {
        self.folders.create(data).await
    }

    async fn update_folder(
        &self,
        id: &DocumentId,
        patch: &FolderPatch,
    ) -> AppResult<Option<Folder>> {
        self.folders.update(id, patch).await
    }

    async fn remove_empty_folder(&self, id: &DocumentId) -> AppResult<FolderRemoval> {
        self.folders.remove_empty(id).await
    }
}

#[async_trait]
impl DocumentStore for PostgresStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|one| one == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }

    async fn close(&self) {
        self.pool.close().await;
        info!("PostgreSQL pool closed");
    }
}
