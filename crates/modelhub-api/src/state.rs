//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use modelhub_core::config::AppConfig;
use modelhub_database::StoreManager;
use modelhub_service::{FolderService, ModelService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Lazily connected document store.
    pub stores: Arc<StoreManager>,
    /// Model persistence and search.
    pub model_service: Arc<ModelService>,
    /// Folder hierarchy.
    pub folder_service: Arc<FolderService>,
}

impl AppState {
    /// Wire the services over a shared store manager.
    pub fn new(config: AppConfig, stores: Arc<StoreManager>) -> Self {
        Self {
            config: Arc::new(config),
            model_service: Arc::new(ModelService::new(Arc::clone(&stores))),
            folder_service: Arc::new(FolderService::new(Arc::clone(&stores))),
            stores,
        }
    }
}
