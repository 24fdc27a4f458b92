//! Lazily connecting store manager.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use modelhub_core::config::{DatabaseConfig, StoreProvider};
use modelhub_core::result::AppResult;

use crate::memory::MemoryStore;
use crate::postgres::PostgresStore;
use crate::store::DocumentStore;

/// Process-wide handle to the configured document store.
///
/// Nothing is connected until the first [`StoreManager::acquire`]. Every
/// later call returns the same store until [`StoreManager::release`].
#[derive(Debug)]
pub struct StoreManager {
    config: DatabaseConfig,
    store: Mutex<Option<Arc<dyn DocumentStore>>>,
}

impl StoreManager {
    /// Create a manager for the configured provider without connecting.
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config,
            store: Mutex::new(None),
        }
    }

    /// Create a manager around an existing store (for testing).
    pub fn from_store(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            config: DatabaseConfig::memory(),
            store: Mutex::new(Some(store)),
        }
    }

    /// The configured provider.
    pub fn provider(&self) -> StoreProvider {
        self.config.provider
    }

    /// Return the shared store, connecting on first use.
    ///
    /// A failed connect leaves the manager empty, so the next call retries.
    /// The lock is held across the connect: while the database is down,
    /// queued callers retry one after another, each waiting up to
    /// `database.connect_timeout_seconds`.
    pub async fn acquire(&self) -> AppResult<Arc<dyn DocumentStore>> {
        let mut slot = self.store.lock().await;
        if let Some(store) = slot.as_ref() {
            return Ok(Arc::clone(store));
        }

        let store = self.connect().await?;
        info!(backend = store.backend(), "Document store ready");
        *slot = Some(Arc::clone(&store));
        Ok(store)
    }

    /// Whether a store has been acquired and not yet released.
    pub async fn is_connected(&self) -> bool {
        self.store.lock().await.is_some()
    }

    /// Close the shared store. A later acquire connects again.
    pub async fn release(&self) {
        let released = self.store.lock().await.take();
        if let Some(store) = released {
            store.close().await;
            info!(backend = store.backend(), "Document store released");
        }
    }

    async fn connect(&self) -> AppResult<Arc<dyn DocumentStore>> {
        match self.config.provider {
            StoreProvider::Postgres => {
                info!("Initializing PostgreSQL document store");
                Ok(Arc::new(PostgresStore::connect(&self.config).await?))
            }
            StoreProvider::Memory => {
                info!("Initializing in-memory document store");
                Ok(Arc::new(MemoryStore::new()))
            }
        }
    }
}
