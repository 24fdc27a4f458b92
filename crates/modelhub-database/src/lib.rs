//! # modelhub-database
//!
//! Document store for ModelHub: the [`DocumentStore`] trait, a PostgreSQL
//! backend built on sqlx, an in-memory backend, the shared text-search
//! ranking, and the lazily connecting [`StoreManager`].

pub mod connection;
pub mod manager;
pub mod memory;
pub mod migration;
pub mod postgres;
pub mod repositories;
pub mod search;
pub mod store;

pub use manager::StoreManager;
pub use memory::MemoryStore;
pub use postgres::PostgresStore;
pub use store::{DocumentStore, FolderRemoval, FolderStore, ModelQuery, ModelStore};
