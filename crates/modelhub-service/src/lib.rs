//! # modelhub-service
//!
//! Business logic for ModelHub. [`ModelService`] owns diagram persistence
//! and search; [`FolderService`] owns the folder hierarchy, its materialized
//! paths, and the guarded delete.
//!
//! Both services share one [`StoreManager`](modelhub_database::StoreManager)
//! and acquire the store per call, so the first request opens the
//! connection.

pub mod folder;
pub mod input;
pub mod model;

pub use folder::FolderService;
pub use model::ModelService;
