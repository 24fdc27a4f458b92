//! PostgreSQL repositories for models and folders.

pub mod folder;
pub mod model;

pub use folder::FolderRepository;
pub use model::ModelRepository;

use modelhub_core::error::{AppError, ErrorKind};

/// Wrap a sqlx error as a database error with an operation message.
pub(crate) fn db_error(message: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| AppError::with_source(ErrorKind::Database, message, e)
}
