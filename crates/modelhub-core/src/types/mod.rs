//! Core type definitions used across the ModelHub workspace.

pub mod id;

pub use id::{DocumentId, ParseIdError};

/// Sentinel `folderId` / `parentId` value meaning "no folder".
pub const ROOT_FOLDER: &str = "root";

/// Default `createdBy` for documents created without an author.
pub const ANONYMOUS: &str = "Anonymous";

/// Materialized path of folders at the top level.
pub const ROOT_PATH: &str = "/";

/// Whether a folder reference is the root sentinel.
pub fn is_root(folder_ref: &str) -> bool {
    folder_ref == ROOT_FOLDER
}
