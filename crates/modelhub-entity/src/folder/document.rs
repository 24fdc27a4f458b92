//! Folder document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use modelhub_core::types::{ANONYMOUS, DocumentId, ROOT_FOLDER, ROOT_PATH};

/// A named container for models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Store-assigned identifier.
    #[serde(rename = "_id")]
    pub id: DocumentId,
    /// Display name, unique among siblings.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Parent folder id, or `"root"`.
    pub parent_id: String,
    /// Ancestor names at creation time, e.g. `/Sales/EU/`.
    ///
    /// Not rewritten when an ancestor is renamed or moved.
    pub path: String,
    /// Author name.
    pub created_by: String,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// When the folder was last written.
    pub last_modified: DateTime<Utc>,
}

impl Folder {
    /// Materialized path of a folder created directly inside this one.
    pub fn child_path(&self) -> String {
        format!("{}{}/", self.path, self.name)
    }
}

/// Data required to create a new folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFolder {
    /// Folder name, already trimmed and non-empty.
    pub name: String,
    /// Description.
    pub description: String,
    /// Parent folder id, or `"root"`.
    pub parent_id: String,
    /// Materialized path computed from the parent.
    pub path: String,
    /// Author name.
    pub created_by: String,
}

impl NewFolder {
    /// A top-level folder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            parent_id: ROOT_FOLDER.to_string(),
            path: ROOT_PATH.to_string(),
            created_by: ANONYMOUS.to_string(),
        }
    }

    /// Build the stored document.
    pub fn into_folder(self, id: DocumentId, now: DateTime<Utc>) -> Folder {
        Folder {
            id,
            name: self.name,
            description: self.description,
            parent_id: self.parent_id,
            path: self.path,
            created_by: self.created_by,
            created_at: now,
            last_modified: now,
        }
    }
}
