//! Partial folder updates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::document::Folder;

/// Fields a folder update may replace.
///
/// `path` is deliberately absent: it is fixed when the folder is created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FolderPatch {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New parent folder id, or `"root"`.
    pub parent_id: Option<String>,
}

impl FolderPatch {
    /// Whether applying the patch moves `folder` to another `(parent, name)` slot.
    pub fn changes_slot(&self, folder: &Folder) -> bool {
        self.name.as_ref().is_some_and(|n| *n != folder.name)
            || self.parent_id.as_ref().is_some_and(|p| *p != folder.parent_id)
    }

    /// The `(parent_id, name)` pair the folder occupies after the patch.
    pub fn target_slot<'a>(&'a self, folder: &'a Folder) -> (&'a str, &'a str) {
        (
            self.parent_id.as_deref().unwrap_or(&folder.parent_id),
            self.name.as_deref().unwrap_or(&folder.name),
        )
    }

    /// Shallow-merge the patch into `folder` and stamp `last_modified`.
    pub fn apply(&self, folder: &mut Folder, now: DateTime<Utc>) {
        if let Some(name) = &self.name {
            folder.name = name.clone();
        }
        if let Some(description) = &self.description {
            folder.description = description.clone();
        }
        if let Some(parent_id) = &self.parent_id {
            folder.parent_id = parent_id.clone();
        }
        folder.last_modified = now;
    }
}
