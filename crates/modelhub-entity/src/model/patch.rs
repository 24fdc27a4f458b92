//! Partial model updates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::document::Model;

/// Fields a model update may replace. Absent fields are left untouched.
///
/// Only these fields can be written through an update; identifiers,
/// `isFolder`, and timestamps are never taken from the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelPatch {
    /// New display name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New diagram definition.
    pub xml: Option<String>,
    /// New preview.
    pub svg: Option<String>,
    /// Replacement tag list.
    pub tags: Option<Vec<String>>,
    /// New containing folder.
    pub folder_id: Option<String>,
    /// New author name.
    pub created_by: Option<String>,
}

impl ModelPatch {
    /// Shallow-merge the patch into `model` and stamp `last_modified`.
    pub fn apply(&self, model: &mut Model, now: DateTime<Utc>) {
        if let Some(name) = &self.name {
            model.name = name.clone();
        }
        if let Some(description) = &self.description {
            model.description = Some(description.clone());
        }
        if let Some(xml) = &self.xml {
            model.xml = xml.clone();
        }
        if let Some(svg) = &self.svg {
            model.svg = Some(svg.clone());
        }
        if let Some(tags) = &self.tags {
            model.tags = tags.clone();
        }
        if let Some(folder_id) = &self.folder_id {
            model.folder_id = folder_id.clone();
        }
        if let Some(created_by) = &self.created_by {
            model.created_by = created_by.clone();
        }
        model.last_modified = now;
    }
}
