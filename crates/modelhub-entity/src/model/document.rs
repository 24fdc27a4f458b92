//! Model document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use modelhub_core::types::{ANONYMOUS, DocumentId, ROOT_FOLDER};

/// A persisted diagram.
///
/// `xml` and `svg` are opaque to the server: the editor produces and
/// consumes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Store-assigned identifier.
    #[serde(rename = "_id")]
    pub id: DocumentId,
    /// Display name.
    pub name: String,
    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Serialized diagram definition.
    pub xml: String,
    /// Rendered preview.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub svg: Option<String>,
    /// Search tags, in caller order.
    pub tags: Vec<String>,
    /// Containing folder id, or `"root"`.
    pub folder_id: String,
    /// Always `false` for models; listing filters on it.
    pub is_folder: bool,
    /// Author name.
    pub created_by: String,
    /// When the model was created.
    pub created_at: DateTime<Utc>,
    /// When the model was last written.
    pub last_modified: DateTime<Utc>,
}

/// Data required to create a new model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewModel {
    /// Display name, already trimmed and non-empty.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Serialized diagram definition.
    pub xml: String,
    /// Rendered preview.
    pub svg: Option<String>,
    /// Search tags.
    pub tags: Vec<String>,
    /// Containing folder id, or `"root"`.
    pub folder_id: String,
    /// Author name.
    pub created_by: String,
    /// Caller-supplied creation time, if any.
    pub created_at: Option<DateTime<Utc>>,
}

impl NewModel {
    /// A model at the top level with no optional fields.
    pub fn new(name: impl Into<String>, xml: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            xml: xml.into(),
            svg: None,
            tags: Vec::new(),
            folder_id: ROOT_FOLDER.to_string(),
            created_by: ANONYMOUS.to_string(),
            created_at: None,
        }
    }

    /// Build the stored document.
    pub fn into_model(self, id: DocumentId, now: DateTime<Utc>) -> Model {
        Model {
            id,
            name: self.name,
            description: self.description,
            xml: self.xml,
            svg: self.svg,
            tags: self.tags,
            folder_id: self.folder_id,
            is_folder: false,
            created_by: self.created_by,
            created_at: self.created_at.unwrap_or(now),
            last_modified: now,
        }
    }
}
