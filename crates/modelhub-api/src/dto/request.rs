//! Request bodies and query strings.
//!
//! Bodies use the editor client's camelCase keys. Keys not listed here are
//! ignored, so a client that echoes back a whole document can never write
//! `_id`, `isFolder`, or timestamps through an update.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use modelhub_entity::folder::FolderPatch;
use modelhub_entity::model::ModelPatch;
use modelhub_service::folder::CreateFolderRequest as SvcCreateFolder;
use modelhub_service::model::CreateModelRequest as SvcCreateModel;

/// `GET /api/models` query string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListModelsQuery {
    /// Folder to list; `root` when absent.
    pub folder_id: Option<String>,
    /// Free-text search.
    pub query: Option<String>,
}

/// `GET /api/folders` query string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFoldersQuery {
    /// Parent to list; `root` when absent.
    pub parent_id: Option<String>,
}

/// `?id=` query string of the delete endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdQuery {
    /// Document identifier.
    pub id: Option<String>,
}

/// `POST /api/models` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateModelRequest {
    /// Display name.
    #[validate(required(message = "Name is required"))]
    pub name: Option<String>,
    /// Diagram definition.
    #[validate(required(message = "XML is required"))]
    pub xml: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Rendered preview.
    pub svg: Option<String>,
    /// Tags.
    pub tags: Option<Vec<String>>,
    /// Containing folder.
    pub folder_id: Option<String>,
    /// Author name.
    pub created_by: Option<String>,
    /// Creation time to keep, e.g. when importing.
    pub created_at: Option<DateTime<Utc>>,
}

impl From<CreateModelRequest> for SvcCreateModel {
    fn from(req: CreateModelRequest) -> Self {
        Self {
            name: req.name.unwrap_or_default(),
            xml: req.xml.unwrap_or_default(),
            description: req.description,
            svg: req.svg,
            tags: req.tags.unwrap_or_default(),
            folder_id: req.folder_id,
            created_by: req.created_by,
            created_at: req.created_at,
        }
    }
}

/// Body of the model update endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateModelRequest {
    /// Target model for `POST /api/models/update`; ignored when the id is
    /// in the path.
    #[serde(rename = "_id", alias = "id")]
    pub id: Option<String>,
    /// New display name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New diagram definition.
    pub xml: Option<String>,
    /// New preview.
    pub svg: Option<String>,
    /// Replacement tags.
    pub tags: Option<Vec<String>>,
    /// New containing folder.
    pub folder_id: Option<String>,
    /// New author name.
    pub created_by: Option<String>,
}

impl UpdateModelRequest {
    /// The writable fields, without the identifier.
    pub fn into_patch(self) -> ModelPatch {
        ModelPatch {
            name: self.name,
            description: self.description,
            xml: self.xml,
            svg: self.svg,
            tags: self.tags,
            folder_id: self.folder_id,
            created_by: self.created_by,
        }
    }
}

/// `POST /api/folders` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolderRequest {
    /// Folder name.
    #[validate(required(message = "Folder name is required"))]
    pub name: Option<String>,
    /// Parent folder.
    pub parent_id: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Author name.
    pub created_by: Option<String>,
}

impl From<CreateFolderRequest> for SvcCreateFolder {
    fn from(req: CreateFolderRequest) -> Self {
        Self {
            name: req.name.unwrap_or_default(),
            parent_id: req.parent_id,
            description: req.description,
            created_by: req.created_by,
        }
    }
}

/// `PUT /api/folders` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFolderRequest {
    /// Target folder.
    #[serde(alias = "_id")]
    pub id: Option<String>,
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New parent folder.
    pub parent_id: Option<String>,
}

impl UpdateFolderRequest {
    /// The writable fields, without the identifier.
    pub fn into_patch(self) -> FolderPatch {
        FolderPatch {
            name: self.name,
            description: self.description,
            parent_id: self.parent_id,
        }
    }
}
