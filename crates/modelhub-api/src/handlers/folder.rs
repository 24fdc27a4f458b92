//! Folder hierarchy handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use modelhub_entity::folder::Folder;

use crate::dto::request::{CreateFolderRequest, IdQuery, ListFoldersQuery, UpdateFolderRequest};
use crate::dto::response::MessageResponse;
use crate::error::ApiResult;
use crate::extractors::{JsonBody, QueryParams, ValidatedJson, parse_document_id};
use crate::state::AppState;

const MISSING_ID: &str = "No folder ID provided";
const INVALID_ID: &str = "Invalid folder ID";

/// GET /api/folders?parentId=...
pub async fn list_folders(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ListFoldersQuery>,
) -> ApiResult<Json<Vec<Folder>>> {
    let folders = state
        .folder_service
        .list(params.parent_id.as_deref())
        .await?;
    Ok(Json(folders))
}

/// GET /api/folders/all
pub async fn list_all_folders(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<Folder>>> {
    Ok(Json(state.folder_service.list_all().await?))
}

/// GET /api/folders/{id}
pub async fn get_folder(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Folder>> {
    let id = parse_document_id(Some(&id), MISSING_ID, INVALID_ID)?;
    Ok(Json(state.folder_service.get(&id).await?))
}

/// POST /api/folders
pub async fn create_folder(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateFolderRequest>,
) -> ApiResult<(StatusCode, Json<Folder>)> {
    let folder = state.folder_service.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(folder)))
}

/// PUT /api/folders, with the id in the body.
pub async fn update_folder(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<UpdateFolderRequest>,
) -> ApiResult<Json<Folder>> {
    let id = parse_document_id(req.id.as_deref(), MISSING_ID, INVALID_ID)?;
    let folder = state.folder_service.update(&id, req.into_patch()).await?;
    Ok(Json(folder))
}

/// DELETE /api/folders?id=...
pub async fn delete_folder(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<IdQuery>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_document_id(params.id.as_deref(), MISSING_ID, INVALID_ID)?;
    let deleted = state.folder_service.delete(&id).await?;
    Ok(Json(MessageResponse::new("Folder deleted successfully", deleted)))
}
