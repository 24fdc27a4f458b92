//! Model CRUD and search handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use modelhub_entity::model::Model;

use crate::dto::request::{CreateModelRequest, IdQuery, ListModelsQuery, UpdateModelRequest};
use crate::dto::response::MessageResponse;
use crate::error::ApiResult;
use crate::extractors::{JsonBody, QueryParams, ValidatedJson, parse_document_id};
use crate::state::AppState;

const MISSING_ID: &str = "No model ID provided";
const INVALID_ID: &str = "Invalid model ID";

/// GET /api/models?folderId=...&query=...
pub async fn list_models(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ListModelsQuery>,
) -> ApiResult<Json<Vec<Model>>> {
    let models = state
        .model_service
        .list(params.folder_id.as_deref(), params.query.as_deref())
        .await?;
    Ok(Json(models))
}

/// POST /api/models
pub async fn create_model(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateModelRequest>,
) -> ApiResult<(StatusCode, Json<Model>)> {
    let model = state.model_service.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(model)))
}

/// GET /api/models/{id}
pub async fn get_model(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Model>> {
    let id = parse_document_id(Some(&id), MISSING_ID, INVALID_ID)?;
    let model = state.model_service.get(&id).await?;
    Ok(Json(model))
}

/// PUT /api/models/{id}
pub async fn update_model(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateModelRequest>,
) -> ApiResult<Json<Model>> {
    let id = parse_document_id(Some(&id), MISSING_ID, INVALID_ID)?;
    let model = state.model_service.update(&id, req.into_patch()).await?;
    Ok(Json(model))
}

/// POST /api/models/update, with the id in the body.
pub async fn update_model_by_body(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<UpdateModelRequest>,
) -> ApiResult<Json<Model>> {
    let id = parse_document_id(req.id.as_deref(), MISSING_ID, INVALID_ID)?;
    let model = state.model_service.update(&id, req.into_patch()).await?;
    Ok(Json(model))
}

/// DELETE /api/models/{id}
pub async fn delete_model(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    remove(&state, Some(&id)).await
}

/// DELETE /api/models?id=...
pub async fn delete_model_by_query(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<IdQuery>,
) -> ApiResult<Json<MessageResponse>> {
    remove(&state, params.id.as_deref()).await
}

async fn remove(state: &AppState, id: Option<&str>) -> ApiResult<Json<MessageResponse>> {
    let id = parse_document_id(id, MISSING_ID, INVALID_ID)?;
    let deleted = state.model_service.delete(&id).await?;
    Ok(Json(MessageResponse::new("Model deleted successfully", deleted)))
}
