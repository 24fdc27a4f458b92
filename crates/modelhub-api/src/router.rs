//! Route definitions for the ModelHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. Static
//! segments such as `/models/update` and `/folders/all` take precedence over
//! the `{id}` captures next to them.

use axum::Router;
use axum::routing::{get, post};

use crate::handlers;
use crate::state::AppState;

/// Build the API router and thread `state` through every route.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(model_routes())
        .merge(folder_routes())
        .merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Model CRUD and search
fn model_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/models",
            get(handlers::model::list_models)
                .post(handlers::model::create_model)
                .delete(handlers::model::delete_model_by_query),
        )
        .route(
            "/models/update",
            post(handlers::model::update_model_by_body),
        )
        .route(
            "/models/{id}",
            get(handlers::model::get_model)
                .put(handlers::model::update_model)
                .delete(handlers::model::delete_model),
        )
}

/// Folder hierarchy
fn folder_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/folders",
            get(handlers::folder::list_folders)
                .post(handlers::folder::create_folder)
                .put(handlers::folder::update_folder)
                .delete(handlers::folder::delete_folder),
        )
        .route("/folders/all", get(handlers::folder::list_all_folders))
        .route("/folders/{id}", get(handlers::folder::get_folder))
}

/// Health probe
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
