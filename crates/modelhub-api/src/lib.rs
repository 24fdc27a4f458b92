//! # modelhub-api
//!
//! HTTP API layer for ModelHub built on Axum.
//!
//! Provides the model and folder endpoints under `/api`, the health probe,
//! middleware (CORS, compression, request logging), extractors, DTOs, and
//! the mapping from [`AppError`](modelhub_core::error::AppError) to JSON
//! error responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use state::AppState;
