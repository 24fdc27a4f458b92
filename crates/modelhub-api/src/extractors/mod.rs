//! Custom Axum extractors.

pub mod json;
pub mod path;
pub mod query;

pub use json::{JsonBody, ValidatedJson};
pub use path::parse_document_id;
pub use query::QueryParams;
