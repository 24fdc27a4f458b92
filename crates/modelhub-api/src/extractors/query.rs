//! Query string extractor that rejects with the API's error body.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use modelhub_core::error::AppError;

use crate::error::ApiError;

/// Like [`Query`], but a query string that does not deserialize becomes a
/// validation error instead of axum's plain-text rejection.
#[derive(Debug, Clone)]
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                AppError::validation("Invalid query string").with_details(rejection.body_text())
            })?;
        Ok(Self(value))
    }
}
