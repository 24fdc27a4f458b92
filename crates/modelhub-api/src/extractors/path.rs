//! Identifier parsing for path and query parameters.

use modelhub_core::error::AppError;
use modelhub_core::result::AppResult;
use modelhub_core::types::DocumentId;

/// Parse a required document identifier.
///
/// A missing or blank value fails with `missing`; a malformed one with
/// `invalid`. Both happen before the store is touched.
pub fn parse_document_id(
    value: Option<&str>,
    missing: &str,
    invalid: &str,
) -> AppResult<DocumentId> {
    let raw = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::validation(missing))?;
    raw.parse::<DocumentId>()
        .map_err(|e| AppError::invalid_identifier(invalid).with_details(e.to_string()))
}
