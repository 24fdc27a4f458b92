//! Normalization of caller-supplied fields.

use modelhub_core::error::AppError;
use modelhub_core::result::AppResult;
use modelhub_core::types::{DocumentId, ROOT_FOLDER};

/// Trim a required text field, failing if nothing is left.
pub fn required(field: &str, value: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional text field.
pub fn trimmed(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string())
}

/// Resolve a folder reference, falling back to the root sentinel when it is
/// absent or blank.
///
/// A reference that parses as a [`DocumentId`] is stored in its canonical
/// lowercase form, the same form the child counts of a folder delete match
/// against.
pub fn folder_ref(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => match v.parse::<DocumentId>() {
            Ok(id) => id.to_string(),
            Err(_) => v.to_string(),
        },
        _ => ROOT_FOLDER.to_string(),
    }
}

/// Trim each tag and drop the ones left empty.
pub fn tags(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}
