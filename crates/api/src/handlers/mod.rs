//! Request handlers, one module per resource.

pub mod asset;
pub mod category;
pub mod client;
pub mod dashboard;
pub mod maintenance;
pub mod product;
pub mod rental;

use rentline_core::error::CoreError;

/// Reject an empty or whitespace-only required string field.
pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}
