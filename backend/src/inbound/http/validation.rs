//! Shared validation helpers for inbound HTTP adapters.
//!
//! Path and query identifiers arrive as raw strings so the adapter controls
//! the 400 message instead of falling back to Actix's extractor defaults.

use super::error::ApiError;

/// Resource names used in validation and not-found messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Resource {
    Department,
    Technology,
    Employee,
    Recommendation,
}

impl Resource {
    fn lower(self) -> &'static str {
        match self {
            Resource::Department => "department",
            Resource::Technology => "technology",
            Resource::Employee => "employee",
            Resource::Recommendation => "recommendation",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Resource::Department => "Department",
            Resource::Technology => "Technology",
            Resource::Employee => "Employee",
            Resource::Recommendation => "Recommendation",
        }
    }
}

/// Parse a decimal identifier, answering `Invalid <resource> ID` otherwise.
pub(crate) fn parse_id(raw: &str, resource: Resource) -> Result<i32, ApiError> {
    raw.parse::<i32>()
        .map_err(|_| ApiError::bad_request(format!("Invalid {} ID", resource.lower())))
}

/// The 404 returned when a valid identifier matches no record.
pub(crate) fn not_found(resource: Resource) -> ApiError {
    ApiError::not_found(format!("{} not found", resource.title()))
}
