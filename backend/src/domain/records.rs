//! Entity records stored by the backend.
//!
//! Each entity is keyed by a sequential `i32` identifier assigned by the
//! store. `New*` types carry caller-supplied fields only; server-generated
//! fields (identifiers, timestamps, completion flags) are attached at
//! insertion time and the stored record is immutable afterwards.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::metrics::Metric;

/// Validation errors raised when constructing an [`EmailAddress`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailValidationError {
    Empty,
    InvalidShape,
}

impl fmt::Display for EmailValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "email must not be empty"),
            Self::InvalidShape => write!(f, "email must be a valid email address"),
        }
    }
}

impl std::error::Error for EmailValidationError {}

/// A validated email address.
///
/// The check is shape-only: one `@`, a non-empty local part, and a domain
/// containing a dot. Deliverability is not verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String, example = "ada@example.com")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`] from borrowed input.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, EmailValidationError> {
        Self::from_owned(raw.as_ref().to_owned())
    }

    fn from_owned(raw: String) -> Result<Self, EmailValidationError> {
        if raw.is_empty() {
            return Err(EmailValidationError::Empty);
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(EmailValidationError::InvalidShape);
        }
        let Some((local, domain)) = raw.split_once('@') else {
            return Err(EmailValidationError::InvalidShape);
        };
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return Err(EmailValidationError::InvalidShape);
        }
        let valid_domain = domain.split('.').count() > 1 && domain.split('.').all(|s| !s.is_empty());
        if !valid_domain {
            return Err(EmailValidationError::InvalidShape);
        }
        Ok(Self(raw))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = EmailValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Waitlist signup captured from the marketing site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistSubscriber {
    pub id: i32,
    pub email: EmailAddress,
    pub created_at: DateTime<Utc>,
}

/// Organisational unit. Names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: i32,
    pub name: String,
}

/// Fields for creating a [`Department`].
#[derive(Debug, Clone)]
pub struct NewDepartment {
    pub name: String,
}

/// A tracked technology rollout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Technology {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

/// Fields for creating a [`Technology`].
#[derive(Debug, Clone)]
pub struct NewTechnology {
    pub name: String,
    pub description: Option<String>,
}

/// An employee belonging to exactly one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub department_id: i32,
}

/// Fields for creating an [`Employee`]. The referenced department must exist.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub department_id: i32,
}

/// One recorded interaction with a technology feature.
///
/// The timestamp is server-assigned at creation and the record never changes
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserActivity {
    pub id: i32,
    pub employee_id: i32,
    pub technology_id: i32,
    pub feature_used: String,
    pub usage_count: u32,
    pub timestamp: DateTime<Utc>,
    pub successful: bool,
}

/// Fields for recording a [`UserActivity`].
#[derive(Debug, Clone)]
pub struct NewActivity {
    pub employee_id: i32,
    pub technology_id: i32,
    pub feature_used: String,
    pub usage_count: u32,
    pub successful: bool,
}

/// A suggested training action for an employee.
///
/// `is_completed` starts false and transitions to true exactly once via the
/// completion operation; it never reverts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrainingRecommendation {
    pub id: i32,
    pub employee_id: i32,
    pub technology_id: i32,
    pub recommendation_type: String,
    pub description: String,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Fields for creating a [`TrainingRecommendation`].
#[derive(Debug, Clone)]
pub struct NewRecommendation {
    pub employee_id: i32,
    pub technology_id: i32,
    pub recommendation_type: String,
    pub description: String,
}

/// One metric observation, always scoped to a technology and optionally to a
/// department. Technology-level observations leave `department_id` unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsPoint {
    pub id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<i32>,
    pub technology_id: i32,
    #[serde(flatten)]
    pub metric: Metric,
    pub timestamp: DateTime<Utc>,
}

/// Fields for recording an [`AnalyticsPoint`].
#[derive(Debug, Clone)]
pub struct NewAnalyticsPoint {
    pub department_id: Option<i32>,
    pub technology_id: i32,
    pub metric: Metric,
}
