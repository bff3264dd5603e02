//! HTTP inbound adapter exposing the REST endpoints.

pub mod activities;
pub mod analytics;
pub mod dashboard;
pub mod departments;
pub mod employees;
pub mod error;
pub mod health;
pub mod recommendations;
pub mod technologies;
pub mod validation;
pub mod waitlist;

pub use error::{ApiError, ApiResult};
