//! User activity read endpoints.

use actix_web::{get, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::records::UserActivity;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::validation::{parse_id, Resource};
use crate::inbound::http::ApiResult;
use crate::storage::MemoryStore;

/// Mutually exclusive activity filters. When several are supplied, employee
/// wins over technology, which wins over department.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ActivityFilter {
    pub employee_id: Option<String>,
    pub technology_id: Option<String>,
    pub department_id: Option<String>,
}

/// List activities, optionally filtered.
#[utoipa::path(
    get,
    path = "/api/activities",
    params(ActivityFilter),
    responses(
        (status = 200, description = "Activities", body = [UserActivity]),
        (status = 400, description = "Non-numeric filter", body = ErrorBody)
    ),
    tags = ["activities"],
    operation_id = "listActivities"
)]
#[get("/activities")]
pub async fn list_activities(
    store: web::Data<MemoryStore>,
    query: web::Query<ActivityFilter>,
) -> ApiResult<web::Json<Vec<UserActivity>>> {
    if let Some(raw) = &query.employee_id {
        let employee_id = parse_id(raw, Resource::Employee)?;
        return Ok(web::Json(store.activities_by_employee(employee_id)));
    }
    if let Some(raw) = &query.technology_id {
        let technology_id = parse_id(raw, Resource::Technology)?;
        return Ok(web::Json(store.activities_by_technology(technology_id)));
    }
    if let Some(raw) = &query.department_id {
        let department_id = parse_id(raw, Resource::Department)?;
        return Ok(web::Json(store.activities_by_department(department_id)));
    }
    Ok(web::Json(store.activities()))
}
