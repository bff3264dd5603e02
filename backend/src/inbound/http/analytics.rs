//! Analytics read endpoints.

use actix_web::{get, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::records::AnalyticsPoint;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::validation::{parse_id, Resource};
use crate::inbound::http::ApiResult;
use crate::storage::MemoryStore;

/// Analytics filters; department takes precedence over technology.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsFilter {
    pub department_id: Option<String>,
    pub technology_id: Option<String>,
}

/// List analytics observations, optionally filtered.
#[utoipa::path(
    get,
    path = "/api/analytics",
    params(AnalyticsFilter),
    responses(
        (status = 200, description = "Analytics observations", body = [AnalyticsPoint]),
        (status = 400, description = "Non-numeric filter", body = ErrorBody)
    ),
    tags = ["analytics"],
    operation_id = "listAnalytics"
)]
#[get("/analytics")]
pub async fn list_analytics(
    store: web::Data<MemoryStore>,
    query: web::Query<AnalyticsFilter>,
) -> ApiResult<web::Json<Vec<AnalyticsPoint>>> {
    if let Some(raw) = &query.department_id {
        let department_id = parse_id(raw, Resource::Department)?;
        return Ok(web::Json(store.analytics_by_department(department_id)));
    }
    if let Some(raw) = &query.technology_id {
        let technology_id = parse_id(raw, Resource::Technology)?;
        return Ok(web::Json(store.analytics_by_technology(technology_id)));
    }
    Ok(web::Json(store.analytics()))
}
