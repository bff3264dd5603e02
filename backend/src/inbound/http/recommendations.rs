//! Training recommendation endpoints.

use actix_web::{get, patch, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::records::TrainingRecommendation;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::validation::{not_found, parse_id, Resource};
use crate::inbound::http::ApiResult;
use crate::storage::MemoryStore;

/// Optional employee filter for the recommendation list.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationFilter {
    pub employee_id: Option<String>,
}

/// List training recommendations, optionally for one employee.
#[utoipa::path(
    get,
    path = "/api/recommendations",
    params(RecommendationFilter),
    responses(
        (status = 200, description = "Recommendations", body = [TrainingRecommendation]),
        (status = 400, description = "Non-numeric filter", body = ErrorBody)
    ),
    tags = ["recommendations"],
    operation_id = "listRecommendations"
)]
#[get("/recommendations")]
pub async fn list_recommendations(
    store: web::Data<MemoryStore>,
    query: web::Query<RecommendationFilter>,
) -> ApiResult<web::Json<Vec<TrainingRecommendation>>> {
    if let Some(raw) = &query.employee_id {
        let employee_id = parse_id(raw, Resource::Employee)?;
        return Ok(web::Json(store.recommendations_by_employee(employee_id)));
    }
    Ok(web::Json(store.recommendations()))
}

/// Mark a recommendation completed. Idempotent for already-completed ids.
#[utoipa::path(
    patch,
    path = "/api/recommendations/{id}/complete",
    params(("id" = String, Path, description = "Recommendation identifier")),
    responses(
        (status = 200, description = "Completed recommendation", body = TrainingRecommendation),
        (status = 400, description = "Non-numeric identifier", body = ErrorBody),
        (status = 404, description = "No such recommendation", body = ErrorBody)
    ),
    tags = ["recommendations"],
    operation_id = "completeRecommendation"
)]
#[patch("/recommendations/{id}/complete")]
pub async fn complete_recommendation(
    store: web::Data<MemoryStore>,
    path: web::Path<String>,
) -> ApiResult<web::Json<TrainingRecommendation>> {
    let id = parse_id(&path.into_inner(), Resource::Recommendation)?;
    let recommendation = store
        .complete_recommendation(id)
        .map_err(|_| not_found(Resource::Recommendation))?;
    Ok(web::Json(recommendation))
}
