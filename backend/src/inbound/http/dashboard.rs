//! Dashboard summary endpoint.

use actix_web::{get, web};

use crate::domain::summary::{summarize, DashboardSummary};
use crate::inbound::http::ApiResult;
use crate::storage::MemoryStore;

/// Compute the composite dashboard summary over the whole dataset.
///
/// Pure read: the six collection fetches have no ordering dependency and the
/// computation never writes back to the store.
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    responses((status = 200, description = "Dashboard summary", body = DashboardSummary)),
    tags = ["dashboard"],
    operation_id = "dashboardSummary"
)]
#[get("/dashboard/summary")]
pub async fn dashboard_summary(
    store: web::Data<MemoryStore>,
) -> ApiResult<web::Json<DashboardSummary>> {
    let summary = summarize(
        &store.departments(),
        &store.technologies(),
        &store.employees(),
        &store.activities(),
        &store.recommendations(),
        &store.analytics(),
    );
    Ok(web::Json(summary))
}
