//! Technology read endpoints.

use actix_web::{get, web};

use crate::domain::records::Technology;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::validation::{not_found, parse_id, Resource};
use crate::inbound::http::ApiResult;
use crate::storage::MemoryStore;

/// List tracked technologies.
#[utoipa::path(
    get,
    path = "/api/technologies",
    responses((status = 200, description = "Technologies", body = [Technology])),
    tags = ["technologies"],
    operation_id = "listTechnologies"
)]
#[get("/technologies")]
pub async fn list_technologies(
    store: web::Data<MemoryStore>,
) -> ApiResult<web::Json<Vec<Technology>>> {
    Ok(web::Json(store.technologies()))
}

/// Fetch one technology by id.
#[utoipa::path(
    get,
    path = "/api/technologies/{id}",
    params(("id" = String, Path, description = "Technology identifier")),
    responses(
        (status = 200, description = "Technology", body = Technology),
        (status = 400, description = "Non-numeric identifier", body = ErrorBody),
        (status = 404, description = "No such technology", body = ErrorBody)
    ),
    tags = ["technologies"],
    operation_id = "getTechnology"
)]
#[get("/technologies/{id}")]
pub async fn get_technology(
    store: web::Data<MemoryStore>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Technology>> {
    let id = parse_id(&path.into_inner(), Resource::Technology)?;
    let technology = store
        .technology(id)
        .ok_or_else(|| not_found(Resource::Technology))?;
    Ok(web::Json(technology))
}
