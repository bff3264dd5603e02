//! Department read endpoints.

use actix_web::{get, web};

use crate::domain::records::Department;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::validation::{not_found, parse_id, Resource};
use crate::inbound::http::ApiResult;
use crate::storage::MemoryStore;

/// List departments in insertion order.
#[utoipa::path(
    get,
    path = "/api/departments",
    responses((status = 200, description = "Departments", body = [Department])),
    tags = ["departments"],
    operation_id = "listDepartments"
)]
#[get("/departments")]
pub async fn list_departments(
    store: web::Data<MemoryStore>,
) -> ApiResult<web::Json<Vec<Department>>> {
    Ok(web::Json(store.departments()))
}

/// Fetch one department by id.
#[utoipa::path(
    get,
    path = "/api/departments/{id}",
    params(("id" = String, Path, description = "Department identifier")),
    responses(
        (status = 200, description = "Department", body = Department),
        (status = 400, description = "Non-numeric identifier", body = ErrorBody),
        (status = 404, description = "No such department", body = ErrorBody)
    ),
    tags = ["departments"],
    operation_id = "getDepartment"
)]
#[get("/departments/{id}")]
pub async fn get_department(
    store: web::Data<MemoryStore>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Department>> {
    let id = parse_id(&path.into_inner(), Resource::Department)?;
    let department = store
        .department(id)
        .ok_or_else(|| not_found(Resource::Department))?;
    Ok(web::Json(department))
}
