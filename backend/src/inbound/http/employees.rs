//! Employee read endpoints.

use actix_web::{get, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::records::Employee;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::validation::{not_found, parse_id, Resource};
use crate::inbound::http::ApiResult;
use crate::storage::MemoryStore;

/// Optional department filter for the employee list.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeFilter {
    /// Restrict to one department; must be numeric.
    pub department_id: Option<String>,
}

/// List employees, optionally filtered by department.
#[utoipa::path(
    get,
    path = "/api/employees",
    params(EmployeeFilter),
    responses(
        (status = 200, description = "Employees", body = [Employee]),
        (status = 400, description = "Non-numeric filter", body = ErrorBody)
    ),
    tags = ["employees"],
    operation_id = "listEmployees"
)]
#[get("/employees")]
pub async fn list_employees(
    store: web::Data<MemoryStore>,
    query: web::Query<EmployeeFilter>,
) -> ApiResult<web::Json<Vec<Employee>>> {
    if let Some(raw) = &query.department_id {
        let department_id = parse_id(raw, Resource::Department)?;
        return Ok(web::Json(store.employees_by_department(department_id)));
    }
    Ok(web::Json(store.employees()))
}

/// Fetch one employee by id.
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    params(("id" = String, Path, description = "Employee identifier")),
    responses(
        (status = 200, description = "Employee", body = Employee),
        (status = 400, description = "Non-numeric identifier", body = ErrorBody),
        (status = 404, description = "No such employee", body = ErrorBody)
    ),
    tags = ["employees"],
    operation_id = "getEmployee"
)]
#[get("/employees/{id}")]
pub async fn get_employee(
    store: web::Data<MemoryStore>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Employee>> {
    let id = parse_id(&path.into_inner(), Resource::Employee)?;
    let employee = store.employee(id).ok_or_else(|| not_found(Resource::Employee))?;
    Ok(web::Json(employee))
}
