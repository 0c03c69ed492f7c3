//! Employee API handlers.
//!
//! Mirrors the user endpoints without `/last`. `employee_id` is unique; a
//! create or update that collides with it fails with `500 internal_error`.

use actix_web::{delete, post, put, route, web};
use pagination::PageRequest;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{
    DEFAULT_EMPLOYEE_LIMIT, Employee, EmployeeDetails, EmployeeDraft, EmployeeFilters, EmployeeId,
    EmployeeListQuery, Error, Filter,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::DeleteMessage;
use crate::inbound::http::validation::{field_error, page_error};

/// Query parameters accepted by `GET /employees`.
#[derive(Debug, Default, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmployeeListParams {
    /// Page size, at least 1. Defaults to 10.
    pub limit: Option<i64>,
    /// Rows to skip, at least 0. Defaults to 0.
    pub offset: Option<i64>,
    /// Exact department.
    pub department: Option<String>,
    /// Exact profile.
    pub profile: Option<String>,
    /// Employee id substring.
    pub employee_id: Option<String>,
    /// Case-insensitive substring of the employee name.
    pub search: Option<String>,
}

impl TryFrom<EmployeeListParams> for EmployeeListQuery {
    type Error = Error;

    fn try_from(params: EmployeeListParams) -> Result<Self, Self::Error> {
        let page = PageRequest::from_params(params.limit, params.offset, DEFAULT_EMPLOYEE_LIMIT)
            .map_err(|err| page_error(&err))?;
        Ok(Self {
            filters: EmployeeFilters {
                department: Filter::from_param(params.department),
                profile: Filter::from_param(params.profile),
                employee_id: Filter::from_param(params.employee_id),
                search: Filter::from_param(params.search),
            },
            page,
        })
    }
}

/// Body of `GET /employees`.
#[derive(Debug, Serialize, ToSchema)]
pub struct EmployeeList {
    employees: Vec<Employee>,
    /// Employees matching the filters before pagination.
    total: u64,
}

fn validate(payload: web::Json<EmployeeDraft>) -> Result<EmployeeDetails, Error> {
    EmployeeDetails::try_from(payload.into_inner()).map_err(|err| field_error(&err))
}

/// Create an employee.
#[utoipa::path(
    post,
    path = "/employees",
    request_body = EmployeeDraft,
    responses(
        (status = 200, description = "Created employee", body = Employee),
        (status = 400, description = "Invalid request", body = Error),
        (status = 500, description = "employee_id already exists", body = Error)
    ),
    tags = ["employees"],
    operation_id = "createEmployee"
)]
#[post("/employees")]
pub async fn create_employee(
    state: web::Data<HttpState>,
    payload: web::Json<EmployeeDraft>,
) -> ApiResult<web::Json<Employee>> {
    let details = validate(payload)?;
    let employee = state.employees.create(details).await?;
    Ok(web::Json(employee))
}

/// List employees matching the query filters.
#[utoipa::path(
    get,
    path = "/employees",
    params(EmployeeListParams),
    responses(
        (status = 200, description = "Page of employees", body = EmployeeList),
        (status = 400, description = "Invalid limit or offset", body = Error)
    ),
    tags = ["employees"],
    operation_id = "listEmployees"
)]
#[route("/employees", method = "GET", method = "HEAD")]
pub async fn list_employees(
    state: web::Data<HttpState>,
    params: web::Query<EmployeeListParams>,
) -> ApiResult<web::Json<EmployeeList>> {
    let query = EmployeeListQuery::try_from(params.into_inner())?;
    let (employees, total) = state.employees.list(query).await?.into_parts();
    Ok(web::Json(EmployeeList { employees, total }))
}

/// Fetch one employee.
#[utoipa::path(
    get,
    path = "/employees/{id}",
    params(("id" = i32, Path, description = "Employee record identifier")),
    responses(
        (status = 200, description = "Employee", body = Employee),
        (status = 404, description = "Employee not found", body = Error)
    ),
    tags = ["employees"],
    operation_id = "getEmployee"
)]
#[route("/employees/{id}", method = "GET", method = "HEAD")]
pub async fn get_employee(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Employee>> {
    let employee = state
        .employees
        .get(EmployeeId::new(path.into_inner()))
        .await?;
    Ok(web::Json(employee))
}

/// Replace every field of an employee.
#[utoipa::path(
    put,
    path = "/employees/{id}",
    params(("id" = i32, Path, description = "Employee record identifier")),
    request_body = EmployeeDraft,
    responses(
        (status = 200, description = "Updated employee", body = Employee),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Employee not found", body = Error),
        (status = 500, description = "employee_id already exists", body = Error)
    ),
    tags = ["employees"],
    operation_id = "updateEmployee"
)]
#[put("/employees/{id}")]
pub async fn update_employee(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<EmployeeDraft>,
) -> ApiResult<web::Json<Employee>> {
    let details = validate(payload)?;
    let employee = state
        .employees
        .update(EmployeeId::new(path.into_inner()), details)
        .await?;
    Ok(web::Json(employee))
}

/// Delete an employee.
#[utoipa::path(
    delete,
    path = "/employees/{id}",
    params(("id" = i32, Path, description = "Employee record identifier")),
    responses(
        (status = 200, description = "Employee deleted", body = DeleteMessage),
        (status = 404, description = "Employee not found", body = Error)
    ),
    tags = ["employees"],
    operation_id = "deleteEmployee"
)]
#[delete("/employees/{id}")]
pub async fn delete_employee(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<DeleteMessage>> {
    state
        .employees
        .delete(EmployeeId::new(path.into_inner()))
        .await?;
    Ok(web::Json(DeleteMessage {
        message: "Employee deleted successfully".to_owned(),
    }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_employee)
        .service(list_employees)
        .service(get_employee)
        .service(update_employee)
        .service(delete_employee);
}

#[cfg(test)]
mod tests;
