//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every REST path and the domain schemas. The document
//! backs Swagger UI in debug builds and is printed by
//! `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::domain::{
    District, Employee, EmployeeDetails, EmployeeDraft, Error, ErrorCode, State, User,
    UserDetails, UserDraft,
};
use crate::inbound::http::employees::EmployeeList;
use crate::inbound::http::health::HealthStatus;
use crate::inbound::http::users::{DeleteMessage, UserList};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster backend API",
        description = "Create, list, update and delete users and employees; list states and districts."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_last_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::employees::create_employee,
        crate::inbound::http::employees::list_employees,
        crate::inbound::http::employees::get_employee,
        crate::inbound::http::employees::update_employee,
        crate::inbound::http::employees::delete_employee,
        crate::inbound::http::lookups::list_states,
        crate::inbound::http::lookups::list_districts,
        crate::inbound::http::health::health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        User,
        UserDetails,
        UserDraft,
        UserList,
        Employee,
        EmployeeDetails,
        EmployeeDraft,
        EmployeeList,
        State,
        District,
        DeleteMessage,
        HealthStatus,
        Error,
        ErrorCode
    )),
    tags(
        (name = "users", description = "User records"),
        (name = "employees", description = "Employee records"),
        (name = "lookups", description = "State and district lists"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
