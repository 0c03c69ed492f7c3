//! User API handlers.
//!
//! ```text
//! POST   /users {"firstname":"Asha",...}
//! GET    /users?gender=F&search=pat&limit=5&offset=0
//! GET    /users/last
//! GET    /users/{id}
//! PUT    /users/{id}
//! DELETE /users/{id}
//! ```

use actix_web::{delete, post, put, route, web};
use pagination::PageRequest;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{
    DEFAULT_USER_LIMIT, Error, Filter, User, UserDetails, UserDraft, UserFilters, UserId,
    UserListQuery,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{field_error, page_error};

/// Query parameters accepted by `GET /users`.
#[derive(Debug, Default, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserListParams {
    /// Page size, at least 1. Defaults to 5.
    pub limit: Option<i64>,
    /// Rows to skip, at least 0. Defaults to 0.
    pub offset: Option<i64>,
    /// Exact gender.
    pub gender: Option<String>,
    /// Exact district.
    pub district: Option<String>,
    /// Phone substring.
    pub phone: Option<String>,
    /// PIN substring.
    pub pin: Option<String>,
    /// Case-insensitive substring of the first or last name.
    pub search: Option<String>,
}

impl TryFrom<UserListParams> for UserListQuery {
    type Error = Error;

    fn try_from(params: UserListParams) -> Result<Self, Self::Error> {
        let page = PageRequest::from_params(params.limit, params.offset, DEFAULT_USER_LIMIT)
            .map_err(|err| page_error(&err))?;
        Ok(Self {
            filters: UserFilters {
                gender: Filter::from_param(params.gender),
                district: Filter::from_param(params.district),
                phone: Filter::from_param(params.phone),
                pin: Filter::from_param(params.pin),
                search: Filter::from_param(params.search),
            },
            page,
        })
    }
}

/// Body of `GET /users`.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserList {
    users: Vec<User>,
    /// Users matching the filters before pagination.
    total: u64,
}

/// Body returned by a successful delete.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteMessage {
    #[schema(example = "User deleted successfully")]
    pub(crate) message: String,
}

fn validate(payload: web::Json<UserDraft>) -> Result<UserDetails, Error> {
    UserDetails::try_from(payload.into_inner()).map_err(|err| field_error(&err))
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserDraft,
    responses(
        (status = 200, description = "Created user", body = User),
        (status = 400, description = "Invalid request", body = Error),
        (status = 503, description = "Storage unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserDraft>,
) -> ApiResult<web::Json<User>> {
    let details = validate(payload)?;
    let user = state.users.create(details).await?;
    Ok(web::Json(user))
}

/// List users matching the query filters.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use roster::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/users",
    params(UserListParams),
    responses(
        (status = 200, description = "Page of users", body = UserList),
        (status = 400, description = "Invalid limit or offset", body = Error),
        (status = 503, description = "Storage unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[route("/users", method = "GET", method = "HEAD")]
pub async fn list_users(
    state: web::Data<HttpState>,
    params: web::Query<UserListParams>,
) -> ApiResult<web::Json<UserList>> {
    let query = UserListQuery::try_from(params.into_inner())?;
    let (users, total) = state.users.list(query).await?.into_parts();
    Ok(web::Json(UserList { users, total }))
}

/// Fetch the user with the highest identifier.
#[utoipa::path(
    get,
    path = "/users/last",
    responses(
        (status = 200, description = "Most recently created user", body = User),
        (status = 404, description = "No users", body = Error)
    ),
    tags = ["users"],
    operation_id = "getLastUser"
)]
#[route("/users/last", method = "GET", method = "HEAD")]
pub async fn get_last_user(state: web::Data<HttpState>) -> ApiResult<web::Json<User>> {
    let user = state.users.get_last().await?;
    Ok(web::Json(user))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = User),
        (status = 400, description = "Identifier is not an integer", body = Error),
        (status = 404, description = "User not found", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[route("/users/{id}", method = "GET", method = "HEAD")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<User>> {
    let user = state.users.get(UserId::new(path.into_inner())).await?;
    Ok(web::Json(user))
}

/// Replace every field of a user.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    request_body = UserDraft,
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "User not found", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<UserDraft>,
) -> ApiResult<web::Json<User>> {
    let details = validate(payload)?;
    let user = state
        .users
        .update(UserId::new(path.into_inner()), details)
        .await?;
    Ok(web::Json(user))
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User deleted", body = DeleteMessage),
        (status = 404, description = "User not found", body = Error)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<DeleteMessage>> {
    state.users.delete(UserId::new(path.into_inner())).await?;
    Ok(web::Json(DeleteMessage {
        message: "User deleted successfully".to_owned(),
    }))
}

/// Register the user routes; `/users/last` precedes `/users/{id}`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_user)
        .service(list_users)
        .service(get_last_user)
        .service(get_user)
        .service(update_user)
        .service(delete_user);
}
