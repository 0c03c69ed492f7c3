//! State and district lookup lists.

use actix_web::{route, web};

use crate::domain::{District, Error, State};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// List every state ordered by identifier.
#[utoipa::path(
    get,
    path = "/states",
    responses(
        (status = 200, description = "States", body = [State]),
        (status = 503, description = "Storage unavailable", body = Error)
    ),
    tags = ["lookups"],
    operation_id = "listStates"
)]
#[route("/states", method = "GET", method = "HEAD")]
pub async fn list_states(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<State>>> {
    Ok(web::Json(state.lookups.list_states().await?))
}

/// List every district ordered by identifier.
#[utoipa::path(
    get,
    path = "/districts",
    responses(
        (status = 200, description = "Districts", body = [District]),
        (status = 503, description = "Storage unavailable", body = Error)
    ),
    tags = ["lookups"],
    operation_id = "listDistricts"
)]
#[route("/districts", method = "GET", method = "HEAD")]
pub async fn list_districts(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<District>>> {
    Ok(web::Json(state.lookups.list_districts().await?))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_states).service(list_districts);
}
