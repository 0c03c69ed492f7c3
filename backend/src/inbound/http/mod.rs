//! HTTP inbound adapter exposing the REST endpoints and the web client.

pub mod employees;
pub mod error;
pub mod health;
pub mod lookups;
pub mod spa;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;

use actix_web::web;

/// Register the extractor error handlers and every API route.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use roster::inbound::http::{configure_api, state::HttpState};
///
/// let app = App::new()
///     .app_data(web::Data::new(HttpState::in_memory()))
///     .configure(configure_api);
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
        .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
        .service(health::health)
        .service(health::ready)
        .service(health::live)
        .configure(users::configure)
        .configure(employees::configure)
        .configure(lookups::configure);
}
