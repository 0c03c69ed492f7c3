//! Test helpers for inbound HTTP components.

use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::NormalizePath;
use actix_web::test as actix_test;
use actix_web::{App, web};
use serde_json::Value;

use super::configure_api;
use super::state::HttpState;
use crate::Trace;

/// Build an app serving the API over `state` with the production middleware.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .wrap(NormalizePath::trim())
        .configure(configure_api)
}

/// Send a request and return the status with the parsed JSON body.
pub async fn call_json<S>(app: &S, req: actix_http::Request) -> (actix_web::http::StatusCode, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let res = actix_test::call_service(app, req).await;
    let status = res.status();
    let body = actix_test::read_body(res).await;
    let value = serde_json::from_slice(&body).expect("JSON body");
    (status, value)
}
