//! Bundled web client.
//!
//! The client is compiled into the binary from `backend/static`. Any request
//! no API route claims lands here: known asset paths are served with their
//! guessed content type and every other path falls back to `index.html` so
//! client-side routes survive a reload. Unmatched paths under an API prefix
//! get a JSON 404 instead. `HEAD` requests for API reads are answered by
//! the API routes themselves, so they never land here.

use actix_web::http::{Method, header};
use actix_web::{HttpRequest, HttpResponse};
use rust_embed::RustEmbed;

use crate::domain::Error;
use crate::inbound::http::ApiResult;

#[derive(RustEmbed)]
#[folder = "static/"]
struct Assets;

const INDEX: &str = "index.html";

const API_PREFIXES: [&str; 5] = ["/users", "/employees", "/states", "/districts", "/health"];

fn is_api_path(path: &str) -> bool {
    API_PREFIXES.iter().any(|prefix| {
        path.strip_prefix(prefix)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    })
}

/// Default service: serve an embedded asset or the client entry point.
pub async fn serve(req: HttpRequest) -> ApiResult<HttpResponse> {
    let path = req.path();
    let readable = req.method() == Method::GET || req.method() == Method::HEAD;
    if !readable || is_api_path(path) {
        return Err(Error::not_found(format!("no route for {} {path}", req.method())));
    }

    let requested = path.trim_start_matches('/');
    let (name, file) = Assets::get(requested)
        .map(|file| (requested, file))
        .or_else(|| Assets::get(INDEX).map(|file| (INDEX, file)))
        .ok_or_else(|| Error::not_found("web client is not bundled"))?;

    let cache = if name == INDEX { "no-cache" } else { "public, max-age=3600" };
    Ok(HttpResponse::Ok()
        .content_type(file.metadata.mimetype())
        .insert_header((header::CACHE_CONTROL, cache))
        .body(file.data.into_owned()))
}
