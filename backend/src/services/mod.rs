//! HTTP surface of the backend: the provider-backed `/api/recipes` routes and
//! the store-backed `/api/recipes/local` routes, plus the CORS policy that
//! wraps them.

pub mod local;
pub mod recipes;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::web::ServiceConfig;

/// Registers every route scope on the application.
///
/// `/api/recipes/local` shares its prefix with `/api/recipes`, whose `/{id}`
/// route would otherwise claim it, so the local scope is mounted first.
pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(local::configure_routes())
        .service(recipes::configure_routes());
}

/// Cross-origin policy allowing the single configured client origin.
pub fn cors(allowed_origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(allowed_origin)
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600)
}
