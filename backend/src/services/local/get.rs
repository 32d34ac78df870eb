use crate::store::RecipeStore;
use actix_web::{web, HttpResponse, Responder};

/// Actix web handler for `GET /api/recipes/local/{id}`.
///
/// # Returns
/// - `200 OK` with the stored `Recipe` as JSON.
/// - `404 Not Found` if no recipe is stored under `id`.
/// - `503 Service Unavailable` if the store could not be read.
pub async fn process(id: web::Path<i64>, store: web::Data<RecipeStore>) -> impl Responder {
    match store.find_by_id(id.into_inner()).await {
        Ok(Some(recipe)) => HttpResponse::Ok().json(recipe),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(e) => HttpResponse::ServiceUnavailable().body(format!("Error retrieving recipe: {}", e)),
    }
}
