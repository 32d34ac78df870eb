use crate::store::RecipeStore;
use actix_web::{web, HttpResponse, Responder};

/// Actix web handler for `GET /api/recipes/local`.
///
/// # Returns
/// - `200 OK` with every stored `Recipe` as a JSON array, ordered by id.
/// - `503 Service Unavailable` if the store could not be read.
pub async fn process(store: web::Data<RecipeStore>) -> impl Responder {
    match store.find_all().await {
        Ok(recipes) => HttpResponse::Ok().json(recipes),
        Err(e) => HttpResponse::ServiceUnavailable().body(format!("Error listing recipes: {}", e)),
    }
}
