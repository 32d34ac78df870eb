use crate::store::RecipeStore;
use actix_web::{web, HttpResponse, Responder};

/// Actix web handler for `DELETE /api/recipes/local/{id}`.
///
/// # Returns
/// - `204 No Content`, whether or not a recipe was stored under `id`.
/// - `503 Service Unavailable` if the store could not be written.
pub async fn process(id: web::Path<i64>, store: web::Data<RecipeStore>) -> impl Responder {
    match store.delete_by_id(id.into_inner()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => HttpResponse::ServiceUnavailable().body(format!("Error deleting recipe: {}", e)),
    }
}
