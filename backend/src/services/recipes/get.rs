use crate::provider::RecipeApi;
use actix_web::{web, HttpResponse, Responder};

/// Actix web handler for `GET /api/recipes/{id}`.
///
/// # Returns
/// - `200 OK` with the `Recipe` as JSON.
/// - `404 Not Found` with an empty body when the provider has no such recipe
///   or could not be reached.
pub async fn process(id: web::Path<i64>, api: web::Data<RecipeApi>) -> impl Responder {
    match api.recipe_by_id(id.into_inner()).await {
        Some(recipe) => HttpResponse::Ok().json(recipe),
        None => HttpResponse::NotFound().finish(),
    }
}
