use crate::store::RecipeStore;
use actix_web::{web, HttpResponse, Responder};
use recipe_common::model::recipe::Recipe;

/// Actix web handler for `PUT /api/recipes/local/{id}`.
///
/// The id in the path wins over any id in the payload. An id that is not
/// stored yet is created.
///
/// # Returns
/// - `200 OK` with the stored `Recipe` as JSON.
/// - `503 Service Unavailable` if the recipe could not be saved.
pub async fn process(
    id: web::Path<i64>,
    payload: web::Json<Recipe>,
    store: web::Data<RecipeStore>,
) -> impl Responder {
    let recipe = Recipe {
        id: Some(id.into_inner()),
        ..payload.into_inner()
    };

    match store.save(&recipe).await {
        Ok(saved) => HttpResponse::Ok().json(saved),
        Err(e) => HttpResponse::ServiceUnavailable().body(format!("Error saving recipe: {}", e)),
    }
}
