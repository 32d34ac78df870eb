use crate::store::RecipeStore;
use actix_web::{web, HttpResponse, Responder};
use recipe_common::model::recipe::Recipe;

/// Actix web handler for `POST /api/recipes/local`.
///
/// Any `id` in the payload is dropped so the store assigns a fresh one.
///
/// # Returns
/// - `201 Created` with the stored `Recipe`, id populated, as JSON.
/// - `503 Service Unavailable` if the recipe could not be saved.
pub async fn process(payload: web::Json<Recipe>, store: web::Data<RecipeStore>) -> impl Responder {
    let recipe = Recipe {
        id: None,
        ..payload.into_inner()
    };

    match store.save(&recipe).await {
        Ok(saved) => {
            log::info!("Stored recipe {:?} '{}'", saved.id, saved.name);
            HttpResponse::Created().json(saved)
        }
        Err(e) => HttpResponse::ServiceUnavailable().body(format!("Error saving recipe: {}", e)),
    }
}
