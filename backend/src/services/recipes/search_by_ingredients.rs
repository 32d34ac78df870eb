use crate::provider::RecipeApi;
use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct IngredientsQuery {
    /// Provider ingredient list, e.g. `apples,flour,sugar`.
    ingredients: String,
}

pub async fn process(
    query: web::Query<IngredientsQuery>,
    api: web::Data<RecipeApi>,
) -> impl Responder {
    HttpResponse::Ok().json(api.recipes_by_ingredients(&query.ingredients).await)
}
