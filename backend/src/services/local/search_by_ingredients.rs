use crate::store::RecipeStore;
use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct IngredientsQuery {
    /// Comma-separated ingredient lines.
    ingredients: String,
}

/// Splits the comma-separated list, trimming each item and dropping blanks.
/// Matching against stored ingredients stays exact.
fn parse_ingredients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

pub async fn process(
    query: web::Query<IngredientsQuery>,
    store: web::Data<RecipeStore>,
) -> impl Responder {
    let required = parse_ingredients(&query.ingredients);

    match store.search_by_ingredients(&required).await {
        Ok(recipes) => HttpResponse::Ok().json(recipes),
        Err(e) => HttpResponse::ServiceUnavailable().body(format!("Error searching recipes: {}", e)),
    }
}
