use crate::provider::RecipeApi;
use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct SearchQuery {
    query: String,
}

pub async fn process(query: web::Query<SearchQuery>, api: web::Data<RecipeApi>) -> impl Responder {
    HttpResponse::Ok().json(api.search_recipes_by_name(&query.query).await)
}
