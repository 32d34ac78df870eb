use crate::provider::RecipeApi;
use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

const DEFAULT_NUMBER: u32 = 10;

#[derive(Deserialize)]
pub struct RandomQuery {
    #[serde(default = "default_number")]
    number: u32,
}

fn default_number() -> u32 {
    DEFAULT_NUMBER
}

pub async fn process(query: web::Query<RandomQuery>, api: web::Data<RecipeApi>) -> impl Responder {
    HttpResponse::Ok().json(api.random_recipes(query.number).await)
}
