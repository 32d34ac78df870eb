//! # Local Recipe Routes
//!
//! Endpoints under `/api/recipes/local` backed by the [`RecipeStore`](crate::store::RecipeStore).
//! These are the only routes that write; provider recipes are never persisted
//! unless a client posts them here.
//!
//! Store failures are answered with `503 Service Unavailable` and a short
//! message.

mod create;
mod delete;
mod get;
mod list;
mod search_by_ingredients;
mod update;

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

/// Must be registered before [`super::recipes::configure_routes`], whose scope
/// would otherwise claim this prefix.
pub const API_PATH: &str = "/api/recipes/local";

/// Configures and returns the Actix `Scope` for the local store routes.
///
/// # Registered Routes:
///
/// *   **`GET /`**: every stored recipe.
/// *   **`POST /`**: stores a new recipe (any `id` in the payload is ignored), `201 Created`.
/// *   **`GET /searchByIngredients?ingredients=a,b`**: stored recipes containing every
///     listed ingredient, compared exactly.
/// *   **`GET /{id}`**: one stored recipe or `404 Not Found`.
/// *   **`PUT /{id}`**: creates or replaces the recipe stored under `id`.
/// *   **`DELETE /{id}`**: removes the recipe, `204 No Content` even if it did not exist.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/searchByIngredients", get().to(search_by_ingredients::process))
        .route("/{id}", get().to(get::process))
        .route("/{id}", put().to(update::process))
        .route("/{id}", delete().to(delete::process))
}
