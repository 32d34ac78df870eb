//! # Provider Recipe Routes
//!
//! Read-only endpoints under `/api/recipes` that each make exactly one call to
//! the [`RecipeApi`](crate::provider::RecipeApi) and return its result as JSON.
//!
//! ## Sub-modules:
//! - `search_by_ingredients`: recipes matching a list of ingredients.
//! - `get`: full details of one provider recipe.
//! - `random`: a random sample of detailed recipes.
//! - `search`: free-text search by recipe name.

mod get;
mod random;
mod search;
mod search_by_ingredients;

use actix_web::web::{get, scope};
use actix_web::Scope;

/// The base path for all provider-backed recipe endpoints.
pub const API_PATH: &str = "/api/recipes";

/// Configures and returns the Actix `Scope` for the provider recipe routes.
///
/// # Registered Routes:
///
/// *   **`GET /searchByIngredients?ingredients=...`**:
///     - **Handler**: `search_by_ingredients::process`
///     - **Description**: Recipes that use the given ingredients. Each recipe lists
///       the ingredients it uses followed by the ones it is missing. Upstream
///       failures yield an empty list.
///
/// *   **`GET /random?number=N`**:
///     - **Handler**: `random::process`
///     - **Description**: `N` random recipes (10 when omitted) with ingredients and steps.
///
/// *   **`GET /search?query=...`**:
///     - **Handler**: `search::process`
///     - **Description**: Recipes whose name matches the query. Only id, name and image
///       are filled in.
///
/// *   **`GET /{id}`**:
///     - **Handler**: `get::process`
///     - **Description**: Full details of one recipe, or `404 Not Found` with an empty
///       body when the provider has no data for it.
///
/// The fixed paths are registered before `/{id}` so they are never captured by it.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/searchByIngredients", get().to(search_by_ingredients::process))
        .route("/random", get().to(random::process))
        .route("/search", get().to(search::process))
        .route("/{id}", get().to(get::process))
}
