//! # Recipe Provider Adapter
//!
//! Talks to the third-party recipe API and normalizes its four response
//! shapes into [`Recipe`] values.
//!
//! Every query comes in two flavours:
//! - `fetch_*` returns a `Result`, so callers can tell an upstream failure
//!   apart from a query that simply matched nothing;
//! - the plain method logs any failure and degrades to an empty list (or
//!   `None` for the single-recipe lookup). This is what the HTTP layer uses.
//!
//! The adapter holds the provider base URL and API key it was built with and
//! never changes them afterwards.

pub mod schema;
pub mod transport;

#[cfg(test)]
pub(crate) mod fake;

use crate::config::Config;
use crate::error::ProviderError;
use log::{debug, error};
use recipe_common::model::recipe::Recipe;
use schema::{
    IngredientLine, IngredientMatch, InstructionGroup, RandomResponse, RecipeInformation,
    SearchResponse, SearchResult,
};
use std::sync::Arc;
use transport::{HttpTransport, ProviderTransport};

/// Description used for recipes coming from the ingredient-match endpoint,
/// which carries no summary.
pub const DESCRIPTION_PLACEHOLDER: &str = "Description from API";
/// Single step used for recipes coming from the ingredient-match endpoint.
pub const STEPS_PLACEHOLDER: &str = "Steps not provided by this API endpoint";

pub struct RecipeApi {
    transport: Arc<dyn ProviderTransport>,
    base_url: String,
    api_key: String,
}

impl RecipeApi {
    pub fn new(
        transport: Arc<dyn ProviderTransport>,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Builds the adapter with a reqwest transport bounded by the configured
    /// timeout.
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let transport = HttpTransport::new(config.provider_timeout)?;
        Ok(Self::new(
            Arc::new(transport),
            config.provider_base_url.clone(),
            config.api_key.clone(),
        ))
    }

    /// Recipes using the given ingredients, with used and missing ingredient
    /// lines merged into one list.
    pub async fn recipes_by_ingredients(&self, ingredients: &str) -> Vec<Recipe> {
        self.fetch_recipes_by_ingredients(ingredients)
            .await
            .unwrap_or_else(|e| {
                error!("Ingredient search for '{ingredients}' failed: {e}");
                Vec::new()
            })
    }

    pub async fn fetch_recipes_by_ingredients(
        &self,
        ingredients: &str,
    ) -> Result<Vec<Recipe>, ProviderError> {
        let endpoint = format!(
            "/recipes/findByIngredients?ingredients={}",
            urlencoding::encode(ingredients)
        );
        let body = self.get(&endpoint).await?;
        let matches: Vec<IngredientMatch> = serde_json::from_str(&body)?;
        Ok(matches.into_iter().map(map_ingredient_match).collect())
    }

    /// Full details of one provider recipe. `None` when the provider has no
    /// such recipe or could not be queried.
    pub async fn recipe_by_id(&self, id: i64) -> Option<Recipe> {
        self.fetch_recipe_by_id(id).await.unwrap_or_else(|e| {
            error!("Lookup of provider recipe {id} failed: {e}");
            None
        })
    }

    pub async fn fetch_recipe_by_id(&self, id: i64) -> Result<Option<Recipe>, ProviderError> {
        let endpoint = format!("/recipes/{id}/information?");
        let body = match self.get(&endpoint).await {
            Ok(body) => body,
            Err(e) if e.is_not_found() => {
                debug!("Provider has no recipe {id}");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        if body.trim().is_empty() {
            return Ok(None);
        }

        let information: RecipeInformation = serde_json::from_str(&body)?;
        Ok(Some(map_information(information)))
    }

    /// A random sample of `count` fully detailed recipes.
    pub async fn random_recipes(&self, count: u32) -> Vec<Recipe> {
        self.fetch_random_recipes(count).await.unwrap_or_else(|e| {
            error!("Random sample of {count} recipes failed: {e}");
            Vec::new()
        })
    }

    pub async fn fetch_random_recipes(&self, count: u32) -> Result<Vec<Recipe>, ProviderError> {
        let endpoint = format!("/recipes/random?number={count}");
        let body = self.get(&endpoint).await?;
        let response: RandomResponse = serde_json::from_str(&body)?;
        Ok(response.recipes.into_iter().map(map_information).collect())
    }

    /// Free-text search. Results only carry id, name and image.
    pub async fn search_recipes_by_name(&self, query: &str) -> Vec<Recipe> {
        self.fetch_recipes_by_name(query).await.unwrap_or_else(|e| {
            error!("Name search for '{query}' failed: {e}");
            Vec::new()
        })
    }

    pub async fn fetch_recipes_by_name(&self, query: &str) -> Result<Vec<Recipe>, ProviderError> {
        let endpoint = format!("/recipes/complexSearch?query={}", urlencoding::encode(query));
        let body = self.get(&endpoint).await?;
        let response: SearchResponse = serde_json::from_str(&body)?;
        Ok(response.results.into_iter().map(map_search_result).collect())
    }

    /// `endpoint` is a path with its query string (ending in `?` when it has
    /// no parameters of its own). The API key is appended here so it never
    /// shows up in logs.
    async fn get(&self, endpoint: &str) -> Result<String, ProviderError> {
        debug!("GET {}{}", self.base_url, endpoint);
        let url = self.url(endpoint);
        self.transport.get_text(&url).await
    }

    fn url(&self, endpoint: &str) -> String {
        let separator = if endpoint.ends_with('?') { "" } else { "&" };
        format!(
            "{}{}{}apiKey={}",
            self.base_url,
            endpoint,
            separator,
            urlencoding::encode(&self.api_key)
        )
    }
}

fn originals(lines: Vec<IngredientLine>) -> impl Iterator<Item = String> {
    lines.into_iter().filter_map(|line| line.original)
}

fn flatten_steps(groups: Vec<InstructionGroup>) -> Vec<String> {
    groups
        .into_iter()
        .flat_map(|group| group.steps)
        .filter_map(|step| step.step)
        .collect()
}

fn map_ingredient_match(found: IngredientMatch) -> Recipe {
    let ingredients = originals(found.used_ingredients)
        .chain(originals(found.missed_ingredients))
        .collect();

    Recipe {
        id: Some(found.id),
        name: found.title,
        description: Some(DESCRIPTION_PLACEHOLDER.to_string()),
        image_url: found.image,
        ingredients,
        steps: vec![STEPS_PLACEHOLDER.to_string()],
        likes: found.likes,
    }
}

fn map_information(information: RecipeInformation) -> Recipe {
    Recipe {
        id: Some(information.id),
        name: information.title,
        description: information.summary,
        image_url: information.image,
        ingredients: originals(information.extended_ingredients).collect(),
        steps: flatten_steps(information.analyzed_instructions),
        likes: information.aggregate_likes,
    }
}

fn map_search_result(result: SearchResult) -> Recipe {
    Recipe {
        id: Some(result.id),
        name: result.title,
        image_url: result.image,
        ..Recipe::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::fake::FakeTransport;

    const BASE: &str = "https://provider.test";

    fn adapter(transport: FakeTransport) -> (RecipeApi, Arc<FakeTransport>) {
        let transport = Arc::new(transport);
        let api = RecipeApi::new(transport.clone(), BASE, "k3y");
        (api, transport)
    }

    #[actix_web::test]
    async fn ingredient_match_merges_used_then_missed() {
        let (api, _) = adapter(FakeTransport::with_response(
            "findByIngredients",
            r#"[{
                "id": 641803,
                "title": "Easy Pancakes",
                "image": "https://img.test/641803.jpg",
                "likes": 12,
                "usedIngredients": [{"original": "2 eggs", "name": "eggs"}],
                "missedIngredients": [{"original": "1 cup flour"}]
            }]"#,
        ));

        let recipes = api.fetch_recipes_by_ingredients("eggs").await.unwrap();
        assert_eq!(
            recipes,
            vec![Recipe {
                id: Some(641803),
                name: "Easy Pancakes".to_string(),
                description: Some(DESCRIPTION_PLACEHOLDER.to_string()),
                image_url: Some("https://img.test/641803.jpg".to_string()),
                ingredients: vec!["2 eggs".to_string(), "1 cup flour".to_string()],
                steps: vec![STEPS_PLACEHOLDER.to_string()],
                likes: Some(12),
            }]
        );
    }

    #[actix_web::test]
    async fn ingredient_query_is_encoded_and_key_appended() {
        let (api, transport) = adapter(FakeTransport::with_response("findByIngredients", "[]"));

        let recipes = api.recipes_by_ingredients("eggs, flour & milk").await;

        assert!(recipes.is_empty());
        assert_eq!(
            transport.requests(),
            vec![format!(
                "{BASE}/recipes/findByIngredients?ingredients=eggs%2C%20flour%20%26%20milk&apiKey=k3y"
            )]
        );
    }

    #[actix_web::test]
    async fn detail_flattens_instruction_groups_in_order() {
        let (api, transport) = adapter(FakeTransport::with_response(
            "/information",
            r#"{
                "id": 716429,
                "title": "Pasta",
                "image": "https://img.test/716429.jpg",
                "summary": "A quick pasta",
                "aggregateLikes": 209,
                "extendedIngredients": [
                    {"original": "1 lb pasta"},
                    {"original": "salt"}
                ],
                "analyzedInstructions": [
                    {"name": "", "steps": [{"number": 1, "step": "Boil water"}, {"number": 2, "step": "Add pasta"}]},
                    {"name": "Sauce", "steps": [{"number": 1, "step": "Stir in sauce"}]}
                ]
            }"#,
        ));

        let recipe = api.fetch_recipe_by_id(716429).await.unwrap().unwrap();

        assert_eq!(recipe.id, Some(716429));
        assert_eq!(recipe.name, "Pasta");
        assert_eq!(recipe.description.as_deref(), Some("A quick pasta"));
        assert_eq!(recipe.likes, Some(209));
        assert_eq!(recipe.ingredients, vec!["1 lb pasta", "salt"]);
        assert_eq!(recipe.steps, vec!["Boil water", "Add pasta", "Stir in sauce"]);
        assert_eq!(
            transport.requests(),
            vec![format!("{BASE}/recipes/716429/information?apiKey=k3y")]
        );
    }

    #[actix_web::test]
    async fn detail_without_instructions_has_no_steps() {
        let (api, _) = adapter(FakeTransport::with_response(
            "/information",
            r#"{"id": 1, "title": "Salad", "extendedIngredients": [], "analyzedInstructions": null}"#,
        ));
        let recipe = api.fetch_recipe_by_id(1).await.unwrap().unwrap();
        assert!(recipe.steps.is_empty());

        let (api, _) = adapter(FakeTransport::with_response(
            "/information",
            r#"{"id": 2, "title": "Salad", "analyzedInstructions": []}"#,
        ));
        let recipe = api.fetch_recipe_by_id(2).await.unwrap().unwrap();
        assert!(recipe.steps.is_empty());
        assert!(recipe.ingredients.is_empty());
    }

    #[actix_web::test]
    async fn detail_empty_body_or_upstream_404_is_not_found() {
        let (api, _) = adapter(FakeTransport::with_response("/information", "  "));
        assert_eq!(api.fetch_recipe_by_id(5).await.unwrap(), None);

        let (api, _) = adapter(FakeTransport::with_status("/information", 404));
        assert_eq!(api.fetch_recipe_by_id(5).await.unwrap(), None);
    }

    #[actix_web::test]
    async fn detail_failures_are_errors_that_degrade_to_none() {
        let (api, _) = adapter(FakeTransport::with_status("/information", 500));
        assert!(matches!(
            api.fetch_recipe_by_id(5).await,
            Err(ProviderError::Status(500))
        ));
        assert_eq!(api.recipe_by_id(5).await, None);

        let (api, _) = adapter(FakeTransport::with_response("/information", "<html>"));
        assert!(matches!(
            api.fetch_recipe_by_id(5).await,
            Err(ProviderError::Parse(_))
        ));
        assert_eq!(api.recipe_by_id(5).await, None);
    }

    #[actix_web::test]
    async fn random_sample_tolerates_missing_lists() {
        let (api, transport) = adapter(FakeTransport::with_response(
            "/random",
            r#"{"recipes": [
                {
                    "id": 10, "title": "Full", "summary": "s", "aggregateLikes": 4,
                    "extendedIngredients": [{"original": "1 onion"}],
                    "analyzedInstructions": [{"steps": [{"step": "Chop"}]}]
                },
                {"id": 11, "title": "Bare"}
            ]}"#,
        ));

        let recipes = api.fetch_random_recipes(2).await.unwrap();

        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].ingredients, vec!["1 onion"]);
        assert_eq!(recipes[0].steps, vec!["Chop"]);
        assert_eq!(recipes[1].name, "Bare");
        assert!(recipes[1].ingredients.is_empty());
        assert!(recipes[1].steps.is_empty());
        assert_eq!(
            transport.requests(),
            vec![format!("{BASE}/recipes/random?number=2&apiKey=k3y")]
        );
    }

    #[actix_web::test]
    async fn name_search_only_fills_id_name_and_image() {
        let (api, transport) = adapter(FakeTransport::with_response(
            "complexSearch",
            r#"{"results": [{"id": 3, "title": "Tomato Soup", "image": "https://img.test/3.jpg", "imageType": "jpg"}],
                "offset": 0, "number": 10, "totalResults": 1}"#,
        ));

        let recipes = api.search_recipes_by_name("tomato soup").await;

        assert_eq!(
            recipes,
            vec![Recipe {
                id: Some(3),
                name: "Tomato Soup".to_string(),
                image_url: Some("https://img.test/3.jpg".to_string()),
                ..Recipe::default()
            }]
        );
        assert_eq!(
            transport.requests(),
            vec![format!("{BASE}/recipes/complexSearch?query=tomato%20soup&apiKey=k3y")]
        );
    }

    #[actix_web::test]
    async fn transport_failures_degrade_to_empty() {
        let (api, _) = adapter(FakeTransport::failing());

        assert!(api.fetch_recipes_by_ingredients("eggs").await.is_err());
        assert!(api.recipes_by_ingredients("eggs").await.is_empty());
        assert!(api.random_recipes(10).await.is_empty());
        assert!(api.search_recipes_by_name("soup").await.is_empty());
        assert_eq!(api.recipe_by_id(1).await, None);
    }

    #[actix_web::test]
    async fn zero_matches_is_not_an_error() {
        let (api, _) = adapter(FakeTransport::with_response("complexSearch", r#"{"results": []}"#));
        assert!(api.fetch_recipes_by_name("nothing").await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn missing_wrapper_list_is_a_parse_error() {
        let (api, _) = adapter(
            FakeTransport::with_response("complexSearch", r#"{"status": "failure", "message": "quota"}"#)
                .and_response("/random", "{}"),
        );

        assert!(matches!(
            api.fetch_recipes_by_name("soup").await,
            Err(ProviderError::Parse(_))
        ));
        assert!(matches!(
            api.fetch_random_recipes(3).await,
            Err(ProviderError::Parse(_))
        ));
        assert!(api.search_recipes_by_name("soup").await.is_empty());
        assert!(api.random_recipes(3).await.is_empty());
    }
}
