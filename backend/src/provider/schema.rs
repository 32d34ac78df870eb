//! Typed shapes of the provider responses, one per endpoint.
//!
//! Only the fields the adapter maps are declared; everything else in the
//! provider payload is ignored. Lists inside a recipe default to empty so a
//! missing key there never fails a whole response; the top-level `recipes`
//! and `results` wrappers are required.

use serde::Deserialize;

/// One `{ "original": "..." }` ingredient entry.
#[derive(Debug, Deserialize)]
pub struct IngredientLine {
    #[serde(default)]
    pub original: Option<String>,
}

/// Element of the `findByIngredients` array.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientMatch {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub likes: Option<i32>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub used_ingredients: Vec<IngredientLine>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub missed_ingredients: Vec<IngredientLine>,
}

/// Full recipe information, as returned by `/{id}/information` and as the
/// elements of the random sample.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeInformation {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub aggregate_likes: Option<i32>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub extended_ingredients: Vec<IngredientLine>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub analyzed_instructions: Vec<InstructionGroup>,
}

#[derive(Debug, Deserialize)]
pub struct InstructionGroup {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub steps: Vec<InstructionStep>,
}

#[derive(Debug, Deserialize)]
pub struct InstructionStep {
    #[serde(default)]
    pub step: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RandomResponse {
    pub recipes: Vec<RecipeInformation>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResult {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// The provider sends `null` instead of `[]` for some recipes.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
