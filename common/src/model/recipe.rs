use serde::{Deserialize, Serialize};

/// The normalized recipe shared by the local store, the provider adapter and
/// the HTTP layer.
///
/// Recipes come from two origins. Locally persisted recipes get their `id`
/// from the store on first save; provider recipes copy the provider's id and
/// only live for the duration of one request.
///
/// `ingredients` and `steps` are always present in the serialized form. When a
/// source has nothing to offer they are empty (or carry a placeholder entry),
/// never `null`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unset until the recipe has been persisted, or the provider's id.
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Human readable ingredient lines, in display order.
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Preparation steps, in order.
    #[serde(default)]
    pub steps: Vec<String>,
    /// Popularity score reported by the provider.
    #[serde(default)]
    pub likes: Option<i32>,
}
