use html_escape::decode_html_entities;
use log::{debug, info};
use serde::Deserialize;
use url::Url;

use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::fetchers::JsonFetcher;
use crate::ingredients::{parse_all, rescale};
use crate::model::RecipeDetail;

const MINUTES_PER_GROUP: u32 = 15;
const INGREDIENTS_PER_GROUP: usize = 3;

#[derive(Debug, Deserialize)]
struct RecipeResponse {
    recipe: Option<ApiRecipe>,
}

#[derive(Debug, Deserialize)]
struct ApiRecipe {
    recipe_id: String,
    title: String,
    #[serde(default)]
    publisher: String,
    #[serde(default)]
    image_url: String,
    #[serde(default)]
    source_url: String,
    #[serde(default)]
    ingredients: Vec<String>,
}

/// Estimated cooking time: 15 minutes for every started group of 3 ingredients.
///
/// This is a display heuristic, not a measured or nutritional figure.
pub fn cook_time_minutes(ingredient_count: usize) -> u32 {
    let groups = ingredient_count.div_ceil(INGREDIENTS_PER_GROUP);
    u32::try_from(groups)
        .unwrap_or(u32::MAX)
        .saturating_mul(MINUTES_PER_GROUP)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServingsChange {
    Increase,
    Decrease,
}

/// The recipe currently open, with its scaled ingredients
#[derive(Debug, Clone)]
pub struct RecipeSession {
    detail: RecipeDetail,
}

impl RecipeSession {
    /// Load a recipe and derive its parsed ingredients, servings and cook time.
    pub async fn fetch_detail<F>(
        fetcher: &F,
        api: &ApiConfig,
        id: &str,
        servings: u32,
    ) -> Result<RecipeDetail, FetchError>
    where
        F: JsonFetcher + ?Sized,
    {
        let url = Url::parse_with_params(&format!("{}/get", api.base()), &[("rId", id)])?;

        let body = match fetcher.get_json(url.as_str()).await {
            Ok(body) => body,
            Err(FetchError::NotFound(_)) | Err(FetchError::Status { status: 400, .. }) => {
                return Err(FetchError::NotFound(id.to_string()));
            }
            Err(e) => return Err(e),
        };

        let response: RecipeResponse = serde_json::from_value(body)?;
        let recipe = response
            .recipe
            .ok_or_else(|| FetchError::NotFound(id.to_string()))?;

        let ingredients = parse_all(&recipe.ingredients);
        debug!(
            "Parsed {} of {} ingredient lines for recipe {}",
            ingredients.len(),
            recipe.ingredients.len(),
            id
        );

        let detail = RecipeDetail {
            id: recipe.recipe_id,
            title: decode_html_entities(&recipe.title).into_owned(),
            author: recipe.publisher,
            image: recipe.image_url,
            source_url: recipe.source_url,
            cook_time_minutes: cook_time_minutes(ingredients.len()),
            ingredients,
            servings: servings.max(1),
        };
        info!("Loaded recipe {} ({})", detail.id, detail.title);
        Ok(detail)
    }

    pub fn new(detail: RecipeDetail) -> Self {
        Self { detail }
    }

    pub fn detail(&self) -> &RecipeDetail {
        &self.detail
    }

    pub fn servings(&self) -> u32 {
        self.detail.servings
    }

    /// Step servings up or down by one. Returns `false` if the step would go below 1.
    pub fn update_servings(&mut self, change: ServingsChange) -> bool {
        let target = match change {
            ServingsChange::Increase => self.detail.servings.saturating_add(1),
            ServingsChange::Decrease => self.detail.servings.saturating_sub(1),
        };
        self.set_servings(target)
    }

    /// Rescale every ingredient to `servings`. Returns `false` and changes nothing for 0.
    pub fn set_servings(&mut self, servings: u32) -> bool {
        if servings == 0 {
            return false;
        }
        self.detail.ingredients = rescale(&self.detail.ingredients, self.detail.servings, servings);
        self.detail.servings = servings;
        true
    }
}
