use serde::{Deserialize, Serialize};

/// One ingredient line broken into quantity, unit and name.
///
/// `count` is `None` when the line carries no quantity ("salt to taste").
/// `unit` is a canonical unit token or empty for unit-less items ("2 eggs").
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IngredientEntry {
    pub count: Option<f64>,
    pub unit: String,
    pub ingredient: String,
}

impl IngredientEntry {
    pub fn is_empty(&self) -> bool {
        self.count.is_none() && self.unit.is_empty() && self.ingredient.is_empty()
    }
}

/// A search hit, as listed on a results page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub image: String,
}

/// A fully loaded recipe with derived fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDetail {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image: String,
    pub source_url: String,
    pub ingredients: Vec<IngredientEntry>,
    pub servings: u32,
    pub cook_time_minutes: u32,
}

/// All recipes returned for one query, plus the page currently shown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub query: String,
    pub recipes: Vec<RecipeSummary>,
    pub page: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    pub id: String,
    pub count: Option<f64>,
    pub unit: String,
    pub ingredient: String,
}
