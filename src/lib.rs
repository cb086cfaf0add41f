//! Recipe search, ingredient scaling and shopping lists.
//!
//! The library turns free-text ingredient lines into structured entries,
//! rescales them when the serving count changes, and keeps a shopping list
//! built from them. [`AppState`] ties the pieces together around a
//! [`JsonFetcher`] that talks to the recipe API.
//!
//! ```no_run
//! # use forkify::Forkify;
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut app = Forkify::builder().build()?;
//! app.search("pizza").await?;
//! app.open_recipe("47746").await?;
//! app.increase_servings();
//! app.add_recipe_to_list();
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod fetchers;
pub mod ingredients;
pub mod model;
pub mod sessions;
pub mod shopping_list;
pub mod state;
pub mod view;

pub use builder::{Forkify, ForkifyBuilder};
pub use config::AppConfig;
pub use error::{FetchError, ForkifyError};
pub use fetchers::{JsonFetcher, RequestFetcher};
pub use ingredients::{parse, parse_all, rescale};
pub use model::{IngredientEntry, RecipeDetail, RecipeSummary, SearchResult, ShoppingListItem};
pub use sessions::{RecipeSession, SearchSession, ServingsChange};
pub use shopping_list::ShoppingList;
pub use state::AppState;

/// Search the configured recipe API once, without keeping any state
pub async fn search_recipes(query: &str) -> Result<SearchResult, ForkifyError> {
    let config = AppConfig::load()?;
    let fetcher = RequestFetcher::new(Some(config.api.timeout()))?;
    Ok(SearchSession::fetch_results(&fetcher, &config.api, query).await?)
}

/// Fetch one recipe from the configured API, parsed and at default servings
pub async fn fetch_recipe(id: &str) -> Result<RecipeDetail, ForkifyError> {
    let config = AppConfig::load()?;
    let fetcher = RequestFetcher::new(Some(config.api.timeout()))?;
    Ok(RecipeSession::fetch_detail(&fetcher, &config.api, id, config.recipe.default_servings).await?)
}
