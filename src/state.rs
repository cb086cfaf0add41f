use log::{error, warn};

use crate::config::AppConfig;
use crate::error::FetchError;
use crate::fetchers::JsonFetcher;
use crate::sessions::{RecipeSession, SearchSession, ServingsChange};
use crate::shopping_list::ShoppingList;

/// Everything the application holds at once: at most one search, at most
/// one open recipe, and the shopping list.
///
/// Methods that fetch take `&mut self` across the await, so two fetches on
/// the same state cannot interleave and a slow response can never overwrite
/// a newer one.
pub struct AppState<F> {
    fetcher: F,
    config: AppConfig,
    search: Option<SearchSession>,
    recipe: Option<RecipeSession>,
    list: ShoppingList,
}

impl<F: JsonFetcher> AppState<F> {
    pub fn new(fetcher: F, config: AppConfig) -> Self {
        Self {
            fetcher,
            config,
            search: None,
            recipe: None,
            list: ShoppingList::new(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run a new search, replacing the previous one.
    ///
    /// A blank query does nothing and returns `Ok(None)`. On failure the
    /// previous search is dropped so no stale results are shown.
    pub async fn search(&mut self, query: &str) -> Result<Option<&SearchSession>, FetchError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(None);
        }

        self.search = None;
        let result = SearchSession::fetch_results(&self.fetcher, &self.config.api, query)
            .await
            .inspect_err(|e| error!("Search for {:?} failed: {}", query, e))?;

        let session = SearchSession::new(result, self.config.search.results_per_page);
        Ok(Some(&*self.search.insert(session)))
    }

    pub fn search_session(&self) -> Option<&SearchSession> {
        self.search.as_ref()
    }

    /// Show another page of the active search. Returns the page now shown.
    pub fn go_to_page(&mut self, page: usize) -> Option<usize> {
        self.search.as_mut().map(|session| session.go_to_page(page))
    }

    /// Load a recipe, replacing the open one. A blank id does nothing.
    pub async fn open_recipe(&mut self, id: &str) -> Result<Option<&RecipeSession>, FetchError> {
        let id = id.trim();
        if id.is_empty() {
            return Ok(None);
        }

        self.recipe = None;
        let detail = RecipeSession::fetch_detail(
            &self.fetcher,
            &self.config.api,
            id,
            self.config.recipe.default_servings,
        )
        .await
        .inspect_err(|e| error!("Loading recipe {} failed: {}", id, e))?;

        Ok(Some(&*self.recipe.insert(RecipeSession::new(detail))))
    }

    pub fn recipe_session(&self) -> Option<&RecipeSession> {
        self.recipe.as_ref()
    }

    pub fn increase_servings(&mut self) -> bool {
        self.change_servings(ServingsChange::Increase)
    }

    /// Refuses to go below one serving
    pub fn decrease_servings(&mut self) -> bool {
        self.change_servings(ServingsChange::Decrease)
    }

    fn change_servings(&mut self, change: ServingsChange) -> bool {
        match self.recipe.as_mut() {
            Some(session) => session.update_servings(change),
            None => {
                warn!("No recipe open; ignoring servings change");
                false
            }
        }
    }

    /// Copy the open recipe's ingredients into the shopping list.
    /// Returns the number of items added.
    pub fn add_recipe_to_list(&mut self) -> usize {
        match self.recipe.as_ref() {
            Some(session) => self.list.add_ingredients(&session.detail().ingredients),
            None => 0,
        }
    }

    pub fn shopping_list(&self) -> &ShoppingList {
        &self.list
    }

    pub fn shopping_list_mut(&mut self) -> &mut ShoppingList {
        &mut self.list
    }
}
