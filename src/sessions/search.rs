use html_escape::decode_html_entities;
use log::{debug, info};
use serde::Deserialize;
use url::Url;

use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::fetchers::JsonFetcher;
use crate::model::{RecipeSummary, SearchResult};

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    recipes: Vec<ApiRecipeSummary>,
}

#[derive(Debug, Deserialize)]
struct ApiRecipeSummary {
    recipe_id: String,
    title: String,
    #[serde(default)]
    publisher: String,
    #[serde(default)]
    image_url: String,
}

impl From<ApiRecipeSummary> for RecipeSummary {
    fn from(api: ApiRecipeSummary) -> Self {
        RecipeSummary {
            id: api.recipe_id,
            title: decode_html_entities(&api.title).into_owned(),
            publisher: api.publisher,
            image: api.image_url,
        }
    }
}

impl SearchResult {
    /// Number of pages needed to show every recipe; at least 1
    pub fn page_count(&self, per_page: usize) -> usize {
        let per_page = per_page.max(1);
        self.recipes.len().div_ceil(per_page).max(1)
    }

    /// The recipes on `page` (1-based). Out-of-range pages are empty.
    pub fn page_slice(&self, page: usize, per_page: usize) -> &[RecipeSummary] {
        let per_page = per_page.max(1);
        let start = page.saturating_sub(1).saturating_mul(per_page);
        if page == 0 || start >= self.recipes.len() {
            return &[];
        }
        let end = (start + per_page).min(self.recipes.len());
        &self.recipes[start..end]
    }
}

/// The active search: a fixed result set and the page being shown
#[derive(Debug, Clone)]
pub struct SearchSession {
    result: SearchResult,
    per_page: usize,
}

impl SearchSession {
    /// Query the recipe API.
    ///
    /// A query with no matches is a valid, empty result rather than an error.
    /// The API reports "no matches" as a 400 carrying an `error` message; any
    /// other failure, a bare 404 included, is passed on.
    pub async fn fetch_results<F>(
        fetcher: &F,
        api: &ApiConfig,
        query: &str,
    ) -> Result<SearchResult, FetchError>
    where
        F: JsonFetcher + ?Sized,
    {
        let url = Url::parse_with_params(&format!("{}/search", api.base()), &[("q", query)])?;

        let recipes = match fetcher.get_json(url.as_str()).await {
            Ok(body) => {
                let response: SearchResponse = serde_json::from_value(body)?;
                response.recipes.into_iter().map(RecipeSummary::from).collect()
            }
            Err(FetchError::Status {
                status: 400,
                message: Some(message),
                ..
            }) => {
                debug!("No recipes found for {:?}: {}", query, message);
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        info!("Search {:?} returned {} recipes", query, recipes.len());
        Ok(SearchResult {
            query: query.to_string(),
            recipes,
            page: 1,
        })
    }

    pub fn new(result: SearchResult, per_page: usize) -> Self {
        let mut session = Self {
            result,
            per_page: per_page.max(1),
        };
        let page = session.result.page;
        session.go_to_page(page);
        session
    }

    pub fn result(&self) -> &SearchResult {
        &self.result
    }

    pub fn query(&self) -> &str {
        &self.result.query
    }

    pub fn page(&self) -> usize {
        self.result.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn page_count(&self) -> usize {
        self.result.page_count(self.per_page)
    }

    /// Recipes on the current page
    pub fn current_page(&self) -> &[RecipeSummary] {
        self.result.page_slice(self.result.page, self.per_page)
    }

    /// Move to `page`, clamped to the available pages. Returns the page now shown.
    pub fn go_to_page(&mut self, page: usize) -> usize {
        self.result.page = page.clamp(1, self.page_count());
        self.result.page
    }

    pub fn has_previous(&self) -> bool {
        self.result.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.result.page < self.page_count()
    }
}
