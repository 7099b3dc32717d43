use crate::client::RecipeSource;
use crate::config::{default_timeout, AppConfig};
use crate::error::FinderError;
use crate::model::{MealType, RecipeDetail, RecipeSummary};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// Number of recipes requested per search
pub const RESULT_COUNT: u32 = 5;

/// Spoonacular ranking mode that maximizes used ingredients
pub const RANKING_MAXIMIZE_USED: u8 = 1;

#[derive(Serialize)]
struct SearchQuery<'a> {
    #[serde(rename = "apiKey")]
    api_key: &'a str,
    ingredients: &'a str,
    number: u32,
    ranking: u8,
}

#[derive(Serialize)]
struct DetailsQuery<'a> {
    #[serde(rename = "apiKey")]
    api_key: &'a str,
}

pub struct SpoonacularClient {
    client: Client,
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl SpoonacularClient {
    /// Create a client from the loaded configuration
    pub fn new(config: &AppConfig) -> Result<Self, FinderError> {
        let api_key = config.api_key()?.to_string();
        Self::build(
            api_key,
            &config.api.base_url,
            Duration::from_secs(config.api.timeout),
        )
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self, FinderError> {
        Self::build(api_key, &base_url, Duration::from_secs(default_timeout()))
    }

    fn build(api_key: String, base_url: &str, timeout: Duration) -> Result<Self, FinderError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(SpoonacularClient {
            client,
            api_key,
            base_url: trim_base_url(base_url),
            timeout,
        })
    }

    /// Per-request timeout of the underlying HTTP client
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

fn trim_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

#[async_trait]
impl RecipeSource for SpoonacularClient {
    fn source_name(&self) -> &str {
        "spoonacular"
    }

    async fn search(
        &self,
        ingredients: &str,
        meal_type: MealType,
    ) -> Result<Vec<RecipeSummary>, FinderError> {
        let url = format!("{}/recipes/findByIngredients", self.base_url);
        debug!("GET {} for '{}' ({})", url, ingredients, meal_type);

        let recipes = self
            .client
            .get(&url)
            .query(&SearchQuery {
                api_key: &self.api_key,
                ingredients,
                number: RESULT_COUNT,
                ranking: RANKING_MAXIMIZE_USED,
            })
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<RecipeSummary>>()
            .await?;

        debug!("Search returned {} recipes", recipes.len());
        Ok(recipes)
    }

    async fn details(&self, recipe_id: u64) -> Result<RecipeDetail, FinderError> {
        let url = format!("{}/recipes/{}/information", self.base_url, recipe_id);
        debug!("GET {}", url);

        let detail = self
            .client
            .get(&url)
            .query(&DetailsQuery {
                api_key: &self.api_key,
            })
            .send()
            .await?
            .error_for_status()?
            .json::<RecipeDetail>()
            .await?;

        Ok(detail)
    }
}
