use std::time::Duration;

use crate::{
    client::SpoonacularClient, config::AppConfig, model::MealType, pipeline, FinderError,
    RecipeCard,
};

/// Builder for configuring and executing a recipe search
#[derive(Debug, Default)]
pub struct RecipeFinderBuilder {
    ingredients: Option<String>,
    meal_type: MealType,
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl RecipeFinderBuilder {
    /// Set the comma-separated ingredient list
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder()
    ///     .ingredients("tomato, cheese, bread");
    /// ```
    pub fn ingredients(mut self, ingredients: impl Into<String>) -> Self {
        self.ingredients = Some(ingredients.into());
        self
    }

    /// Set the meal type (defaults to breakfast)
    pub fn meal_type(mut self, meal_type: MealType) -> Self {
        self.meal_type = meal_type;
        self
    }

    /// Set the Spoonacular API key
    ///
    /// This allows passing the API key directly instead of relying on
    /// environment variables or config files.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the API base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeFinder::builder()
    ///     .ingredients("egg")
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Build the client and run the search
    ///
    /// Without an explicit API key, settings come from [`AppConfig::load`].
    ///
    /// # Errors
    /// Returns `FinderError` if:
    /// - No ingredients were specified, or they are blank
    /// - No API key is available
    /// - A request fails
    /// - The search found nothing
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_finder::{RecipeFinder, MealType};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let cards = RecipeFinder::builder()
    ///     .ingredients("tomato, cheese")
    ///     .meal_type(MealType::Lunch)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<Vec<RecipeCard>, FinderError> {
        let ingredients = self.ingredients.ok_or_else(|| {
            FinderError::BuilderError("No ingredients specified. Use .ingredients()".to_string())
        })?;

        // checked before config loading
        if ingredients.trim().is_empty() {
            return Err(FinderError::EmptyIngredients);
        }

        // An explicit key means the caller is not relying on config files
        let mut config = if self.api_key.is_some() {
            AppConfig::default()
        } else {
            AppConfig::load()?
        };
        if let Some(key) = self.api_key {
            config.api.spoonacular_key = Some(key);
        }
        if let Some(url) = self.base_url {
            config.api.base_url = url;
        }
        if let Some(timeout) = self.timeout {
            config.api.timeout = timeout.as_secs().max(1);
        }

        let client = SpoonacularClient::new(&config)?;
        pipeline::collect(&client, &ingredients, self.meal_type).await
    }
}

/// Main entry point for the builder API
pub struct RecipeFinder;

impl RecipeFinder {
    /// Creates a new builder for searching recipes
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder();
    /// ```
    pub fn builder() -> RecipeFinderBuilder {
        RecipeFinderBuilder::default()
    }
}
