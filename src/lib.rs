pub mod builder;
pub mod client;
pub mod config;
pub mod error;
pub mod instructions;
pub mod model;
pub mod pipeline;
pub mod render;

pub use builder::{RecipeFinder, RecipeFinderBuilder};
pub use client::{RecipeSource, SpoonacularClient};
pub use config::AppConfig;
pub use error::FinderError;
pub use instructions::extract_steps;
pub use model::{IngredientRef, MealType, RecipeCard, RecipeDetail, RecipeSummary};

/// Search recipes with settings from config.toml or the environment
///
/// # Example
/// ```no_run
/// # use recipe_finder::{find_recipes, MealType};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let cards = find_recipes("tomato, cheese, bread", MealType::Lunch).await?;
/// for card in cards {
///     println!("{}: {} steps", card.summary.title, card.steps.len());
/// }
/// # Ok(())
/// # }
/// ```
pub async fn find_recipes(
    ingredients: &str,
    meal_type: MealType,
) -> Result<Vec<RecipeCard>, FinderError> {
    RecipeFinder::builder()
        .ingredients(ingredients)
        .meal_type(meal_type)
        .build()
        .await
}
