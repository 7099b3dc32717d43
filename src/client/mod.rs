mod spoonacular;

pub use spoonacular::{SpoonacularClient, RANKING_MAXIMIZE_USED, RESULT_COUNT};

use crate::error::FinderError;
use crate::model::{MealType, RecipeDetail, RecipeSummary};
use async_trait::async_trait;

/// A recipe search backend
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Get the source name (e.g., "spoonacular")
    fn source_name(&self) -> &str;

    /// Find recipes using the given comma-separated ingredients
    async fn search(
        &self,
        ingredients: &str,
        meal_type: MealType,
    ) -> Result<Vec<RecipeSummary>, FinderError>;

    /// Fetch image and instructions of a single recipe
    async fn details(&self, recipe_id: u64) -> Result<RecipeDetail, FinderError>;
}
