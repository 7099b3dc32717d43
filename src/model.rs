use serde::{Deserialize, Serialize};
use std::fmt;

/// An ingredient of a search result that matched the user's list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngredientRef {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub unit: String,
}

/// One entry of the find-by-ingredients response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub used_ingredients: Vec<IngredientRef>,
}

/// The subset of the recipe information response that gets rendered
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeDetail {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub image: Option<String>,
    /// Instructions as returned by the API, usually an HTML fragment
    #[serde(default)]
    pub instructions: Option<String>,
}

/// A search result joined with its details and extracted steps,
/// ready to be presented.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecipeCard {
    pub summary: RecipeSummary,
    pub detail: RecipeDetail,
    pub steps: Vec<String>,
}

/// Meal type chosen by the user
///
/// The search endpoint has no meal filter, so this is carried through for
/// logging and display only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    #[default]
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
