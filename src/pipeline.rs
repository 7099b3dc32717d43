use crate::client::RecipeSource;
use crate::error::FinderError;
use crate::instructions::extract_steps;
use crate::model::{MealType, RecipeCard};
use log::{debug, info};

/// Search for recipes and hand each one, with details and steps, to `sink`
///
/// This pipeline:
/// 1. Rejects a blank ingredient list without touching the network
/// 2. Searches the source for matching recipes
/// 3. For each result, in order, fetches its details and extracts the steps
/// 4. Passes the card to `sink` before fetching the next one
///
/// Cards already passed to `sink` stay delivered if a later fetch fails.
///
/// # Returns
/// * `Ok(usize)` - The number of cards delivered
/// * `Err(FinderError::EmptyIngredients)` - Blank input
/// * `Err(FinderError::NoRecipesFound)` - The search came back empty
/// * `Err(...)` - Transport failures and errors raised by `sink`
pub async fn process<F>(
    source: &dyn RecipeSource,
    ingredients: &str,
    meal_type: MealType,
    mut sink: F,
) -> Result<usize, FinderError>
where
    F: FnMut(RecipeCard) -> Result<(), FinderError>,
{
    if ingredients.trim().is_empty() {
        return Err(FinderError::EmptyIngredients);
    }

    info!(
        "Searching {} for {} recipes with '{}'",
        source.source_name(),
        meal_type,
        ingredients
    );
    let summaries = source.search(ingredients, meal_type).await?;
    if summaries.is_empty() {
        return Err(FinderError::NoRecipesFound);
    }

    let mut delivered = 0;
    for summary in summaries {
        let detail = source.details(summary.id).await?;
        let steps = extract_steps(detail.instructions.as_deref());
        debug!("Recipe {} has {} steps", summary.id, steps.len());

        sink(RecipeCard {
            summary,
            detail,
            steps,
        })?;
        delivered += 1;
    }

    Ok(delivered)
}

/// Run the pipeline and collect every card
pub async fn collect(
    source: &dyn RecipeSource,
    ingredients: &str,
    meal_type: MealType,
) -> Result<Vec<RecipeCard>, FinderError> {
    let mut cards = Vec::new();
    process(source, ingredients, meal_type, |card| {
        cards.push(card);
        Ok(())
    })
    .await?;
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RecipeDetail, RecipeSummary};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// In-memory source that records the calls it receives
    struct FakeSource {
        summaries: Vec<RecipeSummary>,
        fail_details_for: Option<u64>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeSource {
        fn new(ids: &[u64]) -> Self {
            FakeSource {
                summaries: ids
                    .iter()
                    .map(|&id| RecipeSummary {
                        id,
                        title: format!("Recipe {}", id),
                        used_ingredients: Vec::new(),
                    })
                    .collect(),
                fail_details_for: None,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RecipeSource for FakeSource {
        fn source_name(&self) -> &str {
            "fake"
        }

        async fn search(
            &self,
            ingredients: &str,
            _meal_type: MealType,
        ) -> Result<Vec<RecipeSummary>, FinderError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("search:{}", ingredients));
            Ok(self.summaries.clone())
        }

        async fn details(&self, recipe_id: u64) -> Result<RecipeDetail, FinderError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("details:{}", recipe_id));
            if self.fail_details_for == Some(recipe_id) {
                return Err(FinderError::BuilderError("boom".to_string()));
            }
            Ok(RecipeDetail {
                id: recipe_id,
                image: None,
                instructions: Some(format!("<ol><li>Step for {}.</li></ol>", recipe_id)),
            })
        }
    }

    #[tokio::test]
    async fn test_blank_ingredients_make_no_calls() {
        let source = FakeSource::new(&[1]);
        let result = collect(&source, "  ", MealType::Dinner).await;

        assert!(matches!(result, Err(FinderError::EmptyIngredients)));
        assert!(source.calls().is_empty());
    }

    #[tokio::test]
    async fn test_no_results() {
        let source = FakeSource::new(&[]);
        let result = collect(&source, "rocks", MealType::Snack).await;

        assert!(matches!(result, Err(FinderError::NoRecipesFound)));
        assert_eq!(source.calls(), vec!["search:rocks"]);
    }

    #[tokio::test]
    async fn test_details_fetched_in_order() {
        let source = FakeSource::new(&[3, 1, 2]);
        let cards = collect(&source, "egg", MealType::Breakfast).await.unwrap();

        let ids: Vec<u64> = cards.iter().map(|c| c.summary.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(cards[0].steps, vec!["Step for 3."]);
        assert_eq!(
            source.calls(),
            vec!["search:egg", "details:3", "details:1", "details:2"]
        );
    }

    #[tokio::test]
    async fn test_failure_keeps_delivered_cards() {
        let mut source = FakeSource::new(&[1, 2, 3]);
        source.fail_details_for = Some(2);

        let mut seen = Vec::new();
        let result = process(&source, "egg", MealType::Lunch, |card| {
            seen.push(card.summary.id);
            Ok(())
        })
        .await;

        assert!(result.is_err());
        assert_eq!(seen, vec![1]);
        // no fetch after the failure
        assert!(!source.calls().contains(&"details:3".to_string()));
    }

    #[tokio::test]
    async fn test_sink_error_stops_pipeline() {
        let source = FakeSource::new(&[1, 2]);
        let result = process(&source, "egg", MealType::Lunch, |_| {
            Err(FinderError::BuilderError("sink".to_string()))
        })
        .await;

        assert!(matches!(result, Err(FinderError::BuilderError(_))));
        assert_eq!(source.calls(), vec!["search:egg", "details:1"]);
    }
}
