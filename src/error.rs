use thiserror::Error;

/// Errors that can occur while searching for recipes
#[derive(Error, Debug)]
pub enum FinderError {
    /// The ingredient list was empty or blank
    #[error("Please enter some ingredients")]
    EmptyIngredients,

    /// The search endpoint returned no candidates
    #[error("No recipes found with the given ingredients")]
    NoRecipesFound,

    /// HTTP request failed, returned an error status, or had an unreadable body
    #[error("Failed to fetch from recipe API: {0}")]
    FetchError(#[from] reqwest::Error),

    /// No Spoonacular API key was configured
    #[error("Spoonacular API key not found in config or environment")]
    MissingApiKey,

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Writing rendered output failed
    #[error("Output error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

impl FinderError {
    /// Errors the user can act on by changing their input; these are reported
    /// without failing the process.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            FinderError::EmptyIngredients | FinderError::NoRecipesFound
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_errors() {
        assert!(FinderError::EmptyIngredients.is_user_facing());
        assert!(FinderError::NoRecipesFound.is_user_facing());
        assert!(!FinderError::MissingApiKey.is_user_facing());
        assert!(!FinderError::BuilderError("x".to_string()).is_user_facing());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FinderError::NoRecipesFound.to_string(),
            "No recipes found with the given ingredients"
        );
        assert_eq!(
            FinderError::BuilderError("missing".to_string()).to_string(),
            "Builder error: missing"
        );
    }
}
