use clap::Parser;
use log::{debug, error};
use recipe_finder::{pipeline, render, AppConfig, FinderError, MealType, SpoonacularClient};
use std::io::{self, Write};
use std::process::ExitCode;

/// Find recipes for the ingredients you have and show step-by-step instructions.
#[derive(Parser, Debug)]
#[command(name = "recipe-finder")]
#[command(author, version, about)]
struct Args {
    /// Ingredients you have, comma-separated (e.g. "tomato, cheese, bread")
    ingredients: Option<String>,

    /// Meal type
    #[arg(short, long, value_enum, default_value_t = MealType::Breakfast)]
    meal_type: MealType,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // RUST_LOG wins over -v
    let default_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
    debug!("{:?}", args);

    let result = match AppConfig::load() {
        Ok(config) => run(&args, &config).await,
        Err(e) => Err(e.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(FinderError::EmptyIngredients) => {
            eprintln!("Warning: {}", FinderError::EmptyIngredients);
            ExitCode::SUCCESS
        }
        Err(e) if e.is_user_facing() => {
            eprintln!("Error: {}", e);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args, config: &AppConfig) -> Result<(), FinderError> {
    // a missing key is reported even when there is nothing to search for
    let client = SpoonacularClient::new(config)?;

    let ingredients = args.ingredients.as_deref().unwrap_or_default();
    if ingredients.trim().is_empty() {
        return Err(FinderError::EmptyIngredients);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    pipeline::process(&client, ingredients, args.meal_type, |card| {
        render::render_card(&mut out, &card)?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    })
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["recipe-finder", "tomato, cheese"]).unwrap();
        assert_eq!(args.ingredients.as_deref(), Some("tomato, cheese"));
        assert_eq!(args.meal_type, MealType::Breakfast);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_args_meal_type() {
        let args =
            Args::try_parse_from(["recipe-finder", "egg", "--meal-type", "dinner", "-vv"]).unwrap();
        assert_eq!(args.meal_type, MealType::Dinner);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_args_rejects_unknown_meal_type() {
        assert!(Args::try_parse_from(["recipe-finder", "egg", "-m", "brunch"]).is_err());
    }

    #[test]
    fn test_args_without_ingredients() {
        let args = Args::try_parse_from(["recipe-finder"]).unwrap();
        assert!(args.ingredients.is_none());
    }

    #[tokio::test]
    async fn test_missing_key_reported_before_blank_input() {
        let args = Args::try_parse_from(["recipe-finder"]).unwrap();
        let result = run(&args, &AppConfig::default()).await;
        assert!(matches!(result, Err(FinderError::MissingApiKey)));
    }

    #[tokio::test]
    async fn test_blank_input_with_key() {
        let args = Args::try_parse_from(["recipe-finder", "  "]).unwrap();
        let mut config = AppConfig::default();
        config.api.spoonacular_key = Some("key".to_string());
        config.api.base_url = "http://127.0.0.1:9".to_string();

        let result = run(&args, &config).await;
        assert!(matches!(result, Err(FinderError::EmptyIngredients)));
    }
}
