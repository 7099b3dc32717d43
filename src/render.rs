//! Plain-text presentation of recipe cards.

use crate::model::{IngredientRef, RecipeCard};
use html_escape::decode_html_entities;
use std::io::{self, Write};

/// Write one recipe card: title, image, used ingredients and numbered steps.
pub fn render_card<W: Write>(out: &mut W, card: &RecipeCard) -> io::Result<()> {
    let title = if card.summary.title.trim().is_empty() {
        "Recipe".to_string()
    } else {
        decode_html_entities(&card.summary.title).into_owned()
    };
    writeln!(out, "## {}", title)?;

    if let Some(image) = card.detail.image.as_deref().filter(|i| !i.is_empty()) {
        writeln!(out, "Image: {}", image)?;
    }

    writeln!(out)?;
    writeln!(out, "Used Ingredients:")?;
    for ingredient in &card.summary.used_ingredients {
        writeln!(out, "- {}", ingredient_line(ingredient))?;
    }

    writeln!(out)?;
    if card.steps.is_empty() {
        writeln!(out, "No instructions provided.")?;
    } else {
        writeln!(out, "Instructions:")?;
        for (i, step) in card.steps.iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, decode_html_entities(step))?;
        }
    }

    writeln!(out, "---")
}

/// "2.5 cups flour", skipping whatever parts are missing
pub fn ingredient_line(ingredient: &IngredientRef) -> String {
    let amount = ingredient.amount.map(|a| a.to_string()).unwrap_or_default();

    [amount.as_str(), ingredient.unit.trim(), ingredient.name.trim()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
