//! # Ingredient Extractor
//!
//! Flattens a meal plan and the recipes it references into scaled
//! [`RawIngredientLine`]s, in meal plan order.
//!
//! Each plan entry contributes its recipe's ingredients scaled by the entry's
//! multiplier: requested servings over the recipe's base servings, the requested
//! servings themselves when the recipe has no base, or 1 when the entry requests
//! nothing. Entries pointing at recipes the caller did not supply are skipped.
//! Amounts that are not finite or not positive after scaling never leave this module.

use crate::ingredient_model::{Category, MealPlanEntry, RawIngredientLine, Recipe};
use log::{debug, info, warn};
use std::collections::HashMap;

/// Flatten the planned recipes into scaled ingredient lines
pub fn extract_ingredients(recipes: &[Recipe], meal_plan: &[MealPlanEntry]) -> Vec<RawIngredientLine> {
    let mut by_id: HashMap<&str, &Recipe> = HashMap::new();
    for recipe in recipes {
        by_id.entry(recipe.id.as_str()).or_insert(recipe);
    }

    let mut lines = Vec::new();

    for entry in meal_plan {
        let Some(recipe) = by_id.get(entry.recipe_id.as_str()) else {
            debug!("Skipping meal plan entry for unknown recipe '{}'", entry.recipe_id);
            continue;
        };

        let Some(multiplier) = entry_multiplier(recipe, entry) else {
            continue;
        };

        for ingredient in &recipe.ingredients {
            let amount = ingredient.amount * multiplier;
            if !amount.is_finite() || amount <= 0.0 {
                warn!(
                    "Rejecting ingredient '{}' of recipe '{}' with amount {}",
                    ingredient.name, recipe.id, amount
                );
                continue;
            }

            lines.push(RawIngredientLine {
                name: ingredient.name.clone(),
                amount,
                unit: ingredient.unit.trim().to_string(),
                category: Category::parse(&ingredient.category),
                source_recipe_id: recipe.id.clone(),
            });
        }
    }

    info!(
        "Extracted {} ingredient lines from {} meal plan entries",
        lines.len(),
        meal_plan.len()
    );
    lines
}

/// Multiplier for one plan entry, `None` when its servings are unusable
fn entry_multiplier(recipe: &Recipe, entry: &MealPlanEntry) -> Option<f64> {
    if !entry.has_usable_servings() {
        warn!(
            "Ignoring meal plan entry for '{}' with servings {:?}",
            recipe.id, entry.servings
        );
        return None;
    }

    let Some(servings) = entry.servings else {
        return Some(1.0);
    };

    match recipe.servings {
        Some(base) if base.is_finite() && base > 0.0 => Some(servings / base),
        _ => Some(servings),
    }
}
