//! # Shopping List Generation
//!
//! The public entry point of the crate: recipes and a meal plan go in, a
//! consolidated shopping list comes out.
//!
//! ```text
//! recipes + meal plan -> extractor -> cleaner -> canonicalizer -> aggregator -> pantry filter
//! ```
//!
//! [`generate_shopping_list`] is the pure pipeline. [`ShoppingListGenerator::handle`]
//! wraps it with the request validation a service layer performs before calling in.
//!
//! ## Usage
//!
//! ```rust
//! use shopping_list::ingredient_model::{MealPlanEntry, Recipe, RecipeIngredient};
//! use shopping_list::shopping_list::generate_shopping_list;
//!
//! let recipes = vec![Recipe::new("soup", "Soup")
//!     .with_ingredient(RecipeIngredient::new("medium carrots", 3.0, "piece", "Produce"))
//!     .with_ingredient(RecipeIngredient::new("tablespoon olive oil", 2.0, "tbsp", "Pantry"))];
//! let plan = vec![MealPlanEntry::new("soup")];
//! let exclusions = vec!["Olive Oil".to_string()];
//!
//! let items = generate_shopping_list(&recipes, &plan, Some(exclusions.as_slice()));
//! assert_eq!(items.len(), 1);
//! assert_eq!(items[0].name, "carrot");
//! ```

use crate::aggregator::Aggregator;
use crate::config::{ConsolidationConfig, FeatureLimit};
use crate::errors::ShoppingListError;
use crate::extractor::extract_ingredients;
use crate::ingredient_model::{ConsolidatedItem, MealPlanEntry, Recipe};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// A shopping list generation request as received by the service layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListRequest {
    pub recipes: Vec<Recipe>,
    pub meal_plan: Vec<MealPlanEntry>,
    #[serde(default)]
    pub pantry_exclusions: Option<Vec<String>>,
}

/// A generated shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    pub items: Vec<ConsolidatedItem>,
    /// Distinct planned recipes the list was built from
    pub recipe_count: usize,
    pub generated_at: DateTime<Utc>,
}

/// Generate a consolidated shopping list with the default configuration
pub fn generate_shopping_list(
    recipes: &[Recipe],
    meal_plan: &[MealPlanEntry],
    pantry_exclusions: Option<&[String]>,
) -> Vec<ConsolidatedItem> {
    ShoppingListGenerator::new().generate(recipes, meal_plan, pantry_exclusions)
}

/// Remove items the user already has on hand
///
/// An item is removed when its name equals an exclusion, ignoring case and
/// surrounding whitespace. Blank exclusions match nothing.
pub fn apply_pantry_exclusions(items: Vec<ConsolidatedItem>, exclusions: &[String]) -> Vec<ConsolidatedItem> {
    let excluded: Vec<&str> = exclusions
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .collect();

    if excluded.is_empty() {
        return items;
    }

    items
        .into_iter()
        .filter(|item| {
            let keep = !excluded.iter().any(|name| item.is_named(name));
            if !keep {
                debug!("Excluding pantry item '{}'", item.name);
            }
            keep
        })
        .collect()
}

/// Load a request from a JSON file
pub fn load_request(path: impl AsRef<Path>) -> Result<ShoppingListRequest> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file {}", path.display()))?;
    let request = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse request file {}", path.display()))?;
    Ok(request)
}

/// Shopping list pipeline bound to a configuration
#[derive(Debug, Clone, Default)]
pub struct ShoppingListGenerator {
    config: ConsolidationConfig,
}

impl ShoppingListGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ConsolidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConsolidationConfig {
        &self.config
    }

    /// Run the pipeline: extract, clean, canonicalize, aggregate, exclude
    pub fn generate(
        &self,
        recipes: &[Recipe],
        meal_plan: &[MealPlanEntry],
        pantry_exclusions: Option<&[String]>,
    ) -> Vec<ConsolidatedItem> {
        let lines = extract_ingredients(recipes, meal_plan);
        let items = Aggregator::with_config(self.config.clone()).aggregate(lines);

        match pantry_exclusions {
            Some(exclusions) => apply_pantry_exclusions(items, exclusions),
            None => items,
        }
    }

    /// Validate a request and generate its shopping list
    pub fn handle(&self, request: &ShoppingListRequest) -> Result<ShoppingList, ShoppingListError> {
        let recipe_count = request.validate(&self.config.max_recipes)?;

        let items = self.generate(
            &request.recipes,
            &request.meal_plan,
            request.pantry_exclusions.as_deref(),
        );

        info!(
            "Generated shopping list with {} items from {} recipes",
            items.len(),
            recipe_count
        );

        Ok(ShoppingList {
            items,
            recipe_count,
            generated_at: Utc::now(),
        })
    }
}

impl ShoppingListRequest {
    /// Check the request before it reaches the pipeline
    ///
    /// Returns the number of distinct planned recipes that were supplied and are
    /// planned with usable servings, i.e. the recipes the list will be built from.
    pub fn validate(&self, limit: &FeatureLimit) -> Result<usize, ShoppingListError> {
        if *limit == FeatureLimit::Disabled {
            return Err(ShoppingListError::FeatureDisabled);
        }

        if self.meal_plan.is_empty() {
            return Err(ShoppingListError::EmptyMealPlan);
        }

        let supplied: HashSet<&str> = self.recipes.iter().map(|r| r.id.as_str()).collect();
        let planned: HashSet<&str> = self
            .meal_plan
            .iter()
            .filter(|entry| entry.has_usable_servings())
            .map(|entry| entry.recipe_id.as_str())
            .filter(|id| supplied.contains(id))
            .collect();

        if planned.is_empty() {
            warn!("None of the {} planned recipes were supplied", self.meal_plan.len());
            return Err(ShoppingListError::NoRecipesFound);
        }

        if let FeatureLimit::Count(max) = limit {
            if !limit.allows(planned.len()) {
                return Err(ShoppingListError::RecipeLimitExceeded {
                    requested: planned.len(),
                    limit: *max,
                });
            }
        }

        Ok(planned.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingredient_model::{Category, RecipeIngredient};

    fn item(name: &str) -> ConsolidatedItem {
        ConsolidatedItem {
            name: name.to_string(),
            amount: 1.0,
            unit: "piece".to_string(),
            category: Category::Other,
            source_recipe_ids: Vec::new(),
        }
    }

    fn request(plan: Vec<MealPlanEntry>) -> ShoppingListRequest {
        ShoppingListRequest {
            recipes: vec![
                Recipe::new("a", "A").with_ingredient(RecipeIngredient::new("rice", 1.0, "cup", "Pantry")),
                Recipe::new("b", "B").with_ingredient(RecipeIngredient::new("rice", 2.0, "cup", "Pantry")),
            ],
            meal_plan: plan,
            pantry_exclusions: None,
        }
    }

    #[test]
    fn test_exclusions_case_insensitive() {
        let items = vec![item("Olive Oil"), item("carrot"), item("olive oil spray")];
        let kept = apply_pantry_exclusions(items, &["olive OIL ".to_string()]);

        let names: Vec<&str> = kept.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["carrot", "olive oil spray"]);
    }

    #[test]
    fn test_exclusions_agree_with_is_named() {
        let items = vec![item("Chicken Broth"), item("carrot"), item(" garlic ")];
        let exclusions = vec!["chicken broth".to_string(), "GARLIC".to_string()];

        let kept = apply_pantry_exclusions(items.clone(), &exclusions);

        for original in &items {
            let excluded = exclusions.iter().any(|name| original.is_named(name));
            assert_eq!(kept.contains(original), !excluded, "item '{}'", original.name);
        }
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_blank_exclusions_ignored() {
        let kept = apply_pantry_exclusions(vec![item("carrot")], &["  ".to_string()]);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_validate_counts_distinct_supplied_recipes() {
        let req = request(vec![
            MealPlanEntry::new("a"),
            MealPlanEntry::new("a"),
            MealPlanEntry::new("b"),
            MealPlanEntry::new("missing"),
        ]);
        assert_eq!(req.validate(&FeatureLimit::Unlimited), Ok(2));
    }

    #[test]
    fn test_validate_rejections() {
        assert_eq!(
            request(vec![]).validate(&FeatureLimit::Unlimited),
            Err(ShoppingListError::EmptyMealPlan)
        );
        assert_eq!(
            request(vec![MealPlanEntry::new("missing")]).validate(&FeatureLimit::Unlimited),
            Err(ShoppingListError::NoRecipesFound)
        );
        assert_eq!(
            request(vec![MealPlanEntry::new("a")]).validate(&FeatureLimit::Disabled),
            Err(ShoppingListError::FeatureDisabled)
        );
        assert_eq!(
            request(vec![MealPlanEntry::new("a"), MealPlanEntry::new("b")])
                .validate(&FeatureLimit::Count(1)),
            Err(ShoppingListError::RecipeLimitExceeded { requested: 2, limit: 1 })
        );
    }

    #[test]
    fn test_validate_ignores_unusable_servings() {
        let req = request(vec![
            MealPlanEntry::with_servings("a", 0.0),
            MealPlanEntry::with_servings("b", f64::NAN),
        ]);
        assert_eq!(
            req.validate(&FeatureLimit::Unlimited),
            Err(ShoppingListError::NoRecipesFound)
        );

        let req = request(vec![
            MealPlanEntry::with_servings("a", -1.0),
            MealPlanEntry::with_servings("b", 2.0),
        ]);
        assert_eq!(req.validate(&FeatureLimit::Count(1)), Ok(1));
    }

    #[test]
    fn test_handle_rejects_plan_without_usable_entries() {
        let generator = ShoppingListGenerator::new();
        let err = generator
            .handle(&request(vec![MealPlanEntry::with_servings("a", 0.0)]))
            .unwrap_err();
        assert_eq!(err, ShoppingListError::NoRecipesFound);
    }

    #[test]
    fn test_handle_generates_list() {
        let generator = ShoppingListGenerator::new();
        let list = generator
            .handle(&request(vec![MealPlanEntry::new("a"), MealPlanEntry::new("b")]))
            .unwrap();

        assert_eq!(list.recipe_count, 2);
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].name, "rice");
        assert_eq!(list.items[0].amount, 3.0);
    }
}
