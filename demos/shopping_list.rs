//! # Shopping List Example
//!
//! Builds a small week of meals and walks through the consolidation pipeline:
//! name cleaning, synonym folding, merging across recipes and unit policies,
//! and pantry exclusions.

use shopping_list::aggregator::Aggregator;
use shopping_list::config::{ConsolidationConfig, UnitMergePolicy};
use shopping_list::extractor::extract_ingredients;
use shopping_list::ingredient_model::{MealPlanEntry, Recipe, RecipeIngredient};
use shopping_list::name_cleaner::clean;
use shopping_list::shopping_list::{generate_shopping_list, ShoppingListGenerator, ShoppingListRequest};
use shopping_list::synonyms::canonicalize;

fn recipes() -> Vec<Recipe> {
    vec![
        Recipe::new("soup", "Carrot & Ginger Soup")
            .with_servings(4.0)
            .with_ingredient(RecipeIngredient::new("medium carrots", 6.0, "piece", "Produce"))
            .with_ingredient(RecipeIngredient::new("chicken stock", 4.0, "cup", "Pantry"))
            .with_ingredient(RecipeIngredient::new("2 garlic cloves", 2.0, "piece", "Produce"))
            .with_ingredient(RecipeIngredient::new("tablespoon olive oil", 2.0, "tbsp", "Pantry"))
            .with_ingredient(RecipeIngredient::new("salt to taste", 1.0, "pinch", "Spices")),
        Recipe::new("stir-fry", "Chicken Stir-Fry")
            .with_servings(2.0)
            .with_ingredient(RecipeIngredient::new("chicken breasts", 1.0, "lb", "Meat"))
            .with_ingredient(RecipeIngredient::new("large bell peppers", 2.0, "piece", "Other"))
            .with_ingredient(RecipeIngredient::new("N/A garlic", 1.0, "piece", ""))
            .with_ingredient(RecipeIngredient::new("olive oil", 0.25, "cup", "Pantry"))
            .with_ingredient(RecipeIngredient::new("chicken broth", 0.5, "cup", "")),
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🛒 Shopping List Consolidation Example");
    println!("======================================\n");

    // Example 1: What the cleaner and canonicalizer do to names
    println!("🧹 Example 1: Name Cleaning");
    println!("---------------------------");

    for raw in ["2 large red bell peppers", "N/A garlic cloves", "1/2 cup milk", "pepper to taste", "2 tbsp"] {
        let cleaned = clean(raw);
        if cleaned.is_empty() {
            println!("  \"{}\" → dropped", raw);
        } else {
            println!("  \"{}\" → \"{}\" → \"{}\"", raw, cleaned, canonicalize(&cleaned));
        }
    }

    println!("\n");

    // Example 2: Full pipeline with the default configuration
    println!("📋 Example 2: Weekly Shopping List");
    println!("----------------------------------");

    let recipes = recipes();
    let meal_plan = vec![
        MealPlanEntry::with_servings("soup", 2.0),
        MealPlanEntry::with_servings("stir-fry", 4.0),
        MealPlanEntry::new("leftovers"),
    ];

    let items = generate_shopping_list(&recipes, &meal_plan, None);
    for item in &items {
        println!("  - {} (from {})", item, item.source_recipe_ids.join(", "));
    }

    println!("\n");

    // Example 3: Unit merge policies side by side
    println!("⚖️  Example 3: Unit Merge Policies");
    println!("---------------------------------");

    for policy in [UnitMergePolicy::Convert, UnitMergePolicy::SameUnit, UnitMergePolicy::SumAll] {
        let aggregator = Aggregator::with_config(ConsolidationConfig {
            unit_merge: policy,
            ..Default::default()
        });
        let items = aggregator.aggregate(extract_ingredients(&recipes, &meal_plan));
        let oil: Vec<String> = items
            .iter()
            .filter(|item| item.is_named("olive oil"))
            .map(|item| item.to_string())
            .collect();
        println!("  {:?}: {}", policy, oil.join(" + "));
    }

    println!("\n");

    // Example 4: Pantry exclusions
    println!("🏠 Example 4: Pantry Exclusions");
    println!("-------------------------------");

    let pantry = vec!["Olive Oil".to_string(), "garlic".to_string()];
    let items = generate_shopping_list(&recipes, &meal_plan, Some(pantry.as_slice()));
    println!("Excluding {:?}, {} items remain:", pantry, items.len());
    for item in &items {
        println!("  - {}", item);
    }

    println!("\n");

    // Example 5: A validated request as the service layer would send it
    println!("📨 Example 5: Request Handling");
    println!("------------------------------");

    let request = ShoppingListRequest {
        recipes,
        meal_plan: vec![MealPlanEntry::new("missing")],
        pantry_exclusions: None,
    };

    match ShoppingListGenerator::new().handle(&request) {
        Ok(list) => println!("Generated {} items", list.items.len()),
        Err(e) => println!("Rejected: {}", e),
    }

    Ok(())
}
