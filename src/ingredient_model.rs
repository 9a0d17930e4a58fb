//! # Recipe and Shopping List Data Model
//!
//! This module defines the data structures flowing through the consolidation
//! pipeline: the recipes and meal plan handed in by the caller, the flattened
//! ingredient lines produced by the extractor, and the consolidated items
//! that make up the final shopping list.
//!
//! ## Core Concepts
//!
//! - **Recipe**: A named ingredient list with an optional base yield
//! - **MealPlanEntry**: A planned recipe with the number of servings wanted
//! - **RawIngredientLine**: One scaled ingredient line tagged with its recipe
//! - **ConsolidatedItem**: One line of the generated shopping list
//! - **Category**: Coarse shopping aisle used to group items
//!
//! ## Usage
//!
//! ```rust
//! use shopping_list::ingredient_model::{Category, Recipe, RecipeIngredient};
//!
//! let recipe = Recipe::new("soup", "Carrot soup")
//!     .with_servings(4.0)
//!     .with_ingredient(RecipeIngredient::new("medium carrots", 3.0, "piece", "Produce"));
//!
//! assert_eq!(recipe.ingredients[0].category, "Produce");
//! assert_eq!(Category::from("produce"), Category::Produce);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A recipe as supplied by the persistence layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Recipe identifier, referenced by meal plan entries
    pub id: String,

    /// Human readable recipe title
    #[serde(default)]
    pub name: String,

    /// Base number of servings the ingredient amounts are written for
    #[serde(default)]
    pub servings: Option<f64>,

    /// Ingredient lines as authored
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
}

/// One ingredient line of a recipe, before scaling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Free-text name, may still carry quantity or size words ("2 large red bell peppers")
    pub name: String,

    /// Amount for the recipe's base yield
    pub amount: f64,

    /// Free-text unit ("tbsp", "piece", "cup"), possibly empty
    #[serde(default)]
    pub unit: String,

    /// Author-supplied shopping category, possibly empty or inconsistent
    #[serde(default)]
    pub category: String,
}

/// A planned recipe and how many servings of it are wanted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanEntry {
    /// Identifier of the planned recipe
    pub recipe_id: String,

    /// Requested servings; absent means "as written"
    #[serde(default)]
    pub servings: Option<f64>,
}

/// A scaled ingredient line flattened out of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIngredientLine {
    /// Free-text ingredient name, uncleaned
    pub name: String,

    /// Scaled amount
    pub amount: f64,

    /// Free-text unit, possibly empty
    pub unit: String,

    /// Author category, `None` when left blank
    pub category: Option<Category>,

    /// Recipe this line came from, kept for traceability only
    pub source_recipe_id: String,
}

/// One consolidated line of the shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidatedItem {
    /// Canonical display name
    pub name: String,

    /// Summed amount, expressed in `unit`
    pub amount: f64,

    /// Unit label of the first contributing line
    pub unit: String,

    /// Resolved shopping category
    pub category: Category,

    /// Distinct contributing recipes, in first-seen order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub source_recipe_ids: Vec<String>,
}

/// Coarse shopping category used to bucket items
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Produce,
    Meat,
    Seafood,
    Dairy,
    Bakery,
    Pantry,
    Spices,
    Frozen,
    Beverages,
    Other,
    /// Author label that matches none of the known categories, kept verbatim
    Custom(String),
}

impl Recipe {
    /// Create an empty recipe
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            servings: None,
            ingredients: Vec::new(),
        }
    }

    /// Set the base number of servings
    pub fn with_servings(mut self, servings: f64) -> Self {
        self.servings = Some(servings);
        self
    }

    /// Append an ingredient line
    pub fn with_ingredient(mut self, ingredient: RecipeIngredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }
}

impl RecipeIngredient {
    pub fn new(name: &str, amount: f64, unit: &str, category: &str) -> Self {
        Self {
            name: name.to_string(),
            amount,
            unit: unit.to_string(),
            category: category.to_string(),
        }
    }
}

impl MealPlanEntry {
    /// Plan a recipe as written
    pub fn new(recipe_id: &str) -> Self {
        Self {
            recipe_id: recipe_id.to_string(),
            servings: None,
        }
    }

    /// Plan a recipe for a given number of servings
    pub fn with_servings(recipe_id: &str, servings: f64) -> Self {
        Self {
            recipe_id: recipe_id.to_string(),
            servings: Some(servings),
        }
    }

    /// Whether the requested servings can scale a recipe: absent, or finite and positive
    pub fn has_usable_servings(&self) -> bool {
        match self.servings {
            None => true,
            Some(servings) => servings.is_finite() && servings > 0.0,
        }
    }
}

impl RawIngredientLine {
    /// Build a line directly, mostly useful when feeding the aggregator by hand
    pub fn new(name: &str, amount: f64, unit: &str, category: Option<Category>) -> Self {
        Self {
            name: name.to_string(),
            amount,
            unit: unit.to_string(),
            category,
            source_recipe_id: String::new(),
        }
    }

    /// Tag the line with its contributing recipe
    pub fn from_recipe(mut self, recipe_id: &str) -> Self {
        self.source_recipe_id = recipe_id.to_string();
        self
    }
}

impl Category {
    /// Parse an author label; blank labels carry no category
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        if label.is_empty() {
            None
        } else {
            Some(Self::from(label))
        }
    }

    /// Display name of the category
    pub fn as_str(&self) -> &str {
        match self {
            Category::Produce => "Produce",
            Category::Meat => "Meat",
            Category::Seafood => "Seafood",
            Category::Dairy => "Dairy",
            Category::Bakery => "Bakery",
            Category::Pantry => "Pantry",
            Category::Spices => "Spices",
            Category::Frozen => "Frozen",
            Category::Beverages => "Beverages",
            Category::Other => "Other",
            Category::Custom(label) => label,
        }
    }

    /// Whether this is the catch-all bucket
    pub fn is_other(&self) -> bool {
        matches!(self, Category::Other)
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        let label = label.trim();
        match label.to_lowercase().as_str() {
            "produce" => Category::Produce,
            "meat" => Category::Meat,
            "seafood" => Category::Seafood,
            "dairy" => Category::Dairy,
            "bakery" => Category::Bakery,
            "pantry" => Category::Pantry,
            "spices" => Category::Spices,
            "frozen" => Category::Frozen,
            "beverages" => Category::Beverages,
            "other" | "" => Category::Other,
            _ => Category::Custom(label.to_string()),
        }
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Category::from(label.as_str())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ConsolidatedItem {
    /// Whether the item's name matches `name`, ignoring case and surrounding whitespace
    pub fn is_named(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }
}

impl fmt::Display for ConsolidatedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.amount.fract() == 0.0 {
            write!(f, "{}", self.amount as i64)?;
        } else {
            let rounded = format!("{:.2}", self.amount);
            write!(f, "{}", rounded.trim_end_matches('0').trim_end_matches('.'))?;
        }

        if !self.unit.is_empty() {
            write!(f, " {}", self.unit)?;
        }

        write!(f, " {} [{}]", self.name, self.category)
    }
}
