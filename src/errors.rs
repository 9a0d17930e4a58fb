//! # Error Types Module
//!
//! Errors raised around the consolidation pipeline. The pipeline itself never
//! fails; these cover request validation at the service boundary and
//! configuration loading.

/// Request-level failures, reported to the user before the pipeline runs
#[derive(Debug, Clone, PartialEq)]
pub enum ShoppingListError {
    /// The request carried no meal plan entries
    EmptyMealPlan,
    /// None of the planned recipes were supplied
    NoRecipesFound,
    /// Shopping list generation is not part of the caller's plan
    FeatureDisabled,
    /// More recipes were planned than the caller's plan allows
    RecipeLimitExceeded { requested: usize, limit: u32 },
}

impl std::fmt::Display for ShoppingListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShoppingListError::EmptyMealPlan => write!(f, "meal plan is empty"),
            ShoppingListError::NoRecipesFound => write!(f, "no recipes found in meal plan"),
            ShoppingListError::FeatureDisabled => {
                write!(f, "shopping list generation is not available on this plan")
            }
            ShoppingListError::RecipeLimitExceeded { requested, limit } => write!(
                f,
                "meal plan has {requested} recipes but this plan allows at most {limit}"
            ),
        }
    }
}

impl std::error::Error for ShoppingListError {}

/// Configuration loading failures
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// An environment value could not be parsed
    InvalidValue { key: String, value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Invalid value for {key}: '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ShoppingListError::NoRecipesFound.to_string(),
            "no recipes found in meal plan"
        );
        assert_eq!(
            ShoppingListError::RecipeLimitExceeded { requested: 9, limit: 7 }.to_string(),
            "meal plan has 9 recipes but this plan allows at most 7"
        );
        assert_eq!(
            ConfigError::InvalidValue {
                key: "SHOPPING_LIST_MAX_RECIPES".to_string(),
                value: "lots".to_string()
            }
            .to_string(),
            "Invalid value for SHOPPING_LIST_MAX_RECIPES: 'lots'"
        );
    }
}
