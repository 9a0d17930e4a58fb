//! # Consolidation Configuration Module
//!
//! This module defines the knobs of the consolidation pipeline and how they are
//! read from the environment. Every value has a default, so an empty environment
//! yields [`ConsolidationConfig::default`].
//!
//! | Variable | Values | Default |
//! |---|---|---|
//! | `SHOPPING_LIST_UNIT_MERGE` | `convert`, `same-unit`, `sum-all` | `convert` |
//! | `SHOPPING_LIST_INFER_CATEGORIES` | `true`, `false` | `true` |
//! | `SHOPPING_LIST_MAX_RECIPES` | `unlimited`, `disabled`, a number | `unlimited` |

use crate::errors::ConfigError;
use log::debug;
use std::env;
use std::str::FromStr;

pub const UNIT_MERGE_VAR: &str = "SHOPPING_LIST_UNIT_MERGE";
pub const INFER_CATEGORIES_VAR: &str = "SHOPPING_LIST_INFER_CATEGORIES";
pub const MAX_RECIPES_VAR: &str = "SHOPPING_LIST_MAX_RECIPES";

/// How lines with the same canonical name but different units are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitMergePolicy {
    /// Merge identical units, convert between units of the same dimension,
    /// keep incompatible units as separate items
    #[default]
    Convert,
    /// Merge only identical units
    SameUnit,
    /// Sum every amount under a name regardless of unit
    SumAll,
}

/// A plan feature resolved once at load time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeatureLimit {
    #[default]
    Unlimited,
    Count(u32),
    Disabled,
}

/// Configuration for the consolidation pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct ConsolidationConfig {
    /// Cross-unit merge behavior
    pub unit_merge: UnitMergePolicy,
    /// Whether blank categories are inferred from the ingredient name
    pub infer_missing_categories: bool,
    /// Recipes a single shopping list may be generated from
    pub max_recipes: FeatureLimit,
}

impl Default for ConsolidationConfig {
    fn default() -> Self {
        Self {
            unit_merge: UnitMergePolicy::default(),
            infer_missing_categories: true,
            max_recipes: FeatureLimit::default(),
        }
    }
}

impl ConsolidationConfig {
    /// Read the configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(UNIT_MERGE_VAR) {
            config.unit_merge = parse_value(UNIT_MERGE_VAR, &value)?;
        }
        if let Some(value) = lookup(INFER_CATEGORIES_VAR) {
            config.infer_missing_categories = parse_value(INFER_CATEGORIES_VAR, &value)?;
        }
        if let Some(value) = lookup(MAX_RECIPES_VAR) {
            config.max_recipes = parse_value(MAX_RECIPES_VAR, &value)?;
        }

        debug!(
            "Loaded consolidation config: unit_merge={:?}, infer_categories={}, max_recipes={:?}",
            config.unit_merge, config.infer_missing_categories, config.max_recipes
        );
        Ok(config)
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

impl FromStr for UnitMergePolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "convert" => Ok(UnitMergePolicy::Convert),
            "same-unit" | "same_unit" => Ok(UnitMergePolicy::SameUnit),
            "sum-all" | "sum_all" => Ok(UnitMergePolicy::SumAll),
            _ => Err(()),
        }
    }
}

impl FromStr for FeatureLimit {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unlimited" => Ok(FeatureLimit::Unlimited),
            "disabled" | "false" => Ok(FeatureLimit::Disabled),
            number => number.parse().map(FeatureLimit::Count).map_err(|_| ()),
        }
    }
}

impl FeatureLimit {
    /// Whether `requested` uses of the feature are within the limit
    pub fn allows(&self, requested: usize) -> bool {
        match self {
            FeatureLimit::Unlimited => true,
            FeatureLimit::Count(limit) => requested <= *limit as usize,
            FeatureLimit::Disabled => false,
        }
    }
}
