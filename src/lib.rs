//! # Shopping List
//!
//! Consolidates the ingredients of a meal plan's recipes into a single shopping
//! list: names are cleaned of quantity and unit noise, folded onto canonical
//! synonyms, merged per compatible unit and bucketed into shopping categories.

pub mod aggregator;
pub mod categorizer;
pub mod config;
pub mod errors;
pub mod extractor;
pub mod ingredient_model;
pub mod logging;
pub mod measurement_patterns;
pub mod name_cleaner;
pub mod shopping_list;
pub mod synonyms;
pub mod units;
