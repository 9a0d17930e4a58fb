//! # Measurement Patterns Module
//!
//! This module contains the regex patterns and word lists the name cleaner uses
//! to recognise quantity and unit noise inside free-text ingredient names.

use lazy_static::lazy_static;
use std::collections::HashSet;
use regex::Regex;

// Leading "N/A" placeholder left behind by incomplete recipe imports
pub const NA_PREFIX_PATTERN: &str = r"(?i)^\s*n/a(?:\s+|$)";

// A whole token that is only a quantity: integers, decimals, fractions, unicode fractions and ranges of those
pub const QUANTITY_TOKEN_PATTERN: &str = r"^(?:\d+(?:[.,]\d+)?|\d+[/⁄]\d+|\d*[½⅓⅔¼¾⅕⅖⅗⅘⅙⅚⅛⅜⅝⅞])(?:[-–](?:\d+(?:[.,]\d+)?|\d+[/⁄]\d+|\d*[½⅓⅔¼¾⅕⅖⅗⅘⅙⅚⅛⅜⅝⅞]))?$";

/// Unit and size words removed from ingredient names, compared lowercase
pub const NOISE_WORDS: &[&str] = &[
    // Volume
    "tablespoon", "tablespoons", "tbsp", "teaspoon", "teaspoons", "tsp", "cup", "cups",
    "milliliter", "milliliters", "ml", "liter", "liters", "l",
    // Weight
    "ounce", "ounces", "oz", "pound", "pounds", "lb", "lbs", "gram", "grams", "g",
    "kilogram", "kilograms", "kg",
    // Count
    "piece", "pieces", "whole", "pinch", "pinches", "clove", "cloves",
    // Size descriptors
    "medium", "large", "small",
];

lazy_static! {
    pub static ref NA_PREFIX_REGEX: Regex =
        Regex::new(NA_PREFIX_PATTERN).expect("N/A prefix pattern should be valid");
    pub static ref QUANTITY_TOKEN_REGEX: Regex =
        Regex::new(QUANTITY_TOKEN_PATTERN).expect("Quantity token pattern should be valid");
    pub static ref NOISE_WORD_SET: HashSet<&'static str> = NOISE_WORDS.iter().copied().collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_na_prefix() {
        assert!(NA_PREFIX_REGEX.is_match("N/A olive oil"));
        assert!(NA_PREFIX_REGEX.is_match("  n/a salt"));
        assert!(NA_PREFIX_REGEX.is_match("N/A"));
        assert!(!NA_PREFIX_REGEX.is_match("N/Avocado"));
        assert!(!NA_PREFIX_REGEX.is_match("olive oil N/A"));
    }

    #[test]
    fn test_quantity_tokens() {
        let quantities = ["2", "1.5", "0,5", "1/2", "3⁄4", "½", "1½", "2-3", "1/2-1"];
        for token in quantities {
            assert!(QUANTITY_TOKEN_REGEX.is_match(token), "should match '{}'", token);
        }

        let words = ["2x", "500g", "a", "one", "7up", "-"];
        for token in words {
            assert!(!QUANTITY_TOKEN_REGEX.is_match(token), "should not match '{}'", token);
        }
    }

    #[test]
    fn test_noise_words() {
        assert!(NOISE_WORD_SET.contains("tbsp"));
        assert!(NOISE_WORD_SET.contains("cloves"));
        assert!(NOISE_WORD_SET.contains("large"));
        assert!(!NOISE_WORD_SET.contains("garlic"));
    }
}
