//! # Name Cleaner
//!
//! Strips quantity, unit and size noise out of free-text ingredient names so that
//! lines written differently by different recipe authors end up with the same
//! grouping key.
//!
//! ## Rules
//!
//! 1. A leading "N/A" placeholder is removed
//! 2. Anything mentioning "to taste" cleans to the empty string and is dropped downstream
//! 3. Unit/size words ("tbsp", "cloves", "large") are removed wherever they occur as
//!    whole words; quantity tokens ("2", "1/2", "½", "2-3") are removed when they open
//!    the name or stand directly before a unit word, so "Chinese 5 spice" keeps its 5
//! 4. Whitespace is collapsed
//!
//! ## Usage
//!
//! ```rust
//! use shopping_list::name_cleaner::clean;
//!
//! assert_eq!(clean("2 large red bell peppers"), "red bell peppers");
//! assert_eq!(clean("tablespoon olive oil"), "olive oil");
//! assert_eq!(clean("to taste Pepper"), "");
//! ```

use crate::measurement_patterns::{NA_PREFIX_REGEX, NOISE_WORD_SET, QUANTITY_TOKEN_REGEX};
use log::trace;

/// Clean a free-text ingredient name
///
/// The casing of the surviving words is preserved for display; callers that
/// need a grouping key lowercase the result (see [`crate::synonyms::canonicalize`]).
/// An empty result means the line carries no ingredient and should be dropped.
pub fn clean(name: &str) -> String {
    let without_placeholder = NA_PREFIX_REGEX.replace(name, "");
    let trimmed = without_placeholder.trim();

    if trimmed.to_lowercase().contains("to taste") {
        trace!("Dropping seasoning line '{}'", name);
        return String::new();
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    let mut kept: Vec<&str> = Vec::with_capacity(tokens.len());

    for (index, token) in tokens.iter().enumerate() {
        if is_noise_word(token) {
            continue;
        }

        // A number is a quantity when it opens the name or directly precedes a unit
        let leading = kept.is_empty();
        let before_unit = tokens.get(index + 1).is_some_and(|next| is_noise_word(next));
        if is_quantity(token) && (leading || before_unit) {
            continue;
        }

        kept.push(token);
    }

    let cleaned = kept.join(" ");

    let cleaned = cleaned
        .trim_end_matches(|c: char| matches!(c, ',' | ';' | ':'))
        .trim()
        .to_string();

    trace!("Cleaned ingredient name: '{}' -> '{}'", name, cleaned);
    cleaned
}

/// Whether the line would be dropped by the cleaner
pub fn is_droppable(name: &str) -> bool {
    clean(name).is_empty()
}

/// Token with surrounding punctuation removed
fn bare(token: &str) -> &str {
    token.trim_matches(|c: char| matches!(c, ',' | '.' | ';' | ':' | '(' | ')' | '[' | ']'))
}

/// Whether a token is a unit or size word
fn is_noise_word(token: &str) -> bool {
    let bare = bare(token);
    !bare.is_empty() && NOISE_WORD_SET.contains(bare.to_ascii_lowercase().as_str())
}

/// Whether a token is a number, fraction or range
fn is_quantity(token: &str) -> bool {
    let bare = bare(token);
    !bare.is_empty() && QUANTITY_TOKEN_REGEX.is_match(bare)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_unit_words() {
        assert_eq!(clean("tablespoon olive oil"), "olive oil");
        assert_eq!(clean("tbsp soy sauce"), "soy sauce");
        assert_eq!(clean("cups chicken broth"), "chicken broth");
        assert_eq!(clean("garlic cloves"), "garlic");
        assert_eq!(clean("cloves garlic"), "garlic");
        assert_eq!(clean("pinch salt"), "salt");
    }

    #[test]
    fn test_strips_size_descriptors() {
        assert_eq!(clean("medium carrots"), "carrots");
        assert_eq!(clean("large carrots"), "carrots");
        assert_eq!(clean("Small Onion"), "Onion");
        assert_eq!(clean("whole chicken"), "chicken");
    }

    #[test]
    fn test_strips_quantities() {
        assert_eq!(clean("2 large red bell peppers"), "red bell peppers");
        assert_eq!(clean("1/2 cup milk"), "milk");
        assert_eq!(clean("½ lemon"), "lemon");
        assert_eq!(clean("2-3 tomatoes"), "tomatoes");
    }

    #[test]
    fn test_whole_words_only() {
        // "l" and "g" are units only when they stand alone
        assert_eq!(clean("lemongrass"), "lemongrass");
        assert_eq!(clean("ginger"), "ginger");
        assert_eq!(clean("cupcake liners"), "cupcake liners");
        assert_eq!(clean("smallgoods"), "smallgoods");
        assert_eq!(clean("500g butter"), "500g butter");
    }

    #[test]
    fn test_case_insensitive_removal() {
        assert_eq!(clean("TBSP Olive Oil"), "Olive Oil");
        assert_eq!(clean("Large EGGS"), "EGGS");
    }

    #[test]
    fn test_to_taste_dropped() {
        assert_eq!(clean("to taste Pepper"), "");
        assert_eq!(clean("Salt, To Taste"), "");
        assert_eq!(clean("black pepper to taste"), "");
        assert!(is_droppable("salt to taste"));
    }

    #[test]
    fn test_na_placeholder() {
        assert_eq!(clean("N/A olive oil"), "olive oil");
        assert_eq!(clean("n/a   2 tbsp butter"), "butter");
        assert_eq!(clean("N/A"), "");
    }

    #[test]
    fn test_only_noise_cleans_to_empty() {
        assert_eq!(clean("2 tbsp"), "");
        assert_eq!(clean("1 large"), "");
        assert_eq!(clean("   "), "");
        assert_eq!(clean(""), "");
    }

    #[test]
    fn test_punctuation_and_whitespace() {
        assert_eq!(clean("  red   onion  "), "red onion");
        assert_eq!(clean("onion (large), "), "onion");
        assert_eq!(clean("tomatoes,"), "tomatoes");
    }

    #[test]
    fn test_numbers_inside_names_survive() {
        assert_eq!(clean("Chinese 5 spice powder"), "Chinese 5 spice powder");
        assert_eq!(clean("1 tsp Chinese 5 spice"), "Chinese 5 spice");
        assert_eq!(clean("tomato paste (2 tbsp)"), "tomato paste");
        assert_eq!(clean("1 1/2 cups rice"), "rice");
        // A leading number always reads as a quantity
        assert_eq!(clean("7 grain bread"), "grain bread");
    }

    #[test]
    fn test_deterministic() {
        let input = "3 medium Yukon Gold potatoes";
        assert_eq!(clean(input), clean(input));
        assert_eq!(clean(input), "Yukon Gold potatoes");
    }
}
