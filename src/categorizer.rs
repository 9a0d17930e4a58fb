//! Keyword-based shopping category inference.
//!
//! Used when a recipe author left an ingredient's category blank. Keywords are
//! matched as whole words of the lowercased name, each word optionally followed by
//! a plural "s" or "es", so "ham" matches "ham hocks" but not "graham crackers".
//! Longest keyword first, so more specific entries ("dried basil") win over
//! general ones ("basil").

use crate::ingredient_model::Category;
use log::trace;
use std::sync::LazyLock;

const KEYWORDS: &[(&str, Category)] = &[
    // Produce
    ("apple", Category::Produce),
    ("avocado", Category::Produce),
    ("banana", Category::Produce),
    ("basil", Category::Produce),
    ("bell pepper", Category::Produce),
    ("broccoli", Category::Produce),
    ("cabbage", Category::Produce),
    ("carrot", Category::Produce),
    ("celery", Category::Produce),
    ("cilantro", Category::Produce),
    ("cucumber", Category::Produce),
    ("eggplant", Category::Produce),
    ("garlic", Category::Produce),
    ("ginger", Category::Produce),
    ("jalapeno", Category::Produce),
    ("kale", Category::Produce),
    ("lemon", Category::Produce),
    ("lettuce", Category::Produce),
    ("lime", Category::Produce),
    ("mushroom", Category::Produce),
    ("onion", Category::Produce),
    ("parsley", Category::Produce),
    ("potato", Category::Produce),
    ("shallot", Category::Produce),
    ("spinach", Category::Produce),
    ("tomato", Category::Produce),
    ("zucchini", Category::Produce),
    // Meat
    ("bacon", Category::Meat),
    ("beef", Category::Meat),
    ("chicken", Category::Meat),
    ("ham", Category::Meat),
    ("lamb", Category::Meat),
    ("pork", Category::Meat),
    ("sausage", Category::Meat),
    ("steak", Category::Meat),
    ("turkey", Category::Meat),
    // Seafood
    ("cod", Category::Seafood),
    ("crab", Category::Seafood),
    ("fish", Category::Seafood),
    ("prawn", Category::Seafood),
    ("salmon", Category::Seafood),
    ("shrimp", Category::Seafood),
    ("tuna", Category::Seafood),
    // Dairy
    ("butter", Category::Dairy),
    ("cheese", Category::Dairy),
    ("cream", Category::Dairy),
    ("egg", Category::Dairy),
    ("milk", Category::Dairy),
    ("parmesan", Category::Dairy),
    ("yogurt", Category::Dairy),
    // Bakery
    ("bagel", Category::Bakery),
    ("bread", Category::Bakery),
    ("bun", Category::Bakery),
    ("tortilla", Category::Bakery),
    // Pantry
    ("avocado oil", Category::Pantry),
    ("bean", Category::Pantry),
    ("broth", Category::Pantry),
    ("beef broth", Category::Pantry),
    ("chicken broth", Category::Pantry),
    ("chicken stock", Category::Pantry),
    ("chickpea", Category::Pantry),
    ("coconut milk", Category::Pantry),
    ("cream of tartar", Category::Pantry),
    ("flour", Category::Pantry),
    ("honey", Category::Pantry),
    ("noodle", Category::Pantry),
    ("oil", Category::Pantry),
    ("pasta", Category::Pantry),
    ("peanut butter", Category::Pantry),
    ("rice", Category::Pantry),
    ("soy sauce", Category::Pantry),
    ("stock", Category::Pantry),
    ("sugar", Category::Pantry),
    ("vinegar", Category::Pantry),
    // Spices
    ("black pepper", Category::Spices),
    ("chili powder", Category::Spices),
    ("cinnamon", Category::Spices),
    ("cumin", Category::Spices),
    ("dried basil", Category::Spices),
    ("dried oregano", Category::Spices),
    ("dried parsley", Category::Spices),
    ("garlic powder", Category::Spices),
    ("ground ginger", Category::Spices),
    ("nutmeg", Category::Spices),
    ("onion powder", Category::Spices),
    ("oregano", Category::Spices),
    ("paprika", Category::Spices),
    ("salt", Category::Spices),
    ("thyme", Category::Spices),
    ("turmeric", Category::Spices),
    // Frozen
    ("frozen", Category::Frozen),
    ("ice cream", Category::Frozen),
    // Beverages
    ("coffee", Category::Beverages),
    ("juice", Category::Beverages),
    ("tea", Category::Beverages),
    ("wine", Category::Beverages),
];

/// Keyword table sorted by keyword length, longest first, ties alphabetical
static KEYWORD_TABLE: LazyLock<Vec<(&'static str, Category)>> = LazyLock::new(|| {
    let mut table: Vec<(&'static str, Category)> = KEYWORDS.to_vec();
    table.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(b.0)));
    table
});

/// Categorize an ingredient by name.
///
/// Returns [`Category::Other`] if no keyword matches.
pub fn categorize(name: &str) -> Category {
    let lower = name.to_lowercase();
    let words: Vec<&str> = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect();

    for (keyword, category) in KEYWORD_TABLE.iter() {
        if contains_phrase(&words, keyword) {
            trace!("Categorized '{}' as {} via '{}'", name, category, keyword);
            return category.clone();
        }
    }

    Category::Other
}

/// Whether `phrase` occurs as consecutive whole words in `words`
fn contains_phrase(words: &[&str], phrase: &str) -> bool {
    let parts: Vec<&str> = phrase.split_whitespace().collect();
    if parts.is_empty() || parts.len() > words.len() {
        return false;
    }

    words.windows(parts.len()).any(|window| {
        window
            .iter()
            .zip(&parts)
            .all(|(word, part)| word_matches(word, part))
    })
}

fn word_matches(word: &str, keyword: &str) -> bool {
    match word.strip_prefix(keyword) {
        Some(rest) => rest.is_empty() || rest == "s" || rest == "es",
        None => false,
    }
}
