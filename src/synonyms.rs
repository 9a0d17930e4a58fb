//! # Synonym Canonicalizer
//!
//! Folds known spelling variants of an ingredient (plurals, preparation states,
//! stock/broth aliases, oil grades) onto one canonical name. The lookup is an exact
//! match on the lowercased cleaned name; anything not in the table is its own
//! canonical name.
//!
//! The table is hand-maintained. A merge that fails to happen in a generated
//! shopping list almost always means a variant is missing here.

use log::trace;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Variant -> canonical pairs, variants lowercase
const SYNONYM_PAIRS: &[(&str, &str)] = &[
    // Produce plurals
    ("carrots", "carrot"),
    ("onions", "onion"),
    ("red onions", "red onion"),
    ("yellow onions", "yellow onion"),
    ("green onions", "green onion"),
    ("scallions", "green onion"),
    ("scallion", "green onion"),
    ("spring onions", "green onion"),
    ("spring onion", "green onion"),
    ("tomatoes", "tomato"),
    ("cherry tomatoes", "cherry tomato"),
    ("potatoes", "potato"),
    ("sweet potatoes", "sweet potato"),
    ("bell peppers", "bell pepper"),
    ("red bell peppers", "red bell pepper"),
    ("green bell peppers", "green bell pepper"),
    ("yellow bell peppers", "yellow bell pepper"),
    ("lemons", "lemon"),
    ("limes", "lime"),
    ("avocados", "avocado"),
    ("mushrooms", "mushroom"),
    ("zucchinis", "zucchini"),
    ("cucumbers", "cucumber"),
    ("shallots", "shallot"),
    ("jalapenos", "jalapeno"),
    ("jalapeños", "jalapeno"),
    ("jalapeño", "jalapeno"),
    ("apples", "apple"),
    ("bananas", "banana"),
    ("celery stalks", "celery"),
    ("celery stalk", "celery"),
    ("celery ribs", "celery"),
    // Garlic
    ("garlic cloves", "garlic"),
    ("garlic clove", "garlic"),
    ("minced garlic", "garlic"),
    // Eggs
    ("eggs", "egg"),
    // Meat
    ("chicken breasts", "chicken breast"),
    ("boneless chicken breast", "chicken breast"),
    ("boneless chicken breasts", "chicken breast"),
    ("skinless chicken breast", "chicken breast"),
    ("boneless skinless chicken breast", "chicken breast"),
    ("boneless skinless chicken breasts", "chicken breast"),
    ("chicken thighs", "chicken thigh"),
    ("boneless chicken thighs", "chicken thigh"),
    ("lean ground beef", "ground beef"),
    ("minced beef", "ground beef"),
    ("beef mince", "ground beef"),
    ("bacon slices", "bacon"),
    ("bacon strips", "bacon"),
    // Seafood
    ("shrimps", "shrimp"),
    ("prawns", "shrimp"),
    ("salmon fillets", "salmon fillet"),
    // Stock and broth
    ("chicken stock", "chicken broth"),
    ("low sodium chicken broth", "chicken broth"),
    ("low-sodium chicken broth", "chicken broth"),
    ("vegetable stock", "vegetable broth"),
    ("veggie broth", "vegetable broth"),
    ("beef stock", "beef broth"),
    // Oils
    ("extra virgin olive oil", "olive oil"),
    ("extra-virgin olive oil", "olive oil"),
    ("evoo", "olive oil"),
    // Herbs
    ("fresh cilantro", "cilantro"),
    ("cilantro leaves", "cilantro"),
    ("coriander leaves", "cilantro"),
    ("fresh parsley", "parsley"),
    ("parsley leaves", "parsley"),
    ("fresh basil", "basil"),
    ("basil leaves", "basil"),
    ("fresh ginger", "ginger"),
    ("ginger root", "ginger"),
    // Dairy
    ("unsalted butter", "butter"),
    ("salted butter", "butter"),
    ("shredded cheddar cheese", "cheddar cheese"),
    ("parmesan", "parmesan cheese"),
    ("grated parmesan", "parmesan cheese"),
    ("parmigiano reggiano", "parmesan cheese"),
    ("heavy whipping cream", "heavy cream"),
    // Pantry
    ("all-purpose flour", "flour"),
    ("all purpose flour", "flour"),
    ("granulated sugar", "sugar"),
    ("white sugar", "sugar"),
    ("kosher salt", "salt"),
    ("sea salt", "salt"),
    ("table salt", "salt"),
    ("ground black pepper", "black pepper"),
    ("freshly ground black pepper", "black pepper"),
    ("garbanzo beans", "chickpeas"),
    ("canned chickpeas", "chickpeas"),
];

static SYNONYMS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| SYNONYM_PAIRS.iter().copied().collect());

/// Map a cleaned ingredient name to its canonical grouping key
///
/// # Examples
///
/// ```rust
/// use shopping_list::synonyms::canonicalize;
///
/// assert_eq!(canonicalize("Chicken Stock"), "chicken broth");
/// assert_eq!(canonicalize("bell peppers"), "bell pepper");
/// assert_eq!(canonicalize("Saffron"), "saffron");
/// ```
pub fn canonicalize(cleaned_name: &str) -> String {
    let key = cleaned_name.trim().to_lowercase();
    match SYNONYMS.get(key.as_str()) {
        Some(canonical) => {
            trace!("Canonicalized '{}' -> '{}'", key, canonical);
            canonical.to_string()
        }
        None => key,
    }
}

/// Raw table lookup, `None` when the name has no registered variant
pub fn lookup(cleaned_name: &str) -> Option<&'static str> {
    SYNONYMS.get(cleaned_name.trim().to_lowercase().as_str()).copied()
}

/// All variant -> canonical pairs
pub fn entries() -> impl Iterator<Item = (&'static str, &'static str)> {
    SYNONYM_PAIRS.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name_cleaner::clean;

    #[test]
    fn test_known_variants() {
        assert_eq!(canonicalize("garlic cloves"), "garlic");
        assert_eq!(canonicalize("chicken breasts"), "chicken breast");
        assert_eq!(canonicalize("bell peppers"), "bell pepper");
        assert_eq!(canonicalize("chicken stock"), "chicken broth");
        assert_eq!(canonicalize("boneless chicken breast"), "chicken breast");
    }

    #[test]
    fn test_case_insensitive_lookup() {
        assert_eq!(canonicalize("Extra Virgin Olive Oil"), "olive oil");
        assert_eq!(canonicalize("  CARROTS "), "carrot");
        assert_eq!(lookup("Eggs"), Some("egg"));
    }

    #[test]
    fn test_unknown_names_pass_through_lowercased() {
        assert_eq!(canonicalize("Smoked Paprika"), "smoked paprika");
        assert_eq!(lookup("smoked paprika"), None);
    }

    #[test]
    fn test_exact_match_only() {
        // Near misses are not folded
        assert_eq!(canonicalize("chicken breast fillets"), "chicken breast fillets");
        assert_eq!(canonicalize("carrot sticks"), "carrot sticks");
    }

    #[test]
    fn test_canonicals_are_fixed_points() {
        for (_, canonical) in entries() {
            assert_eq!(
                canonicalize(canonical),
                canonical,
                "canonical '{}' must not itself be a variant",
                canonical
            );
        }
    }

    #[test]
    fn test_synonym_closure() {
        for (variant, canonical) in entries() {
            assert_eq!(
                canonicalize(&clean(variant)),
                canonical,
                "closure failed for variant '{}'",
                variant
            );
        }
    }

    #[test]
    fn test_variants_are_unique() {
        let count = entries().count();
        assert_eq!(SYNONYMS.len(), count, "duplicate variant in synonym table");
    }
}
