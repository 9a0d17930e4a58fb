//! # Aggregator
//!
//! Groups ingredient lines by canonical name and sums their amounts into
//! [`ConsolidatedItem`]s, in the order each item was first seen.
//!
//! ## Merge rules
//!
//! - Lines whose name cleans to nothing ("to taste", "2 tbsp") are dropped
//! - Lines merge when their canonical names match and their units are compatible
//!   under the configured [`UnitMergePolicy`]
//! - The merged unit is the first contributor's; compatible amounts are converted into it
//! - The first category wins, except that `Other` is upgraded by a later specific one
//!
//! The aggregator never fails. Amounts are summed as given, so invalid values must
//! be filtered upstream (see [`crate::extractor`]).

use crate::categorizer::categorize;
use crate::config::{ConsolidationConfig, UnitMergePolicy};
use crate::ingredient_model::{Category, ConsolidatedItem, RawIngredientLine};
use crate::name_cleaner::clean;
use crate::synonyms;
use crate::units::Unit;
use log::{debug, info, trace};
use std::collections::HashMap;

/// Running total for one output item
#[derive(Debug)]
struct Accumulator {
    name: String,
    amount: f64,
    unit_label: String,
    unit: Unit,
    category: Category,
    sources: Vec<String>,
}

/// Ingredient line aggregator
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    config: ConsolidationConfig,
}

impl Aggregator {
    /// Create an aggregator with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an aggregator with a custom configuration
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shopping_list::aggregator::Aggregator;
    /// use shopping_list::config::{ConsolidationConfig, UnitMergePolicy};
    ///
    /// let aggregator = Aggregator::with_config(ConsolidationConfig {
    ///     unit_merge: UnitMergePolicy::SameUnit,
    ///     ..Default::default()
    /// });
    /// ```
    pub fn with_config(config: ConsolidationConfig) -> Self {
        Self { config }
    }

    /// Consolidate ingredient lines into shopping list items
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shopping_list::aggregator::Aggregator;
    /// use shopping_list::ingredient_model::RawIngredientLine;
    ///
    /// let items = Aggregator::new().aggregate(vec![
    ///     RawIngredientLine::new("medium carrots", 3.0, "piece", None),
    ///     RawIngredientLine::new("large carrots", 2.0, "piece", None),
    ///     RawIngredientLine::new("salt to taste", 1.0, "pinch", None),
    /// ]);
    ///
    /// assert_eq!(items.len(), 1);
    /// assert_eq!(items[0].name, "carrot");
    /// assert_eq!(items[0].amount, 5.0);
    /// ```
    pub fn aggregate(&self, lines: Vec<RawIngredientLine>) -> Vec<ConsolidatedItem> {
        let line_count = lines.len();
        let mut accumulators: Vec<Accumulator> = Vec::new();
        let mut by_key: HashMap<String, Vec<usize>> = HashMap::new();
        let mut dropped = 0;

        for line in lines {
            let cleaned = clean(&line.name);
            if cleaned.is_empty() {
                debug!("Dropping ingredient line '{}'", line.name);
                dropped += 1;
                continue;
            }

            let key = synonyms::canonicalize(&cleaned);
            let display_name = match synonyms::lookup(&cleaned) {
                Some(canonical) => canonical.to_string(),
                None => cleaned,
            };
            let unit = Unit::parse(&line.unit);
            let category = self.resolve_category(line.category, &key);

            let slots = by_key.entry(key.clone()).or_default();
            let target = slots
                .iter()
                .copied()
                .find(|&index| self.accepts(&accumulators[index], &unit));

            match target {
                Some(index) => {
                    let acc = &mut accumulators[index];
                    let amount = match self.config.unit_merge {
                        UnitMergePolicy::SumAll => line.amount,
                        _ => acc.unit.convert_from(line.amount, &unit).unwrap_or(line.amount),
                    };
                    trace!(
                        "Merging {} {} into '{}' ({} {})",
                        line.amount, line.unit, acc.name, acc.amount, acc.unit_label
                    );
                    acc.amount += amount;

                    if acc.category.is_other() && !category.is_other() {
                        acc.category = category;
                    }
                    if !line.source_recipe_id.is_empty() && !acc.sources.contains(&line.source_recipe_id) {
                        acc.sources.push(line.source_recipe_id);
                    }
                }
                None => {
                    trace!("New shopping list entry '{}' keyed '{}'", display_name, key);
                    slots.push(accumulators.len());
                    let mut sources = Vec::new();
                    if !line.source_recipe_id.is_empty() {
                        sources.push(line.source_recipe_id);
                    }
                    accumulators.push(Accumulator {
                        name: display_name,
                        amount: line.amount,
                        unit_label: line.unit.trim().to_string(),
                        unit,
                        category,
                        sources,
                    });
                }
            }
        }

        info!(
            "Consolidated {} ingredient lines into {} items ({} dropped)",
            line_count,
            accumulators.len(),
            dropped
        );

        accumulators
            .into_iter()
            .map(|acc| ConsolidatedItem {
                name: acc.name,
                amount: acc.amount,
                unit: acc.unit_label,
                category: acc.category,
                source_recipe_ids: acc.sources,
            })
            .collect()
    }

    /// Whether a line in `unit` may be summed into `acc`
    fn accepts(&self, acc: &Accumulator, unit: &Unit) -> bool {
        match self.config.unit_merge {
            UnitMergePolicy::SumAll => true,
            UnitMergePolicy::SameUnit => acc.unit == *unit,
            UnitMergePolicy::Convert => acc.unit.is_compatible_with(unit),
        }
    }

    fn resolve_category(&self, category: Option<Category>, key: &str) -> Category {
        match category {
            Some(category) => category,
            None if self.config.infer_missing_categories => categorize(key),
            None => Category::Other,
        }
    }
}

/// Consolidate ingredient lines with the default configuration
pub fn aggregate(lines: Vec<RawIngredientLine>) -> Vec<ConsolidatedItem> {
    Aggregator::new().aggregate(lines)
}
