//! # Units Module
//!
//! Measurement units recognised by the aggregator, with the alias table used to
//! parse free-text unit labels and the factors used to merge compatible amounts.
//!
//! ## Features
//!
//! - Alias lookup for abbreviations and plurals ("tbsp", "Tablespoons", "lbs")
//! - Dimension classification (volume, weight, count)
//! - Conversion between units of the same dimension

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

/// US teaspoon in milliliters
const TEASPOON_ML: f64 = 4.92892159375;

/// Avoirdupois ounce in grams
const OUNCE_G: f64 = 28.349523125;

/// Known unit aliases and the unit they stand for
static UNIT_MAPPINGS: LazyLock<HashMap<&'static str, Unit>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Volume units
    map.insert("tsp", Unit::Teaspoon);
    map.insert("teaspoon", Unit::Teaspoon);
    map.insert("teaspoons", Unit::Teaspoon);
    map.insert("tbsp", Unit::Tablespoon);
    map.insert("tbs", Unit::Tablespoon);
    map.insert("tablespoon", Unit::Tablespoon);
    map.insert("tablespoons", Unit::Tablespoon);
    map.insert("cup", Unit::Cup);
    map.insert("cups", Unit::Cup);
    map.insert("c", Unit::Cup);
    map.insert("fl oz", Unit::FluidOunce);
    map.insert("fluid ounce", Unit::FluidOunce);
    map.insert("fluid ounces", Unit::FluidOunce);
    map.insert("pint", Unit::Pint);
    map.insert("pints", Unit::Pint);
    map.insert("pt", Unit::Pint);
    map.insert("quart", Unit::Quart);
    map.insert("quarts", Unit::Quart);
    map.insert("qt", Unit::Quart);
    map.insert("gallon", Unit::Gallon);
    map.insert("gallons", Unit::Gallon);
    map.insert("gal", Unit::Gallon);
    map.insert("ml", Unit::Milliliter);
    map.insert("milliliter", Unit::Milliliter);
    map.insert("milliliters", Unit::Milliliter);
    map.insert("millilitre", Unit::Milliliter);
    map.insert("millilitres", Unit::Milliliter);
    map.insert("l", Unit::Liter);
    map.insert("liter", Unit::Liter);
    map.insert("liters", Unit::Liter);
    map.insert("litre", Unit::Liter);
    map.insert("litres", Unit::Liter);

    // Weight units
    map.insert("oz", Unit::Ounce);
    map.insert("ounce", Unit::Ounce);
    map.insert("ounces", Unit::Ounce);
    map.insert("lb", Unit::Pound);
    map.insert("lbs", Unit::Pound);
    map.insert("pound", Unit::Pound);
    map.insert("pounds", Unit::Pound);
    map.insert("g", Unit::Gram);
    map.insert("gram", Unit::Gram);
    map.insert("grams", Unit::Gram);
    map.insert("kg", Unit::Kilogram);
    map.insert("kilogram", Unit::Kilogram);
    map.insert("kilograms", Unit::Kilogram);

    // Count units
    map.insert("", Unit::Piece);
    map.insert("piece", Unit::Piece);
    map.insert("pieces", Unit::Piece);
    map.insert("pc", Unit::Piece);
    map.insert("pcs", Unit::Piece);
    map.insert("item", Unit::Piece);
    map.insert("items", Unit::Piece);
    map.insert("whole", Unit::Piece);
    map.insert("each", Unit::Piece);
    map.insert("dozen", Unit::Dozen);
    map.insert("doz", Unit::Dozen);

    // Specialized units
    map.insert("pinch", Unit::Pinch);
    map.insert("pinches", Unit::Pinch);
    map.insert("dash", Unit::Dash);
    map.insert("dashes", Unit::Dash);
    map.insert("clove", Unit::Clove);
    map.insert("cloves", Unit::Clove);
    map.insert("package", Unit::Package);
    map.insert("packages", Unit::Package);
    map.insert("pkg", Unit::Package);
    map.insert("can", Unit::Can);
    map.insert("cans", Unit::Can);
    map.insert("bottle", Unit::Bottle);
    map.insert("bottles", Unit::Bottle);

    map
});

/// Measurement units with normalization support
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Unit {
    // Volume units
    Teaspoon,
    Tablespoon,
    FluidOunce,
    Cup,
    Pint,
    Quart,
    Gallon,
    Milliliter,
    Liter,

    // Weight units
    Ounce,
    Pound,
    Gram,
    Kilogram,

    // Count units
    /// Individual pieces; also what an empty unit label means
    Piece,
    Dozen,

    // Specialized units, only ever merged with themselves
    Pinch,
    Dash,
    Clove,
    Package,
    Can,
    Bottle,

    /// Unrecognised label, lowercased
    Unknown(String),
}

/// Physical dimension of a unit, deciding which units can be summed together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Volume,
    Weight,
    Count,
    /// Units with no conversion to anything else
    Other,
}

impl Unit {
    /// Parse a free-text unit label
    ///
    /// Unknown labels are kept as `Unit::Unknown` so that two lines with the
    /// same odd label still compare equal.
    pub fn parse(label: &str) -> Unit {
        let label = label.trim().trim_end_matches('.').to_lowercase();

        if let Some(unit) = UNIT_MAPPINGS.get(label.as_str()) {
            return unit.clone();
        }

        Unit::Unknown(label)
    }

    /// Dimension this unit measures
    pub fn dimension(&self) -> Dimension {
        match self {
            Unit::Teaspoon
            | Unit::Tablespoon
            | Unit::FluidOunce
            | Unit::Cup
            | Unit::Pint
            | Unit::Quart
            | Unit::Gallon
            | Unit::Milliliter
            | Unit::Liter => Dimension::Volume,
            Unit::Ounce | Unit::Pound | Unit::Gram | Unit::Kilogram => Dimension::Weight,
            Unit::Piece | Unit::Dozen => Dimension::Count,
            Unit::Pinch
            | Unit::Dash
            | Unit::Clove
            | Unit::Package
            | Unit::Can
            | Unit::Bottle
            | Unit::Unknown(_) => Dimension::Other,
        }
    }

    /// Whole-number factor to the unit's own system base (tsp, ml, oz, g, piece)
    /// and the size of that base in the dimension's base unit (ml, g, piece)
    ///
    /// Conversions inside one system only multiply and divide small integers,
    /// so `16 tbsp` is exactly `1 cup`.
    fn scale(&self) -> Option<(f64, f64)> {
        let scale = match self {
            Unit::Teaspoon => (1.0, TEASPOON_ML),
            Unit::Tablespoon => (3.0, TEASPOON_ML),
            Unit::FluidOunce => (6.0, TEASPOON_ML),
            Unit::Cup => (48.0, TEASPOON_ML),
            Unit::Pint => (96.0, TEASPOON_ML),
            Unit::Quart => (192.0, TEASPOON_ML),
            Unit::Gallon => (768.0, TEASPOON_ML),
            Unit::Milliliter => (1.0, 1.0),
            Unit::Liter => (1000.0, 1.0),
            Unit::Ounce => (1.0, OUNCE_G),
            Unit::Pound => (16.0, OUNCE_G),
            Unit::Gram => (1.0, 1.0),
            Unit::Kilogram => (1000.0, 1.0),
            Unit::Piece => (1.0, 1.0),
            Unit::Dozen => (12.0, 1.0),
            _ => return None,
        };
        Some(scale)
    }

    /// Whether an amount in `other` can be summed into an amount in `self`
    pub fn is_compatible_with(&self, other: &Unit) -> bool {
        if self == other {
            return true;
        }
        let dimension = self.dimension();
        dimension != Dimension::Other && dimension == other.dimension()
    }

    /// Convert `amount` expressed in `from` into this unit
    ///
    /// Returns `None` when the units are not compatible.
    pub fn convert_from(&self, amount: f64, from: &Unit) -> Option<f64> {
        if self == from {
            return Some(amount);
        }
        if !self.is_compatible_with(from) {
            return None;
        }
        let (from_factor, from_base) = from.scale()?;
        let (to_factor, to_base) = self.scale()?;

        if from_base == to_base {
            Some(amount * from_factor / to_factor)
        } else {
            Some(amount * from_factor * from_base / (to_factor * to_base))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_parsing() {
        assert_eq!(Unit::parse("cups"), Unit::Cup);
        assert_eq!(Unit::parse("Cup"), Unit::Cup);
        assert_eq!(Unit::parse("tbsp."), Unit::Tablespoon);
        assert_eq!(Unit::parse("Tablespoons"), Unit::Tablespoon);
        assert_eq!(Unit::parse("lbs"), Unit::Pound);
        assert_eq!(Unit::parse(" g "), Unit::Gram);
        assert_eq!(Unit::parse(""), Unit::Piece);
        assert_eq!(Unit::parse("whole"), Unit::Piece);
        assert_eq!(Unit::parse("Sprig"), Unit::Unknown("sprig".to_string()));
    }

    #[test]
    fn test_dimensions() {
        assert_eq!(Unit::Cup.dimension(), Dimension::Volume);
        assert_eq!(Unit::Pound.dimension(), Dimension::Weight);
        assert_eq!(Unit::Dozen.dimension(), Dimension::Count);
        assert_eq!(Unit::Pinch.dimension(), Dimension::Other);
        assert_eq!(Unit::Unknown("sprig".to_string()).dimension(), Dimension::Other);
    }

    #[test]
    fn test_compatibility() {
        assert!(Unit::Cup.is_compatible_with(&Unit::Tablespoon));
        assert!(Unit::Gram.is_compatible_with(&Unit::Pound));
        assert!(Unit::Piece.is_compatible_with(&Unit::Dozen));
        assert!(Unit::Pinch.is_compatible_with(&Unit::Pinch));
        assert!(!Unit::Pinch.is_compatible_with(&Unit::Dash));
        assert!(!Unit::Cup.is_compatible_with(&Unit::Piece));
        assert!(!Unit::Cup.is_compatible_with(&Unit::Gram));

        let sprig = Unit::Unknown("sprig".to_string());
        assert!(sprig.is_compatible_with(&Unit::Unknown("sprig".to_string())));
        assert!(!sprig.is_compatible_with(&Unit::Unknown("bunch".to_string())));
    }

    #[test]
    fn test_conversion() {
        let cups = Unit::Cup.convert_from(16.0, &Unit::Tablespoon).unwrap();
        assert!((cups - 1.0).abs() < 0.01);

        let ml = Unit::Milliliter.convert_from(1.0, &Unit::Liter).unwrap();
        assert_eq!(ml, 1000.0);

        let grams = Unit::Gram.convert_from(1.0, &Unit::Pound).unwrap();
        assert!((grams - 453.592).abs() < 0.001);

        let grams = Unit::Gram.convert_from(1.0, &Unit::Kilogram).unwrap();
        assert_eq!(grams, 1000.0);

        let pieces = Unit::Piece.convert_from(2.0, &Unit::Dozen).unwrap();
        assert_eq!(pieces, 24.0);

        assert_eq!(Unit::Pinch.convert_from(3.0, &Unit::Pinch), Some(3.0));
        assert_eq!(Unit::Cup.convert_from(1.0, &Unit::Gram), None);
    }

    #[test]
    fn test_same_system_conversions_are_exact() {
        assert_eq!(Unit::Cup.convert_from(16.0, &Unit::Tablespoon), Some(1.0));
        assert_eq!(Unit::Tablespoon.convert_from(1.0, &Unit::Cup), Some(16.0));
        assert_eq!(Unit::Teaspoon.convert_from(1.0, &Unit::Tablespoon), Some(3.0));
        assert_eq!(Unit::Cup.convert_from(3.0, &Unit::Teaspoon), Some(0.0625));
        assert_eq!(Unit::Quart.convert_from(2.0, &Unit::Pint), Some(1.0));
        assert_eq!(Unit::Ounce.convert_from(1.0, &Unit::Pound), Some(16.0));
        assert_eq!(Unit::Kilogram.convert_from(500.0, &Unit::Gram), Some(0.5));
    }

    #[test]
    fn test_round_trip_across_systems() {
        let ml = Unit::Milliliter.convert_from(1.0, &Unit::Cup).unwrap();
        assert!((ml - 236.5882365).abs() < 1e-6);

        let back = Unit::Cup.convert_from(ml, &Unit::Milliliter).unwrap();
        assert!((back - 1.0).abs() < 1e-12);
    }
}
