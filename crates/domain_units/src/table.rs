//! Static unit conversion table
//!
//! Maps each lowercased unit alias to the factor that converts one unit of
//! that alias into its category's base unit (liters, kilograms, meters,
//! square meters, or a plain count). Built once at first use and never
//! mutated afterwards.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

use crate::category::UnitCategory;

static CONVERSION_TABLE: Lazy<HashMap<UnitCategory, HashMap<&'static str, Decimal>>> =
    Lazy::new(|| {
        let mut table = HashMap::new();

        let mut volume = HashMap::new();
        volume.insert("ml", dec!(0.001));
        volume.insert("cl", dec!(0.01));
        volume.insert("l", dec!(1));
        volume.insert("lt", dec!(1));
        volume.insert("liter", dec!(1));
        volume.insert("litre", dec!(1));
        volume.insert("kl", dec!(1000));
        volume.insert("m3", dec!(1000));
        table.insert(UnitCategory::Volume, volume);

        let mut weight = HashMap::new();
        weight.insert("mg", dec!(0.000001));
        weight.insert("g", dec!(0.001));
        weight.insert("gram", dec!(0.001));
        weight.insert("kg", dec!(1));
        weight.insert("kilo", dec!(1));
        weight.insert("t", dec!(1000));
        weight.insert("ton", dec!(1000));
        weight.insert("tonne", dec!(1000));
        weight.insert("lb", dec!(0.453592));
        weight.insert("oz", dec!(0.0283495));
        table.insert(UnitCategory::Weight, weight);

        let mut length = HashMap::new();
        length.insert("mm", dec!(0.001));
        length.insert("cm", dec!(0.01));
        length.insert("m", dec!(1));
        length.insert("meter", dec!(1));
        length.insert("metre", dec!(1));
        length.insert("km", dec!(1000));
        length.insert("in", dec!(0.0254));
        length.insert("inch", dec!(0.0254));
        length.insert("ft", dec!(0.3048));
        table.insert(UnitCategory::Length, length);

        let mut area = HashMap::new();
        area.insert("cm2", dec!(0.0001));
        area.insert("m2", dec!(1));
        area.insert("sqm", dec!(1));
        area.insert("sqft", dec!(0.092903));
        area.insert("ha", dec!(10000));
        area.insert("hectare", dec!(10000));
        area.insert("acre", dec!(4046.86));
        table.insert(UnitCategory::Area, area);

        let mut count = HashMap::new();
        count.insert("pc", dec!(1));
        count.insert("pcs", dec!(1));
        count.insert("piece", dec!(1));
        count.insert("pieces", dec!(1));
        count.insert("unit", dec!(1));
        count.insert("units", dec!(1));
        count.insert("ea", dec!(1));
        count.insert("each", dec!(1));
        count.insert("pair", dec!(2));
        count.insert("dozen", dec!(12));
        table.insert(UnitCategory::Count, count);

        table
    });

/// Returns the base-unit factor for an alias within a category
pub(crate) fn factor(category: UnitCategory, alias: &str) -> Option<Decimal> {
    CONVERSION_TABLE
        .get(&category)
        .and_then(|aliases| aliases.get(alias))
        .copied()
}

/// Returns the category owning an alias, probing in [`UnitCategory::ALL`] order
pub(crate) fn category_of(alias: &str) -> Option<UnitCategory> {
    UnitCategory::ALL
        .into_iter()
        .find(|category| factor(*category, alias).is_some())
}

#[cfg(test)]
pub(crate) fn aliases(category: UnitCategory) -> Vec<&'static str> {
    CONVERSION_TABLE
        .get(&category)
        .map(|aliases| aliases.keys().copied().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_aliases() {
        for category in UnitCategory::ALL {
            assert!(
                !aliases(category).is_empty(),
                "no aliases registered for {category}"
            );
        }
    }

    #[test]
    fn test_no_alias_appears_in_two_categories() {
        for (i, first) in UnitCategory::ALL.into_iter().enumerate() {
            for second in UnitCategory::ALL.into_iter().skip(i + 1) {
                for alias in aliases(first) {
                    assert!(
                        factor(second, alias).is_none(),
                        "alias {alias:?} registered in both {first} and {second}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_base_aliases_have_factor_one() {
        assert_eq!(factor(UnitCategory::Volume, "l"), Some(dec!(1)));
        assert_eq!(factor(UnitCategory::Weight, "kg"), Some(dec!(1)));
        assert_eq!(factor(UnitCategory::Length, "m"), Some(dec!(1)));
        assert_eq!(factor(UnitCategory::Area, "m2"), Some(dec!(1)));
        assert_eq!(factor(UnitCategory::Count, "pcs"), Some(dec!(1)));
    }

    #[test]
    fn test_category_probe_order() {
        // "m" is a length alias and must resolve there, not in volume or weight
        assert_eq!(category_of("m"), Some(UnitCategory::Length));
        assert_eq!(category_of("kg"), Some(UnitCategory::Weight));
        assert_eq!(category_of("nope"), None);
    }
}
