//! Unit detection and conversion
//!
//! All functions in this module are total. An unrecognized unit string is
//! treated as a dimensionless countable unit with a factor of one, never as
//! an error, so callers do not wrap these calls in any recovery logic.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use core_kernel::round_half_up;

use crate::category::UnitCategory;
use crate::table;

/// A pack-size unit string such as "25KG": a pack of 25, unit kg
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundUnit {
    /// Units per pack
    pub pack_size: u64,
    /// The embedded unit alias, lowercased
    pub alias: String,
}

impl CompoundUnit {
    /// Parses a `<integer><alias>` unit string, e.g. "25KG" or "6pcs"
    ///
    /// The string is trimmed and lowercased first; anything that is not
    /// digits immediately followed by letters is not a compound unit.
    pub fn parse(unit: &str) -> Option<Self> {
        let normalized = normalize(unit);
        let split = normalized.find(|c: char| !c.is_ascii_digit())?;
        if split == 0 {
            return None;
        }
        let (digits, alias) = normalized.split_at(split);
        if alias.is_empty() || !alias.chars().all(|c| c.is_ascii_lowercase()) {
            return None;
        }
        let pack_size = digits.parse().ok()?;
        Some(Self {
            pack_size,
            alias: alias.to_string(),
        })
    }

    /// Pack size as a decimal multiplier
    pub fn pack_factor(&self) -> Decimal {
        Decimal::from(self.pack_size)
    }
}

/// A quantity scaled for human display, e.g. 1500 g shown as 1.50 kg
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DisplayQuantity {
    pub value: Decimal,
    pub unit: &'static str,
}

pub(crate) fn normalize(unit: &str) -> String {
    unit.trim().to_lowercase()
}

/// Classifies a unit string into its measurement category
///
/// Compound units are classified by their embedded alias ("25KG" is
/// weight). Unknown strings are [`UnitCategory::Count`]; this function
/// never fails.
pub fn detect_unit_category(unit: &str) -> UnitCategory {
    if let Some(compound) = CompoundUnit::parse(unit) {
        if let Some(category) = table::category_of(&compound.alias) {
            return category;
        }
    }
    table::category_of(&normalize(unit)).unwrap_or(UnitCategory::Count)
}

/// Converts a quantity in the given unit into the category's base unit
///
/// Compound units multiply through their pack size: 2 packs of "25KG" is
/// 50 kg. Units absent from the conversion table convert with a factor of
/// one.
pub fn convert_to_base_unit(quantity: Decimal, unit: &str) -> Decimal {
    let category = detect_unit_category(unit);
    if let Some(compound) = CompoundUnit::parse(unit) {
        let factor = table::factor(category, &compound.alias).unwrap_or(Decimal::ONE);
        return quantity * compound.pack_factor() * factor;
    }
    let factor = table::factor(category, &normalize(unit)).unwrap_or(Decimal::ONE);
    quantity * factor
}

/// Scales a base-unit quantity into the unit a person would write
///
/// The ≥1000 branches for volume and weight divide the value but keep the
/// "L"/"kg" label; invoices have always printed large quantities that way
/// and the output format is load-bearing for printed documents.
pub fn convert_to_display_unit(quantity: Decimal, category: UnitCategory) -> DisplayQuantity {
    match category {
        UnitCategory::Count => DisplayQuantity {
            value: round_half_up(quantity, 0),
            unit: "units",
        },
        UnitCategory::Volume => {
            if quantity >= dec!(1000) {
                DisplayQuantity {
                    value: quantity / dec!(1000),
                    unit: "L",
                }
            } else if quantity >= dec!(1) {
                DisplayQuantity {
                    value: quantity,
                    unit: "L",
                }
            } else {
                DisplayQuantity {
                    value: quantity * dec!(1000),
                    unit: "ml",
                }
            }
        }
        UnitCategory::Weight => {
            if quantity >= dec!(1000) {
                DisplayQuantity {
                    value: quantity / dec!(1000),
                    unit: "kg",
                }
            } else if quantity >= dec!(1) {
                DisplayQuantity {
                    value: quantity,
                    unit: "kg",
                }
            } else {
                DisplayQuantity {
                    value: quantity * dec!(1000),
                    unit: "g",
                }
            }
        }
        UnitCategory::Length => {
            if quantity >= dec!(1000) {
                DisplayQuantity {
                    value: quantity / dec!(1000),
                    unit: "km",
                }
            } else if quantity >= dec!(1) {
                DisplayQuantity {
                    value: quantity,
                    unit: "m",
                }
            } else {
                DisplayQuantity {
                    value: quantity * dec!(1000),
                    unit: "mm",
                }
            }
        }
        UnitCategory::Area => {
            if quantity >= dec!(10000) {
                DisplayQuantity {
                    value: quantity / dec!(10000),
                    unit: "hectares",
                }
            } else if quantity >= dec!(1) {
                DisplayQuantity {
                    value: quantity,
                    unit: "m²",
                }
            } else {
                DisplayQuantity {
                    value: quantity * dec!(10000),
                    unit: "cm²",
                }
            }
        }
    }
}

/// Formats a quantity for documents
///
/// Count quantities render as whole numbers. Everything else renders with
/// magnitude-scaled decimals: 0 places at ≥1000, 1 at ≥100, 2 at ≥10, and
/// 3 below that. The `precision` argument is accepted for call-site
/// compatibility but the magnitude table decides; quantities on documents
/// already in customers' hands must not reformat.
pub fn format_quantity(quantity: Decimal, category: UnitCategory, precision: u32) -> String {
    let _ = precision;
    if category == UnitCategory::Count {
        return round_half_up(quantity, 0).to_string();
    }
    let dp: u32 = if quantity >= dec!(1000) {
        0
    } else if quantity >= dec!(100) {
        1
    } else if quantity >= dec!(10) {
        2
    } else {
        3
    };
    format!("{:.*}", dp as usize, round_half_up(quantity, dp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compound_parse() {
        let compound = CompoundUnit::parse("25KG").unwrap();
        assert_eq!(compound.pack_size, 25);
        assert_eq!(compound.alias, "kg");

        assert_eq!(CompoundUnit::parse("kg"), None);
        assert_eq!(CompoundUnit::parse("123"), None);
        assert_eq!(CompoundUnit::parse("25 kg"), None);
        assert_eq!(CompoundUnit::parse(""), None);
    }

    #[test]
    fn test_compound_parse_trims_and_lowercases() {
        let compound = CompoundUnit::parse("  6Pcs ").unwrap();
        assert_eq!(compound.pack_size, 6);
        assert_eq!(compound.alias, "pcs");
    }

    #[test]
    fn test_detect_simple_units() {
        assert_eq!(detect_unit_category("kg"), UnitCategory::Weight);
        assert_eq!(detect_unit_category(" Litre "), UnitCategory::Volume);
        assert_eq!(detect_unit_category("M2"), UnitCategory::Area);
        assert_eq!(detect_unit_category("km"), UnitCategory::Length);
        assert_eq!(detect_unit_category("pcs"), UnitCategory::Count);
    }

    #[test]
    fn test_detect_unknown_falls_back_to_count() {
        assert_eq!(detect_unit_category("bags"), UnitCategory::Count);
        assert_eq!(detect_unit_category(""), UnitCategory::Count);
        assert_eq!(detect_unit_category("42"), UnitCategory::Count);
        assert_eq!(detect_unit_category("🦀"), UnitCategory::Count);
    }

    #[test]
    fn test_detect_compound_units() {
        assert_eq!(detect_unit_category("25KG"), UnitCategory::Weight);
        assert_eq!(detect_unit_category("500ml"), UnitCategory::Volume);
        assert_eq!(detect_unit_category("12pcs"), UnitCategory::Count);
        // Unknown embedded alias drops through to count
        assert_eq!(detect_unit_category("25widgets"), UnitCategory::Count);
    }

    #[test]
    fn test_convert_simple_units() {
        assert_eq!(convert_to_base_unit(dec!(500), "g"), dec!(0.5));
        assert_eq!(convert_to_base_unit(dec!(2), "t"), dec!(2000));
        assert_eq!(convert_to_base_unit(dec!(3), "km"), dec!(3000));
        assert_eq!(convert_to_base_unit(dec!(4), "pcs"), dec!(4));
    }

    #[test]
    fn test_convert_unknown_unit_keeps_quantity() {
        assert_eq!(convert_to_base_unit(dec!(7), "bags"), dec!(7));
        assert_eq!(convert_to_base_unit(dec!(7), ""), dec!(7));
    }

    #[test]
    fn test_convert_compound_units() {
        // 2 packs of 25 kg
        assert_eq!(convert_to_base_unit(dec!(2), "25KG"), dec!(50));
        // 3 packs of 500 ml
        assert_eq!(convert_to_base_unit(dec!(3), "500ml"), dec!(1.5));
        // Unknown embedded alias still multiplies through the pack size
        assert_eq!(convert_to_base_unit(dec!(2), "25widgets"), dec!(50));
    }

    #[test]
    fn test_display_unit_branches() {
        let d = convert_to_display_unit(dec!(0.25), UnitCategory::Volume);
        assert_eq!((d.value, d.unit), (dec!(250), "ml"));

        let d = convert_to_display_unit(dec!(2), UnitCategory::Volume);
        assert_eq!((d.value, d.unit), (dec!(2), "L"));

        // The large branch divides but keeps the same label
        let d = convert_to_display_unit(dec!(1500), UnitCategory::Volume);
        assert_eq!((d.value, d.unit), (dec!(1.5), "L"));

        let d = convert_to_display_unit(dec!(0.5), UnitCategory::Weight);
        assert_eq!((d.value, d.unit), (dec!(500), "g"));

        let d = convert_to_display_unit(dec!(1500), UnitCategory::Weight);
        assert_eq!((d.value, d.unit), (dec!(1.5), "kg"));

        let d = convert_to_display_unit(dec!(2500), UnitCategory::Length);
        assert_eq!((d.value, d.unit), (dec!(2.5), "km"));

        let d = convert_to_display_unit(dec!(0.02), UnitCategory::Length);
        assert_eq!((d.value, d.unit), (dec!(20), "mm"));

        let d = convert_to_display_unit(dec!(20000), UnitCategory::Area);
        assert_eq!((d.value, d.unit), (dec!(2), "hectares"));

        let d = convert_to_display_unit(dec!(0.5), UnitCategory::Area);
        assert_eq!((d.value, d.unit), (dec!(5000), "cm²"));

        let d = convert_to_display_unit(dec!(7.4), UnitCategory::Count);
        assert_eq!((d.value, d.unit), (dec!(7), "units"));
    }

    #[test]
    fn test_format_quantity_scale_table() {
        assert_eq!(format_quantity(dec!(1234.567), UnitCategory::Length, 2), "1235");
        assert_eq!(format_quantity(dec!(123.456), UnitCategory::Length, 2), "123.5");
        assert_eq!(format_quantity(dec!(12.345), UnitCategory::Length, 2), "12.35");
        assert_eq!(format_quantity(dec!(1.2345), UnitCategory::Length, 2), "1.235");
        assert_eq!(format_quantity(dec!(9.87), UnitCategory::Volume, 2), "9.870");
    }

    #[test]
    fn test_format_quantity_count_is_integer() {
        assert_eq!(format_quantity(dec!(5), UnitCategory::Count, 2), "5");
        assert_eq!(format_quantity(dec!(5.6), UnitCategory::Count, 2), "6");
    }

    #[test]
    fn test_format_quantity_ignores_requested_precision() {
        assert_eq!(format_quantity(dec!(5.5), UnitCategory::Weight, 0), "5.500");
        assert_eq!(format_quantity(dec!(5.5), UnitCategory::Weight, 8), "5.500");
    }
}
