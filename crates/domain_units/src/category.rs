//! Measurement categories

use serde::{Deserialize, Serialize};
use std::fmt;

/// The measurement category a unit string belongs to
///
/// Every recognized unit maps to exactly one category. Strings the
/// conversion table does not know are treated as [`UnitCategory::Count`],
/// a dimensionless countable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    Volume,
    Weight,
    Length,
    Area,
    Count,
}

impl UnitCategory {
    /// Alias lookup order; when an alias would appear in more than one
    /// category, the first category here wins
    pub const ALL: [UnitCategory; 5] = [
        UnitCategory::Volume,
        UnitCategory::Weight,
        UnitCategory::Length,
        UnitCategory::Area,
        UnitCategory::Count,
    ];

    /// The canonical base unit quantities of this category convert into
    pub fn base_unit(&self) -> &'static str {
        match self {
            UnitCategory::Volume => "L",
            UnitCategory::Weight => "kg",
            UnitCategory::Length => "m",
            UnitCategory::Area => "m²",
            UnitCategory::Count => "units",
        }
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UnitCategory::Volume => "volume",
            UnitCategory::Weight => "weight",
            UnitCategory::Length => "length",
            UnitCategory::Area => "area",
            UnitCategory::Count => "count",
        };
        write!(f, "{name}")
    }
}
