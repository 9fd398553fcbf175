//! Units Domain - Unit classification and quantity conversion
//!
//! This crate classifies free-form unit strings into measurement categories
//! and converts quantities between entered units, canonical base units, and
//! human display units. It also rolls ordered quantities up per inventory
//! item for invoice printing.
//!
//! Every operation here is total: unrecognized or malformed unit strings
//! fall back to the countable category with a factor of one instead of
//! failing, so bad inventory data never blocks order entry. Callers that
//! need validation feedback must check their inputs before calling.

pub mod category;
pub mod converter;
pub mod rollup;

mod table;

pub use category::UnitCategory;
pub use converter::{
    convert_to_base_unit, convert_to_display_unit, detect_unit_category, format_quantity,
    CompoundUnit, DisplayQuantity,
};
pub use rollup::{calculate_total_quantity, QuantityRollup};
