//! Quantity rollups across an order
//!
//! Collapses order rows into per-inventory-item totals for invoice
//! printing: how many packs were ordered, the total in base units, and a
//! human-readable breakdown of the conversion.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use core_kernel::{round_half_up, InventoryItemId, LineItem};

use crate::converter::{
    convert_to_base_unit, convert_to_display_unit, detect_unit_category, format_quantity,
    CompoundUnit,
};

/// Per-inventory-item quantity summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuantityRollup {
    /// Quantity as entered on the row
    pub quantity: Decimal,
    /// Unit as entered on the row
    pub unit: String,
    /// Total in the category's base unit
    pub total: Decimal,
    /// Label for documents: the compound alias uppercased, or the entered
    /// unit uppercased; deliberately not the SI-style display unit
    pub display_unit: String,
    /// Whole-number count of packs/units ordered
    pub formatted_total: String,
    /// Human-readable conversion, e.g. "25.00 kg × 2 = 50.00 kg"
    pub calculation_breakdown: String,
}

/// Rolls line items up into per-inventory-item quantity summaries
///
/// Rows missing an inventory reference, quantity, or unit are skipped
/// without being reported; validate inputs beforehand when feedback is
/// needed. When the same inventory item appears on several rows the last
/// row wins; callers wanting a sum must pre-aggregate their rows.
pub fn calculate_total_quantity(items: &[LineItem]) -> HashMap<InventoryItemId, QuantityRollup> {
    let mut rollups = HashMap::new();

    for item in items {
        let (Some(inventory_id), Some(quantity), Some(unit)) =
            (item.inventory_id, item.quantity, item.unit.as_deref())
        else {
            debug!("skipping incomplete line item in quantity rollup");
            continue;
        };

        let category = detect_unit_category(unit);
        let base_per_item = convert_to_base_unit(Decimal::ONE, unit);
        let total = base_per_item * quantity;

        let compound = CompoundUnit::parse(unit);
        let display_unit = match &compound {
            Some(compound) => compound.alias.to_uppercase(),
            None => unit.to_uppercase(),
        };
        let pack_count = quantity
            * compound
                .as_ref()
                .map(CompoundUnit::pack_factor)
                .unwrap_or(Decimal::ONE);

        let per_item = convert_to_display_unit(base_per_item, category);
        let total_display = convert_to_display_unit(total, category);
        let calculation_breakdown = format!(
            "{} {} × {} = {} {}",
            format_quantity(per_item.value, category, 2),
            per_item.unit,
            quantity,
            format_quantity(total_display.value, category, 2),
            total_display.unit,
        );

        rollups.insert(
            inventory_id,
            QuantityRollup {
                quantity,
                unit: unit.to_string(),
                total,
                display_unit,
                formatted_total: round_half_up(pack_count, 0).to_string(),
                calculation_breakdown,
            },
        );
    }

    rollups
}
