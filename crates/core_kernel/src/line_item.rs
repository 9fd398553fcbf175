//! Order line items
//!
//! A line item is the raw row an order form supplies: an inventory
//! reference, a quantity with its unit of measure, and pricing fields.
//! Both pricing domains consume it as an immutable snapshot. Fields a
//! half-filled form can leave blank are optional; consumers decide whether
//! to skip or reject incomplete rows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::identifiers::InventoryItemId;

/// One order row: an inventory reference, quantity, unit, and price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Inventory item being ordered
    #[serde(default)]
    pub inventory_id: Option<InventoryItemId>,
    /// Free-text description shown on documents
    #[serde(default)]
    pub description: Option<String>,
    /// Ordered quantity, in `unit`
    #[serde(default)]
    pub quantity: Option<Decimal>,
    /// Unit of measure as entered, e.g. "kg", "pcs", "25KG"
    #[serde(default)]
    pub unit: Option<String>,
    /// Price per unit, tax treatment decided by the calculation method
    pub unit_price: Decimal,
    /// Tax rate as a percentage (15 = 15%)
    #[serde(default)]
    pub tax_rate: Decimal,
}

impl LineItem {
    /// Creates a fully-populated line item
    pub fn new(
        inventory_id: InventoryItemId,
        quantity: Decimal,
        unit: impl Into<String>,
        unit_price: Decimal,
        tax_rate: Decimal,
    ) -> Self {
        Self {
            inventory_id: Some(inventory_id),
            description: None,
            quantity: Some(quantity),
            unit: Some(unit.into()),
            unit_price,
            tax_rate,
        }
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the pre-tax-treatment line amount; a missing quantity
    /// contributes nothing rather than poisoning the order total
    pub fn line_amount(&self) -> Decimal {
        self.unit_price * self.quantity.unwrap_or_default()
    }
}
