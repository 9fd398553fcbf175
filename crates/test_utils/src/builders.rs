//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. These builders allow tests to specify only the relevant
//! fields while using defaults for everything else.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{InventoryItemId, LineItem};

/// Builder for constructing test line items
pub struct LineItemBuilder {
    inventory_id: Option<InventoryItemId>,
    description: Option<String>,
    quantity: Option<Decimal>,
    unit: Option<String>,
    unit_price: Decimal,
    tax_rate: Decimal,
}

impl Default for LineItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LineItemBuilder {
    /// Creates a new builder with default values: one piece at 100.00,
    /// taxed at 15%
    pub fn new() -> Self {
        Self {
            inventory_id: Some(InventoryItemId::new()),
            description: None,
            quantity: Some(dec!(1)),
            unit: Some("pcs".to_string()),
            unit_price: dec!(100),
            tax_rate: dec!(15),
        }
    }

    /// Sets the inventory item ID
    pub fn with_inventory_id(mut self, id: InventoryItemId) -> Self {
        self.inventory_id = Some(id);
        self
    }

    /// Clears the inventory item ID, producing a row the rollup skips
    pub fn without_inventory_id(mut self) -> Self {
        self.inventory_id = None;
        self
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the quantity
    pub fn with_quantity(mut self, quantity: Decimal) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Clears the quantity
    pub fn without_quantity(mut self) -> Self {
        self.quantity = None;
        self
    }

    /// Sets the unit string
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Clears the unit string
    pub fn without_unit(mut self) -> Self {
        self.unit = None;
        self
    }

    /// Sets the unit price
    pub fn with_unit_price(mut self, unit_price: Decimal) -> Self {
        self.unit_price = unit_price;
        self
    }

    /// Sets the tax rate percentage
    pub fn with_tax_rate(mut self, tax_rate: Decimal) -> Self {
        self.tax_rate = tax_rate;
        self
    }

    /// Builds the line item
    pub fn build(self) -> LineItem {
        LineItem {
            inventory_id: self.inventory_id,
            description: self.description,
            quantity: self.quantity,
            unit: self.unit,
            unit_price: self.unit_price,
            tax_rate: self.tax_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_are_valid() {
        let item = LineItemBuilder::new().build();

        assert!(item.inventory_id.is_some());
        assert_eq!(item.quantity, Some(dec!(1)));
        assert_eq!(item.unit.as_deref(), Some("pcs"));
        assert_eq!(item.tax_rate, dec!(15));
    }

    #[test]
    fn test_builder_clears_fields() {
        let item = LineItemBuilder::new()
            .without_inventory_id()
            .without_quantity()
            .without_unit()
            .build();

        assert!(item.inventory_id.is_none());
        assert!(item.quantity.is_none());
        assert!(item.unit.is_none());
    }
}
