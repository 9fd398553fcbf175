//! Form-level validation of submitted order rows
//!
//! The pricing engines deliberately accept anything; this module is where
//! bad rows are turned away. It reproduces the order form's checks so an
//! assembled order only ever contains rows the engines were meant to see.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::LineItem;

use crate::error::OrderError;

/// Lowest tax rate the order form accepts
pub const TAX_RATE_MIN: Decimal = Decimal::ZERO;
/// Highest tax rate the order form accepts
pub const TAX_RATE_MAX: Decimal = dec!(100);

/// Validates a single order row; `index` is 1-based for error messages
pub fn validate_line_item(index: usize, item: &LineItem) -> Result<(), OrderError> {
    if item.inventory_id.is_none() {
        return Err(OrderError::MissingField {
            index,
            field: "inventory item",
        });
    }

    if item.unit.as_deref().map(str::trim).unwrap_or("").is_empty() {
        return Err(OrderError::MissingField {
            index,
            field: "unit",
        });
    }

    match item.quantity {
        None => {
            return Err(OrderError::MissingField {
                index,
                field: "quantity",
            })
        }
        Some(quantity) if quantity <= Decimal::ZERO => {
            return Err(OrderError::QuantityNotPositive { index })
        }
        Some(_) => {}
    }

    if item.unit_price < Decimal::ZERO {
        return Err(OrderError::NegativeUnitPrice { index });
    }

    if item.tax_rate < TAX_RATE_MIN || item.tax_rate > TAX_RATE_MAX {
        return Err(OrderError::TaxRateOutOfRange {
            index,
            rate: item.tax_rate,
        });
    }

    Ok(())
}

/// Validates every row of an order, stopping at the first rejection
pub fn validate_order_items(items: &[LineItem]) -> Result<(), OrderError> {
    if items.is_empty() {
        return Err(OrderError::EmptyOrder);
    }
    for (position, item) in items.iter().enumerate() {
        validate_line_item(position + 1, item)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::InventoryItemId;

    fn valid_item() -> LineItem {
        LineItem::new(InventoryItemId::new(), dec!(2), "kg", dec!(10), dec!(15))
    }

    #[test]
    fn test_valid_item_passes() {
        assert_eq!(validate_line_item(1, &valid_item()), Ok(()));
    }

    #[test]
    fn test_empty_order_rejected() {
        assert_eq!(validate_order_items(&[]), Err(OrderError::EmptyOrder));
    }

    #[test]
    fn test_missing_fields_rejected() {
        let mut item = valid_item();
        item.inventory_id = None;
        assert!(matches!(
            validate_line_item(1, &item),
            Err(OrderError::MissingField { field: "inventory item", .. })
        ));

        let mut item = valid_item();
        item.unit = Some("   ".to_string());
        assert!(matches!(
            validate_line_item(1, &item),
            Err(OrderError::MissingField { field: "unit", .. })
        ));

        let mut item = valid_item();
        item.quantity = None;
        assert!(matches!(
            validate_line_item(1, &item),
            Err(OrderError::MissingField { field: "quantity", .. })
        ));
    }

    #[test]
    fn test_nonpositive_quantity_rejected() {
        let mut item = valid_item();
        item.quantity = Some(dec!(0));
        assert_eq!(
            validate_line_item(3, &item),
            Err(OrderError::QuantityNotPositive { index: 3 })
        );
    }

    #[test]
    fn test_tax_rate_bounds_are_inclusive() {
        let mut item = valid_item();
        item.tax_rate = dec!(0);
        assert!(validate_line_item(1, &item).is_ok());

        item.tax_rate = dec!(100);
        assert!(validate_line_item(1, &item).is_ok());

        item.tax_rate = dec!(100.01);
        assert!(matches!(
            validate_line_item(1, &item),
            Err(OrderError::TaxRateOutOfRange { .. })
        ));

        item.tax_rate = dec!(-1);
        assert!(matches!(
            validate_line_item(1, &item),
            Err(OrderError::TaxRateOutOfRange { .. })
        ));
    }

    #[test]
    fn test_order_validation_reports_offending_line() {
        let mut bad = valid_item();
        bad.unit_price = dec!(-5);
        let items = vec![valid_item(), bad];

        assert_eq!(
            validate_order_items(&items),
            Err(OrderError::NegativeUnitPrice { index: 2 })
        );
    }
}
