//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data that
//! maintains domain invariants.

use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::{Currency, InventoryItemId, LineItem};
use domain_units::UnitCategory;

/// Strategy for generating valid Currency values
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::USD),
        Just(Currency::EUR),
        Just(Currency::GBP),
        Just(Currency::JPY),
        Just(Currency::AUD),
        Just(Currency::CAD),
    ]
}

/// Strategy for generating measurement categories
pub fn unit_category_strategy() -> impl Strategy<Value = UnitCategory> {
    proptest::sample::select(UnitCategory::ALL.to_vec())
}

/// Strategy for generating positive unit prices with cent precision
pub fn unit_price_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for generating valid tax rate percentages (0 to 100)
pub fn tax_rate_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for generating positive order quantities
pub fn quantity_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..100_000i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for generating unit strings the conversion table knows,
/// including compound pack units
pub fn known_unit_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("ml".to_string()),
        Just("l".to_string()),
        Just("g".to_string()),
        Just("kg".to_string()),
        Just("t".to_string()),
        Just("mm".to_string()),
        Just("m".to_string()),
        Just("km".to_string()),
        Just("m2".to_string()),
        Just("ha".to_string()),
        Just("pcs".to_string()),
        Just("dozen".to_string()),
        Just("25KG".to_string()),
        Just("500ml".to_string()),
        Just("12pcs".to_string()),
    ]
}

/// Strategy for arbitrary unit strings, valid or garbage
pub fn arbitrary_unit_strategy() -> impl Strategy<Value = String> {
    "\\PC*"
}

/// Strategy for fully-populated line items that pass order validation
pub fn line_item_strategy() -> impl Strategy<Value = LineItem> {
    (
        quantity_strategy(),
        known_unit_strategy(),
        unit_price_strategy(),
        tax_rate_strategy(),
    )
        .prop_map(|(quantity, unit, unit_price, tax_rate)| {
            LineItem::new(InventoryItemId::new(), quantity, unit, unit_price, tax_rate)
        })
}
