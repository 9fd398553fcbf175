//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the order
//! system. These fixtures are designed to be consistent and predictable
//! for unit tests.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money, Rate};

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Creates a standard USD amount for testing
    pub fn usd_100() -> Money {
        Money::new(dec!(100.00), Currency::USD)
    }

    /// Creates a zero amount
    pub fn usd_zero() -> Money {
        Money::zero(Currency::USD)
    }

    /// Creates a EUR amount for currency mismatch tests
    pub fn eur_100() -> Money {
        Money::new(dec!(100.00), Currency::EUR)
    }

    /// Creates a JPY amount (zero decimal places)
    pub fn jpy_10000() -> Money {
        Money::new(dec!(10000), Currency::JPY)
    }
}

/// Fixture for tax rate test data
pub struct RateFixtures;

impl RateFixtures {
    /// The standard 15% rate most test items use
    pub fn standard() -> Rate {
        Rate::from_percentage(dec!(15))
    }

    /// A zero rate, where both calculation methods agree
    pub fn zero() -> Rate {
        Rate::from_percentage(dec!(0))
    }

    /// The 15% rate as the percentage a form would submit
    pub fn standard_percentage() -> Decimal {
        dec!(15)
    }
}

/// Fixture for unit strings as entered on order rows
pub struct UnitFixtures;

impl UnitFixtures {
    /// A compound weight unit: a 25 kg pack
    pub fn pack_of_25_kg() -> &'static str {
        "25KG"
    }

    /// A compound volume unit: a 500 ml bottle
    pub fn bottle_500_ml() -> &'static str {
        "500ml"
    }

    /// A loose weight unit
    pub fn loose_kg() -> &'static str {
        "kg"
    }

    /// A plain countable unit
    pub fn countable() -> &'static str {
        "pcs"
    }

    /// A unit the conversion table does not know
    pub fn unknown() -> &'static str {
        "bags"
    }
}
