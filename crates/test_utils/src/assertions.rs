//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::Money;
use domain_tax::TaxComputation;

/// Asserts that two decimals are equal within a tolerance
///
/// # Panics
///
/// Panics if the values differ by more than `tolerance`
pub fn assert_decimal_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "values differ by more than tolerance: actual={actual}, expected={expected}, diff={diff}, tolerance={tolerance}"
    );
}

/// Asserts that two Money values are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the currencies don't match or the amounts differ by more
/// than tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );
    assert_decimal_approx_eq(actual.amount(), expected.amount(), tolerance);
}

/// Asserts that a tax computation reconciles: subtotal plus tax lands
/// within a cent of the total
///
/// # Panics
///
/// Panics if the figures drift by more than 0.01
pub fn assert_tax_reconciles(computation: &TaxComputation) {
    let drift = (computation.subtotal + computation.tax_amount - computation.total).abs();
    assert!(
        drift <= dec!(0.01),
        "tax computation does not reconcile: subtotal={}, tax={}, total={}, drift={}",
        computation.subtotal,
        computation.tax_amount,
        computation.total,
        drift
    );
}
