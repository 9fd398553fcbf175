//! Order domain errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Rejections produced while validating submitted order rows
///
/// Line indices are 1-based, matching the per-item breakdown on priced
/// orders.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("order has no line items")]
    EmptyOrder,

    #[error("line {index}: missing {field}")]
    MissingField { index: usize, field: &'static str },

    #[error("line {index}: quantity must be positive")]
    QuantityNotPositive { index: usize },

    #[error("line {index}: unit price cannot be negative")]
    NegativeUnitPrice { index: usize },

    #[error("line {index}: tax rate {rate} is outside 0-100")]
    TaxRateOutOfRange { index: usize, rate: Decimal },
}
