//! Tax Domain - Monetary totals for orders and invoices
//!
//! Computes subtotal, tax amount, and total for a single line or a batch of
//! line items, under either tax-exclusive ("add") or tax-inclusive
//! ("reverse") pricing. All functions are pure and total: degenerate rates
//! and half-filled rows produce a numeric answer, never an error, because
//! order entry must keep working while a form is only partially valid.
//!
//! Range-checking tax rates is the caller's job; see the order domain's
//! validation layer.

pub mod calculation;
pub mod settings;

pub use calculation::{
    calculate_tax, calculate_tax_for_items, ItemTaxLine, ItemizedTaxComputation, TaxComputation,
    TaxMethod,
};
pub use settings::TaxSettings;
