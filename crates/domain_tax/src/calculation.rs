//! Tax calculation
//!
//! One function computes a single line, another folds a batch of lines
//! into an order-level total with a per-item breakdown.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{round_half_up, LineItem, Rate};

/// How entered prices relate to tax
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxMethod {
    /// Tax-exclusive pricing: tax is computed on top of the entered price
    Add,
    /// Tax-inclusive pricing: the entered price already contains tax
    #[default]
    Reverse,
}

/// Monetary result of a tax calculation
///
/// The three figures round to cents independently, so `subtotal +
/// tax_amount` can sit a cent away from `total`. Invoices have always been
/// issued with that behavior and reconciliation downstream tolerates it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxComputation {
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub total: Decimal,
}

/// One line of an itemized batch computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemTaxLine {
    /// Position of the line in the submitted order, 1-based
    pub index: usize,
    /// The item exactly as submitted
    pub item: LineItem,
    /// This line's own computation
    pub tax: TaxComputation,
}

/// Batch result: order-level aggregate plus per-item breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemizedTaxComputation {
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub total: Decimal,
    pub item_breakdown: Vec<ItemTaxLine>,
}

/// Computes subtotal, tax amount, and total for one line
///
/// Under [`TaxMethod::Add`] the entered price is pre-tax; under
/// [`TaxMethod::Reverse`] the entered price is the tax-inclusive total and
/// the tax share is extracted from it. Rates outside 0–100 are not
/// rejected here; the order form enforces that range before submitting.
pub fn calculate_tax(
    unit_price: Decimal,
    quantity: Decimal,
    rate: Rate,
    method: TaxMethod,
) -> TaxComputation {
    let line_amount = unit_price * quantity;

    let (subtotal, tax_amount, total) = match method {
        TaxMethod::Add => {
            let tax = line_amount * rate.as_decimal();
            (line_amount, tax, line_amount + tax)
        }
        TaxMethod::Reverse => {
            let divisor = Decimal::ONE + rate.as_decimal();
            // A -100% rate would zero the divisor; treat it as no
            // extractable tax rather than fail
            let tax = if divisor.is_zero() {
                Decimal::ZERO
            } else {
                line_amount - line_amount / divisor
            };
            (line_amount - tax, tax, line_amount)
        }
    };

    TaxComputation {
        subtotal: round_half_up(subtotal, 2),
        tax_amount: round_half_up(tax_amount, 2),
        total: round_half_up(total, 2),
    }
}

/// Computes tax for every line item and aggregates the order totals
///
/// Lines are processed in input order and indexed from one in the
/// breakdown. The aggregate figures are the sums of the already-rounded
/// line figures, rounded once more to cents; the aggregate is what the
/// customer sees, so it must match the printed lines rather than the
/// unrounded arithmetic. A line missing its quantity contributes zero.
pub fn calculate_tax_for_items(items: &[LineItem], method: TaxMethod) -> ItemizedTaxComputation {
    let mut subtotal = Decimal::ZERO;
    let mut tax_amount = Decimal::ZERO;
    let mut total = Decimal::ZERO;
    let mut item_breakdown = Vec::with_capacity(items.len());

    for (position, item) in items.iter().enumerate() {
        let tax = calculate_tax(
            item.unit_price,
            item.quantity.unwrap_or_default(),
            Rate::from_percentage(item.tax_rate),
            method,
        );

        subtotal += tax.subtotal;
        tax_amount += tax.tax_amount;
        total += tax.total;

        item_breakdown.push(ItemTaxLine {
            index: position + 1,
            item: item.clone(),
            tax,
        });
    }

    debug!("computed tax for {} line items", items.len());

    ItemizedTaxComputation {
        subtotal: round_half_up(subtotal, 2),
        tax_amount: round_half_up(tax_amount, 2),
        total: round_half_up(total, 2),
        item_breakdown,
    }
}
