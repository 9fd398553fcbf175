//! Invoice records
//!
//! An invoice is derived from a priced order and carries everything the
//! PDF renderer prints: line descriptions, quantities with their entered
//! units, per-line tax figures, and the quantity conversion notes from the
//! rollup, verbatim.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use core_kernel::{ClientId, Currency, InvoiceId, Money, OrderId};
use domain_tax::TaxComputation;

use crate::order::Order;

/// Invoice status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InvoiceStatus {
    /// Invoice is being drafted
    Draft,
    /// Invoice has been issued
    Issued,
    /// Cancelled/voided
    Cancelled,
}

/// A printable invoice line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceLine {
    /// Line number, 1-based
    pub index: usize,
    /// Description as entered on the order row
    pub description: String,
    /// Ordered quantity
    pub quantity: Decimal,
    /// Unit as entered
    pub unit: String,
    /// Price per unit
    pub unit_price: Money,
    /// This line's tax figures
    pub tax: TaxComputation,
    /// Conversion note printed under the line, e.g. "25.00 kg × 2 = 50.00 kg"
    pub quantity_note: Option<String>,
}

/// An invoice raised from an order
#[derive(Debug, Clone, Serialize)]
pub struct Invoice {
    /// Unique identifier
    pub id: InvoiceId,
    /// Invoice number (human-readable)
    pub invoice_number: String,
    /// Order this invoice was raised from
    pub order_id: OrderId,
    /// Billed client
    pub client_id: ClientId,
    /// Status
    pub status: InvoiceStatus,
    /// Currency
    pub currency: Currency,
    /// Printable lines
    pub lines: Vec<InvoiceLine>,
    /// Subtotal
    pub subtotal: Money,
    /// Tax amount
    pub tax_amount: Money,
    /// Total amount
    pub total: Money,
    /// When the invoice was issued
    pub issued_at: Option<DateTime<Utc>>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Invoice {
    /// Builds a draft invoice from a priced order
    pub fn from_order(order: &Order) -> Self {
        let pricing = &order.pricing;

        let lines = pricing
            .lines
            .iter()
            .map(|line| {
                let quantity_note = line
                    .item
                    .inventory_id
                    .and_then(|id| pricing.quantities.get(&id))
                    .map(|rollup| rollup.calculation_breakdown.clone());

                InvoiceLine {
                    index: line.index,
                    description: line.item.description.clone().unwrap_or_default(),
                    quantity: line.item.quantity.unwrap_or_default(),
                    unit: line.item.unit.clone().unwrap_or_default(),
                    unit_price: Money::new(line.item.unit_price, pricing.currency),
                    tax: line.tax,
                    quantity_note,
                }
            })
            .collect();

        Self {
            id: InvoiceId::new_v7(),
            invoice_number: generate_invoice_number(),
            order_id: order.id,
            client_id: order.client_id,
            status: InvoiceStatus::Draft,
            currency: pricing.currency,
            lines,
            subtotal: pricing.subtotal,
            tax_amount: pricing.tax_amount,
            total: pricing.total,
            issued_at: None,
            created_at: Utc::now(),
        }
    }

    /// Issues the invoice
    pub fn issue(&mut self) {
        self.status = InvoiceStatus::Issued;
        self.issued_at = Some(Utc::now());
    }

    /// Voids the invoice
    pub fn cancel(&mut self) {
        self.status = InvoiceStatus::Cancelled;
    }
}

/// Generates a unique invoice number
fn generate_invoice_number() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("INV-{}", duration.as_millis() % 10_000_000_000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{InventoryItemId, LineItem};
    use domain_tax::TaxMethod;
    use rust_decimal_macros::dec;

    fn order() -> Order {
        let items = vec![
            LineItem::new(InventoryItemId::new(), dec!(2), "25KG", dec!(115), dec!(15))
                .with_description("Bread flour"),
            LineItem::new(InventoryItemId::new(), dec!(3), "pcs", dec!(20), dec!(15)),
        ];
        Order::new(ClientId::new(), Currency::USD, items, TaxMethod::Reverse).unwrap()
    }

    #[test]
    fn test_invoice_copies_order_totals() {
        let order = order();
        let invoice = Invoice::from_order(&order);

        assert_eq!(invoice.status, InvoiceStatus::Draft);
        assert!(invoice.invoice_number.starts_with("INV-"));
        assert_eq!(invoice.order_id, order.id);
        assert_eq!(invoice.total, order.pricing.total);
        assert_eq!(invoice.lines.len(), 2);
    }

    #[test]
    fn test_invoice_lines_carry_breakdown_notes() {
        let invoice = Invoice::from_order(&order());

        let flour = &invoice.lines[0];
        assert_eq!(flour.description, "Bread flour");
        assert_eq!(flour.unit, "25KG");
        assert_eq!(
            flour.quantity_note.as_deref(),
            Some("25.00 kg × 2 = 50.00 kg")
        );
    }

    #[test]
    fn test_issue_stamps_timestamp() {
        let mut invoice = Invoice::from_order(&order());
        assert!(invoice.issued_at.is_none());

        invoice.issue();

        assert_eq!(invoice.status, InvoiceStatus::Issued);
        assert!(invoice.issued_at.is_some());
    }
}
