//! Order assembly and pricing
//!
//! `price_order` is the composition point the rest of the system builds
//! on: it runs the quantity rollup and the tax computation over the same
//! rows and binds the results to a currency. `Order` wraps that in the
//! record the order screen submits to the persistence API.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use core_kernel::{ClientId, Currency, InventoryItemId, LineItem, Money, OrderId};
use domain_tax::{calculate_tax_for_items, ItemTaxLine, TaxMethod, TaxSettings};
use domain_units::{calculate_total_quantity, QuantityRollup};

use crate::error::OrderError;
use crate::validation::validate_order_items;

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OrderStatus {
    /// Being edited
    Draft,
    /// Confirmed by the customer
    Confirmed,
    /// An invoice has been raised
    Invoiced,
    /// Abandoned or voided
    Cancelled,
}

/// Priced summary of a set of order rows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderPricing {
    /// Calculation method the totals were computed under
    pub method: TaxMethod,
    /// Currency of the monetary figures
    pub currency: Currency,
    /// Sum of pre-tax line amounts
    pub subtotal: Money,
    /// Sum of per-line tax
    pub tax_amount: Money,
    /// Amount payable
    pub total: Money,
    /// Per-line tax breakdown, in submitted order
    pub lines: Vec<ItemTaxLine>,
    /// Per-inventory-item quantity rollups
    pub quantities: HashMap<InventoryItemId, QuantityRollup>,
}

/// Prices a set of order rows: monetary totals plus quantity rollups
///
/// The rows are not validated here; this mirrors the engines' permissive
/// contract. Use [`Order::new`] for the validated path.
pub fn price_order(items: &[LineItem], currency: Currency, method: TaxMethod) -> OrderPricing {
    let taxes = calculate_tax_for_items(items, method);
    let quantities = calculate_total_quantity(items);

    debug!(
        "priced {} line items: total {} {}",
        items.len(),
        taxes.total,
        currency
    );

    OrderPricing {
        method,
        currency,
        subtotal: Money::new(taxes.subtotal, currency),
        tax_amount: Money::new(taxes.tax_amount, currency),
        total: Money::new(taxes.total, currency),
        lines: taxes.item_breakdown,
        quantities,
    }
}

/// Prices a set of order rows under the configured defaults
pub fn price_order_with_settings(items: &[LineItem], settings: &TaxSettings) -> OrderPricing {
    price_order(items, settings.currency, settings.calculation_method)
}

/// A customer order assembled from validated rows
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    /// Unique identifier
    pub id: OrderId,
    /// Order number (human-readable)
    pub order_number: String,
    /// Ordering client
    pub client_id: ClientId,
    /// Lifecycle status
    pub status: OrderStatus,
    /// The rows as submitted
    pub items: Vec<LineItem>,
    /// Computed pricing summary
    pub pricing: OrderPricing,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Validates and prices a new draft order
    ///
    /// # Arguments
    ///
    /// * `client_id` - The ordering client
    /// * `currency` - Currency the order is priced in
    /// * `items` - Submitted rows; every row must pass form validation
    /// * `method` - Tax calculation method
    pub fn new(
        client_id: ClientId,
        currency: Currency,
        items: Vec<LineItem>,
        method: TaxMethod,
    ) -> Result<Self, OrderError> {
        validate_order_items(&items)?;

        let pricing = price_order(&items, currency, method);
        let now = Utc::now();

        Ok(Self {
            id: OrderId::new_v7(),
            order_number: generate_order_number(),
            client_id,
            status: OrderStatus::Draft,
            items,
            pricing,
            created_at: now,
            updated_at: now,
        })
    }

    /// Confirms the order
    pub fn confirm(&mut self) {
        self.status = OrderStatus::Confirmed;
        self.updated_at = Utc::now();
    }

    /// Marks the order as invoiced
    pub fn mark_invoiced(&mut self) {
        self.status = OrderStatus::Invoiced;
        self.updated_at = Utc::now();
    }

    /// Cancels the order
    pub fn cancel(&mut self) {
        self.status = OrderStatus::Cancelled;
        self.updated_at = Utc::now();
    }

    /// Recomputes the pricing summary under a different method
    pub fn reprice(&mut self, method: TaxMethod) {
        self.pricing = price_order(&self.items, self.pricing.currency, method);
        self.updated_at = Utc::now();
    }
}

/// Generates a unique order number
fn generate_order_number() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("ORD-{}", duration.as_millis() % 10_000_000_000)
}
