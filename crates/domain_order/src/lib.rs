//! Order Domain - Priced orders and invoices
//!
//! This crate is the caller the two pricing domains are designed for. It
//! validates raw order rows the way the order form does, runs the quantity
//! rollup and the tax computation, and assembles the order and invoice
//! records that get handed to the persistence API and the PDF renderer.
//!
//! The units and tax domains stay independent of each other; only this
//! crate composes them.

pub mod error;
pub mod invoice;
pub mod order;
pub mod validation;

pub use error::OrderError;
pub use invoice::{Invoice, InvoiceLine, InvoiceStatus};
pub use order::{price_order, price_order_with_settings, Order, OrderPricing, OrderStatus};
pub use validation::{validate_line_item, validate_order_items};
