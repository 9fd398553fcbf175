//! Core Kernel - Foundational types for the order system
//!
//! This crate provides the building blocks shared by the domain modules:
//! - Money types with precise decimal arithmetic
//! - Strongly-typed identifiers
//! - The line item value object exchanged between the pricing domains

pub mod identifiers;
pub mod line_item;
pub mod money;

pub use identifiers::{ClientId, InventoryItemId, InvoiceId, OrderId, UserId};
pub use line_item::LineItem;
pub use money::{round_half_up, Currency, Money, MoneyError, Rate};
