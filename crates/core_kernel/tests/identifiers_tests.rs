//! Tests for strongly-typed identifiers

use core_kernel::{ClientId, InventoryItemId, InvoiceId, OrderId, UserId};
use uuid::Uuid;

#[test]
fn test_each_id_type_has_its_own_prefix() {
    assert_eq!(OrderId::prefix(), "ORD");
    assert_eq!(InvoiceId::prefix(), "INV");
    assert_eq!(InventoryItemId::prefix(), "ITM");
    assert_eq!(ClientId::prefix(), "CLI");
    assert_eq!(UserId::prefix(), "USR");
}

#[test]
fn test_display_includes_prefix() {
    let id = InvoiceId::new();
    assert!(id.to_string().starts_with("INV-"));
}

#[test]
fn test_parse_round_trip() {
    let id = OrderId::new_v7();
    let parsed: OrderId = id.to_string().parse().unwrap();
    assert_eq!(parsed, id);
}

#[test]
fn test_parse_accepts_bare_uuid() {
    let uuid = Uuid::new_v4();
    let parsed: UserId = uuid.to_string().parse().unwrap();
    assert_eq!(parsed.as_uuid(), &uuid);
}

#[test]
fn test_parse_rejects_garbage() {
    assert!("not-a-uuid".parse::<ClientId>().is_err());
}

#[test]
fn test_serde_is_transparent() {
    let id = InventoryItemId::new();
    let json = serde_json::to_string(&id).unwrap();

    // Serializes as the bare UUID so map keys and API payloads stay flat
    assert_eq!(json, format!("\"{}\"", id.as_uuid()));

    let back: InventoryItemId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

#[test]
fn test_default_generates_a_fresh_id() {
    let a = OrderId::default();
    let b = OrderId::default();
    assert_ne!(a, b);
}
