// tests/order_lifecycle_tests.rs
mod common;
use common::*;

use comanda::{ComandaError, OrderId, OrderStatus};
use rust_decimal::Decimal;
use std::thread::sleep;
use std::time::Duration;

#[test]
fn checkout_on_empty_cart_fails() {
  let h = Harness::new();

  let err = h.lifecycle.checkout(h.user, "123 Main St").unwrap_err();
  assert!(matches!(err, ComandaError::EmptyCart { user_id } if user_id == h.user));
}

#[test]
fn checkout_freezes_the_cart_total_and_clears_the_cart() {
  let h = Harness::new();
  let items = h.listed_items(&["12.99", "9.99"]);

  h.ledger.add_item(h.user, items[0], price("12.99")).unwrap();
  h.ledger.add_item(h.user, items[0], price("12.99")).unwrap();
  h.ledger.add_item(h.user, items[1], price("9.99")).unwrap();
  let cart_total = h.ledger.total(h.user).unwrap();

  let order_id = h.lifecycle.checkout(h.user, "123 Main St, Anytown").unwrap();
  let order = h.lifecycle.order(order_id).unwrap();

  assert_eq!(order.total, cart_total);
  assert_eq!(order.total, price("35.97"));
  assert_eq!(order.status, OrderStatus::Placed);
  assert_eq!(order.delivery_address, "123 Main St, Anytown");
  assert!(order.estimated_delivery_at.is_none(), "ETA is assigned later");
  assert_eq!(order.lines.len(), 2);

  assert!(h.ledger.list_items(h.user).unwrap().is_empty());
  assert_eq!(h.ledger.total(h.user).unwrap(), Decimal::ZERO);
}

#[test]
fn order_total_ignores_later_catalog_price_changes() {
  let h = Harness::new();
  let items = h.listed_items(&["12.99"]);

  h.ledger.add_item(h.user, items[0], price("12.99")).unwrap();
  let order_id = h.lifecycle.checkout(h.user, "addr").unwrap();

  // Catalog price doubles after the order was placed.
  h.catalog.set_price(items[0], price("25.98"));

  let order = h.lifecycle.order(order_id).unwrap();
  assert_eq!(order.total, price("12.99"));
  assert_eq!(order.lines[0].unit_price, price("12.99"));
}

#[test]
fn advance_status_on_unknown_order_fails() {
  let h = Harness::new();
  let missing = OrderId::new();

  let err = h.lifecycle.advance_status(missing, OrderStatus::Preparing).unwrap_err();
  assert!(matches!(err, ComandaError::UnknownOrder { order_id } if order_id == missing));
}

#[test]
fn leaving_placed_stamps_the_estimated_delivery_exactly_once() {
  let h = Harness::new();
  let items = h.listed_items(&["9.99"]);
  h.ledger.add_item(h.user, items[0], price("9.99")).unwrap();
  let order_id = h.lifecycle.checkout(h.user, "addr").unwrap();

  let order = h.lifecycle.advance_status(order_id, OrderStatus::Preparing).unwrap();
  let eta = order.estimated_delivery_at.expect("ETA stamped on leaving Placed");

  let order = h.lifecycle.advance_status(order_id, OrderStatus::OutForDelivery).unwrap();
  assert_eq!(order.estimated_delivery_at, Some(eta), "ETA must not move once set");

  // Status writes are permissive: a write back to Placed is accepted
  // and still leaves the ETA alone.
  let order = h.lifecycle.advance_status(order_id, OrderStatus::Placed).unwrap();
  assert_eq!(order.status, OrderStatus::Placed);
  assert_eq!(order.estimated_delivery_at, Some(eta));
}

#[test]
fn active_and_past_orders_partition_on_delivered() {
  let h = Harness::new();
  let items = h.listed_items(&["12.99"]);

  h.ledger.add_item(h.user, items[0], price("12.99")).unwrap();
  let first = h.lifecycle.checkout(h.user, "addr").unwrap();
  sleep(Duration::from_millis(2)); // Distinct creation timestamps.
  h.ledger.add_item(h.user, items[0], price("12.99")).unwrap();
  let second = h.lifecycle.checkout(h.user, "addr").unwrap();

  h.lifecycle.advance_status(first, OrderStatus::Delivered).unwrap();

  let active = h.lifecycle.active_orders(h.user).unwrap();
  assert_eq!(active.len(), 1);
  assert_eq!(active[0].id, second);

  let past = h.lifecycle.past_orders(h.user, 5).unwrap();
  assert_eq!(past.len(), 1);
  assert_eq!(past[0].id, first);
}

#[test]
fn past_orders_are_most_recent_first_and_bounded() {
  let h = Harness::new();
  let items = h.listed_items(&["5.99"]);

  let mut ids = Vec::new();
  for _ in 0..7 {
    h.ledger.add_item(h.user, items[0], price("5.99")).unwrap();
    let id = h.lifecycle.checkout(h.user, "addr").unwrap();
    h.lifecycle.advance_status(id, OrderStatus::Delivered).unwrap();
    ids.push(id);
    sleep(Duration::from_millis(2));
  }

  let past = h.lifecycle.past_orders(h.user, 5).unwrap();
  assert_eq!(past.len(), 5, "history view is bounded by the caller's limit");
  let expected: Vec<_> = ids.iter().rev().take(5).copied().collect();
  let got: Vec<_> = past.iter().map(|o| o.id).collect();
  assert_eq!(got, expected);
}

#[test]
fn reorder_on_unknown_order_fails() {
  let h = Harness::new();
  let missing = OrderId::new();

  let err = h.lifecycle.reorder(missing).unwrap_err();
  assert!(matches!(err, ComandaError::UnknownOrder { order_id } if order_id == missing));
}

#[test]
fn reorder_replays_frozen_quantities_and_accumulates_on_repeat() {
  let h = Harness::new();
  let items = h.listed_items(&["12.99", "5.99"]);

  h.ledger.merge_item(h.user, items[0], 2, price("12.99")).unwrap();
  h.ledger.add_item(h.user, items[1], price("5.99")).unwrap();
  let order_id = h.lifecycle.checkout(h.user, "addr").unwrap();

  h.lifecycle.reorder(order_id).unwrap();
  let mut lines = h.ledger.list_items(h.user).unwrap();
  lines.sort_by_key(|l| l.quantity);
  assert_eq!(lines.len(), 2);
  assert_eq!(lines[0].quantity, 1);
  assert_eq!(lines[1].quantity, 2);

  // Reordering again doubles the quantities, it does not overwrite.
  h.lifecycle.reorder(order_id).unwrap();
  let mut lines = h.ledger.list_items(h.user).unwrap();
  lines.sort_by_key(|l| l.quantity);
  assert_eq!(lines[0].quantity, 2);
  assert_eq!(lines[1].quantity, 4);
}

#[test]
fn reorder_prices_new_lines_from_the_live_catalog() {
  let h = Harness::new();
  let items = h.listed_items(&["12.99"]);

  h.ledger.add_item(h.user, items[0], price("12.99")).unwrap();
  let order_id = h.lifecycle.checkout(h.user, "addr").unwrap();

  // Price rises after the order; an empty cart picks up the new price.
  h.catalog.set_price(items[0], price("14.99"));
  h.lifecycle.reorder(order_id).unwrap();

  let lines = h.ledger.list_items(h.user).unwrap();
  assert_eq!(lines[0].unit_price, price("14.99"));
  assert_eq!(h.ledger.total(h.user).unwrap(), price("14.99"));
}

#[test]
fn reorder_keeps_the_remembered_price_of_existing_lines() {
  let h = Harness::new();
  let items = h.listed_items(&["12.99"]);

  h.ledger.add_item(h.user, items[0], price("12.99")).unwrap();
  let order_id = h.lifecycle.checkout(h.user, "addr").unwrap();

  // The cart already holds the item at the old price when the reorder
  // lands; only the quantity accumulates.
  h.ledger.add_item(h.user, items[0], price("12.99")).unwrap();
  h.catalog.set_price(items[0], price("14.99"));
  h.lifecycle.reorder(order_id).unwrap();

  let lines = h.ledger.list_items(h.user).unwrap();
  assert_eq!(lines.len(), 1);
  assert_eq!(lines[0].quantity, 2);
  assert_eq!(lines[0].unit_price, price("12.99"));
}

#[test]
fn reorder_fails_when_an_item_is_delisted() {
  let h = Harness::new();
  let items = h.listed_items(&["12.99"]);

  h.ledger.add_item(h.user, items[0], price("12.99")).unwrap();
  let order_id = h.lifecycle.checkout(h.user, "addr").unwrap();

  h.catalog.delist(items[0]);

  let err = h.lifecycle.reorder(order_id).unwrap_err();
  assert!(matches!(err, ComandaError::UnknownItem { item_id } if item_id == items[0]));
}
