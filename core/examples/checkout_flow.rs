// comanda/examples/checkout_flow.rs

use comanda::{
  CartLedger, ComandaError, ItemId, MemoryCartStore, MemoryOrderStore, OrderLifecycle, OrderStatus,
  StaticCatalog, UserId,
};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::info;

fn main() -> Result<(), ComandaError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Checkout Flow Example ---");

  // 1. Wire the full core: ledger + lifecycle over in-memory collaborators.
  let catalog = Arc::new(StaticCatalog::new());
  let ledger = Arc::new(CartLedger::new(Arc::new(MemoryCartStore::new())));
  let lifecycle = OrderLifecycle::new(ledger.clone(), Arc::new(MemoryOrderStore::new()), catalog.clone());

  let user = UserId::new();
  let pizza = ItemId::new();
  catalog.set_price(pizza, Decimal::new(1299, 2)); // 12.99

  // 2. Fill the cart and check out.
  ledger.add_item(user, pizza, Decimal::new(1299, 2))?;
  ledger.add_item(user, pizza, Decimal::new(1299, 2))?;
  let order_id = lifecycle.checkout(user, "123 Main St, Anytown")?;
  info!(%order_id, "order placed, cart is now empty");
  assert!(ledger.list_items(user)?.is_empty());

  // 3. The kitchen picks it up; the ETA gets stamped.
  let order = lifecycle.advance_status(order_id, OrderStatus::Preparing)?;
  info!(status = %order.status, eta = ?order.estimated_delivery_at, "order in progress");

  lifecycle.advance_status(order_id, OrderStatus::OutForDelivery)?;
  lifecycle.advance_status(order_id, OrderStatus::Delivered)?;
  info!(active = lifecycle.active_orders(user)?.len(), past = lifecycle.past_orders(user, 5)?.len(), "tracking views");

  // 4. Reorder: the frozen quantities flow back into the cart at the
  //    current catalog price.
  catalog.set_price(pizza, Decimal::new(1499, 2)); // price went up
  lifecycle.reorder(order_id)?;
  let lines = ledger.list_items(user)?;
  assert_eq!(lines.len(), 1);
  assert_eq!(lines[0].quantity, 2);
  assert_eq!(lines[0].unit_price, Decimal::new(1499, 2));
  info!(total = %ledger.total(user)?, "cart after reorder");

  Ok(())
}
