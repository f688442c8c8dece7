// comanda/examples/basic_cart.rs

use comanda::{CartLedger, ComandaError, ItemId, MemoryCartStore, UserId};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::info;

fn main() -> Result<(), ComandaError> {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Basic Cart Example ---");

  // 1. Wire a ledger over the in-memory store.
  let ledger = CartLedger::new(Arc::new(MemoryCartStore::new()));
  let user = UserId::new();
  let pizza = ItemId::new();
  let cake = ItemId::new();

  // 2. Add items. Repeated adds for the same item merge into one line.
  ledger.add_item(user, pizza, Decimal::new(1299, 2))?; // 12.99
  ledger.add_item(user, pizza, Decimal::new(1299, 2))?;
  ledger.add_item(user, cake, Decimal::new(599, 2))?; // 5.99

  for line in ledger.list_items(user)? {
    info!(item = %line.item_id, quantity = line.quantity, price = %line.unit_price, "cart line");
  }
  info!(total = %ledger.total(user)?, "cart total");

  // 3. Quantity changes clamp at zero; the line disappears.
  ledger.change_quantity(user, cake, -5)?;
  assert_eq!(ledger.list_items(user)?.len(), 1);

  // Expected: 2 x 12.99 = 25.98
  assert_eq!(ledger.total(user)?, Decimal::new(2598, 2));
  info!(total = %ledger.total(user)?, "cart total after clamped decrement");

  Ok(())
}
