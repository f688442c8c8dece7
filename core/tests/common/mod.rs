// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use comanda::{
  CartLedger, MemoryCartStore, MemoryOrderStore, OrderLifecycle, StaticCatalog, ItemId, UserId,
};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::Level;

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

/// Parses a human-readable price ("12.99") into a Decimal.
pub fn price(s: &str) -> Decimal {
  s.parse().expect("test price literal must parse")
}

/// A fully wired core over the in-memory collaborators, plus the
/// handles tests poke at directly.
pub struct Harness {
  pub ledger: Arc<CartLedger>,
  pub lifecycle: OrderLifecycle,
  pub catalog: Arc<StaticCatalog>,
  pub user: UserId,
}

impl Harness {
  pub fn new() -> Self {
    setup_tracing();
    let cart_store = Arc::new(MemoryCartStore::new());
    let order_store = Arc::new(MemoryOrderStore::new());
    let catalog = Arc::new(StaticCatalog::new());
    let ledger = Arc::new(CartLedger::new(cart_store));
    let lifecycle = OrderLifecycle::new(ledger.clone(), order_store, catalog.clone());
    Self {
      ledger,
      lifecycle,
      catalog,
      user: UserId::new(),
    }
  }

  /// Lists `count` fresh items in the catalog at the given prices and
  /// returns their ids.
  pub fn listed_items(&self, prices: &[&str]) -> Vec<ItemId> {
    prices
      .iter()
      .map(|p| {
        let item = ItemId::new();
        self.catalog.set_price(item, price(p));
        item
      })
      .collect()
  }
}
