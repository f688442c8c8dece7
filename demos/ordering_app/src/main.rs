// demos/ordering_app/src/main.rs

// Declare modules for the application
mod config;
mod seed;

use crate::config::AppConfig;

use anyhow::Result;
use comanda::{
  CartLedger, MemoryCartStore, MemoryOrderStore, OrderLifecycle, OrderStatus, StaticCatalog, UserId,
};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

fn main() -> Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  info!("Starting ordering demo...");

  // Load application configuration
  let app_config = AppConfig::from_env()?;

  // Wire the core over the in-memory collaborators and seed the menu.
  let catalog = Arc::new(StaticCatalog::new());
  let menu = seed::seed_catalog(&catalog);
  for entry in &menu {
    info!(item = %entry.id, name = entry.name, price = %entry.price, "menu item listed");
  }

  let ledger = Arc::new(CartLedger::new(Arc::new(MemoryCartStore::new())));
  let lifecycle = OrderLifecycle::new(ledger.clone(), Arc::new(MemoryOrderStore::new()), catalog.clone());

  let customer = UserId::new();
  let pizza = &menu[0];
  let rolls = &menu[4];

  // A customer browses and fills the cart. The second pizza add merges
  // into the existing line.
  ledger.add_item(customer, pizza.id, pizza.price)?;
  ledger.add_item(customer, pizza.id, pizza.price)?;
  ledger.add_item(customer, rolls.id, rolls.price)?;
  info!(total = %ledger.total(customer)?, "cart ready for checkout");

  // Checkout promotes the cart to an order and empties the cart.
  let order_id = lifecycle.checkout(customer, &app_config.delivery_address)?;
  info!(%order_id, "order placed");

  // Staff advance the order; the first move away from Placed stamps
  // the estimated delivery time.
  let order = lifecycle.advance_status(order_id, OrderStatus::Preparing)?;
  info!(status = %order.status, eta = ?order.estimated_delivery_at, "kitchen picked up the order");
  lifecycle.advance_status(order_id, OrderStatus::OutForDelivery)?;
  lifecycle.advance_status(order_id, OrderStatus::Delivered)?;

  let active = lifecycle.active_orders(customer)?;
  let past = lifecycle.past_orders(customer, app_config.past_orders_limit)?;
  info!(active = active.len(), past = past.len(), "tracking views after delivery");

  // The pizza price rises, then the customer hits "Reorder" on the
  // delivered order: quantities replay at the current catalog price.
  catalog.set_price(pizza.id, pizza.price + Decimal::new(100, 2));
  lifecycle.reorder(order_id)?;
  for line in ledger.list_items(customer)? {
    info!(item = %line.item_id, quantity = line.quantity, price = %line.unit_price, "cart line after reorder");
  }
  info!(total = %ledger.total(customer)?, "cart total after reorder");

  Ok(())
}
