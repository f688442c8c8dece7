// comanda/src/catalog.rs

//! The catalog collaborator: a read-only source of current menu prices.
//!
//! The catalog itself (names, descriptions, availability) is owned
//! elsewhere; this core only ever asks it one question, "what does this
//! item cost right now". `add_item` callers are expected to have looked
//! the price up themselves; the lifecycle's `reorder` uses the catalog
//! directly to price lines that are not in the cart yet.

use parking_lot::RwLock;
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::types::ItemId;

/// Read-only price lookup, injected into [`crate::OrderLifecycle`].
///
/// Implementations are synchronous by contract; a database-backed
/// implementation would block on its own pool internally. Failures are
/// reported as `anyhow::Error` and surfaced by the core as
/// [`crate::ComandaError::Storage`].
pub trait Catalog: Send + Sync {
  /// Returns the current unit price for `item`, or `None` if the
  /// catalog no longer lists it.
  fn unit_price(&self, item: ItemId) -> anyhow::Result<Option<Decimal>>;
}

/// An in-memory [`Catalog`] backed by a price map.
///
/// Used by tests and demos; real deployments implement [`Catalog`] over
/// their menu storage.
#[derive(Debug, Default)]
pub struct StaticCatalog {
  prices: RwLock<HashMap<ItemId, Decimal>>,
}

impl StaticCatalog {
  pub fn new() -> Self {
    Self::default()
  }

  /// Lists `item` at `price`, replacing any previous listing.
  pub fn set_price(&self, item: ItemId, price: Decimal) {
    self.prices.write().insert(item, price);
  }

  /// Removes `item` from the catalog.
  pub fn delist(&self, item: ItemId) {
    self.prices.write().remove(&item);
  }
}

impl Catalog for StaticCatalog {
  fn unit_price(&self, item: ItemId) -> anyhow::Result<Option<Decimal>> {
    Ok(self.prices.read().get(&item).copied())
  }
}
