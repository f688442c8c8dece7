// comanda/src/store/mod.rs

//! Persistence collaborators for cart lines and orders.
//!
//! The core never talks to a database directly; it is handed a
//! [`CartStore`] and an [`OrderStore`] at construction time. The traits
//! are synchronous and deliberately small, one method per statement a
//! SQL implementation would issue. Implementations report failures as
//! `anyhow::Error`, which the core wraps into
//! [`crate::ComandaError::Storage`].

pub mod memory;

use crate::cart::CartLine;
use crate::order::Order;
use crate::types::{ItemId, OrderId, UserId};

/// Durable storage for [`CartLine`] records, keyed by (user, item).
///
/// Implementations must uphold the uniqueness invariant: at most one
/// stored line per (user, item) pair. `upsert` replaces any existing
/// line for the pair.
pub trait CartStore: Send + Sync {
  fn get(&self, user: UserId, item: ItemId) -> anyhow::Result<Option<CartLine>>;

  /// Inserts the line, or replaces the existing line for the same
  /// (user, item) pair.
  fn upsert(&self, line: &CartLine) -> anyhow::Result<()>;

  fn remove(&self, user: UserId, item: ItemId) -> anyhow::Result<()>;

  /// All lines for `user`, in no particular order.
  fn list(&self, user: UserId) -> anyhow::Result<Vec<CartLine>>;

  /// Deletes every line for `user`.
  fn clear(&self, user: UserId) -> anyhow::Result<()>;
}

/// Durable storage for [`Order`] records, keyed by order id.
pub trait OrderStore: Send + Sync {
  fn insert(&self, order: &Order) -> anyhow::Result<()>;

  /// Replaces the stored record for `order.id`. Only the status and
  /// estimated-delivery fields ever change after insert.
  fn update(&self, order: &Order) -> anyhow::Result<()>;

  fn get(&self, id: OrderId) -> anyhow::Result<Option<Order>>;

  /// All orders placed by `user`, in no particular order.
  fn list_for_user(&self, user: UserId) -> anyhow::Result<Vec<Order>>;
}
