// comanda/src/store/memory.rs

//! In-memory implementations of the persistence collaborators.
//!
//! These back the tests and demos and double as the reference
//! semantics for real implementations. The cart map is keyed by the
//! (user, item) pair, which makes the uniqueness invariant structural;
//! a SQL implementation would enforce the same thing with a unique
//! constraint on (user_id, item_id).

use parking_lot::RwLock;
use std::collections::HashMap;

use super::{CartStore, OrderStore};
use crate::cart::CartLine;
use crate::order::Order;
use crate::types::{ItemId, OrderId, UserId};

#[derive(Debug, Default)]
pub struct MemoryCartStore {
  lines: RwLock<HashMap<(UserId, ItemId), CartLine>>,
}

impl MemoryCartStore {
  pub fn new() -> Self {
    Self::default()
  }
}

impl CartStore for MemoryCartStore {
  fn get(&self, user: UserId, item: ItemId) -> anyhow::Result<Option<CartLine>> {
    Ok(self.lines.read().get(&(user, item)).cloned())
  }

  fn upsert(&self, line: &CartLine) -> anyhow::Result<()> {
    self.lines.write().insert((line.user_id, line.item_id), line.clone());
    Ok(())
  }

  fn remove(&self, user: UserId, item: ItemId) -> anyhow::Result<()> {
    self.lines.write().remove(&(user, item));
    Ok(())
  }

  fn list(&self, user: UserId) -> anyhow::Result<Vec<CartLine>> {
    let lines = self.lines.read();
    Ok(lines.values().filter(|l| l.user_id == user).cloned().collect())
  }

  fn clear(&self, user: UserId) -> anyhow::Result<()> {
    self.lines.write().retain(|(owner, _), _| *owner != user);
    Ok(())
  }
}

#[derive(Debug, Default)]
pub struct MemoryOrderStore {
  orders: RwLock<HashMap<OrderId, Order>>,
}

impl MemoryOrderStore {
  pub fn new() -> Self {
    Self::default()
  }
}

impl OrderStore for MemoryOrderStore {
  fn insert(&self, order: &Order) -> anyhow::Result<()> {
    self.orders.write().insert(order.id, order.clone());
    Ok(())
  }

  fn update(&self, order: &Order) -> anyhow::Result<()> {
    self.orders.write().insert(order.id, order.clone());
    Ok(())
  }

  fn get(&self, id: OrderId) -> anyhow::Result<Option<Order>> {
    Ok(self.orders.read().get(&id).cloned())
  }

  fn list_for_user(&self, user: UserId) -> anyhow::Result<Vec<Order>> {
    let orders = self.orders.read();
    Ok(orders.values().filter(|o| o.user_id == user).cloned().collect())
  }
}
