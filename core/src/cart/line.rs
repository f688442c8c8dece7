// comanda/src/cart/line.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{ItemId, UserId};

/// One quantity-accumulated cart record for a (user, item) pair.
///
/// At most one line exists per pair at any time; repeated adds merge
/// into the existing line's quantity. The `unit_price` is the catalog
/// price captured when the line was first created; later adds for the
/// same pair keep the remembered price (first-seen price wins).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
  pub user_id: UserId,
  pub item_id: ItemId,
  /// Always positive; a line whose quantity would reach zero is
  /// deleted instead.
  pub quantity: u32,
  pub unit_price: Decimal,
}

impl CartLine {
  pub fn new(user_id: UserId, item_id: ItemId, quantity: u32, unit_price: Decimal) -> Self {
    Self {
      user_id,
      item_id,
      quantity,
      unit_price,
    }
  }

  /// `quantity × unit_price`.
  pub fn subtotal(&self) -> Decimal {
    self.unit_price * Decimal::from(self.quantity)
  }
}
