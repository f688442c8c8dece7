// comanda/src/order/model.rs

//! Order records: an immutable snapshot of a checked-out cart.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::cart::CartLine;
use crate::types::{ItemId, OrderId, UserId};

/// The fixed status sequence an order moves through.
///
/// Statuses are set directly by staff tooling; the core does not
/// enforce forward-only transitions (see [`crate::OrderLifecycle`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
  Placed,
  Preparing,
  OutForDelivery,
  Delivered,
}

impl OrderStatus {
  /// Delivered orders belong to history; everything else is live.
  pub fn is_delivered(self) -> bool {
    matches!(self, OrderStatus::Delivered)
  }
}

impl fmt::Display for OrderStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      OrderStatus::Placed => "Placed",
      OrderStatus::Preparing => "Preparing",
      OrderStatus::OutForDelivery => "Out for Delivery",
      OrderStatus::Delivered => "Delivered",
    };
    f.write_str(s)
  }
}

impl FromStr for OrderStatus {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "Placed" => Ok(OrderStatus::Placed),
      "Preparing" => Ok(OrderStatus::Preparing),
      "Out for Delivery" => Ok(OrderStatus::OutForDelivery),
      "Delivered" => Ok(OrderStatus::Delivered),
      other => Err(format!("unknown order status: {other}")),
    }
  }
}

/// One item/quantity/frozen-price record owned by its [`Order`].
///
/// The price is captured at order time and must not track later catalog
/// changes; that is a correctness requirement, not an optimization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
  pub item_id: ItemId,
  pub quantity: u32,
  pub unit_price: Decimal,
}

impl OrderLine {
  pub fn subtotal(&self) -> Decimal {
    self.unit_price * Decimal::from(self.quantity)
  }
}

impl From<&CartLine> for OrderLine {
  fn from(line: &CartLine) -> Self {
    Self {
      item_id: line.item_id,
      quantity: line.quantity,
      unit_price: line.unit_price,
    }
  }
}

/// An order produced by checkout.
///
/// Immutable once created, except for `status` and
/// `estimated_delivery_at`. The total is computed from the frozen line
/// subtotals at creation and never recomputed from live catalog prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
  pub id: OrderId,
  pub user_id: UserId,
  pub status: OrderStatus,
  pub lines: Vec<OrderLine>,
  pub total: Decimal,
  pub delivery_address: String,
  pub created_at: DateTime<Utc>,
  /// Unset at creation; stamped once the kitchen picks the order up.
  pub estimated_delivery_at: Option<DateTime<Utc>>,
}
