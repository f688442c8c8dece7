// comanda/src/order/lifecycle.rs

//! The [`OrderLifecycle`]: checkout, status updates, tracking views
//! and reorder.
//!
//! Status writes are permissive on purpose: staff tooling sets the
//! status field directly, and the core does not enforce forward-only
//! transitions. The one piece of status-driven behavior is the
//! estimated-delivery stamp, applied on the first transition away from
//! `Placed`.

use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::cart::CartLedger;
use crate::catalog::Catalog;
use crate::error::{ComandaError, ComandaResult};
use crate::order::{Order, OrderLine, OrderStatus};
use crate::store::OrderStore;
use crate::types::{OrderId, UserId};

/// Minutes added to the current time when the estimated-delivery
/// timestamp is first stamped.
pub const ESTIMATED_DELIVERY_MINUTES: i64 = 45;

pub struct OrderLifecycle {
  ledger: Arc<CartLedger>,
  orders: Arc<dyn OrderStore>,
  catalog: Arc<dyn Catalog>,
}

impl OrderLifecycle {
  pub fn new(ledger: Arc<CartLedger>, orders: Arc<dyn OrderStore>, catalog: Arc<dyn Catalog>) -> Self {
    Self {
      ledger,
      orders,
      catalog,
    }
  }

  /// Promotes the user's cart to an immutable order and clears the
  /// cart.
  ///
  /// The snapshot-and-clear runs as a single critical section on the
  /// user's cart, so nothing can slip into the cart between the total
  /// being computed and the cart being emptied. Line prices are frozen
  /// as they stood in the cart; the total is the sum of the frozen
  /// subtotals. Fails with [`ComandaError::EmptyCart`] if there is
  /// nothing to check out.
  #[instrument(skip(self, delivery_address))]
  pub fn checkout(&self, user: UserId, delivery_address: &str) -> ComandaResult<OrderId> {
    let cart_lines = self.ledger.take_all(user)?;
    if cart_lines.is_empty() {
      warn!("checkout attempted on empty cart");
      return Err(ComandaError::EmptyCart { user_id: user });
    }

    let lines: Vec<OrderLine> = cart_lines.iter().map(OrderLine::from).collect();
    let total = lines.iter().map(OrderLine::subtotal).sum();
    let order = Order {
      id: OrderId::new(),
      user_id: user,
      status: OrderStatus::Placed,
      lines,
      total,
      delivery_address: delivery_address.to_owned(),
      created_at: Utc::now(),
      estimated_delivery_at: None,
    };
    self.orders.insert(&order)?;
    info!(order_id = %order.id, %total, line_count = order.lines.len(), "order placed");
    Ok(order.id)
  }

  /// Overwrites the order's status.
  ///
  /// Any of the four statuses may be written, in any direction. When
  /// the order leaves `Placed` for the first time, the
  /// estimated-delivery timestamp is stamped as now plus
  /// [`ESTIMATED_DELIVERY_MINUTES`]; once set it is never changed.
  /// Fails with [`ComandaError::UnknownOrder`] for a missing id.
  #[instrument(skip(self))]
  pub fn advance_status(&self, order_id: OrderId, new_status: OrderStatus) -> ComandaResult<Order> {
    let mut order = self.fetch(order_id)?;

    let leaving_placed = order.status == OrderStatus::Placed && new_status != OrderStatus::Placed;
    if leaving_placed && order.estimated_delivery_at.is_none() {
      order.estimated_delivery_at = Some(Utc::now() + Duration::minutes(ESTIMATED_DELIVERY_MINUTES));
    }
    order.status = new_status;
    self.orders.update(&order)?;
    info!("order status updated");
    Ok(order)
  }

  /// Fetches a single order, for tracking views.
  pub fn order(&self, order_id: OrderId) -> ComandaResult<Order> {
    self.fetch(order_id)
  }

  /// The user's not-yet-delivered orders, most recent first.
  pub fn active_orders(&self, user: UserId) -> ComandaResult<Vec<Order>> {
    let mut orders: Vec<Order> = self
      .orders
      .list_for_user(user)?
      .into_iter()
      .filter(|o| !o.status.is_delivered())
      .collect();
    Self::sort_most_recent_first(&mut orders);
    Ok(orders)
  }

  /// The user's delivered orders, most recent first, at most `limit`.
  pub fn past_orders(&self, user: UserId, limit: usize) -> ComandaResult<Vec<Order>> {
    let mut orders: Vec<Order> = self
      .orders
      .list_for_user(user)?
      .into_iter()
      .filter(|o| o.status.is_delivered())
      .collect();
    Self::sort_most_recent_first(&mut orders);
    orders.truncate(limit);
    Ok(orders)
  }

  /// Replays a past order's lines back into the live cart.
  ///
  /// Each frozen quantity is merged into the cart. Lines already in
  /// the cart simply accumulate quantity and keep their remembered
  /// price; lines not in the cart are created at the **current**
  /// catalog price; reordering does not re-create historical prices.
  /// Reordering the same order twice doubles the added quantities.
  /// Fails with [`ComandaError::UnknownItem`] if the catalog no longer
  /// lists one of the order's items.
  #[instrument(skip(self))]
  pub fn reorder(&self, order_id: OrderId) -> ComandaResult<()> {
    let order = self.fetch(order_id)?;
    for line in &order.lines {
      let price = self
        .catalog
        .unit_price(line.item_id)?
        .ok_or(ComandaError::UnknownItem { item_id: line.item_id })?;
      self.ledger.merge_item(order.user_id, line.item_id, line.quantity, price)?;
    }
    info!(user_id = %order.user_id, line_count = order.lines.len(), "past order replayed into cart");
    Ok(())
  }

  fn fetch(&self, order_id: OrderId) -> ComandaResult<Order> {
    self
      .orders
      .get(order_id)?
      .ok_or(ComandaError::UnknownOrder { order_id })
  }

  fn sort_most_recent_first(orders: &mut [Order]) {
    // Tie-break on id so the ordering is total even when two orders
    // share a creation timestamp.
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
  }
}

impl std::fmt::Debug for OrderLifecycle {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("OrderLifecycle").finish_non_exhaustive()
  }
}
