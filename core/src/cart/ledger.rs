// comanda/src/cart/ledger.rs

//! The [`CartLedger`]: authoritative mutation path for a user's cart.
//!
//! Every operation takes the owning user's lock for its whole
//! read-modify-write sequence, so concurrent mutations for the same
//! user serialize instead of racing. That is what upholds the
//! one-line-per-(user, item) invariant on top of any [`CartStore`]
//! that keys lines by the pair. Carts of different users are
//! independent and never contend.

use parking_lot::Mutex;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::cart::CartLine;
use crate::error::{ComandaError, ComandaResult};
use crate::store::CartStore;
use crate::types::{ItemId, UserId};

pub struct CartLedger {
  store: Arc<dyn CartStore>,
  // One mutex per user, created lazily on first touch and pruned once
  // nobody holds it, so the table tracks active users rather than
  // every user ever seen. The outer map lock is only held long enough
  // to clone or drop the per-user Arc.
  user_locks: Mutex<HashMap<UserId, Arc<Mutex<()>>>>,
}

impl CartLedger {
  pub fn new(store: Arc<dyn CartStore>) -> Self {
    Self {
      store,
      user_locks: Mutex::new(HashMap::new()),
    }
  }

  /// Runs `f` while holding the user's cart lock, then retires the
  /// lock entry if no other thread is waiting on it.
  fn with_user_lock<T>(&self, user: UserId, f: impl FnOnce() -> T) -> T {
    let lock = {
      let mut locks = self.user_locks.lock();
      locks.entry(user).or_default().clone()
    };
    let result = {
      let _guard = lock.lock();
      f()
    };
    drop(lock);
    let mut locks = self.user_locks.lock();
    // A strong count of 1 means the map holds the only reference:
    // no guard is live and no other thread has cloned the entry (the
    // map lock serializes clones against this check).
    if locks.get(&user).is_some_and(|entry| Arc::strong_count(entry) == 1) {
      locks.remove(&user);
    }
    result
  }

  /// Adds one unit of `item` to the user's cart.
  ///
  /// If a line for the (user, item) pair already exists, its quantity
  /// is incremented and its remembered price left untouched; otherwise
  /// a new line is created with quantity 1 and `unit_price`. Never
  /// fails on valid identifiers.
  #[instrument(skip(self))]
  pub fn add_item(&self, user: UserId, item: ItemId, unit_price: Decimal) -> ComandaResult<CartLine> {
    self.merge_item(user, item, 1, unit_price)
  }

  /// Merges `quantity` units of `item` into the user's cart.
  ///
  /// This is the bulk form of [`add_item`](Self::add_item), used by
  /// reorder to replay a past order's line in one step. An existing
  /// line keeps its remembered price; `unit_price` only applies when
  /// the line is created. A zero `quantity` is rejected with
  /// [`ComandaError::InvalidQuantity`]; an increment past `u32::MAX`
  /// saturates.
  #[instrument(skip(self))]
  pub fn merge_item(
    &self,
    user: UserId,
    item: ItemId,
    quantity: u32,
    unit_price: Decimal,
  ) -> ComandaResult<CartLine> {
    if quantity == 0 {
      return Err(ComandaError::InvalidQuantity { quantity: 0 });
    }

    self.with_user_lock(user, || {
      let line = match self.store.get(user, item)? {
        Some(mut existing) => {
          // First-seen price wins; only the quantity accumulates.
          existing.quantity = existing.quantity.saturating_add(quantity);
          existing
        }
        None => CartLine::new(user, item, quantity, unit_price),
      };
      self.store.upsert(&line)?;
      debug!(new_quantity = line.quantity, "cart line merged");
      Ok(line)
    })
  }

  /// Applies `delta` (positive or negative) to the line's quantity,
  /// floored at zero. A line whose quantity reaches zero is deleted.
  ///
  /// Decrement below zero is silently absorbed, not an error; a no-op
  /// on a missing line likewise returns `Ok(None)`. Returns the line
  /// as it stands after the change, or `None` if it no longer exists.
  #[instrument(skip(self))]
  pub fn change_quantity(
    &self,
    user: UserId,
    item: ItemId,
    delta: i64,
  ) -> ComandaResult<Option<CartLine>> {
    self.with_user_lock(user, || {
      let Some(mut line) = self.store.get(user, item)? else {
        debug!("no cart line for pair; change absorbed");
        return Ok(None);
      };

      // Floor at zero, cap at u32::MAX: the cast below must never
      // truncate, or a huge delta could wrap a live line to zero.
      let next = (i64::from(line.quantity) + delta).clamp(0, i64::from(u32::MAX));
      if next == 0 {
        self.store.remove(user, item)?;
        debug!("cart line removed at zero quantity");
        return Ok(None);
      }
      line.quantity = next as u32;
      self.store.upsert(&line)?;
      debug!(new_quantity = line.quantity, "cart line quantity changed");
      Ok(Some(line))
    })
  }

  /// Deletes every line in the user's cart.
  #[instrument(skip(self))]
  pub fn remove_all(&self, user: UserId) -> ComandaResult<()> {
    self.with_user_lock(user, || {
      self.store.clear(user)?;
      debug!("cart cleared");
      Ok(())
    })
  }

  /// Sum of `quantity × unit_price` over the user's lines; zero for an
  /// empty or nonexistent cart. Reflects the state after the most
  /// recently applied mutation.
  pub fn total(&self, user: UserId) -> ComandaResult<Decimal> {
    self.with_user_lock(user, || {
      let lines = self.store.list(user)?;
      Ok(lines.iter().map(CartLine::subtotal).sum())
    })
  }

  /// The user's cart lines, insertion order irrelevant.
  pub fn list_items(&self, user: UserId) -> ComandaResult<Vec<CartLine>> {
    self.with_user_lock(user, || Ok(self.store.list(user)?))
  }

  /// Atomically lists and clears the user's cart in one critical
  /// section. This is the checkout snapshot primitive: nothing can be
  /// added to or removed from the cart between the read and the clear.
  #[instrument(skip(self))]
  pub fn take_all(&self, user: UserId) -> ComandaResult<Vec<CartLine>> {
    self.with_user_lock(user, || {
      let lines = self.store.list(user)?;
      if !lines.is_empty() {
        self.store.clear(user)?;
      }
      debug!(line_count = lines.len(), "cart snapshot taken");
      Ok(lines)
    })
  }
}

impl std::fmt::Debug for CartLedger {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("CartLedger").finish_non_exhaustive()
  }
}
