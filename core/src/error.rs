// comanda/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

use crate::types::{ItemId, OrderId, UserId};

#[derive(Debug, Error)]
pub enum ComandaError {
  #[error("Cart is empty for user {user_id}; nothing to check out")]
  EmptyCart { user_id: UserId },

  #[error("Order not found: {order_id}")]
  UnknownOrder { order_id: OrderId },

  #[error("Item not listed in catalog: {item_id}")]
  UnknownItem { item_id: ItemId },

  #[error("Invalid quantity: {quantity}")]
  InvalidQuantity { quantity: i64 },

  #[error("Storage collaborator failed. Source: {source}")]
  Storage {
    #[source]
    source: AnyhowError,
  },
}

// This is the key conversion comanda provides for collaborator errors:
// CartStore / OrderStore / Catalog implementations report failures as
// anyhow::Error, and the core surfaces them as ComandaError::Storage.
impl From<AnyhowError> for ComandaError {
  fn from(err: AnyhowError) -> Self {
    ComandaError::Storage { source: err }
  }
}

pub type ComandaResult<T, E = ComandaError> = std::result::Result<T, E>;
