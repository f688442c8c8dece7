// comanda/src/types.rs

//! Identifier newtypes shared across the crate.
//!
//! Users, menu items and orders are all keyed by UUIDs. The newtypes
//! keep the three id spaces from being mixed up at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! id_newtype {
  ($(#[$doc:meta])* $name:ident) => {
    $(#[$doc])*
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    pub struct $name(Uuid);

    impl $name {
      /// Generates a fresh random id.
      pub fn new() -> Self {
        Self(Uuid::new_v4())
      }

      pub fn as_uuid(&self) -> Uuid {
        self.0
      }
    }

    impl Default for $name {
      fn default() -> Self {
        Self::new()
      }
    }

    impl From<Uuid> for $name {
      fn from(id: Uuid) -> Self {
        Self(id)
      }
    }

    impl fmt::Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
      }
    }
  };
}

id_newtype!(
  /// Identifies a registered user. Carts and orders are scoped by this id.
  UserId
);
id_newtype!(
  /// Identifies a menu item in the external catalog.
  ItemId
);
id_newtype!(
  /// Identifies an order produced by checkout.
  OrderId
);
