// src/lib.rs

//! Comanda: a synchronous, pluggable cart-and-order core for
//! food-ordering backends.
//!
//! Two cooperating components make up the crate:
//!  - [`CartLedger`] maintains one quantity-accumulated line per
//!    (user, item) pair and exposes the cart's running total.
//!  - [`OrderLifecycle`] promotes a cart to an immutable [`Order`] at
//!    checkout, advances its status, and replays past orders back into
//!    the cart.
//!
//! Persistence and catalog lookups are injected as synchronous
//! collaborators ([`CartStore`], [`OrderStore`], [`Catalog`]); the
//! crate ships in-memory implementations for tests and demos. All
//! operations for a given user are serialized by a per-user lock, so
//! concurrent mutations merge instead of racing.

pub mod cart;
pub mod catalog;
pub mod error;
pub mod order;
pub mod store;
pub mod types;

// --- Re-exports for the Public API ---

pub use crate::cart::{CartLedger, CartLine};
pub use crate::order::lifecycle::ESTIMATED_DELIVERY_MINUTES;
pub use crate::order::{Order, OrderLifecycle, OrderLine, OrderStatus};

pub use crate::catalog::{Catalog, StaticCatalog};
pub use crate::store::memory::{MemoryCartStore, MemoryOrderStore};
pub use crate::store::{CartStore, OrderStore};

pub use crate::error::{ComandaError, ComandaResult};
pub use crate::types::{ItemId, OrderId, UserId};
