// comanda/src/cart/mod.rs

//! The cart side of the core: [`CartLine`] records and the
//! [`CartLedger`] that maintains them.

pub mod ledger;
pub mod line;

pub use ledger::CartLedger;
pub use line::CartLine;
