// demos/ordering_app/src/seed.rs

//! Sample menu fixture. The core only needs prices; the names exist so
//! the demo's log output reads like a menu.

use comanda::{ItemId, StaticCatalog};
use rust_decimal::Decimal;

pub struct MenuEntry {
  pub id: ItemId,
  pub name: &'static str,
  pub price: Decimal,
}

/// Lists the sample menu in the catalog and returns the entries.
pub fn seed_catalog(catalog: &StaticCatalog) -> Vec<MenuEntry> {
  // (name, price in cents)
  let menu = [
    ("Margherita Pizza", 1299),
    ("Pepperoni Pizza", 1499),
    ("Classic Cheeseburger", 1099),
    ("Chicken Tikka Masala", 1599),
    ("Spring Rolls", 699),
    ("Chocolate Cake", 899),
  ];

  menu
    .iter()
    .map(|&(name, cents)| {
      let entry = MenuEntry {
        id: ItemId::new(),
        name,
        price: Decimal::new(cents, 2),
      };
      catalog.set_price(entry.id, entry.price);
      entry
    })
    .collect()
}
