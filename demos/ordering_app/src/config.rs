// demos/ordering_app/src/config.rs

use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
  /// Delivery address used for the scripted checkout.
  pub delivery_address: String,
  /// How many delivered orders the history view shows.
  pub past_orders_limit: usize,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let delivery_address =
      env::var("DELIVERY_ADDRESS").unwrap_or_else(|_| "123 Main St, Anytown, USA".to_string());

    let past_orders_limit = env::var("PAST_ORDERS_LIMIT")
      .unwrap_or_else(|_| "5".to_string())
      .parse::<usize>()
      .context("Invalid PAST_ORDERS_LIMIT")?;

    tracing::info!("Application configuration loaded successfully.");
    Ok(Self {
      delivery_address,
      past_orders_limit,
    })
  }
}
