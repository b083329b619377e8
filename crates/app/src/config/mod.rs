//! Application configuration

use clap::Args;
use thiserror::Error;

use crate::config::{
    logging::LoggingConfig, pricing::PricingConfig, store::StoreConfig,
    woocommerce::WooCommerceArgs,
};

pub mod logging;
pub mod pricing;
pub mod store;
pub mod woocommerce;

/// Settings shared by every command, read from flags or the environment.
#[derive(Debug, Args)]
pub struct AppConfig {
    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// `WooCommerce` REST API settings.
    #[command(flatten)]
    pub woocommerce: WooCommerceArgs,

    /// Cart storage settings.
    #[command(flatten)]
    pub store: StoreConfig,

    /// Shipping, tax and display currency.
    #[command(flatten)]
    pub pricing: PricingConfig,
}

/// Configuration values that parse but cannot be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("tax rate must be between 0 and 1, got {0}")]
    TaxRate(f64),

    #[error("flat shipping cannot be negative, got {0}")]
    FlatShipping(rust_decimal::Decimal),

    #[error("unknown currency code {0:?}")]
    Currency(String),

    #[error("woocommerce url cannot be empty")]
    MissingUrl,
}
