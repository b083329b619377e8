//! WooCommerce Config

use clap::Args;

use crate::{config::ConfigError, woocommerce::WooCommerceConfig};

/// `WooCommerce` REST API settings.
#[derive(Debug, Args)]
pub struct WooCommerceArgs {
    /// Store base URL, e.g. `https://shop.example.com`
    #[arg(long, env = "WOOCOMMERCE_URL")]
    pub woocommerce_url: String,

    /// REST API consumer key
    #[arg(long, env = "WOOCOMMERCE_CONSUMER_KEY", hide_env_values = true)]
    pub woocommerce_consumer_key: String,

    /// REST API consumer secret
    #[arg(long, env = "WOOCOMMERCE_CONSUMER_SECRET", hide_env_values = true)]
    pub woocommerce_consumer_secret: String,

    /// REST API namespace and version
    #[arg(long, env = "WOOCOMMERCE_API_VERSION", default_value = "wc/v3")]
    pub woocommerce_api_version: String,
}

impl WooCommerceArgs {
    /// Client settings for these arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingUrl`] when the store URL is blank.
    pub fn client_config(&self) -> Result<WooCommerceConfig, ConfigError> {
        if self.woocommerce_url.trim().is_empty() {
            return Err(ConfigError::MissingUrl);
        }

        Ok(WooCommerceConfig {
            url: self.woocommerce_url.trim().to_string(),
            consumer_key: self.woocommerce_consumer_key.clone(),
            consumer_secret: self.woocommerce_consumer_secret.clone(),
            version: self.woocommerce_api_version.clone(),
        })
    }
}
