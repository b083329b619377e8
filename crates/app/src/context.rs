//! App Context

use std::sync::Arc;

use intellismart::{
    CartEngine, CartServices, CartSettings, pricing::NoDiscount, store::StoreError,
};
use rusty_money::iso::Currency;
use thiserror::Error;

use crate::{
    config::{AppConfig, ConfigError},
    store::FileCartStore,
    woocommerce::WooCommerceClient,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid cart key: {0}")]
    CartKey(#[source] StoreError),
}

/// Collaborators and settings shared by every command.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub woocommerce: Arc<WooCommerceClient>,
    pub store: Arc<FileCartStore>,
    pub settings: CartSettings,
    pub currency: &'static Currency,
}

impl AppContext {
    /// Build application context from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when a configured value cannot be used.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppInitError> {
        FileCartStore::validate_key(&config.store.cart_key).map_err(AppInitError::CartKey)?;

        Ok(Self {
            woocommerce: Arc::new(WooCommerceClient::new(
                config.woocommerce.client_config()?,
            )),
            store: Arc::new(FileCartStore::new(&config.store.cart_dir)),
            settings: CartSettings {
                storage_key: config.store.cart_key.clone(),
                rules: config.pricing.rules()?,
            },
            currency: config.pricing.currency()?,
        })
    }

    /// A cart engine over the stored cart. Coupons are recorded but grant no
    /// discount.
    pub async fn cart_engine(&self) -> CartEngine {
        let services = CartServices {
            catalog: self.woocommerce.clone(),
            orders: self.woocommerce.clone(),
            store: self.store.clone(),
            discounts: Arc::new(NoDiscount),
        };

        CartEngine::load(services, self.settings.clone()).await
    }
}
