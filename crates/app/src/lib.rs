//! IntelliSMART storefront: `WooCommerce` adapter, file-backed cart storage
//! and configuration for the cart engine.

pub mod config;
pub mod context;
pub mod logging;
pub mod store;
pub mod woocommerce;
