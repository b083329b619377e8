//! `WooCommerce` REST API adapter
//!
//! Serves as both the product catalog and the order submitter for the cart
//! engine.

mod client;
mod errors;
mod orders;
mod products;

pub use client::{WooCommerceClient, WooCommerceConfig};
pub use errors::WooCommerceError;
pub use orders::{
    WooAddress, WooBilling, WooCouponLine, WooFeeLine, WooLineItem, WooOrder, WooOrderLine,
    WooOrderRequest, WooShippingLine,
};
pub use products::{ProductQuery, WooProduct};
