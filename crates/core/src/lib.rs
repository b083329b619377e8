//! IntelliSMART
//!
//! The storefront cart engine: line items, coupon state and derived totals for a
//! single shopping session, persisted through a pluggable key-value store and
//! priced against a pluggable product catalog.

pub mod cart;
pub mod catalog;
pub mod ids;
pub mod money;
pub mod orders;
pub mod pricing;
pub mod store;

pub use cart::{Cart, CartEngine, CartItem, CartServices, CartSettings, CheckoutError};
