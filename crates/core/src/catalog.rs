//! Product catalog

use std::error::Error;

use async_trait::async_trait;
use mockall::automock;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::ids::ProductId;

/// Catalog stock state of a product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    /// Available to buy.
    InStock,

    /// Not available.
    OutOfStock,

    /// Purchasable, shipped once restocked.
    OnBackorder,

    /// Any status the catalog reports that we do not model.
    #[default]
    #[serde(other)]
    Unknown,
}

/// The slice of a catalog product the cart needs for pricing.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,

    /// Current unit price. Unpriced products carry zero.
    pub price: Decimal,

    pub stock_status: StockStatus,
}

/// Errors surfaced by a catalog lookup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed")]
    Request(#[source] Box<dyn Error + Send + Sync>),

    #[error("invalid product data: {0}")]
    InvalidData(String),
}

#[automock]
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Fetch the current state of a product.
    ///
    /// # Errors
    ///
    /// Returns an error when the catalog cannot be reached or answers with
    /// data that cannot be read. A product that does not exist is `Ok(None)`.
    async fn get_product(&self, product: ProductId) -> Result<Option<Product>, CatalogError>;
}
