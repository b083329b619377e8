//! `WooCommerce` products

use std::str::FromStr;

use intellismart::{
    catalog::{Product, StockStatus},
    ids::ProductId,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::woocommerce::errors::WooCommerceError;

/// The parts of a `WooCommerce` product the storefront reads.
#[derive(Debug, Clone, Deserialize)]
pub struct WooProduct {
    pub id: u64,

    #[serde(default)]
    pub name: String,

    /// Current selling price. `WooCommerce` sends prices as strings and leaves
    /// this empty for products without a price.
    #[serde(default)]
    pub price: String,

    /// Price before any sale.
    #[serde(default)]
    pub regular_price: String,

    #[serde(default)]
    pub on_sale: bool,

    #[serde(default)]
    pub stock_status: StockStatus,

    /// Units in stock, when the store manages stock for the product.
    #[serde(default)]
    pub stock_quantity: Option<i64>,
}

impl WooProduct {
    /// The current price; an empty price reads as zero.
    ///
    /// # Errors
    ///
    /// Returns [`WooCommerceError::InvalidPrice`] when the price is not a
    /// decimal number.
    pub fn unit_price(&self) -> Result<Decimal, WooCommerceError> {
        Ok(self.parse_price(&self.price)?.unwrap_or_default())
    }

    /// The pre-sale price of a product that is on sale.
    ///
    /// # Errors
    ///
    /// Returns [`WooCommerceError::InvalidPrice`] when the regular price is
    /// not a decimal number.
    pub fn price_before_sale(&self) -> Result<Option<Decimal>, WooCommerceError> {
        if !self.on_sale {
            return Ok(None);
        }

        self.parse_price(&self.regular_price)
    }

    fn parse_price(&self, raw: &str) -> Result<Option<Decimal>, WooCommerceError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Ok(None);
        }

        Decimal::from_str(trimmed)
            .map(Some)
            .map_err(|source| WooCommerceError::InvalidPrice {
                product: self.id,
                price: raw.to_string(),
                source,
            })
    }
}

impl TryFrom<WooProduct> for Product {
    type Error = WooCommerceError;

    fn try_from(product: WooProduct) -> Result<Self, Self::Error> {
        let price = product.unit_price()?;

        Ok(Product {
            id: ProductId::new(product.id),
            name: product.name,
            price,
            stock_status: product.stock_status,
        })
    }
}

/// Filters for listing products. Only published products are ever listed.
#[derive(Debug, Clone, Serialize)]
pub struct ProductQuery {
    pub page: u32,
    pub per_page: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    status: &'static str,
}

impl ProductQuery {
    #[must_use]
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page,
            per_page,
            category: None,
            search: None,
            status: "publish",
        }
    }

    /// Restrict the listing to a category id.
    #[must_use]
    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    /// Restrict the listing to products matching a search term.
    #[must_use]
    pub fn with_search(mut self, search: Option<String>) -> Self {
        self.search = search;
        self
    }
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self::new(1, 12)
    }
}
