//! `WooCommerce` errors

use intellismart::{catalog::CatalogError, orders::OrderError};
use thiserror::Error;

/// Errors that can occur when talking to the `WooCommerce` REST API.
#[derive(Debug, Error)]
pub enum WooCommerceError {
    /// An HTTP transport or serialization error occurred.
    #[error("woocommerce http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("unexpected woocommerce response: {0}")]
    UnexpectedResponse(String),

    /// A product price that is not a decimal number.
    #[error("product {product} has an invalid price {price:?}")]
    InvalidPrice {
        product: u64,
        price: String,
        #[source]
        source: rust_decimal::Error,
    },
}

impl From<WooCommerceError> for CatalogError {
    fn from(error: WooCommerceError) -> Self {
        match error {
            invalid @ WooCommerceError::InvalidPrice { .. } => {
                CatalogError::InvalidData(invalid.to_string())
            }
            other => CatalogError::Request(Box::new(other)),
        }
    }
}

impl From<WooCommerceError> for OrderError {
    fn from(error: WooCommerceError) -> Self {
        match error {
            WooCommerceError::UnexpectedResponse(message) => OrderError::Rejected(message),
            other => OrderError::Request(Box::new(other)),
        }
    }
}
