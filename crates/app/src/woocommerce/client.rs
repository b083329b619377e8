//! `WooCommerce` REST client

use async_trait::async_trait;
use intellismart::{
    catalog::{Catalog, CatalogError, Product},
    ids::ProductId,
    orders::{CreatedOrder, OrderError, OrderPayload, OrderSubmitter},
};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use tracing::{debug, instrument};

use crate::woocommerce::{
    errors::WooCommerceError,
    orders::{WooOrder, WooOrderRequest},
    products::{ProductQuery, WooProduct},
};

/// Configuration for connecting to a `WooCommerce` store.
#[derive(Debug, Clone)]
pub struct WooCommerceConfig {
    /// Store base URL, e.g. `"https://shop.example.com"`.
    pub url: String,

    /// REST API consumer key.
    pub consumer_key: String,

    /// REST API consumer secret.
    pub consumer_secret: String,

    /// API namespace, e.g. `"wc/v3"`.
    pub version: String,
}

/// HTTP client for the `WooCommerce` REST API, authenticated with the consumer
/// key pair over basic auth.
#[derive(Debug, Clone)]
pub struct WooCommerceClient {
    config: WooCommerceConfig,
    http: Client,
}

impl WooCommerceClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: WooCommerceConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Fetch a single product. A product the store does not know is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response.
    #[instrument(skip(self))]
    pub async fn fetch_product(&self, id: ProductId) -> Result<Option<WooProduct>, WooCommerceError> {
        let response = self
            .authorized(self.http.get(self.endpoint(&format!("products/{id}"))))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!("product not found");

            return Ok(None);
        }

        let response = ensure_success(response, "product").await?;

        Ok(Some(response.json().await?))
    }

    /// List published products.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response.
    #[instrument(skip(self))]
    pub async fn list_products(
        &self,
        query: &ProductQuery,
    ) -> Result<Vec<WooProduct>, WooCommerceError> {
        let response = self
            .authorized(self.http.get(self.endpoint("products")))
            .query(query)
            .send()
            .await?;

        let response = ensure_success(response, "products").await?;

        Ok(response.json().await?)
    }

    /// Create an order.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or when the store refuses the order.
    #[instrument(skip_all)]
    pub async fn submit_order(&self, order: &WooOrderRequest) -> Result<WooOrder, WooCommerceError> {
        let response = self
            .authorized(self.http.post(self.endpoint("orders")))
            .json(order)
            .send()
            .await?;

        let response = ensure_success(response, "order").await?;

        Ok(response.json().await?)
    }

    /// Fetch a placed order. An order the store does not know is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response.
    #[instrument(skip(self))]
    pub async fn fetch_order(&self, id: u64) -> Result<Option<WooOrder>, WooCommerceError> {
        let response = self
            .authorized(self.http.get(self.endpoint(&format!("orders/{id}"))))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!("order not found");

            return Ok(None);
        }

        let response = ensure_success(response, "order").await?;

        Ok(Some(response.json().await?))
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/wp-json/{}/{}",
            self.config.url.trim_end_matches('/'),
            self.config.version.trim_matches('/'),
            path
        )
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.basic_auth(&self.config.consumer_key, Some(&self.config.consumer_secret))
    }
}

async fn ensure_success(response: Response, what: &str) -> Result<Response, WooCommerceError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    Err(WooCommerceError::UnexpectedResponse(format!(
        "{what} request failed with status {status}: {text}"
    )))
}

#[async_trait]
impl Catalog for WooCommerceClient {
    async fn get_product(&self, product: ProductId) -> Result<Option<Product>, CatalogError> {
        let Some(found) = self.fetch_product(product).await? else {
            return Ok(None);
        };

        Ok(Some(Product::try_from(found)?))
    }
}

#[async_trait]
impl OrderSubmitter for WooCommerceClient {
    async fn create_order(&self, payload: OrderPayload) -> Result<CreatedOrder, OrderError> {
        let order = self.submit_order(&WooOrderRequest::from(&payload)).await?;

        Ok(CreatedOrder {
            id: order.id,
            status: order.status,
        })
    }
}
