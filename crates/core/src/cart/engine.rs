//! Cart engine.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use jiff::Timestamp;
use rust_decimal::Decimal;
use tracing::{debug, info, instrument, warn};

use crate::{
    cart::{errors::CheckoutError, models::Cart},
    catalog::Catalog,
    ids::{CartItemId, ProductId, VariationId},
    orders::{CreatedOrder, CustomerInfo, OrderPayload, OrderSubmitter},
    pricing::{DiscountPolicy, PricingRules},
    store::{CartStore, DEFAULT_CART_KEY},
};

/// Collaborators the engine prices, persists and submits through.
#[derive(Clone)]
pub struct CartServices {
    pub catalog: Arc<dyn Catalog>,
    pub orders: Arc<dyn OrderSubmitter>,
    pub store: Arc<dyn CartStore>,
    pub discounts: Arc<dyn DiscountPolicy>,
}

impl Debug for CartServices {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CartServices").finish_non_exhaustive()
    }
}

/// Per-session engine settings.
#[derive(Debug, Clone)]
pub struct CartSettings {
    /// Key the cart document is stored under.
    pub storage_key: String,
    pub rules: PricingRules,
}

impl Default for CartSettings {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_CART_KEY.to_string(),
            rules: PricingRules::default(),
        }
    }
}

/// Owns one session's cart.
///
/// Every mutation recomputes the derived totals and persists the whole cart.
/// Lookup and persistence failures are logged and absorbed; only checkout
/// reports errors.
pub struct CartEngine {
    services: CartServices,
    settings: CartSettings,
    cart: Cart,
}

impl Debug for CartEngine {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CartEngine")
            .field("settings", &self.settings)
            .field("cart", &self.cart)
            .finish_non_exhaustive()
    }
}

impl CartEngine {
    /// Build an engine, restoring whatever cart the store holds for the
    /// configured key. A missing or unreadable document starts an empty cart.
    pub async fn load(services: CartServices, settings: CartSettings) -> Self {
        let cart = restore(services.store.as_ref(), &settings.storage_key).await;

        Self {
            services,
            settings,
            cart,
        }
    }

    /// Add `quantity` of a product, merging into an existing line for the
    /// same product and variation. A zero quantity changes nothing.
    #[instrument(skip(self))]
    pub async fn add_item(
        &mut self,
        product: ProductId,
        quantity: u32,
        variation: Option<VariationId>,
    ) -> &Cart {
        if quantity > 0 {
            self.cart
                .insert(product, variation, quantity, Timestamp::now());
        }

        self.recalculate().await
    }

    /// Set a line's quantity. Zero or less removes the line; unknown ids are
    /// ignored.
    #[instrument(skip(self))]
    pub async fn update_quantity(&mut self, item: &CartItemId, quantity: i64) -> &Cart {
        if quantity <= 0 {
            return self.remove_item(item).await;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

        if !self.cart.set_quantity(item, quantity) {
            debug!("no such cart line");
        }

        self.recalculate().await
    }

    #[instrument(skip(self))]
    pub async fn remove_item(&mut self, item: &CartItemId) -> &Cart {
        if !self.cart.remove(item) {
            debug!("no such cart line");
        }

        self.recalculate().await
    }

    /// Attach a coupon. The code is not validated.
    #[instrument(skip(self, code))]
    pub async fn apply_coupon(&mut self, code: impl Into<String>) -> &Cart {
        self.cart.set_coupon(code.into());

        self.recalculate().await
    }

    #[instrument(skip(self))]
    pub async fn remove_coupon(&mut self) -> &Cart {
        self.cart.clear_coupon();

        self.recalculate().await
    }

    /// Empty the cart and persist it straight away.
    #[instrument(skip(self))]
    pub async fn clear(&mut self) -> &Cart {
        self.cart = Cart::default();
        self.persist().await;

        &self.cart
    }

    /// Reprice the cart and return it.
    pub async fn get_cart(&mut self) -> &Cart {
        self.recalculate().await
    }

    /// Submit the cart as an order, clearing it once the order exists.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::EmptyCart`]: there is nothing to order.
    /// - [`CheckoutError::MissingField`]: a required billing field is blank.
    /// - [`CheckoutError::Submission`]: the order collaborator failed.
    /// - [`CheckoutError::NotCreated`]: the collaborator answered without an order id.
    ///
    /// The cart is left as it was on every error.
    #[instrument(skip_all)]
    pub async fn checkout(&mut self, customer: CustomerInfo) -> Result<CreatedOrder, CheckoutError> {
        self.recalculate().await;

        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        customer.validate()?;

        let payload = OrderPayload::from_cart(&self.cart, customer);

        let order = self
            .services
            .orders
            .create_order(payload)
            .await
            .map_err(CheckoutError::Submission)?;

        if order.id == 0 {
            warn!(status = %order.status, "order submission returned no order id");

            return Err(CheckoutError::NotCreated);
        }

        info!(order = order.id, status = %order.status, "order created");

        self.clear().await;

        Ok(order)
    }

    async fn recalculate(&mut self) -> &Cart {
        let subtotal = self.subtotal().await;

        let discount = self
            .cart
            .coupon_code()
            .map_or(Decimal::ZERO, |code| {
                self.services.discounts.discount(subtotal, code)
            });

        let totals = self.settings.rules.totals(subtotal, discount);

        debug!(
            lines = self.cart.items().len(),
            subtotal = %totals.subtotal,
            total = %totals.total,
            "cart recalculated"
        );

        self.cart.set_totals(totals);
        self.persist().await;

        &self.cart
    }

    /// Sum of catalog price times quantity. Lines that cannot be priced count
    /// as zero.
    async fn subtotal(&self) -> Decimal {
        let mut subtotal = Decimal::ZERO;

        for item in self.cart.items() {
            let product = item.product_id();

            let price = match self.services.catalog.get_product(product).await {
                Ok(Some(found)) => found.price,
                Ok(None) => {
                    warn!(%product, "product not found, pricing cart line at zero");
                    continue;
                }
                Err(error) => {
                    warn!(%product, %error, "product lookup failed, pricing cart line at zero");
                    continue;
                }
            };

            match price
                .checked_mul(Decimal::from(item.quantity()))
                .and_then(|line| subtotal.checked_add(line))
            {
                Some(sum) => subtotal = sum,
                None => warn!(%product, "cart line total overflowed, pricing at zero"),
            }
        }

        subtotal
    }

    async fn persist(&self) {
        let document = match serde_json::to_string(&self.cart) {
            Ok(document) => document,
            Err(error) => {
                warn!(%error, "failed to serialize cart");
                return;
            }
        };

        if let Err(error) = self
            .services
            .store
            .save(&self.settings.storage_key, &document)
            .await
        {
            warn!(%error, key = %self.settings.storage_key, "failed to persist cart");
        }
    }
}

async fn restore(store: &dyn CartStore, key: &str) -> Cart {
    match store.load(key).await {
        Ok(Some(document)) => match serde_json::from_str::<Cart>(&document) {
            Ok(mut cart) => {
                cart.normalize_lines();
                cart
            }
            Err(error) => {
                warn!(%error, %key, "stored cart is unreadable, starting empty");
                Cart::default()
            }
        },
        Ok(None) => Cart::default(),
        Err(error) => {
            warn!(%error, %key, "failed to load stored cart, starting empty");
            Cart::default()
        }
    }
}
