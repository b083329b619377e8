//! Order submission

use std::error::Error;

use async_trait::async_trait;
use mockall::automock;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    cart::{Cart, CheckoutError},
    ids::{ProductId, VariationId},
};

/// A postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub first_name: String,
    pub last_name: String,
    pub address_1: String,
    pub address_2: Option<String>,
    pub city: String,
    pub state: String,
    pub postcode: String,
    pub country: String,
}

/// Billing details: an address plus how to reach the buyer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillingDetails {
    pub address: Address,
    pub email: String,
    pub phone: Option<String>,
}

/// Everything the shopper supplies at checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerInfo {
    /// Registered customer, `None` for guest checkout.
    pub customer_id: Option<u64>,

    pub billing: BillingDetails,

    /// Ship-to address; the billing address is used when absent.
    pub shipping: Option<Address>,
}

impl CustomerInfo {
    /// Check the billing fields an order cannot be placed without.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::MissingField`] naming the first blank field.
    pub fn validate(&self) -> Result<(), CheckoutError> {
        let address = &self.billing.address;

        let required = [
            ("first_name", address.first_name.as_str()),
            ("last_name", address.last_name.as_str()),
            ("email", self.billing.email.as_str()),
            ("address_1", address.address_1.as_str()),
            ("city", address.city.as_str()),
            ("postcode", address.postcode.as_str()),
            ("country", address.country.as_str()),
        ];

        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(CheckoutError::MissingField(*field)),
            None => Ok(()),
        }
    }
}

/// One product line of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub variation_id: Option<VariationId>,
    pub quantity: u32,
}

/// The order handed to the submitter. Amounts are the cart's own totals at the
/// time of submission; the submitter does not reprice.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderPayload {
    /// `0` for guests.
    pub customer_id: u64,
    pub billing: BillingDetails,
    pub shipping: Address,
    pub lines: Vec<OrderLine>,
    pub shipping_total: Decimal,
    pub discount_total: Decimal,
    pub coupon_code: Option<String>,
}

impl OrderPayload {
    /// Assemble a payload from a priced cart and the shopper's details.
    #[must_use]
    pub fn from_cart(cart: &Cart, customer: CustomerInfo) -> Self {
        let CustomerInfo {
            customer_id,
            billing,
            shipping,
        } = customer;

        let shipping = shipping.unwrap_or_else(|| billing.address.clone());

        Self {
            customer_id: customer_id.unwrap_or_default(),
            billing,
            shipping,
            lines: cart
                .items()
                .iter()
                .map(|item| OrderLine {
                    product_id: item.product_id(),
                    variation_id: item.variation_id(),
                    quantity: item.quantity(),
                })
                .collect(),
            shipping_total: cart.shipping(),
            discount_total: cart.discount(),
            coupon_code: cart.coupon_code().map(str::to_string),
        }
    }
}

/// What the order collaborator reports back for an accepted order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedOrder {
    /// `0` means no order was created.
    pub id: u64,
    pub status: String,
}

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("order request failed")]
    Request(#[source] Box<dyn Error + Send + Sync>),

    #[error("order rejected: {0}")]
    Rejected(String),
}

#[automock]
#[async_trait]
pub trait OrderSubmitter: Send + Sync {
    /// Create an order.
    ///
    /// # Errors
    ///
    /// Returns an error when the order could not be submitted or was refused.
    async fn create_order(&self, payload: OrderPayload) -> Result<CreatedOrder, OrderError>;
}
