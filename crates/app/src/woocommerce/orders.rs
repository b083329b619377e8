//! `WooCommerce` orders

use intellismart::orders::{Address, BillingDetails, OrderPayload};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body of `POST /orders`. Orders are placed as pending bank transfers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WooOrderRequest {
    pub payment_method: &'static str,
    pub payment_method_title: &'static str,
    pub status: &'static str,
    pub customer_id: u64,
    pub billing: WooBilling,
    pub shipping: WooAddress,
    pub line_items: Vec<WooLineItem>,
    pub shipping_lines: Vec<WooShippingLine>,
    pub fee_lines: Vec<WooFeeLine>,
    pub coupon_lines: Vec<WooCouponLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WooAddress {
    pub first_name: String,
    pub last_name: String,
    pub address_1: String,
    pub address_2: String,
    pub city: String,
    pub state: String,
    pub postcode: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WooBilling {
    #[serde(flatten)]
    pub address: WooAddress,
    pub email: String,
    pub phone: String,
}

/// `variation_id` is `0` for simple products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WooLineItem {
    pub product_id: u64,
    pub variation_id: u64,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WooShippingLine {
    pub method_id: &'static str,
    pub method_title: &'static str,
    pub total: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WooFeeLine {
    pub name: &'static str,
    pub total: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WooCouponLine {
    pub code: String,
    pub discount: String,
}

/// The parts of an order the storefront reads back.
#[derive(Debug, Clone, Deserialize)]
pub struct WooOrder {
    /// Missing or `0` when the store did not create an order.
    #[serde(default)]
    pub id: u64,

    #[serde(default)]
    pub status: String,

    /// ISO 4217 code the order is priced in.
    #[serde(default)]
    pub currency: String,

    /// Order total as sent by the store.
    #[serde(default)]
    pub total: String,

    #[serde(default)]
    pub line_items: Vec<WooOrderLine>,
}

/// A product line of a placed order.
#[derive(Debug, Clone, Deserialize)]
pub struct WooOrderLine {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub product_id: u64,

    #[serde(default)]
    pub variation_id: u64,

    #[serde(default)]
    pub quantity: u32,

    #[serde(default)]
    pub total: String,
}

impl From<&Address> for WooAddress {
    fn from(address: &Address) -> Self {
        Self {
            first_name: address.first_name.clone(),
            last_name: address.last_name.clone(),
            address_1: address.address_1.clone(),
            address_2: address.address_2.clone().unwrap_or_default(),
            city: address.city.clone(),
            state: address.state.clone(),
            postcode: address.postcode.clone(),
            country: address.country.clone(),
        }
    }
}

impl From<&BillingDetails> for WooBilling {
    fn from(billing: &BillingDetails) -> Self {
        Self {
            address: WooAddress::from(&billing.address),
            email: billing.email.clone(),
            phone: billing.phone.clone().unwrap_or_default(),
        }
    }
}

impl From<&OrderPayload> for WooOrderRequest {
    fn from(payload: &OrderPayload) -> Self {
        let fee_lines = if payload.discount_total > Decimal::ZERO {
            vec![WooFeeLine {
                name: "Discount",
                total: format!("-{}", payload.discount_total),
            }]
        } else {
            Vec::new()
        };

        let coupon_lines = payload
            .coupon_code
            .iter()
            .map(|code| WooCouponLine {
                code: code.clone(),
                discount: payload.discount_total.to_string(),
            })
            .collect();

        Self {
            payment_method: "bacs",
            payment_method_title: "Direct Bank Transfer",
            status: "pending",
            customer_id: payload.customer_id,
            billing: WooBilling::from(&payload.billing),
            shipping: WooAddress::from(&payload.shipping),
            line_items: payload
                .lines
                .iter()
                .map(|line| WooLineItem {
                    product_id: line.product_id.get(),
                    variation_id: line.variation_id.map_or(0, |variation| variation.get()),
                    quantity: line.quantity,
                })
                .collect(),
            shipping_lines: vec![WooShippingLine {
                method_id: "flat_rate",
                method_title: "Flat Rate",
                total: payload.shipping_total.to_string(),
            }],
            fee_lines,
            coupon_lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use intellismart::{
        ids::{ProductId, VariationId},
        orders::OrderLine,
    };
    use testresult::TestResult;

    use super::*;

    fn payload() -> OrderPayload {
        let address = Address {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            address_1: "1 Compiler Way".to_string(),
            address_2: None,
            city: "Arlington".to_string(),
            state: "VA".to_string(),
            postcode: "22201".to_string(),
            country: "US".to_string(),
        };

        OrderPayload {
            customer_id: 0,
            billing: BillingDetails {
                address: address.clone(),
                email: "grace@example.com".to_string(),
                phone: None,
            },
            shipping: address,
            lines: vec![
                OrderLine {
                    product_id: ProductId::new(10),
                    variation_id: None,
                    quantity: 2,
                },
                OrderLine {
                    product_id: ProductId::new(11),
                    variation_id: Some(VariationId::new(4)),
                    quantity: 1,
                },
            ],
            shipping_total: Decimal::new(10_00, 2),
            discount_total: Decimal::ZERO,
            coupon_code: None,
        }
    }

    #[test]
    fn order_body_has_woocommerce_shape() -> TestResult {
        let body = serde_json::to_value(WooOrderRequest::from(&payload()))?;

        assert_eq!(body["payment_method"], "bacs");
        assert_eq!(body["status"], "pending");
        assert_eq!(body["customer_id"], 0);
        assert_eq!(body["billing"]["email"], "grace@example.com");
        assert_eq!(body["billing"]["first_name"], "Grace");
        assert_eq!(body["billing"]["phone"], "");
        assert_eq!(body["shipping"]["address_2"], "");
        assert_eq!(
            body["line_items"],
            serde_json::json!([
                {"product_id": 10, "variation_id": 0, "quantity": 2},
                {"product_id": 11, "variation_id": 4, "quantity": 1},
            ])
        );
        assert_eq!(
            body["shipping_lines"],
            serde_json::json!([{"method_id": "flat_rate", "method_title": "Flat Rate", "total": "10.00"}])
        );
        assert_eq!(body["fee_lines"], serde_json::json!([]));
        assert_eq!(body["coupon_lines"], serde_json::json!([]));

        Ok(())
    }

    #[test]
    fn discount_and_coupon_become_fee_and_coupon_lines() {
        let mut payload = payload();
        payload.discount_total = Decimal::new(5_50, 2);
        payload.coupon_code = Some("SPRING".to_string());

        let request = WooOrderRequest::from(&payload);

        assert_eq!(
            request.fee_lines,
            vec![WooFeeLine {
                name: "Discount",
                total: "-5.50".to_string(),
            }]
        );
        assert_eq!(
            request.coupon_lines,
            vec![WooCouponLine {
                code: "SPRING".to_string(),
                discount: "5.50".to_string(),
            }]
        );
    }

    #[test]
    fn placed_order_reads_lines_and_total() -> TestResult {
        let order: WooOrder = serde_json::from_str(
            r#"{"id": 77, "status": "processing", "currency": "GBP", "total": "32.00",
                "line_items": [{"name": "Kettle", "product_id": 10, "variation_id": 0, "quantity": 2, "total": "20.00"}],
                "billing": {"email": "grace@example.com"}}"#,
        )?;

        assert_eq!(order.id, 77);
        assert_eq!(order.currency, "GBP");
        assert_eq!(order.line_items.len(), 1);
        assert_eq!(order.line_items[0].quantity, 2);

        Ok(())
    }

    #[test]
    fn coupon_without_discount_has_no_fee_line() {
        let mut payload = payload();
        payload.coupon_code = Some("NOTHING".to_string());

        let request = WooOrderRequest::from(&payload);

        assert!(request.fee_lines.is_empty());
        assert_eq!(request.coupon_lines.len(), 1);
        assert_eq!(request.coupon_lines[0].discount, "0");
    }
}
