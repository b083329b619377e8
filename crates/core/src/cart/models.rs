//! Cart Models

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    ids::{CartItemId, ProductId, VariationId},
    pricing::Totals,
};

/// One line of a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    id: CartItemId,
    product_id: ProductId,
    quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    variation_id: Option<VariationId>,
}

impl CartItem {
    pub fn id(&self) -> &CartItemId {
        &self.id
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn variation_id(&self) -> Option<VariationId> {
        self.variation_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    fn is_line_for(&self, product: ProductId, variation: Option<VariationId>) -> bool {
        self.product_id == product && self.variation_id == variation
    }
}

/// A shopping cart: its lines, the applied coupon and the totals derived from
/// both.
///
/// The derived totals are only ever written by the engine's recompute pass.
/// The serialized form is the document kept in the cart store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    #[serde(default)]
    items: Vec<CartItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    coupon_code: Option<String>,
    #[serde(flatten)]
    totals: Totals,
}

impl Cart {
    /// Lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a line by id.
    pub fn item(&self, id: &CartItemId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == *id)
    }

    pub fn coupon_code(&self) -> Option<&str> {
        self.coupon_code.as_deref()
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn subtotal(&self) -> Decimal {
        self.totals.subtotal
    }

    pub fn shipping(&self) -> Decimal {
        self.totals.shipping
    }

    pub fn tax(&self) -> Decimal {
        self.totals.tax
    }

    pub fn discount(&self) -> Decimal {
        self.totals.discount
    }

    pub fn total(&self) -> Decimal {
        self.totals.total
    }

    /// Merge `quantity` into the line for `(product, variation)`, appending a
    /// new line stamped with `at` when there is none. Variation `0` is the
    /// product itself.
    pub(crate) fn insert(
        &mut self,
        product: ProductId,
        variation: Option<VariationId>,
        quantity: u32,
        at: Timestamp,
    ) {
        let variation = no_zero_variation(variation);

        if let Some(line) = self
            .items
            .iter_mut()
            .find(|item| item.is_line_for(product, variation))
        {
            line.quantity = line.quantity.saturating_add(quantity);
            return;
        }

        self.items.push(CartItem {
            id: CartItemId::generate(product, variation, at),
            product_id: product,
            quantity,
            variation_id: variation,
        });
    }

    /// Returns `false` when no line has the given id.
    pub(crate) fn set_quantity(&mut self, id: &CartItemId, quantity: u32) -> bool {
        match self.items.iter_mut().find(|item| item.id == *id) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Returns `false` when no line has the given id.
    pub(crate) fn remove(&mut self, id: &CartItemId) -> bool {
        let before = self.items.len();

        self.items.retain(|item| item.id != *id);

        self.items.len() != before
    }

    pub(crate) fn set_coupon(&mut self, code: String) {
        self.coupon_code = Some(code);
    }

    pub(crate) fn clear_coupon(&mut self) {
        self.coupon_code = None;
        self.totals.discount = Decimal::ZERO;
    }

    pub(crate) fn set_totals(&mut self, totals: Totals) {
        self.totals = totals;
    }

    /// Bring a stored document back to the shape mutations maintain: no empty
    /// lines, no variation `0`, one line per `(product, variation)`. Merged
    /// lines keep the first line's id.
    pub(crate) fn normalize_lines(&mut self) {
        let mut lines = Vec::<CartItem>::with_capacity(self.items.len());

        for mut item in self.items.drain(..) {
            if item.quantity == 0 {
                continue;
            }

            item.variation_id = no_zero_variation(item.variation_id);

            match lines
                .iter_mut()
                .find(|line| line.is_line_for(item.product_id, item.variation_id))
            {
                Some(line) => line.quantity = line.quantity.saturating_add(item.quantity),
                None => lines.push(item),
            }
        }

        self.items = lines;
    }
}

fn no_zero_variation(variation: Option<VariationId>) -> Option<VariationId> {
    variation.filter(|variation| variation.get() != 0)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn at(millis: i64) -> Result<Timestamp, jiff::Error> {
        Timestamp::from_millisecond(millis)
    }

    #[test]
    fn insert_merges_same_product_and_variation() -> TestResult {
        let mut cart = Cart::default();

        cart.insert(ProductId::new(1), None, 2, at(1)?);
        cart.insert(ProductId::new(1), None, 3, at(2)?);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items().first().map(CartItem::quantity), Some(5));
        assert_eq!(
            cart.items().first().map(|item| item.id().as_str()),
            Some("1-0-1")
        );

        Ok(())
    }

    #[test]
    fn different_variations_get_their_own_lines() -> TestResult {
        let mut cart = Cart::default();

        cart.insert(ProductId::new(1), None, 1, at(1)?);
        cart.insert(ProductId::new(1), Some(VariationId::new(4)), 1, at(1)?);
        cart.insert(ProductId::new(1), Some(VariationId::new(5)), 1, at(1)?);

        assert_eq!(cart.items().len(), 3);

        Ok(())
    }

    #[test]
    fn variation_zero_merges_with_the_plain_product() -> TestResult {
        let mut cart = Cart::default();

        cart.insert(ProductId::new(1), None, 1, at(1)?);
        cart.insert(ProductId::new(1), Some(VariationId::new(0)), 1, at(1)?);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items().first().map(CartItem::quantity), Some(2));
        assert_eq!(cart.items().first().and_then(CartItem::variation_id), None);

        assert!(cart.remove(&CartItemId::from("1-0-1")));
        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn variation_zero_alone_is_stored_as_no_variation() -> TestResult {
        let mut cart = Cart::default();

        cart.insert(ProductId::new(2), Some(VariationId::new(0)), 3, at(7)?);

        assert_eq!(cart.items().first().and_then(CartItem::variation_id), None);
        assert_eq!(
            cart.items().first().map(|item| item.id().as_str()),
            Some("2-0-7")
        );

        Ok(())
    }

    #[test]
    fn normalizing_merges_duplicates_and_drops_empty_lines() -> TestResult {
        let mut cart: Cart = serde_json::from_str(
            r#"{"items":[
                {"id":"4-0-1","productId":4,"quantity":2},
                {"id":"6-0-2","productId":6,"quantity":0},
                {"id":"4-0-3","productId":4,"quantity":1,"variationId":0},
                {"id":"4-9-4","productId":4,"quantity":1,"variationId":9},
                {"id":"4-0-5","productId":4,"quantity":4}
            ]}"#,
        )?;

        cart.normalize_lines();

        let lines: Vec<_> = cart
            .items()
            .iter()
            .map(|item| (item.id().as_str(), item.variation_id(), item.quantity()))
            .collect();

        assert_eq!(
            lines,
            vec![
                ("4-0-1", None, 7),
                ("4-9-4", Some(VariationId::new(9)), 1),
            ]
        );

        Ok(())
    }

    #[test]
    fn set_quantity_and_remove_report_unknown_ids() -> TestResult {
        let mut cart = Cart::default();
        cart.insert(ProductId::new(9), None, 1, at(10)?);

        let missing = CartItemId::from("nope");
        let known = CartItemId::from("9-0-10");

        assert!(!cart.set_quantity(&missing, 4));
        assert!(!cart.remove(&missing));
        assert!(cart.set_quantity(&known, 4));
        assert_eq!(cart.item(&known).map(CartItem::quantity), Some(4));
        assert!(cart.remove(&known));
        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn clearing_coupon_zeroes_discount() {
        let mut cart = Cart::default();
        cart.set_coupon("SPRING".to_string());
        cart.set_totals(Totals {
            discount: Decimal::ONE,
            ..Totals::default()
        });

        cart.clear_coupon();

        assert_eq!(cart.coupon_code(), None);
        assert_eq!(cart.discount(), Decimal::ZERO);
    }

    #[test]
    fn stored_document_round_trips() -> TestResult {
        let mut cart = Cart::default();
        cart.insert(ProductId::new(3), Some(VariationId::new(8)), 2, at(5)?);
        cart.set_coupon("WELCOME".to_string());
        cart.set_totals(Totals {
            subtotal: Decimal::new(2000, 2),
            shipping: Decimal::new(1000, 2),
            tax: Decimal::new(200, 2),
            discount: Decimal::ZERO,
            total: Decimal::new(3200, 2),
        });

        let document = serde_json::to_string(&cart)?;
        let restored: Cart = serde_json::from_str(&document)?;

        assert!(document.contains("\"couponCode\":\"WELCOME\""));
        assert!(document.contains("\"variationId\":8"));
        assert_eq!(restored, cart);

        Ok(())
    }

    #[test]
    fn document_without_totals_restores_with_zeroes() -> TestResult {
        let restored: Cart = serde_json::from_str(
            r#"{"items":[{"id":"5-0-1","productId":5,"quantity":1}]}"#,
        )?;

        assert_eq!(restored.items().len(), 1);
        assert_eq!(restored.totals(), Totals::default());

        Ok(())
    }
}
