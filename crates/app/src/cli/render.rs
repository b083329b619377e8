use std::str::FromStr;

use intellismart::{Cart, catalog::StockStatus};
use intellismart_app::woocommerce::{WooOrder, WooProduct};
use rust_decimal::Decimal;
use rusty_money::{Findable, Money, iso::Currency};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Style,
        object::{Columns, Rows},
    },
};

pub(crate) fn money(amount: Decimal, currency: &Currency) -> String {
    Money::from_decimal(amount, currency).to_string()
}

pub(crate) fn cart(cart: &Cart, currency: &Currency) -> String {
    let mut out = String::new();

    if cart.is_empty() {
        out.push_str("cart is empty\n");
    } else {
        let mut builder = Builder::default();
        builder.push_record(["Item", "Product", "Variation", "Qty"]);

        for item in cart.items() {
            builder.push_record([
                item.id().to_string(),
                item.product_id().to_string(),
                item.variation_id()
                    .map(|variation| variation.to_string())
                    .unwrap_or_default(),
                item.quantity().to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern_rounded());
        table.modify(Columns::new(3..4), Alignment::right());

        out.push_str(&table.to_string());
        out.push('\n');
    }

    if let Some(code) = cart.coupon_code() {
        out.push_str(&format!("coupon: {code}\n"));
    }

    let mut totals = Builder::default();
    totals.push_record(["Subtotal".to_string(), money(cart.subtotal(), currency)]);
    totals.push_record(["Shipping".to_string(), money(cart.shipping(), currency)]);
    totals.push_record(["Tax".to_string(), money(cart.tax(), currency)]);
    totals.push_record(["Discount".to_string(), money(cart.discount(), currency)]);
    totals.push_record(["Total".to_string(), money(cart.total(), currency)]);

    let mut totals = totals.build();
    totals.with(Style::blank());
    totals.modify(Columns::last(), Alignment::right());

    out.push_str(&totals.to_string());

    out
}

pub(crate) fn products(products: &[WooProduct], currency: &Currency) -> String {
    if products.is_empty() {
        return "no products found".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(["Id", "Name", "Price", "Was", "Stock"]);

    for product in products {
        let price = product
            .unit_price()
            .map_or_else(|_| product.price.clone(), |price| money(price, currency));

        let was = match product.price_before_sale() {
            Ok(Some(regular)) => money(regular, currency),
            Ok(None) => String::new(),
            Err(_) => product.regular_price.clone(),
        };

        let stock = match product.stock_quantity {
            Some(quantity) => format!("{} ({quantity})", stock_label(product.stock_status)),
            None => stock_label(product.stock_status).to_string(),
        };

        builder.push_record([product.id.to_string(), product.name.clone(), price, was, stock]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Alignment::center());
    table.modify(Columns::new(2..4), Alignment::right());

    table.to_string()
}

pub(crate) fn order(order: &WooOrder, fallback: &'static Currency) -> String {
    let currency = Currency::find(&order.currency).unwrap_or(fallback);
    let amount = |raw: &str| {
        Decimal::from_str(raw.trim()).map_or_else(|_| raw.to_string(), |value| money(value, currency))
    };

    let mut out = format!("order_id: {}\nstatus: {}\n", order.id, order.status);

    let mut builder = Builder::default();
    builder.push_record(["Product", "Name", "Variation", "Qty", "Total"]);

    for line in &order.line_items {
        builder.push_record([
            line.product_id.to_string(),
            line.name.clone(),
            match line.variation_id {
                0 => String::new(),
                variation => variation.to_string(),
            },
            line.quantity.to_string(),
            amount(&line.total),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Columns::new(3..5), Alignment::right());

    out.push_str(&table.to_string());
    out.push_str(&format!("\ntotal: {}", amount(&order.total)));

    out
}

fn stock_label(status: StockStatus) -> &'static str {
    match status {
        StockStatus::InStock => "in stock",
        StockStatus::OutOfStock => "out of stock",
        StockStatus::OnBackorder => "on backorder",
        StockStatus::Unknown => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;

    use super::*;

    #[test]
    fn empty_cart_still_shows_totals() {
        let rendered = cart(&Cart::default(), iso::USD);

        assert!(rendered.starts_with("cart is empty"));
        assert!(rendered.contains("Total"));
    }

    #[test]
    fn products_show_sale_and_stock_details() -> Result<(), serde_json::Error> {
        let listed: Vec<WooProduct> = serde_json::from_str(
            r#"[{"id": 1, "name": "Grinder", "price": "80.00", "regular_price": "95.00",
                 "on_sale": true, "stock_status": "instock", "stock_quantity": 4}]"#,
        )?;

        let rendered = products(&listed, iso::USD);

        assert!(rendered.contains("$95.00"), "{rendered}");
        assert!(rendered.contains("in stock (4)"), "{rendered}");

        Ok(())
    }

    #[test]
    fn order_uses_its_own_currency() -> Result<(), serde_json::Error> {
        let placed: WooOrder = serde_json::from_str(
            r#"{"id": 12, "status": "pending", "currency": "GBP", "total": "32.00",
                "line_items": [{"name": "Kettle", "product_id": 10, "quantity": 2, "total": "20.00"}]}"#,
        )?;

        let rendered = order(&placed, iso::USD);

        assert!(rendered.starts_with("order_id: 12"), "{rendered}");
        assert!(rendered.contains("£32.00"), "{rendered}");

        Ok(())
    }

    #[test]
    fn stock_labels_are_readable() {
        assert_eq!(stock_label(StockStatus::OnBackorder), "on backorder");
    }
}
