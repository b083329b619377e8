use clap::Args;
use intellismart::orders::{Address, BillingDetails, CustomerInfo};
use intellismart_app::context::AppContext;

#[derive(Debug, Args)]
pub(crate) struct CheckoutArgs {
    /// Registered customer id; omit for guest checkout
    #[arg(long)]
    customer_id: Option<u64>,

    #[arg(long)]
    first_name: String,

    #[arg(long)]
    last_name: String,

    #[arg(long)]
    email: String,

    #[arg(long)]
    phone: Option<String>,

    #[arg(long)]
    address_1: String,

    #[arg(long)]
    address_2: Option<String>,

    #[arg(long)]
    city: String,

    #[arg(long, default_value = "")]
    state: String,

    #[arg(long)]
    postcode: String,

    #[arg(long)]
    country: String,

    #[command(flatten)]
    shipping: ShippingArgs,
}

/// Ship-to overrides. Fields left out are taken from the billing address.
#[derive(Debug, Default, Args)]
struct ShippingArgs {
    #[arg(long)]
    shipping_first_name: Option<String>,

    #[arg(long)]
    shipping_last_name: Option<String>,

    #[arg(long)]
    shipping_address_1: Option<String>,

    #[arg(long)]
    shipping_address_2: Option<String>,

    #[arg(long)]
    shipping_city: Option<String>,

    #[arg(long)]
    shipping_state: Option<String>,

    #[arg(long)]
    shipping_postcode: Option<String>,

    #[arg(long)]
    shipping_country: Option<String>,
}

impl ShippingArgs {
    fn is_empty(&self) -> bool {
        [
            &self.shipping_first_name,
            &self.shipping_last_name,
            &self.shipping_address_1,
            &self.shipping_address_2,
            &self.shipping_city,
            &self.shipping_state,
            &self.shipping_postcode,
            &self.shipping_country,
        ]
        .iter()
        .all(|field| field.is_none())
    }

    fn over(self, billing: &Address) -> Address {
        Address {
            first_name: self
                .shipping_first_name
                .unwrap_or_else(|| billing.first_name.clone()),
            last_name: self
                .shipping_last_name
                .unwrap_or_else(|| billing.last_name.clone()),
            address_1: self
                .shipping_address_1
                .unwrap_or_else(|| billing.address_1.clone()),
            address_2: self.shipping_address_2.or_else(|| billing.address_2.clone()),
            city: self.shipping_city.unwrap_or_else(|| billing.city.clone()),
            state: self.shipping_state.unwrap_or_else(|| billing.state.clone()),
            postcode: self
                .shipping_postcode
                .unwrap_or_else(|| billing.postcode.clone()),
            country: self
                .shipping_country
                .unwrap_or_else(|| billing.country.clone()),
        }
    }
}

impl From<CheckoutArgs> for CustomerInfo {
    fn from(args: CheckoutArgs) -> Self {
        let address = Address {
            first_name: args.first_name,
            last_name: args.last_name,
            address_1: args.address_1,
            address_2: args.address_2,
            city: args.city,
            state: args.state,
            postcode: args.postcode,
            country: args.country,
        };

        let shipping = (!args.shipping.is_empty()).then(|| args.shipping.over(&address));

        CustomerInfo {
            customer_id: args.customer_id,
            billing: BillingDetails {
                address,
                email: args.email,
                phone: args.phone,
            },
            shipping,
        }
    }
}

pub(crate) async fn run(args: CheckoutArgs, context: &AppContext) -> Result<(), String> {
    let mut engine = context.cart_engine().await;

    let order = engine
        .checkout(CustomerInfo::from(args))
        .await
        .map_err(|error| format!("checkout failed: {error}"))?;

    println!("order_id: {}", order.id);
    println!("status: {}", order.status);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(shipping: ShippingArgs) -> CheckoutArgs {
        CheckoutArgs {
            customer_id: None,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
            address_1: "12 Analytical Row".to_string(),
            address_2: Some("Flat 2".to_string()),
            city: "London".to_string(),
            state: String::new(),
            postcode: "N1 9GU".to_string(),
            country: "GB".to_string(),
            shipping,
        }
    }

    #[test]
    fn no_overrides_leaves_shipping_to_the_engine() {
        let customer = CustomerInfo::from(args(ShippingArgs::default()));

        assert_eq!(customer.shipping, None);
        assert_eq!(customer.billing.address.city, "London");
    }

    #[test]
    fn overrides_fill_the_rest_from_billing() {
        let customer = CustomerInfo::from(args(ShippingArgs {
            shipping_city: Some("Bath".to_string()),
            shipping_postcode: Some("BA1 1AA".to_string()),
            ..ShippingArgs::default()
        }));

        let shipping = customer.shipping.unwrap_or_default();

        assert_eq!(shipping.city, "Bath");
        assert_eq!(shipping.postcode, "BA1 1AA");
        assert_eq!(shipping.first_name, "Ada");
        assert_eq!(shipping.address_2.as_deref(), Some("Flat 2"));
    }
}
