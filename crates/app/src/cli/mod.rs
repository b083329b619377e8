use clap::{Parser, Subcommand};
use intellismart_app::{config::AppConfig, context::AppContext, logging};

mod cart;
mod checkout;
mod coupon;
mod orders;
mod products;
mod render;

#[derive(Debug, Parser)]
#[command(name = "intellismart", about = "IntelliSMART storefront cart", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    config: AppConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Inspect and change the cart
    Cart(cart::CartCommand),
    /// Apply or remove a coupon code
    Coupon(coupon::CouponCommand),
    /// Browse the store's products
    Products(products::ProductsCommand),
    /// Place an order for the cart
    Checkout(checkout::CheckoutArgs),
    /// Look up placed orders
    Orders(orders::OrdersCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        logging::init_subscriber(&self.config.logging)
            .map_err(|error| format!("failed to initialise logging: {error}"))?;

        let context = AppContext::from_config(&self.config).map_err(|error| error.to_string())?;

        match self.command {
            Commands::Cart(command) => cart::run(command, &context).await,
            Commands::Coupon(command) => coupon::run(command, &context).await,
            Commands::Products(command) => products::run(command, &context).await,
            Commands::Checkout(args) => checkout::run(args, &context).await,
            Commands::Orders(command) => orders::run(command, &context).await,
        }
    }
}
