use clap::{Args, Subcommand};
use intellismart_app::context::AppContext;

use super::render;

#[derive(Debug, Args)]
pub(crate) struct CouponCommand {
    #[command(subcommand)]
    command: CouponSubcommand,
}

#[derive(Debug, Subcommand)]
enum CouponSubcommand {
    /// Record a coupon code on the cart, replacing any previous one
    Apply {
        /// Coupon code
        code: String,
    },
    /// Drop the cart's coupon
    Remove,
}

pub(crate) async fn run(command: CouponCommand, context: &AppContext) -> Result<(), String> {
    let mut engine = context.cart_engine().await;

    let cart = match command.command {
        CouponSubcommand::Apply { code } => engine.apply_coupon(code).await,
        CouponSubcommand::Remove => engine.remove_coupon().await,
    };

    println!("{}", render::cart(cart, context.currency));

    Ok(())
}
