use clap::{Args, Subcommand};
use intellismart::ids::{CartItemId, ProductId, VariationId};
use intellismart_app::context::AppContext;

use super::render;

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Show the cart priced at current catalog prices
    Show,
    /// Add a product, merging with an existing line for the same product
    Add(AddArgs),
    /// Set a line's quantity; zero or less removes it
    Update(UpdateArgs),
    /// Remove a line
    Remove(RemoveArgs),
    /// Empty the cart and drop its coupon
    Clear,
}

#[derive(Debug, Args)]
struct AddArgs {
    /// Catalog product id
    #[arg(long)]
    product: ProductId,

    /// Units to add
    #[arg(long, default_value_t = 1)]
    quantity: u32,

    /// Variation id for variable products
    #[arg(long)]
    variation: Option<VariationId>,
}

#[derive(Debug, Args)]
struct UpdateArgs {
    /// Cart line id, as shown by `cart show`
    #[arg(long)]
    item: String,

    /// New quantity
    #[arg(long, allow_negative_numbers = true)]
    quantity: i64,
}

#[derive(Debug, Args)]
struct RemoveArgs {
    /// Cart line id, as shown by `cart show`
    #[arg(long)]
    item: String,
}

pub(crate) async fn run(command: CartCommand, context: &AppContext) -> Result<(), String> {
    let mut engine = context.cart_engine().await;

    let cart = match command.command {
        CartSubcommand::Show => engine.get_cart().await,
        CartSubcommand::Add(args) => {
            engine
                .add_item(args.product, args.quantity, args.variation)
                .await
        }
        CartSubcommand::Update(args) => {
            engine
                .update_quantity(&CartItemId::from(args.item), args.quantity)
                .await
        }
        CartSubcommand::Remove(args) => engine.remove_item(&CartItemId::from(args.item)).await,
        CartSubcommand::Clear => engine.clear().await,
    };

    println!("{}", render::cart(cart, context.currency));

    Ok(())
}
