use clap::{Args, Subcommand};
use intellismart_app::context::AppContext;

use super::render;

#[derive(Debug, Args)]
pub(crate) struct OrdersCommand {
    #[command(subcommand)]
    command: OrdersSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrdersSubcommand {
    /// Show a placed order
    Show(ShowArgs),
}

#[derive(Debug, Args)]
struct ShowArgs {
    /// Order id, as printed by `checkout`
    #[arg(long)]
    id: u64,
}

pub(crate) async fn run(command: OrdersCommand, context: &AppContext) -> Result<(), String> {
    match command.command {
        OrdersSubcommand::Show(args) => show(args, context).await,
    }
}

async fn show(args: ShowArgs, context: &AppContext) -> Result<(), String> {
    let order = context
        .woocommerce
        .fetch_order(args.id)
        .await
        .map_err(|error| format!("failed to fetch order: {error}"))?
        .ok_or_else(|| format!("order {} not found", args.id))?;

    println!("{}", render::order(&order, context.currency));

    Ok(())
}
