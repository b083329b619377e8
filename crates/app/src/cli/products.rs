use clap::{Args, Subcommand};
use intellismart_app::{context::AppContext, woocommerce::ProductQuery};

use super::render;

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    /// List published products
    List(ListArgs),
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    page: u32,

    /// Products per page
    #[arg(long, default_value_t = 12)]
    per_page: u32,

    /// Category id to filter by
    #[arg(long)]
    category: Option<String>,

    /// Search term
    #[arg(long)]
    search: Option<String>,
}

pub(crate) async fn run(command: ProductsCommand, context: &AppContext) -> Result<(), String> {
    match command.command {
        ProductsSubcommand::List(args) => list(args, context).await,
    }
}

async fn list(args: ListArgs, context: &AppContext) -> Result<(), String> {
    let query = ProductQuery::new(args.page, args.per_page)
        .with_category(args.category)
        .with_search(args.search);

    let products = context
        .woocommerce
        .list_products(&query)
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    println!("{}", render::products(&products, context.currency));

    Ok(())
}
