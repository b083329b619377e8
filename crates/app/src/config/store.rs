//! Store Config

use std::path::PathBuf;

use clap::Args;
use intellismart::store::DEFAULT_CART_KEY;

/// Where carts are kept between invocations.
#[derive(Debug, Args)]
pub struct StoreConfig {
    /// Directory holding cart documents
    #[arg(long, env = "CART_DIR", default_value = ".intellismart")]
    pub cart_dir: PathBuf,

    /// Key this session's cart is stored under
    #[arg(long, env = "CART_KEY", default_value = DEFAULT_CART_KEY)]
    pub cart_key: String,
}
