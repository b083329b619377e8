//! Carts

mod engine;
pub mod errors;
pub mod models;

pub use engine::{CartEngine, CartServices, CartSettings};
pub use errors::CheckoutError;
pub use models::{Cart, CartItem};
