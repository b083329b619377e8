//! Cart errors.

use thiserror::Error;

use crate::orders::OrderError;

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("failed to create order")]
    Submission(#[source] OrderError),

    #[error("order was not created")]
    NotCreated,
}
