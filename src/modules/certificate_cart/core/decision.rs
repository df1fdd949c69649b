use crate::shared::core::primitives::Quantity;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("certificate slug and title are required")]
    MissingCertificate,

    #[error("item id is required")]
    MissingItemId,

    #[error("quantity must be a number")]
    InvalidQuantity,

    #[error("a cart holds at most {max} certificates")]
    CartLimitExceeded { max: Quantity },
}
