use crate::modules::certificate_cart::core::decision::DecideError;
use crate::shared::core::primitives::UserId;
use crate::shared::infrastructure::cart_repository::CartRepositoryError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("no authenticated session")]
    Unauthenticated,

    #[error("invalid input: {0}")]
    InvalidInput(#[from] DecideError),

    #[error(transparent)]
    Storage(#[from] CartRepositoryError),
}

/// Mutations are only allowed for a resolved identity.
pub fn require_user(user_id: Option<&UserId>) -> Result<&UserId, CartError> {
    user_id.ok_or(CartError::Unauthenticated)
}
