use crate::modules::certificate_cart::core::cart::CartState;
use crate::shared::core::primitives::UserId;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartRepositoryError {
    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: i64, actual: i64 },

    #[error("backend error: {0}")]
    Backend(String),
}

/// A user's cart as stored, with the version it was read at. A cart that was
/// never saved loads as empty at version 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedCart {
    pub state: CartState,
    pub version: i64,
}

#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn load(&self, user_id: &UserId) -> Result<LoadedCart, CartRepositoryError>;

    /// Stores `state` if the stored version still equals `expected_version`.
    async fn save(
        &self,
        user_id: &UserId,
        expected_version: i64,
        state: CartState,
    ) -> Result<i64, CartRepositoryError>;

    /// Empties the cart. Implementations must not reuse versions afterwards,
    /// or a save read before the delete could land on top of a newer cart.
    async fn delete(&self, user_id: &UserId) -> Result<(), CartRepositoryError>;
}

pub mod in_memory;
