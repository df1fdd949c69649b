use crate::modules::certificate_cart::application::errors::CartError;
use crate::modules::certificate_cart::core::compute::{ComputedCart, compute_cart};
use crate::shared::core::primitives::UserId;
use crate::shared::infrastructure::cart_repository::CartRepository;
use std::sync::Arc;

pub struct GetCartHandler<TRepository>
where
    TRepository: CartRepository + Send + Sync + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> GetCartHandler<TRepository>
where
    TRepository: CartRepository + Send + Sync + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    /// Guests see the empty cart. Reading never writes.
    pub async fn handle(&self, user_id: Option<&UserId>) -> Result<ComputedCart, CartError> {
        let Some(user_id) = user_id else {
            return Ok(ComputedCart::empty());
        };
        let loaded = self.repository.load(user_id).await?;
        let cart = compute_cart(&loaded.state.items);
        tracing::debug!(
            user_id = %user_id,
            version = loaded.version,
            total_quantity = cart.pricing.total_quantity,
            "cart loaded"
        );
        Ok(cart)
    }
}
