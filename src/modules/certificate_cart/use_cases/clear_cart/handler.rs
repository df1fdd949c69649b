use crate::modules::certificate_cart::application::errors::{CartError, require_user};
use crate::modules::certificate_cart::core::compute::ComputedCart;
use crate::shared::core::primitives::UserId;
use crate::shared::infrastructure::cart_repository::CartRepository;
use std::sync::Arc;

pub struct ClearCartHandler<TRepository>
where
    TRepository: CartRepository + Send + Sync + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> ClearCartHandler<TRepository>
where
    TRepository: CartRepository + Send + Sync + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, user_id: Option<&UserId>) -> Result<ComputedCart, CartError> {
        let user_id = require_user(user_id)?;
        self.repository.delete(user_id).await?;
        tracing::info!(user_id = %user_id, "cart cleared");
        Ok(ComputedCart::empty())
    }
}
