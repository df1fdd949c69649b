use crate::modules::certificate_cart::application::errors::{CartError, require_user};
use crate::modules::certificate_cart::application::stamps::{new_id, now_millis};
use crate::modules::certificate_cart::core::compute::compute_cart;
use crate::modules::certificate_cart::use_cases::prepare_checkout::order::{
    EmptyCart, OrderDraft, draft_order,
};
use crate::shared::core::primitives::UserId;
use crate::shared::infrastructure::cart_repository::CartRepository;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error(transparent)]
    EmptyCart(#[from] EmptyCart),

    #[error(transparent)]
    Cart(#[from] CartError),
}

/// Builds the order draft for the user's current cart. The cart itself is
/// left untouched; it is cleared once payment succeeds.
pub struct PrepareCheckoutHandler<TRepository>
where
    TRepository: CartRepository + Send + Sync + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> PrepareCheckoutHandler<TRepository>
where
    TRepository: CartRepository + Send + Sync + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, user_id: Option<&UserId>) -> Result<OrderDraft, CheckoutError> {
        let user_id = require_user(user_id)?;
        let loaded = self
            .repository
            .load(user_id)
            .await
            .map_err(CartError::from)?;
        let cart = compute_cart(&loaded.state.items);
        let draft = draft_order(&new_id(), user_id, now_millis(), &cart)?;

        tracing::info!(
            user_id = %user_id,
            order_id = %draft.order_id,
            total_quantity = draft.quantity,
            total_amount_cents = draft.total_amount_cents,
            "order draft prepared"
        );
        Ok(draft)
    }
}
