use crate::modules::certificate_cart::application::commit::commit_with_retry;
use crate::modules::certificate_cart::application::errors::{CartError, require_user};
use crate::modules::certificate_cart::application::stamps::fresh_stamp;
use crate::modules::certificate_cart::core::compute::{ComputedCart, compute_cart};
use crate::modules::certificate_cart::core::rollup::RollupPolicy;
use crate::modules::certificate_cart::use_cases::update_cart_item_quantity::command::UpdateCartItemQuantity;
use crate::modules::certificate_cart::use_cases::update_cart_item_quantity::decide::decide_update_quantity;
use crate::shared::core::primitives::UserId;
use crate::shared::infrastructure::cart_repository::CartRepository;
use std::sync::Arc;

pub struct UpdateCartItemQuantityHandler<TRepository>
where
    TRepository: CartRepository + Send + Sync + 'static,
{
    repository: Arc<TRepository>,
    max_attempts: u32,
    policy: RollupPolicy,
}

impl<TRepository> UpdateCartItemQuantityHandler<TRepository>
where
    TRepository: CartRepository + Send + Sync + 'static,
{
    pub fn new(repository: Arc<TRepository>, max_attempts: u32) -> Self {
        Self {
            repository,
            max_attempts,
            policy: RollupPolicy::default(),
        }
    }

    pub async fn handle(
        &self,
        user_id: Option<&UserId>,
        command: UpdateCartItemQuantity,
    ) -> Result<ComputedCart, CartError> {
        let user_id = require_user(user_id)?;
        let stamp = fresh_stamp();

        let state = commit_with_retry(&*self.repository, user_id, self.max_attempts, |state| {
            decide_update_quantity(state, &command, &stamp, self.policy)
        })
        .await?;

        let cart = compute_cart(&state.items);
        tracing::info!(
            user_id = %user_id,
            item_id = %command.item_id,
            quantity = command.quantity,
            total_quantity = cart.pricing.total_quantity,
            "cart item quantity updated"
        );
        Ok(cart)
    }
}
