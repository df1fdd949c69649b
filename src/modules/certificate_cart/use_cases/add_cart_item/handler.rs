use crate::modules::certificate_cart::application::commit::commit_with_retry;
use crate::modules::certificate_cart::application::errors::{CartError, require_user};
use crate::modules::certificate_cart::application::stamps::{fresh_stamp, new_id};
use crate::modules::certificate_cart::core::compute::{ComputedCart, compute_cart};
use crate::modules::certificate_cart::core::rollup::RollupPolicy;
use crate::modules::certificate_cart::use_cases::add_cart_item::command::AddCartItem;
use crate::modules::certificate_cart::use_cases::add_cart_item::decide::decide_add_item;
use crate::shared::core::primitives::UserId;
use crate::shared::infrastructure::cart_repository::CartRepository;
use std::sync::Arc;

pub struct AddCartItemHandler<TRepository>
where
    TRepository: CartRepository + Send + Sync + 'static,
{
    repository: Arc<TRepository>,
    max_attempts: u32,
    policy: RollupPolicy,
}

impl<TRepository> AddCartItemHandler<TRepository>
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
        command: AddCartItem,
    ) -> Result<ComputedCart, CartError> {
        let user_id = require_user(user_id)?;
        let line_id = new_id();
        let stamp = fresh_stamp();

        let state = commit_with_retry(&*self.repository, user_id, self.max_attempts, |state| {
            decide_add_item(state, &command, &line_id, &stamp, self.policy)
        })
        .await?;

        let cart = compute_cart(&state.items);
        tracing::info!(
            user_id = %user_id,
            certificate_slug = %command.certificate_slug,
            total_quantity = cart.pricing.total_quantity,
            unit_price_cents = cart.pricing.unit_price_cents,
            "certificate added to cart"
        );
        Ok(cart)
    }
}
