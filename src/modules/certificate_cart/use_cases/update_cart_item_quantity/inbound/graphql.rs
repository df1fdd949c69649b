use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::certificate_cart::adapters::inbound::graphql::{GqlCart, cart_error, current_user};
use crate::modules::certificate_cart::use_cases::update_cart_item_quantity::command::UpdateCartItemQuantity;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UpdateCartItemQuantityMutation;

#[Object]
impl UpdateCartItemQuantityMutation {
    /// Zero or below removes the line.
    async fn update_cart_item_quantity(
        &self,
        context: &Context<'_>,
        item_id: ID,
        quantity: i64,
    ) -> GqlResult<GqlCart> {
        let state = context.data_unchecked::<AppState>();

        let command = UpdateCartItemQuantity {
            item_id: item_id.to_string(),
            quantity,
        };

        let cart = state
            .update_quantity_handler
            .handle(current_user(context), command)
            .await
            .map_err(cart_error)?;
        Ok(cart.into())
    }
}
