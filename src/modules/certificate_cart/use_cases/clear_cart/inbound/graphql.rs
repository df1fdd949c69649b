use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::certificate_cart::adapters::inbound::graphql::{GqlCart, cart_error, current_user};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ClearCartMutation;

#[Object]
impl ClearCartMutation {
    async fn clear_cart(&self, context: &Context<'_>) -> GqlResult<GqlCart> {
        let state = context.data_unchecked::<AppState>();
        let cart = state
            .clear_cart_handler
            .handle(current_user(context))
            .await
            .map_err(cart_error)?;
        Ok(cart.into())
    }
}
