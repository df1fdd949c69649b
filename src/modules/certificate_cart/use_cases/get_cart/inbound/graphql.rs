use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::certificate_cart::adapters::inbound::graphql::{GqlCart, cart_error, current_user};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CartQuery;

#[Object]
impl CartQuery {
    /// The caller's priced cart. Guests get the empty cart.
    async fn cart(&self, context: &Context<'_>) -> GqlResult<GqlCart> {
        let state = context.data_unchecked::<AppState>();
        let cart = state
            .get_cart_handler
            .handle(current_user(context))
            .await
            .map_err(cart_error)?;
        Ok(cart.into())
    }
}
