use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::certificate_cart::adapters::inbound::graphql::{GqlCart, cart_error, current_user};
use crate::modules::certificate_cart::use_cases::add_cart_item::command::AddCartItem;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct AddCartItemMutation;

#[Object]
impl AddCartItemMutation {
    async fn add_cart_item(
        &self,
        context: &Context<'_>,
        certificate_slug: String,
        title: String,
        quantity: Option<i64>,
        summary: Option<String>,
        preview_image: Option<String>,
    ) -> GqlResult<GqlCart> {
        let state = context.data_unchecked::<AppState>();

        let command = AddCartItem {
            certificate_slug,
            title,
            quantity,
            summary,
            preview_image,
        };

        let cart = state
            .add_item_handler
            .handle(current_user(context), command)
            .await
            .map_err(cart_error)?;
        Ok(cart.into())
    }
}
