use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::Value;

use crate::modules::certificate_cart::adapters::inbound::http::{
    CurrentUser, cart_error_response, invalid_json_response, quantity_from_json,
};
use crate::modules::certificate_cart::application::errors::CartError;
use crate::modules::certificate_cart::core::decision::DecideError;
use crate::modules::certificate_cart::use_cases::update_cart_item_quantity::command::UpdateCartItemQuantity;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartItemQuantityBody {
    #[serde(default)]
    pub item_id: String,
    pub quantity: Option<Value>,
}

impl UpdateCartItemQuantityBody {
    fn into_command(self) -> Result<UpdateCartItemQuantity, DecideError> {
        if self.item_id.trim().is_empty() {
            return Err(DecideError::MissingItemId);
        }
        let quantity =
            quantity_from_json(self.quantity.as_ref())?.ok_or(DecideError::InvalidQuantity)?;
        Ok(UpdateCartItemQuantity {
            item_id: self.item_id,
            quantity,
        })
    }
}

pub async fn handle(
    State(state): State<AppState>,
    user: CurrentUser,
    body: Result<Json<UpdateCartItemQuantityBody>, JsonRejection>,
) -> Response {
    let user_id = match user.require() {
        Ok(user_id) => user_id,
        Err(response) => return response,
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return invalid_json_response(),
    };
    let command = match body.into_command() {
        Ok(command) => command,
        Err(error) => return cart_error_response(&CartError::InvalidInput(error)),
    };

    match state.update_quantity_handler.handle(Some(user_id), command).await {
        Ok(cart) => Json(cart).into_response(),
        Err(error) => cart_error_response(&error),
    }
}
