use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::modules::certificate_cart::adapters::inbound::http::{CurrentUser, cart_error_response};
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, user: CurrentUser) -> Response {
    match state.clear_cart_handler.handle(user.user()).await {
        Ok(cart) => Json(cart).into_response(),
        Err(error) => cart_error_response(&error),
    }
}
