use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::certificate_cart::adapters::inbound::http::{
    CurrentUser, cart_error_response, error_response,
};
use crate::modules::certificate_cart::use_cases::prepare_checkout::handler::CheckoutError;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, user: CurrentUser) -> Response {
    match state.checkout_handler.handle(user.user()).await {
        Ok(draft) => (StatusCode::CREATED, Json(draft)).into_response(),
        Err(error @ CheckoutError::EmptyCart(_)) => {
            error_response(StatusCode::BAD_REQUEST, error.to_string())
        }
        Err(CheckoutError::Cart(error)) => cart_error_response(&error),
    }
}
