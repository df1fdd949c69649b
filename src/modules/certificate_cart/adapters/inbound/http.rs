// Pieces shared by every HTTP route of the cart: identity extraction, body
// helpers and the error body.

use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use std::convert::Infallible;

use crate::modules::certificate_cart::application::errors::{CartError, require_user};
use crate::modules::certificate_cart::core::decision::DecideError;
use crate::shared::core::primitives::UserId;
use crate::shell::state::AppState;

/// The identity set by the upstream authentication layer, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser(pub Option<UserId>);

impl CurrentUser {
    pub fn user(&self) -> Option<&UserId> {
        self.0.as_ref()
    }

    /// Mutating routes call this before looking at the body, so a guest always
    /// gets a 401.
    pub fn require(&self) -> Result<&UserId, Response> {
        require_user(self.user()).map_err(|error| cart_error_response(&error))
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(&state.identity_header)
            .and_then(|value| value.to_str().ok());
        Ok(Self(UserId::resolve(raw)))
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            message: message.into(),
        }),
    )
        .into_response()
}

pub fn invalid_json_response() -> Response {
    error_response(StatusCode::UNPROCESSABLE_ENTITY, "malformed request body")
}

/// Reads a quantity from a JSON body. Fractions are truncated toward zero;
/// `null` counts as absent.
pub fn quantity_from_json(value: Option<&Value>) -> Result<Option<i64>, DecideError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_i64()
            .or_else(|| value.as_f64().map(|f| f as i64))
            .map(Some)
            .ok_or(DecideError::InvalidQuantity),
    }
}

pub fn cart_error_status(error: &CartError) -> StatusCode {
    match error {
        CartError::Unauthenticated => StatusCode::UNAUTHORIZED,
        CartError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        CartError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn cart_error_response(error: &CartError) -> Response {
    let status = cart_error_status(error);
    if status.is_server_error() {
        tracing::error!(error = %error, "cart request failed");
    }
    error_response(status, error.to_string())
}
