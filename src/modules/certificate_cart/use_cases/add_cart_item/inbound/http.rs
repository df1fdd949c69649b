use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::Value;

use crate::modules::certificate_cart::adapters::inbound::http::{
    CurrentUser, cart_error_response, invalid_json_response, quantity_from_json,
};
use crate::modules::certificate_cart::application::errors::CartError;
use crate::modules::certificate_cart::core::decision::DecideError;
use crate::modules::certificate_cart::use_cases::add_cart_item::command::AddCartItem;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCartItemBody {
    #[serde(default)]
    pub certificate_slug: String,
    #[serde(default)]
    pub title: String,
    pub quantity: Option<Value>,
    pub summary: Option<String>,
    pub preview_image: Option<String>,
}

impl TryFrom<AddCartItemBody> for AddCartItem {
    type Error = DecideError;

    fn try_from(body: AddCartItemBody) -> Result<Self, Self::Error> {
        Ok(Self {
            quantity: quantity_from_json(body.quantity.as_ref())?,
            certificate_slug: body.certificate_slug,
            title: body.title,
            summary: body.summary,
            preview_image: body.preview_image,
        })
    }
}

pub async fn handle(
    State(state): State<AppState>,
    user: CurrentUser,
    body: Result<Json<AddCartItemBody>, JsonRejection>,
) -> Response {
    let user_id = match user.require() {
        Ok(user_id) => user_id,
        Err(response) => return response,
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return invalid_json_response(),
    };
    let command = match AddCartItem::try_from(body) {
        Ok(command) => command,
        Err(error) => return cart_error_response(&CartError::InvalidInput(error)),
    };

    match state.add_item_handler.handle(Some(user_id), command).await {
        Ok(cart) => (StatusCode::CREATED, Json(cart)).into_response(),
        Err(error) => cart_error_response(&error),
    }
}

#[cfg(test)]
mod add_cart_item_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use tower::ServiceExt;

    use crate::shell::state::AppState;
    use crate::tests::fixtures::app::{IDENTITY_HEADER, make_offline_state, make_test_state, read_json};
    use crate::tests::fixtures::cart::USER_ID;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new().route("/cart", post(handle)).with_state(state)
    }

    fn post_cart(user: Option<&str>, body: &'static str) -> Request<Body> {
        let mut request = Request::post("/cart").header("content-type", "application/json");
        if let Some(user) = user {
            request = request.header(IDENTITY_HEADER, user);
        }
        request.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn it_should_return_201_with_the_computed_cart() {
        let body = r#"{"certificateSlug":"batismo","title":"Certificado de Batismo","summary":"Ana"}"#;

        let response = app(make_test_state())
            .oneshot(post_cart(Some(USER_ID), body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = read_json(response).await;
        assert_eq!(json["items"][0]["quantity"], 1);
        assert_eq!(json["items"][0]["summary"], "Ana");
        assert_eq!(json["items"][0]["entries"][0]["summary"], "Ana");
        assert_eq!(json["pricing"]["totalCents"], 250);
    }

    #[tokio::test]
    async fn it_should_merge_the_same_slug_into_one_line() {
        let router = app(make_test_state());
        let body = r#"{"certificateSlug":"batismo","title":"Certificado de Batismo"}"#;
        router
            .clone()
            .oneshot(post_cart(Some(USER_ID), body))
            .await
            .unwrap();
        let response = router.oneshot(post_cart(Some(USER_ID), body)).await.unwrap();

        let json = read_json(response).await;
        assert_eq!(json["items"].as_array().map(Vec::len), Some(1));
        assert_eq!(json["items"][0]["quantity"], 2);
        assert_eq!(json["items"][0]["entries"].as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn it_should_return_401_without_an_identity() {
        let body = r#"{"certificateSlug":"batismo","title":"Certificado de Batismo"}"#;
        let response = app(make_test_state())
            .oneshot(post_cart(None, body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = read_json(response).await;
        assert_eq!(json["message"], "no authenticated session");
    }

    #[tokio::test]
    async fn it_should_return_400_when_the_title_is_missing() {
        let response = app(make_test_state())
            .oneshot(post_cart(Some(USER_ID), r#"{"certificateSlug":"batismo"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn it_should_return_401_for_a_guest_with_a_malformed_body() {
        let response = app(make_test_state())
            .oneshot(post_cart(None, "not-json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn it_should_truncate_a_fractional_quantity() {
        let body = r#"{"certificateSlug":"batismo","title":"Certificado de Batismo","quantity":2.7}"#;
        let response = app(make_test_state())
            .oneshot(post_cart(Some(USER_ID), body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = read_json(response).await;
        assert_eq!(json["items"][0]["quantity"], 2);
    }

    #[tokio::test]
    async fn it_should_return_400_when_the_quantity_is_not_a_number() {
        let body = r#"{"certificateSlug":"batismo","title":"Certificado de Batismo","quantity":"two"}"#;
        let response = app(make_test_state())
            .oneshot(post_cart(Some(USER_ID), body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = read_json(response).await;
        assert_eq!(json["message"], "invalid input: quantity must be a number");
    }

    #[tokio::test]
    async fn it_should_return_400_past_the_cart_limit() {
        let body = r#"{"certificateSlug":"batismo","title":"Certificado de Batismo","quantity":1e12}"#;
        let response = app(make_test_state())
            .oneshot(post_cart(Some(USER_ID), body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn it_should_return_422_on_invalid_json() {
        let response = app(make_test_state())
            .oneshot(post_cart(Some(USER_ID), "not-json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn it_should_return_500_when_the_repository_is_offline() {
        let body = r#"{"certificateSlug":"batismo","title":"Certificado de Batismo"}"#;
        let response = app(make_offline_state())
            .oneshot(post_cart(Some(USER_ID), body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
