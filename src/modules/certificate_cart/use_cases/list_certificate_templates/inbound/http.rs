use axum::{
    Json,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::certificate_cart::adapters::inbound::http::error_response;
use crate::modules::certificate_cart::use_cases::list_certificate_templates::handler::{
    get_certificate_template, list_certificate_templates,
};

pub async fn handle() -> impl IntoResponse {
    Json(list_certificate_templates())
}

pub async fn handle_one(Path(slug): Path<String>) -> Response {
    match get_certificate_template(&slug) {
        Some(listing) => Json(listing).into_response(),
        None => error_response(StatusCode::NOT_FOUND, format!("unknown certificate template: {slug}")),
    }
}
