use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::modules::certificate_cart::adapters::inbound::http::{
    CurrentUser, cart_error_response, cart_error_status, error_response, invalid_json_response,
};
use crate::modules::certificate_cart::use_cases::bulk_import::command::{
    BulkImport, FormFields, ParsedRow,
};
use crate::modules::certificate_cart::use_cases::bulk_import::fields::resolve_bulk_fields;
use crate::modules::certificate_cart::use_cases::bulk_import::handler::BulkImportError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkImportBody {
    #[serde(default)]
    pub certificate_slug: String,
    #[serde(default)]
    pub title: String,
    pub summary_field: Option<String>,
    #[serde(default)]
    pub rows: Vec<ParsedRow>,
    /// Form values the rows are merged over.
    #[serde(default)]
    pub current_fields: BTreeMap<String, String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialFailureBody {
    pub message: String,
    pub committed: usize,
    pub total: usize,
}

pub async fn handle(
    State(state): State<AppState>,
    user: CurrentUser,
    body: Result<Json<BulkImportBody>, JsonRejection>,
) -> Response {
    let user_id = match user.require() {
        Ok(user_id) => user_id,
        Err(response) => return response,
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return invalid_json_response(),
    };

    let mut form = FormFields::new(body.current_fields);
    let command = BulkImport {
        certificate_slug: body.certificate_slug,
        title: body.title,
        summary_field: body.summary_field,
        rows: body.rows,
    };

    match state
        .bulk_import_handler
        .handle(Some(user_id), &mut form, command)
        .await
    {
        Ok(report) => Json(report).into_response(),
        Err(error) => {
            let message = error.to_string();
            match error {
                BulkImportError::Rejected(source) => cart_error_response(&source),
                BulkImportError::NoRows => error_response(StatusCode::BAD_REQUEST, message),
                BulkImportError::PartialFailure {
                    committed,
                    total,
                    source,
                } => (
                    cart_error_status(&source),
                    Json(PartialFailureBody {
                        message,
                        committed,
                        total,
                    }),
                )
                    .into_response(),
            }
        }
    }
}

#[derive(Deserialize)]
pub struct BulkFieldsParams {
    #[serde(default)]
    pub keys: String,
}

pub async fn fields(Query(params): Query<BulkFieldsParams>) -> Response {
    let keys: Vec<&str> = params
        .keys
        .split(',')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .collect();
    Json(resolve_bulk_fields(&keys)).into_response()
}
