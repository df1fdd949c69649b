// Bulk import: one AddItem per spreadsheet row, strictly in order.
//
// Each row is merged into the form, its summary derived, and its item added
// before the next row starts. The form is restored to its pre-import snapshot
// on every exit path. Rows already committed stay committed when a later row
// fails.

use crate::modules::certificate_cart::application::errors::{CartError, require_user};
use crate::modules::certificate_cart::core::compute::ComputedCart;
use crate::modules::certificate_cart::use_cases::add_cart_item::command::AddCartItem;
use crate::modules::certificate_cart::use_cases::add_cart_item::handler::AddCartItemHandler;
use crate::modules::certificate_cart::use_cases::bulk_import::command::{
    BulkImport, FormFields, ParsedRow, is_blank_row,
};
use crate::shared::core::primitives::UserId;
use crate::shared::infrastructure::cart_repository::CartRepository;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BulkImportError {
    #[error(transparent)]
    Rejected(#[from] CartError),

    #[error("no rows to import")]
    NoRows,

    #[error("bulk import stopped after {committed} of {total} rows: {source}")]
    PartialFailure {
        committed: usize,
        total: usize,
        #[source]
        source: CartError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkImportReport {
    pub committed: usize,
    pub skipped: usize,
    pub cart: ComputedCart,
}

/// Where imported rows end up. The add-item handler in production.
#[async_trait]
pub trait CartItemSink: Send + Sync {
    async fn add_item(
        &self,
        user_id: Option<&UserId>,
        command: AddCartItem,
    ) -> Result<ComputedCart, CartError>;
}

#[async_trait]
impl<TRepository> CartItemSink for AddCartItemHandler<TRepository>
where
    TRepository: CartRepository + Send + Sync + 'static,
{
    async fn add_item(
        &self,
        user_id: Option<&UserId>,
        command: AddCartItem,
    ) -> Result<ComputedCart, CartError> {
        self.handle(user_id, command).await
    }
}

pub struct BulkImportHandler<TSink>
where
    TSink: CartItemSink + 'static,
{
    sink: Arc<TSink>,
}

impl<TSink> BulkImportHandler<TSink>
where
    TSink: CartItemSink + 'static,
{
    pub fn new(sink: Arc<TSink>) -> Self {
        Self { sink }
    }

    pub async fn handle(
        &self,
        user_id: Option<&UserId>,
        form: &mut FormFields,
        command: BulkImport,
    ) -> Result<BulkImportReport, BulkImportError> {
        let user_id = require_user(user_id)?;
        let snapshot = form.clone();
        let outcome = self.import_rows(user_id, form, &command).await;
        *form = snapshot;

        match &outcome {
            Ok(report) => tracing::info!(
                user_id = %user_id,
                certificate_slug = %command.certificate_slug,
                committed = report.committed,
                skipped = report.skipped,
                total_quantity = report.cart.pricing.total_quantity,
                "bulk import finished"
            ),
            Err(error) => tracing::warn!(
                user_id = %user_id,
                certificate_slug = %command.certificate_slug,
                error = %error,
                "bulk import aborted"
            ),
        }
        outcome
    }

    async fn import_rows(
        &self,
        user_id: &UserId,
        form: &mut FormFields,
        command: &BulkImport,
    ) -> Result<BulkImportReport, BulkImportError> {
        let rows: Vec<&ParsedRow> = command.rows.iter().filter(|row| !is_blank_row(row)).collect();
        let skipped = command.rows.len() - rows.len();
        let total = rows.len();
        if total == 0 {
            return Err(BulkImportError::NoRows);
        }

        let mut committed = 0;
        let mut cart = ComputedCart::empty();
        for row in rows {
            form.apply_row(row);
            tokio::task::yield_now().await;

            let summary = command
                .summary_field
                .as_deref()
                .and_then(|field| row_summary(row, form, field));
            let add = AddCartItem {
                quantity: Some(1),
                summary,
                ..AddCartItem::single(&command.certificate_slug, &command.title)
            };

            cart = self.sink.add_item(Some(user_id), add).await.map_err(|source| {
                BulkImportError::PartialFailure {
                    committed,
                    total,
                    source,
                }
            })?;
            committed += 1;
        }

        Ok(BulkImportReport {
            committed,
            skipped,
            cart,
        })
    }
}

fn row_summary(row: &ParsedRow, form: &FormFields, field: &str) -> Option<String> {
    let from_row = row.get(field).map(|value| value.trim()).filter(|v| !v.is_empty());
    let from_form = || form.get(field).map(str::trim).filter(|v| !v.is_empty());
    from_row.or_else(from_form).map(str::to_string)
}
