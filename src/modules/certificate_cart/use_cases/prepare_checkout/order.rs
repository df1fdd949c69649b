// Order draft handed to the payment step. A snapshot of the priced cart at
// checkout time; later cart changes do not affect it.

use crate::modules::certificate_cart::core::compute::ComputedCart;
use crate::shared::core::primitives::{Cents, Quantity, UserId};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("the cart is empty")]
pub struct EmptyCart;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub certificate_slug: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub quantity: Quantity,
    pub unit_price_cents: Cents,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderMetadata {
    pub order_id: String,
    pub user_id: UserId,
    pub total_quantity: Quantity,
    pub unit_price_cents: Cents,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub order_id: String,
    pub user_id: UserId,
    pub status: OrderStatus,
    pub quantity: Quantity,
    pub total_amount_cents: Cents,
    pub created_at: i64,
    pub items: Vec<OrderItem>,
    pub metadata: OrderMetadata,
}

pub fn draft_order(
    order_id: &str,
    user_id: &UserId,
    created_at: i64,
    cart: &ComputedCart,
) -> Result<OrderDraft, EmptyCart> {
    if cart.items.is_empty() {
        return Err(EmptyCart);
    }

    let items = cart
        .items
        .iter()
        .map(|priced| OrderItem {
            certificate_slug: priced.item.certificate_slug.clone(),
            title: priced.item.title.clone(),
            summary: priced.item.summary.clone(),
            quantity: priced.item.quantity.max(1),
            unit_price_cents: priced.unit_price_cents,
        })
        .collect();

    Ok(OrderDraft {
        order_id: order_id.to_string(),
        user_id: user_id.clone(),
        status: OrderStatus::Pending,
        quantity: cart.pricing.total_quantity,
        total_amount_cents: cart.pricing.total_cents,
        created_at,
        items,
        metadata: OrderMetadata {
            order_id: order_id.to_string(),
            user_id: user_id.clone(),
            total_quantity: cart.pricing.total_quantity,
            unit_price_cents: cart.pricing.unit_price_cents,
        },
    })
}
