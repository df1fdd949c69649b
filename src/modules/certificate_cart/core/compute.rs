// Cart aggregation: prices every line at the basket-wide unit price.
//
// Pure. Nothing is stored; callers recompute on every read so the result can
// never drift from the tier table.

use crate::modules::certificate_cart::core::cart::{RawCartItem, total_quantity};
use crate::modules::certificate_cart::core::pricing::{
    Upsell, lookahead, total_cents, unit_price_cents,
};
use crate::shared::core::primitives::{Cents, Quantity};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedCartItem {
    #[serde(flatten)]
    pub item: RawCartItem,
    pub unit_price_cents: Cents,
    pub total_cents: Cents,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartPricing {
    pub unit_price_cents: Cents,
    pub total_cents: Cents,
    pub total_quantity: Quantity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_threshold: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_unit_price_cents: Option<Cents>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_for_next: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upsell: Option<Upsell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComputedCart {
    pub items: Vec<PricedCartItem>,
    pub pricing: CartPricing,
}

impl ComputedCart {
    pub fn empty() -> Self {
        compute_cart(&[])
    }
}

pub fn compute_cart(items: &[RawCartItem]) -> ComputedCart {
    let total_quantity = total_quantity(items);
    let unit_price_cents = unit_price_cents(total_quantity);

    let priced = items
        .iter()
        .cloned()
        .map(|item| PricedCartItem {
            total_cents: total_cents(unit_price_cents, item.quantity),
            unit_price_cents,
            item,
        })
        .collect();

    let lookahead = lookahead(total_quantity);

    ComputedCart {
        items: priced,
        pricing: CartPricing {
            unit_price_cents,
            total_cents: total_cents(unit_price_cents, total_quantity),
            total_quantity,
            next_threshold: lookahead.map(|l| l.next_threshold),
            next_unit_price_cents: lookahead.map(|l| l.next_unit_price_cents),
            missing_for_next: lookahead.map(|l| l.missing_for_next),
            upsell: lookahead.and_then(|l| l.upsell),
        },
    }
}
