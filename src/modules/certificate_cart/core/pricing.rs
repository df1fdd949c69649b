// Volume pricing for certificates.
//
// The whole basket is priced at one unit price chosen by its total quantity.
// Tiers are matched from the highest threshold down; the first threshold not
// exceeding the quantity wins.

use crate::shared::core::primitives::{Cents, Quantity};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceTier {
    pub min_quantity: Quantity,
    pub unit_price_cents: Cents,
}

/// Ordered from the highest threshold to the lowest.
pub const PRICE_TIERS: [PriceTier; 3] = [
    PriceTier {
        min_quantity: 51,
        unit_price_cents: 180,
    },
    PriceTier {
        min_quantity: 11,
        unit_price_cents: 200,
    },
    PriceTier {
        min_quantity: 1,
        unit_price_cents: 250,
    },
];

pub fn unit_price_cents(quantity: Quantity) -> Cents {
    PRICE_TIERS
        .iter()
        .find(|tier| quantity >= tier.min_quantity)
        .map_or(0, |tier| tier.unit_price_cents)
}

pub fn total_cents(unit_price_cents: Cents, quantity: Quantity) -> Cents {
    unit_price_cents.saturating_mul(Cents::from(quantity))
}

/// Smallest discount threshold above `quantity`. The entry tier is never a
/// target, so an empty basket points at the first discount.
pub fn next_threshold(quantity: Quantity) -> Option<Quantity> {
    PRICE_TIERS
        .iter()
        .rev()
        .skip(1)
        .map(|tier| tier.min_quantity)
        .find(|&min| quantity < min)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Upsell {
    pub missing: Quantity,
    pub new_unit_price_cents: Cents,
    pub new_total_cents: Cents,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierLookahead {
    pub next_threshold: Quantity,
    pub next_unit_price_cents: Cents,
    pub missing_for_next: Quantity,
    pub upsell: Option<Upsell>,
}

/// Look-ahead to the next cheaper tier. `None` once the best tier is reached.
pub fn lookahead(quantity: Quantity) -> Option<TierLookahead> {
    let next = next_threshold(quantity)?;
    let next_unit_price_cents = unit_price_cents(next);
    let missing_for_next = next - quantity;
    let upsell = (missing_for_next == 1).then(|| Upsell {
        missing: 1,
        new_unit_price_cents: next_unit_price_cents,
        new_total_cents: total_cents(next_unit_price_cents, quantity.saturating_add(1)),
    });
    Some(TierLookahead {
        next_threshold: next,
        next_unit_price_cents,
        missing_for_next,
        upsell,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingSummary {
    pub quantity: Quantity,
    pub unit_in_cents: Cents,
    pub total_in_cents: Cents,
}

/// Quotes a bare quantity without a cart around it.
pub fn calculate_certificate_pricing(quantity: Quantity) -> PricingSummary {
    let unit = unit_price_cents(quantity);
    PricingSummary {
        quantity,
        unit_in_cents: unit,
        total_in_cents: total_cents(unit, quantity),
    }
}
