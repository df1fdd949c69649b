// GraphQL shapes of the computed cart, plus identity and error helpers shared
// by the cart resolvers.

use async_graphql::{Context, ErrorExtensions, SimpleObject};

use crate::modules::certificate_cart::adapters::inbound::http::CurrentUser;
use crate::modules::certificate_cart::application::errors::CartError;
use crate::modules::certificate_cart::core::cart::CartEntry;
use crate::modules::certificate_cart::core::compute::{CartPricing, ComputedCart, PricedCartItem};
use crate::modules::certificate_cart::core::pricing::Upsell;
use crate::shared::core::primitives::UserId;

#[derive(SimpleObject, Clone)]
pub struct GqlCartEntry {
    pub id: String,
    pub quantity: u32,
    pub summary: Option<String>,
    pub preview_image: Option<String>,
    pub added_at: i64,
}

impl From<CartEntry> for GqlCartEntry {
    fn from(e: CartEntry) -> Self {
        Self {
            id: e.id,
            quantity: e.quantity,
            summary: e.summary,
            preview_image: e.preview_image,
            added_at: e.added_at,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlCartItem {
    pub id: String,
    pub certificate_slug: String,
    pub title: String,
    pub quantity: u32,
    pub unit_price_cents: u64,
    pub total_cents: u64,
    pub summary: Option<String>,
    pub preview_image: Option<String>,
    pub entries: Vec<GqlCartEntry>,
}

impl From<PricedCartItem> for GqlCartItem {
    fn from(p: PricedCartItem) -> Self {
        Self {
            id: p.item.id,
            certificate_slug: p.item.certificate_slug,
            title: p.item.title,
            quantity: p.item.quantity,
            unit_price_cents: p.unit_price_cents,
            total_cents: p.total_cents,
            summary: p.item.summary,
            preview_image: p.item.preview_image,
            entries: p.item.entries.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlUpsell {
    pub missing: u32,
    pub new_unit_price_cents: u64,
    pub new_total_cents: u64,
}

impl From<Upsell> for GqlUpsell {
    fn from(u: Upsell) -> Self {
        Self {
            missing: u.missing,
            new_unit_price_cents: u.new_unit_price_cents,
            new_total_cents: u.new_total_cents,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlCartPricing {
    pub unit_price_cents: u64,
    pub total_cents: u64,
    pub total_quantity: u32,
    pub next_threshold: Option<u32>,
    pub next_unit_price_cents: Option<u64>,
    pub missing_for_next: Option<u32>,
    pub upsell: Option<GqlUpsell>,
}

impl From<CartPricing> for GqlCartPricing {
    fn from(p: CartPricing) -> Self {
        Self {
            unit_price_cents: p.unit_price_cents,
            total_cents: p.total_cents,
            total_quantity: p.total_quantity,
            next_threshold: p.next_threshold,
            next_unit_price_cents: p.next_unit_price_cents,
            missing_for_next: p.missing_for_next,
            upsell: p.upsell.map(Into::into),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlCart {
    pub items: Vec<GqlCartItem>,
    pub pricing: GqlCartPricing,
}

impl From<ComputedCart> for GqlCart {
    fn from(c: ComputedCart) -> Self {
        Self {
            items: c.items.into_iter().map(Into::into).collect(),
            pricing: c.pricing.into(),
        }
    }
}

/// Identity attached to the GraphQL request by the `/gql` route.
pub fn current_user<'a>(context: &'a Context<'_>) -> Option<&'a UserId> {
    context
        .data_opt::<CurrentUser>()
        .and_then(CurrentUser::user)
}

pub fn cart_error(error: CartError) -> async_graphql::Error {
    let code = match &error {
        CartError::Unauthenticated => "UNAUTHENTICATED",
        CartError::InvalidInput(_) => "BAD_USER_INPUT",
        CartError::Storage(_) => "INTERNAL",
    };
    async_graphql::Error::new(error.to_string()).extend_with(|_, e| e.set("code", code.to_string()))
}
