use crate::modules::certificate_cart::core::decision::DecideError;
use crate::shared::core::primitives::Quantity;
use serde::{Deserialize, Serialize};

/// Most certificates a single cart may hold. Keeps every line and cart total,
/// in units and in cents, far from integer overflow.
pub const MAX_CART_QUANTITY: Quantity = 1_000_000;

/// One certificate request inside a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    pub id: String,
    pub quantity: Quantity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_image: Option<String>,
    pub added_at: i64,
}

/// Identity and time for an entry about to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryStamp {
    pub entry_id: String,
    pub added_at: i64,
}

/// One line per certificate template. `quantity` equals the sum of the
/// entries' quantities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCartItem {
    pub id: String,
    pub certificate_slug: String,
    pub title: String,
    pub quantity: Quantity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_image: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<CartEntry>,
}

impl RawCartItem {
    pub fn entries_quantity(&self) -> Quantity {
        self.entries
            .iter()
            .fold(0, |sum, entry| sum.saturating_add(entry.quantity))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartState {
    pub items: Vec<RawCartItem>,
}

impl CartState {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn total_quantity(&self) -> Quantity {
        total_quantity(&self.items)
    }

    pub fn line_for_slug_mut(&mut self, certificate_slug: &str) -> Option<&mut RawCartItem> {
        self.items
            .iter_mut()
            .find(|item| item.certificate_slug == certificate_slug)
    }

    pub fn line_mut(&mut self, item_id: &str) -> Option<&mut RawCartItem> {
        self.items.iter_mut().find(|item| item.id == item_id)
    }

    pub fn ensure_within_limit(self) -> Result<Self, DecideError> {
        if self.total_quantity() > MAX_CART_QUANTITY {
            return Err(DecideError::CartLimitExceeded {
                max: MAX_CART_QUANTITY,
            });
        }
        Ok(self)
    }
}

pub fn total_quantity(items: &[RawCartItem]) -> Quantity {
    items
        .iter()
        .fold(0, |sum, item| sum.saturating_add(item.quantity))
}
