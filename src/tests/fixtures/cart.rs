// Canonical cart values for tests.

use crate::modules::certificate_cart::core::cart::{CartEntry, RawCartItem};
use crate::shared::core::primitives::{Quantity, UserId};

pub const USER_ID: &str = "user-fixed-0001";

pub fn make_user() -> UserId {
    UserId::resolve(Some(USER_ID)).expect("fixture user id is not blank")
}

pub fn make_entry(id: &str, quantity: Quantity, summary: Option<&str>) -> CartEntry {
    CartEntry {
        id: id.to_string(),
        quantity,
        summary: summary.map(str::to_string),
        preview_image: None,
        added_at: 1_700_000_000_000,
    }
}

/// A line holding a single entry that carries the whole quantity.
pub fn make_line(certificate_slug: &str, quantity: Quantity) -> RawCartItem {
    RawCartItem {
        id: format!("line-{certificate_slug}"),
        certificate_slug: certificate_slug.to_string(),
        title: format!("Certificado {certificate_slug}"),
        quantity,
        summary: None,
        preview_image: None,
        entries: if quantity > 0 {
            vec![make_entry(&format!("entry-{certificate_slug}"), quantity, None)]
        } else {
            Vec::new()
        },
    }
}
