// Pure decision for adding certificates to a cart.
//
// - A cart holds at most one line per certificate slug. Adding an existing
//   slug appends an entry to that line and grows its quantity.
// - The line's display fields follow the roll-up policy.
// - The resulting cart may not exceed MAX_CART_QUANTITY certificates.
// - Never performs input or output.

use crate::modules::certificate_cart::core::cart::{CartEntry, CartState, EntryStamp, RawCartItem};
use crate::modules::certificate_cart::core::decision::DecideError;
use crate::modules::certificate_cart::core::rollup::RollupPolicy;
use crate::modules::certificate_cart::use_cases::add_cart_item::command::AddCartItem;
use crate::shared::core::primitives::{clamp_quantity_at_least_one, non_blank};

pub fn decide_add_item(
    mut state: CartState,
    command: &AddCartItem,
    line_id: &str,
    stamp: &EntryStamp,
    policy: RollupPolicy,
) -> Result<CartState, DecideError> {
    let slug = command.certificate_slug.trim();
    let title = command.title.trim();
    if slug.is_empty() || title.is_empty() {
        return Err(DecideError::MissingCertificate);
    }

    let quantity = clamp_quantity_at_least_one(command.quantity);
    let entry = CartEntry {
        id: stamp.entry_id.clone(),
        quantity,
        summary: non_blank(command.summary.clone()),
        preview_image: command.preview_image.clone().filter(|p| !p.is_empty()),
        added_at: stamp.added_at,
    };

    match state.line_for_slug_mut(slug) {
        Some(line) => {
            line.quantity = line.quantity.saturating_add(quantity);
            policy.merge(line, &entry);
            line.entries.push(entry);
        }
        None => state.items.push(RawCartItem {
            id: line_id.to_string(),
            certificate_slug: slug.to_string(),
            title: title.to_string(),
            quantity,
            summary: entry.summary.clone(),
            preview_image: entry.preview_image.clone(),
            entries: vec![entry],
        }),
    }

    state.ensure_within_limit()
}
