// Pure decision for overriding a line's quantity.
//
// The entries are reconciled so their quantities still sum to the line's:
// lowering drops the most recent entries first, raising appends one unlabeled
// entry carrying the difference. An unknown item id leaves the cart unchanged.

use crate::modules::certificate_cart::core::cart::{CartEntry, CartState, EntryStamp, RawCartItem};
use crate::modules::certificate_cart::core::decision::DecideError;
use crate::modules::certificate_cart::core::rollup::RollupPolicy;
use crate::modules::certificate_cart::use_cases::update_cart_item_quantity::command::UpdateCartItemQuantity;
use crate::shared::core::primitives::{Quantity, clamp_quantity};

pub fn decide_update_quantity(
    mut state: CartState,
    command: &UpdateCartItemQuantity,
    stamp: &EntryStamp,
    policy: RollupPolicy,
) -> Result<CartState, DecideError> {
    let item_id = command.item_id.trim();
    if item_id.is_empty() {
        return Err(DecideError::MissingItemId);
    }

    let quantity = clamp_quantity(command.quantity);
    if quantity == 0 {
        state.items.retain(|item| item.id != item_id);
        return Ok(state);
    }

    if let Some(line) = state.line_mut(item_id) {
        line.quantity = quantity;
        reconcile_entries(line, stamp);
        policy.recompute(line);
    }
    state.ensure_within_limit()
}

fn reconcile_entries(line: &mut RawCartItem, stamp: &EntryStamp) {
    let current = line.entries_quantity();
    let target: Quantity = line.quantity;

    if target < current {
        let mut remaining = target;
        let mut kept = Vec::with_capacity(line.entries.len());
        for mut entry in line.entries.drain(..) {
            if remaining == 0 {
                break;
            }
            entry.quantity = entry.quantity.min(remaining);
            remaining -= entry.quantity;
            kept.push(entry);
        }
        line.entries = kept;
    } else if target > current {
        line.entries.push(CartEntry {
            id: stamp.entry_id.clone(),
            quantity: target - current,
            summary: None,
            preview_image: None,
            added_at: stamp.added_at,
        });
    }
}
