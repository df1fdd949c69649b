// Roll-up of a line's display fields (`summary`, `preview_image`) from its
// entries.

use crate::modules::certificate_cart::core::cart::{CartEntry, RawCartItem};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RollupPolicy {
    /// The line shows the most recently added label and preview. An entry
    /// without a label leaves the previous one in place.
    #[default]
    LatestWins,
}

impl RollupPolicy {
    /// Folds a freshly appended entry into the line's display fields.
    pub fn merge(self, item: &mut RawCartItem, entry: &CartEntry) {
        match self {
            RollupPolicy::LatestWins => {
                if let Some(summary) = &entry.summary {
                    item.summary = Some(summary.clone());
                }
                if let Some(preview) = &entry.preview_image {
                    item.preview_image = Some(preview.clone());
                }
            }
        }
    }

    /// Rebuilds the display fields from the entries still on the line.
    pub fn recompute(self, item: &mut RawCartItem) {
        match self {
            RollupPolicy::LatestWins => {
                item.summary = item
                    .entries
                    .iter()
                    .rev()
                    .find_map(|entry| entry.summary.clone());
                item.preview_image = item
                    .entries
                    .iter()
                    .rev()
                    .find_map(|entry| entry.preview_image.clone());
            }
        }
    }
}
