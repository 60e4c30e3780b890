//! Customization seams injected by the host application.

use crate::item::GridItem;

/// External predicate deciding whether an item's placement is acceptable
/// at all, independent of overlap and bounds.
///
/// Evaluated first by collision detection; a `false` result is reported
/// as a boundary collision. Any `Fn(&GridItem) -> bool + Send + Sync`
/// closure implements this trait.
///
/// # Examples
///
/// ```
/// use bento_core::{GridItem, ItemId, ItemValidator};
///
/// // Keep the first row free for a toolbar.
/// let below_toolbar = |item: &GridItem| item.y >= 1;
/// assert!(!below_toolbar.validate(&GridItem::new(ItemId(0), 0, 0, 1, 1)));
/// assert!(below_toolbar.validate(&GridItem::new(ItemId(0), 0, 1, 1, 1)));
/// ```
pub trait ItemValidator: Send + Sync {
    /// Return `true` if `item` may occupy its current position and size.
    fn validate(&self, item: &GridItem) -> bool;
}

impl<F> ItemValidator for F
where
    F: Fn(&GridItem) -> bool + Send + Sync,
{
    fn validate(&self, item: &GridItem) -> bool {
        self(item)
    }
}
