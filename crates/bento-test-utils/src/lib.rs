//! Fixtures and compliance checks for Bento development.
//!
//! - [`fixtures`]: hand-written grids with known compaction outcomes.
//! - [`random`]: seeded, legal random layouts for property tests and benches.
//! - [`compliance`]: assertions every engine output must satisfy.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod compliance;
pub mod fixtures;
pub mod random;

use bento_core::{GridItem, ItemId};

/// Shorthand for a default-limits, compactable item.
pub fn item(id: u64, x: i32, y: i32, cols: i32, rows: i32) -> GridItem {
    GridItem::new(ItemId(id), x, y, cols, rows)
}

/// `(x, y)` of every item, in grid order.
pub fn positions(grid: &[GridItem]) -> Vec<(i32, i32)> {
    grid.iter().map(|it| (it.x, it.y)).collect()
}
