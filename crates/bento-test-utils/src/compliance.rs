//! Layout compliance assertions.
//!
//! Every grid produced by the engine (compaction output, auto-positioned
//! additions) must pass these. Reused by the engine's unit tests,
//! integration tests, and property tests.

use std::collections::HashMap;

use bento_core::{GridConstraints, GridItem, ItemId};
use bento_space::{check_collision_two_items, check_grid_collision};

/// Assert that no two items overlap.
pub fn assert_no_overlaps(grid: &[GridItem]) {
    for (i, a) in grid.iter().enumerate() {
        for b in &grid[i + 1..] {
            assert!(
                !check_collision_two_items(a, b),
                "items {} ({},{} {}x{}) and {} ({},{} {}x{}) overlap",
                a.id, a.x, a.y, a.cols, a.rows, b.id, b.x, b.y, b.cols, b.rows
            );
        }
    }
}

/// Assert that every item lies inside the grid and within its limits.
pub fn assert_in_bounds(grid: &[GridItem], constraints: &GridConstraints) {
    for it in grid {
        assert!(
            !check_grid_collision(it, constraints),
            "item {} at ({},{}) size {}x{} violates bounds or limits",
            it.id, it.x, it.y, it.cols, it.rows
        );
    }
}

/// Assert that `after` holds the same ids, in the same order, with the
/// same sizes and compaction flags as `before`. Positions may differ.
pub fn assert_same_items(before: &[GridItem], after: &[GridItem]) {
    assert_eq!(before.len(), after.len(), "item count changed");
    for (b, a) in before.iter().zip(after) {
        assert_eq!(b.id, a.id, "item order changed");
        assert_eq!((b.cols, b.rows), (a.cols, a.rows), "item {} resized", b.id);
        assert_eq!(b.compact_enabled, a.compact_enabled, "item {} flag changed", b.id);
    }
}

/// Assert that items with `compact_enabled == false` did not move.
pub fn assert_pinned_unmoved(before: &[GridItem], after: &[GridItem]) {
    let moved: HashMap<ItemId, (i32, i32)> = after.iter().map(|it| (it.id, (it.x, it.y))).collect();
    for b in before.iter().filter(|it| !it.compact_enabled) {
        assert_eq!(moved.get(&b.id), Some(&(b.x, b.y)), "pinned item {} moved", b.id);
    }
}

/// All of the above for a compaction result.
pub fn assert_legal_compaction(before: &[GridItem], after: &[GridItem], constraints: &GridConstraints) {
    assert_same_items(before, after);
    assert_pinned_unmoved(before, after);
    assert_no_overlaps(after);
    assert_in_bounds(after, constraints);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item;

    #[test]
    #[should_panic(expected = "overlap")]
    fn detects_overlap() {
        assert_no_overlaps(&[item(0, 0, 0, 2, 2), item(1, 1, 1, 1, 1)]);
    }

    #[test]
    #[should_panic(expected = "violates bounds")]
    fn detects_out_of_bounds() {
        let c = GridConstraints::default().with_capacity(4, 4);
        assert_in_bounds(&[item(0, 3, 0, 2, 1)], &c);
    }

    #[test]
    #[should_panic(expected = "pinned item")]
    fn detects_moved_pin() {
        let before = [item(0, 2, 2, 1, 1).with_compact_enabled(false)];
        let after = [item(0, 2, 0, 1, 1).with_compact_enabled(false)];
        assert_pinned_unmoved(&before, &after);
    }

    #[test]
    fn accepts_moved_layout() {
        let c = GridConstraints::default();
        let before = [item(0, 0, 3, 1, 1), item(1, 4, 4, 2, 1)];
        let after = [item(0, 0, 0, 1, 1), item(1, 4, 0, 2, 1)];
        assert_legal_compaction(&before, &after, &c);
    }
}
