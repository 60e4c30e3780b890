//! Collision detection between grid items, grid bounds, and limits.
//!
//! An item's placement is illegal if any of the following holds, checked
//! in this order:
//!
//! 1. the external [`ItemValidator`](bento_core::ItemValidator) rejects it,
//! 2. it leaves the grid or violates a size/area limit
//!    ([`check_grid_collision`]),
//! 3. it overlaps another item ([`find_item_with_item`]).
//!
//! Overlap is half-open: items whose edges touch do not collide.

use bento_core::{GridConstraints, GridItem, ItemId};
use smallvec::SmallVec;
use tracing::trace;

/// Outcome of [`check_collision`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collision {
    /// The placement is legal.
    None,
    /// Rejected by the grid itself: bounds, size/area limits, or the
    /// external validator.
    Boundary,
    /// Overlaps the item with this id.
    Item(ItemId),
}

impl Collision {
    /// `true` for anything other than [`Collision::None`].
    pub fn is_collision(self) -> bool {
        !matches!(self, Self::None)
    }

    /// The overlapped item, if this is an item collision.
    pub fn item(self) -> Option<ItemId> {
        match self {
            Self::Item(id) => Some(id),
            _ => None,
        }
    }
}

/// Whether two rectangles overlap (half-open intervals on both axes).
///
/// Symmetric in its arguments. Ids are not consulted.
///
/// # Examples
///
/// ```
/// use bento_core::{GridItem, ItemId};
/// use bento_space::check_collision_two_items;
///
/// let a = GridItem::new(ItemId(0), 0, 0, 2, 1);
/// let touching = GridItem::new(ItemId(1), 2, 0, 2, 1);
/// let overlapping = GridItem::new(ItemId(2), 1, 0, 2, 1);
/// assert!(!check_collision_two_items(&a, &touching));
/// assert!(check_collision_two_items(&a, &overlapping));
/// ```
pub fn check_collision_two_items(a: &GridItem, b: &GridItem) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

/// Whether `item` violates the grid's bounds or its size/area limits.
///
/// Returns `true` (a collision) if the item starts at a negative cell,
/// extends past `max_cols`/`max_rows`, or its width, height, or area
/// falls outside the limits resolved by
/// [`GridConstraints::limits_for`].
pub fn check_grid_collision(item: &GridItem, constraints: &GridConstraints) -> bool {
    let right = i64::from(item.x) + i64::from(item.cols);
    let bottom = i64::from(item.y) + i64::from(item.rows);
    let in_grid = item.x >= 0
        && item.y >= 0
        && right <= i64::from(constraints.max_cols)
        && bottom <= i64::from(constraints.max_rows);
    !(in_grid && constraints.limits_for(item).admits(item))
}

/// The first item in `grid` that overlaps `item`, scanning from the end.
///
/// Entries sharing `item`'s id are skipped, so an item can be checked
/// against a grid that still contains its own previous position.
pub fn find_item_with_item(item: &GridItem, grid: &[GridItem]) -> Option<ItemId> {
    grid.iter()
        .rev()
        .find(|other| other.id != item.id && check_collision_two_items(other, item))
        .map(|other| other.id)
}

/// Every item in `grid` that overlaps `item`, in reverse grid order.
pub fn find_items_with_item(item: &GridItem, grid: &[GridItem]) -> SmallVec<[ItemId; 4]> {
    grid.iter()
        .rev()
        .filter(|other| other.id != item.id && check_collision_two_items(other, item))
        .map(|other| other.id)
        .collect()
}

/// Full legality check for `item` placed in `grid`.
pub fn check_collision(item: &GridItem, grid: &[GridItem], constraints: &GridConstraints) -> Collision {
    if let Some(validator) = &constraints.item_validator {
        if !validator.validate(item) {
            trace!(id = %item.id, x = item.x, y = item.y, "rejected by validator");
            return Collision::Boundary;
        }
    }
    if check_grid_collision(item, constraints) {
        return Collision::Boundary;
    }
    match find_item_with_item(item, grid) {
        Some(id) => Collision::Item(id),
        None => Collision::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bento_core::ItemLimits;
    use proptest::prelude::*;

    fn item(id: u64, x: i32, y: i32, cols: i32, rows: i32) -> GridItem {
        GridItem::new(ItemId(id), x, y, cols, rows)
    }

    // ── Pairwise overlap ────────────────────────────────────────

    #[test]
    fn touching_edges_do_not_collide() {
        let a = item(0, 0, 0, 2, 1);
        let b = item(1, 2, 0, 2, 1);
        assert!(!check_collision_two_items(&a, &b));
        let below = item(2, 0, 1, 2, 1);
        assert!(!check_collision_two_items(&a, &below));
    }

    #[test]
    fn overlapping_squares_collide() {
        let a = item(0, 0, 0, 2, 2);
        let b = item(1, 1, 1, 2, 2);
        assert!(check_collision_two_items(&a, &b));
    }

    #[test]
    fn large_items_overlap_partially() {
        let a = item(0, 1, 1, 6, 5);
        let b = item(1, 5, 2, 7, 4);
        let c = item(2, 7, 4, 10, 10);
        assert!(check_collision_two_items(&a, &b));
        assert!(check_collision_two_items(&b, &c));
        assert!(!check_collision_two_items(&a, &c));
    }

    // ── Grid bounds and limits ──────────────────────────────────

    #[test]
    fn right_edge_respects_max_cols() {
        let c6 = GridConstraints::default().with_capacity(6, 10);
        let c7 = GridConstraints::default().with_capacity(7, 10);
        let it = item(0, 5, 0, 2, 1);
        assert!(check_grid_collision(&it, &c6));
        assert!(!check_grid_collision(&it, &c7));
    }

    #[test]
    fn negative_position_is_out_of_bounds() {
        let c = GridConstraints::default();
        assert!(check_grid_collision(&item(0, -1, 0, 1, 1), &c));
        assert!(check_grid_collision(&item(0, 0, -1, 1, 1), &c));
    }

    #[test]
    fn extreme_coordinates_are_out_of_bounds() {
        let c = GridConstraints::default();
        assert!(check_grid_collision(&item(0, i32::MAX, 0, 1, 1), &c));
        assert!(check_grid_collision(&item(0, 0, i32::MAX, 1, 1), &c));
        assert!(check_grid_collision(&item(0, i32::MAX - 1, i32::MAX - 1, 5, 5), &c));
        let unbounded = GridConstraints::default().with_capacity(i32::MAX, i32::MAX);
        assert!(check_grid_collision(&item(0, i32::MAX, 0, 2, 1), &unbounded));
    }

    #[test]
    fn wide_item_exceeds_narrow_grid() {
        let c = GridConstraints::default().with_capacity(3, 200);
        assert!(check_grid_collision(&item(0, 1, 1, 6, 5), &c));
    }

    #[test]
    fn size_limits_use_item_overrides() {
        let c = GridConstraints::default();
        let tall = item(0, 0, 0, 1, 51);
        assert!(check_grid_collision(&tall, &c));
        let allowed = tall.with_limits(ItemLimits {
            max_rows: Some(60),
            ..ItemLimits::default()
        });
        assert!(!check_grid_collision(&allowed, &c));
        let too_small = item(0, 0, 0, 1, 1).with_limits(ItemLimits {
            min_area: Some(2),
            ..ItemLimits::default()
        });
        assert!(check_grid_collision(&too_small, &c));
    }

    // ── Scans ───────────────────────────────────────────────────

    #[test]
    fn scan_skips_self_and_prefers_last_added() {
        let grid = vec![item(0, 0, 0, 2, 2), item(1, 1, 1, 2, 2), item(2, 4, 4, 1, 1)];
        let probe = item(1, 1, 0, 1, 1);
        assert_eq!(find_item_with_item(&probe, &grid), Some(ItemId(0)));

        let probe = item(9, 1, 1, 1, 1);
        assert_eq!(find_item_with_item(&probe, &grid), Some(ItemId(1)));
        let all = find_items_with_item(&probe, &grid);
        assert_eq!(all.as_slice(), &[ItemId(1), ItemId(0)]);
    }

    #[test]
    fn check_collision_short_circuits_in_order() {
        let grid = vec![item(0, 0, 0, 2, 2)];
        let c = GridConstraints::default().with_capacity(4, 4);
        assert_eq!(check_collision(&item(1, 1, 1, 1, 1), &grid, &c), Collision::Item(ItemId(0)));
        assert_eq!(check_collision(&item(1, 3, 3, 2, 1), &grid, &c), Collision::Boundary);
        assert_eq!(check_collision(&item(1, 2, 2, 1, 1), &grid, &c), Collision::None);

        let vetoing = c.clone().with_validator(|it: &GridItem| it.x != 2);
        assert_eq!(check_collision(&item(1, 2, 2, 1, 1), &grid, &vetoing), Collision::Boundary);
        assert_eq!(check_collision(&item(1, 3, 2, 1, 1), &grid, &vetoing), Collision::None);
    }

    #[test]
    fn collision_accessors() {
        assert!(!Collision::None.is_collision());
        assert!(Collision::Boundary.is_collision());
        assert_eq!(Collision::Item(ItemId(3)).item(), Some(ItemId(3)));
        assert_eq!(Collision::Boundary.item(), None);
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_item(id: u64) -> impl Strategy<Value = GridItem> {
        (-3i32..12, -3i32..12, 1i32..6, 1i32..6)
            .prop_map(move |(x, y, cols, rows)| GridItem::new(ItemId(id), x, y, cols, rows))
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(a in arb_item(0), b in arb_item(1)) {
            prop_assert_eq!(check_collision_two_items(&a, &b), check_collision_two_items(&b, &a));
        }

        #[test]
        fn overlap_matches_cell_intersection(a in arb_item(0), b in arb_item(1)) {
            let covers = |it: &GridItem, cx: i32, cy: i32| {
                cx >= it.x && cx < it.right() && cy >= it.y && cy < it.bottom()
            };
            let mut shared = false;
            for cy in -3..20 {
                for cx in -3..20 {
                    if covers(&a, cx, cy) && covers(&b, cx, cy) {
                        shared = true;
                    }
                }
            }
            prop_assert_eq!(check_collision_two_items(&a, &b), shared);
        }

        #[test]
        fn item_never_collides_with_itself(a in arb_item(0)) {
            prop_assert_eq!(find_item_with_item(&a, &[a]), None);
        }
    }
}
