//! Directional compaction.
//!
//! A sweep walks the grid in order and slides each movable item one cell
//! at a time toward the target edge until the next step would collide.
//! Moves are visible to later items in the same sweep. For a combination
//! mode the primary axis is swept until it stops changing anything, then
//! the secondary axis; any change on the secondary axis restarts the
//! primary one. The pass ends when both axes are quiescent.
//!
//! Each productive sweep strictly reduces the summed distance of all
//! items from their target edges, and at most one idle sweep precedes
//! each productive one, so the pass terminates. A sweep cap of
//! `2 × items × (max_cols + max_rows) + 2` guards against inputs where
//! that reasoning does not hold (items already outside the grid).

use bento_core::{Direction, GridConstraints, GridItem};
use bento_space::check_collision;
use tracing::{debug, trace, warn};

use crate::metrics::CompactMetrics;

/// Compact `grid` in the direction(s) named by `constraints.compact_type`.
///
/// Returns a new grid in the same order with the same ids and sizes;
/// only positions change. With [`CompactType::None`](bento_core::CompactType::None)
/// the result equals the input.
pub fn compact(grid: &[GridItem], constraints: &GridConstraints) -> Vec<GridItem> {
    compact_with_metrics(grid, constraints).0
}

/// [`compact`], also returning counters describing the work done.
pub fn compact_with_metrics(
    grid: &[GridItem],
    constraints: &GridConstraints,
) -> (Vec<GridItem>, CompactMetrics) {
    let mut metrics = CompactMetrics::default();
    let mut working = grid.to_vec();
    let Some((primary, secondary)) = constraints.compact_type.sweeps() else {
        return (working, metrics);
    };
    let cap = sweep_cap(grid.len(), constraints);

    'settle: loop {
        for dir in std::iter::once(primary).chain(secondary) {
            if metrics.sweeps >= cap {
                warn!(
                    mode = ?constraints.compact_type,
                    sweeps = metrics.sweeps,
                    "compaction did not settle; returning partial result"
                );
                metrics.hit_iteration_cap = true;
                break 'settle;
            }
            if sweep(&mut working, dir, constraints, &mut metrics) {
                continue 'settle;
            }
        }
        break;
    }

    debug!(
        mode = ?constraints.compact_type,
        items = grid.len(),
        sweeps = metrics.sweeps,
        relocations = metrics.relocations,
        "compaction settled"
    );
    (working, metrics)
}

/// Where `item` would settle under the current compaction mode.
///
/// The grid is not modified. The primary axis is applied once, then the
/// secondary axis from that result. `item`'s own entry in `grid` (same
/// id) is ignored, so the second axis already sees the first axis's
/// move. Unlike [`compact`], the item's `compact_enabled` flag is not
/// consulted.
pub fn check_compact_item(item: &GridItem, grid: &[GridItem], constraints: &GridConstraints) -> GridItem {
    let Some((primary, secondary)) = constraints.compact_type.sweeps() else {
        return *item;
    };
    let (moved, _) = move_till_collision(item, grid, primary, constraints);
    match secondary {
        Some(dir) => move_till_collision(&moved, grid, dir, constraints).0,
        None => moved,
    }
}

/// One pass over `working` in `dir`. Returns `true` if anything moved.
fn sweep(
    working: &mut [GridItem],
    dir: Direction,
    constraints: &GridConstraints,
    metrics: &mut CompactMetrics,
) -> bool {
    metrics.sweeps += 1;
    let mut changed = false;
    for idx in 0..working.len() {
        let item = working[idx];
        if !item.compact_enabled {
            continue;
        }
        let (moved, steps) = move_till_collision(&item, working, dir, constraints);
        if steps > 0 {
            trace!(id = %item.id, %dir, steps, x = moved.x, y = moved.y, "item compacted");
            working[idx] = moved;
            metrics.relocations += 1;
            metrics.steps += u64::from(steps);
            changed = true;
        }
    }
    changed
}

/// Slide `item` in `dir` until the next step would collide.
///
/// Returns the final position and the number of steps taken.
fn move_till_collision(
    item: &GridItem,
    grid: &[GridItem],
    dir: Direction,
    constraints: &GridConstraints,
) -> (GridItem, u32) {
    let mut current = *item;
    let mut steps = 0;
    loop {
        let next = dir.step(&current);
        if check_collision(&next, grid, constraints).is_collision() {
            return (current, steps);
        }
        current = next;
        steps += 1;
    }
}

fn sweep_cap(items: usize, constraints: &GridConstraints) -> u64 {
    let diameter = i64::from(constraints.max_cols) + i64::from(constraints.max_rows);
    (items as u64)
        .saturating_mul(diameter.max(0) as u64)
        .saturating_mul(2)
        .saturating_add(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bento_core::{Cell, CompactType, ItemId};

    fn item(id: u64, x: i32, y: i32, cols: i32, rows: i32) -> GridItem {
        GridItem::new(ItemId(id), x, y, cols, rows)
    }

    fn cells(grid: &[GridItem]) -> Vec<(i32, i32)> {
        grid.iter().map(|it| (it.x, it.y)).collect()
    }

    fn mode(compact_type: CompactType) -> GridConstraints {
        GridConstraints::default()
            .with_capacity(10, 10)
            .with_compact_type(compact_type)
    }

    // ── Single axis ─────────────────────────────────────────────

    #[test]
    fn none_leaves_grid_untouched() {
        let grid = vec![item(0, 3, 3, 1, 1), item(1, 5, 7, 2, 2)];
        let (out, m) = compact_with_metrics(&grid, &mode(CompactType::None));
        assert_eq!(out, grid);
        assert_eq!(m, CompactMetrics::default());
    }

    #[test]
    fn up_stacks_on_blockers() {
        let grid = vec![item(0, 0, 4, 2, 1), item(1, 1, 8, 1, 1), item(2, 5, 6, 1, 1)];
        let out = compact(&grid, &mode(CompactType::Up));
        assert_eq!(cells(&out), vec![(0, 0), (1, 1), (5, 0)]);
    }

    #[test]
    fn blocked_item_catches_up_on_next_sweep() {
        // The lower item moves first in grid order and stops under the
        // upper one; it reaches row 1 only after the upper item has moved.
        let grid = vec![item(0, 0, 5, 1, 1), item(1, 0, 2, 1, 1)];
        let (out, m) = compact_with_metrics(&grid, &mode(CompactType::Up));
        assert_eq!(cells(&out), vec![(0, 1), (0, 0)]);
        assert_eq!(m.sweeps, 3);
    }

    #[test]
    fn right_packs_against_capacity() {
        let grid = vec![item(0, 0, 0, 2, 1), item(1, 3, 0, 1, 1)];
        let out = compact(&grid, &mode(CompactType::Right));
        assert_eq!(cells(&out), vec![(7, 0), (9, 0)]);
    }

    #[test]
    fn pinned_items_stay_put_and_block() {
        let grid = vec![
            item(0, 0, 3, 1, 1).with_compact_enabled(false),
            item(1, 0, 6, 1, 1),
        ];
        let (out, m) = compact_with_metrics(&grid, &mode(CompactType::Up));
        assert_eq!(cells(&out), vec![(0, 3), (0, 4)]);
        assert_eq!(m.relocations, 1);
        assert_eq!(m.steps, 2);
    }

    // ── Combination modes ───────────────────────────────────────

    #[test]
    fn secondary_change_restarts_primary() {
        // A pinned blocker sits above the free item; only after moving
        // left can it move up.
        let grid = vec![
            item(0, 2, 0, 1, 1).with_compact_enabled(false),
            item(1, 2, 1, 1, 1),
        ];
        let (out, m) = compact_with_metrics(&grid, &mode(CompactType::UpAndLeft));
        assert_eq!(cells(&out), vec![(2, 0), (0, 0)]);
        // Up (idle), Left, Up, then Up and Left idle.
        assert_eq!(m.sweeps, 5);
        assert_eq!(m.relocations, 2);
    }

    #[test]
    fn compaction_is_idempotent() {
        let grid = vec![item(0, 2, 4, 2, 2), item(1, 6, 1, 1, 3), item(2, 1, 8, 3, 1)];
        for compact_type in CompactType::ALL {
            let c = mode(compact_type);
            let once = compact(&grid, &c);
            let (twice, m) = compact_with_metrics(&once, &c);
            assert_eq!(once, twice, "{compact_type:?}");
            assert!(!m.changed(), "{compact_type:?}");
        }
    }

    // ── Preview ─────────────────────────────────────────────────

    #[test]
    fn preview_applies_both_axes_once() {
        let grid = vec![item(0, 0, 0, 2, 1), item(1, 5, 5, 1, 1)];
        let probe = grid[1];
        let c = mode(CompactType::UpAndLeft);
        assert_eq!(check_compact_item(&probe, &grid, &c).cell(), Cell::new(2, 0));
        let c = mode(CompactType::LeftAndUp);
        assert_eq!(check_compact_item(&probe, &grid, &c).cell(), Cell::new(0, 1));
        assert_eq!(grid[1].cell(), Cell::new(5, 5));
    }

    #[test]
    fn preview_ignores_pin_and_handles_right_modes() {
        let grid = vec![item(0, 2, 2, 1, 1).with_compact_enabled(false)];
        let c = mode(CompactType::RightAndUp);
        assert_eq!(check_compact_item(&grid[0], &grid, &c).cell(), Cell::new(9, 0));
        let c = mode(CompactType::None);
        assert_eq!(check_compact_item(&grid[0], &grid, &c).cell(), Cell::new(2, 2));
    }

    // ── Termination guard ───────────────────────────────────────

    #[test]
    fn sweep_cap_scales_with_items_and_capacity() {
        let c = mode(CompactType::Up);
        assert_eq!(sweep_cap(0, &c), 2);
        assert_eq!(sweep_cap(3, &c), 122);
    }

    #[test]
    fn settled_grid_takes_one_sweep_per_axis() {
        let grid = vec![item(0, 0, 0, 1, 1)];
        let (_, m) = compact_with_metrics(&grid, &mode(CompactType::UpAndLeft));
        assert_eq!(m.sweeps, 2);
        assert!(!m.hit_iteration_cap);
    }
}
