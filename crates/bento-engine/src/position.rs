//! Auto-positioning: finding the first free slot for an item.
//!
//! The search scans the grid's current extents row-major. When every
//! slot is taken, the grid is grown by one item-width to the right or one
//! item-height downward, whichever keeps the grid closer to square,
//! subject to the capacity ceiling.

use bento_core::{Cell, GridItem, ItemId, ItemSpec};
use bento_space::{check_collision, grid_dimensions, occupied_extent};
use tracing::{debug, trace};

use crate::config::LayoutConfig;

/// Move `item` to the first legal slot at or after `starting_from`.
///
/// Rows are scanned from `starting_from.y` down to the current row
/// count; within each row, columns from `starting_from.x` to the current
/// column count. The first position where
/// [`check_collision`] reports no collision wins.
///
/// If no slot inside the current extents is legal, the grid grows:
///
/// - to the right, placing the item at `(columns, 0)`, when rows outnumber
///   columns (or rows cannot grow) and `columns + item.cols <= max_cols`;
/// - otherwise downward, placing it at `(0, rows)`, when
///   `rows + item.rows <= max_rows`.
///
/// The grown slot is taken without a further collision check. Returns
/// `false` and leaves `item` untouched when neither direction has room.
pub fn next_possible_position(
    item: &mut GridItem,
    grid: &[GridItem],
    config: &LayoutConfig,
    starting_from: Cell,
) -> bool {
    let constraints = &config.constraints;
    let dims = grid_dimensions(grid, config.min_cols, config.min_rows);

    for y in starting_from.y..dims.rows {
        for x in starting_from.x..dims.columns {
            let candidate = item.at(Cell::new(x, y));
            if !check_collision(&candidate, grid, constraints).is_collision() {
                trace!(id = %item.id, x, y, "free slot found");
                *item = candidate;
                return true;
            }
        }
    }

    let can_add_rows = constraints.max_rows >= dims.rows + item.rows;
    let can_add_cols = constraints.max_cols >= dims.columns + item.cols;
    let add_to_rows = dims.rows <= dims.columns && can_add_rows;

    let grown = if !add_to_rows && can_add_cols {
        Cell::new(dims.columns, 0)
    } else if can_add_rows {
        Cell::new(0, dims.rows)
    } else {
        debug!(id = %item.id, extents = %dims, "no room to grow grid");
        return false;
    };
    debug!(id = %item.id, x = grown.x, y = grown.y, extents = %dims, "grid grown for item");
    *item = item.at(grown);
    true
}

/// The first free slot for `item`, scanning from the origin.
///
/// Works on a copy; the input is not modified. When no slot exists the
/// copy is returned at its original position.
pub fn first_possible_position(item: &GridItem, grid: &[GridItem], config: &LayoutConfig) -> GridItem {
    let mut probe = *item;
    next_possible_position(&mut probe, grid, config, Cell::ORIGIN);
    probe
}

/// The first free slot for `item` at or after the farthest occupied cell.
///
/// Like [`first_possible_position`], but the scan begins at
/// [`occupied_extent`] so the item lands after everything already placed.
pub fn last_possible_position(item: &GridItem, grid: &[GridItem], config: &LayoutConfig) -> GridItem {
    let mut probe = *item;
    next_possible_position(&mut probe, grid, config, occupied_extent(grid));
    probe
}

/// Resolve `spec`'s size defaults and auto-position it from the origin.
///
/// The requested position in `spec`, if any, is ignored. Returns `None`
/// if the grid has no room for the item.
pub fn auto_place(spec: &ItemSpec, id: ItemId, grid: &[GridItem], config: &LayoutConfig) -> Option<GridItem> {
    let mut item = config.resolve(spec, id);
    next_possible_position(&mut item, grid, config, Cell::ORIGIN).then_some(item)
}
