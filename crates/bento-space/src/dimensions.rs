//! Row/column extents of a set of placed items.

use std::fmt;

use bento_core::{Cell, GridItem};
use tracing::debug;

/// Number of columns and rows a grid currently spans.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridDimensions {
    /// Column count.
    pub columns: i32,
    /// Row count.
    pub rows: i32,
}

impl fmt::Display for GridDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}

/// Extents of `grid`, never smaller than `min_cols × min_rows`.
///
/// `columns = max(min_cols, max(x + cols))` and likewise for rows.
pub fn grid_dimensions(grid: &[GridItem], min_cols: i32, min_rows: i32) -> GridDimensions {
    grid.iter().fold(
        GridDimensions {
            columns: min_cols,
            rows: min_rows,
        },
        |acc, item| GridDimensions {
            columns: acc.columns.max(item.right()),
            rows: acc.rows.max(item.bottom()),
        },
    )
}

/// The farthest cell covered by any item, row-major, starting from the origin.
///
/// Used to begin an auto-position scan just past the occupied area.
pub fn occupied_extent(grid: &[GridItem]) -> Cell {
    grid.iter()
        .map(GridItem::far_corner)
        .fold(Cell::ORIGIN, Cell::max)
}

/// Remembers the last computed extents and reports only real changes.
#[derive(Clone, Debug)]
pub struct DimensionTracker {
    min_cols: i32,
    min_rows: i32,
    current: GridDimensions,
}

impl DimensionTracker {
    /// Start tracking an empty grid with the given minimum extents.
    pub fn new(min_cols: i32, min_rows: i32) -> Self {
        Self {
            min_cols,
            min_rows,
            current: GridDimensions {
                columns: min_cols,
                rows: min_rows,
            },
        }
    }

    /// Extents as of the last [`update`](Self::update).
    pub fn current(&self) -> GridDimensions {
        self.current
    }

    /// Recompute from `placed` items.
    ///
    /// Returns the new extents if either the row or column count changed,
    /// `None` otherwise.
    pub fn update(&mut self, placed: &[GridItem]) -> Option<GridDimensions> {
        let next = grid_dimensions(placed, self.min_cols, self.min_rows);
        if next == self.current {
            return None;
        }
        debug!(from = %self.current, to = %next, "grid dimensions changed");
        self.current = next;
        Some(next)
    }
}
