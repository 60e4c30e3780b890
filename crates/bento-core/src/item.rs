//! Grid items, cells, and the unresolved [`ItemSpec`] used when adding items.

use std::cmp::Ordering;
use std::fmt;

use crate::id::ItemId;

/// A cell coordinate on the grid: `x` is the column, `y` is the row.
///
/// Cells order row-major: a cell is "farther" than another if its row is
/// greater, or the rows are equal and its column is greater.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl Cell {
    /// The top-left cell `(0, 0)`.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Construct a cell from a column and row.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Per-item overrides of the grid-wide size and area limits.
///
/// `None` means "use the value from
/// [`GridConstraints`](crate::GridConstraints)".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ItemLimits {
    /// Minimum width in columns.
    pub min_cols: Option<i32>,
    /// Maximum width in columns.
    pub max_cols: Option<i32>,
    /// Minimum height in rows.
    pub min_rows: Option<i32>,
    /// Maximum height in rows.
    pub max_rows: Option<i32>,
    /// Minimum area (`cols * rows`).
    pub min_area: Option<i32>,
    /// Maximum area (`cols * rows`).
    pub max_area: Option<i32>,
}

/// A placed rectangular occupant of the grid.
///
/// Positions and sizes are in cells. Coordinates are signed so that
/// tentative positions produced by callers (e.g. a drag past the left
/// edge) can be represented and then rejected by collision checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridItem {
    /// Stable identity used for self-exclusion in collision scans.
    pub id: ItemId,
    /// Leftmost column.
    pub x: i32,
    /// Topmost row.
    pub y: i32,
    /// Width in columns.
    pub cols: i32,
    /// Height in rows.
    pub rows: i32,
    /// Per-item size and area overrides.
    pub limits: ItemLimits,
    /// Whether compaction may move this item. Default: `true`.
    pub compact_enabled: bool,
}

impl GridItem {
    /// Create an item at `(x, y)` spanning `cols × rows` cells.
    pub fn new(id: ItemId, x: i32, y: i32, cols: i32, rows: i32) -> Self {
        Self {
            id,
            x,
            y,
            cols,
            rows,
            limits: ItemLimits::default(),
            compact_enabled: true,
        }
    }

    /// Replace the per-item limits.
    pub fn with_limits(mut self, limits: ItemLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Pin the item (or release it) for compaction.
    pub fn with_compact_enabled(mut self, enabled: bool) -> Self {
        self.compact_enabled = enabled;
        self
    }

    /// Top-left cell.
    pub fn cell(&self) -> Cell {
        Cell::new(self.x, self.y)
    }

    /// Copy of this item moved to `cell`, keeping its size.
    pub fn at(&self, cell: Cell) -> Self {
        Self {
            x: cell.x,
            y: cell.y,
            ..*self
        }
    }

    /// Area in cells, saturating at `i32::MAX`.
    pub fn area(&self) -> i32 {
        self.cols.saturating_mul(self.rows)
    }

    /// Exclusive right edge (`x + cols`), saturating at the `i32` range.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.cols)
    }

    /// Exclusive bottom edge (`y + rows`), saturating at the `i32` range.
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.rows)
    }

    /// The bottom-right cell the item covers.
    pub fn far_corner(&self) -> Cell {
        Cell::new(self.right() - 1, self.bottom() - 1)
    }
}

/// A size along one axis that may be left for the engine to pick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Span {
    /// Use the configured default item size.
    #[default]
    Auto,
    /// An explicit number of cells.
    Cells(i32),
}

impl Span {
    /// Resolve to a concrete cell count, substituting `default` for `Auto`.
    pub fn resolve(self, default: i32) -> i32 {
        match self {
            Self::Auto => default,
            Self::Cells(n) => n,
        }
    }
}

impl From<i32> for Span {
    fn from(n: i32) -> Self {
        Self::Cells(n)
    }
}

/// A requested position that may be left for the auto-positioner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Position {
    /// Find the first free slot.
    #[default]
    Auto,
    /// Place at this cell if it is legal.
    At(Cell),
}

/// An item as requested by a caller, before size defaults and
/// auto-positioning have been applied.
///
/// The default is an auto-positioned, default-sized item that
/// compaction may move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ItemSpec {
    /// Requested top-left cell, or `Auto`.
    pub position: Position,
    /// Requested width.
    pub cols: Span,
    /// Requested height.
    pub rows: Span,
    /// Per-item size and area overrides.
    pub limits: ItemLimits,
    /// Whether compaction may move this item. Default: `true`.
    pub compact_enabled: bool,
}

impl Default for ItemSpec {
    fn default() -> Self {
        Self {
            position: Position::Auto,
            cols: Span::Auto,
            rows: Span::Auto,
            limits: ItemLimits::default(),
            compact_enabled: true,
        }
    }
}

impl ItemSpec {
    /// A default-sized item with no requested position.
    pub fn auto() -> Self {
        Self::default()
    }

    /// A default-sized item requested at `(x, y)`.
    pub fn at(x: i32, y: i32) -> Self {
        Self {
            position: Position::At(Cell::new(x, y)),
            ..Self::auto()
        }
    }

    /// Set an explicit size.
    pub fn sized(mut self, cols: i32, rows: i32) -> Self {
        self.cols = Span::Cells(cols);
        self.rows = Span::Cells(rows);
        self
    }

    /// Replace the per-item limits.
    pub fn with_limits(mut self, limits: ItemLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Pin the item (or release it) for compaction.
    pub fn with_compact_enabled(mut self, enabled: bool) -> Self {
        self.compact_enabled = enabled;
        self
    }

    /// Build a concrete item, filling `Auto` spans with the given defaults.
    ///
    /// An `Auto` position resolves to `(0, 0)`; callers are expected to
    /// run the auto-positioner on the result.
    pub fn resolve(&self, id: ItemId, default_cols: i32, default_rows: i32) -> GridItem {
        let cell = match self.position {
            Position::Auto => Cell::ORIGIN,
            Position::At(cell) => cell,
        };
        GridItem {
            id,
            x: cell.x,
            y: cell.y,
            cols: self.cols.resolve(default_cols),
            rows: self.rows.resolve(default_rows),
            limits: self.limits,
            compact_enabled: self.compact_enabled,
        }
    }
}
