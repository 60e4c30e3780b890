//! Grid-wide constraints and compaction modes.

use std::fmt;
use std::sync::Arc;

use crate::direction::Direction;
use crate::item::GridItem;
use crate::traits::ItemValidator;

/// Which edge (or edge pair) compaction packs items toward.
///
/// Combination modes run two single-axis sweeps; the first named axis
/// settles before the second runs. There are no downward modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CompactType {
    /// Compaction disabled.
    #[default]
    None,
    /// Slide items toward row 0.
    Up,
    /// Slide items toward column 0.
    Left,
    /// Slide items toward the last column.
    Right,
    /// Up, then left.
    UpAndLeft,
    /// Left, then up.
    LeftAndUp,
    /// Up, then right.
    UpAndRight,
    /// Right, then up.
    RightAndUp,
}

impl CompactType {
    /// Every mode, `None` first.
    pub const ALL: [Self; 8] = [
        Self::None,
        Self::Up,
        Self::Left,
        Self::Right,
        Self::UpAndLeft,
        Self::LeftAndUp,
        Self::UpAndRight,
        Self::RightAndUp,
    ];

    /// The sweep directions for this mode: the primary axis and, for
    /// combination modes, the secondary axis. `None` for [`CompactType::None`].
    pub fn sweeps(self) -> Option<(Direction, Option<Direction>)> {
        match self {
            Self::None => None,
            Self::Up => Some((Direction::North, None)),
            Self::Left => Some((Direction::West, None)),
            Self::Right => Some((Direction::East, None)),
            Self::UpAndLeft => Some((Direction::North, Some(Direction::West))),
            Self::LeftAndUp => Some((Direction::West, Some(Direction::North))),
            Self::UpAndRight => Some((Direction::North, Some(Direction::East))),
            Self::RightAndUp => Some((Direction::East, Some(Direction::North))),
        }
    }
}

/// Size and area limits for one item after per-item overrides have been
/// applied on top of the grid defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedLimits {
    /// Inclusive `(min, max)` width in columns.
    pub cols: (i32, i32),
    /// Inclusive `(min, max)` height in rows.
    pub rows: (i32, i32),
    /// Inclusive `(min, max)` area.
    pub area: (i32, i32),
}

impl ResolvedLimits {
    /// Whether `item`'s size and area fall inside these limits.
    pub fn admits(&self, item: &GridItem) -> bool {
        let within = |v: i32, (lo, hi): (i32, i32)| v >= lo && v <= hi;
        within(item.cols, self.cols) && within(item.rows, self.rows) && within(item.area(), self.area)
    }
}

/// Capacity ceiling, item limits, compaction mode, and the optional
/// external validator for one grid.
///
/// Immutable for the duration of any single engine call.
#[derive(Clone)]
pub struct GridConstraints {
    /// Maximum number of columns. Default: 100.
    pub max_cols: i32,
    /// Maximum number of rows. Default: 100.
    pub max_rows: i32,
    /// Default minimum item width. Default: 1.
    pub min_item_cols: i32,
    /// Default maximum item width. Default: 50.
    pub max_item_cols: i32,
    /// Default minimum item height. Default: 1.
    pub min_item_rows: i32,
    /// Default maximum item height. Default: 50.
    pub max_item_rows: i32,
    /// Default minimum item area. Default: 1.
    pub min_item_area: i32,
    /// Default maximum item area. Default: 2500.
    pub max_item_area: i32,
    /// Compaction mode. Default: [`CompactType::None`].
    pub compact_type: CompactType,
    /// Optional host-supplied placement predicate.
    pub item_validator: Option<Arc<dyn ItemValidator>>,
}

impl GridConstraints {
    /// Builder-style setter for the compaction mode.
    pub fn with_compact_type(mut self, compact_type: CompactType) -> Self {
        self.compact_type = compact_type;
        self
    }

    /// Builder-style setter for the grid capacity.
    pub fn with_capacity(mut self, max_cols: i32, max_rows: i32) -> Self {
        self.max_cols = max_cols;
        self.max_rows = max_rows;
        self
    }

    /// Install an external placement predicate.
    pub fn with_validator(mut self, validator: impl ItemValidator + 'static) -> Self {
        self.item_validator = Some(Arc::new(validator));
        self
    }

    /// Limits for `item`: its own overrides where present, else the grid's.
    pub fn limits_for(&self, item: &GridItem) -> ResolvedLimits {
        let l = &item.limits;
        ResolvedLimits {
            cols: (
                l.min_cols.unwrap_or(self.min_item_cols),
                l.max_cols.unwrap_or(self.max_item_cols),
            ),
            rows: (
                l.min_rows.unwrap_or(self.min_item_rows),
                l.max_rows.unwrap_or(self.max_item_rows),
            ),
            area: (
                l.min_area.unwrap_or(self.min_item_area),
                l.max_area.unwrap_or(self.max_item_area),
            ),
        }
    }
}

impl Default for GridConstraints {
    fn default() -> Self {
        Self {
            max_cols: 100,
            max_rows: 100,
            min_item_cols: 1,
            max_item_cols: 50,
            min_item_rows: 1,
            max_item_rows: 50,
            min_item_area: 1,
            max_item_area: 2500,
            compact_type: CompactType::None,
            item_validator: None,
        }
    }
}

impl fmt::Debug for GridConstraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridConstraints")
            .field("max_cols", &self.max_cols)
            .field("max_rows", &self.max_rows)
            .field("min_item_cols", &self.min_item_cols)
            .field("max_item_cols", &self.max_item_cols)
            .field("min_item_rows", &self.min_item_rows)
            .field("max_item_rows", &self.max_item_rows)
            .field("min_item_area", &self.min_item_area)
            .field("max_item_area", &self.max_item_area)
            .field("compact_type", &self.compact_type)
            .field("item_validator", &self.item_validator.is_some())
            .finish()
    }
}
