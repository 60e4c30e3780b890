//! Compass directions for one-cell stepping.

use std::fmt;

use crate::item::GridItem;

/// One of the four compass directions.
///
/// North decreases `y`, West decreases `x`. Compaction sweeps only ever
/// travel North, West, or East; South is kept for push-style callers
/// that branch on the label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward row 0.
    North,
    /// Away from row 0.
    South,
    /// Away from column 0.
    East,
    /// Toward column 0.
    West,
}

impl Direction {
    /// All four directions in a fixed order.
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// One-cell `(dx, dy)` offset.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::South => (0, 1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
        }
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Copy of `item` moved one cell in this direction.
    ///
    /// Saturates at the `i32` range.
    pub fn step(self, item: &GridItem) -> GridItem {
        let (dx, dy) = self.delta();
        GridItem {
            x: item.x.saturating_add(dx),
            y: item.y.saturating_add(dy),
            ..*item
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        };
        f.write_str(s)
    }
}
