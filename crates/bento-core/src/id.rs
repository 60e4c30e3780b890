//! Strongly-typed item identifiers.

use std::fmt;

/// Identifies an item within a grid.
///
/// Collision scans use this to exclude an item from colliding with
/// itself, so two entries in the same grid must never share an id.
/// `Layout` allocates ids sequentially; free-standing grids built by
/// callers are responsible for keeping their ids distinct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for ItemId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
