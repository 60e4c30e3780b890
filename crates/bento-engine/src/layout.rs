//! [`Layout`]: an owned, ordered set of items on one grid.
//!
//! Items keep their insertion order, which is also the order compaction
//! sweeps them in. Items that could not be placed legally are kept but
//! flagged not-placed; they are skipped by collision checks, compaction,
//! and the grid's extents until a later move or resize makes them legal.

use std::fmt;

use bento_core::{Cell, GridItem, ItemId, ItemSpec, Position};
use bento_space::{check_collision, Collision, DimensionTracker, GridDimensions};
use indexmap::IndexMap;
use thiserror::Error;
use tracing::{debug, warn};

use crate::compact::{check_compact_item, compact_with_metrics};
use crate::config::{ConfigError, LayoutConfig};
use crate::metrics::CompactMetrics;
use crate::position::{first_possible_position, last_possible_position, next_possible_position};

// ── LayoutError ────────────────────────────────────────────────────

/// Errors returned by [`Layout`] operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The configuration failed validation.
    #[error("invalid layout config: {0}")]
    InvalidConfig(#[from] ConfigError),
    /// No item with this id exists.
    #[error("unknown item {0}")]
    UnknownItem(ItemId),
    /// The requested geometry is illegal. The layout is unchanged.
    #[error("item {id} cannot take the requested geometry: {with:?}")]
    Collision {
        /// The item being moved or resized.
        id: ItemId,
        /// What it collided with.
        with: Collision,
    },
}

// ── LayoutEntry / LayoutReport ─────────────────────────────────────

/// One stored item and its placement state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutEntry {
    /// Current geometry. For a not-placed item, the last requested one.
    pub item: GridItem,
    /// `true` if the item could not be placed legally.
    pub not_placed: bool,
}

/// Summary of one [`Layout::calculate_layout`] call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayoutReport {
    /// Compaction counters, or `None` when compaction is disabled.
    pub compaction: Option<CompactMetrics>,
    /// Items whose position changed, in layout order.
    pub relocated: Vec<ItemId>,
    /// New extents, if they changed.
    pub resized: Option<GridDimensions>,
}

type GridSizeListener = Box<dyn FnMut(GridDimensions) + Send>;

// ── Layout ─────────────────────────────────────────────────────────

/// An ordered collection of items placed on one grid.
///
/// Not internally synchronized: mutate from one thread at a time.
pub struct Layout {
    config: LayoutConfig,
    entries: IndexMap<ItemId, LayoutEntry>,
    tracker: DimensionTracker,
    next_id: u64,
    listener: Option<GridSizeListener>,
}

impl Layout {
    /// Create an empty layout after validating `config`.
    pub fn new(config: LayoutConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        let tracker = DimensionTracker::new(config.min_cols, config.min_rows);
        Ok(Self {
            config,
            entries: IndexMap::new(),
            tracker,
            next_id: 0,
            listener: None,
        })
    }

    /// The configuration this layout was built with.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Number of stored items, placed or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if no items are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Geometry of the item with `id`.
    pub fn item(&self, id: ItemId) -> Option<&GridItem> {
        self.entries.get(&id).map(|e| &e.item)
    }

    /// Geometry and placement state of the item with `id`.
    pub fn entry(&self, id: ItemId) -> Option<&LayoutEntry> {
        self.entries.get(&id)
    }

    /// `true` if `id` exists and is placed.
    pub fn is_placed(&self, id: ItemId) -> bool {
        self.entries.get(&id).is_some_and(|e| !e.not_placed)
    }

    /// All stored entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &LayoutEntry> {
        self.entries.values()
    }

    /// All stored items in insertion order, placed or not.
    pub fn items(&self) -> impl Iterator<Item = &GridItem> {
        self.entries.values().map(|e| &e.item)
    }

    /// Snapshot of the placed items in insertion order.
    pub fn placed_items(&self) -> Vec<GridItem> {
        self.entries
            .values()
            .filter(|e| !e.not_placed)
            .map(|e| e.item)
            .collect()
    }

    /// Current grid extents.
    pub fn dimensions(&self) -> GridDimensions {
        self.tracker.current()
    }

    /// Register a callback invoked whenever the extents change.
    ///
    /// Replaces any previously registered callback.
    pub fn on_grid_size_changed(&mut self, listener: impl FnMut(GridDimensions) + Send + 'static) {
        self.listener = Some(Box::new(listener));
    }

    // ── Mutation ────────────────────────────────────────────────

    /// Add an item and return its id.
    ///
    /// `Auto` spans take the configured default size. An `Auto` position
    /// is filled by the auto-positioner. A requested position that
    /// collides is auto-positioned instead, or, with
    /// `disable_auto_position_on_conflict`, kept as requested and flagged
    /// not-placed. An item for which no slot exists is also kept and
    /// flagged not-placed. Dimensions are refreshed; compaction is not
    /// run until [`calculate_layout`](Self::calculate_layout).
    ///
    /// Only [`Position::Auto`] requests a search. A `Position::At` with a
    /// negative coordinate is an ordinary out-of-bounds conflict and is
    /// handled like any other collision.
    pub fn add_item(&mut self, spec: ItemSpec) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;

        let mut item = self.config.resolve(&spec, id);
        let grid = self.placed_items();
        let needs_search = match spec.position {
            Position::Auto => true,
            Position::At(cell) => {
                let collision = check_collision(&item, &grid, &self.config.constraints);
                if collision.is_collision() {
                    warn!(%id, x = cell.x, y = cell.y, ?collision, "requested position conflicts");
                }
                collision.is_collision()
            }
        };

        let mut not_placed = false;
        if needs_search {
            if self.config.disable_auto_position_on_conflict && matches!(spec.position, Position::At(_)) {
                not_placed = true;
            } else if !next_possible_position(&mut item, &grid, &self.config, Cell::ORIGIN) {
                warn!(%id, cols = item.cols, rows = item.rows, "no free slot for item");
                not_placed = true;
            }
        }

        debug!(%id, x = item.x, y = item.y, cols = item.cols, rows = item.rows, not_placed, "item added");
        self.entries.insert(id, LayoutEntry { item, not_placed });
        self.refresh_dimensions();
        id
    }

    /// Remove an item, returning its last geometry.
    pub fn remove_item(&mut self, id: ItemId) -> Result<GridItem, LayoutError> {
        let entry = self
            .entries
            .shift_remove(&id)
            .ok_or(LayoutError::UnknownItem(id))?;
        debug!(%id, "item removed");
        self.refresh_dimensions();
        Ok(entry.item)
    }

    /// Move an item's top-left corner to `cell`.
    ///
    /// On success a not-placed item becomes placed. On collision the
    /// layout is unchanged.
    pub fn move_item(&mut self, id: ItemId, cell: Cell) -> Result<(), LayoutError> {
        let current = *self.item(id).ok_or(LayoutError::UnknownItem(id))?;
        self.commit(current.at(cell))
    }

    /// Change an item's size, keeping its top-left corner.
    ///
    /// On success a not-placed item becomes placed. On collision the
    /// layout is unchanged.
    pub fn resize_item(&mut self, id: ItemId, cols: i32, rows: i32) -> Result<(), LayoutError> {
        let current = *self.item(id).ok_or(LayoutError::UnknownItem(id))?;
        self.commit(GridItem { cols, rows, ..current })
    }

    /// Run compaction (if enabled) over the placed items, then refresh
    /// the grid's extents.
    pub fn calculate_layout(&mut self) -> LayoutReport {
        let mut report = LayoutReport::default();
        if self.config.constraints.compact_type.sweeps().is_some() {
            let (compacted, metrics) = compact_with_metrics(&self.placed_items(), &self.config.constraints);
            for item in compacted {
                if let Some(entry) = self.entries.get_mut(&item.id) {
                    if entry.item.cell() != item.cell() {
                        entry.item = item;
                        report.relocated.push(item.id);
                    }
                }
            }
            report.compaction = Some(metrics);
        }
        report.resized = self.refresh_dimensions();
        report
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Where the item would settle if compacted now. Nothing is modified.
    pub fn compact_preview(&self, id: ItemId) -> Result<GridItem, LayoutError> {
        let item = self.item(id).ok_or(LayoutError::UnknownItem(id))?;
        Ok(check_compact_item(item, &self.placed_items(), &self.config.constraints))
    }

    /// Legality of `item` against the placed items.
    pub fn check_collision(&self, item: &GridItem) -> Collision {
        check_collision(item, &self.placed_items(), &self.config.constraints)
    }

    /// [`next_possible_position`] against the placed items.
    pub fn next_possible_position(&self, item: &mut GridItem, starting_from: Cell) -> bool {
        next_possible_position(item, &self.placed_items(), &self.config, starting_from)
    }

    /// [`first_possible_position`] against the placed items.
    pub fn first_possible_position(&self, item: &GridItem) -> GridItem {
        first_possible_position(item, &self.placed_items(), &self.config)
    }

    /// [`last_possible_position`] against the placed items.
    pub fn last_possible_position(&self, item: &GridItem) -> GridItem {
        last_possible_position(item, &self.placed_items(), &self.config)
    }

    // ── Internal ────────────────────────────────────────────────

    fn commit(&mut self, candidate: GridItem) -> Result<(), LayoutError> {
        let id = candidate.id;
        let with = self.check_collision(&candidate);
        if with.is_collision() {
            debug!(%id, x = candidate.x, y = candidate.y, ?with, "geometry change rejected");
            return Err(LayoutError::Collision { id, with });
        }
        if let Some(entry) = self.entries.get_mut(&id) {
            entry.item = candidate;
            entry.not_placed = false;
        }
        self.refresh_dimensions();
        Ok(())
    }

    fn refresh_dimensions(&mut self) -> Option<GridDimensions> {
        let changed = self.tracker.update(&self.placed_items())?;
        if let Some(listener) = self.listener.as_mut() {
            listener(changed);
        }
        Some(changed)
    }
}

impl fmt::Debug for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layout")
            .field("config", &self.config)
            .field("entries", &self.entries)
            .field("dimensions", &self.tracker.current())
            .field("listener", &self.listener.is_some())
            .finish()
    }
}
