//! Bento: grid layout geometry for dashboard-style widgets.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Bento sub-crates. For most users, adding `bento` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use bento::prelude::*;
//!
//! let constraints = GridConstraints::default()
//!     .with_capacity(12, 12)
//!     .with_compact_type(CompactType::Up);
//! let mut layout = Layout::new(LayoutConfig::with_constraints(constraints)).unwrap();
//!
//! let header = layout.add_item(ItemSpec::at(0, 0).sized(12, 1));
//! let chart = layout.add_item(ItemSpec::at(6, 4).sized(6, 3));
//! let table = layout.add_item(ItemSpec::auto().sized(6, 3));
//! assert_eq!(layout.item(table).unwrap().cell(), Cell::new(0, 1));
//!
//! // Dropping the chart onto the header is rejected and changes nothing.
//! assert!(layout.move_item(chart, Cell::new(0, 0)).is_err());
//!
//! // Compaction closes the gap under the header.
//! let report = layout.calculate_layout();
//! assert!(report.relocated.contains(&chart));
//! assert_eq!(layout.item(chart).unwrap().cell(), Cell::new(6, 1));
//! assert_eq!(layout.item(header).unwrap().cell(), Cell::ORIGIN);
//! assert!(layout.is_placed(table));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `bento-core` | Items, ids, constraints, directions, the validator trait |
//! | [`space`] | `bento-space` | Collision checks, pixel conversion, grid extents |
//! | [`engine`] | `bento-engine` | Auto-positioning, compaction, the `Layout` container |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`bento-core`).
///
/// Contains [`types::GridItem`], [`types::ItemSpec`],
/// [`types::GridConstraints`], and the [`types::ItemValidator`] trait.
pub use bento_core as types;

/// Stateless grid geometry (`bento-space`).
///
/// [`space::check_collision`] and friends, [`space::pixels_to_cell`] /
/// [`space::cell_to_pixels`], and [`space::DimensionTracker`].
pub use bento_space as space;

/// Placement and compaction (`bento-engine`).
///
/// Free functions such as [`engine::compact`](fn@engine::compact) and
/// [`engine::next_possible_position`] operate on slices; [`engine::Layout`]
/// owns an ordered item set and applies them for you.
pub use bento_engine as engine;

/// Common imports for typical Bento usage.
///
/// ```rust
/// use bento::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use bento_core::{
        Cell, CompactType, Direction, GridConstraints, GridItem, ItemId, ItemLimits, ItemSpec,
        ItemValidator, Position, Span,
    };

    // Geometry
    pub use bento_space::{check_collision, CellScale, Collision, GridDimensions, Rounding};

    // Engine
    pub use bento_engine::{
        compact, CompactMetrics, ConfigError, Layout, LayoutConfig, LayoutError, LayoutReport,
    };
}
