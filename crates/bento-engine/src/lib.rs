//! Placement and compaction engine for Bento layouts.
//!
//! Builds on the geometry in `bento-space`:
//!
//! - [`position`]: row-major search for the next free slot, with grid
//!   growth as a fallback
//! - [`compact`](mod@compact): directional fixpoint compaction of a whole grid, and
//!   single-item settle previews
//! - [`layout`]: [`Layout`], an owned, ordered item container that
//!   applies both on add/remove/recalculate
//! - [`config`]: [`LayoutConfig`] and its validation
//!
//! Every function is synchronous and runs to completion. A [`Layout`]
//! must not be mutated from two threads at once; wrap it in a mutex if
//! it is shared.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compact;
pub mod config;
pub mod layout;
pub mod metrics;
pub mod position;

pub use compact::{check_compact_item, compact, compact_with_metrics};
pub use config::{ConfigError, LayoutConfig};
pub use layout::{Layout, LayoutEntry, LayoutError, LayoutReport};
pub use metrics::CompactMetrics;
pub use position::{
    auto_place, first_possible_position, last_possible_position, next_possible_position,
};
