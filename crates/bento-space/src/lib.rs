//! Grid geometry for Bento layouts.
//!
//! This crate holds the pure, stateless geometry that every layout
//! operation is built on:
//!
//! - [`conversion`]: pixel offsets to cell indices and back
//! - [`collision`]: overlap, bounds, and size-limit checks
//! - [`dimensions`]: row/column extents of a set of placed items
//!
//! All functions take the grid as a read-only slice of
//! [`GridItem`](bento_core::GridItem)s and never retain it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod collision;
pub mod conversion;
pub mod dimensions;

pub use collision::{
    check_collision, check_collision_two_items, check_grid_collision, find_item_with_item,
    find_items_with_item, Collision,
};
pub use conversion::{cell_to_pixels, pixels_to_cell, CellScale, Rounding};
pub use dimensions::{grid_dimensions, occupied_extent, DimensionTracker, GridDimensions};
