//! Core types and traits for the Bento grid layout engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Bento workspace:
//! item identifiers, grid items and their size/position specs, compass
//! directions, grid constraints, and the external validation trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod constraints;
pub mod direction;
pub mod id;
pub mod item;
pub mod traits;

pub use constraints::{CompactType, GridConstraints, ResolvedLimits};
pub use direction::Direction;
pub use id::ItemId;
pub use item::{Cell, GridItem, ItemLimits, ItemSpec, Position, Span};
pub use traits::ItemValidator;
