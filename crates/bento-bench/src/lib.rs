//! Benchmark profiles for the Bento layout engine.
//!
//! - [`reference_profile`]: 24×24 grid, ~60 mixed items, a typical dashboard
//! - [`stress_profile`]: 100×100 grid (the default capacity), ~600 items
//! - [`filled_layout`]: a [`Layout`] populated through `add_item`

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use bento_core::{CompactType, GridConstraints, GridItem, ItemSpec};
use bento_engine::{Layout, LayoutConfig, LayoutError};
use bento_test_utils::random::{random_layout, LayoutProfile};

/// Constraints and a legal random grid for a dashboard-sized layout.
pub fn reference_profile(seed: u64, mode: CompactType) -> (GridConstraints, Vec<GridItem>) {
    let constraints = GridConstraints::default()
        .with_capacity(24, 24)
        .with_compact_type(mode);
    let profile = LayoutProfile {
        items: 60,
        max_span: 4,
        attempts: 64,
        pinned_ratio: 0.1,
    };
    let grid = random_layout(seed, profile, &constraints);
    (constraints, grid)
}

/// Constraints and a legal random grid at the default 100×100 capacity.
pub fn stress_profile(seed: u64, mode: CompactType) -> (GridConstraints, Vec<GridItem>) {
    let constraints = GridConstraints::default().with_compact_type(mode);
    let profile = LayoutProfile {
        items: 600,
        max_span: 6,
        attempts: 32,
        pinned_ratio: 0.05,
    };
    let grid = random_layout(seed, profile, &constraints);
    (constraints, grid)
}

/// A layout with `count` auto-positioned items of the given size.
pub fn filled_layout(
    constraints: GridConstraints,
    count: usize,
    cols: i32,
    rows: i32,
) -> Result<Layout, LayoutError> {
    let mut layout = Layout::new(LayoutConfig::with_constraints(constraints))?;
    for _ in 0..count {
        layout.add_item(ItemSpec::auto().sized(cols, rows));
    }
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_are_deterministic_and_nonempty() {
        let (_, a) = reference_profile(3, CompactType::Up);
        let (_, b) = reference_profile(3, CompactType::Up);
        assert_eq!(a, b);
        assert!(a.len() > 10);
    }

    #[test]
    fn filled_layout_places_everything() {
        let layout = filled_layout(GridConstraints::default(), 50, 2, 1).unwrap();
        assert_eq!(layout.len(), 50);
        assert_eq!(layout.placed_items().len(), 50);
    }
}
