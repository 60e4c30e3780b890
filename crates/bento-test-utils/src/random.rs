//! Seeded random layouts.
//!
//! Items are drawn with a `ChaCha8Rng` and kept only if they are legal
//! against everything already kept, so every layout is overlap-free and
//! inside the grid. The same seed always yields the same layout.

use bento_core::{GridConstraints, GridItem, ItemId};
use bento_space::check_collision;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Shape of a generated layout.
#[derive(Clone, Copy, Debug)]
pub struct LayoutProfile {
    /// Number of items to attempt.
    pub items: usize,
    /// Largest item width and height.
    pub max_span: i32,
    /// Rejection-sampling attempts per item before giving up on it.
    pub attempts: u32,
    /// Fraction of items, in `[0, 1]`, generated with compaction disabled.
    pub pinned_ratio: f64,
}

impl Default for LayoutProfile {
    fn default() -> Self {
        Self {
            items: 20,
            max_span: 4,
            attempts: 64,
            pinned_ratio: 0.0,
        }
    }
}

/// A legal random layout for `constraints`. May hold fewer than
/// `profile.items` items if the grid is crowded.
pub fn random_layout(seed: u64, profile: LayoutProfile, constraints: &GridConstraints) -> Vec<GridItem> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut grid: Vec<GridItem> = Vec::with_capacity(profile.items);
    let max_span = profile.max_span.clamp(1, constraints.max_cols.min(constraints.max_rows));
    for n in 0..profile.items {
        let id = ItemId(n as u64);
        let pinned = rng.random_bool(profile.pinned_ratio.clamp(0.0, 1.0));
        for _ in 0..profile.attempts {
            let cols = rng.random_range(1..=max_span);
            let rows = rng.random_range(1..=max_span);
            let x = rng.random_range(0..=constraints.max_cols - cols);
            let y = rng.random_range(0..=constraints.max_rows - rows);
            let candidate = GridItem::new(id, x, y, cols, rows).with_compact_enabled(!pinned);
            if !check_collision(&candidate, &grid, constraints).is_collision() {
                grid.push(candidate);
                break;
            }
        }
    }
    grid
}
