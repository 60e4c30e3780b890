//! Layout configuration, validation, and error types.
//!
//! [`LayoutConfig`] is the input for constructing a [`Layout`](crate::Layout).
//! [`validate()`](LayoutConfig::validate) checks structural invariants up
//! front so the placement and compaction paths can assume a sane grid.

use bento_core::{GridConstraints, GridItem, ItemId, ItemSpec};
use thiserror::Error;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`LayoutConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `max_cols` or `max_rows` is below 1.
    #[error("grid capacity must be at least 1x1, got {max_cols}x{max_rows}")]
    EmptyCapacity {
        /// Configured column capacity.
        max_cols: i32,
        /// Configured row capacity.
        max_rows: i32,
    },
    /// A minimum grid extent is negative or exceeds the capacity.
    #[error("minimum extent {min_cols}x{min_rows} outside capacity {max_cols}x{max_rows}")]
    MinimumOutOfRange {
        /// Configured minimum columns.
        min_cols: i32,
        /// Configured minimum rows.
        min_rows: i32,
        /// Configured column capacity.
        max_cols: i32,
        /// Configured row capacity.
        max_rows: i32,
    },
    /// An item size or area range is empty or admits zero-sized items.
    #[error("{name} range [{min}, {max}] is invalid")]
    InvalidItemRange {
        /// Which range (`"item cols"`, `"item rows"`, `"item area"`).
        name: &'static str,
        /// Configured lower bound.
        min: i32,
        /// Configured upper bound.
        max: i32,
    },
    /// The default item size is rejected by the grid's own item limits.
    #[error("default item size {cols}x{rows} violates the item limits")]
    DefaultSizeOutOfLimits {
        /// Configured default width.
        cols: i32,
        /// Configured default height.
        rows: i32,
    },
}

// ── LayoutConfig ───────────────────────────────────────────────────

/// Complete configuration for a [`Layout`](crate::Layout).
#[derive(Clone, Debug)]
pub struct LayoutConfig {
    /// Capacity, item limits, compaction mode, and validator.
    pub constraints: GridConstraints,
    /// Minimum column count reported for the grid. Default: 1.
    pub min_cols: i32,
    /// Minimum row count reported for the grid. Default: 1.
    pub min_rows: i32,
    /// Width given to items whose `cols` is `Auto`. Default: 1.
    pub default_item_cols: i32,
    /// Height given to items whose `rows` is `Auto`. Default: 1.
    pub default_item_rows: i32,
    /// Keep a conflicting requested position (flagged not-placed) instead
    /// of auto-positioning the item elsewhere. Default: `false`.
    pub disable_auto_position_on_conflict: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            constraints: GridConstraints::default(),
            min_cols: 1,
            min_rows: 1,
            default_item_cols: 1,
            default_item_rows: 1,
            disable_auto_position_on_conflict: false,
        }
    }
}

impl LayoutConfig {
    /// Config wrapping the given constraints, other fields at defaults.
    pub fn with_constraints(constraints: GridConstraints) -> Self {
        Self {
            constraints,
            ..Self::default()
        }
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let c = &self.constraints;
        // 1. Capacity must hold at least one cell.
        if c.max_cols < 1 || c.max_rows < 1 {
            return Err(ConfigError::EmptyCapacity {
                max_cols: c.max_cols,
                max_rows: c.max_rows,
            });
        }
        // 2. Minimum extents lie within [0, capacity].
        if self.min_cols < 0
            || self.min_rows < 0
            || self.min_cols > c.max_cols
            || self.min_rows > c.max_rows
        {
            return Err(ConfigError::MinimumOutOfRange {
                min_cols: self.min_cols,
                min_rows: self.min_rows,
                max_cols: c.max_cols,
                max_rows: c.max_rows,
            });
        }
        // 3. Item ranges are non-empty and start at 1 or more.
        for (name, min, max) in [
            ("item cols", c.min_item_cols, c.max_item_cols),
            ("item rows", c.min_item_rows, c.max_item_rows),
            ("item area", c.min_item_area, c.max_item_area),
        ] {
            if min < 1 || min > max {
                return Err(ConfigError::InvalidItemRange { name, min, max });
            }
        }
        // 4. The default item must itself be a legal item size.
        let probe = GridItem::new(ItemId(0), 0, 0, self.default_item_cols, self.default_item_rows);
        if !c.limits_for(&probe).admits(&probe) {
            return Err(ConfigError::DefaultSizeOutOfLimits {
                cols: self.default_item_cols,
                rows: self.default_item_rows,
            });
        }
        Ok(())
    }

    /// Resolve a spec's `Auto` spans against the configured defaults.
    pub fn resolve(&self, spec: &ItemSpec, id: ItemId) -> GridItem {
        spec.resolve(id, self.default_item_cols, self.default_item_rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        LayoutConfig::default().validate().unwrap();
    }

    #[test]
    fn rejects_empty_capacity() {
        let cfg = LayoutConfig::with_constraints(GridConstraints::default().with_capacity(0, 5));
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::EmptyCapacity {
                max_cols: 0,
                max_rows: 5
            })
        );
    }

    #[test]
    fn rejects_minimum_above_capacity() {
        let cfg = LayoutConfig {
            min_rows: 11,
            ..LayoutConfig::with_constraints(GridConstraints::default().with_capacity(10, 10))
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::MinimumOutOfRange { min_rows: 11, .. })
        ));
    }

    #[test]
    fn rejects_inverted_item_range() {
        let mut cfg = LayoutConfig::default();
        cfg.constraints.min_item_rows = 4;
        cfg.constraints.max_item_rows = 3;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidItemRange {
                name: "item rows",
                min: 4,
                max: 3
            })
        );
        cfg.constraints.min_item_rows = 0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidItemRange { name: "item rows", .. })
        ));
    }

    #[test]
    fn rejects_default_size_outside_limits() {
        let mut cfg = LayoutConfig::default();
        cfg.constraints.min_item_area = 4;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::DefaultSizeOutOfLimits { cols: 1, rows: 1 })
        );
        cfg.default_item_cols = 2;
        cfg.default_item_rows = 2;
        cfg.validate().unwrap();
    }

    #[test]
    fn error_messages_name_the_problem() {
        let e = ConfigError::InvalidItemRange {
            name: "item area",
            min: 5,
            max: 2,
        };
        assert_eq!(e.to_string(), "item area range [5, 2] is invalid");
    }
}
