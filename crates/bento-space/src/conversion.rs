//! Pixel ↔ cell conversion.
//!
//! Callers measure their container and derive a cell size; these
//! functions only do the arithmetic. Different callers snap differently:
//! dragging rounds to the nearest cell, resizing from the top or left
//! floors, and growing a bottom or right edge ceils.

use bento_core::Cell;

/// How a fractional cell index snaps to an integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round toward negative infinity.
    Floor,
    /// Round toward positive infinity.
    Ceil,
    /// Round to the nearest integer, halves toward positive infinity.
    Nearest,
}

impl Rounding {
    /// Apply this rounding rule.
    pub fn apply(self, v: f64) -> f64 {
        match self {
            Self::Floor => v.floor(),
            Self::Ceil => v.ceil(),
            Self::Nearest => (v + 0.5).floor(),
        }
    }
}

/// Convert a pixel offset along one axis to a cell index.
///
/// Computes `rounding(offset / cell_size)`. Unless `allow_negative` is
/// set, the result is clamped to `0`. A cell size that is not finite and
/// positive yields `0`.
///
/// # Examples
///
/// ```
/// use bento_space::{pixels_to_cell, Rounding};
///
/// assert_eq!(pixels_to_cell(130.0, Rounding::Floor, 50.0, false), 2);
/// assert_eq!(pixels_to_cell(130.0, Rounding::Ceil, 50.0, false), 3);
/// assert_eq!(pixels_to_cell(-60.0, Rounding::Floor, 50.0, false), 0);
/// assert_eq!(pixels_to_cell(-60.0, Rounding::Floor, 50.0, true), -2);
/// ```
pub fn pixels_to_cell(offset: f64, rounding: Rounding, cell_size: f64, allow_negative: bool) -> i32 {
    if !cell_size.is_finite() || cell_size <= 0.0 {
        return 0;
    }
    let cell = rounding.apply(offset / cell_size);
    if !cell.is_finite() {
        return 0;
    }
    // `as` saturates at the i32 range.
    let cell = cell as i32;
    if allow_negative {
        cell
    } else {
        cell.max(0)
    }
}

/// Convert a cell index to its pixel offset: `cell * cell_size`.
pub fn cell_to_pixels(cell: i32, cell_size: f64) -> f64 {
    f64::from(cell) * cell_size
}

/// Column width and row height of a rendered grid, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellScale {
    /// Width of one column.
    pub col_width: f64,
    /// Height of one row.
    pub row_height: f64,
}

impl CellScale {
    /// Construct a scale from a column width and row height.
    pub fn new(col_width: f64, row_height: f64) -> Self {
        Self {
            col_width,
            row_height,
        }
    }

    /// Convert a pixel point to a cell with the same rounding on both axes.
    pub fn to_cell(&self, left: f64, top: f64, rounding: Rounding, allow_negative: bool) -> Cell {
        Cell::new(
            pixels_to_cell(left, rounding, self.col_width, allow_negative),
            pixels_to_cell(top, rounding, self.row_height, allow_negative),
        )
    }

    /// Pixel offset `(left, top)` of a cell's top-left corner.
    pub fn to_pixels(&self, cell: Cell) -> (f64, f64) {
        (
            cell_to_pixels(cell.x, self.col_width),
            cell_to_pixels(cell.y, self.row_height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn nearest_rounds_halves_up() {
        assert_eq!(pixels_to_cell(75.0, Rounding::Nearest, 50.0, false), 2);
        assert_eq!(pixels_to_cell(74.0, Rounding::Nearest, 50.0, false), 1);
        assert_eq!(pixels_to_cell(-75.0, Rounding::Nearest, 50.0, true), -1);
    }

    #[test]
    fn exact_multiples_agree_across_rules() {
        for rule in [Rounding::Floor, Rounding::Ceil, Rounding::Nearest] {
            assert_eq!(pixels_to_cell(150.0, rule, 50.0, false), 3);
        }
    }

    #[test]
    fn degenerate_cell_size_yields_zero() {
        assert_eq!(pixels_to_cell(100.0, Rounding::Floor, 0.0, false), 0);
        assert_eq!(pixels_to_cell(100.0, Rounding::Floor, -5.0, true), 0);
        assert_eq!(pixels_to_cell(100.0, Rounding::Floor, f64::NAN, true), 0);
        assert_eq!(pixels_to_cell(f64::INFINITY, Rounding::Floor, 10.0, true), 0);
    }

    #[test]
    fn scale_converts_both_axes() {
        let scale = CellScale::new(40.0, 25.0);
        assert_eq!(scale.to_cell(85.0, 60.0, Rounding::Floor, false), Cell::new(2, 2));
        assert_eq!(scale.to_pixels(Cell::new(3, 4)), (120.0, 100.0));
    }

    proptest! {
        #[test]
        fn cell_round_trips_through_pixels(
            cell in -1000i32..1000,
            size in 1.0f64..500.0,
        ) {
            let px = cell_to_pixels(cell, size);
            prop_assert_eq!(pixels_to_cell(px, Rounding::Nearest, size, true), cell);
        }

        #[test]
        fn clamped_result_is_never_negative(
            offset in -10_000.0f64..10_000.0,
            size in 0.5f64..200.0,
        ) {
            for rule in [Rounding::Floor, Rounding::Ceil, Rounding::Nearest] {
                prop_assert!(pixels_to_cell(offset, rule, size, false) >= 0);
            }
        }

        #[test]
        fn floor_never_exceeds_ceil(
            offset in -10_000.0f64..10_000.0,
            size in 0.5f64..200.0,
        ) {
            let lo = pixels_to_cell(offset, Rounding::Floor, size, true);
            let hi = pixels_to_cell(offset, Rounding::Ceil, size, true);
            let mid = pixels_to_cell(offset, Rounding::Nearest, size, true);
            prop_assert!(lo <= mid && mid <= hi);
            prop_assert!(hi - lo <= 1);
        }
    }
}
