//! Reference grids with known compaction results.
//!
//! [`dashboard`] is an eleven-item layout with gaps in every direction.
//! [`expected_positions`] gives where each item ends up under each
//! compaction mode on a default-capacity (100×100) grid.

use bento_core::{CompactType, GridItem};

use crate::item;

/// Eleven items of mixed sizes, ids `0..11`, no overlaps.
pub fn dashboard() -> Vec<GridItem> {
    vec![
        item(0, 0, 0, 2, 1),
        item(1, 2, 0, 2, 2),
        item(2, 4, 0, 1, 1),
        item(3, 4, 1, 3, 2),
        item(4, 5, 4, 1, 1),
        item(5, 1, 2, 1, 1),
        item(6, 5, 5, 2, 2),
        item(7, 2, 3, 2, 2),
        item(8, 2, 2, 2, 1),
        item(9, 4, 3, 1, 1),
        item(10, 6, 0, 1, 1),
    ]
}

/// Positions of [`dashboard`]'s items after compacting with `mode` on a
/// 100×100 grid, in grid order.
pub fn expected_positions(mode: CompactType) -> Vec<(i32, i32)> {
    match mode {
        CompactType::None => crate::positions(&dashboard()),
        CompactType::Up => vec![
            (0, 0), (2, 0), (4, 0), (4, 1), (5, 3), (1, 1), (5, 4), (2, 3), (2, 2), (4, 3), (6, 0),
        ],
        CompactType::Left => vec![
            (0, 0), (2, 0), (4, 0), (4, 1), (2, 4), (0, 2), (0, 5), (0, 3), (1, 2), (2, 3), (5, 0),
        ],
        CompactType::LeftAndUp => vec![
            (0, 0), (2, 0), (4, 0), (4, 1), (2, 3), (0, 1), (0, 5), (0, 3), (0, 2), (2, 2), (5, 0),
        ],
        CompactType::UpAndLeft => vec![
            (0, 0), (2, 0), (4, 0), (4, 1), (2, 3), (0, 1), (2, 4), (0, 3), (0, 2), (2, 2), (5, 0),
        ],
        CompactType::Right => vec![
            (93, 0), (95, 0), (98, 0), (97, 1), (99, 4), (94, 2), (98, 5), (97, 3), (95, 2), (99, 3), (99, 0),
        ],
        CompactType::UpAndRight => vec![
            (89, 0), (92, 0), (94, 0), (97, 1), (99, 3), (91, 0), (98, 4), (95, 0), (97, 0), (98, 3), (99, 0),
        ],
        CompactType::RightAndUp => vec![
            (93, 0), (95, 0), (98, 0), (97, 1), (99, 4), (94, 1), (98, 5), (97, 3), (95, 2), (99, 3), (99, 0),
        ],
    }
}
