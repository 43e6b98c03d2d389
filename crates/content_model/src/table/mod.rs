// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Table editing over the dense cell grid of [`Table`](crate::model::Table).
//!
//! Each operation works on the bounding box of the selected cells and
//! invalidates the cached element of every cell and row it changes.
//! Structural operations also invalidate the table itself.

mod align;
mod delete;
mod grid;
mod insert;
mod merge;
mod normalize;
mod operation;
mod selected_cells;
mod split;

pub use align::{align_table, align_table_cell, TableAlignment, TableCellAlignment};
pub use delete::{delete_table, delete_table_column, delete_table_row};
pub use grid::can_merge_cells;
pub use insert::{insert_table_column, insert_table_row};
pub use merge::{merge_table_cells, merge_table_column, merge_table_row};
pub use normalize::normalize_table;
pub use operation::{edit_table, TableOperation};
pub use selected_cells::{get_selected_cells, TableSelectionCoordinates};
pub use split::{split_table_cell_horizontally, split_table_cell_vertically};

use strum_macros::{Display, EnumString};

/// Narrowest column a split or a normalization leaves behind.
pub const MIN_CELL_WIDTH: f64 = 30.0;

/// Lowest row a split leaves behind.
pub const MIN_CELL_HEIGHT: f64 = 22.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
pub enum HorizontalDirection {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
pub enum VerticalDirection {
    Above,
    Below,
}
