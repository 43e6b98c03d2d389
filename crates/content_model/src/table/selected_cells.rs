// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use crate::model::Table;
use crate::selection::has_selection_in_table_cell;

/// Inclusive bounding box of the selected cells of a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableSelectionCoordinates {
    pub first_row: usize,
    pub first_col: usize,
    pub last_row: usize,
    pub last_col: usize,
}

impl TableSelectionCoordinates {
    pub fn contains(&self, row: usize, col: usize) -> bool {
        (self.first_row..=self.last_row).contains(&row)
            && (self.first_col..=self.last_col).contains(&col)
    }

    pub fn row_count(&self) -> usize {
        self.last_row - self.first_row + 1
    }

    pub fn column_count(&self) -> usize {
        self.last_col - self.first_col + 1
    }
}

/// Bounding box of every cell that is selected or holds selected content.
pub fn get_selected_cells(table: &Table) -> Option<TableSelectionCoordinates> {
    let mut result: Option<TableSelectionCoordinates> = None;
    for (row, table_row) in table.rows.iter().enumerate() {
        for (col, cell) in table_row.cells.iter().enumerate() {
            if !has_selection_in_table_cell(cell) {
                continue;
            }
            result = Some(match result {
                None => TableSelectionCoordinates {
                    first_row: row,
                    first_col: col,
                    last_row: row,
                    last_col: col,
                },
                Some(co) => TableSelectionCoordinates {
                    first_row: co.first_row.min(row),
                    first_col: co.first_col.min(col),
                    last_row: co.last_row.max(row),
                    last_col: co.last_col.max(col),
                },
            });
        }
    }
    result
}
