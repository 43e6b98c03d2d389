// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Splitting the selected cells in two.
//!
//! A selected cell that is the owner of a merged cell is split by ungrouping
//! it: the continuation column (or row) next to it becomes independent
//! again. Otherwise a new column (or row) is spliced in next to the original
//! one. Inside the selection the new cells are independent cells; outside it
//! they continue the neighbouring cell, so unselected cells keep their size.

use super::selected_cells::get_selected_cells;
use super::{MIN_CELL_HEIGHT, MIN_CELL_WIDTH};
use crate::model::{CachedNode, Table, TableCell, TableRow};

/// Split every selected cell into a left and a right half.
pub fn split_table_cell_horizontally(table: &mut Table) -> bool {
    let Some(co) = get_selected_cells(table) else {
        return false;
    };
    let update_widths = table.has_valid_widths();
    let selected_rows = co.first_row..=co.last_row;
    let spans_left_in_selection = |table: &Table, col: usize| {
        selected_rows
            .clone()
            .all(|r| table.cell(r, col).is_some_and(|c| c.span_left))
    };

    for col in (co.first_col..=co.last_col).rev() {
        if col > co.first_col && spans_left_in_selection(&*table, col) {
            // part of a cell owned further left, split along with its owner
            continue;
        }

        if spans_left_in_selection(&*table, col + 1) {
            for r in selected_rows.clone() {
                let row = &mut table.rows[r];
                row.cells[col].invalidate();
                row.cells[col + 1].span_left = false;
                row.cells[col + 1].invalidate();
                row.invalidate();
            }
            tracing::debug!(col, "ungrouped column");
            continue;
        }

        for (r, row) in table.rows.iter_mut().enumerate() {
            let Some(original) = row.cells.get_mut(col) else {
                continue;
            };
            original.invalidate();
            let mut half = original.clone_shape();
            if selected_rows.contains(&r) {
                half.span_left = false;
                half.is_selected = original.is_selected;
            } else if original.span_above {
                half.span_left = false;
            } else {
                half.span_left = true;
                half.span_above = false;
            }
            row.cells.insert(col + 1, half);
            row.invalidate();
        }
        if update_widths {
            let width = (table.widths[col] / 2.0).max(MIN_CELL_WIDTH);
            table.widths[col] = width;
            table.widths.insert(col + 1, width);
        }
        tracing::debug!(col, "split column");
    }
    true
}

/// Split every selected cell into a top and a bottom half.
pub fn split_table_cell_vertically(table: &mut Table) -> bool {
    let Some(co) = get_selected_cells(table) else {
        return false;
    };
    let update_heights = table.has_valid_heights();
    let selected_cols = co.first_col..=co.last_col;
    let spans_above_in_selection = |table: &Table, row: usize| {
        selected_cols
            .clone()
            .all(|c| table.cell(row, c).is_some_and(|cell| cell.span_above))
    };

    for row in (co.first_row..=co.last_row).rev() {
        if row > co.first_row && spans_above_in_selection(&*table, row) {
            continue;
        }

        if spans_above_in_selection(&*table, row + 1) {
            for c in selected_cols.clone() {
                table.rows[row].cells[c].invalidate();
                table.rows[row + 1].cells[c].span_above = false;
                table.rows[row + 1].cells[c].invalidate();
            }
            table.rows[row].invalidate();
            table.rows[row + 1].invalidate();
            tracing::debug!(row, "ungrouped row");
            continue;
        }

        let original_row = &mut table.rows[row];
        original_row.invalidate();
        let cells: Vec<TableCell> = original_row
            .cells
            .iter_mut()
            .enumerate()
            .map(|(c, original)| {
                original.invalidate();
                let mut half = original.clone_shape();
                if selected_cols.contains(&c) {
                    half.span_above = false;
                    half.is_selected = original.is_selected;
                } else if original.span_left {
                    half.span_above = false;
                } else {
                    half.span_above = true;
                    half.span_left = false;
                }
                half
            })
            .collect();
        let new_row = TableRow {
            cells,
            format: original_row.format.clone(),
            cached_element: None,
        };
        table.rows.insert(row + 1, new_row);
        if update_heights {
            let height = (table.heights[row] / 2.0).max(MIN_CELL_HEIGHT);
            table.heights[row] = height;
            table.heights.insert(row + 1, height);
        }
        tracing::debug!(row, "split row");
    }
    true
}
