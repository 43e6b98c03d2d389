// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use super::grid::can_merge_cells;
use super::selected_cells::get_selected_cells;
use super::{HorizontalDirection, VerticalDirection};
use crate::model::{CachedNode, Table};

/// Merge the selected box into one cell. Returns false when nothing is
/// selected or the box cuts through an existing merged cell.
pub fn merge_table_cells(table: &mut Table) -> bool {
    let Some(co) = get_selected_cells(table) else {
        tracing::trace!("merge cells: no selection");
        return false;
    };
    if !can_merge_cells(&table.rows, co.first_row, co.first_col, co.last_row, co.last_col) {
        tracing::trace!(?co, "merge cells: region is not mergeable");
        return false;
    }

    for row in co.first_row..=co.last_row {
        let table_row = &mut table.rows[row];
        for col in co.first_col..=co.last_col {
            let cell = &mut table_row.cells[col];
            cell.span_left = col > co.first_col;
            cell.span_above = row > co.first_row;
            cell.invalidate();
        }
        table_row.invalidate();
    }
    tracing::debug!(?co, "merged cells");
    true
}

/// Merge the selected rows with the column just left or right of the
/// selection, row by row where the two cells either side of the boundary
/// can merge. The owner of each merged cell ends up selected.
pub fn merge_table_column(table: &mut Table, direction: HorizontalDirection) -> bool {
    let Some(co) = get_selected_cells(table) else {
        return false;
    };
    let merging_col = match direction {
        HorizontalDirection::Left => co.first_col,
        HorizontalDirection::Right => co.last_col + 1,
    };
    if merging_col == 0 || merging_col >= table.column_count() {
        tracing::trace!(merging_col, "merge column: nothing to merge with");
        return false;
    }

    let mut merged = false;
    for row in co.first_row..=co.last_row {
        if !can_merge_cells(&table.rows, row, merging_col - 1, row, merging_col) {
            continue;
        }
        let Some(table_row) = table.rows.get_mut(row) else {
            continue;
        };
        table_row.cells[merging_col].span_left = true;

        let mut owner = merging_col;
        while table_row.cells[owner].span_left && owner > 0 {
            table_row.cells[owner].invalidate();
            owner -= 1;
        }
        let owner_cell = &mut table_row.cells[owner];
        owner_cell.is_selected = true;
        owner_cell.invalidate();
        table_row.invalidate();
        merged = true;
    }
    tracing::debug!(?direction, merging_col, merged, "merge column");
    merged
}

/// Merge the selected columns with the row just above or below the
/// selection, column by column where the two cells either side of the
/// boundary can merge. The owner of each merged cell ends up selected.
pub fn merge_table_row(table: &mut Table, direction: VerticalDirection) -> bool {
    let Some(co) = get_selected_cells(table) else {
        return false;
    };
    let merging_row = match direction {
        VerticalDirection::Above => co.first_row,
        VerticalDirection::Below => co.last_row + 1,
    };
    if merging_row == 0 || merging_row >= table.row_count() {
        tracing::trace!(merging_row, "merge row: nothing to merge with");
        return false;
    }

    let mut merged = false;
    for col in co.first_col..=co.last_col {
        if !can_merge_cells(&table.rows, merging_row - 1, col, merging_row, col) {
            continue;
        }
        table.rows[merging_row].cells[col].span_above = true;

        let mut owner = merging_row;
        while owner > 0 && table.rows[owner].cells[col].span_above {
            table.rows[owner].cells[col].invalidate();
            table.rows[owner].invalidate();
            owner -= 1;
        }
        let owner_row = &mut table.rows[owner];
        owner_row.cells[col].is_selected = true;
        owner_row.cells[col].invalidate();
        owner_row.invalidate();
        merged = true;
    }
    tracing::debug!(?direction, merging_row, merged, "merge row");
    merged
}
