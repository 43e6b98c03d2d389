// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use super::selected_cells::get_selected_cells;
use super::{HorizontalDirection, VerticalDirection};
use crate::model::{CachedNode, Table, TableRow};

/// Insert as many empty columns as the selection is wide, left or right of
/// it. New cells copy the shape of the selection's boundary column, so a
/// column inserted inside a merged cell widens it.
pub fn insert_table_column(table: &mut Table, direction: HorizontalDirection) -> bool {
    let Some(co) = get_selected_cells(table) else {
        return false;
    };
    let (source, at) = match direction {
        HorizontalDirection::Left => (co.first_col, co.first_col),
        HorizontalDirection::Right => (co.last_col, co.last_col + 1),
    };
    let update_widths = table.has_valid_widths();

    for _ in 0..co.column_count() {
        for row in &mut table.rows {
            if let Some(cell) = row.cells.get(source).map(|c| c.clone_shape()) {
                row.cells.insert(at.min(row.cells.len()), cell);
                row.invalidate();
            }
        }
        if update_widths {
            let width = table.widths[source];
            table.widths.insert(at, width);
        }
    }
    tracing::debug!(?direction, count = co.column_count(), at, "inserted columns");
    true
}

/// Insert as many empty rows as the selection is tall, above or below it.
/// New rows copy the shape of the selection's boundary row.
pub fn insert_table_row(table: &mut Table, direction: VerticalDirection) -> bool {
    let Some(co) = get_selected_cells(table) else {
        return false;
    };
    let (source, at) = match direction {
        VerticalDirection::Above => (co.first_row, co.first_row),
        VerticalDirection::Below => (co.last_row, co.last_row + 1),
    };
    let update_heights = table.has_valid_heights();

    for _ in 0..co.row_count() {
        let Some(source_row) = table.rows.get(source) else {
            break;
        };
        let row = TableRow {
            cells: source_row.cells.iter().map(|c| c.clone_shape()).collect(),
            format: source_row.format.clone(),
            cached_element: None,
        };
        table.rows.insert(at, row);
        if update_heights {
            let height = table.heights[source];
            table.heights.insert(at, height);
        }
    }
    tracing::debug!(?direction, count = co.row_count(), at, "inserted rows");
    true
}
