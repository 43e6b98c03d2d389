// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use super::operation::locate_selected_table;
use super::selected_cells::get_selected_cells;
use crate::model::creators::{add_segment, create_br, create_paragraph, create_selection_marker};
use crate::model::{Block, CachedNode, Document, Table};
use crate::selection::{clear_selection, resolve_group_mut};

/// Remove every column of the selection.
///
/// The cell right after the removed range only stays a horizontal
/// continuation if the first removed cell of its row was one too, otherwise
/// it becomes the owner of what is left of its merged cell. A selection
/// marker is put in the cell that ends up at the selection's top left corner.
/// Removing every column leaves a table with no rows.
pub fn delete_table_column(table: &mut Table) -> bool {
    let Some(co) = get_selected_cells(table) else {
        return false;
    };
    let update_widths = table.has_valid_widths();

    for row in &mut table.rows {
        let first_span_left = row.cells.get(co.first_col).is_some_and(|c| c.span_left);
        if let Some(next) = row.cells.get_mut(co.last_col + 1) {
            if next.span_left && !first_span_left {
                next.span_left = false;
                next.invalidate();
            }
        }
        let end = (co.last_col + 1).min(row.cells.len());
        if co.first_col < end {
            row.cells.drain(co.first_col..end);
        }
        row.invalidate();
    }
    if update_widths {
        let end = (co.last_col + 1).min(table.widths.len());
        if co.first_col < end {
            table.widths.drain(co.first_col..end);
        }
    }
    if table.column_count() == 0 {
        table.rows.clear();
        table.widths.clear();
        table.heights.clear();
    }
    tracing::debug!(?co, "deleted columns");
    put_marker_near(table, co.first_row, co.first_col);
    true
}

/// Remove every row of the selection. The vertical counterpart of
/// [`delete_table_column`].
pub fn delete_table_row(table: &mut Table) -> bool {
    let Some(co) = get_selected_cells(table) else {
        return false;
    };
    let update_heights = table.has_valid_heights();

    if let Some(next_row) = co.last_row.checked_add(1).filter(|&r| r < table.rows.len()) {
        let first_spans: Vec<bool> = table.rows[co.first_row]
            .cells
            .iter()
            .map(|c| c.span_above)
            .collect();
        let row = &mut table.rows[next_row];
        let mut changed = false;
        for (col, cell) in row.cells.iter_mut().enumerate() {
            let first_span_above = first_spans.get(col).copied().unwrap_or(false);
            if cell.span_above && !first_span_above {
                cell.span_above = false;
                cell.invalidate();
                changed = true;
            }
        }
        if changed {
            row.invalidate();
        }
    }
    table.rows.drain(co.first_row..=co.last_row);
    if update_heights {
        table.heights.drain(co.first_row..=co.last_row);
    }
    if table.rows.is_empty() {
        table.widths.clear();
        table.heights.clear();
    }
    tracing::debug!(?co, "deleted rows");
    put_marker_near(table, co.first_row, co.first_col);
    true
}

/// Put a selection marker in the cell at `(row, col)`, clamped to the grid.
fn put_marker_near(table: &mut Table, row: usize, col: usize) {
    let row = row.min(table.row_count().saturating_sub(1));
    let col = col.min(table.column_count().saturating_sub(1));
    if let Some(cell) = table.cell_mut(row, col) {
        add_segment(cell, create_selection_marker(None));
        cell.invalidate();
    }
}

/// Remove the table holding the selection and put a paragraph with a
/// collapsed selection where it stood.
pub fn delete_table(model: &mut Document) -> bool {
    let Some(location) = locate_selected_table(model) else {
        tracing::trace!("delete table: no selected table");
        return false;
    };
    let format = model.format.clone();
    clear_selection(model);
    let Some(parent) = resolve_group_mut(model, &location.group_path) else {
        return false;
    };
    let mut paragraph = create_paragraph(false, None);
    paragraph.segments.push(create_selection_marker(format.clone()));
    paragraph.segments.push(create_br(format));
    if let Some(block) = parent.blocks_mut().get_mut(location.block_index) {
        *block = Block::Paragraph(paragraph);
    }
    tracing::debug!(?location, "deleted table");
    model.assert_invariants();
    true
}
