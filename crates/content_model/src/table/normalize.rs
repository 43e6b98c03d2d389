// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use super::MIN_CELL_WIDTH;
use crate::model::{Block, CachedNode, Segment, Table, TableCell};

/// Bring a table back to a canonical grid after an edit:
///
/// * the first row cannot continue a cell from above, nor the first column a
///   cell from the left;
/// * a column made only of horizontal continuations is removed, its width
///   added to the column before it and its content moved into the cells
///   before it, and likewise for rows and heights;
/// * known widths are at least [`MIN_CELL_WIDTH`].
pub fn normalize_table(table: &mut Table) {
    let valid_widths = table.has_valid_widths();
    let valid_heights = table.has_valid_heights();

    if let Some(first_row) = table.rows.first_mut() {
        for cell in first_row.cells.iter_mut().filter(|c| c.span_above) {
            cell.span_above = false;
            cell.invalidate();
        }
    }
    for row in &mut table.rows {
        if let Some(cell) = row.cells.first_mut().filter(|c| c.span_left) {
            cell.span_left = false;
            cell.invalidate();
        }
    }

    let mut removed = false;
    for col in (1..table.column_count()).rev() {
        let continuation = table
            .rows
            .iter()
            .all(|row| row.cells.get(col).is_some_and(|c| c.span_left));
        if !continuation {
            continue;
        }
        for row in &mut table.rows {
            let cell = row.cells.remove(col);
            if let Some(owner) = row.cells.get_mut(col - 1) {
                move_content(cell, owner);
            }
            row.invalidate();
        }
        if valid_widths {
            let width = table.widths.remove(col);
            table.widths[col - 1] += width;
        }
        tracing::trace!(col, "removed continuation column");
        removed = true;
    }
    for row in (1..table.row_count()).rev() {
        if !table.rows[row].cells.iter().all(|c| c.span_above) {
            continue;
        }
        let removed_row = table.rows.remove(row);
        let owner_row = &mut table.rows[row - 1];
        let mut moved = false;
        for (cell, owner) in removed_row.cells.into_iter().zip(&mut owner_row.cells) {
            moved |= move_content(cell, owner);
        }
        if moved {
            owner_row.invalidate();
        }
        if valid_heights {
            let height = table.heights.remove(row);
            table.heights[row - 1] += height;
        }
        tracing::trace!(row, "removed continuation row");
        removed = true;
    }
    let mut changed = removed;
    if valid_widths {
        for width in table.widths.iter_mut().filter(|w| **w < MIN_CELL_WIDTH) {
            *width = MIN_CELL_WIDTH;
            changed = true;
        }
    }
    if changed {
        table.invalidate();
    }
}

/// Append the blocks of a removed continuation cell to its owner, leaving out
/// paragraphs with nothing but line breaks. Returns whether anything moved.
fn move_content(continuation: TableCell, owner: &mut TableCell) -> bool {
    let before = owner.blocks.len();
    owner
        .blocks
        .extend(continuation.blocks.into_iter().filter(|block| !is_blank(block)));
    let moved = owner.blocks.len() != before;
    if moved {
        owner.invalidate();
    }
    moved
}

fn is_blank(block: &Block) -> bool {
    match block {
        Block::Paragraph(p) => p
            .segments
            .iter()
            .all(|s| s.is_empty() || matches!(s, Segment::Br(_))),
        _ => false,
    }
}
