// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Span queries over the dense cell grid.

use crate::model::TableRow;

/// Number of consecutive `span_above` cells directly below `(row, col)`.
pub(crate) fn span_run_below(rows: &[TableRow], row: usize, col: usize) -> usize {
    rows.iter()
        .skip(row + 1)
        .take_while(|r| r.cells.get(col).is_some_and(|c| c.span_above))
        .count()
}

/// Number of consecutive `span_left` cells directly right of `(row, col)`.
pub(crate) fn span_run_right(rows: &[TableRow], row: usize, col: usize) -> usize {
    rows.get(row).map_or(0, |r| {
        r.cells
            .iter()
            .skip(col + 1)
            .take_while(|c| c.span_left)
            .count()
    })
}

/// True when `values` holds a single distinct value (or nothing).
fn all_equal(mut values: impl Iterator<Item = usize>) -> bool {
    match values.next() {
        Some(first) => values.all(|v| v == first),
        None => true,
    }
}

/// Whether the region `first_row..=last_row` x `first_col..=last_col` can
/// become a single merged cell without producing a jagged boundary:
///
/// * no cell of the top edge continues a span from above;
/// * no cell of the left edge continues a span from the left;
/// * every column of the region has the same run of `span_above` cells below
///   the region;
/// * every row of the region has the same run of `span_left` cells right of
///   the region.
///
/// Out of range coordinates make the check fail rather than panic.
pub fn can_merge_cells(
    rows: &[TableRow],
    first_row: usize,
    first_col: usize,
    last_row: usize,
    last_col: usize,
) -> bool {
    if first_row > last_row
        || first_col > last_col
        || last_row >= rows.len()
        || rows[first_row..=last_row]
            .iter()
            .any(|r| last_col >= r.cells.len())
    {
        return false;
    }

    let no_span_above = rows[first_row].cells[first_col..=last_col]
        .iter()
        .all(|c| !c.span_above);
    let no_span_left = rows[first_row..=last_row]
        .iter()
        .all(|r| !r.cells[first_col].span_left);
    let uniform_below = all_equal(
        (first_col..=last_col).map(|col| span_run_below(rows, last_row, col)),
    );
    let uniform_right = all_equal(
        (first_row..=last_row).map(|row| span_run_right(rows, row, last_col)),
    );

    no_span_above && no_span_left && uniform_below && uniform_right
}
