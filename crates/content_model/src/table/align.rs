// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use strum_macros::{Display, EnumString};

use super::selected_cells::get_selected_cells;
use crate::model::{CachedNode, Table};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
pub enum TableAlignment {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
pub enum TableCellAlignment {
    Left,
    Center,
    Right,
    Top,
    Middle,
    Bottom,
}

impl TableCellAlignment {
    /// The format key and value this alignment writes on a cell.
    fn property(self) -> (&'static str, &'static str) {
        match self {
            Self::Left => ("textAlign", "start"),
            Self::Center => ("textAlign", "center"),
            Self::Right => ("textAlign", "end"),
            Self::Top => ("verticalAlign", "top"),
            Self::Middle => ("verticalAlign", "middle"),
            Self::Bottom => ("verticalAlign", "bottom"),
        }
    }
}

/// Position the whole table with its horizontal margins.
pub fn align_table(table: &mut Table, alignment: TableAlignment) {
    let (left, right) = match alignment {
        TableAlignment::Left => ("", "auto"),
        TableAlignment::Center => ("auto", "auto"),
        TableAlignment::Right => ("auto", ""),
    };
    table.format.set("marginLeft", left);
    table.format.set("marginRight", right);
    table.invalidate();
    tracing::debug!(?alignment, "aligned table");
}

/// Align the content of every cell of the selection box.
pub fn align_table_cell(table: &mut Table, alignment: TableCellAlignment) -> bool {
    let Some(co) = get_selected_cells(table) else {
        return false;
    };
    let (key, value) = alignment.property();
    for row in &mut table.rows[co.first_row..=co.last_row] {
        for cell in row.cells.iter_mut().skip(co.first_col).take(co.column_count()) {
            cell.format.set(key, value);
            cell.invalidate();
        }
    }
    tracing::debug!(?alignment, ?co, "aligned cells");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::test_utils::{cached_table, invalidated_cells, select};

    #[test]
    fn table_alignment_uses_margins() {
        let mut table = cached_table(1, 1);

        align_table(&mut table, TableAlignment::Right);
        assert_eq!(table.format.get("marginLeft"), Some("auto"));
        assert_eq!(table.format.get("marginRight"), Some(""));
        assert!(table.cached_element().is_none());

        align_table(&mut table, TableAlignment::Center);
        assert_eq!(table.format.get("marginLeft"), Some("auto"));
        assert_eq!(table.format.get("marginRight"), Some("auto"));

        align_table(&mut table, TableAlignment::Left);
        assert_eq!(table.format.get("marginLeft"), Some(""));
        assert_eq!(table.format.get("marginRight"), Some("auto"));
    }

    #[test]
    fn cell_alignment_touches_selection_box_only() {
        let mut table = cached_table(3, 3);
        select(&mut table, &[(0, 1), (1, 2)]);

        assert!(align_table_cell(&mut table, TableCellAlignment::Middle));

        assert_eq!(invalidated_cells(&table), vec![(0, 1), (0, 2), (1, 1), (1, 2)]);
        assert_eq!(table.rows[1].cells[1].format.get("verticalAlign"), Some("middle"));
        assert_eq!(table.rows[0].cells[0].format.get("verticalAlign"), None);
    }

    #[test]
    fn horizontal_cell_alignment_uses_logical_values() {
        let mut table = cached_table(1, 1);
        select(&mut table, &[(0, 0)]);

        align_table_cell(&mut table, TableCellAlignment::Right);

        assert_eq!(table.rows[0].cells[0].format.get("textAlign"), Some("end"));
    }

    #[test]
    fn cell_alignment_without_selection_is_a_no_op() {
        let mut table = cached_table(2, 2);
        assert!(!align_table_cell(&mut table, TableCellAlignment::Top));
        assert!(invalidated_cells(&table).is_empty());
    }
}
