// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use crate::model::{Block, BlockGroup, Segment, Table, TableCell};

pub fn has_selection_in_segment(segment: &Segment) -> bool {
    segment.is_selected()
}

pub fn has_selection_in_block(block: &Block) -> bool {
    match block {
        Block::Paragraph(p) => p.segments.iter().any(has_selection_in_segment),
        Block::Table(t) => has_selection_in_table(t),
        Block::BlockGroup(group) => {
            has_selection_in_block_group(group.as_block_group())
        }
        Block::Divider(d) => d.is_selected,
        Block::Entity(e) => e.is_selected,
    }
}

pub fn has_selection_in_block_group(group: &dyn BlockGroup) -> bool {
    group.blocks().iter().any(has_selection_in_block)
}

/// A cell is selected when it is flagged as a whole or when anything inside
/// it is selected.
pub fn has_selection_in_table_cell(cell: &TableCell) -> bool {
    cell.is_selected || has_selection_in_block_group(cell)
}

pub fn has_selection_in_table(table: &Table) -> bool {
    table
        .rows
        .iter()
        .any(|row| row.cells.iter().any(has_selection_in_table_cell))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::creators::*;
    use crate::model::Text;

    #[test]
    fn selected_text_in_nested_cell_is_found() {
        let mut table = create_table(2, 2, None);
        add_segment(
            &mut table.rows[1].cells[0],
            Segment::Text(Text {
                text: String::from("x"),
                is_selected: true,
                ..Text::default()
            }),
        );
        assert!(has_selection_in_table_cell(&table.rows[1].cells[0]));
        assert!(!has_selection_in_table_cell(&table.rows[0].cells[0]));
        assert!(has_selection_in_block(&Block::Table(table)));
    }

    #[test]
    fn flagged_cell_counts_without_content() {
        let mut cell = create_table_cell(false, false, false, None);
        assert!(!has_selection_in_table_cell(&cell));
        cell.is_selected = true;
        assert!(has_selection_in_table_cell(&cell));
    }

    #[test]
    fn marker_counts_as_selection() {
        let mut paragraph = create_paragraph(false, None);
        paragraph.segments.push(create_text("a", None));
        assert!(!has_selection_in_block(&paragraph.clone().into()));
        paragraph.segments.push(create_selection_marker(None));
        assert!(has_selection_in_block(&paragraph.into()));
    }
}
