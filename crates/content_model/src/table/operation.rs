// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use strum_macros::{Display, EnumIter, EnumString};

use super::align::{align_table, align_table_cell, TableAlignment, TableCellAlignment};
use super::delete::{delete_table, delete_table_column, delete_table_row};
use super::insert::{insert_table_column, insert_table_row};
use super::merge::{merge_table_cells, merge_table_column, merge_table_row};
use super::normalize::normalize_table;
use super::split::{split_table_cell_horizontally, split_table_cell_vertically};
use super::{HorizontalDirection, VerticalDirection};
use crate::model::creators::{create_br, create_paragraph, create_selection_marker};
use crate::model::{Block, BlockGroup, CachedNode, Document, Table};
use crate::selection::{has_selection_in_table, resolve_group_mut, GroupStep};

/// Every table edit the editor exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum TableOperation {
    AlignLeft,
    AlignCenter,
    AlignRight,
    AlignCellLeft,
    AlignCellCenter,
    AlignCellRight,
    AlignCellTop,
    AlignCellMiddle,
    AlignCellBottom,
    InsertLeft,
    InsertRight,
    InsertAbove,
    InsertBelow,
    MergeLeft,
    MergeRight,
    MergeAbove,
    MergeBelow,
    MergeCells,
    SplitHorizontally,
    SplitVertically,
    DeleteColumn,
    DeleteRow,
    DeleteTable,
}

impl TableOperation {
    /// Whether the operation changes the shape of the grid, and so the
    /// table element itself.
    pub fn is_structural(self) -> bool {
        !matches!(
            self,
            Self::AlignLeft
                | Self::AlignCenter
                | Self::AlignRight
                | Self::AlignCellLeft
                | Self::AlignCellCenter
                | Self::AlignCellRight
                | Self::AlignCellTop
                | Self::AlignCellMiddle
                | Self::AlignCellBottom
        )
    }
}

/// Where a table sits: the path to its parent group and its index there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct TableLocation {
    pub group_path: Vec<GroupStep>,
    pub block_index: usize,
}

/// The first table in document order holding the selection. When that
/// table's selection is inside a nested table, the nested table wins.
pub(crate) fn locate_selected_table(group: &dyn BlockGroup) -> Option<TableLocation> {
    locate_in_group(group, &mut Vec::new())
}

fn locate_in_group(
    group: &dyn BlockGroup,
    steps: &mut Vec<GroupStep>,
) -> Option<TableLocation> {
    for (block_index, block) in group.blocks().iter().enumerate() {
        match block {
            Block::Table(table) if has_selection_in_table(table) => {
                for (row, table_row) in table.rows.iter().enumerate() {
                    for (col, cell) in table_row.cells.iter().enumerate() {
                        steps.push(GroupStep {
                            block_index,
                            cell: Some((row, col)),
                        });
                        let nested = locate_in_group(cell, steps);
                        steps.pop();
                        if nested.is_some() {
                            return nested;
                        }
                    }
                }
                return Some(TableLocation {
                    group_path: steps.clone(),
                    block_index,
                });
            }
            Block::BlockGroup(nested) => {
                steps.push(GroupStep {
                    block_index,
                    cell: None,
                });
                let found = locate_in_group(nested.as_block_group(), steps);
                steps.pop();
                if found.is_some() {
                    return found;
                }
            }
            _ => {}
        }
    }
    None
}

fn apply(table: &mut Table, operation: TableOperation) -> bool {
    use TableOperation::*;
    match operation {
        AlignLeft => {
            align_table(table, TableAlignment::Left);
            true
        }
        AlignCenter => {
            align_table(table, TableAlignment::Center);
            true
        }
        AlignRight => {
            align_table(table, TableAlignment::Right);
            true
        }
        AlignCellLeft => align_table_cell(table, TableCellAlignment::Left),
        AlignCellCenter => align_table_cell(table, TableCellAlignment::Center),
        AlignCellRight => align_table_cell(table, TableCellAlignment::Right),
        AlignCellTop => align_table_cell(table, TableCellAlignment::Top),
        AlignCellMiddle => align_table_cell(table, TableCellAlignment::Middle),
        AlignCellBottom => align_table_cell(table, TableCellAlignment::Bottom),
        InsertLeft => insert_table_column(table, HorizontalDirection::Left),
        InsertRight => insert_table_column(table, HorizontalDirection::Right),
        InsertAbove => insert_table_row(table, VerticalDirection::Above),
        InsertBelow => insert_table_row(table, VerticalDirection::Below),
        MergeLeft => merge_table_column(table, HorizontalDirection::Left),
        MergeRight => merge_table_column(table, HorizontalDirection::Right),
        MergeAbove => merge_table_row(table, VerticalDirection::Above),
        MergeBelow => merge_table_row(table, VerticalDirection::Below),
        MergeCells => merge_table_cells(table),
        SplitHorizontally => split_table_cell_horizontally(table),
        SplitVertically => split_table_cell_vertically(table),
        DeleteColumn => delete_table_column(table),
        DeleteRow => delete_table_row(table),
        // handled by edit_table, it needs the table's parent
        DeleteTable => false,
    }
}

/// Apply `operation` to the table holding the selection, then normalize that
/// table. A table left without cells is replaced by an empty paragraph
/// holding the selection.
///
/// Returns false when no table holds the selection or the operation did not
/// apply.
pub fn edit_table(model: &mut Document, operation: TableOperation) -> bool {
    if operation == TableOperation::DeleteTable {
        return delete_table(model);
    }
    let Some(location) = locate_selected_table(model) else {
        tracing::trace!(%operation, "edit table: no selected table");
        return false;
    };
    let format = model.format.clone();
    let Some(parent) = resolve_group_mut(model, &location.group_path) else {
        return false;
    };
    let Some(block) = parent.blocks_mut().get_mut(location.block_index) else {
        return false;
    };
    let Block::Table(table) = block else {
        return false;
    };

    let changed = apply(table, operation);
    if changed {
        if table.rows.is_empty() {
            let mut paragraph = create_paragraph(false, None);
            paragraph.segments.push(create_selection_marker(format.clone()));
            paragraph.segments.push(create_br(format));
            *block = Block::Paragraph(paragraph);
            tracing::debug!(%operation, "table left empty, removed");
        } else {
            normalize_table(table);
            if operation.is_structural() {
                table.invalidate();
            }
            tracing::debug!(%operation, "edited table");
        }
    }
    model.assert_invariants();
    changed
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use strum::IntoEnumIterator;

    use super::*;
    use crate::model::creators::{
        add_block, add_segment, create_content_model_document, create_quote, create_text,
    };
    use crate::model::{NestedGroup, ToTree};
    use crate::table::test_utils::{cached_table, select, shape};

    fn doc_with(table: Table) -> Document {
        let mut doc = create_content_model_document(None);
        add_segment(&mut doc, create_text("before", None));
        add_block(&mut doc, table.into());
        doc
    }

    fn table_of(doc: &Document, index: usize) -> &Table {
        doc.blocks[index].as_table().expect("a table")
    }

    #[test]
    fn operation_names_round_trip() {
        for operation in TableOperation::iter() {
            assert_eq!(operation.to_string().parse::<TableOperation>().unwrap(), operation);
        }
        assert_eq!(TableOperation::iter().count(), 23);
    }

    #[test]
    fn structural_edit_invalidates_table() {
        let mut table = cached_table(2, 2);
        select(&mut table, &[(0, 0)]);
        let mut doc = doc_with(table);

        assert!(edit_table(&mut doc, TableOperation::InsertRight));

        let table = table_of(&doc, 1);
        assert_eq!(table.column_count(), 3);
        assert!(table.cached_element().is_none());
    }

    #[test]
    fn cell_alignment_keeps_table_element() {
        let mut table = cached_table(2, 2);
        select(&mut table, &[(1, 1)]);
        let mut doc = doc_with(table);

        assert!(edit_table(&mut doc, TableOperation::AlignCellCenter));

        let table = table_of(&doc, 1);
        assert!(table.cached_element().is_some());
        assert_eq!(table.rows[1].cells[1].format.get("textAlign"), Some("center"));
    }

    #[test]
    fn merge_right_then_normalize_folds_column() {
        let mut table = cached_table(1, 2);
        select(&mut table, &[(0, 0)]);
        let mut doc = doc_with(table);

        assert!(edit_table(&mut doc, TableOperation::MergeRight));

        let table = table_of(&doc, 1);
        assert_eq!(shape(table), vec![".*"]);
        assert_eq!(table.widths, vec![200.0]);
    }

    #[test]
    fn merge_cells_keeps_content_of_every_cell() {
        let mut table = cached_table(1, 2);
        add_segment(&mut table.rows[0].cells[0], create_text("a", None));
        add_segment(&mut table.rows[0].cells[1], create_text("b", None));
        select(&mut table, &[(0, 0), (0, 1)]);
        let mut doc = create_content_model_document(None);
        add_block(&mut doc, table.into());

        assert!(edit_table(&mut doc, TableOperation::MergeCells));

        assert_eq!(
            doc.to_tree(),
            indoc! {
            r#"

            └>table
              └>tr
                └>td (selected)
                  ├>p (implicit)
                  │ └>"a"
                  └>p (implicit)
                    └>"b"
            "#}
        );
        assert_eq!(table_of(&doc, 0).widths, vec![200.0]);
    }

    #[test]
    fn deleting_every_row_replaces_table() {
        let mut table = cached_table(1, 2);
        select(&mut table, &[(0, 0)]);
        let mut doc = doc_with(table);

        assert!(edit_table(&mut doc, TableOperation::DeleteRow));

        let paragraph = doc.blocks[1].as_paragraph().expect("a paragraph");
        assert!(paragraph.segments[0].is_selection_marker());
        assert_eq!(paragraph.segments.len(), 2);
    }

    #[test]
    fn nested_table_is_preferred() {
        let mut inner = cached_table(1, 1);
        select(&mut inner, &[(0, 0)]);
        let mut outer = cached_table(1, 1);
        add_block(&mut outer.rows[0].cells[0], inner.into());
        let mut doc = create_content_model_document(None);
        let mut quote = create_quote(None);
        add_block(&mut quote, outer.into());
        add_block(&mut doc, quote.into());

        assert!(edit_table(&mut doc, TableOperation::InsertBelow));

        let Block::BlockGroup(NestedGroup::Quote(quote)) = &doc.blocks[0] else {
            panic!("expected a quote");
        };
        let outer = quote.blocks[0].as_table().unwrap();
        let inner = outer.rows[0].cells[0].blocks[0].as_table().unwrap();
        assert_eq!(outer.row_count(), 1);
        assert_eq!(inner.row_count(), 2);
    }

    #[test]
    fn no_selection_is_a_no_op() {
        let mut doc = doc_with(cached_table(2, 2));
        let before = doc.clone();

        assert!(!edit_table(&mut doc, TableOperation::DeleteColumn));
        assert!(!edit_table(&mut doc, TableOperation::DeleteTable));
        assert_eq!(doc, before);
    }
}
