// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Index paths into the tree, and the mutations that move the selection
//! around: finding the marker, clearing, collapsing.

use crate::model::creators::{add_segment, create_selection_marker};
use crate::model::{Block, BlockGroup, CachedNode, Format, Paragraph, Segment};

/// One hop from a block group into a child block group.
///
/// `cell` is `None` when `blocks[block_index]` is itself a nested group, and
/// the `(row, col)` of the cell when it is a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroupStep {
    pub block_index: usize,
    pub cell: Option<(usize, usize)>,
}

/// Position of a segment: the group holding the paragraph, the paragraph's
/// index in that group, and the segment's index in the paragraph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InsertPoint {
    pub group_path: Vec<GroupStep>,
    pub block_index: usize,
    pub segment_index: usize,
}

pub fn resolve_group<'a>(
    root: &'a dyn BlockGroup,
    steps: &[GroupStep],
) -> Option<&'a dyn BlockGroup> {
    let Some((first, rest)) = steps.split_first() else {
        return Some(root);
    };
    let child: &dyn BlockGroup =
        match (root.blocks().get(first.block_index)?, first.cell) {
            (Block::BlockGroup(g), None) => g.as_block_group(),
            (Block::Table(t), Some((row, col))) => t.cell(row, col)?,
            _ => return None,
        };
    resolve_group(child, rest)
}

pub fn resolve_group_mut<'a>(
    root: &'a mut dyn BlockGroup,
    steps: &[GroupStep],
) -> Option<&'a mut dyn BlockGroup> {
    let Some((first, rest)) = steps.split_first() else {
        return Some(root);
    };
    let child: &mut dyn BlockGroup =
        match (root.blocks_mut().get_mut(first.block_index)?, first.cell) {
            (Block::BlockGroup(g), None) => g.as_block_group_mut(),
            (Block::Table(t), Some((row, col))) => t.cell_mut(row, col)?,
            _ => return None,
        };
    resolve_group_mut(child, rest)
}

impl InsertPoint {
    pub fn paragraph<'a>(&self, root: &'a dyn BlockGroup) -> Option<&'a Paragraph> {
        resolve_group(root, &self.group_path)?
            .blocks()
            .get(self.block_index)?
            .as_paragraph()
    }

    pub fn paragraph_mut<'a>(
        &self,
        root: &'a mut dyn BlockGroup,
    ) -> Option<&'a mut Paragraph> {
        resolve_group_mut(root, &self.group_path)?
            .blocks_mut()
            .get_mut(self.block_index)?
            .as_paragraph_mut()
    }

    pub fn segment<'a>(&self, root: &'a dyn BlockGroup) -> Option<&'a Segment> {
        self.paragraph(root)?.segments.get(self.segment_index)
    }
}

/// Where a selection starts, in document order.
enum SelectionStart {
    Segment(InsertPoint),
    /// A selected table cell that holds no paragraph to put a marker in.
    EmptyCell(Vec<GroupStep>),
}

/// Position of the first selection marker in document order.
pub fn find_selection_marker(group: &dyn BlockGroup) -> Option<InsertPoint> {
    find_first(group, &mut Vec::new(), false, &|segment, _| {
        segment.is_selection_marker()
    })
    .and_then(|start| match start {
        SelectionStart::Segment(point) => Some(point),
        SelectionStart::EmptyCell(_) => None,
    })
}

fn find_first_selected(group: &dyn BlockGroup) -> Option<SelectionStart> {
    find_first(group, &mut Vec::new(), false, &|segment, covered| {
        covered || segment.is_selected()
    })
}

fn find_first(
    group: &dyn BlockGroup,
    steps: &mut Vec<GroupStep>,
    covered: bool,
    accept: &dyn Fn(&Segment, bool) -> bool,
) -> Option<SelectionStart> {
    for (block_index, block) in group.blocks().iter().enumerate() {
        let found = match block {
            Block::Paragraph(p) => {
                p.segments.iter().position(|s| accept(s, covered)).map(
                    |segment_index| {
                        SelectionStart::Segment(InsertPoint {
                            group_path: steps.clone(),
                            block_index,
                            segment_index,
                        })
                    },
                )
            }
            Block::Table(table) => {
                let mut found = None;
                'rows: for (row, table_row) in table.rows.iter().enumerate() {
                    for (col, cell) in table_row.cells.iter().enumerate() {
                        steps.push(GroupStep {
                            block_index,
                            cell: Some((row, col)),
                        });
                        let cell_covered = covered || cell.is_selected;
                        found = find_first(cell, steps, cell_covered, accept);
                        if found.is_none()
                            && cell_covered
                            && !cell.blocks.iter().any(|b| {
                                matches!(b, Block::Paragraph(p) if !p.segments.is_empty())
                            })
                        {
                            found = Some(SelectionStart::EmptyCell(steps.clone()));
                        }
                        steps.pop();
                        if found.is_some() {
                            break 'rows;
                        }
                    }
                }
                found
            }
            Block::BlockGroup(g) => {
                steps.push(GroupStep {
                    block_index,
                    cell: None,
                });
                let found = find_first(g.as_block_group(), steps, covered, accept);
                steps.pop();
                found
            }
            Block::Divider(_) | Block::Entity(_) => None,
        };
        if found.is_some() {
            return found;
        }
    }
    None
}

/// Remove every selection marker and reset every selection flag under
/// `group`. Table cells whose flag changes lose their cached element.
pub fn clear_selection(group: &mut dyn BlockGroup) {
    for block in group.blocks_mut() {
        match block {
            Block::Paragraph(p) => {
                p.segments.retain(|s| !s.is_selection_marker());
                for segment in &mut p.segments {
                    segment.set_selected(false);
                }
            }
            Block::Table(table) => {
                for row in &mut table.rows {
                    for cell in &mut row.cells {
                        if cell.is_selected {
                            cell.is_selected = false;
                            cell.invalidate();
                        }
                        clear_selection(cell);
                    }
                }
            }
            Block::BlockGroup(g) => clear_selection(g.as_block_group_mut()),
            Block::Divider(d) => d.is_selected = false,
            Block::Entity(e) => e.is_selected = false,
        }
    }
}

/// Turn the current selection, collapsed or not, into a single marker placed
/// where the selection starts. Returns the marker's position, or `None` when
/// nothing is selected.
pub fn collapse_selection_to_start(
    group: &mut dyn BlockGroup,
) -> Option<InsertPoint> {
    match find_first_selected(group)? {
        SelectionStart::Segment(mut point) => {
            let (format, markers_before) = {
                let paragraph = point.paragraph(group)?;
                let format = paragraph
                    .segments
                    .get(point.segment_index)
                    .map(|s| s.format().clone())
                    .unwrap_or_default();
                let markers_before = paragraph.segments[..point.segment_index]
                    .iter()
                    .filter(|s| s.is_selection_marker())
                    .count();
                (format, markers_before)
            };
            clear_selection(group);
            point.segment_index -= markers_before;
            let paragraph = point.paragraph_mut(group)?;
            let index = point.segment_index.min(paragraph.segments.len());
            paragraph
                .segments
                .insert(index, create_selection_marker(Some(format)));
            point.segment_index = index;
            Some(point)
        }
        SelectionStart::EmptyCell(steps) => {
            clear_selection(group);
            let cell = resolve_group_mut(group, &steps)?;
            add_segment(cell, create_selection_marker(None::<Format>));
            let block_index = cell.blocks().len() - 1;
            let segment_index = cell.blocks()[block_index]
                .as_paragraph()
                .map_or(0, |p| p.segments.len() - 1);
            Some(InsertPoint {
                group_path: steps,
                block_index,
                segment_index,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::creators::*;
    use crate::model::{Document, Text, ToTree};
    use indoc::indoc;

    fn selected_text(text: &str) -> Segment {
        Segment::Text(Text {
            text: text.to_owned(),
            is_selected: true,
            ..Text::default()
        })
    }

    #[test]
    fn finds_marker_inside_table_cell() {
        let mut doc = create_content_model_document(None);
        add_segment(&mut doc, create_text("a", None));
        let mut table = create_table(2, 2, None);
        add_segment(&mut table.rows[1].cells[1], create_text("b", None));
        add_segment(&mut table.rows[1].cells[1], create_selection_marker(None));
        add_block(&mut doc, table.into());

        let point = find_selection_marker(&doc).unwrap();
        assert_eq!(
            point.group_path,
            vec![GroupStep {
                block_index: 1,
                cell: Some((1, 1))
            }]
        );
        assert_eq!(point.block_index, 0);
        assert_eq!(point.segment_index, 1);
        assert!(point.segment(&doc).unwrap().is_selection_marker());
    }

    #[test]
    fn collapse_expanded_selection_puts_marker_before_first_selected() {
        let mut doc: Document = create_content_model_document(None);
        add_segment(&mut doc, create_text("a", None));
        add_segment(&mut doc, selected_text("b"));
        add_block(&mut doc, create_paragraph(false, None).into());
        add_segment(&mut doc, selected_text("c"));

        let point = collapse_selection_to_start(&mut doc).unwrap();

        assert_eq!(point.segment_index, 1);
        assert_eq!(
            doc.to_tree(),
            indoc! {
            r#"

            ├>p (implicit)
            │ ├>"a"
            │ ├>|
            │ └>"b"
            └>p
              └>"c"
            "#}
        );
    }

    #[test]
    fn collapse_keeps_existing_collapsed_marker_position() {
        let mut doc = create_content_model_document(None);
        add_segment(&mut doc, create_text("a", None));
        add_segment(&mut doc, create_selection_marker(None));
        add_segment(&mut doc, create_text("b", None));

        let point = collapse_selection_to_start(&mut doc).unwrap();

        assert_eq!(point.segment_index, 1);
        assert_eq!(doc.blocks[0].as_paragraph().unwrap().marker_count(), 1);
    }

    #[test]
    fn collapse_into_empty_selected_cell_adds_paragraph() {
        let mut doc = create_content_model_document(None);
        let mut table = create_table(1, 2, None);
        table.rows[0].cells[1].is_selected = true;
        add_block(&mut doc, table.into());

        let point = collapse_selection_to_start(&mut doc).unwrap();

        assert!(point.segment(&doc).unwrap().is_selection_marker());
        let table = doc.blocks[0].as_table().unwrap();
        assert!(!table.rows[0].cells[1].is_selected);
    }

    #[test]
    fn collapse_without_selection_returns_none() {
        let mut doc = create_content_model_document(None);
        add_segment(&mut doc, create_text("a", None));
        assert!(collapse_selection_to_start(&mut doc).is_none());
    }
}
