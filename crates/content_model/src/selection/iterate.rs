// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Read-only walks over the selected content of a model.

use crate::model::{Block, BlockGroup, Paragraph, Segment};

/// A paragraph holding selected content.
pub struct SelectedParagraphContent<'a> {
    pub paragraph: &'a Paragraph,
    /// Ancestor block groups, innermost first.
    pub path: Vec<&'a dyn BlockGroup>,
    /// Indices of the selected segments, in order.
    pub segment_indices: Vec<usize>,
    /// The paragraph sits in a table cell selected as a whole.
    pub in_selected_cell: bool,
}

#[derive(Clone, Copy, Default)]
struct WalkContext {
    in_selected_cell: bool,
}

impl WalkContext {
    fn entering_cell(&self, cell_selected: bool) -> Self {
        Self {
            in_selected_cell: self.in_selected_cell || cell_selected,
        }
    }
}

/// Call `callback` for every paragraph under `group` that holds selected
/// content, in document order. Every segment of a paragraph inside a selected
/// table cell counts as selected.
pub fn iterate_selections<'a>(
    group: &'a dyn BlockGroup,
    callback: &mut dyn FnMut(SelectedParagraphContent<'a>),
) {
    walk(group, &mut Vec::new(), WalkContext::default(), callback);
}

fn walk<'a>(
    group: &'a dyn BlockGroup,
    ancestors: &mut Vec<&'a dyn BlockGroup>,
    context: WalkContext,
    callback: &mut dyn FnMut(SelectedParagraphContent<'a>),
) {
    ancestors.push(group);
    for block in group.blocks() {
        match block {
            Block::Paragraph(paragraph) => {
                let segment_indices: Vec<usize> = paragraph
                    .segments
                    .iter()
                    .enumerate()
                    .filter(|(_, s)| context.in_selected_cell || s.is_selected())
                    .map(|(i, _)| i)
                    .collect();
                if !segment_indices.is_empty() {
                    callback(SelectedParagraphContent {
                        paragraph,
                        path: ancestors.iter().rev().copied().collect(),
                        segment_indices,
                        in_selected_cell: context.in_selected_cell,
                    });
                }
            }
            Block::Table(table) => {
                for row in &table.rows {
                    for cell in &row.cells {
                        walk(
                            cell,
                            ancestors,
                            context.entering_cell(cell.is_selected),
                            callback,
                        );
                    }
                }
            }
            Block::BlockGroup(g) => {
                walk(g.as_block_group(), ancestors, context, callback)
            }
            Block::Divider(_) | Block::Entity(_) => {}
        }
    }
    ancestors.pop();
}

/// A selected segment with the paragraph holding it.
pub struct SelectedSegment<'a> {
    pub segment: &'a Segment,
    pub paragraph: &'a Paragraph,
    pub path: Vec<&'a dyn BlockGroup>,
}

/// Every selected segment under `group`, in document order.
pub fn get_selected_segments(group: &dyn BlockGroup) -> Vec<SelectedSegment<'_>> {
    let mut result = Vec::new();
    iterate_selections(group, &mut |content| {
        for &i in &content.segment_indices {
            result.push(SelectedSegment {
                segment: &content.paragraph.segments[i],
                paragraph: content.paragraph,
                path: content.path.clone(),
            });
        }
    });
    result
}
