// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Clean up a model after editing so equivalent content has one shape.

use crate::model::creators::create_br;
use crate::model::{Block, BlockGroup, CachedNode, NestedGroup, Paragraph, Segment};

const LINE_HEIGHT: &str = "lineHeight";

/// Normalize every paragraph under `group`:
///
/// * empty text segments are removed, then paragraphs left with no segments
///   (implicit paragraphs excepted);
/// * a paragraph holding nothing but a selection marker gets a line break,
///   so the caret has a line to sit on;
/// * adjacent text segments with the same format and selection state are
///   merged;
/// * a `lineHeight` shared by every segment moves to the paragraph.
///
/// List items and quotes left without blocks are removed. Nodes whose content
/// changes lose their cached element.
pub fn normalize_content_model(group: &mut dyn BlockGroup) {
    normalize_group(group);
}

/// Returns whether blocks were removed from `group`.
fn normalize_group(group: &mut dyn BlockGroup) -> bool {
    for block in group.blocks_mut().iter_mut() {
        match block {
            Block::Paragraph(paragraph) => {
                if normalize_paragraph(paragraph) {
                    paragraph.invalidate();
                }
            }
            Block::Table(table) => {
                for row in &mut table.rows {
                    for cell in &mut row.cells {
                        if normalize_group(cell) {
                            cell.invalidate();
                        }
                    }
                }
            }
            Block::BlockGroup(nested) => {
                normalize_group(nested.as_block_group_mut());
            }
            Block::Divider(_) | Block::Entity(_) => {}
        }
    }

    let blocks = group.blocks_mut();
    let before = blocks.len();
    blocks.retain(|block| match block {
        Block::Paragraph(p) => p.is_implicit || !p.segments.is_empty(),
        Block::BlockGroup(NestedGroup::ListItem(item)) => !item.blocks.is_empty(),
        Block::BlockGroup(NestedGroup::Quote(quote)) => !quote.blocks.is_empty(),
        Block::Table(_) | Block::Divider(_) | Block::Entity(_) => true,
    });
    let removed = before - blocks.len();
    if removed > 0 {
        tracing::trace!(removed, "removed empty blocks");
    }
    removed > 0
}

/// Returns whether the paragraph changed.
fn normalize_paragraph(paragraph: &mut Paragraph) -> bool {
    let segments = &mut paragraph.segments;
    let before = segments.len();
    segments.retain(|s| !s.is_empty());
    let mut changed = segments.len() != before;

    if !paragraph.is_implicit
        && !segments.is_empty()
        && segments.iter().all(Segment::is_selection_marker)
    {
        let format = segments.last().map(|s| s.format().clone());
        segments.push(create_br(format));
        changed = true;
    }

    changed |= hoist_line_height(paragraph);
    changed |= merge_adjacent_texts(&mut paragraph.segments);
    changed
}

fn hoist_line_height(paragraph: &mut Paragraph) -> bool {
    let Some(first) = paragraph.segments.first() else {
        return false;
    };
    let Some(line_height) = first.format().get(LINE_HEIGHT).map(str::to_owned) else {
        return false;
    };
    if !paragraph
        .segments
        .iter()
        .all(|s| s.format().get(LINE_HEIGHT) == Some(line_height.as_str()))
    {
        return false;
    }
    for segment in &mut paragraph.segments {
        segment.format_mut().remove(LINE_HEIGHT);
    }
    paragraph.format.set(LINE_HEIGHT, line_height);
    true
}

fn merge_adjacent_texts(segments: &mut Vec<Segment>) -> bool {
    let mut merged = false;
    let mut i = 0;
    while i + 1 < segments.len() {
        let can_merge = match (&segments[i], &segments[i + 1]) {
            (Segment::Text(a), Segment::Text(b)) => {
                a.format == b.format && a.is_selected == b.is_selected
            }
            _ => false,
        };
        if can_merge {
            let Segment::Text(next) = segments.remove(i + 1) else {
                unreachable!()
            };
            let Segment::Text(text) = &mut segments[i] else {
                unreachable!()
            };
            text.text.push_str(&next.text);
            merged = true;
        } else {
            i += 1;
        }
    }
    merged
}
