// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Inserting entities, inline or as blocks, at the edges of the document or
//! at the selection.

use strum_macros::{Display, EnumIter, EnumString};

use crate::model::creators::{create_br, create_paragraph, create_selection_marker};
use crate::model::{Block, CachedNode, Document, Entity, Format, Paragraph, Segment};
use crate::selection::{
    clear_selection, collapse_selection_to_start, resolve_group_mut, GroupStep, InsertPoint,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum InsertEntityPosition {
    /// Before the first block of the document.
    Begin,
    /// After the last block of the document.
    End,
    /// At the selection.
    Focus,
    /// Same as `Focus`.
    Root,
}

/// Insert `entity` into `model`.
///
/// A block entity becomes a block of its own; an inline one becomes a
/// segment. With `focus_after_entity` the selection ends up collapsed right
/// after the entity, otherwise it stays where it was (or, at the selection,
/// right before the entity).
///
/// Returns false, leaving the model untouched, when inserting at the
/// selection and there is none.
pub fn insert_entity_model(
    model: &mut Document,
    entity: Entity,
    position: InsertEntityPosition,
    is_block: bool,
    focus_after_entity: bool,
) -> bool {
    let inserted = match position {
        InsertEntityPosition::Begin | InsertEntityPosition::End => {
            let index = if position == InsertEntityPosition::Begin {
                0
            } else {
                model.blocks.len()
            };
            if is_block {
                insert_block_at_edge(model, entity, index, focus_after_entity);
            } else {
                insert_inline_at_edge(model, entity, index, focus_after_entity);
            }
            true
        }
        InsertEntityPosition::Focus | InsertEntityPosition::Root => {
            match collapse_selection_to_start(model) {
                Some(point) if is_block => {
                    insert_block_at_marker(model, entity, &point, focus_after_entity)
                }
                Some(point) => insert_inline_at_marker(model, entity, &point, focus_after_entity),
                None => {
                    tracing::trace!("insert entity: no selection");
                    false
                }
            }
        }
    };
    if inserted {
        tracing::debug!(?position, is_block, focus_after_entity, "inserted entity");
    }
    model.assert_invariants();
    inserted
}

fn new_paragraph_with_br(default_format: &Option<Format>) -> Paragraph {
    let mut paragraph = create_paragraph(false, None);
    paragraph.segments.push(create_br(default_format.clone()));
    paragraph
}

fn insert_block_at_edge(
    model: &mut Document,
    entity: Entity,
    index: usize,
    focus_after_entity: bool,
) {
    let default_format = model.format.clone();
    if focus_after_entity {
        clear_selection(model);
    }
    model.blocks.insert(index, Block::Entity(entity));

    let next = index + 1;
    let needs_paragraph = match model.blocks.get(next) {
        Some(Block::Paragraph(_)) => false,
        None | Some(Block::Entity(_)) => true,
        Some(_) => focus_after_entity,
    };
    if needs_paragraph {
        model
            .blocks
            .insert(next, Block::Paragraph(new_paragraph_with_br(&default_format)));
    }

    if focus_after_entity {
        if let Some(Block::Paragraph(paragraph)) = model.blocks.get_mut(next) {
            paragraph
                .segments
                .insert(0, create_selection_marker(default_format));
            paragraph.invalidate();
        }
    }
}

fn insert_inline_at_edge(
    model: &mut Document,
    mut entity: Entity,
    index: usize,
    focus_after_entity: bool,
) {
    let default_format = model.format.clone();
    if let Some(format) = &default_format {
        entity.format.merge_from(format);
    }
    if focus_after_entity {
        clear_selection(model);
    }
    let mut paragraph = create_paragraph(false, None);
    paragraph.segments.push(Segment::Entity(entity));
    if focus_after_entity {
        paragraph
            .segments
            .push(create_selection_marker(default_format));
    }
    model.blocks.insert(index, Block::Paragraph(paragraph));
}

fn insert_inline_at_marker(
    model: &mut Document,
    mut entity: Entity,
    point: &InsertPoint,
    focus_after_entity: bool,
) -> bool {
    let Some(paragraph) = point.paragraph_mut(model) else {
        return false;
    };
    let Some(marker) = paragraph.segments.get(point.segment_index) else {
        return false;
    };
    entity.format = marker.format().clone();
    let index = if focus_after_entity {
        point.segment_index
    } else {
        point.segment_index + 1
    };
    paragraph.segments.insert(index, Segment::Entity(entity));
    paragraph.invalidate();
    invalidate_cell_at(model, &point.group_path);
    true
}

fn insert_block_at_marker(
    model: &mut Document,
    entity: Entity,
    point: &InsertPoint,
    focus_after_entity: bool,
) -> bool {
    let default_format = model.format.clone();
    let Some(group) = resolve_group_mut(model, &point.group_path) else {
        return false;
    };
    let blocks = group.blocks_mut();
    let Some(Block::Paragraph(original)) = blocks.get_mut(point.block_index) else {
        return false;
    };
    if point.segment_index >= original.segments.len() {
        return false;
    }

    let marker = original.segments.remove(point.segment_index);
    let mut after = Paragraph {
        segments: original.segments.split_off(point.segment_index),
        format: original.format.clone(),
        is_implicit: original.is_implicit,
        cached_element: None,
    };
    let mut before = std::mem::take(original);
    before.invalidate();

    if after.segments.is_empty() {
        after.segments.push(create_br(default_format.clone()));
    }
    if focus_after_entity {
        after.segments.insert(0, marker);
    } else if before.segments.is_empty() {
        before.segments.push(marker);
        before.segments.push(create_br(default_format));
    } else {
        before.segments.push(marker);
    }

    let mut replacement = Vec::with_capacity(3);
    if !before.segments.is_empty() {
        replacement.push(Block::Paragraph(before));
    }
    replacement.push(Block::Entity(entity));
    replacement.push(Block::Paragraph(after));
    blocks.splice(point.block_index..=point.block_index, replacement);

    invalidate_cell_at(model, &point.group_path);
    true
}

/// Invalidate the table cell that `path` ends in, if any.
fn invalidate_cell_at(model: &mut Document, path: &[GroupStep]) {
    let Some((last, parent_path)) = path.split_last() else {
        return;
    };
    let Some((row, col)) = last.cell else {
        return;
    };
    let Some(parent) = resolve_group_mut(model, parent_path) else {
        return;
    };
    if let Some(cell) = parent
        .blocks_mut()
        .get_mut(last.block_index)
        .and_then(Block::as_table_mut)
        .and_then(|table| table.cell_mut(row, col))
    {
        cell.invalidate();
    }
}
