// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Constructors for model nodes, plus the two basic tree builders
//! [`add_block`] and [`add_segment`].

use super::block::{Block, Divider, NestedGroup, Paragraph};
use super::block_group::{BlockGroup, Document, ListItem, ListLevel, Quote};
use super::entity::Entity;
use super::format::{ElementRef, Format};
use super::segment::{Br, Image, Segment, SelectionMarker, Text};
use super::table::{Table, TableCell, TableRow};
use crate::list::ListType;

pub fn create_content_model_document(
    default_format: Option<Format>,
) -> Document {
    Document {
        blocks: Vec::new(),
        format: default_format,
    }
}

pub fn create_paragraph(is_implicit: bool, format: Option<Format>) -> Paragraph {
    Paragraph {
        segments: Vec::new(),
        format: format.unwrap_or_default(),
        is_implicit,
        cached_element: None,
    }
}

pub fn create_text(text: &str, format: Option<Format>) -> Segment {
    Segment::Text(Text {
        text: text.to_owned(),
        format: format.unwrap_or_default(),
        is_selected: false,
    })
}

pub fn create_br(format: Option<Format>) -> Segment {
    Segment::Br(Br {
        format: format.unwrap_or_default(),
        is_selected: false,
    })
}

pub fn create_selection_marker(format: Option<Format>) -> Segment {
    Segment::SelectionMarker(SelectionMarker {
        format: format.unwrap_or_default(),
    })
}

pub fn create_image(src: &str, format: Option<Format>) -> Segment {
    Segment::Image(Image {
        src: src.to_owned(),
        alt: None,
        format: format.unwrap_or_default(),
        is_selected: false,
    })
}

pub fn create_entity(
    wrapper: ElementRef,
    is_read_only: bool,
    entity_type: Option<&str>,
    id: Option<&str>,
) -> Entity {
    Entity {
        id: id.map(str::to_owned),
        entity_type: entity_type.map(str::to_owned),
        is_read_only,
        wrapper: Some(wrapper),
        format: Format::default(),
        is_selected: false,
    }
}

pub fn create_divider(tag_name: &str, format: Option<Format>) -> Block {
    Block::Divider(Divider {
        tag_name: tag_name.to_owned(),
        format: format.unwrap_or_default(),
        ..Divider::default()
    })
}

pub fn create_quote(format: Option<Format>) -> Quote {
    Quote {
        blocks: Vec::new(),
        format: format.unwrap_or_default(),
    }
}

pub fn create_list_level(list_type: ListType, format: Option<Format>) -> ListLevel {
    ListLevel {
        list_type,
        format: format.unwrap_or_default(),
        ..ListLevel::default()
    }
}

pub fn create_list_item(
    levels: Vec<ListLevel>,
    format_holder_format: Option<Format>,
) -> ListItem {
    ListItem {
        blocks: Vec::new(),
        levels,
        format_holder: SelectionMarker {
            format: format_holder_format.unwrap_or_default(),
        },
        format: Format::default(),
    }
}

pub fn create_table_cell(
    span_left: bool,
    span_above: bool,
    is_header: bool,
    format: Option<Format>,
) -> TableCell {
    TableCell {
        span_left,
        span_above,
        is_header,
        format: format.unwrap_or_default(),
        ..TableCell::default()
    }
}

/// A `rows` x `cols` grid of empty, unspanned cells with unknown sizes.
pub fn create_table(rows: usize, cols: usize, format: Option<Format>) -> Table {
    Table {
        rows: (0..rows)
            .map(|_| TableRow {
                cells: (0..cols)
                    .map(|_| create_table_cell(false, false, false, None))
                    .collect(),
                ..TableRow::default()
            })
            .collect(),
        format: format.unwrap_or_default(),
        ..Table::default()
    }
}

pub fn add_block(group: &mut dyn BlockGroup, block: Block) {
    group.blocks_mut().push(block);
}

/// Append `segment` to the trailing paragraph of `group`, creating an
/// implicit paragraph first when the group does not end with one.
pub fn add_segment(group: &mut dyn BlockGroup, segment: Segment) {
    let blocks = group.blocks_mut();
    if !matches!(blocks.last(), Some(Block::Paragraph(_))) {
        blocks.push(Block::Paragraph(create_paragraph(true, None)));
    }
    if let Some(Block::Paragraph(paragraph)) = blocks.last_mut() {
        paragraph.segments.push(segment);
    }
}

impl From<ListItem> for Block {
    fn from(item: ListItem) -> Self {
        Block::BlockGroup(NestedGroup::ListItem(item))
    }
}

impl From<Quote> for Block {
    fn from(quote: Quote) -> Self {
        Block::BlockGroup(NestedGroup::Quote(quote))
    }
}

impl From<Paragraph> for Block {
    fn from(paragraph: Paragraph) -> Self {
        Block::Paragraph(paragraph)
    }
}

impl From<Table> for Block {
    fn from(table: Table) -> Self {
        Block::Table(table)
    }
}
