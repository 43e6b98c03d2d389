// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::block_group::{BlockGroup, ListItem, Quote};
use super::entity::Entity;
use super::format::{impl_cached_node, ElementRef, Format};
use super::segment::Segment;
use super::table::Table;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
pub enum BlockType {
    Paragraph,
    Table,
    BlockGroup,
    Divider,
    Entity,
}

/// An ordered run of inline [`Segment`]s.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Paragraph {
    pub segments: Vec<Segment>,
    pub format: Format,
    /// Synthesized by the converter to hold loose inline content. Implicit
    /// paragraphs render without a wrapper element.
    pub is_implicit: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cached_element: Option<ElementRef>,
}

impl Paragraph {
    pub fn marker_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| s.is_selection_marker())
            .count()
    }

    pub fn marker_index(&self) -> Option<usize> {
        self.segments.iter().position(Segment::is_selection_marker)
    }
}

/// Horizontal rule and similar leaf blocks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Divider {
    pub tag_name: String,
    pub format: Format,
    pub is_selected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cached_element: Option<ElementRef>,
}

impl Default for Divider {
    fn default() -> Self {
        Self {
            tag_name: String::from("hr"),
            format: Format::default(),
            is_selected: false,
            cached_element: None,
        }
    }
}

impl_cached_node!(Paragraph, Divider);

/// A block group nested inside another block group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "blockGroupType")]
pub enum NestedGroup {
    ListItem(ListItem),
    Quote(Quote),
}

impl NestedGroup {
    pub fn as_block_group(&self) -> &dyn BlockGroup {
        match self {
            NestedGroup::ListItem(g) => g,
            NestedGroup::Quote(g) => g,
        }
    }

    pub fn as_block_group_mut(&mut self) -> &mut dyn BlockGroup {
        match self {
            NestedGroup::ListItem(g) => g,
            NestedGroup::Quote(g) => g,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "blockType")]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
    BlockGroup(NestedGroup),
    Divider(Divider),
    Entity(Entity),
}

impl Block {
    pub fn block_type(&self) -> BlockType {
        match self {
            Block::Paragraph(_) => BlockType::Paragraph,
            Block::Table(_) => BlockType::Table,
            Block::BlockGroup(_) => BlockType::BlockGroup,
            Block::Divider(_) => BlockType::Divider,
            Block::Entity(_) => BlockType::Entity,
        }
    }

    pub fn format(&self) -> &Format {
        match self {
            Block::Paragraph(b) => &b.format,
            Block::Table(b) => &b.format,
            Block::BlockGroup(NestedGroup::ListItem(b)) => &b.format,
            Block::BlockGroup(NestedGroup::Quote(b)) => &b.format,
            Block::Divider(b) => &b.format,
            Block::Entity(b) => &b.format,
        }
    }

    pub fn format_mut(&mut self) -> &mut Format {
        match self {
            Block::Paragraph(b) => &mut b.format,
            Block::Table(b) => &mut b.format,
            Block::BlockGroup(NestedGroup::ListItem(b)) => &mut b.format,
            Block::BlockGroup(NestedGroup::Quote(b)) => &mut b.format,
            Block::Divider(b) => &mut b.format,
            Block::Entity(b) => &mut b.format,
        }
    }

    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Block::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_paragraph_mut(&mut self) -> Option<&mut Paragraph> {
        match self {
            Block::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Block::Table(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_table_mut(&mut self) -> Option<&mut Table> {
        match self {
            Block::Table(t) => Some(t),
            _ => None,
        }
    }
}
