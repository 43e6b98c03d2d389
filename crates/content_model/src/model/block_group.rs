// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::block::Block;
use super::format::{Dataset, Format};
use super::segment::SelectionMarker;
use crate::list::ListType;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
pub enum BlockGroupType {
    Document,
    ListItem,
    Quote,
    TableCell,
}

/// A container of ordered blocks.
///
/// Algorithms that only need to walk or splice blocks take a
/// `&mut dyn BlockGroup` so they work on documents, list items, quotes and
/// table cells alike.
pub trait BlockGroup {
    fn block_group_type(&self) -> BlockGroupType;

    fn blocks(&self) -> &[Block];

    fn blocks_mut(&mut self) -> &mut Vec<Block>;
}

/// Root of the model.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Document {
    pub blocks: Vec<Block>,
    /// Default segment format of the editor. New markers and synthesized
    /// line breaks take this format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,
}

impl Document {
    pub fn default_segment_format(&self) -> Format {
        self.format.clone().unwrap_or_default()
    }
}

/// One level of list nesting, e.g. the `<ol>` of an item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListLevel {
    pub list_type: ListType,
    pub format: Format,
    pub dataset: Dataset,
}

impl Default for ListLevel {
    fn default() -> Self {
        Self {
            list_type: ListType::Ordered,
            format: Format::default(),
            dataset: Dataset::default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListItem {
    pub blocks: Vec<Block>,
    /// Outermost level first.
    pub levels: Vec<ListLevel>,
    /// Holds the segment format applied to the whole item (list marker
    /// font, colour...).
    pub format_holder: SelectionMarker,
    pub format: Format,
}

/// Blockquote or any other block-level format container.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Quote {
    pub blocks: Vec<Block>,
    pub format: Format,
}

macro_rules! impl_block_group {
    ($ty:ty, $kind:expr) => {
        impl BlockGroup for $ty {
            fn block_group_type(&self) -> BlockGroupType {
                $kind
            }

            fn blocks(&self) -> &[Block] {
                &self.blocks
            }

            fn blocks_mut(&mut self) -> &mut Vec<Block> {
                &mut self.blocks
            }
        }
    };
}

impl_block_group!(Document, BlockGroupType::Document);
impl_block_group!(ListItem, BlockGroupType::ListItem);
impl_block_group!(Quote, BlockGroupType::Quote);
impl_block_group!(super::table::TableCell, BlockGroupType::TableCell);
