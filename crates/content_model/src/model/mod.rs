// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! The Content Model tree: documents, blocks, segments and block groups.

pub mod block;
pub mod block_group;
pub mod creators;
pub mod entity;
pub mod format;
mod invariants;
pub mod segment;
pub mod table;
pub mod to_tree;

pub use block::{Block, BlockType, Divider, NestedGroup, Paragraph};
pub use block_group::{
    BlockGroup, BlockGroupType, Document, ListItem, ListLevel, Quote,
};
pub use entity::Entity;
pub use format::{CachedNode, Dataset, ElementRef, Format};
pub use segment::{
    Br, GeneralSegment, Image, Segment, SegmentType, SelectionMarker, Text,
};
pub use table::{Table, TableCell, TableRow};
pub use to_tree::ToTree;
