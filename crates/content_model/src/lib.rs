// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! A tree-shaped content model for a rich-text editor, and the edits that
//! keep it consistent: table grid operations, list numbering, selection
//! queries, normalization and entity insertion.

mod entity;
pub mod error;
pub mod list;
pub mod model;
mod normalize;
pub mod selection;
pub mod table;

pub use entity::{insert_entity_model, InsertEntityPosition};
pub use error::{ContentModelError, Result};
pub use list::{
    apply_list_formats, set_model_list_style, ListMetadataFormat, ListType,
};
pub use model::{
    Block, BlockGroup, CachedNode, Document, ElementRef, Entity, Format,
    Paragraph, Segment, Table, TableCell, ToTree,
};
pub use normalize::normalize_content_model;
pub use selection::{
    get_selected_paragraphs, get_selected_segments, iterate_selections,
};
pub use table::{edit_table, normalize_table, TableOperation};

/// Dataset key holding a block's editing metadata as JSON.
pub const EDITING_INFO_KEY: &str = "editingInfo";
