// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Selection lives inside the content: a collapsed selection is a
//! [`SelectionMarker`](crate::model::SelectionMarker) segment, an expanded one
//! is a run of segments (or whole table cells) flagged `is_selected`.

mod has_selection;
mod insert_point;
mod iterate;
mod selected_paragraphs;

pub use has_selection::{
    has_selection_in_block, has_selection_in_block_group,
    has_selection_in_segment, has_selection_in_table,
    has_selection_in_table_cell,
};
pub use insert_point::{
    clear_selection, collapse_selection_to_start, find_selection_marker,
    resolve_group, resolve_group_mut, GroupStep, InsertPoint,
};
pub use iterate::{
    get_selected_segments, iterate_selections, SelectedParagraphContent,
    SelectedSegment,
};
pub use selected_paragraphs::{get_selected_paragraphs, SelectedParagraph};
