// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use serde::{Deserialize, Serialize};

use super::format::{ElementRef, Format};

/// An opaque embedded object owned by a plugin. It can live in a paragraph
/// (as a segment) or directly in a block group (as a block).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Entity {
    pub id: Option<String>,
    pub entity_type: Option<String>,
    pub is_read_only: bool,
    /// The element hosting the entity. Unlike `cached_element` elsewhere this
    /// is content, not a cache, and is never invalidated by the model.
    pub wrapper: Option<ElementRef>,
    pub format: Format,
    pub is_selected: bool,
}
