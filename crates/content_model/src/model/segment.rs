// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::entity::Entity;
use super::format::Format;

/// Discriminant of [`Segment`], handy for logging and matching on kind only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
pub enum SegmentType {
    Text,
    Br,
    SelectionMarker,
    Entity,
    Image,
    General,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Text {
    pub text: String,
    pub format: Format,
    pub is_selected: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Br {
    pub format: Format,
    pub is_selected: bool,
}

/// Zero-width placeholder for a collapsed cursor, or for one end of a
/// selection. A marker is selected by definition.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectionMarker {
    pub format: Format,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Image {
    pub src: String,
    pub alt: Option<String>,
    pub format: Format,
    pub is_selected: bool,
}

/// An inline element the model does not understand, kept as-is.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneralSegment {
    pub tag_name: String,
    pub format: Format,
    pub is_selected: bool,
}

/// Inline content of a paragraph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "segmentType")]
pub enum Segment {
    Text(Text),
    Br(Br),
    SelectionMarker(SelectionMarker),
    Entity(Entity),
    Image(Image),
    General(GeneralSegment),
}

impl Segment {
    pub fn segment_type(&self) -> SegmentType {
        match self {
            Segment::Text(_) => SegmentType::Text,
            Segment::Br(_) => SegmentType::Br,
            Segment::SelectionMarker(_) => SegmentType::SelectionMarker,
            Segment::Entity(_) => SegmentType::Entity,
            Segment::Image(_) => SegmentType::Image,
            Segment::General(_) => SegmentType::General,
        }
    }

    pub fn format(&self) -> &Format {
        match self {
            Segment::Text(s) => &s.format,
            Segment::Br(s) => &s.format,
            Segment::SelectionMarker(s) => &s.format,
            Segment::Entity(s) => &s.format,
            Segment::Image(s) => &s.format,
            Segment::General(s) => &s.format,
        }
    }

    pub fn format_mut(&mut self) -> &mut Format {
        match self {
            Segment::Text(s) => &mut s.format,
            Segment::Br(s) => &mut s.format,
            Segment::SelectionMarker(s) => &mut s.format,
            Segment::Entity(s) => &mut s.format,
            Segment::Image(s) => &mut s.format,
            Segment::General(s) => &mut s.format,
        }
    }

    /// Markers always report `true`.
    pub fn is_selected(&self) -> bool {
        match self {
            Segment::Text(s) => s.is_selected,
            Segment::Br(s) => s.is_selected,
            Segment::SelectionMarker(_) => true,
            Segment::Entity(s) => s.is_selected,
            Segment::Image(s) => s.is_selected,
            Segment::General(s) => s.is_selected,
        }
    }

    /// Has no effect on markers: a marker is removed, not unselected.
    pub fn set_selected(&mut self, selected: bool) {
        match self {
            Segment::Text(s) => s.is_selected = selected,
            Segment::Br(s) => s.is_selected = selected,
            Segment::SelectionMarker(_) => {}
            Segment::Entity(s) => s.is_selected = selected,
            Segment::Image(s) => s.is_selected = selected,
            Segment::General(s) => s.is_selected = selected,
        }
    }

    pub fn is_selection_marker(&self) -> bool {
        matches!(self, Segment::SelectionMarker(_))
    }

    /// True for segments that render nothing and can be dropped.
    pub fn is_empty(&self) -> bool {
        matches!(self, Segment::Text(t) if t.text.is_empty())
    }
}
