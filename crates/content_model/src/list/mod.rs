// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! List numbering: style ids, counter templates, the metadata stored on list
//! levels and the appliers that turn it into `listStyleType` formats.

mod applier;
mod metadata;
mod numbering;
mod resolve;
mod set_style;
mod style_type;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

pub use applier::{
    apply_list_item_metadata, apply_list_level_metadata,
    get_raw_list_style_type, ListFormatContext,
};
pub use metadata::{
    get_list_metadata, try_get_list_metadata, update_list_metadata,
    ListMetadataFormat,
};
pub use numbering::{convert_decimals_to_alpha, convert_decimals_to_roman};
pub use resolve::apply_list_formats;
pub use set_style::set_model_list_style;
pub use style_type::{
    BulletListType, NumberingListType, DEFAULT_ORDERED_LIST_STYLES,
    DEFAULT_UNORDERED_LIST_STYLES,
};

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
pub enum ListType {
    #[default]
    #[serde(rename = "OL")]
    #[strum(serialize = "OL")]
    Ordered,
    #[serde(rename = "UL")]
    #[strum(serialize = "UL")]
    Unordered,
}
