// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Appliers turning list metadata into `listStyleType` formats.
//!
//! Keyword styles belong on the list level (`<ol style="list-style-type:
//! lower-alpha">`), counter templates on each item, since every item renders
//! its own number.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::metadata::ListMetadataFormat;
use super::numbering::{convert_decimals_to_alpha, convert_decimals_to_roman};
use super::style_type::{DEFAULT_ORDERED_LIST_STYLES, DEFAULT_UNORDERED_LIST_STYLES};
use super::ListType;
use crate::model::Format;

const LIST_STYLE_TYPE: &str = "listStyleType";

static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{(Number|LowerAlpha|UpperAlpha|LowerRoman|UpperRoman)\}")
        .expect("placeholder pattern is valid")
});

/// Where a walk over list items currently is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListFormatContext {
    /// Type of every open list level, outermost first. The item being
    /// formatted sits at depth `node_stack.len() - 1`.
    pub node_stack: Vec<ListType>,
    /// Number of the current item at each depth. A missing entry counts as 1.
    pub thread_item_counts: Vec<i64>,
}

impl ListFormatContext {
    fn depth(&self) -> Option<usize> {
        self.node_stack.len().checked_sub(1)
    }

    fn item_number(&self, depth: usize) -> i64 {
        self.thread_item_counts.get(depth).copied().unwrap_or(1)
    }
}

/// The style the metadata asks for at `depth`, before placeholder
/// substitution. `None` when the metadata does not ask for one.
pub fn get_raw_list_style_type(
    list_type: ListType,
    metadata: &ListMetadataFormat,
    depth: usize,
) -> Option<&'static str> {
    let apply_from_level = metadata.apply_list_style_from_level.unwrap_or(false);
    match list_type {
        ListType::Ordered => match metadata.ordered_style() {
            Some(style) => Some(style.style()),
            None if apply_from_level => {
                Some(DEFAULT_ORDERED_LIST_STYLES[depth % 3].style())
            }
            None => None,
        },
        ListType::Unordered => match metadata.unordered_style() {
            Some(style) => Some(style.style()),
            None if apply_from_level => {
                Some(DEFAULT_UNORDERED_LIST_STYLES[depth % 3].style())
            }
            None => None,
        },
    }
}

fn is_template(style: &str) -> bool {
    style.contains('"')
}

fn substitute_placeholders(template: &str, number: i64) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures<'_>| match &caps[1] {
            "Number" => number.to_string(),
            "LowerAlpha" => convert_decimals_to_alpha(number, true),
            "UpperAlpha" => convert_decimals_to_alpha(number, false),
            "LowerRoman" => convert_decimals_to_roman(number, true),
            _ => convert_decimals_to_roman(number, false),
        })
        .into_owned()
}

/// Set the item's `listStyleType` to the rendered counter template, or clear
/// it when the style is a plain keyword handled by the level.
pub fn apply_list_item_metadata(
    metadata: &ListMetadataFormat,
    format: &mut Format,
    context: &ListFormatContext,
) {
    let Some(depth) = context.depth() else {
        return;
    };
    let list_type = context.node_stack[depth];
    match get_raw_list_style_type(list_type, metadata, depth) {
        Some(style) if is_template(style) => {
            let number = context.item_number(depth);
            format.set(LIST_STYLE_TYPE, substitute_placeholders(style, number));
        }
        Some(_) => {
            format.remove(LIST_STYLE_TYPE);
        }
        None => {}
    }
}

/// Set the level's `listStyleType` to a keyword style, or clear it when the
/// style is a counter template rendered per item.
pub fn apply_list_level_metadata(
    metadata: &ListMetadataFormat,
    format: &mut Format,
    context: &ListFormatContext,
) {
    let Some(depth) = context.depth() else {
        return;
    };
    let list_type = context.node_stack[depth];
    match get_raw_list_style_type(list_type, metadata, depth) {
        Some(style) if is_template(style) => {
            format.remove(LIST_STYLE_TYPE);
        }
        Some(style) => format.set(LIST_STYLE_TYPE, style),
        None => {}
    }
}
