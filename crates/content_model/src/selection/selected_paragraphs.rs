// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use super::iterate::iterate_selections;
use crate::model::{BlockGroup, Paragraph};

/// A paragraph with selected content and its ancestors, innermost first.
pub struct SelectedParagraph<'a> {
    pub paragraph: &'a Paragraph,
    pub path: Vec<&'a dyn BlockGroup>,
}

/// Paragraphs holding selected content, in document order.
///
/// A selection that starts at the very end of a paragraph, or ends at the
/// very start of one, leaves a marker there and nothing else. When the
/// selection covers more than one segment, such a leading or trailing lone
/// marker is dropped so its paragraph is not reported.
pub fn get_selected_paragraphs(group: &dyn BlockGroup) -> Vec<SelectedParagraph<'_>> {
    // (index into `paragraphs`, is marker) for every selected segment
    let mut segments: Vec<(usize, bool)> = Vec::new();
    let mut paragraphs: Vec<SelectedParagraph<'_>> = Vec::new();

    iterate_selections(group, &mut |content| {
        let index = paragraphs.len();
        for &i in &content.segment_indices {
            segments.push((index, content.paragraph.segments[i].is_selection_marker()));
        }
        paragraphs.push(SelectedParagraph {
            paragraph: content.paragraph,
            path: content.path,
        });
    });

    if segments.len() > 1 {
        if segments.first().is_some_and(|&(_, is_marker)| is_marker) {
            segments.remove(0);
        }
        if segments.last().is_some_and(|&(_, is_marker)| is_marker) {
            segments.pop();
        }
    }

    let mut keep = vec![false; paragraphs.len()];
    for (index, _) in segments {
        keep[index] = true;
    }
    paragraphs
        .into_iter()
        .zip(keep)
        .filter_map(|(p, keep)| keep.then_some(p))
        .collect()
}
