// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use super::applier::{
    apply_list_item_metadata, apply_list_level_metadata, ListFormatContext,
};
use super::metadata::get_list_metadata;
use crate::model::{Block, BlockGroup, NestedGroup};

/// Level format key restarting the numbering of its list.
pub(crate) const START_NUMBER_OVERRIDE: &str = "startNumberOverride";

/// Run both list appliers over every list item under `group`.
///
/// Consecutive list items of a group form one numbering thread. Any other
/// block ends the thread. Going back up a level drops the counters of deeper
/// levels, and a `startNumberOverride` on the deepest level restarts its
/// count.
pub fn apply_list_formats(group: &mut dyn BlockGroup) {
    let mut context = ListFormatContext::default();
    for block in group.blocks_mut() {
        match block {
            Block::BlockGroup(NestedGroup::ListItem(item)) => {
                if let Some(depth) = item.levels.len().checked_sub(1) {
                    context.node_stack =
                        item.levels.iter().map(|level| level.list_type).collect();
                    context.thread_item_counts.resize(depth + 1, 0);
                    let level = &mut item.levels[depth];
                    let start = level
                        .format
                        .get(START_NUMBER_OVERRIDE)
                        .and_then(|value| value.trim().parse::<i64>().ok());
                    match start {
                        Some(start) => context.thread_item_counts[depth] = start,
                        None => context.thread_item_counts[depth] += 1,
                    }

                    let metadata = get_list_metadata(&level.dataset).unwrap_or_default();
                    apply_list_level_metadata(&metadata, &mut level.format, &context);
                    apply_list_item_metadata(&metadata, &mut item.format, &context);
                    tracing::trace!(
                        depth,
                        number = context.thread_item_counts[depth],
                        "applied list formats"
                    );
                }
                apply_list_formats(item);
            }
            Block::BlockGroup(NestedGroup::Quote(quote)) => {
                context = ListFormatContext::default();
                apply_list_formats(quote);
            }
            Block::Table(table) => {
                context = ListFormatContext::default();
                for row in &mut table.rows {
                    for cell in &mut row.cells {
                        apply_list_formats(cell);
                    }
                }
            }
            Block::Paragraph(_) | Block::Divider(_) | Block::Entity(_) => {
                context = ListFormatContext::default();
            }
        }
    }
}
