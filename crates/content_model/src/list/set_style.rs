// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use super::metadata::{update_list_metadata, ListMetadataFormat};
use super::resolve::apply_list_formats;
use crate::model::{Block, BlockGroup, Document, NestedGroup};
use crate::selection::has_selection_in_block_group;

/// Write `style` onto the deepest level of every list item holding the
/// selection, then refresh the list formats of the whole model. Fields of
/// `style` that are `None` keep their current value.
///
/// Returns whether any list item was changed.
pub fn set_model_list_style(model: &mut Document, style: &ListMetadataFormat) -> bool {
    let changed = set_style_in_group(model, style);
    if changed {
        apply_list_formats(model);
        tracing::debug!(?style, "set list style");
    } else {
        tracing::trace!("no selected list item to style");
    }
    model.assert_invariants();
    changed
}

fn set_style_in_group(group: &mut dyn BlockGroup, style: &ListMetadataFormat) -> bool {
    let mut changed = false;
    for block in group.blocks_mut() {
        match block {
            Block::BlockGroup(NestedGroup::ListItem(item)) => {
                if has_selection_in_block_group(&*item) {
                    if let Some(level) = item.levels.last_mut() {
                        let result = update_list_metadata(&mut level.dataset, |current| {
                            let current = current.unwrap_or_default();
                            Some(ListMetadataFormat {
                                ordered_style_type: style
                                    .ordered_style_type
                                    .or(current.ordered_style_type),
                                unordered_style_type: style
                                    .unordered_style_type
                                    .or(current.unordered_style_type),
                                apply_list_style_from_level: style
                                    .apply_list_style_from_level
                                    .or(current.apply_list_style_from_level),
                            })
                        });
                        match result {
                            Ok(_) => changed = true,
                            Err(err) => tracing::warn!(%err, "could not store list style"),
                        }
                    }
                }
                changed |= set_style_in_group(item, style);
            }
            Block::BlockGroup(NestedGroup::Quote(quote)) => {
                changed |= set_style_in_group(quote, style);
            }
            Block::Table(table) => {
                for row in &mut table.rows {
                    for cell in &mut row.cells {
                        changed |= set_style_in_group(cell, style);
                    }
                }
            }
            Block::Paragraph(_) | Block::Divider(_) | Block::Entity(_) => {}
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::{get_list_metadata, ListType, NumberingListType};
    use crate::model::creators::*;
    use crate::model::ListItem;

    fn list_item(text: &str, selected: bool) -> ListItem {
        let mut item = create_list_item(vec![create_list_level(ListType::Ordered, None)], None);
        add_segment(&mut item, create_text(text, None));
        if selected {
            add_segment(&mut item, create_selection_marker(None));
        }
        item
    }

    fn item_at(doc: &Document, index: usize) -> &ListItem {
        match &doc.blocks[index] {
            Block::BlockGroup(NestedGroup::ListItem(item)) => item,
            _ => panic!("expected a list item at {index}"),
        }
    }

    #[test]
    fn only_selected_items_get_the_style() {
        let mut doc = create_content_model_document(None);
        add_block(&mut doc, list_item("a", false).into());
        add_block(&mut doc, list_item("b", true).into());

        let style = ListMetadataFormat {
            ordered_style_type: Some(NumberingListType::DecimalDoubleParenthesis as u8),
            ..ListMetadataFormat::default()
        };
        assert!(set_model_list_style(&mut doc, &style));

        assert_eq!(get_list_metadata(&item_at(&doc, 0).levels[0].dataset), None);
        assert_eq!(
            get_list_metadata(&item_at(&doc, 1).levels[0].dataset),
            Some(style)
        );
        // second item of the thread
        assert_eq!(
            item_at(&doc, 1).format.get("listStyleType"),
            Some(r#""(2) ""#)
        );
    }

    #[test]
    fn unset_fields_keep_existing_values() {
        let mut doc = create_content_model_document(None);
        add_block(&mut doc, list_item("a", true).into());

        set_model_list_style(
            &mut doc,
            &ListMetadataFormat {
                ordered_style_type: Some(NumberingListType::LowerRoman as u8),
                ..ListMetadataFormat::default()
            },
        );
        set_model_list_style(
            &mut doc,
            &ListMetadataFormat {
                apply_list_style_from_level: Some(true),
                ..ListMetadataFormat::default()
            },
        );

        let metadata = get_list_metadata(&item_at(&doc, 0).levels[0].dataset).unwrap();
        assert_eq!(metadata.ordered_style(), Some(NumberingListType::LowerRoman));
        assert_eq!(metadata.apply_list_style_from_level, Some(true));
    }

    #[test]
    fn no_selected_list_item_changes_nothing() {
        let mut doc = create_content_model_document(None);
        add_block(&mut doc, list_item("a", false).into());
        add_segment(&mut doc, create_selection_marker(None));
        let before = doc.clone();

        assert!(!set_model_list_style(&mut doc, &ListMetadataFormat::default()));
        assert_eq!(doc, before);
    }
}
