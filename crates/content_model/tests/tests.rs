// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use content_model::list::{get_list_metadata, NumberingListType};
use content_model::model::creators::{
    add_block, add_segment, create_content_model_document, create_entity,
    create_list_item, create_list_level, create_paragraph,
    create_selection_marker, create_text,
};
use content_model::model::NestedGroup;
use content_model::selection::find_selection_marker;
use content_model::{
    edit_table, get_selected_paragraphs, insert_entity_model,
    normalize_content_model, set_model_list_style, Block, Document,
    ElementRef, InsertEntityPosition, ListMetadataFormat, ListType,
    TableOperation, ToTree,
};
use indoc::indoc;
use serde_json::json;
use speculoos::prelude::*;

fn document_from(value: serde_json::Value) -> Document {
    serde_json::from_value(value).expect("a valid document")
}

fn two_by_two_with_selection(selected: &[(usize, usize)]) -> Document {
    let cell = |row: usize, col: usize| {
        json!({ "isSelected": selected.contains(&(row, col)) })
    };
    document_from(json!({
        "blockGroupType": "Document",
        "blocks": [{
            "blockType": "Table",
            "rows": [
                { "cells": [cell(0, 0), cell(0, 1)] },
                { "cells": [cell(1, 0), cell(1, 1)] }
            ],
            "widths": [100, 100],
            "heights": [40, 40]
        }]
    }))
}

fn table(doc: &Document) -> &content_model::Table {
    doc.blocks[0].as_table().expect("a table")
}

#[test]
fn document_deserializes_from_fixture() {
    let doc: Document = serde_json::from_str(
        r#"{
            "blockGroupType": "Document",
            "blocks": [
                { "blockType": "Paragraph", "segments": [
                    { "segmentType": "Text", "text": "a", "isSelected": true } ] },
                { "blockType": "Table", "rows": [ { "cells": [ { "spanLeft": false } ] } ],
                  "widths": [100], "heights": [20] }
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(
        doc.to_tree(),
        indoc! {
        r#"

        ├>p
        │ └>"a" (selected)
        └>table
          └>tr
            └>td
        "#}
    );
    let table = doc.blocks[1].as_table().unwrap();
    assert_eq!(table.widths, vec![100.0]);
    assert_eq!(table.heights, vec![20.0]);
    assert!(table.cached_element.is_none());
}

#[test]
fn document_survives_a_json_round_trip() {
    let doc = two_by_two_with_selection(&[(1, 0)]);
    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(document_from(json), doc);
}

#[test]
fn insert_then_delete_column_keeps_grid_dense() {
    let mut doc = two_by_two_with_selection(&[(0, 0)]);

    assert!(edit_table(&mut doc, TableOperation::InsertRight));
    assert_eq!(
        doc.to_tree(),
        indoc! {
        r#"

        └>table
          ├>tr
          │ ├>td (selected)
          │ ├>td
          │ └>td
          └>tr
            ├>td
            ├>td
            └>td
        "#}
    );

    assert!(edit_table(&mut doc, TableOperation::DeleteColumn));
    let table = table(&doc);
    assert_eq!(table.row_count(), 2);
    assert!(table.rows.iter().all(|row| row.cells.len() == 2));
    assert_eq!(table.widths.len(), 2);
    assert!(find_selection_marker(&doc).is_some());
    doc.explicitly_assert_invariants();
}

#[test]
fn merge_then_split_both_ways_restores_independent_cells() {
    let mut doc = two_by_two_with_selection(&[(0, 0), (0, 1), (1, 0), (1, 1)]);

    assert!(edit_table(&mut doc, TableOperation::MergeCells));
    assert_eq!(table(&doc).row_count(), 1);
    assert_eq!(table(&doc).column_count(), 1);
    assert_eq!(table(&doc).widths, vec![200.0]);
    assert_eq!(table(&doc).heights, vec![80.0]);

    assert!(edit_table(&mut doc, TableOperation::SplitHorizontally));
    assert!(edit_table(&mut doc, TableOperation::SplitVertically));

    let table = table(&doc);
    assert_eq!(table.widths, vec![100.0, 100.0]);
    assert_eq!(table.heights, vec![40.0, 40.0]);
    assert_eq!(
        doc.to_tree(),
        indoc! {
        r#"

        └>table
          ├>tr
          │ ├>td (selected)
          │ └>td (selected)
          └>tr
            ├>td (selected)
            └>td (selected)
        "#}
    );
}

#[test]
fn delete_table_leaves_a_caret_behind() {
    let mut doc = two_by_two_with_selection(&[(1, 1)]);
    doc.format = Some(content_model::Format::new().with("fontSize", "12pt"));

    assert!(edit_table(&mut doc, TableOperation::DeleteTable));

    assert_eq!(
        doc.to_tree(),
        indoc! {
        r#"

        └>p
          ├>|
          └>br
        "#}
    );
    let paragraph = doc.blocks[0].as_paragraph().unwrap();
    assert_eq!(paragraph.segments[1].format().get("fontSize"), Some("12pt"));
}

#[test]
fn list_style_numbers_the_selected_item() {
    let mut doc = create_content_model_document(None);
    for (text, selected) in [("one", false), ("two", false), ("three", true)] {
        let mut item = create_list_item(
            vec![create_list_level(ListType::Ordered, None)],
            None,
        );
        add_segment(&mut item, create_text(text, None));
        if selected {
            add_segment(&mut item, create_selection_marker(None));
        }
        add_block(&mut doc, item.into());
    }

    let style = ListMetadataFormat {
        ordered_style_type: Some(
            NumberingListType::DecimalDoubleParenthesis as u8,
        ),
        ..ListMetadataFormat::default()
    };
    assert!(set_model_list_style(&mut doc, &style));

    let Block::BlockGroup(NestedGroup::ListItem(item)) = &doc.blocks[2] else {
        panic!("expected a list item");
    };
    assert_that!(get_list_metadata(&item.levels[0].dataset))
        .is_equal_to(Some(style));
    assert_eq!(item.format.get("listStyleType"), Some(r#""(3) ""#));
}

#[test]
fn block_entity_at_end_without_selection() {
    let mut doc = create_content_model_document(None);
    add_block(&mut doc, create_paragraph(false, None).into());
    let entity = create_entity(ElementRef(1), true, Some("mention"), None);

    assert!(insert_entity_model(
        &mut doc,
        entity,
        InsertEntityPosition::End,
        true,
        false
    ));

    assert_eq!(
        doc.to_tree(),
        indoc! {
        r#"

        ├>p
        ├>entity:mention
        └>p
          └>br
        "#}
    );
}

#[test]
fn focus_entity_without_selection_does_nothing() {
    let mut doc = create_content_model_document(None);
    add_segment(&mut doc, create_text("a", None));
    let before = doc.clone();

    let entity = create_entity(ElementRef(1), true, None, None);
    assert!(!insert_entity_model(
        &mut doc,
        entity,
        InsertEntityPosition::Focus,
        false,
        true
    ));
    assert_eq!(doc, before);
}

#[test]
fn trailing_lone_marker_is_not_a_selected_paragraph() {
    let mut doc = document_from(json!({
        "blocks": [
            { "blockType": "Paragraph", "segments": [
                { "segmentType": "Text", "text": "a" },
                { "segmentType": "Text", "text": "b", "isSelected": true }
            ] },
            { "blockType": "Paragraph", "segments": [
                { "segmentType": "SelectionMarker", "isSelected": true },
                { "segmentType": "Text", "text": "c" }
            ] }
        ]
    }));
    normalize_content_model(&mut doc);

    let selected = get_selected_paragraphs(&doc);
    assert_that!(selected).has_length(1);
    assert!(std::ptr::eq(
        selected[0].paragraph,
        doc.blocks[0].as_paragraph().unwrap()
    ));
}
