// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use super::block::Block;
use super::block_group::{BlockGroup, Document};

impl Document {
    /// Panics if the model breaks one of its structural invariants. Only
    /// active with the `assert-invariants` feature; every mutating entry
    /// point calls it before returning.
    pub fn assert_invariants(&self) {
        #[cfg(feature = "assert-invariants")]
        self.explicitly_assert_invariants();
    }

    /// Always-on version of [`Document::assert_invariants`].
    ///
    /// Checked invariants:
    /// * a paragraph holds at most one selection marker;
    /// * every row of a table has the same number of cells.
    pub fn explicitly_assert_invariants(&self) {
        assert_group(self, &mut Vec::new());
    }
}

fn assert_group(group: &dyn BlockGroup, path: &mut Vec<usize>) {
    for (i, block) in group.blocks().iter().enumerate() {
        path.push(i);
        match block {
            Block::Paragraph(p) => {
                let markers = p.marker_count();
                assert!(
                    markers <= 1,
                    "Paragraph at {path:?} holds {markers} selection markers"
                );
            }
            Block::Table(table) => {
                let cols = table.column_count();
                for (r, row) in table.rows.iter().enumerate() {
                    assert_eq!(
                        row.cells.len(),
                        cols,
                        "Row {r} of table at {path:?} is not as wide as row 0"
                    );
                    for cell in &row.cells {
                        assert_group(cell, path);
                    }
                }
            }
            Block::BlockGroup(g) => assert_group(g.as_block_group(), path),
            Block::Divider(_) | Block::Entity(_) => {}
        }
        path.pop();
    }
}

#[cfg(test)]
mod tests {
    use crate::model::creators::*;

    #[test]
    #[should_panic(expected = "selection markers")]
    fn two_markers_in_one_paragraph_panics() {
        let mut doc = create_content_model_document(None);
        add_segment(&mut doc, create_selection_marker(None));
        add_segment(&mut doc, create_selection_marker(None));
        doc.explicitly_assert_invariants();
    }

    #[test]
    #[should_panic(expected = "not as wide")]
    fn ragged_table_panics() {
        let mut doc = create_content_model_document(None);
        let mut table = create_table(2, 2, None);
        table.rows[1].cells.pop();
        add_block(&mut doc, table.into());
        doc.explicitly_assert_invariants();
    }

    #[test]
    fn markers_in_different_paragraphs_are_fine() {
        let mut doc = create_content_model_document(None);
        add_segment(&mut doc, create_selection_marker(None));
        add_block(&mut doc, create_paragraph(false, None).into());
        add_segment(&mut doc, create_selection_marker(None));
        doc.explicitly_assert_invariants();
    }
}
