// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Table grid types.
//!
//! A table is a dense grid: every row holds the same number of cells. A cell
//! covered by a merged neighbour is still present in the grid, flagged with
//! `span_left` (merged into the cell on its left) and/or `span_above` (merged
//! into the cell above). The renderer turns runs of flagged cells into
//! `colspan` / `rowspan`.

use serde::{Deserialize, Serialize};

use super::block::Block;
use super::format::{impl_cached_node, Dataset, ElementRef, Format};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableCell {
    pub blocks: Vec<Block>,
    pub format: Format,
    pub span_left: bool,
    pub span_above: bool,
    pub is_header: bool,
    pub is_selected: bool,
    pub dataset: Dataset,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cached_element: Option<ElementRef>,
}

impl TableCell {
    /// Copy of the cell's shape (spans, header flag, format, dataset) with no
    /// content, no selection and no cached element.
    pub fn clone_shape(&self) -> Self {
        Self {
            blocks: Vec::new(),
            format: self.format.clone(),
            span_left: self.span_left,
            span_above: self.span_above,
            is_header: self.is_header,
            is_selected: false,
            dataset: self.dataset.clone(),
            cached_element: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableRow {
    pub cells: Vec<TableCell>,
    pub format: Format,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cached_element: Option<ElementRef>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Table {
    pub rows: Vec<TableRow>,
    /// Column widths, parallel to cell indices. A length different from the
    /// column count means the widths are unknown.
    pub widths: Vec<f64>,
    /// Row heights, parallel to row indices, with the same convention.
    pub heights: Vec<f64>,
    pub format: Format,
    pub dataset: Dataset,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cached_element: Option<ElementRef>,
}

impl Table {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Column count taken from the first row.
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, |row| row.cells.len())
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&TableCell> {
        self.rows.get(row).and_then(|r| r.cells.get(col))
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut TableCell> {
        self.rows.get_mut(row).and_then(|r| r.cells.get_mut(col))
    }

    pub fn has_valid_widths(&self) -> bool {
        !self.rows.is_empty() && self.widths.len() == self.column_count()
    }

    pub fn has_valid_heights(&self) -> bool {
        !self.rows.is_empty() && self.heights.len() == self.rows.len()
    }
}

impl_cached_node!(Table, TableRow, TableCell);
