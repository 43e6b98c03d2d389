// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Box-drawing dump of a model, used by tests and when debugging.
//!
//! ```text
//!
//! ├>p
//! │ ├>"foo"
//! │ └>|
//! └>table
//!   └>tr
//!     ├>td
//!     └>td spanLeft
//! ```

use super::block::{Block, NestedGroup, Paragraph};
use super::block_group::Document;
use super::segment::Segment;
use super::table::{Table, TableCell};
use crate::list::ListType;

pub trait ToTree {
    fn to_tree(&self) -> String {
        let mut out = String::new();
        render(&self.tree_node(), "", None, &mut out);
        out
    }

    #[doc(hidden)]
    fn tree_node(&self) -> TreeNode;
}

#[doc(hidden)]
pub struct TreeNode {
    label: String,
    children: Vec<TreeNode>,
}

impl TreeNode {
    fn leaf(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }
}

/// `is_last` is `None` for the root, which is printed without a connector.
fn render(node: &TreeNode, prefix: &str, is_last: Option<bool>, out: &mut String) {
    let child_prefix = match is_last {
        None => {
            out.push_str(&node.label);
            String::from(prefix)
        }
        Some(last) => {
            out.push_str(prefix);
            out.push_str(if last { "└>" } else { "├>" });
            out.push_str(&node.label);
            format!("{prefix}{}", if last { "  " } else { "│ " })
        }
    };
    out.push('\n');
    let count = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        render(child, &child_prefix, Some(i + 1 == count), out);
    }
}

fn selected_suffix(selected: bool) -> &'static str {
    if selected {
        " (selected)"
    } else {
        ""
    }
}

impl ToTree for Segment {
    fn tree_node(&self) -> TreeNode {
        let label = match self {
            Segment::Text(t) => {
                format!("\"{}\"{}", t.text, selected_suffix(t.is_selected))
            }
            Segment::Br(b) => format!("br{}", selected_suffix(b.is_selected)),
            Segment::SelectionMarker(_) => String::from("|"),
            Segment::Entity(e) => format!(
                "entity:{}{}",
                e.entity_type.as_deref().unwrap_or(""),
                selected_suffix(e.is_selected)
            ),
            Segment::Image(i) => {
                format!("img {}{}", i.src, selected_suffix(i.is_selected))
            }
            Segment::General(g) => {
                format!("general:{}{}", g.tag_name, selected_suffix(g.is_selected))
            }
        };
        TreeNode::leaf(label)
    }
}

impl ToTree for Paragraph {
    fn tree_node(&self) -> TreeNode {
        TreeNode {
            label: String::from(if self.is_implicit { "p (implicit)" } else { "p" }),
            children: self.segments.iter().map(ToTree::tree_node).collect(),
        }
    }
}

impl ToTree for TableCell {
    fn tree_node(&self) -> TreeNode {
        let mut label = String::from(if self.is_header { "th" } else { "td" });
        if self.span_left {
            label.push_str(" spanLeft");
        }
        if self.span_above {
            label.push_str(" spanAbove");
        }
        label.push_str(selected_suffix(self.is_selected));
        TreeNode {
            label,
            children: self.blocks.iter().map(ToTree::tree_node).collect(),
        }
    }
}

impl ToTree for Table {
    fn tree_node(&self) -> TreeNode {
        TreeNode {
            label: String::from("table"),
            children: self
                .rows
                .iter()
                .map(|row| TreeNode {
                    label: String::from("tr"),
                    children: row.cells.iter().map(ToTree::tree_node).collect(),
                })
                .collect(),
        }
    }
}

impl ToTree for Block {
    fn tree_node(&self) -> TreeNode {
        match self {
            Block::Paragraph(p) => p.tree_node(),
            Block::Table(t) => t.tree_node(),
            Block::BlockGroup(NestedGroup::ListItem(item)) => {
                let mut label = String::from("li");
                for level in &item.levels {
                    label.push_str(match level.list_type {
                        ListType::Ordered => " ol",
                        ListType::Unordered => " ul",
                    });
                }
                TreeNode {
                    label,
                    children: item.blocks.iter().map(ToTree::tree_node).collect(),
                }
            }
            Block::BlockGroup(NestedGroup::Quote(quote)) => TreeNode {
                label: String::from("blockquote"),
                children: quote.blocks.iter().map(ToTree::tree_node).collect(),
            },
            Block::Divider(d) => {
                TreeNode::leaf(format!("{}{}", d.tag_name, selected_suffix(d.is_selected)))
            }
            Block::Entity(e) => TreeNode::leaf(format!(
                "entity:{}{}",
                e.entity_type.as_deref().unwrap_or(""),
                selected_suffix(e.is_selected)
            )),
        }
    }
}

impl ToTree for Document {
    fn tree_node(&self) -> TreeNode {
        TreeNode {
            label: String::new(),
            children: self.blocks.iter().map(ToTree::tree_node).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;
    use crate::model::creators::*;

    #[test]
    fn document_tree_uses_box_drawing() {
        let mut doc = create_content_model_document(None);
        let mut p = create_paragraph(false, None);
        p.segments.push(create_text("foo", None));
        p.segments.push(create_selection_marker(None));
        doc.blocks.push(p.into());
        let mut table = create_table(1, 2, None);
        table.rows[0].cells[1].span_left = true;
        doc.blocks.push(table.into());

        assert_eq!(
            doc.to_tree(),
            indoc! {
            r#"

            ├>p
            │ ├>"foo"
            │ └>|
            └>table
              └>tr
                ├>td
                └>td spanLeft
            "#}
        );
    }
}
