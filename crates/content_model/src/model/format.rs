// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Formatting maps, datasets and the DOM cache back-reference shared by every
//! node of the model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A set of CSS-equivalent properties keyed by their camelCase name
/// (`textAlign`, `marginLeft`, `lineHeight`, ...).
///
/// Values are stored verbatim. An empty string is a real value: table
/// alignment uses `""` to mean "no margin" as opposed to "not set".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Format(BTreeMap<String, String>);

impl Format {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.0.insert(key.to_owned(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copy every property of `other` into `self`, overwriting on conflict.
    pub fn merge_from(&mut self, other: &Format) {
        for (k, v) in &other.0 {
            self.0.insert(k.clone(), v.clone());
        }
    }

    /// Builder-style setter, mostly useful in tests and creators.
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }
}

impl<K, V> FromIterator<(K, V)> for Format
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// `data-*` attributes of the owning element. Editing metadata is stored here
/// as JSON under [`EDITING_INFO_KEY`](crate::EDITING_INFO_KEY).
pub type Dataset = BTreeMap<String, String>;

/// Opaque handle to a DOM element materialized by the renderer.
///
/// The model never looks inside it; it only keeps or drops it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementRef(pub u64);

/// A node that may hold a reusable DOM element.
///
/// Every mutation algorithm calls [`CachedNode::invalidate`] on the nodes it
/// changes, and only on those, so that the renderer can reuse the elements of
/// untouched subtrees.
pub trait CachedNode {
    fn cached_element_slot(&mut self) -> &mut Option<ElementRef>;

    fn cached_element(&self) -> Option<ElementRef>;

    fn invalidate(&mut self) {
        self.cached_element_slot().take();
    }
}

macro_rules! impl_cached_node {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::model::format::CachedNode for $ty {
                fn cached_element_slot(
                    &mut self,
                ) -> &mut Option<$crate::model::format::ElementRef> {
                    &mut self.cached_element
                }

                fn cached_element(
                    &self,
                ) -> Option<$crate::model::format::ElementRef> {
                    self.cached_element
                }
            }
        )*
    };
}

pub(crate) use impl_cached_node;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_from_overwrites_existing_keys() {
        let mut format = Format::new().with("fontSize", "10pt");
        format.merge_from(
            &Format::new()
                .with("fontSize", "12pt")
                .with("color", "red"),
        );
        assert_eq!(format.get("fontSize"), Some("12pt"));
        assert_eq!(format.get("color"), Some("red"));
        assert_eq!(format.len(), 2);
    }

    #[test]
    fn empty_string_is_a_value() {
        let format = Format::new().with("marginLeft", "");
        assert!(format.contains("marginLeft"));
        assert_eq!(format.get("marginLeft"), Some(""));
    }

    #[test]
    fn format_serializes_as_plain_object() {
        let format: Format = [("textAlign", "center")].into_iter().collect();
        let json = serde_json::to_string(&format).unwrap();
        assert_eq!(json, r#"{"textAlign":"center"}"#);
    }
}
