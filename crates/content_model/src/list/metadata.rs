// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use serde::{Deserialize, Serialize};

use super::style_type::{BulletListType, NumberingListType};
use crate::error::{ContentModelError, Result};
use crate::model::Dataset;
use crate::EDITING_INFO_KEY;

/// Editing metadata of a list level, persisted as JSON in its dataset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMetadataFormat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordered_style_type: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unordered_style_type: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_list_style_from_level: Option<bool>,
}

impl ListMetadataFormat {
    pub fn ordered_style(&self) -> Option<NumberingListType> {
        self.ordered_style_type.and_then(NumberingListType::from_repr)
    }

    pub fn unordered_style(&self) -> Option<BulletListType> {
        self.unordered_style_type.and_then(BulletListType::from_repr)
    }

    fn validate(self) -> Result<Self> {
        if let Some(value) = self.ordered_style_type {
            if NumberingListType::from_repr(value).is_none() {
                return Err(ContentModelError::MetadataOutOfRange {
                    key: "orderedStyleType",
                    value,
                });
            }
        }
        if let Some(value) = self.unordered_style_type {
            if BulletListType::from_repr(value).is_none() {
                return Err(ContentModelError::MetadataOutOfRange {
                    key: "unorderedStyleType",
                    value,
                });
            }
        }
        Ok(self)
    }
}

/// Read the list metadata stored in `dataset`. A missing or empty entry is
/// `Ok(None)`.
pub fn try_get_list_metadata(
    dataset: &Dataset,
) -> Result<Option<ListMetadataFormat>> {
    match dataset.get(EDITING_INFO_KEY) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => {
            let metadata: ListMetadataFormat = serde_json::from_str(raw)?;
            metadata.validate().map(Some)
        }
    }
}

/// Lenient form of [`try_get_list_metadata`]: unreadable metadata is logged
/// and treated as absent.
pub fn get_list_metadata(dataset: &Dataset) -> Option<ListMetadataFormat> {
    try_get_list_metadata(dataset).unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring list metadata");
        None
    })
}

/// Replace the list metadata of `dataset` with whatever `callback` returns
/// for the current value. Returning `None` removes the entry.
pub fn update_list_metadata<F>(
    dataset: &mut Dataset,
    callback: F,
) -> Result<Option<ListMetadataFormat>>
where
    F: FnOnce(Option<ListMetadataFormat>) -> Option<ListMetadataFormat>,
{
    let updated = callback(get_list_metadata(dataset));
    match &updated {
        Some(metadata) => {
            dataset.insert(
                EDITING_INFO_KEY.to_owned(),
                serde_json::to_string(metadata)?,
            );
        }
        None => {
            dataset.remove(EDITING_INFO_KEY);
        }
    }
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use speculoos::prelude::*;

    use super::*;

    fn dataset_with(raw: &str) -> Dataset {
        let mut dataset = Dataset::new();
        dataset.insert(EDITING_INFO_KEY.to_owned(), raw.to_owned());
        dataset
    }

    #[test]
    fn missing_or_empty_metadata_is_none() {
        assert_that!(try_get_list_metadata(&Dataset::new()).unwrap()).is_none();
        assert_that!(try_get_list_metadata(&dataset_with("")).unwrap()).is_none();
    }

    #[test]
    fn reads_camel_case_fields() {
        let metadata = try_get_list_metadata(&dataset_with(
            r#"{"orderedStyleType":4,"applyListStyleFromLevel":true}"#,
        ))
        .unwrap()
        .unwrap();

        assert_eq!(
            metadata.ordered_style(),
            Some(NumberingListType::DecimalDoubleParenthesis)
        );
        assert_eq!(metadata.unordered_style_type, None);
        assert_eq!(metadata.apply_list_style_from_level, Some(true));
    }

    #[test]
    fn broken_json_is_an_error_but_lenient_read_is_none() {
        let dataset = dataset_with("{not json");
        assert!(matches!(
            try_get_list_metadata(&dataset),
            Err(ContentModelError::MetadataJson(_))
        ));
        assert_that!(get_list_metadata(&dataset)).is_none();
    }

    #[test]
    fn out_of_range_style_is_rejected() {
        let dataset = dataset_with(r#"{"unorderedStyleType":10}"#);
        assert!(matches!(
            try_get_list_metadata(&dataset),
            Err(ContentModelError::MetadataOutOfRange {
                key: "unorderedStyleType",
                value: 10
            })
        ));
    }

    #[test]
    fn update_writes_and_removes() {
        let mut dataset = Dataset::new();
        update_list_metadata(&mut dataset, |current| {
            assert!(current.is_none());
            Some(ListMetadataFormat {
                unordered_style_type: Some(BulletListType::Dash as u8),
                ..ListMetadataFormat::default()
            })
        })
        .unwrap();
        assert_eq!(
            dataset.get(EDITING_INFO_KEY).map(String::as_str),
            Some(r#"{"unorderedStyleType":4}"#)
        );

        update_list_metadata(&mut dataset, |_| None).unwrap();
        assert!(!dataset.contains_key(EDITING_INFO_KEY));
    }
}
