// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentModelError {
    #[error("invalid editing metadata: {0}")]
    MetadataJson(#[from] serde_json::Error),
    #[error("editing metadata {key} has out of range value {value}")]
    MetadataOutOfRange { key: &'static str, value: u8 },
}

pub type Result<T, E = ContentModelError> = std::result::Result<T, E>;
