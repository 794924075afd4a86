// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Error type for outline editing.
//!
//! Forgiving gestures (closing a two-dot path, undo with an empty history)
//! are silent no-ops and never show up here. These variants cover broken
//! commands, unknown outlines and failed loads.

use crate::model::DotId;
use thiserror::Error;

/// Errors raised by outline editing and the manager
#[derive(Debug, Error)]
pub enum Error {
    /// A replayed command refers to a dot the outline does not have
    #[error("outline '{outline}' has no dot {id}")]
    UnknownDot { outline: String, id: DotId },

    /// A replayed insertion lands past the end of the path
    #[error("cannot insert dot at index {index} into outline '{outline}' with {len} dots")]
    DotIndexOutOfRange {
        outline: String,
        index: usize,
        len: usize,
    },

    #[error("no outline named '{0}'")]
    UnknownOutline(String),

    #[error("an outline named '{0}' already exists")]
    DuplicateOutline(String),

    #[error("no outline is active")]
    NoActiveOutline,

    #[error("failed to read reference image: {0}")]
    Image(#[from] image::ImageError),

    #[error("invalid manager options: {0}")]
    Config(#[from] toml::de::Error),

    /// Options that parse but cannot drive the view
    #[error("invalid manager options: {0}")]
    InvalidOptions(String),

    #[error("failed to serialize outlines: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
