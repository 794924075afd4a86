// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Outline data model

pub mod entity_id;
pub mod outline_data;

pub use entity_id::DotId;
pub use outline_data::{OutlineData, PathJson, PathJsonData, PointCoordinates};
