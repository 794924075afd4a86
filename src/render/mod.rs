// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Drawing surface abstraction and the headless implementation

pub mod memory;
pub mod surface;

pub use memory::MemorySurface;
pub use surface::{HitOptions, HitResult, ItemId, LayerId, Parent, Shape, Style, Surface};
