// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Unique identifiers for outline dots.
//!
//! Each `DotId` is a monotonically increasing `u64` generated from a global
//! atomic counter. The id is attached to a dot's handle on the surface, so a
//! hit test result can be matched back to the logical dot even after other
//! dots were inserted or removed around it. Undo and redo re-create a dot
//! with its original id, which keeps a drag working after the round trip.
//! Ids are never reused within a process.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// A unique identifier for a dot (a path vertex and its handle)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DotId(u64);

static DOT_COUNTER: AtomicU64 = AtomicU64::new(1);

impl DotId {
    /// Create a new unique dot ID
    pub fn next() -> Self {
        Self(DOT_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value, e.g. for logging
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl Default for DotId {
    fn default() -> Self {
        Self::next()
    }
}

impl fmt::Display for DotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dot#{}", self.0)
    }
}
