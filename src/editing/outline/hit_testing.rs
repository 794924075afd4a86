// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Hit testing for Outline

use super::Outline;
use crate::model::DotId;
use crate::render::{HitOptions, Surface};
use kurbo::Point;

impl Outline {
    /// Resolve the dot handle under `point` and remember it.
    ///
    /// Only this outline's own dots count; anything else under the pointer
    /// (the path stroke, grid lines, another layer) clears the hit.
    pub(super) fn hit_test(&mut self, surface: &dyn Surface, point: Point) {
        let hit = surface
            .hit_test(point, &HitOptions::default())
            .and_then(|hit| hit.data)
            .filter(|id| self.views.contains_key(id));

        self.segment_view_hit = hit;
        self.first_segment_hit = hit.is_some() && hit == self.order.first().copied();

        if let Some(id) = hit {
            tracing::debug!("[Outline] '{}' hit {} (first: {})", self.name, id, self.first_segment_hit);
        }
    }

    /// Dot under the pointer after the last pointer event
    pub fn hovered_dot(&self) -> Option<DotId> {
        self.segment_view_hit
    }

    /// Whether the pointer rests on the first dot, where a click closes the path
    pub fn is_first_dot_hovered(&self) -> bool {
        self.first_segment_hit
    }
}
