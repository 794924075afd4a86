// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Next-dot preview: a two-point path ending in a handle.
//!
//! Purely visual. The whole group is locked, so it never shows up in hit
//! tests, and it never touches the undo history.

use super::segment_view::{DotOptions, SegmentView};
use crate::model::DotId;
use crate::render::{ItemId, LayerId, Parent, Shape, Style, Surface};
use crate::settings;
use crate::theme;
use kurbo::Point;

#[derive(Debug, Clone)]
pub struct PathPreview {
    group: ItemId,
    path: ItemId,
    start: Point,
    dot: SegmentView,
}

impl PathPreview {
    pub fn new(surface: &mut dyn Surface, layer: LayerId, start: Point, end: Point) -> Self {
        let group = surface.insert(Parent::Layer(layer), Shape::Group, Style::default(), None);
        let path = surface.insert(
            Parent::Group(group),
            Shape::Path {
                points: vec![start, end],
                closed: false,
            },
            Style::stroked(theme::preview::STROKE, settings::outline::PREVIEW_STROKE_WIDTH),
            None,
        );
        let dot = SegmentView::new(
            surface,
            Parent::Group(group),
            end,
            DotId::next(),
            DotOptions {
                stroke: Some(theme::preview::STROKE),
                fill: None,
            },
        );
        surface.set_locked(group, true);

        Self {
            group,
            path,
            start,
            dot,
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.dot.point()
    }

    /// Move both ends. Without a start the preview collapses onto `end`.
    pub fn update_preview_position(&mut self, surface: &mut dyn Surface, start: Option<Point>, end: Point) {
        self.start = start.unwrap_or(end);
        surface.set_shape(
            self.path,
            Shape::Path {
                points: vec![self.start, end],
                closed: false,
            },
        );
        self.dot.update_position(surface, end);
    }

    /// Take the path and handle off the surface
    pub fn remove(self, surface: &mut dyn Surface) {
        surface.remove(self.group);
    }
}
