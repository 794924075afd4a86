// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! A path dot paired with its circular handle.
//!
//! The handle carries the dot's `DotId` as hit payload. Position updates move
//! the logical point and the handle together.

use crate::model::DotId;
use crate::render::{ItemId, Parent, Shape, Style, Surface};
use crate::settings;
use crate::theme;
use kurbo::{Circle, Point};
use peniko::Color;

/// Handle colors; unset fields keep their current value
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DotOptions {
    pub stroke: Option<Color>,
    pub fill: Option<Color>,
}

/// One dot of an outline and its handle on the surface
#[derive(Debug, Clone)]
pub struct SegmentView {
    id: DotId,
    point: Point,
    radius: f64,
    stroke: Color,
    fill: Color,
    group: ItemId,
    dot: ItemId,
}

impl SegmentView {
    pub fn new(
        surface: &mut dyn Surface,
        parent: Parent,
        point: Point,
        id: DotId,
        options: DotOptions,
    ) -> Self {
        let radius = settings::outline::DOT_RADIUS;
        let group = surface.insert(parent, Shape::Group, Style::default(), None);
        let dot = surface.insert(
            Parent::Group(group),
            Shape::Circle(Circle::new(point, radius)),
            Style::default(),
            Some(id),
        );

        let mut view = Self {
            id,
            point,
            radius,
            stroke: theme::dot::STROKE,
            fill: theme::dot::FILL,
            group,
            dot,
        };
        view.set_options(surface, options);
        view
    }

    pub fn id(&self) -> DotId {
        self.id
    }

    pub fn point(&self) -> Point {
        self.point
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Surface item of the handle circle
    pub fn dot_item(&self) -> ItemId {
        self.dot
    }

    pub fn stroke(&self) -> Color {
        self.stroke
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    /// Move the dot and its handle
    pub fn update_position(&mut self, surface: &mut dyn Surface, point: Point) {
        self.point = point;
        surface.set_shape(self.dot, Shape::Circle(Circle::new(point, self.radius)));
    }

    pub fn set_options(&mut self, surface: &mut dyn Surface, options: DotOptions) {
        self.stroke = options.stroke.unwrap_or(self.stroke);
        self.fill = options.fill.unwrap_or(self.fill);
        surface.set_style(
            self.dot,
            Style {
                stroke: Some(self.stroke),
                fill: Some(self.fill),
                ..Style::default()
            },
        );
    }

    /// Take the handle off the surface
    pub fn remove(self, surface: &mut dyn Surface) {
        surface.remove(self.group);
    }
}
