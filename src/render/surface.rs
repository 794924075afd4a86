// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! The drawing surface outlines render onto.
//!
//! The editing core never talks to a real canvas. It creates, updates and
//! removes retained items (paths, circles, lines) on a `Surface`, groups them
//! into layers, and asks the surface to hit test a point. Hit results carry
//! the `DotId` payload an item was created with, which is how a click on a
//! handle resolves back to a logical dot.

use crate::model::DotId;
use kurbo::{Circle, Join, Line, Point, Rect, Size};
use peniko::Color;

/// A z-ordered layer on the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LayerId(pub u64);

/// A retained item (group or shape) on the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub u64);

/// Where a new item is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parent {
    Layer(LayerId),
    Group(ItemId),
}

/// Geometry of a surface item
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Container for other items, never hit itself
    Group,
    /// Straight-segment path through `points`
    Path { points: Vec<Point>, closed: bool },
    Circle(Circle),
    Line(Line),
    /// A placed image; `source` is whatever the host used to load it
    Raster { bounds: Rect, source: String },
}

/// Paint parameters of a surface item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub stroke: Option<Color>,
    pub stroke_width: f64,
    pub fill: Option<Color>,
    pub join: Join,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke: None,
            stroke_width: 1.0,
            fill: None,
            join: Join::Miter,
        }
    }
}

impl Style {
    pub fn stroked(color: Color, width: f64) -> Self {
        Self {
            stroke: Some(color),
            stroke_width: width,
            ..Self::default()
        }
    }
}

/// What a hit test considers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitOptions {
    pub fill: bool,
    pub stroke: bool,
    pub segments: bool,
    /// Extra distance around shapes that still counts as a hit
    pub tolerance: f64,
}

impl Default for HitOptions {
    fn default() -> Self {
        Self {
            fill: true,
            stroke: true,
            segments: true,
            tolerance: crate::settings::outline::HIT_TOLERANCE,
        }
    }
}

/// The topmost item under a point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitResult {
    pub item: ItemId,
    pub data: Option<DotId>,
}

/// Vector drawing backend consumed by the editing core
pub trait Surface {
    // ===== LAYERS =====

    /// Add a layer on top of all existing layers
    fn add_layer(&mut self) -> LayerId;

    /// Remove a layer and everything on it
    fn remove_layer(&mut self, layer: LayerId);

    /// Layers bottom to top
    fn layers(&self) -> Vec<LayerId>;

    /// Make `layer` the one new visuals are added to by default
    fn activate_layer(&mut self, layer: LayerId);

    fn active_layer(&self) -> Option<LayerId>;

    /// Locked layers are skipped by hit testing
    fn set_layer_locked(&mut self, layer: LayerId, locked: bool);

    fn is_layer_locked(&self, layer: LayerId) -> bool;

    // ===== ITEMS =====

    /// Insert an item on top of its parent's children
    fn insert(&mut self, parent: Parent, shape: Shape, style: Style, data: Option<DotId>) -> ItemId;

    fn set_shape(&mut self, item: ItemId, shape: Shape);

    fn set_style(&mut self, item: ItemId, style: Style);

    /// Locked items (and everything inside a locked group) are skipped by hit testing
    fn set_locked(&mut self, item: ItemId, locked: bool);

    /// Remove an item and, for groups, all of its children
    fn remove(&mut self, item: ItemId);

    fn hit_test(&self, point: Point, options: &HitOptions) -> Option<HitResult>;

    // ===== VIEW =====

    /// Size of the canvas in screen pixels
    fn view_size(&self) -> Size;

    /// Visible area in canvas coordinates
    fn view_bounds(&self) -> Rect {
        let size = self.view_size();
        let zoom = self.zoom();
        let visible = Size::new(size.width / zoom, size.height / zoom);
        Rect::from_center_size(self.center(), visible)
    }

    fn zoom(&self) -> f64;

    fn set_zoom(&mut self, zoom: f64);

    /// Canvas point shown at the middle of the view
    fn center(&self) -> Point;

    fn set_center(&mut self, center: Point);
}
