// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! In-memory `Surface` implementation.
//!
//! Keeps a retained item tree per layer and hit tests it with kurbo geometry.
//! Used by the replay binary and by tests; a GUI host supplies its own
//! surface backed by a real canvas.

use super::surface::{HitOptions, HitResult, ItemId, LayerId, Parent, Shape, Style, Surface};
use crate::model::DotId;
use kurbo::{BezPath, Line, ParamCurveNearest, Point, Shape as _, Size};
use peniko::Color;
use std::collections::BTreeMap;

/// Accuracy passed to kurbo nearest-point queries
const NEAREST_ACCURACY: f64 = 1e-6;

#[derive(Debug, Clone)]
struct Node {
    parent: Parent,
    layer: LayerId,
    shape: Shape,
    style: Style,
    data: Option<DotId>,
    locked: bool,
}

#[derive(Debug, Clone, Copy)]
struct LayerState {
    id: LayerId,
    locked: bool,
}

/// A surface that only remembers what was drawn
#[derive(Debug, Clone)]
pub struct MemorySurface {
    layers: Vec<LayerState>,
    active_layer: Option<LayerId>,
    // Ids grow with every insert, so key order is paint order among siblings
    items: BTreeMap<ItemId, Node>,
    next_id: u64,
    size: Size,
    zoom: f64,
    center: Point,
}

impl MemorySurface {
    /// Create an empty surface showing a `size` canvas at zoom 1
    pub fn new(size: Size) -> Self {
        Self {
            layers: Vec::new(),
            active_layer: None,
            items: BTreeMap::new(),
            next_id: 1,
            size,
            zoom: 1.0,
            center: Point::new(size.width / 2.0, size.height / 2.0),
        }
    }

    pub fn shape(&self, item: ItemId) -> Option<&Shape> {
        self.items.get(&item).map(|node| &node.shape)
    }

    pub fn style(&self, item: ItemId) -> Option<&Style> {
        self.items.get(&item).map(|node| &node.style)
    }

    pub fn data(&self, item: ItemId) -> Option<DotId> {
        self.items.get(&item).and_then(|node| node.data)
    }

    pub fn is_locked(&self, item: ItemId) -> bool {
        self.items.get(&item).is_some_and(|node| node.locked)
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.items.contains_key(&item)
    }

    /// Number of items on the whole surface
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Every item on `layer`, including group children, in paint order
    pub fn items_in_layer(&self, layer: LayerId) -> Vec<ItemId> {
        let mut out = Vec::new();
        self.collect_subtree(Parent::Layer(layer), &mut out);
        out
    }

    /// Items on `layer` whose shape is a line
    pub fn lines_in_layer(&self, layer: LayerId) -> Vec<Line> {
        self.items_in_layer(layer)
            .into_iter()
            .filter_map(|id| match self.shape(id) {
                Some(Shape::Line(line)) => Some(*line),
                _ => None,
            })
            .collect()
    }

    fn children(&self, parent: Parent) -> Vec<ItemId> {
        self.items
            .iter()
            .filter(|(_, node)| node.parent == parent)
            .map(|(id, _)| *id)
            .collect()
    }

    fn collect_subtree(&self, parent: Parent, out: &mut Vec<ItemId>) {
        for child in self.children(parent) {
            out.push(child);
            self.collect_subtree(Parent::Group(child), out);
        }
    }

    fn hit_in(&self, parent: Parent, point: Point, options: &HitOptions) -> Option<HitResult> {
        for id in self.children(parent).into_iter().rev() {
            let node = &self.items[&id];
            if node.locked {
                continue;
            }
            let hit = match node.shape {
                Shape::Group => self.hit_in(Parent::Group(id), point, options),
                _ if shape_contains(&node.shape, &node.style, point, options) => Some(HitResult {
                    item: id,
                    data: node.data,
                }),
                _ => None,
            };
            if hit.is_some() {
                return hit;
            }
        }
        None
    }

    fn layer_state_mut(&mut self, layer: LayerId) -> Option<&mut LayerState> {
        self.layers.iter_mut().find(|state| state.id == layer)
    }
}

impl Surface for MemorySurface {
    fn add_layer(&mut self) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;
        self.layers.push(LayerState { id, locked: false });
        // A new layer becomes the active one, like a fresh canvas layer does
        self.active_layer = Some(id);
        id
    }

    fn remove_layer(&mut self, layer: LayerId) {
        self.layers.retain(|state| state.id != layer);
        self.items.retain(|_, node| node.layer != layer);
        if self.active_layer == Some(layer) {
            self.active_layer = self.layers.last().map(|state| state.id);
        }
    }

    fn layers(&self) -> Vec<LayerId> {
        self.layers.iter().map(|state| state.id).collect()
    }

    fn activate_layer(&mut self, layer: LayerId) {
        if self.layers.iter().any(|state| state.id == layer) {
            self.active_layer = Some(layer);
        }
    }

    fn active_layer(&self) -> Option<LayerId> {
        self.active_layer
    }

    fn set_layer_locked(&mut self, layer: LayerId, locked: bool) {
        if let Some(state) = self.layer_state_mut(layer) {
            state.locked = locked;
        }
    }

    fn is_layer_locked(&self, layer: LayerId) -> bool {
        self.layers
            .iter()
            .find(|state| state.id == layer)
            .is_some_and(|state| state.locked)
    }

    fn insert(&mut self, parent: Parent, shape: Shape, style: Style, data: Option<DotId>) -> ItemId {
        let (parent, layer) = match parent {
            Parent::Layer(layer) => (parent, layer),
            Parent::Group(group) => match self.items.get(&group) {
                Some(node) => (parent, node.layer),
                None => {
                    tracing::warn!("[MemorySurface::insert] unknown group {:?}", group);
                    let layer = self.active_layer.unwrap_or(LayerId(0));
                    (Parent::Layer(layer), layer)
                }
            },
        };

        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.items.insert(
            id,
            Node {
                parent,
                layer,
                shape,
                style,
                data,
                locked: false,
            },
        );
        id
    }

    fn set_shape(&mut self, item: ItemId, shape: Shape) {
        if let Some(node) = self.items.get_mut(&item) {
            node.shape = shape;
        }
    }

    fn set_style(&mut self, item: ItemId, style: Style) {
        if let Some(node) = self.items.get_mut(&item) {
            node.style = style;
        }
    }

    fn set_locked(&mut self, item: ItemId, locked: bool) {
        if let Some(node) = self.items.get_mut(&item) {
            node.locked = locked;
        }
    }

    fn remove(&mut self, item: ItemId) {
        let mut doomed = vec![item];
        self.collect_subtree(Parent::Group(item), &mut doomed);
        for id in doomed {
            self.items.remove(&id);
        }
    }

    fn hit_test(&self, point: Point, options: &HitOptions) -> Option<HitResult> {
        self.layers
            .iter()
            .rev()
            .filter(|state| !state.locked)
            .find_map(|state| self.hit_in(Parent::Layer(state.id), point, options))
    }

    fn view_size(&self) -> Size {
        self.size
    }

    fn zoom(&self) -> f64 {
        self.zoom
    }

    fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom;
    }

    fn center(&self) -> Point {
        self.center
    }

    fn set_center(&mut self, center: Point) {
        self.center = center;
    }
}

// ===== HIT GEOMETRY =====

fn is_visible(color: Option<Color>) -> bool {
    color.is_some_and(|color| color.components[3] > 0.0)
}

fn shape_contains(shape: &Shape, style: &Style, point: Point, options: &HitOptions) -> bool {
    let stroke_reach = style.stroke_width / 2.0 + options.tolerance;
    let stroke_hit = options.stroke && is_visible(style.stroke);
    let fill_hit = options.fill && is_visible(style.fill);

    match shape {
        Shape::Group | Shape::Raster { .. } => false,
        Shape::Circle(circle) => {
            let distance = circle.center.distance(point);
            (fill_hit && distance <= circle.radius + options.tolerance)
                || (stroke_hit && (distance - circle.radius).abs() <= stroke_reach)
        }
        Shape::Line(line) => stroke_hit && distance_to_line(*line, point) <= stroke_reach,
        Shape::Path { points, closed } => {
            if options.segments
                && points
                    .iter()
                    .any(|pt| pt.distance(point) <= options.tolerance)
            {
                return true;
            }
            if stroke_hit
                && path_lines(points, *closed).any(|line| distance_to_line(line, point) <= stroke_reach)
            {
                return true;
            }
            // Open paths fill as if closed
            fill_hit && points.len() >= 3 && polygon(points).winding(point) != 0
        }
    }
}

fn distance_to_line(line: Line, point: Point) -> f64 {
    line.nearest(point, NEAREST_ACCURACY).distance_sq.sqrt()
}

fn path_lines(points: &[Point], closed: bool) -> impl Iterator<Item = Line> + '_ {
    let closing = match (closed, points.first(), points.last()) {
        (true, Some(first), Some(last)) if points.len() > 2 => Some(Line::new(*last, *first)),
        _ => None,
    };
    points
        .windows(2)
        .map(|pair| Line::new(pair[0], pair[1]))
        .chain(closing)
}

fn polygon(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    if let Some((first, rest)) = points.split_first() {
        path.move_to(*first);
        for pt in rest {
            path.line_to(*pt);
        }
        path.close_path();
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Circle;

    fn surface() -> MemorySurface {
        MemorySurface::new(Size::new(800.0, 600.0))
    }

    fn dot_style() -> Style {
        Style {
            stroke: Some(Color::from_rgb8(0, 0, 0)),
            fill: Some(Color::from_rgb8(255, 255, 255)),
            ..Style::default()
        }
    }

    #[test]
    fn hit_returns_topmost_item_with_payload() {
        let mut surface = surface();
        let layer = surface.add_layer();
        let id_low = DotId::next();
        let id_high = DotId::next();
        let circle = Shape::Circle(Circle::new((10.0, 10.0), 3.0));
        surface.insert(Parent::Layer(layer), circle.clone(), dot_style(), Some(id_low));
        let top = surface.insert(Parent::Layer(layer), circle, dot_style(), Some(id_high));

        let hit = surface.hit_test(Point::new(11.0, 10.0), &HitOptions::default()).unwrap();
        assert_eq!(hit.item, top);
        assert_eq!(hit.data, Some(id_high));
    }

    #[test]
    fn zero_tolerance_misses_outside_circle() {
        let mut surface = surface();
        let layer = surface.add_layer();
        let circle = Shape::Circle(Circle::new((10.0, 10.0), 3.0));
        surface.insert(Parent::Layer(layer), circle, dot_style(), None);

        assert!(surface.hit_test(Point::new(20.0, 10.0), &HitOptions::default()).is_none());
    }

    #[test]
    fn locked_layers_and_groups_are_skipped() {
        let mut surface = surface();
        let layer = surface.add_layer();
        let group = surface.insert(Parent::Layer(layer), Shape::Group, Style::default(), None);
        let circle = Shape::Circle(Circle::new((10.0, 10.0), 3.0));
        surface.insert(Parent::Group(group), circle, dot_style(), Some(DotId::next()));
        let at = Point::new(10.0, 10.0);

        assert!(surface.hit_test(at, &HitOptions::default()).is_some());

        surface.set_locked(group, true);
        assert!(surface.hit_test(at, &HitOptions::default()).is_none());

        surface.set_locked(group, false);
        surface.set_layer_locked(layer, true);
        assert!(surface.hit_test(at, &HitOptions::default()).is_none());
    }

    #[test]
    fn transparent_fill_is_not_hit() {
        let mut surface = surface();
        let layer = surface.add_layer();
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
        ];
        let style = Style {
            fill: Some(Color::from_rgba8(0, 0, 0, 0)),
            ..Style::default()
        };
        let path = surface.insert(
            Parent::Layer(layer),
            Shape::Path { points, closed: true },
            style,
            None,
        );
        let inside = Point::new(70.0, 30.0);
        assert!(surface.hit_test(inside, &HitOptions::default()).is_none());

        surface.set_style(
            path,
            Style {
                fill: Some(Color::from_rgba8(0, 0, 0, 26)),
                ..Style::default()
            },
        );
        assert_eq!(
            surface.hit_test(inside, &HitOptions::default()).map(|hit| hit.item),
            Some(path)
        );
    }

    #[test]
    fn stroke_hits_within_half_width() {
        let mut surface = surface();
        let layer = surface.add_layer();
        let line = Shape::Line(Line::new((0.0, 0.0), (100.0, 0.0)));
        surface.insert(
            Parent::Layer(layer),
            line,
            Style::stroked(Color::from_rgb8(255, 0, 0), 2.0),
            None,
        );

        assert!(surface.hit_test(Point::new(50.0, 0.9), &HitOptions::default()).is_some());
        assert!(surface.hit_test(Point::new(50.0, 1.5), &HitOptions::default()).is_none());
    }

    #[test]
    fn removing_a_group_removes_children() {
        let mut surface = surface();
        let layer = surface.add_layer();
        let group = surface.insert(Parent::Layer(layer), Shape::Group, Style::default(), None);
        let child = surface.insert(
            Parent::Group(group),
            Shape::Circle(Circle::new((0.0, 0.0), 1.0)),
            Style::default(),
            None,
        );

        surface.remove(group);
        assert!(!surface.contains(group));
        assert!(!surface.contains(child));
        assert_eq!(surface.item_count(), 0);
    }

    #[test]
    fn removing_a_layer_drops_its_items() {
        let mut surface = surface();
        let keep = surface.add_layer();
        let drop = surface.add_layer();
        surface.insert(Parent::Layer(keep), Shape::Group, Style::default(), None);
        surface.insert(Parent::Layer(drop), Shape::Group, Style::default(), None);

        surface.remove_layer(drop);
        assert_eq!(surface.layers(), vec![keep]);
        assert_eq!(surface.item_count(), 1);
        assert_eq!(surface.active_layer(), Some(keep));
    }

    #[test]
    fn view_bounds_follow_zoom() {
        let mut surface = surface();
        assert_eq!(surface.view_bounds(), kurbo::Rect::new(0.0, 0.0, 800.0, 600.0));

        surface.set_zoom(2.0);
        assert_eq!(surface.view_bounds(), kurbo::Rect::new(200.0, 150.0, 600.0, 450.0));
    }
}
