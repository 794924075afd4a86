// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Axis snapping against reference points, with guide lines.
//!
//! Each axis is handled on its own: a candidate's x may snap to one
//! reference dot while its y snaps to another. Within one pass a later
//! reference at the same or smaller distance overrides an earlier match, so
//! the result lands on the nearest reference per axis.

use crate::model::DotId;
use crate::render::{ItemId, LayerId, Parent, Shape, Style, Surface};
use crate::settings;
use crate::theme;
use kurbo::{Line, Point};

/// A coordinate axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    fn of(self, point: Point) -> f64 {
        match self {
            Axis::X => point.x,
            Axis::Y => point.y,
        }
    }

    /// `point` with this axis replaced by `reference`'s coordinate
    fn snap(self, point: Point, reference: Point) -> Point {
        match self {
            Axis::X => Point::new(reference.x, point.y),
            Axis::Y => Point::new(point.x, reference.y),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Guide {
    item: ItemId,
    line: Line,
}

/// Snaps points to the reference dots of one outline
#[derive(Debug, Clone)]
pub struct AutoAlign {
    layer: LayerId,
    references: Vec<(DotId, Point)>,
    guides_x: Vec<Guide>,
    guides_y: Vec<Guide>,
    threshold: f64,
}

impl AutoAlign {
    /// Create an aligner drawing its guides on `layer`
    pub fn new(layer: LayerId) -> Self {
        Self {
            layer,
            references: Vec::new(),
            guides_x: Vec::new(),
            guides_y: Vec::new(),
            threshold: settings::align::THRESHOLD,
        }
    }

    pub fn set_reference_points(&mut self, references: Vec<(DotId, Point)>) {
        self.references = references;
    }

    pub fn reference_points(&self) -> &[(DotId, Point)] {
        &self.references
    }

    /// Align `point` to the reference points, skipping the dot `ignore`.
    ///
    /// Clears existing guides first. With `show_guides` every snap draws a
    /// guide from the snapped point to the reference it snapped to.
    pub fn auto_align(
        &mut self,
        surface: &mut dyn Surface,
        point: Point,
        ignore: Option<DotId>,
        show_guides: bool,
    ) -> Point {
        self.clear_guides(surface);

        let mut aligned = point;
        let mut threshold_x = self.threshold;
        let mut threshold_y = self.threshold;

        for (id, reference) in self.references.clone() {
            if ignore == Some(id) {
                continue;
            }

            // Distances are measured from the raw point, not the partly snapped one
            let dx = (point.x - reference.x).abs();
            if dx <= threshold_x {
                threshold_x = dx;
                aligned = Axis::X.snap(aligned, reference);
                if show_guides {
                    self.redraw_guide(surface, Axis::X, aligned, reference);
                }
            }

            let dy = (point.y - reference.y).abs();
            if dy <= threshold_y {
                threshold_y = dy;
                aligned = Axis::Y.snap(aligned, reference);
                if show_guides {
                    self.redraw_guide(surface, Axis::Y, aligned, reference);
                }
            }
        }

        if aligned != point {
            tracing::debug!("[AutoAlign] snapped {:?} -> {:?}", point, aligned);
        }
        aligned
    }

    /// Remove every guide. Safe to call repeatedly.
    pub fn clear_guides(&mut self, surface: &mut dyn Surface) {
        self.remove_guides(surface, Axis::X);
        self.remove_guides(surface, Axis::Y);
    }

    /// Guide lines currently drawn for `axis`
    pub fn guides(&self, axis: Axis) -> Vec<Line> {
        self.guide_list(axis).iter().map(|guide| guide.line).collect()
    }

    pub fn guide_count(&self) -> usize {
        self.guides_x.len() + self.guides_y.len()
    }

    fn guide_list(&self, axis: Axis) -> &Vec<Guide> {
        match axis {
            Axis::X => &self.guides_x,
            Axis::Y => &self.guides_y,
        }
    }

    fn guide_list_mut(&mut self, axis: Axis) -> &mut Vec<Guide> {
        match axis {
            Axis::X => &mut self.guides_x,
            Axis::Y => &mut self.guides_y,
        }
    }

    fn remove_guides(&mut self, surface: &mut dyn Surface, axis: Axis) {
        for guide in self.guide_list_mut(axis).drain(..) {
            surface.remove(guide.item);
        }
    }

    fn redraw_guide(&mut self, surface: &mut dyn Surface, axis: Axis, from: Point, to: Point) {
        // Guides on one axis may share an anchor coordinate; a new anchor replaces them
        let stale = self
            .guide_list(axis)
            .first()
            .is_none_or(|guide| axis.of(guide.line.p1) != axis.of(from));
        if stale {
            self.remove_guides(surface, axis);
        }

        let line = Line::new(from, to);
        let item = surface.insert(
            Parent::Layer(self.layer),
            Shape::Line(line),
            Style::stroked(theme::guide::STROKE, settings::align::GUIDE_STROKE_WIDTH),
            None,
        );
        surface.set_locked(item, true);
        self.guide_list_mut(axis).push(Guide { item, line });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::MemorySurface;
    use kurbo::Size;

    fn setup(points: &[(f64, f64)]) -> (MemorySurface, AutoAlign, Vec<DotId>) {
        let mut surface = MemorySurface::new(Size::new(400.0, 400.0));
        let layer = surface.add_layer();
        let mut aligner = AutoAlign::new(layer);
        let ids: Vec<DotId> = points.iter().map(|_| DotId::next()).collect();
        aligner.set_reference_points(
            ids.iter()
                .zip(points)
                .map(|(id, (x, y))| (*id, Point::new(*x, *y)))
                .collect(),
        );
        (surface, aligner, ids)
    }

    #[test]
    fn point_outside_threshold_is_unchanged() {
        let (mut surface, mut aligner, _) = setup(&[(100.0, 100.0)]);
        let point = Point::new(50.0, 50.0);
        assert_eq!(aligner.auto_align(&mut surface, point, None, true), point);
        assert_eq!(aligner.guide_count(), 0);
    }

    #[test]
    fn axes_snap_independently_to_different_references() {
        let (mut surface, mut aligner, _) = setup(&[(103.0, 0.0), (0.0, 48.0)]);
        let aligned = aligner.auto_align(&mut surface, Point::new(100.0, 50.0), None, true);
        assert_eq!(aligned, Point::new(103.0, 48.0));
        assert_eq!(aligner.guides(Axis::X).len(), 1);
        assert_eq!(aligner.guides(Axis::Y).len(), 1);
    }

    #[test]
    fn nearest_reference_wins_regardless_of_order() {
        let (mut surface, mut aligner, _) = setup(&[(54.0, 0.0), (53.0, 200.0), (55.0, 300.0)]);
        let aligned = aligner.auto_align(&mut surface, Point::new(50.0, 100.0), None, true);
        assert_eq!(aligned.x, 53.0);
        // The guide to the farther match was replaced
        let guides = aligner.guides(Axis::X);
        assert_eq!(guides.len(), 1);
        assert_eq!(guides[0].p1, Point::new(53.0, 200.0));
    }

    #[test]
    fn tied_references_share_guides() {
        let (mut surface, mut aligner, _) = setup(&[(52.0, 0.0), (52.0, 300.0)]);
        let aligned = aligner.auto_align(&mut surface, Point::new(50.0, 100.0), None, true);
        assert_eq!(aligned, Point::new(52.0, 100.0));
        assert_eq!(aligner.guides(Axis::X).len(), 2);
    }

    #[test]
    fn ignored_dot_is_not_a_target() {
        let (mut surface, mut aligner, ids) = setup(&[(10.0, 10.0)]);
        let point = Point::new(11.0, 12.0);
        assert_eq!(aligner.auto_align(&mut surface, point, Some(ids[0]), true), point);
        assert_eq!(
            aligner.auto_align(&mut surface, point, None, true),
            Point::new(10.0, 10.0)
        );
    }

    #[test]
    fn hidden_guides_still_snap() {
        let (mut surface, mut aligner, _) = setup(&[(10.0, 10.0)]);
        let aligned = aligner.auto_align(&mut surface, Point::new(12.0, 90.0), None, false);
        assert_eq!(aligned, Point::new(10.0, 90.0));
        assert_eq!(aligner.guide_count(), 0);
    }

    #[test]
    fn guides_are_locked_and_cleared_idempotently() {
        let (mut surface, mut aligner, _) = setup(&[(10.0, 10.0)]);
        aligner.auto_align(&mut surface, Point::new(12.0, 13.0), None, true);
        assert_eq!(aligner.guide_count(), 2);
        assert!(surface.hit_test(Point::new(10.0, 10.5), &Default::default()).is_none());

        aligner.clear_guides(&mut surface);
        assert_eq!(aligner.guide_count(), 0);
        aligner.clear_guides(&mut surface);
        assert_eq!(aligner.guide_count(), 0);
        assert_eq!(surface.item_count(), 0);
    }

    #[test]
    fn input_and_references_are_not_mutated() {
        let (mut surface, mut aligner, _) = setup(&[(10.0, 10.0)]);
        let before = aligner.reference_points().to_vec();
        let point = Point::new(12.0, 12.0);
        let _ = aligner.auto_align(&mut surface, point, None, true);
        assert_eq!(point, Point::new(12.0, 12.0));
        assert_eq!(aligner.reference_points(), before.as_slice());
    }
}
