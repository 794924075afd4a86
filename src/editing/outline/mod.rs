// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Outline: one editable polygonal path driven by pointer input.
//!
//! An outline owns its dots, their handles, an aligner, the next-dot preview
//! and an event emitter. The implementation is split across modules:
//!
//! - `path_editing`: adding, removing, dragging dots; closing and opening;
//!   replaying recorded commands
//! - `pointer`: pointer event handling
//! - `hit_testing`: resolving handles under the pointer
//! - `options`: styling

mod hit_testing;
mod options;
mod path_editing;
mod pointer;

pub use options::{OutlineOptions, PartialOutlineOptions};

use super::align::AutoAlign;
use super::events::{Emitter, EventHandlers, OutlineEventKind, OutlineEventPayload};
use super::preview::PathPreview;
use super::segment_view::SegmentView;
use super::session::Session;
use crate::model::{DotId, OutlineData, PathJson, PointCoordinates};
use crate::render::{ItemId, LayerId, Parent, Shape, Style, Surface};
use crate::settings;
use kurbo::Point;
use serde::Deserialize;
use std::collections::HashMap;

/// What an outline starts from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutlineSpec {
    pub name: String,
    #[serde(default)]
    pub segments: Vec<PointCoordinates>,
    #[serde(default)]
    pub closed: bool,
    #[serde(skip)]
    pub events: EventHandlers,
    #[serde(skip)]
    pub options: PartialOutlineOptions,
}

impl OutlineSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_segments(mut self, segments: impl IntoIterator<Item = impl Into<Point>>) -> Self {
        self.segments = segments
            .into_iter()
            .map(|pt| PointCoordinates::from(pt.into()))
            .collect();
        self
    }

    pub fn closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    pub fn with_events(mut self, events: EventHandlers) -> Self {
        self.events = events;
        self
    }
}

/// An editable polygonal path
#[derive(Debug)]
pub struct Outline {
    name: String,
    layer: LayerId,
    path_item: ItemId,
    closed: bool,
    /// Dots in path order
    order: Vec<DotId>,
    views: HashMap<DotId, SegmentView>,
    options: OutlineOptions,
    default_active: OutlineOptions,
    default_inactive: OutlineOptions,
    aligner: AutoAlign,
    preview: Option<PathPreview>,
    /// Dot handle under the pointer
    segment_view_hit: Option<DotId>,
    first_segment_hit: bool,
    /// Aligned pointer position a click would add a dot at
    candidate: Point,
    view_events_enabled: bool,
    active: bool,
    emitter: Emitter,
    handlers: EventHandlers,
}

impl Outline {
    /// Build an outline on a new layer of `session`.
    ///
    /// Clears the session history. The outline starts unlocked but ignores
    /// pointer events until `activate` is called.
    pub fn new<S: Surface>(session: &mut Session<S>, spec: OutlineSpec) -> Self {
        let layer = session.layers.add_layer(&mut session.surface);
        let inactive_color = session.palette.next_color();
        let options = OutlineOptions::default().merged(&spec.options);
        let path_item = session.surface.insert(
            Parent::Layer(layer),
            Shape::Path {
                points: Vec::new(),
                closed: false,
            },
            Style::default(),
            None,
        );

        let (x, y) = settings::outline::INITIAL_CANDIDATE;
        let mut outline = Self {
            name: spec.name,
            layer,
            path_item,
            closed: false,
            order: Vec::new(),
            views: HashMap::new(),
            options,
            default_active: OutlineOptions::active(),
            default_inactive: OutlineOptions::inactive(inactive_color),
            aligner: AutoAlign::new(layer),
            preview: None,
            segment_view_hit: None,
            first_segment_hit: false,
            candidate: Point::new(x, y),
            view_events_enabled: false,
            active: true,
            emitter: Emitter::new(),
            handlers: spec.events,
        };
        outline.paint(&mut session.surface);

        for coords in spec.segments {
            outline.add_dot(session, coords.into());
        }
        if spec.closed {
            outline.close_path(session);
        }

        session.history.clear();
        tracing::info!("[Outline] created '{}' with {} dots", outline.name, outline.len());
        outline
    }

    /// Accept pointer input: unlock, highlight, subscribe the stored hooks
    pub fn activate<S: Surface>(&mut self, session: &mut Session<S>) {
        session.surface.set_layer_locked(self.layer, false);
        session.surface.activate_layer(self.layer);
        let preset = self.default_active;
        self.merge_options(&mut session.surface, &preset.into());
        self.view_events_enabled = true;
        self.active = true;

        if let Some(all) = self.handlers.all.clone() {
            self.emitter.on_any_shared(all);
        }
        if let Some(change) = self.handlers.change.clone() {
            self.emitter.on_shared(OutlineEventKind::Change, change);
        }
        tracing::info!("[Outline] activated '{}'", self.name);
    }

    /// Stop accepting pointer input and drop every subscription
    pub fn deactivate<S: Surface>(&mut self, session: &mut Session<S>) {
        self.emitter.clear();
        session.surface.set_layer_locked(self.layer, true);
        self.active = false;
        let preset = self.default_inactive;
        self.merge_options(&mut session.surface, &preset.into());
        self.remove_preview(&mut session.surface);
        self.aligner.clear_guides(&mut session.surface);
        self.view_events_enabled = false;
        tracing::info!("[Outline] deactivated '{}'", self.name);
    }

    /// Clear the history and take the outline off the surface
    pub fn destroy<S: Surface>(mut self, session: &mut Session<S>) {
        session.history.clear();
        self.deactivate(session);
        self.aligner.clear_guides(&mut session.surface);
        session.layers.remove_layer(&mut session.surface, self.layer);
        tracing::info!("[Outline] destroyed '{}'", self.name);
    }

    // ===== ACCESSORS =====

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn layer(&self) -> LayerId {
        self.layer
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Number of dots
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn dot_ids(&self) -> &[DotId] {
        &self.order
    }

    pub fn dot_point(&self, id: DotId) -> Option<Point> {
        self.views.get(&id).map(SegmentView::point)
    }

    /// Dot positions in path order
    pub fn points(&self) -> Vec<Point> {
        self.order
            .iter()
            .filter_map(|id| self.dot_point(*id))
            .collect()
    }

    pub fn data(&self) -> OutlineData {
        OutlineData::new(&self.name, self.points().iter())
    }

    /// The `["Path", { name, segments, closed }]` form
    pub fn export_json(&self) -> PathJson {
        PathJson::new(&self.name, self.points().iter(), self.closed)
    }

    /// Where a click would currently add a dot
    pub fn candidate(&self) -> Point {
        self.candidate
    }

    pub fn has_preview(&self) -> bool {
        self.preview.is_some()
    }

    pub fn aligner(&self) -> &AutoAlign {
        &self.aligner
    }

    // ===== EVENTS =====

    pub fn on(&mut self, kind: OutlineEventKind, handler: impl Fn(&OutlineEventPayload) + 'static) {
        self.emitter.on(kind, handler);
    }

    pub fn on_any(&mut self, handler: impl Fn(OutlineEventKind, &OutlineEventPayload) + 'static) {
        self.emitter.on_any(handler);
    }

    /// Publish `kind`, followed by `change` for every other kind
    fn emit(&self, kind: OutlineEventKind) {
        let payload = OutlineEventPayload { path: self.data() };
        self.emitter.emit(kind, &payload);
        if kind != OutlineEventKind::Change {
            self.emitter.emit(OutlineEventKind::Change, &payload);
        }
    }

    // ===== SURFACE SYNC =====

    fn refresh_path(&mut self, surface: &mut dyn Surface) {
        surface.set_shape(
            self.path_item,
            Shape::Path {
                points: self.points(),
                closed: self.closed,
            },
        );
        let references = self
            .order
            .iter()
            .filter_map(|id| self.dot_point(*id).map(|pt| (*id, pt)))
            .collect();
        self.aligner.set_reference_points(references);
    }

    fn remove_preview(&mut self, surface: &mut dyn Surface) {
        if let Some(preview) = self.preview.take() {
            preview.remove(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::events::EventHandlers;
    use crate::render::MemorySurface;
    use crate::theme;
    use kurbo::Size;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn session() -> Session<MemorySurface> {
        Session::new(MemorySurface::new(Size::new(800.0, 600.0)))
    }

    #[test]
    fn seeded_outline_has_no_history() {
        let mut session = session();
        let outline = Outline::new(
            &mut session,
            OutlineSpec::new("seed")
                .with_segments([(10.0, 10.0), (10.0, 150.0), (150.0, 50.0)])
                .closed(true),
        );
        assert_eq!(outline.len(), 3);
        assert!(outline.is_closed());
        assert!(!session.has_undo());
    }

    #[test]
    fn spec_deserializes_both_coordinate_forms() {
        let spec: OutlineSpec = serde_json::from_str(
            r#"{ "name": "o", "segments": [[1, 2], { "x": 3, "y": 4 }], "closed": false }"#,
        )
        .unwrap();
        let mut session = session();
        let outline = Outline::new(&mut session, spec);
        assert_eq!(
            outline.points(),
            vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]
        );
    }

    #[test]
    fn activation_styles_and_palette() {
        let mut session = session();
        let mut outline = Outline::new(&mut session, OutlineSpec::new("a"));
        outline.activate(&mut session);
        assert_eq!(outline.options().path_color, theme::outline::ACTIVE);
        assert_eq!(outline.options().path_width, 3.0);

        outline.deactivate(&mut session);
        assert!(!outline.is_active());
        assert_eq!(outline.options().path_width, 2.0);
        assert_eq!(outline.options().path_color, theme::outline::PALETTE[0]);
        assert!(session.surface.is_layer_locked(outline.layer()));

        // A second outline takes the next palette color
        let mut second = Outline::new(&mut session, OutlineSpec::new("b"));
        second.deactivate(&mut session);
        assert_eq!(second.options().path_color, theme::outline::PALETTE[1]);

        outline.activate(&mut session);
        assert_eq!(outline.options().path_color, theme::outline::ACTIVE);
        assert_eq!(outline.options().path_width, 3.0);
        assert!(!session.surface.is_layer_locked(outline.layer()));
    }

    #[test]
    fn hooks_are_resubscribed_on_every_activation() {
        let mut session = session();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        let events = EventHandlers {
            all: Some(Rc::new(move |kind, _| log.borrow_mut().push(kind))),
            change: None,
        };
        let mut outline = Outline::new(&mut session, OutlineSpec::new("o").with_events(events));

        outline.add_dot(&mut session, Point::new(1.0, 1.0));
        assert!(seen.borrow().is_empty());

        outline.activate(&mut session);
        outline.add_dot(&mut session, Point::new(2.0, 2.0));
        assert_eq!(
            *seen.borrow(),
            vec![OutlineEventKind::AddDot, OutlineEventKind::Change]
        );

        outline.deactivate(&mut session);
        outline.add_dot(&mut session, Point::new(3.0, 3.0));
        assert_eq!(seen.borrow().len(), 2);

        outline.activate(&mut session);
        outline.close_path(&mut session);
        assert_eq!(seen.borrow().len(), 4);
    }

    #[test]
    fn destroy_removes_layer_and_history() {
        let mut session = session();
        let mut outline = Outline::new(&mut session, OutlineSpec::new("o"));
        outline.activate(&mut session);
        outline.add_dot(&mut session, Point::new(1.0, 1.0));
        let layer = outline.layer();
        assert!(session.has_undo());

        outline.destroy(&mut session);
        assert!(!session.has_undo());
        assert!(!session.surface.layers().contains(&layer));
        assert_eq!(session.layers.len(), 2);
    }

    #[test]
    fn export_json_carries_closed_flag() {
        let mut session = session();
        let outline = Outline::new(
            &mut session,
            OutlineSpec::new("p")
                .with_segments([(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)])
                .closed(true),
        );
        let json = serde_json::to_value(outline.export_json()).unwrap();
        assert_eq!(
            json,
            serde_json::json!(["Path", {
                "name": "p",
                "segments": [[0.0, 0.0], [10.0, 0.0], [10.0, 10.0]],
                "closed": true
            }])
        );
    }
}
