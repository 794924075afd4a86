// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Path mutations for Outline.
//!
//! Every public mutator records an `EditCommand` in the session history.
//! Replay runs through the same mutators while the history's executing
//! guard is held, so replays are never recorded twice.

use super::Outline;
use crate::editing::edit_types::EditCommand;
use crate::editing::events::OutlineEventKind;
use crate::editing::segment_view::{DotOptions, SegmentView};
use crate::editing::session::Session;
use crate::error::{Error, Result};
use crate::model::DotId;
use crate::render::{Parent, Surface};
use crate::settings;
use kurbo::Point;

impl Outline {
    /// Append a dot at `point`
    pub fn add_dot<S: Surface>(&mut self, session: &mut Session<S>, point: Point) -> DotId {
        let id = DotId::next();
        let index = self.order.len();
        self.insert_dot(&mut session.surface, index, point, id);
        session.history.add(EditCommand::AddDot { index, point, id });
        id
    }

    /// Remove a dot. Returns false if the outline has no such dot.
    pub fn remove_dot<S: Surface>(&mut self, session: &mut Session<S>, id: DotId) -> bool {
        let Some((index, point)) = self.take_dot(&mut session.surface, id) else {
            return false;
        };
        session.history.add(EditCommand::RemoveDot { index, point, id });
        true
    }

    /// Close the path. Does nothing on a closed path or one with fewer than three dots.
    pub fn close_path<S: Surface>(&mut self, session: &mut Session<S>) -> bool {
        if self.closed || self.order.len() < settings::outline::MIN_CLOSED_DOTS {
            return false;
        }
        self.set_closed(&mut session.surface, true);
        session.history.add(EditCommand::Close);
        true
    }

    /// Reopen a closed path
    pub fn open_path<S: Surface>(&mut self, session: &mut Session<S>) -> bool {
        if !self.closed {
            return false;
        }
        self.set_closed(&mut session.surface, false);
        session.history.add(EditCommand::Open);
        true
    }

    /// Replay `command` against this outline
    pub(crate) fn apply_command<S: Surface>(
        &mut self,
        session: &mut Session<S>,
        command: EditCommand,
    ) -> Result<()> {
        match command {
            EditCommand::AddDot { index, point, id } => {
                if index > self.order.len() {
                    return Err(Error::DotIndexOutOfRange {
                        outline: self.name.clone(),
                        index,
                        len: self.order.len(),
                    });
                }
                self.insert_dot(&mut session.surface, index, point, id);
                session.history.add(command);
            }
            EditCommand::RemoveDot { id, .. } => {
                if !self.remove_dot(session, id) {
                    return Err(Error::UnknownDot {
                        outline: self.name.clone(),
                        id,
                    });
                }
            }
            EditCommand::Close => {
                self.close_path(session);
            }
            EditCommand::Open => {
                self.open_path(session);
            }
        }
        Ok(())
    }

    /// Move a dot through the aligner, the dot itself excluded as a target
    pub(super) fn drag_dot(&mut self, surface: &mut dyn Surface, id: DotId, point: Point) {
        if !self.views.contains_key(&id) {
            return;
        }
        let aligned = self.aligner.auto_align(surface, point, Some(id), true);
        if let Some(view) = self.views.get_mut(&id) {
            view.update_position(surface, aligned);
        }
        self.refresh_path(surface);
        self.emit(OutlineEventKind::Drag);
    }

    fn insert_dot(&mut self, surface: &mut dyn Surface, index: usize, point: Point, id: DotId) {
        let view = SegmentView::new(
            surface,
            Parent::Layer(self.layer),
            point,
            id,
            DotOptions {
                stroke: Some(self.options.path_color),
                fill: Some(self.options.path_color),
            },
        );
        self.order.insert(index, id);
        self.views.insert(id, view);
        self.refresh_path(surface);
        tracing::debug!("[Outline] '{}' added {} at {:?}", self.name, id, point);
        self.emit(OutlineEventKind::AddDot);
    }

    /// Remove a dot and its handle, returning where it was
    fn take_dot(&mut self, surface: &mut dyn Surface, id: DotId) -> Option<(usize, Point)> {
        let index = self.order.iter().position(|dot| *dot == id)?;
        let view = self.views.remove(&id)?;
        self.order.remove(index);
        let point = view.point();
        view.remove(surface);

        if self.segment_view_hit == Some(id) {
            self.segment_view_hit = None;
            self.first_segment_hit = false;
        }
        self.refresh_path(surface);
        tracing::debug!("[Outline] '{}' removed {}", self.name, id);
        self.emit(OutlineEventKind::RemoveDot);
        Some((index, point))
    }

    fn set_closed(&mut self, surface: &mut dyn Surface, closed: bool) {
        self.closed = closed;
        if closed {
            self.remove_preview(surface);
        }
        // Fill follows the closed flag
        self.paint(surface);
        self.refresh_path(surface);
        tracing::debug!("[Outline] '{}' closed = {}", self.name, closed);
        self.emit(if closed {
            OutlineEventKind::Close
        } else {
            OutlineEventKind::Open
        });
    }
}

#[cfg(test)]
mod tests {
    use crate::editing::edit_types::EditCommand;
    use crate::editing::outline::{Outline, OutlineSpec};
    use crate::editing::session::Session;
    use crate::error::Error;
    use crate::model::{DotId, OutlineData};
    use crate::render::{HitOptions, MemorySurface, Surface};
    use kurbo::{Point, Size};

    fn setup() -> (Session<MemorySurface>, Outline) {
        let mut session = Session::new(MemorySurface::new(Size::new(800.0, 600.0)));
        let mut outline = Outline::new(&mut session, OutlineSpec::new("o1"));
        outline.activate(&mut session);
        (session, outline)
    }

    #[test]
    fn closing_needs_three_dots() {
        let (mut session, mut outline) = setup();
        outline.add_dot(&mut session, Point::new(10.0, 10.0));
        outline.add_dot(&mut session, Point::new(10.0, 150.0));
        let recorded = session.history.commands().len();

        assert!(!outline.close_path(&mut session));
        assert!(!outline.is_closed());
        assert_eq!(outline.len(), 2);
        assert_eq!(session.history.commands().len(), recorded);
    }

    #[test]
    fn closing_twice_records_once() {
        let (mut session, mut outline) = setup();
        for pt in [(0.0, 0.0), (50.0, 0.0), (50.0, 50.0)] {
            outline.add_dot(&mut session, pt.into());
        }
        assert!(outline.close_path(&mut session));
        assert!(!outline.close_path(&mut session));
        assert!(outline.open_path(&mut session));
        assert!(!outline.open_path(&mut session));
        assert_eq!(
            session.history.commands().last(),
            Some(&EditCommand::Open)
        );
        assert_eq!(session.history.commands().len(), 5);
    }

    #[test]
    fn end_to_end_add_close_undo_redo() {
        let (mut session, mut outline) = setup();
        outline.add_dot(&mut session, Point::new(10.0, 10.0));
        outline.add_dot(&mut session, Point::new(10.0, 150.0));
        outline.add_dot(&mut session, Point::new(150.0, 50.0));

        assert!(outline.close_path(&mut session));
        assert!(outline.is_closed());
        assert_eq!(
            outline.data(),
            OutlineData {
                name: "o1".to_string(),
                edges: vec![[10.0, 10.0], [10.0, 150.0], [150.0, 50.0]],
            }
        );

        assert!(session.undo(&mut outline).unwrap());
        assert!(!outline.is_closed());
        assert!(session.redo(&mut outline).unwrap());
        assert!(outline.is_closed());
    }

    #[test]
    fn undo_all_then_redo_all_round_trips() {
        let (mut session, mut outline) = setup();
        let points = [(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0)];
        for pt in points {
            outline.add_dot(&mut session, pt.into());
        }
        outline.close_path(&mut session);
        outline.open_path(&mut session);
        outline.close_path(&mut session);
        let final_points = outline.points();
        let final_ids = outline.dot_ids().to_vec();

        while session.undo(&mut outline).unwrap() {}
        assert!(outline.is_empty());
        assert!(!outline.is_closed());
        assert!(!session.has_undo());

        while session.redo(&mut outline).unwrap() {}
        assert_eq!(outline.points(), final_points);
        assert_eq!(outline.dot_ids(), final_ids.as_slice());
        assert!(outline.is_closed());
        assert!(!session.has_redo());
    }

    #[test]
    fn replay_does_not_grow_history() {
        let (mut session, mut outline) = setup();
        outline.add_dot(&mut session, Point::new(1.0, 1.0));
        outline.add_dot(&mut session, Point::new(2.0, 2.0));

        session.undo(&mut outline).unwrap();
        session.redo(&mut outline).unwrap();
        assert_eq!(session.history.commands().len(), 2);
        assert_eq!(session.history.index(), Some(1));
    }

    #[test]
    fn redone_dot_keeps_identity_for_hit_testing() {
        let (mut session, mut outline) = setup();
        let id = outline.add_dot(&mut session, Point::new(40.0, 40.0));

        session.undo(&mut outline).unwrap();
        assert!(outline.dot_point(id).is_none());
        let hit = session.surface.hit_test(Point::new(40.0, 40.0), &HitOptions::default());
        assert!(hit.is_none());

        session.redo(&mut outline).unwrap();
        let hit = session.surface.hit_test(Point::new(40.0, 40.0), &HitOptions::default());
        assert_eq!(hit.and_then(|hit| hit.data), Some(id));
    }

    #[test]
    fn removed_dot_comes_back_at_its_index() {
        let (mut session, mut outline) = setup();
        outline.add_dot(&mut session, Point::new(0.0, 0.0));
        let middle = outline.add_dot(&mut session, Point::new(50.0, 50.0));
        outline.add_dot(&mut session, Point::new(100.0, 0.0));

        assert!(outline.remove_dot(&mut session, middle));
        assert_eq!(outline.len(), 2);
        assert!(!outline.remove_dot(&mut session, middle));

        session.undo(&mut outline).unwrap();
        assert_eq!(outline.dot_ids()[1], middle);
        assert_eq!(outline.dot_point(middle), Some(Point::new(50.0, 50.0)));
    }

    #[test]
    fn broken_replay_propagates_and_keeps_cursor() {
        let (mut session, mut outline) = setup();
        let id = outline.add_dot(&mut session, Point::new(5.0, 5.0));
        // Remove the dot behind the history's back
        outline.take_dot(&mut session.surface, id);

        let err = session.undo(&mut outline).unwrap_err();
        assert!(matches!(err, Error::UnknownDot { id: missing, .. } if missing == id));
        assert_eq!(session.history.index(), Some(0));
        assert!(!session.history.is_executing());
    }

    #[test]
    fn out_of_range_insert_is_rejected() {
        let (mut session, mut outline) = setup();
        let err = outline
            .apply_command(
                &mut session,
                EditCommand::AddDot {
                    index: 3,
                    point: Point::ZERO,
                    id: DotId::next(),
                },
            )
            .unwrap_err();
        assert!(matches!(err, Error::DotIndexOutOfRange { index: 3, len: 0, .. }));
    }
}
