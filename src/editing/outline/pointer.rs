// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer handling for Outline.
//!
//! Every move aligns the pointer once, and that aligned point feeds the
//! preview, the next-dot candidate and the hit test, so the three always
//! agree on where the pointer is.

use super::{Outline, PartialOutlineOptions};
use crate::editing::mouse::{MouseDelegate, MouseEvent, ViewEventKind};
use crate::editing::preview::PathPreview;
use crate::editing::session::Session;
use crate::render::Surface;
use crate::theme;

impl Outline {
    /// Route a pointer event. Ignored while the outline is inactive.
    pub fn handle_view_event<S: Surface>(
        &mut self,
        kind: ViewEventKind,
        event: &MouseEvent,
        session: &mut Session<S>,
    ) {
        if self.view_events_enabled {
            self.dispatch(kind, *event, session);
        }
    }

    fn maybe_add_preview(&mut self, surface: &mut dyn Surface) {
        if self.preview.is_some() || self.closed {
            return;
        }
        // With no dots yet the preview is just a dot at the candidate
        let start = self.points().last().copied().unwrap_or(self.candidate);
        self.preview = Some(PathPreview::new(surface, self.layer, start, self.candidate));
    }
}

impl<S: Surface> MouseDelegate<Session<S>> for Outline {
    fn mouse_down(&mut self, _event: MouseEvent, session: &mut Session<S>) {
        if self.closed {
            return;
        }

        if self.first_segment_hit {
            self.close_path(session);
            // Button is still down: forget the hit so the close does not turn into a drag
            self.segment_view_hit = None;
            self.first_segment_hit = false;
            self.remove_preview(&mut session.surface);
            return;
        }

        if self.segment_view_hit.is_none() {
            self.add_dot(session, self.candidate);
        }
    }

    fn mouse_drag(&mut self, event: MouseEvent, session: &mut Session<S>) {
        self.remove_preview(&mut session.surface);

        if let Some(id) = self.segment_view_hit {
            self.drag_dot(&mut session.surface, id, event.pos);
        }
    }

    fn mouse_move(&mut self, event: MouseEvent, session: &mut Session<S>) {
        let surface = &mut session.surface;
        self.maybe_add_preview(surface);

        // Closed paths only need the hit state for dragging
        if self.closed {
            self.hit_test(&*surface, event.pos);
            return;
        }

        let show_guides = self.preview.is_some();
        let aligned = self.aligner.auto_align(surface, event.pos, None, show_guides);
        self.candidate = aligned;
        self.hit_test(&*surface, aligned);

        let last = self.points().last().copied();
        if self.first_segment_hit {
            // Closing assist: preview the closed fill and snap the preview onto the first dot
            let closed_fill = self.options.fill_color_closed;
            self.merge_options(
                surface,
                &PartialOutlineOptions {
                    fill_color_open: Some(closed_fill),
                    ..Default::default()
                },
            );
            self.aligner.clear_guides(surface);
            let first = self.points().first().copied();
            if let (Some(preview), Some(first)) = (self.preview.as_mut(), first) {
                preview.update_preview_position(surface, last, first);
            }
            return;
        }

        self.merge_options(
            surface,
            &PartialOutlineOptions {
                fill_color_open: Some(theme::outline::FILL_OPEN),
                ..Default::default()
            },
        );
        if let Some(preview) = self.preview.as_mut() {
            preview.update_preview_position(surface, last, aligned);
        }
    }

    fn mouse_up(&mut self, _event: MouseEvent, session: &mut Session<S>) {
        // Guides only live for the length of a drag
        self.aligner.clear_guides(&mut session.surface);
    }

    fn mouse_leave(&mut self, _event: MouseEvent, session: &mut Session<S>) {
        self.remove_preview(&mut session.surface);
        self.aligner.clear_guides(&mut session.surface);
    }
}
