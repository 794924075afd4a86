// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer events as delivered by the host canvas

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Kinds of pointer events an outline reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewEventKind {
    /// Button pressed
    MouseDown,
    /// Pointer moved with the button held
    MouseDrag,
    /// Pointer moved with no button held
    MouseMove,
    /// Button released
    MouseUp,
    /// Pointer left the canvas
    MouseLeave,
}

/// A pointer event in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    pub pos: Point,
}

impl MouseEvent {
    pub fn new(pos: impl Into<Point>) -> Self {
        Self { pos: pos.into() }
    }
}

/// Something that consumes pointer events
pub trait MouseDelegate<Data> {
    fn mouse_down(&mut self, _event: MouseEvent, _data: &mut Data) {}
    fn mouse_drag(&mut self, _event: MouseEvent, _data: &mut Data) {}
    fn mouse_move(&mut self, _event: MouseEvent, _data: &mut Data) {}
    fn mouse_up(&mut self, _event: MouseEvent, _data: &mut Data) {}
    fn mouse_leave(&mut self, _event: MouseEvent, _data: &mut Data) {}

    /// Route an event to the matching method
    fn dispatch(&mut self, kind: ViewEventKind, event: MouseEvent, data: &mut Data) {
        match kind {
            ViewEventKind::MouseDown => self.mouse_down(event, data),
            ViewEventKind::MouseDrag => self.mouse_drag(event, data),
            ViewEventKind::MouseMove => self.mouse_move(event, data),
            ViewEventKind::MouseUp => self.mouse_up(event, data),
            ViewEventKind::MouseLeave => self.mouse_leave(event, data),
        }
    }
}
