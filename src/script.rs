// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Replay scripts: recorded host interactions as JSON.
//!
//! A script drives a manager the way a canvas host would, one step at a
//! time, so editing sessions can be reproduced without a window.
//!
//! ```json
//! {
//!   "canvas": [800, 600],
//!   "steps": [
//!     { "step": "add_outline", "name": "room" },
//!     { "step": "click", "x": 10, "y": 10 },
//!     { "step": "pointer", "kind": "mousemove", "x": 40, "y": 12 },
//!     { "step": "undo" }
//!   ]
//! }
//! ```

use crate::editing::{OutlineSpec, OverlaySizing, ViewEventKind};
use crate::error::Result;
use crate::manager::Manager;
use crate::render::Surface;
use crate::settings;
use kurbo::{Point, Size};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    /// Canvas width and height in pixels
    #[serde(default)]
    pub canvas: Option<[f64; 2]>,
    pub steps: Vec<ScriptStep>,
}

impl Script {
    pub fn canvas_size(&self) -> Size {
        match self.canvas {
            Some([width, height]) => Size::new(width, height),
            None => Size::new(settings::replay::CANVAS_WIDTH, settings::replay::CANVAS_HEIGHT),
        }
    }
}

/// One host interaction
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum ScriptStep {
    AddOutline(OutlineSpec),
    RemoveOutline {
        name: String,
    },
    /// A raw pointer event
    Pointer {
        kind: ViewEventKind,
        x: f64,
        y: f64,
    },
    /// Move, press and release at one point
    Click {
        x: f64,
        y: f64,
    },
    /// Hover `from`, press, drag to `to` and release
    Drag {
        from: [f64; 2],
        to: [f64; 2],
    },
    Undo,
    Redo,
    Close,
    Grid {
        #[serde(default)]
        cell_size: Option<f64>,
    },
    ZoomIn,
    ZoomOut,
    ResetZoom,
    TogglePan,
    Overlay {
        path: PathBuf,
        #[serde(default)]
        sizing: Option<OverlaySizing>,
    },
    OverlaySize {
        source: String,
        width: f64,
        height: f64,
        #[serde(default)]
        sizing: Option<OverlaySizing>,
    },
    RemoveOverlay,
}

/// Replay `steps` in order, stopping at the first failing one
pub fn run<S: Surface>(manager: &mut Manager<S>, steps: impl IntoIterator<Item = ScriptStep>) -> Result<()> {
    for (index, step) in steps.into_iter().enumerate() {
        tracing::debug!("[script] step {}: {:?}", index, step);
        apply(manager, step)?;
    }
    Ok(())
}

fn apply<S: Surface>(manager: &mut Manager<S>, step: ScriptStep) -> Result<()> {
    match step {
        ScriptStep::AddOutline(spec) => manager.add_outline(spec)?,
        ScriptStep::RemoveOutline { name } => manager.remove_outline(&name)?,
        ScriptStep::Pointer { kind, x, y } => manager.handle_pointer(kind, Point::new(x, y)),
        ScriptStep::Click { x, y } => {
            let point = Point::new(x, y);
            manager.handle_pointer(ViewEventKind::MouseMove, point);
            manager.handle_pointer(ViewEventKind::MouseDown, point);
            manager.handle_pointer(ViewEventKind::MouseUp, point);
        }
        ScriptStep::Drag { from, to } => {
            let (from, to) = (Point::new(from[0], from[1]), Point::new(to[0], to[1]));
            manager.handle_pointer(ViewEventKind::MouseMove, from);
            manager.handle_pointer(ViewEventKind::MouseDown, from);
            manager.handle_pointer(ViewEventKind::MouseDrag, to);
            manager.handle_pointer(ViewEventKind::MouseUp, to);
        }
        ScriptStep::Undo => {
            manager.undo()?;
        }
        ScriptStep::Redo => {
            manager.redo()?;
        }
        ScriptStep::Close => {
            manager.close_current_outline()?;
        }
        ScriptStep::Grid { cell_size } => manager.draw_grid(cell_size),
        ScriptStep::ZoomIn => {
            manager.zoom_in();
        }
        ScriptStep::ZoomOut => {
            manager.zoom_out();
        }
        ScriptStep::ResetZoom => manager.reset_zoom(),
        ScriptStep::TogglePan => {
            manager.toggle_pan_mode();
        }
        ScriptStep::Overlay { path, sizing } => {
            manager.load_overlay_file(&path, sizing)?;
        }
        ScriptStep::OverlaySize {
            source,
            width,
            height,
            sizing,
        } => {
            manager.load_overlay_size(source, Size::new(width, height), sizing);
        }
        ScriptStep::RemoveOverlay => manager.remove_overlay(),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ManagerOptions;
    use crate::error::Error;
    use crate::render::MemorySurface;

    fn replay(json: &str) -> (Manager<MemorySurface>, Result<()>) {
        let script: Script = serde_json::from_str(json).unwrap();
        let mut manager = Manager::new(MemorySurface::new(script.canvas_size()), ManagerOptions::default());
        let result = run(&mut manager, script.steps);
        (manager, result)
    }

    #[test]
    fn replays_a_drawing_session() {
        let (manager, result) = replay(
            r#"{
                "canvas": [800, 600],
                "steps": [
                    { "step": "add_outline", "name": "room" },
                    { "step": "click", "x": 10, "y": 10 },
                    { "step": "click", "x": 12, "y": 150 },
                    { "step": "click", "x": 150, "y": 50 },
                    { "step": "click", "x": 11, "y": 11 },
                    { "step": "undo" },
                    { "step": "redo" },
                    { "step": "grid", "cell_size": 40 }
                ]
            }"#,
        );
        result.unwrap();

        let outline = manager.outline("room").unwrap();
        assert!(outline.is_closed());
        assert_eq!(
            outline.points(),
            vec![Point::new(10.0, 10.0), Point::new(10.0, 150.0), Point::new(150.0, 50.0)]
        );
        assert_eq!(manager.grid().map(|grid| grid.cell_size()), Some(40.0));
    }

    #[test]
    fn drag_step_moves_a_seeded_dot() {
        let (manager, result) = replay(
            r#"{
                "steps": [
                    { "step": "add_outline", "name": "a", "segments": [[100, 100], [300, 100]] },
                    { "step": "drag", "from": [300, 100], "to": [320, 240] }
                ]
            }"#,
        );
        result.unwrap();
        assert_eq!(manager.surface().view_size(), Size::new(1280.0, 800.0));
        assert_eq!(
            manager.outline("a").unwrap().points(),
            vec![Point::new(100.0, 100.0), Point::new(320.0, 240.0)]
        );
    }

    #[test]
    fn failing_step_stops_the_replay() {
        let (manager, result) = replay(
            r#"{
                "steps": [
                    { "step": "add_outline", "name": "a" },
                    { "step": "remove_outline", "name": "b" },
                    { "step": "zoom_in" }
                ]
            }"#,
        );
        assert!(matches!(result, Err(Error::UnknownOutline(name)) if name == "b"));
        assert_eq!(manager.surface().zoom(), 1.0);
    }

    #[test]
    fn unknown_step_is_rejected() {
        let parsed = serde_json::from_str::<Script>(r#"{ "steps": [{ "step": "explode" }] }"#);
        assert!(parsed.is_err());
    }
}
