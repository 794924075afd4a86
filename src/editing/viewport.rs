// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Zoom and pan of the surface view

use crate::render::Surface;
use kurbo::{Point, Vec2};

/// Zoom limits, zoom step and pan mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPort {
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub zoom_step: f64,
    pan_mode: bool,
}

impl Default for ViewPort {
    fn default() -> Self {
        use crate::settings::view;
        Self::new(view::MIN_ZOOM, view::MAX_ZOOM, view::ZOOM_STEP)
    }
}

impl ViewPort {
    pub fn new(min_zoom: f64, max_zoom: f64, zoom_step: f64) -> Self {
        Self {
            min_zoom,
            max_zoom,
            zoom_step,
            pan_mode: false,
        }
    }

    /// Step the zoom up, capped at `max_zoom`. Returns the new zoom.
    pub fn zoom_in(&self, surface: &mut dyn Surface) -> f64 {
        let zoom = (surface.zoom() + self.zoom_step).min(self.max_zoom);
        surface.set_zoom(zoom);
        zoom
    }

    /// Step the zoom down, floored at `min_zoom`. Returns the new zoom.
    ///
    /// The zoom never drops to zero or below, whatever `min_zoom` says.
    pub fn zoom_out(&self, surface: &mut dyn Surface) -> f64 {
        let zoom = (surface.zoom() - self.zoom_step).max(self.min_zoom);
        if zoom.is_nan() || zoom <= 0.0 {
            tracing::warn!("[ViewPort] refusing zoom {}", zoom);
            return surface.zoom();
        }
        surface.set_zoom(zoom);
        zoom
    }

    /// Back to zoom 1 centered on the canvas
    pub fn reset_zoom(&self, surface: &mut dyn Surface) {
        let size = surface.view_size();
        surface.set_zoom(1.0);
        surface.set_center(Point::new(size.width / 2.0, size.height / 2.0));
    }

    /// Shift the view by a pointer delta in screen pixels, content following the pointer
    pub fn pan(&self, surface: &mut dyn Surface, screen_delta: Vec2) {
        let center = surface.center() - screen_delta / surface.zoom();
        surface.set_center(center);
    }

    /// Screen position of a canvas point under the current view
    pub fn canvas_to_screen(&self, surface: &dyn Surface, point: Point) -> Point {
        let origin = surface.view_bounds().origin();
        ((point - origin) * surface.zoom()).to_point()
    }

    /// Flip pan mode, returning the new state
    pub fn toggle_pan_mode(&mut self) -> bool {
        self.pan_mode = !self.pan_mode;
        tracing::info!("[ViewPort] pan mode {}", if self.pan_mode { "on" } else { "off" });
        self.pan_mode
    }

    pub fn is_pan_mode_enabled(&self) -> bool {
        self.pan_mode
    }
}
