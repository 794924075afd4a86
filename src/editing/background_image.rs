// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Reference image support for tracing outlines.
//!
//! The image sits alone on the overlay layer, below every outline. Only its
//! placement is tracked here; decoding and drawing the pixels is up to the
//! surface, which receives the source path as the raster's label.

use crate::error::Result;
use crate::render::{ItemId, LayerId, Parent, Shape, Style, Surface};
use crate::settings;
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Placement of the reference image in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlaySizing {
    pub width: f64,
    pub height: f64,
    #[serde(rename = "topLeft")]
    pub top_left: Point,
}

impl From<Rect> for OverlaySizing {
    fn from(bounds: Rect) -> Self {
        Self {
            width: bounds.width(),
            height: bounds.height(),
            top_left: bounds.origin(),
        }
    }
}

/// A reference image placed behind the outlines.
///
/// Unlike outlines it is not part of the undo history.
#[derive(Debug, Clone)]
pub struct BackgroundImage {
    item: ItemId,
    source: String,
    bounds: Rect,
}

impl BackgroundImage {
    /// Read the image dimensions from `path` and place it on `layer`.
    ///
    /// The image starts at its pixel size, centered on the canvas origin.
    /// Only the header is read, so unsupported pixel formats still fail here.
    pub fn load(surface: &mut dyn Surface, layer: LayerId, path: &Path) -> Result<Self> {
        let (width, height) = image::image_dimensions(path)?;
        let size = Size::new(f64::from(width), f64::from(height));
        tracing::info!("[BackgroundImage] loaded {} ({}x{})", path.display(), width, height);
        Ok(Self::from_size(surface, layer, path.display().to_string(), size))
    }

    /// Place an image the host decoded itself (an SVG, say) given its natural size
    pub fn from_size(
        surface: &mut dyn Surface,
        layer: LayerId,
        source: impl Into<String>,
        size: Size,
    ) -> Self {
        let source = source.into();
        let bounds = Rect::from_center_size(Point::ZERO, size);
        let item = surface.insert(
            Parent::Layer(layer),
            Shape::Raster {
                bounds,
                source: source.clone(),
            },
            Style::default(),
            None,
        );
        surface.set_locked(item, true);
        Self {
            item,
            source,
            bounds,
        }
    }

    /// Scale the image down to leave a margin around it, then center it in the view.
    ///
    /// The scale is skipped when the scaled image would still not fit.
    pub fn fit_into_view(&mut self, surface: &mut dyn Surface, view_size: Size) {
        let margin = settings::view::OVERLAY_FIT_MARGIN;
        let Size { width, height } = self.bounds.size();
        let ratio = (view_size.width / (width + margin)).min(view_size.height / (height + margin));

        let size = if width * ratio <= view_size.width && height * ratio < view_size.height {
            Size::new(width * ratio, height * ratio)
        } else {
            Size::new(width, height)
        };
        let center = Point::new(view_size.width / 2.0, view_size.height / 2.0);
        self.set_bounds(surface, Rect::from_center_size(center, size));
    }

    /// Stretch the image to `sizing`, its top-left corner at `sizing.top_left`
    pub fn resize(&mut self, surface: &mut dyn Surface, sizing: OverlaySizing) {
        let bounds = Rect::from_origin_size(sizing.top_left, Size::new(sizing.width, sizing.height));
        self.set_bounds(surface, bounds);
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn sizing(&self) -> OverlaySizing {
        self.bounds.into()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn remove(self, surface: &mut dyn Surface) {
        surface.remove(self.item);
        tracing::info!("[BackgroundImage] removed {}", self.source);
    }

    fn set_bounds(&mut self, surface: &mut dyn Surface, bounds: Rect) {
        self.bounds = bounds;
        surface.set_shape(
            self.item,
            Shape::Raster {
                bounds,
                source: self.source.clone(),
            },
        );
        tracing::debug!("[BackgroundImage] bounds {:?}", bounds);
    }
}
