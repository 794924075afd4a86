// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Outline styling: defaults, active/inactive presets and partial merges

use super::Outline;
use crate::editing::segment_view::DotOptions;
use crate::editing::session::Session;
use crate::render::{Style, Surface};
use crate::settings;
use crate::theme;
use kurbo::Join;
use peniko::Color;

/// Resolved outline style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineOptions {
    /// Stroke of the path, and stroke and fill of its dots
    pub path_color: Color,
    pub path_width: f64,
    pub fill_color_closed: Color,
    pub fill_color_open: Color,
    pub stroke_join: Join,
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            path_color: theme::outline::STROKE,
            path_width: settings::outline::DEFAULT_PATH_WIDTH,
            fill_color_closed: theme::outline::FILL_CLOSED,
            fill_color_open: theme::outline::FILL_OPEN,
            stroke_join: Join::Round,
        }
    }
}

impl OutlineOptions {
    /// Style of the outline accepting pointer input
    pub fn active() -> Self {
        Self {
            path_color: theme::outline::ACTIVE,
            path_width: settings::outline::ACTIVE_PATH_WIDTH,
            ..Self::default()
        }
    }

    /// Style of a locked outline, drawn in `color`
    pub fn inactive(color: Color) -> Self {
        Self {
            path_color: color,
            path_width: settings::outline::INACTIVE_PATH_WIDTH,
            ..Self::default()
        }
    }

    /// Copy of `self` with every set field of `partial` applied
    pub fn merged(&self, partial: &PartialOutlineOptions) -> Self {
        Self {
            path_color: partial.path_color.unwrap_or(self.path_color),
            path_width: partial.path_width.unwrap_or(self.path_width),
            fill_color_closed: partial.fill_color_closed.unwrap_or(self.fill_color_closed),
            fill_color_open: partial.fill_color_open.unwrap_or(self.fill_color_open),
            stroke_join: partial.stroke_join.unwrap_or(self.stroke_join),
        }
    }
}

/// Style override; unset fields keep their current value
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PartialOutlineOptions {
    pub path_color: Option<Color>,
    pub path_width: Option<f64>,
    pub fill_color_closed: Option<Color>,
    pub fill_color_open: Option<Color>,
    pub stroke_join: Option<Join>,
}

impl From<OutlineOptions> for PartialOutlineOptions {
    fn from(options: OutlineOptions) -> Self {
        Self {
            path_color: Some(options.path_color),
            path_width: Some(options.path_width),
            fill_color_closed: Some(options.fill_color_closed),
            fill_color_open: Some(options.fill_color_open),
            stroke_join: Some(options.stroke_join),
        }
    }
}

impl Outline {
    pub fn options(&self) -> &OutlineOptions {
        &self.options
    }

    /// Merge `partial` onto the current style and repaint
    pub fn set_options<S: Surface>(&mut self, session: &mut Session<S>, partial: &PartialOutlineOptions) {
        self.merge_options(&mut session.surface, partial);
    }

    /// Go back to the active or inactive preset, whichever applies
    pub fn reset_options<S: Surface>(&mut self, session: &mut Session<S>) {
        let preset = if self.active {
            self.default_active
        } else {
            self.default_inactive
        };
        self.merge_options(&mut session.surface, &preset.into());
    }

    pub(super) fn merge_options(&mut self, surface: &mut dyn Surface, partial: &PartialOutlineOptions) {
        self.options = self.options.merged(partial);
        self.paint(surface);
    }

    /// Push the current style to the path and every dot handle
    pub(super) fn paint(&mut self, surface: &mut dyn Surface) {
        let options = self.options;
        let fill = if self.closed {
            options.fill_color_closed
        } else {
            options.fill_color_open
        };
        surface.set_style(
            self.path_item,
            Style {
                stroke: Some(options.path_color),
                stroke_width: options.path_width,
                fill: Some(fill),
                join: options.stroke_join,
            },
        );

        let dot_options = DotOptions {
            stroke: Some(options.path_color),
            fill: Some(options.path_color),
        };
        for view in self.views.values_mut() {
            view.set_options(surface, dot_options);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_unset_fields() {
        let base = OutlineOptions::default();
        let merged = base.merged(&PartialOutlineOptions {
            path_width: Some(7.0),
            ..Default::default()
        });
        assert_eq!(merged.path_width, 7.0);
        assert_eq!(merged.path_color, base.path_color);
        assert_eq!(merged.stroke_join, Join::Round);
    }

    #[test]
    fn presets_differ_in_color_and_width() {
        let color = theme::outline::PALETTE[3];
        let active = OutlineOptions::active();
        let inactive = OutlineOptions::inactive(color);
        assert_eq!(active.path_color, theme::outline::ACTIVE);
        assert_eq!(active.path_width, 3.0);
        assert_eq!(inactive.path_color, color);
        assert_eq!(inactive.path_width, 2.0);
        assert_eq!(inactive.fill_color_closed, active.fill_color_closed);
    }
}
