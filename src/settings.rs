// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Application settings and configuration constants.
//!
//! This module holds non-visual settings that stay stable across theme
//! changes. Visual styling (colors) belongs in `theme.rs`. Values a host may
//! want to change at runtime live in `config::ManagerOptions` instead.

// ============================================================================
// ALIGNMENT SETTINGS
// ============================================================================
/// Per-axis distance under which a point snaps to a reference point
const ALIGN_THRESHOLD: f64 = 5.0;

/// Stroke width of alignment guide lines
const GUIDE_STROKE_WIDTH: f64 = 1.0;

// ============================================================================
// OUTLINE SETTINGS
// ============================================================================
/// Radius of the circular handle drawn on every dot
const DOT_RADIUS: f64 = 3.0;

/// Hit test tolerance for dot handles.
///
/// Kept at zero so a click near, but not on, a dot places a new dot instead
/// of starting a drag. Snapping onto a dot is the aligner's job.
const HIT_TOLERANCE: f64 = 0.0;

/// Where the next-dot candidate starts, outside the visible canvas
const INITIAL_CANDIDATE: (f64, f64) = (-50.0, -50.0);

/// Stroke width of the outline path while active / inactive / by default
const ACTIVE_PATH_WIDTH: f64 = 3.0;
const INACTIVE_PATH_WIDTH: f64 = 2.0;
const DEFAULT_PATH_WIDTH: f64 = 1.0;

/// Stroke width of the next-dot preview path
const PREVIEW_STROKE_WIDTH: f64 = 3.0;

/// Closing a path needs at least this many dots
const MIN_CLOSED_DOTS: usize = 3;

/// Decimal places kept in exported coordinates
const EXPORT_PRECISION: i32 = 5;

// ============================================================================
// GRID SETTINGS
// ============================================================================
/// Number of cells across the view when no cell size is given
const DEFAULT_NUMBER_CELL: f64 = 35.0;

/// Most lines drawn per axis; denser grids are skipped
const MAX_GRID_LINES: f64 = 2000.0;

// ============================================================================
// VIEW SETTINGS
// ============================================================================
const DEFAULT_MAX_ZOOM: f64 = 3.0;
const DEFAULT_MIN_ZOOM: f64 = 1.0;
const ZOOM_RATIO: f64 = 0.5;

/// Margin kept around a reference image fitted into the view
const OVERLAY_FIT_MARGIN: f64 = 30.0;

// ============================================================================
// REPLAY SETTINGS
// ============================================================================
/// Canvas size of a replay script that does not give one
const REPLAY_CANVAS_WIDTH: f64 = 1280.0;
const REPLAY_CANVAS_HEIGHT: f64 = 800.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Alignment (snapping) settings
pub mod align {
    pub const THRESHOLD: f64 = super::ALIGN_THRESHOLD;
    pub const GUIDE_STROKE_WIDTH: f64 = super::GUIDE_STROKE_WIDTH;
}

/// Outline editing settings
pub mod outline {
    pub const DOT_RADIUS: f64 = super::DOT_RADIUS;
    pub const HIT_TOLERANCE: f64 = super::HIT_TOLERANCE;
    pub const INITIAL_CANDIDATE: (f64, f64) = super::INITIAL_CANDIDATE;
    pub const ACTIVE_PATH_WIDTH: f64 = super::ACTIVE_PATH_WIDTH;
    pub const INACTIVE_PATH_WIDTH: f64 = super::INACTIVE_PATH_WIDTH;
    pub const DEFAULT_PATH_WIDTH: f64 = super::DEFAULT_PATH_WIDTH;
    pub const PREVIEW_STROKE_WIDTH: f64 = super::PREVIEW_STROKE_WIDTH;
    pub const MIN_CLOSED_DOTS: usize = super::MIN_CLOSED_DOTS;
    pub const EXPORT_PRECISION: i32 = super::EXPORT_PRECISION;
}

/// Grid settings
pub mod grid {
    pub const DEFAULT_NUMBER_CELL: f64 = super::DEFAULT_NUMBER_CELL;
    pub const MAX_LINES: f64 = super::MAX_GRID_LINES;
}

/// View (zoom, overlay) settings
pub mod view {
    pub const MAX_ZOOM: f64 = super::DEFAULT_MAX_ZOOM;
    pub const MIN_ZOOM: f64 = super::DEFAULT_MIN_ZOOM;
    pub const ZOOM_STEP: f64 = super::ZOOM_RATIO;
    pub const OVERLAY_FIT_MARGIN: f64 = super::OVERLAY_FIT_MARGIN;
}

/// Headless replay settings
pub mod replay {
    pub const CANVAS_WIDTH: f64 = super::REPLAY_CANVAS_WIDTH;
    pub const CANVAS_HEIGHT: f64 = super::REPLAY_CANVAS_HEIGHT;
}
