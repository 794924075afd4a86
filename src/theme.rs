// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB)

use peniko::Color;

// ============================================================================
// BASE COLORS
// ============================================================================
const BLACK: Color = Color::from_rgb8(0x00, 0x00, 0x00);
const WHITE: Color = Color::from_rgb8(0xff, 0xff, 0xff);
const TRANSPARENT: Color = Color::from_rgba8(0x00, 0x00, 0x00, 0x00);
// rgba(0, 0, 0, 0.1)
const TRANSPARENT_GRAY: Color = Color::from_rgba8(0x00, 0x00, 0x00, 0x1a);

// ============================================================================
// OUTLINES
// ============================================================================
const OUTLINE_STROKE: Color = BLACK;
const OUTLINE_ACTIVE: Color = Color::from_rgb8(0xb1, 0x00, 0xdb);
const OUTLINE_FILL_CLOSED: Color = TRANSPARENT_GRAY;
const OUTLINE_FILL_OPEN: Color = TRANSPARENT;

// Inactive outlines cycle through these, one per outline
const OUTLINE_PALETTE: [Color; 12] = [
    Color::from_rgb8(0xef, 0x00, 0xba),
    Color::from_rgb8(0x5d, 0x11, 0xff),
    Color::from_rgb8(0xe8, 0xf6, 0x41),
    Color::from_rgb8(0x00, 0xa7, 0xb5),
    Color::from_rgb8(0x56, 0xec, 0x77),
    Color::from_rgb8(0x4b, 0x88, 0xff),
    Color::from_rgb8(0x1d, 0x32, 0xf0),
    Color::from_rgb8(0x98, 0x17, 0xad),
    Color::from_rgb8(0x5f, 0xc5, 0xff),
    Color::from_rgb8(0x4f, 0x2d, 0xc1),
    Color::from_rgb8(0x2e, 0x27, 0x6c),
    Color::from_rgb8(0x25, 0x8a, 0xb2),
];

// ============================================================================
// DOTS (vertex handles)
// ============================================================================
const DOT_STROKE: Color = Color::from_rgb8(0xad, 0xd8, 0xe6); // lightblue
const DOT_FILL: Color = WHITE;

// ============================================================================
// ALIGNMENT GUIDES
// ============================================================================
const GUIDE_STROKE: Color = Color::from_rgb8(0xff, 0x00, 0x00);

// ============================================================================
// GRID
// ============================================================================
const GRID_LINE: Color = Color::from_rgb8(0xa6, 0xa6, 0xa6);

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Colors for outline paths
pub mod outline {
    use super::Color;
    pub const STROKE: Color = super::OUTLINE_STROKE;
    /// Highlight color of the outline accepting pointer input
    pub const ACTIVE: Color = super::OUTLINE_ACTIVE;
    pub const FILL_CLOSED: Color = super::OUTLINE_FILL_CLOSED;
    pub const FILL_OPEN: Color = super::OUTLINE_FILL_OPEN;

    /// Rotating palette for inactive outlines
    pub const PALETTE: [Color; 12] = super::OUTLINE_PALETTE;
}

/// Default colors for dot handles
pub mod dot {
    use super::Color;
    pub const STROKE: Color = super::DOT_STROKE;
    pub const FILL: Color = super::DOT_FILL;
}

/// Next-dot preview
pub mod preview {
    use super::Color;
    pub const STROKE: Color = super::OUTLINE_ACTIVE;
}

/// Alignment guide lines
pub mod guide {
    use super::Color;
    pub const STROKE: Color = super::GUIDE_STROKE;
}

/// Scale reference grid
pub mod grid {
    use super::Color;
    pub const LINE: Color = super::GRID_LINE;
}
