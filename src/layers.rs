// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Layer bookkeeping for one editing session.
//!
//! The bottom two layers are reserved: the grid sits at index 0 and the
//! reference overlay at index 1. Every outline gets its own layer on top.

use crate::render::{LayerId, Surface};

/// Index of the grid layer
pub const GRID_LAYER: usize = 0;

/// Index of the reference overlay layer
pub const OVERLAY_LAYER: usize = 1;

/// Ordered layers owned by a session
#[derive(Debug, Clone)]
pub struct LayerRegistry {
    layers: Vec<LayerId>,
}

impl LayerRegistry {
    /// Reserve the grid and overlay layers on `surface`
    pub fn new(surface: &mut dyn Surface) -> Self {
        let grid = surface.add_layer();
        let overlay = surface.add_layer();
        Self {
            layers: vec![grid, overlay],
        }
    }

    pub fn layer_at(&self, index: usize) -> Option<LayerId> {
        self.layers.get(index).copied()
    }

    pub fn grid_layer(&self) -> LayerId {
        self.layers[GRID_LAYER]
    }

    pub fn overlay_layer(&self) -> LayerId {
        self.layers[OVERLAY_LAYER]
    }

    /// Number of layers, reserved ones included
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Add a layer on top and make it active
    pub fn add_layer(&mut self, surface: &mut dyn Surface) -> LayerId {
        let layer = surface.add_layer();
        self.layers.push(layer);
        surface.activate_layer(layer);
        layer
    }

    /// Remove an outline layer. Reserved layers are never removed.
    pub fn remove_layer(&mut self, surface: &mut dyn Surface, layer: LayerId) {
        let Some(index) = self.layers.iter().position(|id| *id == layer) else {
            return;
        };
        if index <= OVERLAY_LAYER {
            tracing::warn!("[LayerRegistry] refusing to remove reserved layer {}", index);
            return;
        }
        self.layers.remove(index);
        surface.remove_layer(layer);
    }

    pub fn active_layer(&self, surface: &dyn Surface) -> Option<LayerId> {
        surface.active_layer()
    }

    /// Make the topmost layer the one new items go to
    pub fn activate_top_layer(&self, surface: &mut dyn Surface) {
        if let Some(top) = self.layers.last() {
            surface.activate_layer(*top);
        }
    }
}
