// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Manager options a host can change without recompiling.
//!
//! Every field is optional in the TOML file; missing ones take the values
//! from `settings`.

use crate::error::{Error, Result};
use crate::settings;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerOptions {
    pub max_zoom: f64,
    pub min_zoom: f64,
    pub zoom_step: f64,
    /// Draw the grid as soon as the manager is built
    pub show_grid: bool,
    /// Maximum number of recorded commands, 0 for no limit
    pub undo_limit: usize,
    /// Keep a loaded reference image at its natural size
    pub disable_overlay_auto_resize: bool,
}

impl Default for ManagerOptions {
    fn default() -> Self {
        Self {
            max_zoom: settings::view::MAX_ZOOM,
            min_zoom: settings::view::MIN_ZOOM,
            zoom_step: settings::view::ZOOM_STEP,
            show_grid: false,
            undo_limit: 0,
            disable_overlay_auto_resize: false,
        }
    }
}

impl ManagerOptions {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let options: Self = toml::from_str(content)?;
        options.validate()?;
        Ok(options)
    }

    /// Zoom limits must be positive and ordered, and the step positive
    pub fn validate(&self) -> Result<()> {
        if !(self.min_zoom.is_finite() && self.min_zoom > 0.0) {
            return Err(Error::InvalidOptions(format!(
                "min_zoom must be greater than 0, got {}",
                self.min_zoom
            )));
        }
        if !(self.max_zoom.is_finite() && self.max_zoom >= self.min_zoom) {
            return Err(Error::InvalidOptions(format!(
                "max_zoom {} is below min_zoom {}",
                self.max_zoom, self.min_zoom
            )));
        }
        if !(self.zoom_step.is_finite() && self.zoom_step > 0.0) {
            return Err(Error::InvalidOptions(format!(
                "zoom_step must be greater than 0, got {}",
                self.zoom_step
            )));
        }
        Ok(())
    }

    /// Read options from a TOML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manager options from {:?}", path))?;
        let options = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse manager options in {:?}", path))?;
        tracing::info!("Manager options loaded from {}", path.display());
        Ok(options)
    }
}
