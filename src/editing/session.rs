// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing session: the state outlines share.
//!
//! One session owns the surface, the layer registry, the undo history and
//! the palette inactive outlines take their colors from. Outlines borrow it
//! for every operation instead of reaching for process-wide singletons.
//!
//! The history belongs to one outline at a time. Constructing or destroying
//! an outline clears it, so commands never outlive the outline they were
//! recorded against.

use super::edit_types::EditCommand;
use super::outline::Outline;
use super::undo::UndoManager;
use crate::error::Result;
use crate::layers::LayerRegistry;
use crate::render::Surface;
use crate::theme;
use peniko::Color;

/// Colors handed out in order, wrapping after the last one
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Color>,
    next: usize,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(theme::outline::PALETTE.to_vec())
    }
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors, next: 0 }
    }

    pub fn next_color(&mut self) -> Color {
        if self.colors.is_empty() {
            return theme::outline::STROKE;
        }
        if self.next >= self.colors.len() {
            self.next = 0;
        }
        let color = self.colors[self.next];
        self.next += 1;
        color
    }
}

/// Shared editing state
pub struct Session<S: Surface> {
    pub surface: S,
    pub layers: LayerRegistry,
    pub history: UndoManager<EditCommand>,
    pub palette: Palette,
}

impl<S: Surface> Session<S> {
    pub fn new(mut surface: S) -> Self {
        let layers = LayerRegistry::new(&mut surface);
        Self {
            surface,
            layers,
            history: UndoManager::new(),
            palette: Palette::default(),
        }
    }

    /// Undo the last command against `outline`.
    ///
    /// Returns `Ok(false)` when there is nothing to undo. A failed replay
    /// leaves the cursor in place.
    pub fn undo(&mut self, outline: &mut Outline) -> Result<bool> {
        let Some(command) = self.history.begin_undo() else {
            return Ok(false);
        };
        tracing::debug!("[Session::undo] {:?} on '{}'", command, outline.name());

        match outline.apply_command(self, command.inverse()) {
            Ok(()) => {
                self.history.finish_undo();
                Ok(true)
            }
            Err(err) => {
                tracing::warn!("[Session::undo] replay failed: {}", err);
                self.history.abort();
                Err(err)
            }
        }
    }

    /// Redo the next command against `outline`
    pub fn redo(&mut self, outline: &mut Outline) -> Result<bool> {
        let Some(command) = self.history.begin_redo() else {
            return Ok(false);
        };
        tracing::debug!("[Session::redo] {:?} on '{}'", command, outline.name());

        match outline.apply_command(self, command) {
            Ok(()) => {
                self.history.finish_redo();
                Ok(true)
            }
            Err(err) => {
                tracing::warn!("[Session::redo] replay failed: {}", err);
                self.history.abort();
                Err(err)
            }
        }
    }

    pub fn has_undo(&self) -> bool {
        self.history.has_undo()
    }

    pub fn has_redo(&self) -> bool {
        self.history.has_redo()
    }

    /// Cap the history length, 0 for unlimited
    pub fn set_undo_limit(&mut self, limit: usize) {
        self.history.set_limit(limit);
    }

    pub fn set_history_callback(&mut self, callback: impl FnMut() + 'static) {
        self.history.set_callback(callback);
    }
}
