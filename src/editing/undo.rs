// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Multi-level undo/redo history.
//!
//! A linear list of commands with a cursor at the last applied one. Pushing
//! after an undo drops the redo branch. While a command is being replayed
//! the history ignores new pushes, so replay code can go through the same
//! recording mutators as user edits.

use std::fmt;

/// Ordered command history with a cursor
pub struct UndoManager<C> {
    commands: Vec<C>,
    /// Last applied command, `None` when nothing is applied
    index: Option<usize>,
    /// Maximum number of commands kept, 0 for unlimited
    limit: usize,
    executing: bool,
    callback: Option<Box<dyn FnMut()>>,
}

impl<C> Default for UndoManager<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: fmt::Debug> fmt::Debug for UndoManager<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UndoManager")
            .field("commands", &self.commands)
            .field("index", &self.index)
            .field("limit", &self.limit)
            .field("executing", &self.executing)
            .finish_non_exhaustive()
    }
}

impl<C> UndoManager<C> {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            index: None,
            limit: 0,
            executing: false,
            callback: None,
        }
    }

    /// Record a command that was just applied
    pub fn add(&mut self, command: C) {
        if self.executing {
            return;
        }

        let keep = self.index.map_or(0, |index| index + 1);
        self.commands.truncate(keep);
        self.commands.push(command);

        if self.limit > 0 && self.commands.len() > self.limit {
            let excess = self.commands.len() - self.limit;
            self.commands.drain(..excess);
        }

        self.index = self.commands.len().checked_sub(1);
        self.notify();
    }

    /// Drop every command
    pub fn clear(&mut self) {
        let had_commands = !self.commands.is_empty();
        self.commands.clear();
        self.index = None;
        if had_commands {
            self.notify();
        }
    }

    pub fn has_undo(&self) -> bool {
        self.index.is_some()
    }

    pub fn has_redo(&self) -> bool {
        self.redo_index() < self.commands.len()
    }

    pub fn commands(&self) -> &[C] {
        &self.commands
    }

    /// Position of the last applied command
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn is_executing(&self) -> bool {
        self.executing
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Cap the history length. Takes effect on the next push.
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
    }

    /// Called after every push, undo, redo and non-empty clear
    pub fn set_callback(&mut self, callback: impl FnMut() + 'static) {
        self.callback = Some(Box::new(callback));
    }

    /// Undo the command at the cursor through `apply`.
    ///
    /// Returns `Ok(false)` when there is nothing to undo. If `apply` fails
    /// the cursor stays where it was.
    pub fn undo_with<E>(&mut self, apply: impl FnOnce(&C) -> Result<(), E>) -> Result<bool, E>
    where
        C: Clone,
    {
        let Some(command) = self.begin_undo() else {
            return Ok(false);
        };
        match apply(&command) {
            Ok(()) => {
                self.finish_undo();
                Ok(true)
            }
            Err(err) => {
                self.abort();
                Err(err)
            }
        }
    }

    /// Redo the command after the cursor through `apply`
    pub fn redo_with<E>(&mut self, apply: impl FnOnce(&C) -> Result<(), E>) -> Result<bool, E>
    where
        C: Clone,
    {
        let Some(command) = self.begin_redo() else {
            return Ok(false);
        };
        match apply(&command) {
            Ok(()) => {
                self.finish_redo();
                Ok(true)
            }
            Err(err) => {
                self.abort();
                Err(err)
            }
        }
    }

    // ===== REPLAY PROTOCOL =====
    //
    // Split form of `undo_with`/`redo_with` for callers whose replay needs
    // `&mut` access to the structure that owns this history.

    /// Hold the executing guard and hand out the command to undo
    pub(crate) fn begin_undo(&mut self) -> Option<C>
    where
        C: Clone,
    {
        let command = self.commands.get(self.index?)?.clone();
        self.executing = true;
        Some(command)
    }

    pub(crate) fn finish_undo(&mut self) {
        self.executing = false;
        self.index = self.index.and_then(|index| index.checked_sub(1));
        self.notify();
    }

    /// Hold the executing guard and hand out the command to redo
    pub(crate) fn begin_redo(&mut self) -> Option<C>
    where
        C: Clone,
    {
        let command = self.commands.get(self.redo_index())?.clone();
        self.executing = true;
        Some(command)
    }

    pub(crate) fn finish_redo(&mut self) {
        self.executing = false;
        self.index = Some(self.redo_index());
        self.notify();
    }

    /// Release the executing guard without moving the cursor
    pub(crate) fn abort(&mut self) {
        self.executing = false;
    }

    fn redo_index(&self) -> usize {
        self.index.map_or(0, |index| index + 1)
    }

    fn notify(&mut self) {
        if let Some(callback) = self.callback.as_mut() {
            callback();
        }
    }
}
