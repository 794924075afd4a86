// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! The manager: one entry point for a host canvas.
//!
//! It owns the editing session and every outline on it, keeps exactly one
//! outline current (the one receiving pointer input and undo/redo), and
//! wires the grid, the reference overlay and the viewport to the same
//! surface. Outline events are forwarded to manager subscribers, together
//! with `add` and `delete` for outline lifecycle.

use crate::config::ManagerOptions;
use crate::editing::{
    BackgroundImage, EventHandlers, MouseEvent, Outline, OutlineEventKind, OutlineEventPayload,
    OutlineSpec, OverlaySizing, PartialOutlineOptions, Session, ViewEventKind, ViewPort,
};
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::model::PathJson;
use crate::render::Surface;
use crate::settings;
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::path::Path;
use std::rc::Rc;

/// Events published by the manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ManagerEventKind {
    /// An outline was added and made current
    Add,
    /// An outline was removed
    Delete,
    AddDot,
    RemoveDot,
    Drag,
    Close,
    Open,
    Change,
}

impl From<OutlineEventKind> for ManagerEventKind {
    fn from(kind: OutlineEventKind) -> Self {
        match kind {
            OutlineEventKind::AddDot => ManagerEventKind::AddDot,
            OutlineEventKind::RemoveDot => ManagerEventKind::RemoveDot,
            OutlineEventKind::Drag => ManagerEventKind::Drag,
            OutlineEventKind::Close => ManagerEventKind::Close,
            OutlineEventKind::Open => ManagerEventKind::Open,
            OutlineEventKind::Change => ManagerEventKind::Change,
        }
    }
}

pub type ManagerEventHandler = Rc<dyn Fn(&OutlineEventPayload)>;
pub type AnyManagerEventHandler = Rc<dyn Fn(ManagerEventKind, &OutlineEventPayload)>;

/// Manager subscribers, shared with the forwarding hook of every outline
#[derive(Default)]
struct ManagerHandlers {
    handlers: Vec<(ManagerEventKind, ManagerEventHandler)>,
    any: Vec<AnyManagerEventHandler>,
}

impl ManagerHandlers {
    fn emit(&self, kind: ManagerEventKind, payload: &OutlineEventPayload) {
        for (_, handler) in self.handlers.iter().filter(|(k, _)| *k == kind) {
            handler(payload);
        }
        for handler in &self.any {
            handler(kind, payload);
        }
    }
}

/// Owner of every outline on one surface
pub struct Manager<S: Surface> {
    session: Session<S>,
    outlines: Vec<Outline>,
    /// Name of the outline receiving pointer input
    current: Option<String>,
    options: ManagerOptions,
    viewport: ViewPort,
    grid: Option<Grid>,
    overlay: Option<BackgroundImage>,
    handlers: Rc<RefCell<ManagerHandlers>>,
    /// Hooks given to every outline added from now on
    outline_handlers: EventHandlers,
    /// Screen position of the last pan-mode pointer event while pressed
    pan_anchor: Option<Point>,
}

impl<S: Surface> fmt::Debug for Manager<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Manager")
            .field("outlines", &self.outlines.len())
            .field("current", &self.current)
            .field("options", &self.options)
            .field("viewport", &self.viewport)
            .field("grid", &self.grid.is_some())
            .field("overlay", &self.overlay.is_some())
            .finish()
    }
}

impl<S: Surface> Manager<S> {
    pub fn new(surface: S, options: ManagerOptions) -> Self {
        if let Err(err) = options.validate() {
            tracing::warn!("[Manager] {}", err);
        }
        let mut session = Session::new(surface);
        session.set_undo_limit(options.undo_limit);
        let viewport = ViewPort::new(options.min_zoom, options.max_zoom, options.zoom_step);

        let mut manager = Self {
            session,
            outlines: Vec::new(),
            current: None,
            options,
            viewport,
            grid: None,
            overlay: None,
            handlers: Rc::default(),
            outline_handlers: EventHandlers::default(),
            pan_anchor: None,
        };
        if manager.options.show_grid {
            manager.draw_grid(None);
        }
        manager
    }

    // ===== SUBSCRIPTIONS =====

    pub fn on(&mut self, kind: ManagerEventKind, handler: impl Fn(&OutlineEventPayload) + 'static) {
        self.handlers.borrow_mut().handlers.push((kind, Rc::new(handler)));
    }

    pub fn on_any(&mut self, handler: impl Fn(ManagerEventKind, &OutlineEventPayload) + 'static) {
        self.handlers.borrow_mut().any.push(Rc::new(handler));
    }

    /// Hooks every outline added after this call subscribes on activation
    pub fn set_outline_handlers(&mut self, handlers: EventHandlers) {
        self.outline_handlers = handlers;
    }

    fn emit(&self, kind: ManagerEventKind, payload: &OutlineEventPayload) {
        self.handlers.borrow().emit(kind, payload);
    }

    // ===== OUTLINES =====

    /// Add an outline and make it current, deactivating the previous one
    pub fn add_outline(&mut self, mut spec: OutlineSpec) -> Result<()> {
        if self.outline(&spec.name).is_some() {
            tracing::warn!("[Manager] outline '{}' already exists", spec.name);
            return Err(Error::DuplicateOutline(spec.name));
        }

        if let Some(index) = self.current_index() {
            self.outlines[index].deactivate(&mut self.session);
        }

        spec.events = self.chain_handlers(spec.events);
        let mut outline = Outline::new(&mut self.session, spec);
        outline.activate(&mut self.session);

        let payload = OutlineEventPayload { path: outline.data() };
        tracing::info!("[Manager] added outline '{}'", outline.name());
        self.current = Some(outline.name().to_string());
        self.outlines.push(outline);
        self.emit(ManagerEventKind::Add, &payload);
        Ok(())
    }

    /// Destroy an outline.
    ///
    /// Removing the current outline makes the most recently added remaining
    /// one current.
    pub fn remove_outline(&mut self, name: &str) -> Result<()> {
        let Some(index) = self.outlines.iter().position(|outline| outline.name() == name) else {
            tracing::warn!("[Manager] cannot remove unknown outline '{}'", name);
            return Err(Error::UnknownOutline(name.to_string()));
        };

        let outline = self.outlines.remove(index);
        let payload = OutlineEventPayload { path: outline.data() };
        outline.destroy(&mut self.session);
        tracing::info!("[Manager] removed outline '{}'", name);

        if self.current.as_deref() == Some(name) {
            self.current = None;
            if let Some(last) = self.outlines.last_mut() {
                last.activate(&mut self.session);
                self.current = Some(last.name().to_string());
            }
        }
        self.session.layers.activate_top_layer(&mut self.session.surface);
        self.emit(ManagerEventKind::Delete, &payload);
        Ok(())
    }

    /// Close the current outline. `Ok(false)` if it could not be closed.
    pub fn close_current_outline(&mut self) -> Result<bool> {
        let index = self.current_index().ok_or(Error::NoActiveOutline)?;
        Ok(self.outlines[index].close_path(&mut self.session))
    }

    pub fn undo(&mut self) -> Result<bool> {
        let index = self.current_index().ok_or(Error::NoActiveOutline)?;
        self.session.undo(&mut self.outlines[index])
    }

    pub fn redo(&mut self) -> Result<bool> {
        let index = self.current_index().ok_or(Error::NoActiveOutline)?;
        self.session.redo(&mut self.outlines[index])
    }

    pub fn has_undo(&self) -> bool {
        self.session.has_undo()
    }

    pub fn has_redo(&self) -> bool {
        self.session.has_redo()
    }

    pub fn set_outline_styles(&mut self, name: &str, partial: &PartialOutlineOptions) -> Result<()> {
        let index = self.index_of(name)?;
        self.outlines[index].set_options(&mut self.session, partial);
        Ok(())
    }

    pub fn reset_outline_styles(&mut self, name: &str) -> Result<()> {
        let index = self.index_of(name)?;
        self.outlines[index].reset_options(&mut self.session);
        Ok(())
    }

    // ===== POINTER =====

    /// Route a pointer event at canvas position `point`.
    ///
    /// In pan mode presses and drags move the view and never reach the
    /// current outline.
    pub fn handle_pointer(&mut self, kind: ViewEventKind, point: Point) {
        if self.viewport.is_pan_mode_enabled() {
            self.handle_pan(kind, point);
            return;
        }

        let Some(index) = self.current_index() else {
            return;
        };
        self.outlines[index].handle_view_event(kind, &MouseEvent::new(point), &mut self.session);
    }

    fn handle_pan(&mut self, kind: ViewEventKind, point: Point) {
        let screen = self.viewport.canvas_to_screen(&self.session.surface, point);
        match kind {
            ViewEventKind::MouseDown => self.pan_anchor = Some(screen),
            ViewEventKind::MouseDrag => {
                if let Some(anchor) = self.pan_anchor {
                    self.viewport.pan(&mut self.session.surface, screen - anchor);
                    self.redraw_grid();
                }
                self.pan_anchor = Some(screen);
            }
            ViewEventKind::MouseUp | ViewEventKind::MouseLeave => self.pan_anchor = None,
            ViewEventKind::MouseMove => {}
        }
    }

    // ===== EXPORT =====

    /// Every outline in the order they were added
    pub fn export_as_json(&self) -> Vec<PathJson> {
        self.outlines.iter().map(Outline::export_json).collect()
    }

    pub fn export_as_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.export_as_json())?)
    }

    // ===== GRID =====

    /// Draw the grid, or redraw it with a new cell size.
    ///
    /// Without a cell size a new grid divides the view width into the
    /// default number of cells, and an existing one keeps its size.
    pub fn draw_grid(&mut self, cell_size: Option<f64>) {
        if let Some(grid) = self.grid.as_mut() {
            grid.redraw(&mut self.session.surface, cell_size);
            return;
        }
        let cell_size = cell_size.unwrap_or_else(|| {
            self.session.surface.view_size().width / settings::grid::DEFAULT_NUMBER_CELL
        });
        let layer = self.session.layers.grid_layer();
        self.grid = Some(Grid::new(&mut self.session.surface, layer, cell_size));
    }

    pub fn remove_grid(&mut self) {
        if let Some(mut grid) = self.grid.take() {
            grid.destroy(&mut self.session.surface);
        }
    }

    fn redraw_grid(&mut self) {
        if let Some(grid) = self.grid.as_mut() {
            grid.redraw(&mut self.session.surface, None);
        }
    }

    // ===== OVERLAY =====

    /// Load a reference image from disk, replacing the current one.
    ///
    /// With no `sizing` the image is fitted into the view unless auto
    /// resize is disabled in the options.
    pub fn load_overlay_file(&mut self, path: &Path, sizing: Option<OverlaySizing>) -> Result<OverlaySizing> {
        self.remove_overlay();
        let layer = self.session.layers.overlay_layer();
        let overlay = BackgroundImage::load(&mut self.session.surface, layer, path)?;
        Ok(self.place_overlay(overlay, sizing))
    }

    /// Place a reference image the host decoded itself, given its natural size
    pub fn load_overlay_size(
        &mut self,
        source: impl Into<String>,
        size: Size,
        sizing: Option<OverlaySizing>,
    ) -> OverlaySizing {
        self.remove_overlay();
        let layer = self.session.layers.overlay_layer();
        let overlay = BackgroundImage::from_size(&mut self.session.surface, layer, source, size);
        self.place_overlay(overlay, sizing)
    }

    fn place_overlay(&mut self, mut overlay: BackgroundImage, sizing: Option<OverlaySizing>) -> OverlaySizing {
        let surface = &mut self.session.surface;
        match sizing {
            Some(sizing) => overlay.resize(surface, sizing),
            None if !self.options.disable_overlay_auto_resize => {
                let view_size = surface.view_size();
                overlay.fit_into_view(surface, view_size);
            }
            None => {}
        }
        let sizing = overlay.sizing();
        self.overlay = Some(overlay);
        sizing
    }

    pub fn overlay_sizing(&self) -> Option<OverlaySizing> {
        self.overlay.as_ref().map(BackgroundImage::sizing)
    }

    pub fn remove_overlay(&mut self) {
        if let Some(overlay) = self.overlay.take() {
            overlay.remove(&mut self.session.surface);
        }
    }

    // ===== VIEW =====

    pub fn zoom_in(&mut self) -> f64 {
        let zoom = self.viewport.zoom_in(&mut self.session.surface);
        self.redraw_grid();
        zoom
    }

    pub fn zoom_out(&mut self) -> f64 {
        let zoom = self.viewport.zoom_out(&mut self.session.surface);
        self.redraw_grid();
        zoom
    }

    pub fn reset_zoom(&mut self) {
        self.viewport.reset_zoom(&mut self.session.surface);
        self.redraw_grid();
    }

    pub fn toggle_pan_mode(&mut self) -> bool {
        self.pan_anchor = None;
        self.viewport.toggle_pan_mode()
    }

    pub fn is_pan_mode_enabled(&self) -> bool {
        self.viewport.is_pan_mode_enabled()
    }

    // ===== ACCESSORS =====

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn surface(&self) -> &S {
        &self.session.surface
    }

    pub fn options(&self) -> &ManagerOptions {
        &self.options
    }

    pub fn outlines(&self) -> &[Outline] {
        &self.outlines
    }

    pub fn outline(&self, name: &str) -> Option<&Outline> {
        self.outlines.iter().find(|outline| outline.name() == name)
    }

    pub fn current_outline(&self) -> Option<&Outline> {
        self.current.as_deref().and_then(|name| self.outline(name))
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    fn current_index(&self) -> Option<usize> {
        let name = self.current.as_deref()?;
        self.outlines.iter().position(|outline| outline.name() == name)
    }

    fn index_of(&self, name: &str) -> Result<usize> {
        self.outlines
            .iter()
            .position(|outline| outline.name() == name)
            .ok_or_else(|| Error::UnknownOutline(name.to_string()))
    }

    /// Combine an outline's own hooks with the manager-wide ones and the
    /// forwarding hook that republishes outline events to manager subscribers
    fn chain_handlers(&self, own: EventHandlers) -> EventHandlers {
        let user_all = own.all.or_else(|| self.outline_handlers.all.clone());
        let manager = Rc::clone(&self.handlers);
        EventHandlers {
            all: Some(Rc::new(move |kind: OutlineEventKind, payload: &OutlineEventPayload| {
                if let Some(user_all) = &user_all {
                    user_all(kind, payload);
                }
                manager.borrow().emit(kind.into(), payload);
            })),
            change: own.change.or_else(|| self.outline_handlers.change.clone()),
        }
    }
}
