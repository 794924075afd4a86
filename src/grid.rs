// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Scale reference grid drawn across the visible area

use crate::render::{ItemId, LayerId, Parent, Shape, Style, Surface};
use crate::settings;
use crate::theme;
use kurbo::{Line, Point};

/// Square grid on the grid layer.
///
/// Lines only cover the view bounds at the time of drawing, so the grid
/// must be redrawn after every zoom or pan.
#[derive(Debug, Clone)]
pub struct Grid {
    layer: LayerId,
    cell_size: f64,
    lines: Vec<ItemId>,
}

impl Grid {
    pub fn new(surface: &mut dyn Surface, layer: LayerId, cell_size: f64) -> Self {
        let mut grid = Self {
            layer,
            cell_size,
            lines: Vec::new(),
        };
        grid.draw(surface);
        grid
    }

    /// Redraw over the current view, switching to `cell_size` if given
    pub fn redraw(&mut self, surface: &mut dyn Surface, cell_size: Option<f64>) {
        if let Some(cell_size) = cell_size {
            self.cell_size = cell_size;
        }
        self.draw(surface);
    }

    /// Remove every grid line
    pub fn destroy(&mut self, surface: &mut dyn Surface) {
        for line in self.lines.drain(..) {
            surface.remove(line);
        }
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn draw(&mut self, surface: &mut dyn Surface) {
        self.destroy(surface);

        let cell = self.cell_size;
        if !cell.is_finite() || cell <= 0.0 {
            tracing::warn!("[Grid] ignoring cell size {}", cell);
            return;
        }

        let bounds = surface.view_bounds();
        if !bounds.is_finite() {
            tracing::warn!("[Grid] view bounds {:?} are not finite, skipping", bounds);
            return;
        }
        let columns = (bounds.width() / cell).floor();
        let rows = (bounds.height() / cell).floor();
        let max_lines = settings::grid::MAX_LINES;
        if columns > max_lines || rows > max_lines {
            tracing::warn!(
                "[Grid] cell size {} needs {}x{} lines, skipping",
                cell,
                columns,
                rows
            );
            return;
        }
        let (columns, rows) = (columns as usize, rows as usize);

        // Hairlines at any zoom
        let style = Style::stroked(theme::grid::LINE, 1.0 / surface.zoom());

        let first_x = (bounds.x0 / cell).ceil() * cell;
        for i in 0..=columns {
            let x = first_x + i as f64 * cell;
            let line = Line::new(Point::new(x, bounds.y0), Point::new(x, bounds.y1));
            self.lines
                .push(surface.insert(Parent::Layer(self.layer), Shape::Line(line), style, None));
        }

        let first_y = (bounds.y0 / cell).ceil() * cell;
        for i in 0..=rows {
            let y = first_y + i as f64 * cell;
            let line = Line::new(Point::new(bounds.x0, y), Point::new(bounds.x1, y));
            self.lines
                .push(surface.insert(Parent::Layer(self.layer), Shape::Line(line), style, None));
        }

        tracing::info!("[Grid] drew {} lines, cell size {}", self.lines.len(), cell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::MemorySurface;
    use kurbo::Size;

    fn surface() -> (MemorySurface, LayerId) {
        let mut surface = MemorySurface::new(Size::new(100.0, 50.0));
        let layer = surface.add_layer();
        (surface, layer)
    }

    #[test]
    fn lines_cover_view_bounds() {
        let (mut surface, layer) = surface();
        let grid = Grid::new(&mut surface, layer, 25.0);

        // x = 0, 25, 50, 75, 100 and y = 0, 25, 50
        assert_eq!(grid.line_count(), 8);
        let lines = surface.lines_in_layer(layer);
        assert_eq!(lines[0], Line::new((0.0, 0.0), (0.0, 50.0)));
        assert_eq!(lines[4], Line::new((100.0, 0.0), (100.0, 50.0)));
        assert_eq!(lines[5], Line::new((0.0, 0.0), (100.0, 0.0)));
    }

    #[test]
    fn redraw_replaces_lines_and_follows_zoom() {
        let (mut surface, layer) = surface();
        let mut grid = Grid::new(&mut surface, layer, 25.0);

        surface.set_zoom(2.0);
        grid.redraw(&mut surface, Some(10.0));
        assert_eq!(grid.cell_size(), 10.0);
        // Visible area is (25, 12.5)..(75, 37.5)
        let lines = surface.lines_in_layer(layer);
        assert_eq!(lines.len(), grid.line_count());
        assert_eq!(lines[0].p0.x, 30.0);
        assert_eq!(lines.iter().filter(|line| line.p0.x == line.p1.x).count(), 6);

        let item = surface.items_in_layer(layer)[0];
        assert_eq!(surface.style(item).map(|style| style.stroke_width), Some(0.5));
    }

    #[test]
    fn destroy_removes_every_line() {
        let (mut surface, layer) = surface();
        let mut grid = Grid::new(&mut surface, layer, 25.0);
        grid.destroy(&mut surface);
        assert_eq!(grid.line_count(), 0);
        assert!(surface.items_in_layer(layer).is_empty());
    }

    #[test]
    fn non_positive_cell_size_draws_nothing() {
        let (mut surface, layer) = surface();
        let grid = Grid::new(&mut surface, layer, 0.0);
        assert_eq!(grid.line_count(), 0);
    }

    #[test]
    fn overly_dense_grid_is_skipped() {
        let (mut surface, layer) = surface();
        let mut grid = Grid::new(&mut surface, layer, 25.0);
        grid.redraw(&mut surface, Some(1e-300));
        assert_eq!(grid.line_count(), 0);
        assert!(surface.items_in_layer(layer).is_empty());

        // Back to a sane size draws again
        grid.redraw(&mut surface, Some(25.0));
        assert_eq!(grid.line_count(), 8);
    }

    #[test]
    fn infinite_view_bounds_draw_nothing() {
        let (mut surface, layer) = surface();
        surface.set_zoom(0.0);
        let grid = Grid::new(&mut surface, layer, 25.0);
        assert_eq!(grid.line_count(), 0);
    }
}
