//! pv-view: the grid-to-pixel view transform.
//!
//! A scene is authored in grid coordinates; everything the render driver sees
//! is in pixels. `ViewTransform` owns the mapping plus the two camera moves
//! the shell needs: auto-fit after a (re)load and cursor-anchored wheel zoom.

use pv_core::{BASE_CELL_SIZE, Real, Vec2};

/// Interactive zoom clamp range.
pub const MIN_ZOOM: Real = 0.1;
pub const MAX_ZOOM: Real = 5.0;

/// Auto-fit never zooms in past this factor.
pub const FIT_MAX_ZOOM: Real = 2.0;

/// Fraction of the viewport the fitted scene may occupy.
const FIT_MARGIN: Real = 0.9;

/// Maps grid coordinates to screen pixels: `pixel = grid * cell * zoom + pan`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub cell_size: Real,
    pub zoom: Real,
    pub pan: Vec2,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            cell_size: BASE_CELL_SIZE,
            zoom: 1.0,
            pan: Vec2::ZERO,
        }
    }
}

impl ViewTransform {
    /// Effective cell size in pixels at the current zoom.
    pub fn scaled_cell(&self) -> Real {
        self.cell_size * self.zoom
    }

    pub fn grid_to_pixel(&self, grid: Vec2) -> Vec2 {
        grid * self.scaled_cell() + self.pan
    }

    pub fn pixel_to_grid(&self, pixel: Vec2) -> Vec2 {
        (pixel - self.pan) * (1.0 / self.scaled_cell())
    }

    /// Fit the view to a grid-space bounding box.
    ///
    /// The box is padded by one cell per side, scaled to fill 90% of the
    /// viewport (zoom capped at [`FIT_MAX_ZOOM`]) and centered. `None` bounds
    /// (an empty scene) resets to the identity view.
    pub fn fit_to_bounds(
        &mut self,
        bounds: Option<(Vec2, Vec2)>,
        viewport_w: Real,
        viewport_h: Real,
    ) {
        let Some((min, max)) = bounds else {
            self.zoom = 1.0;
            self.pan = Vec2::ZERO;
            return;
        };

        let min = min - Vec2::new(1.0, 1.0);
        let max = max + Vec2::new(1.0, 1.0);
        let center = (min + max) * 0.5;
        let width_px = (max.x - min.x) * self.cell_size;
        let height_px = (max.y - min.y) * self.cell_size;

        let zoom_x = if width_px > 0.0 {
            viewport_w * FIT_MARGIN / width_px
        } else {
            1.0
        };
        let zoom_y = if height_px > 0.0 {
            viewport_h * FIT_MARGIN / height_px
        } else {
            1.0
        };
        self.zoom = zoom_x.min(zoom_y).min(FIT_MAX_ZOOM);
        self.pan = Vec2::new(viewport_w, viewport_h) * 0.5 - center * self.scaled_cell();
    }

    /// Multiply the zoom by `factor`, clamped to [`MIN_ZOOM`]..=[`MAX_ZOOM`],
    /// keeping the grid point under `cursor` fixed on screen.
    pub fn zoom_about(&mut self, cursor: Vec2, factor: Real) {
        let old_zoom = self.zoom;
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        let change = self.zoom / old_zoom;
        self.pan = cursor - (cursor - self.pan) * change;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_grid_and_pixel() {
        let view = ViewTransform {
            zoom: 1.7,
            pan: Vec2::new(12.0, -30.0),
            ..Default::default()
        };
        let grid = Vec2::new(4.0, 7.0);
        let back = view.pixel_to_grid(view.grid_to_pixel(grid));
        assert!((back.x - grid.x).abs() < 1e-9 && (back.y - grid.y).abs() < 1e-9);
    }

    #[test]
    fn fit_centers_and_caps_zoom() {
        let mut view = ViewTransform::default();
        // Tiny 1x1 box in a large viewport would want a huge zoom.
        view.fit_to_bounds(
            Some((Vec2::new(2.0, 2.0), Vec2::new(3.0, 3.0))),
            1920.0,
            1080.0,
        );
        assert_eq!(view.zoom, FIT_MAX_ZOOM);
        let center = view.grid_to_pixel(Vec2::new(2.5, 2.5));
        assert!((center.x - 960.0).abs() < 1e-6 && (center.y - 540.0).abs() < 1e-6);
    }

    #[test]
    fn fit_fills_ninety_percent_of_the_tight_axis() {
        let mut view = ViewTransform::default();
        // 10x2 box (padded to 12x4) in a square viewport: width limits.
        view.fit_to_bounds(
            Some((Vec2::new(0.0, 0.0), Vec2::new(10.0, 2.0))),
            1000.0,
            1000.0,
        );
        assert!((view.zoom - 900.0 / (12.0 * 50.0)).abs() < 1e-9);
    }

    #[test]
    fn empty_bounds_reset_the_view() {
        let mut view = ViewTransform {
            zoom: 3.0,
            pan: Vec2::new(99.0, 99.0),
            ..Default::default()
        };
        view.fit_to_bounds(None, 800.0, 600.0);
        assert_eq!(view.zoom, 1.0);
        assert_eq!(view.pan, Vec2::ZERO);
    }

    #[test]
    fn zoom_about_keeps_the_cursor_point_fixed() {
        let mut view = ViewTransform::default();
        let cursor = Vec2::new(400.0, 300.0);
        let anchored = view.pixel_to_grid(cursor);
        view.zoom_about(cursor, 1.1);
        let after = view.pixel_to_grid(cursor);
        assert!((after.x - anchored.x).abs() < 1e-9 && (after.y - anchored.y).abs() < 1e-9);
    }

    #[test]
    fn zoom_clamps_to_range() {
        let mut view = ViewTransform::default();
        for _ in 0..100 {
            view.zoom_about(Vec2::ZERO, 0.5);
        }
        assert_eq!(view.zoom, MIN_ZOOM);
        for _ in 0..100 {
            view.zoom_about(Vec2::ZERO, 2.0);
        }
        assert_eq!(view.zoom, MAX_ZOOM);
    }
}
