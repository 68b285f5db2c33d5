//! The shared H-shaped body used by the four-way valve and heat exchanger.

use pv_core::{Real, Rgb, Vec2};

use crate::primitive::{outlined_polygon, Primitive};

/// Height of each vertical bar above/below the bridge centerline, as a
/// multiple of the pipe diameter.
pub const BAR_HALF_HEIGHT: Real = 2.0;

/// H-shaped body in a frame centered on the bridge midpoint.
///
/// The two vertical bars sit half a cell either side of the center (`cell`
/// apart), each one diameter wide with `0.75d` outer flanges at bridge
/// height; the bridge spans between the bars over `y in [-d, d]`. Ports are
/// the four bar ends at `y = ±2d`.
///
/// The symbol spans one cell between bar centers, so callers place it half a
/// cell to the right of the component node (the node is the left bar).
pub fn h_body(d: Real, cell: Real, color: Rgb) -> Vec<Primitive> {
    let hx = cell / 2.0;
    let p = |x: Real, y: Real| Vec2::new(x, y);

    let points = vec![
        // Left bar, traced from the lower bridge corner.
        p(-hx + d * 0.5, d),
        p(-hx + d * 0.5, d * 2.0),
        p(-hx - d * 0.5, d * 2.0),
        p(-hx - d * 0.5, d),
        p(-hx - d * 0.75, d),
        p(-hx - d * 0.75, -d),
        p(-hx - d * 0.5, -d),
        p(-hx - d * 0.5, -d * 2.0),
        p(-hx + d * 0.5, -d * 2.0),
        p(-hx + d * 0.5, -d),
        // Across the bridge top to the right bar.
        p(hx - d * 0.5, -d),
        p(hx - d * 0.5, -d * 2.0),
        p(hx + d * 0.5, -d * 2.0),
        p(hx + d * 0.5, -d),
        p(hx + d * 0.75, -d),
        p(hx + d * 0.75, d),
        p(hx + d * 0.5, d),
        p(hx + d * 0.5, d * 2.0),
        p(hx - d * 0.5, d * 2.0),
        p(hx - d * 0.5, d),
        // Closing edge runs back across the bridge bottom.
    ];

    outlined_polygon(points, color)
}
