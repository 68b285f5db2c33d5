//! Heat exchanger: the H body with tube lines across the bridge.

use pv_core::{Real, Rgb, Vec2};

use crate::hshape::h_body;
use crate::primitive::Primitive;

/// Heat exchanger in a frame centered on the bridge midpoint (half a cell
/// right of the node): the H body plus three white tube lines spanning the
/// bridge at `y = -d/2, 0, +d/2`.
pub fn heat_exchanger(d: Real, cell: Real, color: Rgb) -> Vec<Primitive> {
    let mut prims = h_body(d, cell, color);

    let hx = cell / 2.0;
    let left = -hx + d * 0.5;
    let right = hx - d * 0.5;
    let width = (d / 6.0).max(1.0);
    for i in 0..3 {
        let y = d * 0.5 * (i as Real - 1.0);
        prims.push(Primitive::Line {
            a: Vec2::new(left, y),
            b: Vec2::new(right, y),
            color: Rgb::WHITE,
            width,
        });
    }
    prims
}
