//! Four-way valve: the H body with a blocking state.

use pv_core::{blink_visible, Real, Rgb, Vec2};

use crate::hshape::h_body;
use crate::marks::{x_mark, BLOCKED_MARK_COLOR, MARK_WIDTH};
use crate::primitive::Primitive;

/// Four-way valve in a frame centered on the bridge midpoint (half a cell
/// right of the node). Closed state blinks a red X over the bridge.
pub fn four_way_valve(d: Real, cell: Real, color: Rgb, closed: bool, t: Real) -> Vec<Primitive> {
    let mut prims = h_body(d, cell, color);
    if closed && blink_visible(t) {
        prims.extend(x_mark(Vec2::ZERO, d * 0.8, BLOCKED_MARK_COLOR, MARK_WIDTH));
    }
    prims
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_valve_is_just_the_body() {
        assert_eq!(four_way_valve(20.0, 50.0, Rgb(128, 128, 128), false, 0.0).len(), 2);
    }

    #[test]
    fn closed_valve_blinks_the_bridge_mark() {
        assert_eq!(four_way_valve(20.0, 50.0, Rgb(128, 128, 128), true, 0.0).len(), 4);
        assert_eq!(
            four_way_valve(20.0, 50.0, Rgb(128, 128, 128), true, 0.375).len(),
            2
        );
    }
}
