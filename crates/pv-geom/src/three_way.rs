//! Three-way valve: a tee run with a valve handle, one arm always blocked.

use std::f64::consts::FRAC_PI_2;

use pv_core::{blink_visible, Real, Rgb, Vec2};

use crate::arc::ARC_SEGMENTS;
use crate::elbow::INNER_RADIUS;
use crate::marks::{x_mark, BLOCKED_MARK_COLOR, MARK_WIDTH};
use crate::primitive::{outlined_polygon, Primitive, OUTLINE_WIDTH};
use crate::PORT_REACH;

/// Which arm the valve currently blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockedArm {
    /// `base` position: right arm blocked.
    Right,
    /// `flipped` position: left arm blocked.
    Left,
}

/// Three-way valve in the local frame, node at the origin.
///
/// The run ports open at `x = ±1.25d` and the branch opens downward at
/// `y = +1.25d` (the mirror of the tee); a T-handle sits on top and a red
/// blinking X marks the blocked arm at `(±0.75d, 0)`.
pub fn three_way_valve(d: Real, color: Rgb, blocked: BlockedArm, t: Real) -> Vec<Primitive> {
    let r = d * INNER_RADIUS;
    let reach = d * PORT_REACH;
    let left_center = Vec2::new(-reach, reach);
    let right_center = Vec2::new(reach, reach);

    // Fillet arcs mirror the tee's, curving into the downward branch.
    let mut right_arc = Vec::with_capacity(ARC_SEGMENTS + 1);
    let mut left_arc = Vec::with_capacity(ARC_SEGMENTS + 1);
    for i in 0..=ARC_SEGMENTS {
        let a = FRAC_PI_2 * i as Real / ARC_SEGMENTS as Real;
        left_arc.push(left_center + Vec2::new(r * a.cos(), -r * a.sin()));
        right_arc.push(right_center + Vec2::new(-r * a.sin(), -r * a.cos()));
    }
    // Trace clockwise: branch lip -> right port, handle, left port -> branch.
    right_arc.reverse();
    left_arc.reverse();

    // T-handle bridging the top edge of the run.
    let handle = [
        Vec2::new(right_arc.last().expect("arc sampled").x, -d * 0.5),
        Vec2::new(d * 0.1, -d * 0.5),
        Vec2::new(d * 0.1, -d),
        Vec2::new(d * 0.5, -d),
        Vec2::new(d * 0.5, -d * 1.2),
        Vec2::new(-d * 0.5, -d * 1.2),
        Vec2::new(-d * 0.5, -d),
        Vec2::new(-d * 0.1, -d),
        Vec2::new(-d * 0.1, -d * 0.5),
        Vec2::new(left_arc.first().expect("arc sampled").x, -d * 0.5),
    ];

    let mut points = right_arc.clone();
    points.extend(handle);
    points.extend(left_arc.iter().copied());

    let mut prims = outlined_polygon(points, color);

    let border = color.darkened(40);
    prims.push(Primitive::Polyline {
        points: right_arc,
        color: border,
        width: OUTLINE_WIDTH,
    });
    prims.push(Primitive::Polyline {
        points: left_arc,
        color: border,
        width: OUTLINE_WIDTH,
    });

    if blink_visible(t) {
        let x = match blocked {
            BlockedArm::Right => d * 0.75,
            BlockedArm::Left => -d * 0.75,
        };
        prims.extend(x_mark(
            Vec2::new(x, 0.0),
            d * 0.5,
            BLOCKED_MARK_COLOR,
            MARK_WIDTH,
        ));
    }
    prims
}
