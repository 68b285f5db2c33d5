//! Tee fitting: a straight run with a branch opening upward.

use std::f64::consts::FRAC_PI_2;

use pv_core::{Real, Rgb, Vec2};

use crate::arc::ARC_SEGMENTS;
use crate::elbow::INNER_RADIUS;
use crate::primitive::{outlined_polygon, Primitive, OUTLINE_WIDTH};
use crate::PORT_REACH;

/// Tee in the local frame, node at the origin (center of the straight run).
///
/// Run ports open at `x = ±1.25d`, the branch opens upward at `y = -1.25d`;
/// the two inner fillets are quarter arcs of radius `0.75d` centered at
/// `(±1.25d, -1.25d)`.
pub fn tee(d: Real, color: Rgb) -> Vec<Primitive> {
    let r = d * INNER_RADIUS;
    let reach = d * PORT_REACH;
    let left_center = Vec2::new(-reach, -reach);
    let right_center = Vec2::new(reach, -reach);

    // Right fillet: from the right port edge up into the branch.
    let mut right_arc = Vec::with_capacity(ARC_SEGMENTS + 1);
    // Left fillet: from the branch down to the left port edge.
    let mut left_arc = Vec::with_capacity(ARC_SEGMENTS + 1);
    for i in 0..=ARC_SEGMENTS {
        let a = FRAC_PI_2 * i as Real / ARC_SEGMENTS as Real;
        right_arc.push(right_center + Vec2::new(-r * a.sin(), r * a.cos()));
        left_arc.push(left_center + Vec2::new(r * a.cos(), r * a.sin()));
    }

    let mut points = right_arc.clone();
    points.extend(left_arc.iter().copied());
    // Close the straight run along the bottom edge.
    points.push(Vec2::new(-reach, d / 2.0));
    points.push(Vec2::new(reach, d / 2.0));

    let mut prims = outlined_polygon(points, color);

    let border = color.darkened(40);
    prims.push(Primitive::Polyline {
        points: right_arc,
        color: border,
        width: OUTLINE_WIDTH,
    });
    left_arc.reverse();
    prims.push(Primitive::Polyline {
        points: left_arc,
        color: border,
        width: OUTLINE_WIDTH,
    });
    prims
}
