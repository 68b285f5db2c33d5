//! 90-degree elbow fitting.

use std::f64::consts::FRAC_PI_2;

use pv_core::{Real, Rgb, Vec2};

use crate::arc::sample_arc;
use crate::primitive::{outlined_polygon, Primitive, OUTLINE_WIDTH};
use crate::PORT_REACH;

/// Inner bend radius as a multiple of the pipe diameter. The outer radius is
/// one diameter larger so the bore width matches the connected pipes.
pub const INNER_RADIUS: Real = 0.75;

/// Quarter-annulus elbow in the local frame, node at the origin.
///
/// The arc center sits at `(-1.25d, -1.25d)`, which puts the two port
/// openings exactly `1.25 * d` from the node: one opening upward centered on
/// the node's x, one opening leftward centered on the node's y. Adjoining
/// pipes trimmed by the same factor meet the ports flush.
pub fn elbow(d: Real, color: Rgb) -> Vec<Primitive> {
    let inner = d * INNER_RADIUS;
    let outer = inner + d;
    let arc_center = Vec2::new(-(inner + d / 2.0), -(inner + d / 2.0));

    let outer_pts = sample_arc(arc_center, outer, 0.0, FRAC_PI_2);
    let mut inner_pts = sample_arc(arc_center, inner, 0.0, FRAC_PI_2);
    inner_pts.reverse();

    let mut points = outer_pts.clone();
    points.extend(inner_pts.iter().copied());

    let mut prims = outlined_polygon(points, color);

    // Accent strokes along both arcs for depth.
    let border = color.darkened(40);
    prims.push(Primitive::Polyline {
        points: outer_pts,
        color: border,
        width: OUTLINE_WIDTH,
    });
    inner_pts.reverse();
    prims.push(Primitive::Polyline {
        points: inner_pts,
        color: border,
        width: OUTLINE_WIDTH,
    });
    prims
}
