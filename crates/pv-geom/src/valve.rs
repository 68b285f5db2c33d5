//! Two-way valve symbol.

use std::f64::consts::PI;

use pv_core::{blink_visible, Real, Rgb, Vec2};

use crate::arc::sample_clock_arc;
use crate::marks::{x_mark, BLOCKED_MARK_COLOR, MARK_WIDTH};
use crate::primitive::{outlined_polygon, Primitive};

/// Valve body radius as a multiple of the pipe diameter (body circle is
/// 1.5 diameters across).
pub const BODY_RADIUS: Real = 0.75;

/// The valve's waisted circular body, shared with the sensor symbol: three
/// arcs of one circle, cut off where the bore enters (at half a diameter
/// above/below the node) and where the stem leaves the top.
pub(crate) struct BodyArcs {
    pub top_left: Vec<Vec2>,
    pub top_right: Vec<Vec2>,
    pub bottom: Vec<Vec2>,
}

pub(crate) fn body_arcs(d: Real) -> BodyArcs {
    let r = d * BODY_RADIUS;
    // Clock angle where the body meets the bore edge (y = ±d/2).
    let bore_cut = (d / (2.0 * r)).acos();
    // Clock angle where the body meets the stem gap at the top.
    let stem_cut = (0.2 * d / (2.0 * r)).asin();

    BodyArcs {
        top_left: sample_clock_arc(Vec2::ZERO, r, 2.0 * PI - bore_cut, 2.0 * PI - stem_cut),
        top_right: sample_clock_arc(Vec2::ZERO, r, stem_cut, bore_cut),
        bottom: sample_clock_arc(Vec2::ZERO, r, PI - bore_cut, PI + bore_cut),
    }
}

/// Short port collars extending a quarter diameter past the body on each
/// side, closing the outline down/up to the opposite arc.
pub(crate) fn port_collars(d: Real, arcs: &BodyArcs) -> (Vec<Vec2>, Vec<Vec2>) {
    let tr_last = *arcs.top_right.last().expect("arc sampled");
    let bot_first = *arcs.bottom.first().expect("arc sampled");
    let bot_last = *arcs.bottom.last().expect("arc sampled");
    let tl_first = *arcs.top_left.first().expect("arc sampled");

    let right = vec![
        Vec2::new(tr_last.x + d * 0.25, tr_last.y),
        Vec2::new(tr_last.x + d * 0.25, bot_first.y),
    ];
    let left = vec![
        Vec2::new(bot_last.x - d * 0.25, bot_last.y),
        Vec2::new(bot_last.x - d * 0.25, tl_first.y),
    ];
    (right, left)
}

/// Two-way valve in the local frame, node at the origin: waisted body, a
/// T-handle stem on top, port collars left and right. A closed valve overlays
/// a red X at the node, gated by the shared blink law.
pub fn valve(d: Real, color: Rgb, closed: bool, t: Real) -> Vec<Primitive> {
    let arcs = body_arcs(d);
    let (right_collar, left_collar) = port_collars(d, &arcs);

    // T-handle: up from the stem gap, flare out, cap, and back down.
    let tl_last = *arcs.top_left.last().expect("arc sampled");
    let tr_first = *arcs.top_right.first().expect("arc sampled");
    let mut stem = Vec::with_capacity(6);
    stem.push(Vec2::new(tl_last.x, tl_last.y - d * 0.5));
    stem.push(Vec2::new(stem[0].x - d * 0.5, stem[0].y));
    stem.push(Vec2::new(stem[1].x, stem[1].y - d * 0.2));
    stem.push(Vec2::new(stem[2].x + d * 1.2, stem[2].y));
    stem.push(Vec2::new(stem[3].x, stem[3].y + d * 0.2));
    stem.push(Vec2::new(tr_first.x, tr_first.y - d * 0.5));

    let mut points = arcs.top_left.clone();
    points.extend(stem);
    points.extend(arcs.top_right.iter().copied());
    points.extend(right_collar);
    points.extend(arcs.bottom.iter().copied());
    points.extend(left_collar);

    let mut prims = outlined_polygon(points, color);

    if closed && blink_visible(t) {
        prims.extend(x_mark(Vec2::ZERO, d * 0.8, BLOCKED_MARK_COLOR, MARK_WIDTH));
    }
    prims
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bore_edges_sit_half_a_diameter_out() {
        let d = 20.0;
        let arcs = body_arcs(d);
        // Arc endpoints at the bore cut have |y| = d/2.
        let tr_last = arcs.top_right.last().unwrap();
        assert!((tr_last.y + d / 2.0).abs() < 1e-9);
        let bot_first = arcs.bottom.first().unwrap();
        assert!((bot_first.y - d / 2.0).abs() < 1e-9);
    }

    #[test]
    fn open_valve_has_no_overlay() {
        let open = valve(20.0, Rgb(128, 128, 128), false, 0.0);
        let closed = valve(20.0, Rgb(128, 128, 128), true, 0.0);
        assert_eq!(open.len() + 2, closed.len());
    }

    #[test]
    fn closed_overlay_obeys_blink_law() {
        // Visible at t = 0 (alpha 0.5), hidden at the sine trough.
        assert_eq!(valve(20.0, Rgb(128, 128, 128), true, 0.0).len(), 4);
        assert_eq!(valve(20.0, Rgb(128, 128, 128), true, 0.375).len(), 2);
    }

    #[test]
    fn body_is_symmetric_about_the_node() {
        let arcs = body_arcs(20.0);
        let tl_first = arcs.top_left.first().unwrap();
        let tr_last = arcs.top_right.last().unwrap();
        assert!((tl_first.x + tr_last.x).abs() < 1e-9);
        assert!((tl_first.y - tr_last.y).abs() < 1e-9);
    }
}
