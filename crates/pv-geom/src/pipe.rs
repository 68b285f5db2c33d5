//! Pipe body and flow overlays.
//!
//! Pipes are world-space line segments rather than node-centered symbols, so
//! the builder takes pixel endpoints directly.

use pv_core::{blink_visible, Real, Rgb, Vec2};

use crate::marks::{arrow_head, x_mark};
use crate::primitive::Primitive;
use crate::PORT_REACH;

/// Pixels between successive flow arrows / no-flow marks, as a multiple of
/// the scaled diameter.
const OVERLAY_SPACING: Real = 2.5;

/// Arrowhead size as a multiple of the scaled diameter.
const ARROW_SIZE: Real = 0.6;

/// No-flow X mark size as a multiple of the scaled diameter.
const MARK_SIZE: Real = 0.4;

/// Arrow advance rate along the pipe, pixels per second.
const FLOW_SPEED: Real = 100.0;

/// Which overlay a pipe draws on top of its body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowMotif {
    /// Arrowheads advancing start -> end.
    Forward,
    /// Arrowheads advancing end -> start.
    Backward,
    /// Stationary X marks blinking with the shared blink law.
    NoFlow,
}

/// Build a pipe: thick body segment plus the animated flow overlay.
///
/// `trim_start` / `trim_end` shorten the segment by `1.25 * scaled_d` so the
/// end disappears under an adjoining fitting's body instead of double-drawing
/// the joint. A zero-length pipe (after trimming) produces no primitives.
#[allow(clippy::too_many_arguments)]
pub fn pipe(
    start: Vec2,
    end: Vec2,
    scaled_d: Real,
    color: Rgb,
    trim_start: bool,
    trim_end: bool,
    motif: FlowMotif,
    t: Real,
) -> Vec<Primitive> {
    let Some(dir) = (end - start).normalized() else {
        return Vec::new();
    };

    let trim = scaled_d * PORT_REACH;
    let mut a = start;
    let mut b = end;
    if trim_start {
        a = a + dir * trim;
    }
    if trim_end {
        b = b - dir * trim;
    }

    // Trims can consume (or flip) a short pipe; degrade to a no-op.
    let remaining = b - a;
    if remaining.length() <= 0.0 || remaining.x * dir.x + remaining.y * dir.y <= 0.0 {
        return Vec::new();
    }

    let mut prims = vec![Primitive::Line {
        a,
        b,
        color,
        width: scaled_d,
    }];

    match motif {
        FlowMotif::Forward | FlowMotif::Backward => {
            prims.extend(flow_arrows(a, b, scaled_d, motif == FlowMotif::Backward, t));
        }
        FlowMotif::NoFlow => {
            prims.extend(no_flow_marks(a, b, scaled_d, t));
        }
    }
    prims
}

fn flow_arrows(a: Vec2, b: Vec2, scaled_d: Real, backward: bool, t: Real) -> Vec<Primitive> {
    let delta = b - a;
    let length = delta.length();
    if length <= 0.0 {
        return Vec::new();
    }

    // A degenerate bore has no spacing to march arrows along.
    let spacing = scaled_d * OVERLAY_SPACING;
    if spacing <= 0.0 {
        return Vec::new();
    }

    let mut angle = delta.y.atan2(delta.x);
    if backward {
        angle += std::f64::consts::PI;
    }

    let size = scaled_d * ARROW_SIZE;
    let offset = (t * FLOW_SPEED).rem_euclid(spacing);

    let count = (length / spacing) as usize + 2;
    let mut prims = Vec::new();
    for i in 0..count {
        let distance = if backward {
            i as Real * spacing - offset
        } else {
            i as Real * spacing + offset
        };
        if distance < 0.0 || distance > length {
            continue;
        }
        let pos = a.lerp(b, distance / length);
        prims.push(arrow_head(pos, angle, size, Rgb::WHITE));
    }
    prims
}

fn no_flow_marks(a: Vec2, b: Vec2, scaled_d: Real, t: Real) -> Vec<Primitive> {
    let length = (b - a).length();
    if length <= 0.0 || !blink_visible(t) {
        return Vec::new();
    }

    let spacing = scaled_d * OVERLAY_SPACING;
    if spacing <= 0.0 {
        return Vec::new();
    }
    let size = scaled_d * MARK_SIZE;
    let count = (length / spacing) as usize + 1;

    let mut prims = Vec::new();
    for i in 0..count {
        let distance = i as Real * spacing;
        if distance > length {
            continue;
        }
        let pos = a.lerp(b, distance / length);
        prims.extend(x_mark(pos, size, Rgb::WHITE, 2.0));
    }
    prims
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_length_pipe_is_a_no_op() {
        let p = Vec2::new(50.0, 50.0);
        assert!(pipe(p, p, 20.0, Rgb(100, 150, 255), false, false, FlowMotif::Forward, 0.0)
            .is_empty());
    }

    #[test]
    fn zero_diameter_pipe_degrades_to_its_bare_body() {
        for motif in [FlowMotif::Forward, FlowMotif::Backward, FlowMotif::NoFlow] {
            let prims = pipe(
                Vec2::ZERO,
                Vec2::new(200.0, 0.0),
                0.0,
                Rgb(100, 150, 255),
                false,
                false,
                motif,
                0.5,
            );
            assert_eq!(prims.len(), 1, "overlay expected to vanish for {motif:?}");
            match &prims[0] {
                Primitive::Line { a, b, width, .. } => {
                    assert_eq!(*width, 0.0);
                    assert!(a.x.is_finite() && b.x.is_finite());
                }
                other => panic!("unexpected primitive {other:?}"),
            }
        }
    }

    #[test]
    fn negative_diameter_draws_no_overlay() {
        let prims = pipe(
            Vec2::ZERO,
            Vec2::new(200.0, 0.0),
            -20.0,
            Rgb(100, 150, 255),
            false,
            false,
            FlowMotif::Forward,
            0.5,
        );
        assert_eq!(prims.len(), 1);
    }

    #[test]
    fn body_width_is_the_scaled_diameter() {
        let prims = pipe(
            Vec2::ZERO,
            Vec2::new(200.0, 0.0),
            20.0,
            Rgb(100, 150, 255),
            false,
            false,
            FlowMotif::Forward,
            0.0,
        );
        match &prims[0] {
            Primitive::Line { width, .. } => assert_eq!(*width, 20.0),
            other => panic!("unexpected primitive {other:?}"),
        }
    }

    #[test]
    fn trims_shorten_by_port_reach() {
        let prims = pipe(
            Vec2::ZERO,
            Vec2::new(200.0, 0.0),
            20.0,
            Rgb(100, 150, 255),
            true,
            true,
            FlowMotif::NoFlow,
            // Pick a hidden-blink instant so only the body remains.
            0.375,
        );
        assert_eq!(prims.len(), 1);
        match &prims[0] {
            Primitive::Line { a, b, .. } => {
                assert!((a.x - 25.0).abs() < 1e-9);
                assert!((b.x - 175.0).abs() < 1e-9);
            }
            other => panic!("unexpected primitive {other:?}"),
        }
    }

    #[test]
    fn arrows_advance_with_time() {
        let at = |t: Real| {
            pipe(
                Vec2::ZERO,
                Vec2::new(500.0, 0.0),
                20.0,
                Rgb(100, 150, 255),
                false,
                false,
                FlowMotif::Forward,
                t,
            )
        };
        let first_tip = |prims: &[Primitive]| match &prims[1] {
            Primitive::Polygon { points, .. } => points[0].x,
            other => panic!("unexpected primitive {other:?}"),
        };
        let x0 = first_tip(&at(0.0));
        let x1 = first_tip(&at(0.1));
        // 100 px/s for 0.1 s.
        assert!((x1 - x0 - 10.0).abs() < 1e-9);
    }

    #[test]
    fn no_flow_marks_blink_off() {
        let at = |t: Real| {
            pipe(
                Vec2::ZERO,
                Vec2::new(500.0, 0.0),
                20.0,
                Rgb(100, 150, 255),
                false,
                false,
                FlowMotif::NoFlow,
                t,
            )
        };
        assert!(at(0.0).len() > 1);
        assert_eq!(at(0.375).len(), 1);
    }
}
