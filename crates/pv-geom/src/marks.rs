//! Small overlay glyphs: flow arrowheads and X marks.

use pv_core::{Real, Rgb, Vec2};

use crate::primitive::Primitive;

/// Color of the blocked-state X overlay.
pub const BLOCKED_MARK_COLOR: Rgb = Rgb(255, 50, 50);

/// Stroke width of X overlays.
pub const MARK_WIDTH: Real = 3.0;

/// Back-swept wing angle of a flow arrowhead, radians from the flow
/// direction (about 160 degrees, pointing backward from the tip).
const WING_ANGLE: Real = 2.8;

/// An X mark centered on `center` with total extent `size`.
pub fn x_mark(center: Vec2, size: Real, color: Rgb, width: Real) -> Vec<Primitive> {
    let h = size / 2.0;
    vec![
        Primitive::Line {
            a: center + Vec2::new(-h, -h),
            b: center + Vec2::new(h, h),
            color,
            width,
        },
        Primitive::Line {
            a: center + Vec2::new(-h, h),
            b: center + Vec2::new(h, -h),
            color,
            width,
        },
    ]
}

/// A filled triangular arrowhead at `pos`, pointing along `angle` (radians,
/// screen convention), with tip-to-base size `size`.
pub fn arrow_head(pos: Vec2, angle: Real, size: Real, color: Rgb) -> Primitive {
    let tip = pos + Vec2::new(angle.cos(), angle.sin()) * size;
    let wing = size * 0.7;
    let left = tip + Vec2::new((angle + WING_ANGLE).cos(), (angle + WING_ANGLE).sin()) * wing;
    let right = tip + Vec2::new((angle - WING_ANGLE).cos(), (angle - WING_ANGLE).sin()) * wing;
    Primitive::Polygon {
        points: vec![tip, left, right],
        fill: color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x_mark_spans_its_size() {
        let prims = x_mark(Vec2::new(5.0, 5.0), 4.0, Rgb::WHITE, 2.0);
        assert_eq!(prims.len(), 2);
        match &prims[0] {
            Primitive::Line { a, b, .. } => {
                assert_eq!(*a, Vec2::new(3.0, 3.0));
                assert_eq!(*b, Vec2::new(7.0, 7.0));
            }
            other => panic!("unexpected primitive {other:?}"),
        }
    }

    #[test]
    fn arrow_tip_leads_the_anchor() {
        let prim = arrow_head(Vec2::ZERO, 0.0, 10.0, Rgb::WHITE);
        match prim {
            Primitive::Polygon { points, .. } => {
                // Tip sits `size` ahead along +x; wings trail behind it.
                assert!((points[0].x - 10.0).abs() < 1e-9);
                assert!(points[1].x < points[0].x);
                assert!(points[2].x < points[0].x);
            }
            other => panic!("unexpected primitive {other:?}"),
        }
    }
}
