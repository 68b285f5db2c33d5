//! Drawable primitives and the local-frame placement transform.

use pv_core::{deg_to_rad, Real, Rgb, Vec2};

/// Stroke width used for every symbol outline.
pub const OUTLINE_WIDTH: Real = 2.0;

/// A resolution-independent drawing command. The render driver consumes these
/// in order; later primitives paint over earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Closed filled polygon.
    Polygon { points: Vec<Vec2>, fill: Rgb },
    /// Open stroked path.
    Polyline {
        points: Vec<Vec2>,
        color: Rgb,
        width: Real,
    },
    /// Single stroked segment.
    Line {
        a: Vec2,
        b: Vec2,
        color: Rgb,
        width: Real,
    },
    Circle {
        center: Vec2,
        radius: Real,
        fill: Option<Rgb>,
        stroke: Option<(Rgb, Real)>,
    },
    /// Text centered on `anchor`. Glyph rasterization is the render driver's
    /// concern; the kernel only positions and sizes it.
    Text {
        anchor: Vec2,
        text: String,
        size: Real,
        color: Rgb,
    },
}

impl Primitive {
    fn map_points(&mut self, f: impl Fn(Vec2) -> Vec2) {
        match self {
            Primitive::Polygon { points, .. } | Primitive::Polyline { points, .. } => {
                for p in points {
                    *p = f(*p);
                }
            }
            Primitive::Line { a, b, .. } => {
                *a = f(*a);
                *b = f(*b);
            }
            Primitive::Circle { center, .. } => *center = f(*center),
            Primitive::Text { anchor, .. } => *anchor = f(*anchor),
        }
    }
}

/// Place local-frame primitives into the world: rigid rotation about the
/// local origin (the symbol node), then translation to `world`.
///
/// Circles rotate their centers; text rotates its anchor but stays upright.
pub fn place(mut prims: Vec<Primitive>, rotation_deg: Real, world: Vec2) -> Vec<Primitive> {
    let angle = deg_to_rad(rotation_deg);
    for prim in &mut prims {
        prim.map_points(|p| p.rotated(angle) + world);
    }
    prims
}

/// Filled polygon plus its closed outline in the darkened body color.
pub fn outlined_polygon(points: Vec<Vec2>, fill: Rgb) -> Vec<Primitive> {
    let mut outline = points.clone();
    if let Some(first) = outline.first().copied() {
        outline.push(first);
    }
    vec![
        Primitive::Polygon {
            points,
            fill,
        },
        Primitive::Polyline {
            points: outline,
            color: fill.darkened(40),
            width: OUTLINE_WIDTH,
        },
    ]
}
