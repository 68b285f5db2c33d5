//! Inline sensor symbol: valve-style body with an instrument bubble.

use pv_core::{Real, Rgb, Vec2};

use crate::primitive::{outlined_polygon, Primitive, OUTLINE_WIDTH};
use crate::valve::{body_arcs, port_collars};

/// Instrument bubble radius as a multiple of the pipe diameter.
pub const BUBBLE_RADIUS: Real = 0.7;

const STEM_WIDTH: Real = 0.3;
const STEM_HEIGHT: Real = 0.4;

/// Sensor in the local frame, node at the origin: the waisted valve body with
/// a narrow stem rising to a labelled instrument bubble.
pub fn sensor(d: Real, color: Rgb, abbrev: &str) -> Vec<Primitive> {
    let arcs = body_arcs(d);
    let (right_collar, left_collar) = port_collars(d, &arcs);

    let tl_last = *arcs.top_left.last().expect("arc sampled");
    let tr_first = *arcs.top_right.first().expect("arc sampled");
    let half_stem = d * STEM_WIDTH / 2.0;
    let stem_h = d * STEM_HEIGHT;
    let stem = [
        Vec2::new(-half_stem, tl_last.y),
        Vec2::new(-half_stem, tl_last.y - stem_h),
        Vec2::new(half_stem, tr_first.y - stem_h),
        Vec2::new(half_stem, tr_first.y),
    ];

    let mut points = arcs.top_left.clone();
    points.extend(stem);
    points.extend(arcs.top_right.iter().copied());
    points.extend(right_collar);
    points.extend(arcs.bottom.iter().copied());
    points.extend(left_collar);

    let mut prims = outlined_polygon(points, color);

    // Instrument bubble above the stem.
    let radius = d * BUBBLE_RADIUS;
    let center = Vec2::new(0.0, tl_last.y - stem_h - radius);
    prims.push(Primitive::Circle {
        center,
        radius,
        fill: Some(color),
        stroke: Some((color.darkened(40), OUTLINE_WIDTH)),
    });

    // Abbreviation centered in the bubble, sized to fit its length.
    let len = abbrev.chars().count().max(1) as Real;
    let size = (radius * 1.2 / (len * 0.5)).max(8.0);
    prims.push(Primitive::Text {
        anchor: center,
        text: abbrev.to_string(),
        size,
        color: Rgb::WHITE,
    });
    prims
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bubble_sits_above_the_stem() {
        let d = 20.0;
        let prims = sensor(d, Rgb(100, 150, 200), "FM");
        let (center, radius) = prims
            .iter()
            .find_map(|p| match p {
                Primitive::Circle { center, radius, .. } => Some((*center, *radius)),
                _ => None,
            })
            .unwrap();
        assert_eq!(radius, d * BUBBLE_RADIUS);
        assert!(center.x.abs() < 1e-9);
        assert!(center.y < -d);
    }

    #[test]
    fn text_is_anchored_on_the_bubble() {
        let prims = sensor(20.0, Rgb(100, 150, 200), "TC");
        let circle_center = prims
            .iter()
            .find_map(|p| match p {
                Primitive::Circle { center, .. } => Some(*center),
                _ => None,
            })
            .unwrap();
        match prims.last().unwrap() {
            Primitive::Text { anchor, text, color, .. } => {
                assert_eq!(*anchor, circle_center);
                assert_eq!(text, "TC");
                assert_eq!(*color, Rgb::WHITE);
            }
            other => panic!("unexpected primitive {other:?}"),
        }
    }

    #[test]
    fn longer_abbreviations_shrink_the_text() {
        let size_of = |abbrev: &str| {
            sensor(40.0, Rgb(100, 150, 200), abbrev)
                .iter()
                .find_map(|p| match p {
                    Primitive::Text { size, .. } => Some(*size),
                    _ => None,
                })
                .unwrap()
        };
        assert!(size_of("pH") > size_of("FLOW"));
    }
}
