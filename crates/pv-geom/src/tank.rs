//! Storage tank: stacked fluid layers behind a rounded-rectangle shell.

use std::f64::consts::{FRAC_PI_2, PI};

use pv_core::{Real, Rgb, Vec2};

use crate::arc::sample_arc;
use crate::primitive::Primitive;

/// Canvas background color, used for the corner masks that hide fluid
/// spilling past a rounded corner.
pub const BACKGROUND: Rgb = Rgb(25, 25, 30);

/// Tank shell color.
pub const WALL_COLOR: Rgb = Rgb(80, 80, 80);

/// One fluid layer, bottom-up order. `percent` is the layer's share of the
/// full tank height, 0..=100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TankLayer {
    pub color: Rgb,
    pub percent: Real,
}

/// Tank in world pixels, `origin` at the top-left shell corner.
///
/// Three passes: fluid layers stacked from the bottom inside the wall
/// thickness, background-colored masks over the rounded corners, then the
/// shell outline. Corner radii are zero for flat ends.
pub fn tank(
    origin: Vec2,
    width: Real,
    height: Real,
    top_radius: Real,
    bottom_radius: Real,
    wall: Real,
    layers: &[TankLayer],
) -> Vec<Primitive> {
    let mut prims = Vec::new();

    // Fluid rectangles, bottom layer first.
    let mut level = origin.y + height;
    for layer in layers {
        if layer.percent <= 0.0 {
            continue;
        }
        let layer_h = height * layer.percent / 100.0;
        prims.push(Primitive::Polygon {
            points: vec![
                Vec2::new(origin.x + wall, level - layer_h),
                Vec2::new(origin.x + width - wall, level - layer_h),
                Vec2::new(origin.x + width - wall, level),
                Vec2::new(origin.x + wall, level),
            ],
            fill: layer.color,
        });
        level -= layer_h;
    }

    prims.extend(corner_masks(origin, width, height, top_radius, bottom_radius));

    prims.push(Primitive::Polyline {
        points: shell_path(origin, width, height, top_radius, bottom_radius),
        color: WALL_COLOR,
        width: wall,
    });
    prims
}

/// Background-colored wedges covering the square corner minus the quarter
/// disc, one per rounded corner.
fn corner_masks(
    origin: Vec2,
    width: Real,
    height: Real,
    top_radius: Real,
    bottom_radius: Real,
) -> Vec<Primitive> {
    let mut prims = Vec::new();
    let mut mask = |corner: Vec2, center: Vec2, start: Real, end: Real| {
        let mut points = sample_arc(center, (corner - center).x.abs(), start, end);
        points.push(corner);
        prims.push(Primitive::Polygon {
            points,
            fill: BACKGROUND,
        });
    };

    if top_radius > 0.0 {
        let r = top_radius;
        mask(
            origin,
            origin + Vec2::new(r, r),
            PI,
            PI + FRAC_PI_2,
        );
        mask(
            Vec2::new(origin.x + width, origin.y),
            Vec2::new(origin.x + width - r, origin.y + r),
            -FRAC_PI_2,
            0.0,
        );
    }
    if bottom_radius > 0.0 {
        let r = bottom_radius;
        mask(
            Vec2::new(origin.x, origin.y + height),
            Vec2::new(origin.x + r, origin.y + height - r),
            FRAC_PI_2,
            PI,
        );
        mask(
            Vec2::new(origin.x + width, origin.y + height),
            Vec2::new(origin.x + width - r, origin.y + height - r),
            0.0,
            FRAC_PI_2,
        );
    }
    prims
}

/// Closed rounded-rectangle path, clockwise from the top-left straight run.
fn shell_path(
    origin: Vec2,
    width: Real,
    height: Real,
    top_radius: Real,
    bottom_radius: Real,
) -> Vec<Vec2> {
    let tr = top_radius;
    let br = bottom_radius;
    let mut points = Vec::new();

    points.push(Vec2::new(origin.x + tr, origin.y));
    points.push(Vec2::new(origin.x + width - tr, origin.y));
    if tr > 0.0 {
        points.extend(sample_arc(
            Vec2::new(origin.x + width - tr, origin.y + tr),
            tr,
            -FRAC_PI_2,
            0.0,
        ));
    }
    points.push(Vec2::new(origin.x + width, origin.y + height - br));
    if br > 0.0 {
        points.extend(sample_arc(
            Vec2::new(origin.x + width - br, origin.y + height - br),
            br,
            0.0,
            FRAC_PI_2,
        ));
    }
    points.push(Vec2::new(origin.x + br, origin.y + height));
    if br > 0.0 {
        points.extend(sample_arc(
            Vec2::new(origin.x + br, origin.y + height - br),
            br,
            FRAC_PI_2,
            PI,
        ));
    }
    points.push(Vec2::new(origin.x, origin.y + tr));
    if tr > 0.0 {
        points.extend(sample_arc(
            Vec2::new(origin.x + tr, origin.y + tr),
            tr,
            PI,
            PI + FRAC_PI_2,
        ));
    }
    points.push(Vec2::new(origin.x + tr, origin.y));
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_stack_bottom_up_inside_the_wall() {
        let layers = [
            TankLayer {
                color: Rgb(200, 150, 50),
                percent: 25.0,
            },
            TankLayer {
                color: Rgb(100, 150, 255),
                percent: 50.0,
            },
        ];
        let prims = tank(Vec2::new(10.0, 10.0), 150.0, 200.0, 0.0, 0.0, 3.0, &layers);
        let rects: Vec<_> = prims
            .iter()
            .filter_map(|p| match p {
                Primitive::Polygon { points, fill } if *fill != BACKGROUND => {
                    Some((points.clone(), *fill))
                }
                _ => None,
            })
            .collect();
        assert_eq!(rects.len(), 2);
        // Oil rectangle occupies the bottom quarter.
        let (oil, color) = &rects[0];
        assert_eq!(*color, Rgb(200, 150, 50));
        assert!((oil[0].y - 160.0).abs() < 1e-9 && (oil[2].y - 210.0).abs() < 1e-9);
        assert!((oil[0].x - 13.0).abs() < 1e-9 && (oil[1].x - 157.0).abs() < 1e-9);
        // Water sits directly on top of it.
        let (water, _) = &rects[1];
        assert!((water[2].y - 160.0).abs() < 1e-9 && (water[0].y - 60.0).abs() < 1e-9);
    }

    #[test]
    fn empty_layers_draw_nothing() {
        let layers = [TankLayer {
            color: Rgb(100, 150, 255),
            percent: 0.0,
        }];
        let prims = tank(Vec2::ZERO, 100.0, 100.0, 0.0, 0.0, 3.0, &layers);
        assert_eq!(prims.len(), 1);
        assert!(matches!(prims[0], Primitive::Polyline { .. }));
    }

    #[test]
    fn flat_shell_has_no_corner_masks() {
        let prims = tank(Vec2::ZERO, 100.0, 100.0, 0.0, 0.0, 3.0, &[]);
        assert!(!prims
            .iter()
            .any(|p| matches!(p, Primitive::Polygon { fill, .. } if *fill == BACKGROUND)));
    }

    #[test]
    fn ellipsoidal_ends_add_masks_per_corner() {
        let prims = tank(Vec2::ZERO, 100.0, 100.0, 25.0, 25.0, 3.0, &[]);
        let masks = prims
            .iter()
            .filter(|p| matches!(p, Primitive::Polygon { fill, .. } if *fill == BACKGROUND))
            .count();
        assert_eq!(masks, 4);
    }

    #[test]
    fn shell_path_is_closed() {
        let prims = tank(Vec2::new(5.0, 5.0), 100.0, 120.0, 25.0, 0.0, 3.0, &[]);
        match prims.last().unwrap() {
            Primitive::Polyline { points, color, width } => {
                assert_eq!(*color, WALL_COLOR);
                assert_eq!(*width, 3.0);
                let first = points.first().unwrap();
                let last = points.last().unwrap();
                assert!((first.x - last.x).abs() < 1e-9 && (first.y - last.y).abs() < 1e-9);
            }
            other => panic!("unexpected primitive {other:?}"),
        }
    }
}
