//! Centrifugal pump symbol with an animated impeller.

use std::f64::consts::PI;

use pv_core::{blink_alpha, Real, Rgb, Vec2};

use crate::arc::sample_clock_arc;
use crate::primitive::{outlined_polygon, Primitive, OUTLINE_WIDTH};

/// Pump body radius as a multiple of the pipe diameter (body circle is 2.5
/// diameters across).
pub const BODY_RADIUS: Real = 1.25;

/// Impeller spin rate when running, revolutions per second.
pub const IMPELLER_SPEED: Real = 0.25;

const FAN_RUNNING: Rgb = Rgb(50, 150, 200);
const FAN_STOPPED: Rgb = Rgb(255, 50, 50);
const HUB_RUNNING: Rgb = Rgb(30, 100, 150);
const HUB_STOPPED: Rgb = Rgb(200, 30, 30);

/// Pump in the local frame, node at the origin.
///
/// The round body is cut off at the bore height (`y = ±d/2`) and extended by
/// one-diameter pipe stubs on each side. Running pumps spin the four-blade
/// impeller; stopped pumps hold it still while its color pulses toward red
/// with the shared blink alpha.
pub fn pump(d: Real, color: Rgb, running: bool, t: Real) -> Vec<Primitive> {
    let r = d * BODY_RADIUS;
    let bore_cut = (d / (2.0 * r)).acos();

    // Upper arc sweeps through north, lower arc through south.
    let top = sample_clock_arc(Vec2::ZERO, r, 2.0 * PI - bore_cut, 2.0 * PI + bore_cut);
    let bottom = sample_clock_arc(Vec2::ZERO, r, PI - bore_cut, PI + bore_cut);

    let top_first = *top.first().expect("arc sampled");
    let top_last = *top.last().expect("arc sampled");
    let bot_first = *bottom.first().expect("arc sampled");
    let bot_last = *bottom.last().expect("arc sampled");

    let right_stub = [
        Vec2::new(top_last.x + d, top_last.y),
        Vec2::new(top_last.x + d, bot_first.y),
    ];
    let left_stub = [
        Vec2::new(bot_last.x - d, bot_last.y),
        Vec2::new(bot_last.x - d, top_first.y),
    ];

    let mut points = top;
    points.extend(right_stub);
    points.extend(bottom);
    points.extend(left_stub);

    let mut prims = outlined_polygon(points, color);
    prims.extend(impeller(d, running, t));
    prims
}

fn impeller(d: Real, running: bool, t: Real) -> Vec<Primitive> {
    let (angle, fan_color, hub_border) = if running {
        (
            (t * IMPELLER_SPEED * 2.0 * PI).rem_euclid(2.0 * PI),
            FAN_RUNNING,
            HUB_RUNNING,
        )
    } else {
        // Static blades pulsing toward red.
        let alpha = blink_alpha(t);
        (
            0.0,
            FAN_RUNNING.lerp(FAN_STOPPED, alpha),
            HUB_RUNNING.lerp(HUB_STOPPED, alpha),
        )
    };

    let blade_inner = d * 0.2;
    let blade_outer = d * 0.8;
    let blade_width = (d * 0.15).max(1.0);

    let mut prims = Vec::with_capacity(5);
    for i in 0..4 {
        let a = angle + i as Real * PI / 2.0;
        let dir = Vec2::new(a.cos(), a.sin());
        prims.push(Primitive::Line {
            a: dir * blade_inner,
            b: dir * blade_outer,
            color: fan_color,
            width: blade_width,
        });
    }
    prims.push(Primitive::Circle {
        center: Vec2::ZERO,
        radius: d * 0.25,
        fill: Some(fan_color),
        stroke: Some((hub_border, OUTLINE_WIDTH)),
    });
    prims
}
