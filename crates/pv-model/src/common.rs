//! Shared enums, document defaults, and override conversions.

use pv_anim::PropertyValue;
use pv_core::{GridPos, Real, Rgb};
use serde::{Deserialize, Serialize};

/// Default pipe/fitting fill.
pub const PIPE_COLOR: Rgb = Rgb(100, 150, 255);
/// Default fill for valve and pump bodies.
pub const HARDWARE_COLOR: Rgb = Rgb(128, 128, 128);
/// Default sensor fill.
pub const SENSOR_COLOR: Rgb = Rgb(100, 150, 200);
/// Default heat exchanger fill.
pub const EXCHANGER_COLOR: Rgb = Rgb(180, 100, 60);

pub(crate) fn default_diameter() -> Real {
    20.0
}

/// Which way a pipe's arrow overlay moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowDirection {
    #[default]
    Forward,
    Backward,
    None,
}

/// Two-position valve state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValveState {
    #[default]
    Open,
    Closed,
}

/// Pump drive state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PumpState {
    Running,
    #[default]
    Stopped,
}

/// Three-way valve routing: `base` blocks the right arm, `flipped` the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreeWayState {
    #[default]
    Base,
    Flipped,
}

/// Tank end profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TankEndStyle {
    #[default]
    Flat,
    Ellipsoidal,
}

// Keyframe override conversions. Each returns None on a type mismatch; the
// caller logs and ignores the override.

pub(crate) fn override_color(v: &PropertyValue) -> Option<Rgb> {
    v.as_triple()
        .map(|[r, g, b]| Rgb(channel(r), channel(g), channel(b)))
}

fn channel(v: f64) -> u8 {
    v.clamp(0.0, 255.0).round() as u8
}

/// Grid positions stay whole-cell even when overridden.
pub(crate) fn override_grid(v: &PropertyValue) -> Option<GridPos> {
    let [x, y] = v.as_pair()?;
    if x.fract() == 0.0 && y.fract() == 0.0 {
        Some(GridPos::new(x as i64, y as i64))
    } else {
        None
    }
}

pub(crate) fn override_text<'a, T, F>(v: &'a PropertyValue, parse: F) -> Option<T>
where
    F: Fn(&'a str) -> Option<T>,
{
    v.as_text().and_then(parse)
}

/// The placement fields every fixed symbol shares. Returns false when the key
/// is not one of them or the value type does not fit.
pub(crate) fn apply_placement_override(
    key: &str,
    value: &PropertyValue,
    position: &mut GridPos,
    color: &mut Rgb,
    rotation: &mut Real,
    diameter: &mut Real,
) -> bool {
    match key {
        "position" => override_grid(value).map(|p| *position = p).is_some(),
        "color" => override_color(value).map(|c| *color = c).is_some(),
        "rotation" => value.as_number().map(|r| *rotation = r).is_some(),
        "diameter" => override_diameter(value).map(|d| *diameter = d).is_some(),
        _ => false,
    }
}

/// Symbol geometry requires a positive bore; zero or negative overrides are
/// ignored like any other mis-typed value.
pub(crate) fn override_diameter(v: &PropertyValue) -> Option<Real> {
    v.as_number().filter(|d| d.is_finite() && *d > 0.0)
}

impl FlowDirection {
    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s {
            "forward" => Some(Self::Forward),
            "backward" => Some(Self::Backward),
            "none" => Some(Self::None),
            _ => Option::None,
        }
    }
}

impl ValveState {
    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s {
            "open" => Some(Self::Open),
            "closed" => Some(Self::Closed),
            _ => None,
        }
    }
}

impl PumpState {
    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s {
            "running" => Some(Self::Running),
            "stopped" => Some(Self::Stopped),
            _ => None,
        }
    }
}

impl ThreeWayState {
    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s {
            "base" => Some(Self::Base),
            "flipped" => Some(Self::Flipped),
            _ => None,
        }
    }
}

impl TankEndStyle {
    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s {
            "flat" => Some(Self::Flat),
            "ellipsoidal" => Some(Self::Ellipsoidal),
            _ => None,
        }
    }
}
