//! Circular arc sampling.

use pv_core::{Real, Vec2};

/// Samples per quarter turn. Enough for visual smoothness at any supported
/// zoom; every arc in the kernel uses this resolution.
pub const ARC_SEGMENTS: usize = 20;

/// Sample `ARC_SEGMENTS + 1` points along a circular arc in the standard
/// parameterization `center + r * (cos t, sin t)`, `t` from `start` to `end`.
pub fn sample_arc(center: Vec2, radius: Real, start: Real, end: Real) -> Vec<Vec2> {
    (0..=ARC_SEGMENTS)
        .map(|i| {
            let t = start + (end - start) * i as Real / ARC_SEGMENTS as Real;
            center + Vec2::new(radius * t.cos(), radius * t.sin())
        })
        .collect()
}

/// Sample an arc in the clock-face parameterization used by the round symbol
/// bodies: angle measured from "north" (screen up), increasing clockwise, so
/// the point is `center + r * (sin t, -cos t)`.
pub fn sample_clock_arc(center: Vec2, radius: Real, start: Real, end: Real) -> Vec<Vec2> {
    (0..=ARC_SEGMENTS)
        .map(|i| {
            let t = start + (end - start) * i as Real / ARC_SEGMENTS as Real;
            center + Vec2::new(radius * t.sin(), -radius * t.cos())
        })
        .collect()
}
