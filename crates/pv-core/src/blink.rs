//! The shared blink law.
//!
//! Every blinking overlay in a scene (closed valves, no-flow marks, stopped
//! pumps) samples this one formula at the global animation clock, so all
//! overlays blink in phase.

use crate::math::Real;

/// Blink cycles per second.
pub const BLINK_SPEED: Real = 2.0;

/// Alpha threshold below which an overlay is hidden.
pub const BLINK_THRESHOLD: Real = 0.3;

/// Blink alpha in [0, 1] at absolute animation time `t` seconds.
pub fn blink_alpha(t: Real) -> Real {
    ((t * BLINK_SPEED * 2.0 * std::f64::consts::PI).sin() + 1.0) / 2.0
}

/// Whether a blinking overlay is visible at time `t`.
pub fn blink_visible(t: Real) -> bool {
    blink_alpha(t) >= BLINK_THRESHOLD
}
