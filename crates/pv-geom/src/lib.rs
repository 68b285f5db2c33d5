//! pv-geom: the procedural symbol-geometry kernel.
//!
//! Pure functions mapping `(scaled diameter, discrete symbol state)` to lists
//! of drawable [`Primitive`]s in a local frame centered on the symbol's
//! connection node (pre-rotation). Symbol bodies are built from closed-form
//! circular-arc sampling so that adjoining components of the same diameter
//! line up exactly at any zoom: every fitting port sits flush with a pipe end
//! trimmed by `1.25 * diameter`.
//!
//! The frame convention is screen-like: x grows right, y grows down, and the
//! node is at the origin. [`place`] applies the rigid rotation about the node
//! followed by the world translation.

pub mod arc;
pub mod elbow;
pub mod exchanger;
pub mod four_way;
pub mod hshape;
pub mod marks;
pub mod pipe;
pub mod primitive;
pub mod pump;
pub mod sensor;
pub mod tank;
pub mod tee;
pub mod three_way;
pub mod valve;

pub use primitive::{place, Primitive, OUTLINE_WIDTH};

/// Distance from a fitting's node to its port openings, as a multiple of the
/// pipe diameter. Pipe end trims use the same factor.
pub const PORT_REACH: f64 = 1.25;
