//! pv-core: stable foundation for pidviz.
//!
//! Contains:
//! - math (Vec2 + rotation helpers, screen y-down convention)
//! - color (Rgb triples + outline darkening)
//! - grid (integer grid coordinates)
//! - blink (the shared overlay blink law)

pub mod blink;
pub mod color;
pub mod grid;
pub mod math;

// Re-exports: nice ergonomics for downstream crates
pub use blink::*;
pub use color::Rgb;
pub use grid::GridPos;
pub use math::{deg_to_rad, Real, Vec2};

/// Grid cell size at zoom 1.0, in pixels. Symbol geometry is authored against
/// this cell size; the scaled diameter of a symbol is
/// `diameter * cell / BASE_CELL_SIZE`.
pub const BASE_CELL_SIZE: Real = 50.0;
