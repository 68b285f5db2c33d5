//! pv-anim: keyframe animation for component properties.
//!
//! A component's `animation` list is compiled once into an
//! [`AnimationController`] at load time. Every frame, the render driver asks
//! the controller for the property overrides active at the global clock time;
//! the controller is immutable after construction and cycles with period
//! `total_duration`.

pub mod controller;
pub mod value;

pub use controller::{AnimationController, Keyframe, MIN_KEYFRAME_DURATION};
pub use value::PropertyValue;
