//! pv-model: the component model.
//!
//! A scene is a list of [`Component`]s, each a closed serde-backed variant
//! with documented defaults. Rendering is snapshot-based: [`Component::draw_at`]
//! clones the persisted component, merges the active keyframe overrides into
//! the clone, and turns that view into drawable primitives. The persisted
//! state is never mutated by rendering, so serializing a scene mid-animation
//! always writes the authored document.

pub mod common;
pub mod component;
pub mod exchanger;
pub mod fittings;
pub mod fluid;
pub mod label;
pub mod pipe;
pub mod pump;
pub mod sensor;
pub mod tank;
pub mod valves;

pub use common::{FlowDirection, PumpState, TankEndStyle, ThreeWayState, ValveState};
pub use component::Component;
pub use exchanger::HeatExchanger;
pub use fittings::{Elbow, Tee};
pub use fluid::{levels_at, Fluid};
pub use label::{Label, LabelAnchor};
pub use pipe::Pipe;
pub use pump::Pump;
pub use sensor::Sensor;
pub use tank::Tank;
pub use valves::{FourWayValve, ThreeWayValve, Valve};
