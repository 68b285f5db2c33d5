//! Two-way, three-way, and four-way valves.

use pv_anim::{AnimationController, PropertyValue};
use pv_core::{GridPos, Real, Rgb, Vec2};
use pv_geom::three_way::BlockedArm;
use pv_geom::{place, Primitive};
use pv_view::ViewTransform;
use serde::{Deserialize, Serialize};

use crate::common::{
    apply_placement_override, default_diameter, override_text, ThreeWayState, ValveState,
    HARDWARE_COLOR,
};
use crate::component::scaled_diameter;
use crate::label::Label;

fn default_color() -> Rgb {
    HARDWARE_COLOR
}

/// Shut-off valve on a straight run. Closed valves blink a red X at the node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Valve {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub position: GridPos,
    #[serde(default)]
    pub state: ValveState,
    #[serde(default = "default_color")]
    pub color: Rgb,
    #[serde(default)]
    pub rotation: Real,
    #[serde(default = "default_diameter")]
    pub diameter: Real,
    #[serde(default, skip_serializing_if = "Label::is_default")]
    pub label: Label,
    #[serde(default, skip_serializing_if = "AnimationController::is_empty")]
    pub animation: AnimationController,
}

impl Valve {
    pub(crate) fn apply_override(&mut self, key: &str, value: &PropertyValue) -> bool {
        match key {
            "state" => override_text(value, ValveState::parse)
                .map(|s| self.state = s)
                .is_some(),
            _ => apply_placement_override(
                key,
                value,
                &mut self.position,
                &mut self.color,
                &mut self.rotation,
                &mut self.diameter,
            ),
        }
    }

    pub(crate) fn draw(&self, view: &ViewTransform, t: Real) -> Vec<Primitive> {
        let d = scaled_diameter(self.diameter, view);
        let node = view.grid_to_pixel(self.position.to_vec2());
        let mut prims = place(
            pv_geom::valve::valve(d, self.color, self.state == ValveState::Closed, t),
            self.rotation,
            node,
        );
        prims.extend(self.label.primitive(node, view.scaled_cell(), self.id.as_deref()));
        prims
    }
}

/// Diverter valve on a tee: one branch arm is always blocked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreeWayValve {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub position: GridPos,
    #[serde(default)]
    pub state: ThreeWayState,
    #[serde(default = "default_color")]
    pub color: Rgb,
    #[serde(default)]
    pub rotation: Real,
    #[serde(default = "default_diameter")]
    pub diameter: Real,
    #[serde(default, skip_serializing_if = "AnimationController::is_empty")]
    pub animation: AnimationController,
}

impl ThreeWayValve {
    pub(crate) fn apply_override(&mut self, key: &str, value: &PropertyValue) -> bool {
        match key {
            "state" => override_text(value, ThreeWayState::parse)
                .map(|s| self.state = s)
                .is_some(),
            _ => apply_placement_override(
                key,
                value,
                &mut self.position,
                &mut self.color,
                &mut self.rotation,
                &mut self.diameter,
            ),
        }
    }

    pub(crate) fn draw(&self, view: &ViewTransform, t: Real) -> Vec<Primitive> {
        let d = scaled_diameter(self.diameter, view);
        let blocked = match self.state {
            ThreeWayState::Base => BlockedArm::Right,
            ThreeWayState::Flipped => BlockedArm::Left,
        };
        place(
            pv_geom::three_way::three_way_valve(d, self.color, blocked, t),
            self.rotation,
            view.grid_to_pixel(self.position.to_vec2()),
        )
    }
}

/// Crossover valve: the H symbol spanning two grid cells. Closed state blinks
/// a red X over the bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FourWayValve {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub position: GridPos,
    #[serde(default)]
    pub state: ValveState,
    #[serde(default = "default_color")]
    pub color: Rgb,
    #[serde(default)]
    pub rotation: Real,
    #[serde(default = "default_diameter")]
    pub diameter: Real,
    #[serde(default, skip_serializing_if = "AnimationController::is_empty")]
    pub animation: AnimationController,
}

impl FourWayValve {
    pub(crate) fn apply_override(&mut self, key: &str, value: &PropertyValue) -> bool {
        match key {
            "state" => override_text(value, ValveState::parse)
                .map(|s| self.state = s)
                .is_some(),
            _ => apply_placement_override(
                key,
                value,
                &mut self.position,
                &mut self.color,
                &mut self.rotation,
                &mut self.diameter,
            ),
        }
    }

    pub(crate) fn draw(&self, view: &ViewTransform, t: Real) -> Vec<Primitive> {
        let d = scaled_diameter(self.diameter, view);
        let cell = view.scaled_cell();
        // The H is centered on the bridge midpoint, half a cell right of the
        // node; that midpoint is also the rotation pivot.
        let center = view.grid_to_pixel(self.position.to_vec2()) + Vec2::new(cell / 2.0, 0.0);
        place(
            pv_geom::four_way::four_way_valve(d, cell, self.color, self.state == ValveState::Closed, t),
            self.rotation,
            center,
        )
    }
}
