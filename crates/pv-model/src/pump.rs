//! Centrifugal pump.

use pv_anim::{AnimationController, PropertyValue};
use pv_core::{GridPos, Real, Rgb};
use pv_geom::{place, Primitive};
use pv_view::ViewTransform;
use serde::{Deserialize, Serialize};

use crate::common::{
    apply_placement_override, default_diameter, override_text, PumpState, HARDWARE_COLOR,
};
use crate::component::scaled_diameter;
use crate::label::Label;

fn default_color() -> Rgb {
    HARDWARE_COLOR
}

/// Pump on a straight run. Running pumps spin their impeller; stopped pumps
/// pulse it toward red.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pump {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub position: GridPos,
    #[serde(default)]
    pub state: PumpState,
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

impl Pump {
    pub(crate) fn apply_override(&mut self, key: &str, value: &PropertyValue) -> bool {
        match key {
            "state" => override_text(value, PumpState::parse)
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
            pv_geom::pump::pump(d, self.color, self.state == PumpState::Running, t),
            self.rotation,
            node,
        );
        prims.extend(self.label.primitive(node, view.scaled_cell(), self.id.as_deref()));
        prims
    }
}
