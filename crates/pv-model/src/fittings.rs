//! Passive fittings: elbows and tees.

use pv_anim::{AnimationController, PropertyValue};
use pv_core::{GridPos, Real, Rgb};
use pv_geom::{place, Primitive};
use pv_view::ViewTransform;
use serde::{Deserialize, Serialize};

use crate::common::{apply_placement_override, default_diameter, PIPE_COLOR};
use crate::component::scaled_diameter;

fn default_color() -> Rgb {
    PIPE_COLOR
}

/// Elbows default to the quarter-turn that joins a west run to a south run;
/// other corners are expressed by rotation.
fn default_elbow_rotation() -> Real {
    270.0
}

/// 90-degree pipe bend. The node is the inner corner of the turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Elbow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub position: GridPos,
    #[serde(default = "default_color")]
    pub color: Rgb,
    #[serde(default = "default_elbow_rotation")]
    pub rotation: Real,
    #[serde(default = "default_diameter")]
    pub diameter: Real,
    #[serde(default, skip_serializing_if = "AnimationController::is_empty")]
    pub animation: AnimationController,
}

impl Elbow {
    pub(crate) fn apply_override(&mut self, key: &str, value: &PropertyValue) -> bool {
        apply_placement_override(
            key,
            value,
            &mut self.position,
            &mut self.color,
            &mut self.rotation,
            &mut self.diameter,
        )
    }

    pub(crate) fn draw(&self, view: &ViewTransform, _t: Real) -> Vec<Primitive> {
        let d = scaled_diameter(self.diameter, view);
        place(
            pv_geom::elbow::elbow(d, self.color),
            self.rotation,
            view.grid_to_pixel(self.position.to_vec2()),
        )
    }
}

/// Three-port junction. The node is the center of the straight run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub position: GridPos,
    #[serde(default = "default_color")]
    pub color: Rgb,
    #[serde(default)]
    pub rotation: Real,
    #[serde(default = "default_diameter")]
    pub diameter: Real,
    #[serde(default, skip_serializing_if = "AnimationController::is_empty")]
    pub animation: AnimationController,
}

impl Tee {
    pub(crate) fn apply_override(&mut self, key: &str, value: &PropertyValue) -> bool {
        apply_placement_override(
            key,
            value,
            &mut self.position,
            &mut self.color,
            &mut self.rotation,
            &mut self.diameter,
        )
    }

    pub(crate) fn draw(&self, view: &ViewTransform, _t: Real) -> Vec<Primitive> {
        let d = scaled_diameter(self.diameter, view);
        place(
            pv_geom::tee::tee(d, self.color),
            self.rotation,
            view.grid_to_pixel(self.position.to_vec2()),
        )
    }
}
