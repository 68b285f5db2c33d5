//! Straight pipe runs with animated flow overlays.

use pv_anim::{AnimationController, PropertyValue};
use pv_core::{GridPos, Real, Rgb};
use pv_geom::pipe::FlowMotif;
use pv_geom::Primitive;
use pv_view::ViewTransform;
use serde::{Deserialize, Serialize};

use crate::common::{
    default_diameter, override_color, override_diameter, override_grid, override_text,
    FlowDirection, PIPE_COLOR,
};
use crate::component::scaled_diameter;

fn default_fluid_type() -> String {
    "water".to_string()
}

fn default_color() -> Rgb {
    PIPE_COLOR
}

/// A pipe between two grid nodes. Ends can be trimmed back by the fitting
/// port reach so the joint is drawn once, by the fitting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub position: GridPos,
    pub end_position: GridPos,
    #[serde(default = "default_fluid_type")]
    pub fluid_type: String,
    #[serde(default = "default_color")]
    pub color: Rgb,
    #[serde(default)]
    pub flow_direction: FlowDirection,
    #[serde(default = "default_diameter")]
    pub diameter: Real,
    #[serde(default)]
    pub trim_start: bool,
    #[serde(default)]
    pub trim_end: bool,
    #[serde(default, skip_serializing_if = "AnimationController::is_empty")]
    pub animation: AnimationController,
}

impl Pipe {
    pub(crate) fn apply_override(&mut self, key: &str, value: &PropertyValue) -> bool {
        match key {
            "position" => override_grid(value).map(|p| self.position = p).is_some(),
            "end_position" => override_grid(value)
                .map(|p| self.end_position = p)
                .is_some(),
            "fluid_type" => value
                .as_text()
                .map(|s| self.fluid_type = s.to_string())
                .is_some(),
            "color" => override_color(value).map(|c| self.color = c).is_some(),
            "flow_direction" => override_text(value, FlowDirection::parse)
                .map(|d| self.flow_direction = d)
                .is_some(),
            "diameter" => override_diameter(value).map(|d| self.diameter = d).is_some(),
            "trim_start" => value.as_bool().map(|b| self.trim_start = b).is_some(),
            "trim_end" => value.as_bool().map(|b| self.trim_end = b).is_some(),
            _ => false,
        }
    }

    pub(crate) fn draw(&self, view: &ViewTransform, t: Real) -> Vec<Primitive> {
        let motif = match self.flow_direction {
            FlowDirection::Forward => FlowMotif::Forward,
            FlowDirection::Backward => FlowMotif::Backward,
            FlowDirection::None => FlowMotif::NoFlow,
        };
        pv_geom::pipe::pipe(
            view.grid_to_pixel(self.position.to_vec2()),
            view.grid_to_pixel(self.end_position.to_vec2()),
            scaled_diameter(self.diameter, view),
            self.color,
            self.trim_start,
            self.trim_end,
            motif,
            t,
        )
    }
}
