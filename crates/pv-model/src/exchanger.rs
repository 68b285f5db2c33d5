//! Shell-and-tube heat exchanger.

use pv_anim::{AnimationController, PropertyValue};
use pv_core::{GridPos, Real, Rgb, Vec2};
use pv_geom::{place, Primitive};
use pv_view::ViewTransform;
use serde::{Deserialize, Serialize};

use crate::common::{apply_placement_override, default_diameter, EXCHANGER_COLOR};
use crate::component::scaled_diameter;
use crate::label::Label;

fn default_color() -> Rgb {
    EXCHANGER_COLOR
}

/// Heat exchanger: the H symbol with tube lines, spanning two grid cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatExchanger {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub position: GridPos,
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

impl HeatExchanger {
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
        let cell = view.scaled_cell();
        let node = view.grid_to_pixel(self.position.to_vec2());
        let center = node + Vec2::new(cell / 2.0, 0.0);
        let mut prims = place(
            pv_geom::exchanger::heat_exchanger(d, cell, self.color),
            self.rotation,
            center,
        );
        prims.extend(self.label.primitive(node, cell, self.id.as_deref()));
        prims
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_color_is_the_exchanger_bronze() {
        let hx: HeatExchanger = serde_json::from_str(r#"{"position": [1, 1]}"#).unwrap();
        assert_eq!(hx.color, EXCHANGER_COLOR);
    }

    #[test]
    fn draws_the_h_body_and_tube_lines() {
        let hx: HeatExchanger = serde_json::from_str(r#"{"position": [0, 0]}"#).unwrap();
        let prims = hx.draw(&ViewTransform::default(), 0.0);
        let lines = prims
            .iter()
            .filter(|p| matches!(p, Primitive::Line { color, .. } if *color == Rgb::WHITE))
            .count();
        assert_eq!(lines, 3);
    }
}
