//! Inline instruments.

use pv_anim::{AnimationController, PropertyValue};
use pv_core::{GridPos, Real, Rgb};
use pv_geom::{place, Primitive};
use pv_view::ViewTransform;
use serde::{Deserialize, Serialize};

use crate::common::{apply_placement_override, default_diameter, SENSOR_COLOR};
use crate::component::scaled_diameter;
use crate::label::Label;

/// Instrument-type abbreviations shown in the sensor bubble.
const SENSOR_TYPES: &[(&str, &str)] = &[
    ("flow_meter", "FM"),
    ("thermocouple", "TC"),
    ("pressure", "PT"),
    ("level", "LT"),
    ("temperature", "TT"),
    ("flow", "FT"),
    ("density", "DT"),
    ("ph", "pH"),
    ("conductivity", "CT"),
];

fn default_color() -> Rgb {
    SENSOR_COLOR
}

fn default_sensor_type() -> String {
    "flow_meter".to_string()
}

/// Inline sensor: valve-style body with an instrument bubble showing the
/// measurement abbreviation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub position: GridPos,
    #[serde(default = "default_sensor_type")]
    pub sensor_type: String,
    /// Custom bubble text; None falls back to the type abbreviation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensor_label: Option<String>,
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

impl Sensor {
    /// The bubble text: explicit label, known-type abbreviation, or the first
    /// two letters of the type uppercased.
    pub fn abbreviation(&self) -> String {
        if let Some(label) = &self.sensor_label {
            return label.clone();
        }
        SENSOR_TYPES
            .iter()
            .find(|(ty, _)| *ty == self.sensor_type)
            .map(|(_, abbrev)| (*abbrev).to_string())
            .unwrap_or_else(|| {
                self.sensor_type
                    .chars()
                    .take(2)
                    .collect::<String>()
                    .to_uppercase()
            })
    }

    pub(crate) fn apply_override(&mut self, key: &str, value: &PropertyValue) -> bool {
        match key {
            "sensor_type" => value
                .as_text()
                .map(|s| self.sensor_type = s.to_string())
                .is_some(),
            "sensor_label" => value
                .as_text()
                .map(|s| self.sensor_label = Some(s.to_string()))
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

    pub(crate) fn draw(&self, view: &ViewTransform, _t: Real) -> Vec<Primitive> {
        let d = scaled_diameter(self.diameter, view);
        let node = view.grid_to_pixel(self.position.to_vec2());
        let mut prims = place(
            pv_geom::sensor::sensor(d, self.color, &self.abbreviation()),
            self.rotation,
            node,
        );
        prims.extend(self.label.primitive(node, view.scaled_cell(), self.id.as_deref()));
        prims
    }
}
