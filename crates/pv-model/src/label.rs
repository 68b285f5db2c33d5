//! Optional nameplates attached to equipment symbols.

use pv_core::{Real, Rgb, Vec2};
use pv_geom::Primitive;
use serde::{Deserialize, Serialize};

/// Side of the symbol the label hangs off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelAnchor {
    Above,
    #[default]
    Below,
    Left,
    Right,
}

/// Nameplate settings for tagged equipment (valves, pumps, sensors, tanks,
/// exchangers). Hidden by default; `text` falls back to the component id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Label {
    #[serde(default)]
    pub show: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub anchor: LabelAnchor,
}

impl Label {
    /// True when every field still has its default; such labels are omitted
    /// from the document.
    pub fn is_default(&self) -> bool {
        *self == Label::default()
    }

    /// The text primitive for this label, anchored a fixed fraction of a cell
    /// off the symbol node. None when hidden or there is nothing to say.
    pub fn primitive(&self, node: Vec2, scaled_cell: Real, fallback: Option<&str>) -> Option<Primitive> {
        if !self.show {
            return None;
        }
        let text = match (&self.text, fallback) {
            (Some(t), _) => t.clone(),
            (None, Some(id)) => id.to_string(),
            (None, None) => return None,
        };
        let offset = scaled_cell * 0.8;
        let anchor = match self.anchor {
            LabelAnchor::Above => node + Vec2::new(0.0, -offset),
            LabelAnchor::Below => node + Vec2::new(0.0, offset),
            LabelAnchor::Left => node + Vec2::new(-offset, 0.0),
            LabelAnchor::Right => node + Vec2::new(offset, 0.0),
        };
        Some(Primitive::Text {
            anchor,
            text,
            size: scaled_cell * 0.28,
            color: Rgb::WHITE,
        })
    }
}
