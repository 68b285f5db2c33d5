//! Storage tanks with layered fluid inventories.

use pv_anim::{AnimationController, PropertyValue};
use pv_core::{GridPos, Real};
use pv_geom::tank::TankLayer;
use pv_geom::Primitive;
use pv_view::ViewTransform;
use serde::{Deserialize, Serialize};

use crate::common::{override_grid, TankEndStyle};
use crate::fluid::{default_fluids, levels_at, Fluid};
use crate::label::Label;

fn default_width() -> Real {
    3.0
}

fn default_height() -> Real {
    4.0
}

fn default_fill_percent() -> Real {
    75.0
}

fn default_wall_thickness() -> Real {
    3.0
}

/// Storage tank. `position` is the top-left shell corner; width and height
/// are in grid cells. Fluid levels evolve with each layer's drain/fill rates
/// as a pure function of the animation clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tank {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub position: GridPos,
    #[serde(default = "default_width")]
    pub width: Real,
    #[serde(default = "default_height")]
    pub height: Real,
    #[serde(default)]
    pub top_style: TankEndStyle,
    #[serde(default)]
    pub bottom_style: TankEndStyle,
    #[serde(default = "default_fluids")]
    pub fluids: Vec<Fluid>,
    #[serde(default = "default_fill_percent")]
    pub fill_percent: Real,
    #[serde(default = "default_wall_thickness")]
    pub wall_thickness: Real,
    #[serde(default, skip_serializing_if = "Label::is_default")]
    pub label: Label,
    #[serde(default, skip_serializing_if = "AnimationController::is_empty")]
    pub animation: AnimationController,
}

impl Tank {
    pub(crate) fn apply_override(&mut self, key: &str, value: &PropertyValue) -> bool {
        match key {
            "position" => override_grid(value).map(|p| self.position = p).is_some(),
            "width" => value.as_number().map(|w| self.width = w).is_some(),
            "height" => value.as_number().map(|h| self.height = h).is_some(),
            "fill_percent" => value.as_number().map(|f| self.fill_percent = f).is_some(),
            "wall_thickness" => value
                .as_number()
                .map(|w| self.wall_thickness = w)
                .is_some(),
            "top_style" => value
                .as_text()
                .and_then(TankEndStyle::parse)
                .map(|s| self.top_style = s)
                .is_some(),
            "bottom_style" => value
                .as_text()
                .and_then(TankEndStyle::parse)
                .map(|s| self.bottom_style = s)
                .is_some(),
            _ => false,
        }
    }

    pub(crate) fn draw(&self, view: &ViewTransform, t: Real) -> Vec<Primitive> {
        let cell = view.scaled_cell();
        let origin = view.grid_to_pixel(self.position.to_vec2());
        let width = self.width * cell;
        let height = self.height * cell;
        let radius = |style: TankEndStyle| match style {
            TankEndStyle::Ellipsoidal => width / 4.0,
            TankEndStyle::Flat => 0.0,
        };

        let levels = levels_at(&self.fluids, self.fill_percent, t);
        let layers: Vec<TankLayer> = self
            .fluids
            .iter()
            .zip(&levels)
            .map(|(fluid, level)| TankLayer {
                color: fluid.color,
                percent: *level,
            })
            .collect();

        let mut prims = pv_geom::tank::tank(
            origin,
            width,
            height,
            radius(self.top_style),
            radius(self.bottom_style),
            self.wall_thickness,
            &layers,
        );
        prims.extend(self.label.primitive(origin, cell, self.id.as_deref()));
        prims
    }
}
