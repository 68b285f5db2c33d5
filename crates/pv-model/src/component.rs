//! The closed set of scene components.

use pv_anim::AnimationController;
use pv_core::{GridPos, Real, BASE_CELL_SIZE};
use pv_geom::Primitive;
use pv_view::ViewTransform;
use serde::{Deserialize, Serialize};

use crate::exchanger::HeatExchanger;
use crate::fittings::{Elbow, Tee};
use crate::pipe::Pipe;
use crate::pump::Pump;
use crate::sensor::Sensor;
use crate::tank::Tank;
use crate::valves::{FourWayValve, ThreeWayValve, Valve};

/// A scene element. The variant set is closed: documents dispatch on the
/// `type` tag and unknown tags are a load error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Component {
    Pipe(Pipe),
    Elbow(Elbow),
    Tee(Tee),
    ThreeWayValve(ThreeWayValve),
    FourWayValve(FourWayValve),
    Tank(Tank),
    Valve(Valve),
    Pump(Pump),
    Sensor(Sensor),
    HeatExchanger(HeatExchanger),
}

/// Pixel diameter of a symbol at the current view scale.
pub(crate) fn scaled_diameter(diameter: Real, view: &ViewTransform) -> Real {
    diameter * view.scaled_cell() / BASE_CELL_SIZE
}

macro_rules! for_each_variant {
    ($self:expr, $inner:ident => $body:expr) => {
        match $self {
            Component::Pipe($inner) => $body,
            Component::Elbow($inner) => $body,
            Component::Tee($inner) => $body,
            Component::ThreeWayValve($inner) => $body,
            Component::FourWayValve($inner) => $body,
            Component::Tank($inner) => $body,
            Component::Valve($inner) => $body,
            Component::Pump($inner) => $body,
            Component::Sensor($inner) => $body,
            Component::HeatExchanger($inner) => $body,
        }
    };
}

impl Component {
    /// The document `type` tag for this variant.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Component::Pipe(_) => "pipe",
            Component::Elbow(_) => "elbow",
            Component::Tee(_) => "tee",
            Component::ThreeWayValve(_) => "three_way_valve",
            Component::FourWayValve(_) => "four_way_valve",
            Component::Tank(_) => "tank",
            Component::Valve(_) => "valve",
            Component::Pump(_) => "pump",
            Component::Sensor(_) => "sensor",
            Component::HeatExchanger(_) => "heat_exchanger",
        }
    }

    pub fn id(&self) -> Option<&str> {
        for_each_variant!(self, c => c.id.as_deref())
    }

    pub fn position(&self) -> GridPos {
        for_each_variant!(self, c => c.position)
    }

    /// Second endpoint, for components that span two nodes.
    pub fn end_position(&self) -> Option<GridPos> {
        match self {
            Component::Pipe(pipe) => Some(pipe.end_position),
            _ => None,
        }
    }

    pub fn animation(&self) -> &AnimationController {
        for_each_variant!(self, c => &c.animation)
    }

    /// The component as it appears at time `t`: a clone with the active
    /// keyframe's overrides merged in. The persisted component is untouched;
    /// overrides that name an unknown property or carry the wrong type are
    /// logged and ignored.
    pub fn rendered_view(&self, t: Real) -> Component {
        let overrides = self.animation().overrides_at(t);
        if overrides.is_empty() {
            return self.clone();
        }
        let mut view = self.clone();
        for (key, value) in overrides {
            let applied = for_each_variant!(&mut view, c => c.apply_override(key, value));
            if !applied {
                tracing::debug!(
                    component = self.id().unwrap_or("<anonymous>"),
                    property = %key,
                    "ignoring inapplicable keyframe override"
                );
            }
        }
        view
    }

    /// Drawable primitives for this component at time `t` under the given
    /// view transform. Never fails: degenerate geometry degrades to fewer (or
    /// no) primitives.
    pub fn draw_at(&self, view: &ViewTransform, t: Real) -> Vec<Primitive> {
        let rendered = self.rendered_view(t);
        for_each_variant!(&rendered, c => c.draw(view, t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ValveState;

    fn animated_valve() -> Component {
        serde_json::from_str(
            r#"{
                "type": "valve",
                "id": "v1",
                "position": [3, 1],
                "animation": [
                    {"duration": 2, "state": "open"},
                    {"duration": 2, "state": "closed", "color": [255, 0, 0]}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn tagged_dispatch_selects_the_variant() {
        let c: Component =
            serde_json::from_str(r#"{"type": "tee", "position": [1, 2]}"#).unwrap();
        assert_eq!(c.type_tag(), "tee");
        assert_eq!(c.position(), GridPos::new(1, 2));
        assert_eq!(c.end_position(), None);
    }

    #[test]
    fn rendered_view_merges_the_active_keyframe() {
        let valve = animated_valve();
        match valve.rendered_view(3.0) {
            Component::Valve(v) => {
                assert_eq!(v.state, ValveState::Closed);
                assert_eq!(v.color, pv_core::Rgb(255, 0, 0));
            }
            other => panic!("unexpected variant {other:?}"),
        }
        // First keyframe leaves the default color alone.
        match valve.rendered_view(0.5) {
            Component::Valve(v) => assert_eq!(v.state, ValveState::Open),
            other => panic!("unexpected variant {other:?}"),
        }
    }

    #[test]
    fn persisted_component_is_never_mutated_by_rendering() {
        let valve = animated_valve();
        let before = serde_json::to_string(&valve).unwrap();
        let _ = valve.draw_at(&ViewTransform::default(), 3.0);
        let _ = valve.draw_at(&ViewTransform::default(), 17.25);
        let after = serde_json::to_string(&valve).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn unknown_override_keys_are_ignored() {
        let valve: Component = serde_json::from_str(
            r#"{
                "type": "valve",
                "position": [0, 0],
                "animation": [{"duration": 1, "impeller_speed": 3}]
            }"#,
        )
        .unwrap();
        match valve.rendered_view(0.5) {
            Component::Valve(v) => assert_eq!(v.state, ValveState::Open),
            other => panic!("unexpected variant {other:?}"),
        }
    }

    #[test]
    fn pipe_document_renders_four_cells_long() {
        let c: Component = serde_json::from_str(
            r#"{"type": "pipe", "position": [0, 0], "end_position": [4, 0], "diameter": 20}"#,
        )
        .unwrap();
        let prims = c.draw_at(&ViewTransform::default(), 0.0);
        match &prims[0] {
            Primitive::Line { a, b, .. } => assert_eq!((*b - *a).length(), 200.0),
            other => panic!("unexpected primitive {other:?}"),
        }
    }

    #[test]
    fn pipe_reports_both_endpoints() {
        let c: Component = serde_json::from_str(
            r#"{"type": "pipe", "position": [0, 0], "end_position": [4, 0]}"#,
        )
        .unwrap();
        assert_eq!(c.end_position(), Some(GridPos::new(4, 0)));
    }
}
