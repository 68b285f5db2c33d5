//! Scene parsing: tag dispatch through the component registry.

use serde_json::Value;

use pv_model::{
    Component, Elbow, FourWayValve, HeatExchanger, Pipe, Pump, Sensor, Tank, Tee, ThreeWayValve,
    Valve,
};

use crate::{Scene, SceneError, SceneResult};

type Constructor = fn(Value) -> Result<Component, serde_json::Error>;

macro_rules! entry {
    ($tag:literal, $ty:ty, $variant:ident) => {
        ($tag, (|value: Value| {
            serde_json::from_value::<$ty>(value).map(Component::$variant)
        }) as Constructor)
    };
}

/// One registration per component type; adding a variant means adding a line
/// here and a tag arm in `Component`.
pub static TYPE_REGISTRY: &[(&str, Constructor)] = &[
    entry!("pipe", Pipe, Pipe),
    entry!("elbow", Elbow, Elbow),
    entry!("tee", Tee, Tee),
    entry!("three_way_valve", ThreeWayValve, ThreeWayValve),
    entry!("four_way_valve", FourWayValve, FourWayValve),
    entry!("tank", Tank, Tank),
    entry!("valve", Valve, Valve),
    entry!("pump", Pump, Pump),
    entry!("sensor", Sensor, Sensor),
    entry!("heat_exchanger", HeatExchanger, HeatExchanger),
];

/// Parse a scene document. All-or-nothing: the first bad entry fails the
/// whole load.
pub fn parse(text: &str) -> SceneResult<Scene> {
    let doc: Value = serde_json::from_str(text)
        .map_err(|e| SceneError::Format(format!("invalid JSON: {e}")))?;
    let Value::Object(mut root) = doc else {
        return Err(SceneError::Format("top level must be an object".into()));
    };

    let entries = match root.remove("components") {
        None => Vec::new(),
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            return Err(SceneError::Format("'components' must be an array".into()));
        }
    };

    let mut components = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let component = build_component(entry, index).inspect_err(|e| {
            tracing::warn!(index, error = %e, "rejecting scene document");
        })?;
        components.push(component);
    }

    tracing::info!(count = components.len(), "scene loaded");
    Ok(Scene::new(components))
}

fn build_component(entry: Value, index: usize) -> SceneResult<Component> {
    let Value::Object(map) = &entry else {
        return Err(SceneError::Field {
            component: format!("#{index}"),
            message: "component entry must be an object".into(),
        });
    };
    // Error messages name the component by id when it has one.
    let name = map
        .get("id")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{index}"));

    let Some(tag) = map.get("type").and_then(Value::as_str) else {
        return Err(SceneError::Field {
            component: name,
            message: "missing 'type' tag".into(),
        });
    };

    let Some((_, constructor)) = TYPE_REGISTRY.iter().find(|(t, _)| *t == tag) else {
        return Err(SceneError::UnknownComponentType {
            tag: tag.to_string(),
        });
    };

    constructor(entry).map_err(|e| SceneError::Field {
        component: name,
        message: e.to_string(),
    })
}
