//! Compact scene document writer.
//!
//! Plain `serde_json` pretty-printing puts every coordinate pair and color on
//! three lines. Scene documents are meant to be edited by hand, so the writer
//! keeps primitive arrays and small flat objects on one line and only breaks
//! nested structure across lines.

use serde_json::{Map, Value};

use crate::{Scene, SceneResult};

const INDENT: &str = "  ";

/// Objects up to this many entries collapse onto one line when flat.
const INLINE_OBJECT_LEN: usize = 3;

/// Serialize a scene to the compact document format.
pub fn serialize(scene: &Scene) -> SceneResult<String> {
    let components = scene
        .components
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()?;

    let mut root = Map::new();
    root.insert("components".to_string(), Value::Array(components));

    let mut out = String::new();
    write_value(&Value::Object(root), 0, &mut out);
    out.push('\n');
    Ok(out)
}

fn is_primitive(value: &Value) -> bool {
    !matches!(value, Value::Object(_) | Value::Array(_))
}

/// A short array of scalars, e.g. a position pair or a color triple.
fn is_inline_array(value: &Value) -> bool {
    match value {
        Value::Array(items) => items.iter().all(is_primitive),
        _ => false,
    }
}

/// Flat objects render on one line: every value is a scalar or a small
/// scalar array, and there are few enough entries to scan.
fn is_inline_object(map: &Map<String, Value>) -> bool {
    map.len() <= INLINE_OBJECT_LEN
        && map.values().all(|v| {
            is_primitive(v)
                || matches!(v, Value::Array(items) if items.len() <= 3 && items.iter().all(is_primitive))
        })
}

fn write_value(value: &Value, level: usize, out: &mut String) {
    match value {
        Value::Object(map) if map.is_empty() => out.push_str("{}"),
        Value::Object(map) if is_inline_object(map) => {
            out.push('{');
            for (i, (key, v)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&format!("{}: {}", quoted(key), scalar(v)));
            }
            out.push('}');
        }
        Value::Object(map) => {
            out.push_str("{\n");
            for (i, (key, v)) in map.iter().enumerate() {
                out.push_str(&INDENT.repeat(level + 1));
                out.push_str(&format!("{}: ", quoted(key)));
                write_value(v, level + 1, out);
                if i + 1 < map.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            out.push_str(&INDENT.repeat(level));
            out.push('}');
        }
        Value::Array(items) if items.is_empty() => out.push_str("[]"),
        Value::Array(items) if is_inline_array(value) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&scalar(item));
            }
            out.push(']');
        }
        Value::Array(items) => {
            out.push_str("[\n");
            for (i, item) in items.iter().enumerate() {
                out.push_str(&INDENT.repeat(level + 1));
                write_value(item, level + 1, out);
                if i + 1 < items.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            out.push_str(&INDENT.repeat(level));
            out.push(']');
        }
        _ => out.push_str(&scalar(value)),
    }
}

fn scalar(value: &Value) -> String {
    value.to_string()
}

fn quoted(key: &str) -> String {
    Value::String(key.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn round_trip(doc: &str) -> (Scene, String) {
        let scene = parse(doc).unwrap();
        let text = serialize(&scene).unwrap();
        (scene, text)
    }

    #[test]
    fn round_trip_preserves_the_scene() {
        let (scene, text) = round_trip(
            r#"{"components": [
                {"type": "pipe", "id": "p1", "position": [2, 2], "end_position": [8, 2],
                 "flow_direction": "backward", "trim_end": true},
                {"type": "elbow", "id": "e1", "position": [8, 2], "rotation": 270},
                {"type": "tank", "id": "t1", "position": [10, 2], "top_style": "ellipsoidal",
                 "fill_percent": 70,
                 "fluids": [
                    {"color": [200, 100, 50], "name": "oil", "percent": 30, "fill_rate": 2},
                    {"color": [100, 150, 255], "name": "water", "percent": 70, "drain_rate": 3}
                 ]},
                {"type": "valve", "id": "v1", "position": [4, 2], "state": "closed",
                 "animation": [{"duration": 2, "state": "open"}, {"duration": 2, "state": "closed"}]}
            ]}"#,
        );
        let reparsed = parse(&text).unwrap();
        assert_eq!(reparsed, scene);
    }

    #[test]
    fn coordinate_pairs_stay_on_one_line() {
        let (_, text) = round_trip(
            r#"{"components": [{"type": "pipe", "position": [0, 0], "end_position": [4, 0]}]}"#,
        );
        assert!(text.contains("\"position\": [0, 0]"), "got:\n{text}");
        assert!(text.contains("\"end_position\": [4, 0]"), "got:\n{text}");
    }

    #[test]
    fn colors_stay_on_one_line() {
        let (_, text) = round_trip(
            r#"{"components": [{"type": "valve", "position": [0, 0], "color": [10, 20, 30]}]}"#,
        );
        assert!(text.contains("\"color\": [10, 20, 30]"), "got:\n{text}");
    }

    #[test]
    fn small_flat_objects_collapse() {
        let (_, text) = round_trip(
            r#"{"components": [{"type": "valve", "position": [0, 0],
                "animation": [{"duration": 2, "state": "closed"}]}]}"#,
        );
        assert!(
            text.contains(r#"{"duration": 2.0, "state": "closed"}"#),
            "got:\n{text}"
        );
    }

    #[test]
    fn component_entries_each_get_their_own_lines() {
        let (_, text) = round_trip(
            r#"{"components": [
                {"type": "tee", "position": [0, 0]},
                {"type": "tee", "position": [1, 0]}
            ]}"#,
        );
        // Two component objects, multi-line, nested one level under the array.
        assert!(text.starts_with("{\n  \"components\": [\n"), "got:\n{text}");
    }

    #[test]
    fn static_components_omit_the_animation_key() {
        let (_, text) =
            round_trip(r#"{"components": [{"type": "pump", "position": [0, 0]}]}"#);
        assert!(!text.contains("animation"), "got:\n{text}");
        assert!(!text.contains("label"), "got:\n{text}");
    }
}
