//! Override values carried by keyframes.

use serde::de::{self, Deserializer};
use serde::ser::{SerializeTuple, Serializer};
use serde::{Deserialize, Serialize};

/// A single property override value.
///
/// Sequence-typed document values are normalized to fixed-arity variants at
/// load time: a 2-element list becomes [`PropertyValue::Pair`] (positions), a
/// 3-element list becomes [`PropertyValue::Triple`] (colors). Downstream
/// consumers never see an open-ended collection for a fixed-arity field.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Bool(bool),
    Number(f64),
    Text(String),
    Pair([f64; 2]),
    Triple([f64; 3]),
}

impl PropertyValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropertyValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_pair(&self) -> Option<[f64; 2]> {
        match self {
            PropertyValue::Pair(p) => Some(*p),
            _ => None,
        }
    }

    pub fn as_triple(&self) -> Option<[f64; 3]> {
        match self {
            PropertyValue::Triple(t) => Some(*t),
            _ => None,
        }
    }
}

impl Serialize for PropertyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PropertyValue::Bool(b) => serializer.serialize_bool(*b),
            PropertyValue::Number(n) => serializer.serialize_f64(*n),
            PropertyValue::Text(s) => serializer.serialize_str(s),
            PropertyValue::Pair(p) => {
                let mut t = serializer.serialize_tuple(2)?;
                for v in p {
                    t.serialize_element(v)?;
                }
                t.end()
            }
            PropertyValue::Triple(c) => {
                let mut t = serializer.serialize_tuple(3)?;
                for v in c {
                    t.serialize_element(v)?;
                }
                t.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for PropertyValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Deserialize through an untagged shadow, then normalize list arity.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Bool(bool),
            Number(f64),
            Text(String),
            List(Vec<f64>),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Bool(b) => Ok(PropertyValue::Bool(b)),
            Raw::Number(n) => Ok(PropertyValue::Number(n)),
            Raw::Text(s) => Ok(PropertyValue::Text(s)),
            Raw::List(items) => match items.as_slice() {
                [a, b] => Ok(PropertyValue::Pair([*a, *b])),
                [a, b, c] => Ok(PropertyValue::Triple([*a, *b, *c])),
                _ => Err(de::Error::custom(format!(
                    "override lists must have 2 or 3 elements, got {}",
                    items.len()
                ))),
            },
        }
    }
}
