//! Integer grid coordinates.

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeTuple, Serializer};
use serde::{Deserialize, Serialize};

use crate::math::{Real, Vec2};

/// A position on the placement grid. Components sit on whole grid cells;
/// fractional positions in a document are a load error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridPos {
    pub x: i64,
    pub y: i64,
}

impl GridPos {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x as Real, self.y as Real)
    }
}

impl Serialize for GridPos {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut t = serializer.serialize_tuple(2)?;
        t.serialize_element(&self.x)?;
        t.serialize_element(&self.y)?;
        t.end()
    }
}

impl<'de> Deserialize<'de> for GridPos {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PosVisitor;

        impl<'de> Visitor<'de> for PosVisitor {
            type Value = GridPos;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a 2-element array of integers")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<GridPos, A::Error> {
                let x: f64 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let y: f64 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                if seq.next_element::<f64>()?.is_some() {
                    return Err(de::Error::invalid_length(3, &self));
                }
                let coerce = |v: f64| -> Result<i64, A::Error> {
                    if v.fract() == 0.0 && v.is_finite() {
                        Ok(v as i64)
                    } else {
                        Err(de::Error::custom(format!(
                            "grid coordinate must be an integer, got {v}"
                        )))
                    }
                };
                Ok(GridPos::new(coerce(x)?, coerce(y)?))
            }
        }

        deserializer.deserialize_seq(PosVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_as_pair() {
        let p = GridPos::new(4, -2);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "[4,-2]");
        assert_eq!(serde_json::from_str::<GridPos>(&json).unwrap(), p);
    }

    #[test]
    fn rejects_fractional_coordinates() {
        assert!(serde_json::from_str::<GridPos>("[1.5, 2]").is_err());
    }

    #[test]
    fn rejects_wrong_arity() {
        assert!(serde_json::from_str::<GridPos>("[1]").is_err());
        assert!(serde_json::from_str::<GridPos>("[1, 2, 3]").is_err());
    }
}
