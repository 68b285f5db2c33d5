//! Keyframe cycle evaluation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::PropertyValue;
use pv_core::Real;

/// Floor applied to non-positive keyframe durations so the cycle modulo stays
/// well-defined and no keyframe can pause the cycle forever.
pub const MIN_KEYFRAME_DURATION: Real = 1e-3;

/// One timed bundle of property overrides.
///
/// In the document a keyframe is a flat object: `duration` plus arbitrary
/// property-name keys (`{"duration": 2, "state": "closed"}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub duration: Real,
    #[serde(flatten)]
    pub overrides: BTreeMap<String, PropertyValue>,
}

impl Keyframe {
    /// Duration with the non-positive floor applied.
    fn effective_duration(&self) -> Real {
        if self.duration.is_finite() && self.duration > 0.0 {
            self.duration
        } else {
            MIN_KEYFRAME_DURATION
        }
    }
}

/// Evaluates a looping keyframe schedule against the global animation clock.
///
/// Built once from a component's `animation` list at load time; immutable
/// afterwards. The cumulative schedule is cached so per-frame queries are a
/// short scan.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnimationController {
    keyframes: Vec<Keyframe>,
    cumulative: Vec<Real>,
    total_duration: Real,
}

impl AnimationController {
    pub fn new(keyframes: Vec<Keyframe>) -> Self {
        let mut cumulative = Vec::with_capacity(keyframes.len());
        let mut total = 0.0;
        for kf in &keyframes {
            total += kf.effective_duration();
            cumulative.push(total);
        }
        Self {
            keyframes,
            cumulative,
            total_duration: total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// Total cycle duration in seconds.
    pub fn total_duration(&self) -> Real {
        self.total_duration
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// Index of the keyframe active at time `t`, or None with no keyframes.
    ///
    /// Defined for every real `t` and periodic in `total_duration`:
    /// `active_index(t) == active_index(t + k * total_duration)`.
    pub fn active_index(&self, t: Real) -> Option<usize> {
        if self.keyframes.is_empty() {
            return None;
        }
        let cycle_t = t.rem_euclid(self.total_duration);
        for (i, end) in self.cumulative.iter().enumerate() {
            if cycle_t < *end {
                return Some(i);
            }
        }
        // Float edge: cycle_t landed exactly on the total. Convention is the
        // last keyframe.
        Some(self.keyframes.len() - 1)
    }

    pub fn active_keyframe(&self, t: Real) -> Option<&Keyframe> {
        self.active_index(t).map(|i| &self.keyframes[i])
    }

    /// Property overrides active at time `t`. Empty map when the controller
    /// has no keyframes.
    pub fn overrides_at(&self, t: Real) -> &BTreeMap<String, PropertyValue> {
        static EMPTY: std::sync::OnceLock<BTreeMap<String, PropertyValue>> =
            std::sync::OnceLock::new();
        match self.active_keyframe(t) {
            Some(kf) => &kf.overrides,
            None => EMPTY.get_or_init(BTreeMap::new),
        }
    }
}

// In the document an animation is just the keyframe list; the cached schedule
// is rebuilt on load.
impl Serialize for AnimationController {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.keyframes.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AnimationController {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::new(Vec::<Keyframe>::deserialize(deserializer)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn kf(duration: Real, pairs: &[(&str, PropertyValue)]) -> Keyframe {
        Keyframe {
            duration,
            overrides: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        }
    }

    fn two_phase() -> AnimationController {
        AnimationController::new(vec![
            kf(2.0, &[("state", PropertyValue::Text("open".into()))]),
            kf(1.0, &[("state", PropertyValue::Text("closed".into()))]),
        ])
    }

    #[test]
    fn selects_keyframe_by_cumulative_time() {
        let c = two_phase();
        assert_eq!(c.total_duration(), 3.0);
        assert_eq!(c.active_index(0.0), Some(0));
        assert_eq!(c.active_index(1.999), Some(0));
        assert_eq!(c.active_index(2.0), Some(1));
        assert_eq!(c.active_index(2.999), Some(1));
        // Wraps back to the first keyframe.
        assert_eq!(c.active_index(3.0), Some(0));
    }

    #[test]
    fn negative_time_is_well_defined() {
        let c = two_phase();
        // rem_euclid: -0.5 lands at 2.5 in the cycle, i.e. the second frame.
        assert_eq!(c.active_index(-0.5), Some(1));
    }

    #[test]
    fn non_positive_durations_are_floored() {
        let c = AnimationController::new(vec![kf(0.0, &[]), kf(-3.0, &[])]);
        assert!(c.total_duration() > 0.0);
        assert_eq!(c.total_duration(), 2.0 * MIN_KEYFRAME_DURATION);
        assert!(c.active_index(0.0).is_some());
    }

    #[test]
    fn empty_controller_yields_empty_overrides() {
        let c = AnimationController::default();
        assert!(c.is_empty());
        assert_eq!(c.active_index(1.0), None);
        assert!(c.overrides_at(1.0).is_empty());
    }

    #[test]
    fn overrides_come_from_active_keyframe() {
        let c = two_phase();
        assert_eq!(
            c.overrides_at(2.5).get("state").unwrap().as_text(),
            Some("closed")
        );
    }

    #[test]
    fn keyframe_parses_flat_document_shape() {
        let kf: Keyframe =
            serde_json::from_str(r#"{"duration": 2, "state": "closed", "color": [255, 0, 0]}"#)
                .unwrap();
        assert_eq!(kf.duration, 2.0);
        assert_eq!(
            kf.overrides.get("color").unwrap(),
            &PropertyValue::Triple([255.0, 0.0, 0.0])
        );
    }

    #[test]
    fn controller_round_trips_as_a_keyframe_list() {
        let c = AnimationController::new(vec![kf(
            2.0,
            &[("state", PropertyValue::Text("closed".into()))],
        )]);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"[{"duration":2.0,"state":"closed"}]"#);
        let back: AnimationController = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
        assert_eq!(back.total_duration(), 2.0);
    }

    proptest! {
        #[test]
        fn index_is_periodic(t in -1e4f64..1e4, k in -5i64..5) {
            let c = two_phase();
            let shifted = t + k as f64 * c.total_duration();
            prop_assert_eq!(c.active_index(t), c.active_index(shifted));
        }

        #[test]
        fn index_always_defined(t in proptest::num::f64::NORMAL) {
            let c = two_phase();
            let i = c.active_index(t).unwrap();
            prop_assert!(i < 2);
        }
    }
}
