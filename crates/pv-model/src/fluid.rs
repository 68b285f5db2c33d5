//! Tank fluid layers and their closed-form level evolution.

use pv_core::{Real, Rgb};
use serde::{Deserialize, Serialize};

use crate::common::PIPE_COLOR;

/// One fluid layer in a tank. `percent` is the layer's share of the document's
/// layer mix; rates are in percent of tank capacity per second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fluid {
    pub color: Rgb,
    pub name: String,
    #[serde(default)]
    pub percent: Real,
    #[serde(default)]
    pub drain_rate: Real,
    #[serde(default)]
    pub fill_rate: Real,
}

/// The implicit single layer a tank gets when the document names none.
pub(crate) fn default_fluids() -> Vec<Fluid> {
    vec![Fluid {
        color: PIPE_COLOR,
        name: "water".to_string(),
        percent: 100.0,
        drain_rate: 0.0,
        fill_rate: 0.0,
    }]
}

/// Absolute layer levels (percent of tank capacity) at time `t`.
///
/// The document percents are first normalized so they sum to the tank's
/// initial fill percent, then each layer integrates its net rate from that
/// start. Levels clamp at zero per layer; if the sum overshoots 100 the
/// layers are rescaled proportionally, so the tank can neither underflow nor
/// overfill at any time. Pure function of `t`; the document state is never
/// touched.
pub fn levels_at(fluids: &[Fluid], fill_percent: Real, t: Real) -> Vec<Real> {
    let fill = fill_percent.clamp(0.0, 100.0);
    let total: Real = fluids.iter().map(|f| f.percent).sum();

    let mut levels: Vec<Real> = fluids
        .iter()
        .map(|f| {
            let initial = if total > 0.0 {
                f.percent / total * fill
            } else {
                0.0
            };
            (initial + (f.fill_rate - f.drain_rate) * t).max(0.0)
        })
        .collect();

    let sum: Real = levels.iter().sum();
    if sum > 100.0 {
        let scale = 100.0 / sum;
        for level in &mut levels {
            *level *= scale;
        }
    }
    levels
}
