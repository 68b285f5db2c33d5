//! RGB color triples as they appear in scene documents.

use serde::{Deserialize, Serialize};

/// An sRGB color, one byte per channel. Serialized as a 3-element array,
/// matching the document schema (`"color": [100, 150, 255]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Darken all channels by `amount`, saturating at zero. Symbol outlines
    /// are drawn in the body color darkened by 40.
    pub fn darkened(self, amount: u8) -> Rgb {
        Rgb(
            self.0.saturating_sub(amount),
            self.1.saturating_sub(amount),
            self.2.saturating_sub(amount),
        )
    }

    /// Channel-wise linear interpolation, `t` clamped to [0, 1].
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Rgb(c[0], c[1], c[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn darkened_saturates() {
        assert_eq!(Rgb(100, 30, 0).darkened(40), Rgb(60, 0, 0));
    }

    #[test]
    fn serde_round_trip_is_an_array() {
        let json = serde_json::to_string(&Rgb(1, 2, 3)).unwrap();
        assert_eq!(json, "[1,2,3]");
        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgb(1, 2, 3));
    }

    #[test]
    fn lerp_endpoints() {
        let a = Rgb(50, 150, 200);
        let b = Rgb(255, 50, 50);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }
}
