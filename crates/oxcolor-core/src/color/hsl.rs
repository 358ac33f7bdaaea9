//! HSL color space
//!
//! HSL is derived from gamma-encoded RGB by direct channel formulas;
//! no matrix, no XYZ hub. Hue is kept in the engine's internal
//! turn-fraction unit, 0..12 where one unit is 30 degrees. Scaling to
//! CSS degrees happens only at the CSS boundary ([`crate::css`]).

use crate::color::Rgb;
use crate::math::scalar::fmod;

/// An HSL color
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    /// Hue in turn-fraction units [0, 12)
    pub h: f64,
    /// Saturation (0 to 1)
    pub s: f64,
    /// Lightness (0 to 1)
    pub l: f64,
}

impl Hsl {
    /// Create a new HSL color
    ///
    /// The hue is wrapped into [0, 12).
    #[inline]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: fmod(h, 12.0),
            s,
            l,
        }
    }

    /// Convert gamma-encoded RGB to HSL
    ///
    /// Achromatic input (max = min) yields hue 0; pure black and pure
    /// white additionally yield saturation 0.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let Rgb { r, g, b } = rgb;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let d = max - min;
        let l = (max + min) / 2.0;

        let s = if d == 0.0 || l <= 0.0 || l >= 1.0 {
            0.0
        } else {
            (max - l) / l.min(1.0 - l)
        };

        // hue in sixths of a turn, then doubled into turn-fraction units
        let hue = if d == 0.0 {
            0.0
        } else if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Self {
            h: fmod(hue * 2.0, 12.0),
            s,
            l,
        }
    }

    /// Convert HSL to gamma-encoded RGB
    pub fn to_rgb(&self) -> Rgb {
        let a = self.s * self.l.min(1.0 - self.l);
        let f = |n: f64| {
            let k = fmod(self.h + n, 12.0);
            self.l - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
        };
        Rgb::new(f(0.0), f(8.0), f(4.0))
    }

    /// Check if approximately equal to another HSL color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.h - other.h).abs() < epsilon
            && (self.s - other.s).abs() < epsilon
            && (self.l - other.l).abs() < epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_red() {
        let hsl = Hsl::from_rgb(Rgb::RED);
        assert!((hsl.h - 0.0).abs() < EPSILON);
        assert!((hsl.s - 1.0).abs() < EPSILON);
        assert!((hsl.l - 0.5).abs() < EPSILON);

        let rgb = hsl.to_rgb();
        assert!(rgb.approx_eq(&Rgb::RED, EPSILON));
    }

    #[test]
    fn test_primaries_hue() {
        // green is a third of a turn (4 units), blue two thirds (8)
        assert!((Hsl::from_rgb(Rgb::GREEN).h - 4.0).abs() < EPSILON);
        assert!((Hsl::from_rgb(Rgb::BLUE).h - 8.0).abs() < EPSILON);
    }

    #[test]
    fn test_achromatic() {
        for v in [0.0, 0.25, 0.5, 1.0] {
            let hsl = Hsl::from_rgb(Rgb::new(v, v, v));
            assert_eq!(hsl.h, 0.0, "gray {v} hue");
            assert_eq!(hsl.s, 0.0, "gray {v} saturation");
            assert!((hsl.l - v).abs() < EPSILON);
            assert!(hsl.to_rgb().approx_eq(&Rgb::new(v, v, v), EPSILON));
        }
    }

    #[test]
    fn test_roundtrip() {
        let samples = [
            Rgb::new(0.2, 0.4, 0.6),
            Rgb::new(0.9, 0.1, 0.5),
            Rgb::new(0.33, 0.33, 0.34),
            Rgb::new(1.0, 0.5, 0.0),
        ];
        for rgb in samples {
            let roundtrip = Hsl::from_rgb(rgb).to_rgb();
            assert!(
                roundtrip.approx_eq(&rgb, EPSILON),
                "HSL roundtrip failed: {rgb:?} vs {roundtrip:?}"
            );
        }
    }

    #[test]
    fn test_hue_wraps() {
        let hsl = Hsl::new(-1.0, 0.5, 0.5);
        assert!((hsl.h - 11.0).abs() < EPSILON);
        let hsl = Hsl::new(25.0, 0.5, 0.5);
        assert!((hsl.h - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_negative_hue_input_to_rgb() {
        // to_rgb wraps per-channel offsets itself, so a hue just under
        // 12 equals a hue just above 0 shifted by a full turn
        let a = Hsl::new(11.999999, 1.0, 0.5).to_rgb();
        let b = Hsl::new(-0.000001, 1.0, 0.5).to_rgb();
        assert!(a.approx_eq(&b, 1e-6));
    }
}
