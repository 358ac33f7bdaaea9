//! HWB color space
//!
//! Hue-whiteness-blackness, CSS Color 4's painter's model. Shares the
//! HSL hue circle (turn-fraction units, 0..12) and converts to RGB by
//! remapping the fully-saturated hue between whiteness and blackness.

use crate::color::{Hsl, Rgb};

/// An HWB color
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hwb {
    /// Hue in turn-fraction units [0, 12)
    pub h: f64,
    /// Whiteness (0 to 1)
    pub w: f64,
    /// Blackness (0 to 1)
    pub b: f64,
}

impl Hwb {
    /// Create a new HWB color
    #[inline]
    pub const fn new(h: f64, w: f64, b: f64) -> Self {
        Self { h, w, b }
    }

    /// Convert gamma-encoded RGB to HWB
    pub fn from_rgb(rgb: Rgb) -> Self {
        let Rgb { r, g, b } = rgb;
        Self {
            h: Hsl::from_rgb(rgb).h,
            w: r.min(g).min(b),
            b: 1.0 - r.max(g).max(b),
        }
    }

    /// Convert HWB to gamma-encoded RGB
    ///
    /// When whiteness + blackness reach 1 the hue no longer matters and
    /// the result is the achromatic gray `w / (w + b)`.
    pub fn to_rgb(&self) -> Rgb {
        if self.w + self.b >= 1.0 {
            let gray = self.w / (self.w + self.b);
            return Rgb::new(gray, gray, gray);
        }
        let m = 1.0 - self.w - self.b;
        let pure = Hsl::new(self.h, 1.0, 0.5).to_rgb();
        let f = |c: f64| c * m + self.w;
        Rgb::new(f(pure.r), f(pure.g), f(pure.b))
    }

    /// Check if approximately equal to another HWB color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.h - other.h).abs() < epsilon
            && (self.w - other.w).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_red() {
        let hwb = Hwb::from_rgb(Rgb::RED);
        assert_eq!(hwb.h, 0.0);
        assert_eq!(hwb.w, 0.0);
        assert_eq!(hwb.b, 0.0);
        assert!(hwb.to_rgb().approx_eq(&Rgb::RED, EPSILON));
    }

    #[test]
    fn test_white_and_black() {
        let white = Hwb::from_rgb(Rgb::WHITE);
        assert!((white.w - 1.0).abs() < EPSILON);
        assert!(white.b.abs() < EPSILON);
        assert!(white.to_rgb().approx_eq(&Rgb::WHITE, EPSILON));

        let black = Hwb::from_rgb(Rgb::BLACK);
        assert!(black.w.abs() < EPSILON);
        assert!((black.b - 1.0).abs() < EPSILON);
        assert!(black.to_rgb().approx_eq(&Rgb::BLACK, EPSILON));
    }

    #[test]
    fn test_overcommitted_is_gray() {
        // w + b >= 1 collapses to gray regardless of hue
        let a = Hwb::new(3.0, 0.8, 0.4).to_rgb();
        let b = Hwb::new(9.0, 0.8, 0.4).to_rgb();
        assert!(a.approx_eq(&b, EPSILON));
        let gray = 0.8 / 1.2;
        assert!(a.approx_eq(&Rgb::new(gray, gray, gray), EPSILON));
    }

    #[test]
    fn test_roundtrip() {
        let samples = [
            Rgb::new(0.2, 0.4, 0.6),
            Rgb::new(0.9, 0.1, 0.5),
            Rgb::new(1.0, 0.5, 0.0),
            Rgb::new(0.1, 0.1, 0.1),
        ];
        for rgb in samples {
            let roundtrip = Hwb::from_rgb(rgb).to_rgb();
            assert!(
                roundtrip.approx_eq(&rgb, EPSILON),
                "HWB roundtrip failed: {rgb:?} vs {roundtrip:?}"
            );
        }
    }
}
