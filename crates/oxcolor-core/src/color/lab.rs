//! CIELAB (L*a*b*) color space and its polar form LCH
//!
//! The XYZ↔Lab hub is D50-relative: feed it XYZ produced by a
//! D50-relative matrix (ProPhoto) directly; other spaces' D65 XYZ is
//! the caller's responsibility to interpret.
//!
//! - L*: Lightness (0 = black, 100 = white)
//! - a*: Green-red axis (negative = green, positive = red)
//! - b*: Blue-yellow axis (negative = blue, positive = yellow)

use crate::color::white_point::D50;
use crate::color::Xyz;

/// CIE rational constant ε = 6³/29³
const EPSILON: f64 = 216.0 / 24389.0;
/// CIE rational constant κ = 29³/3³
const KAPPA: f64 = 24389.0 / 27.0;

/// CIELAB color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lab {
    /// Lightness (0 to 100)
    pub l: f64,
    /// Green-red axis (unbounded, typically -128 to 127)
    pub a: f64,
    /// Blue-yellow axis (unbounded, typically -128 to 127)
    pub b: f64,
}

/// CIELAB in polar form: lightness, chroma, hue
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lch {
    /// Lightness (0 to 100)
    pub l: f64,
    /// Chroma, nominally >= 0; negative values are tolerated and
    /// produce the point-reflected Cartesian pair
    pub c: f64,
    /// Hue in degrees [0, 360)
    pub h: f64,
}

impl Lab {
    /// Create a new Lab color
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Convert from D50-relative XYZ
    pub fn from_xyz(xyz: Xyz) -> Self {
        let f = |c: f64| {
            if c > EPSILON {
                c.cbrt()
            } else {
                (KAPPA * c + 16.0) / 116.0
            }
        };

        let f0 = f(xyz.x / D50.xyz.x);
        let f1 = f(xyz.y / D50.xyz.y);
        let f2 = f(xyz.z / D50.xyz.z);

        Self {
            l: 116.0 * f1 - 16.0,
            a: 500.0 * (f0 - f1),
            b: 200.0 * (f1 - f2),
        }
    }

    /// Convert to D50-relative XYZ
    pub fn to_xyz(&self) -> Xyz {
        let f1 = (self.l + 16.0) / 116.0;
        let f0 = self.a / 500.0 + f1;
        let f2 = f1 - self.b / 200.0;

        let finv = |f: f64| {
            let f3 = f * f * f;
            if f3 > EPSILON { f3 } else { (116.0 * f - 16.0) / KAPPA }
        };

        // Per the CIE standard the Y component is recovered from L
        // directly against the κ·ε threshold, not from f1 against ε.
        let y = if self.l > KAPPA * EPSILON {
            f1 * f1 * f1
        } else {
            self.l / KAPPA
        };

        Xyz::new(
            finv(f0) * D50.xyz.x,
            y * D50.xyz.y,
            finv(f2) * D50.xyz.z,
        )
    }

    /// Convert to polar form
    ///
    /// Hue is normalized into [0, 360); a = b = 0 yields hue 0
    /// (atan2(0, 0) = 0), never NaN.
    pub fn to_lch(&self) -> Lch {
        let hue = self.b.atan2(self.a).to_degrees();
        Lch {
            l: self.l,
            c: (self.a * self.a + self.b * self.b).sqrt(),
            h: if hue >= 0.0 { hue } else { hue + 360.0 },
        }
    }

    /// Check if approximately equal to another Lab color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

impl Lch {
    /// Create a new LCH color
    #[inline]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Convert to Cartesian form
    pub fn to_lab(&self) -> Lab {
        let (sin, cos) = self.h.to_radians().sin_cos();
        Lab {
            l: self.l,
            a: self.c * cos,
            b: self.c * sin,
        }
    }

    /// Check if approximately equal to another LCH color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.c - other.c).abs() < epsilon
            && (self.h - other.h).abs() < epsilon
    }
}
