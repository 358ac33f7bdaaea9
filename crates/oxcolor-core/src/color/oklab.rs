//! Oklab color space and its polar form Oklch
//!
//! The XYZ↔Oklab hub routes through LMS cone space. Both legs are
//! linear, so the two matrices compose into a single constant per
//! direction ([`XYZ_TO_OKLAB`], [`OKLAB_TO_XYZ`]) and a conversion is
//! one matrix-vector product. The composition happens at compile time;
//! there is no mutable state and no initialization order to get wrong.

use crate::color::Xyz;
use crate::math::matrix::Matrix3x3;

/// XYZ (D65) to LMS cone response matrix
pub const XYZ_TO_LMS: Matrix3x3 = Matrix3x3::new([
    [0.8190224379967030, 0.3619062600528904, -0.1288737815209879],
    [0.0329836539323885, 0.9292868615863434, 0.0361446663506424],
    [0.0481771893596242, 0.2642395317527308, 0.6335478284694309],
]);

/// LMS cone response to Oklab matrix
pub const LMS_TO_OKLAB: Matrix3x3 = Matrix3x3::new([
    [0.2104542683093140, 0.7936177747023054, -0.0040720430116193],
    [1.9779985324311684, -2.4285922420485799, 0.4505937096174110],
    [0.0259040424655478, 0.7827717124575296, -0.8086757549230774],
]);

/// LMS cone response to XYZ (D65) matrix, inverse of [`XYZ_TO_LMS`]
pub const LMS_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [1.2268798758459243, -0.5578149944602171, 0.2813910456659647],
    [-0.0405757452148008, 1.1122868032803170, -0.0717110580655164],
    [-0.0763729366746601, -0.4214933324022432, 1.5869240198367816],
]);

/// Oklab to LMS cone response matrix, inverse of [`LMS_TO_OKLAB`]
pub const OKLAB_TO_LMS: Matrix3x3 = Matrix3x3::new([
    [1.0000000000000000, 0.3963377773761749, 0.2158037573099136],
    [1.0000000000000000, -0.1055613458156586, -0.0638541728258133],
    [1.0000000000000000, -0.0894841775298119, -1.2914855480194092],
]);

/// Composed XYZ → Oklab matrix, folded at compile time
pub const XYZ_TO_OKLAB: Matrix3x3 = LMS_TO_OKLAB.multiply(&XYZ_TO_LMS);

/// Composed Oklab → XYZ matrix, folded at compile time
pub const OKLAB_TO_XYZ: Matrix3x3 = LMS_TO_XYZ.multiply(&OKLAB_TO_LMS);

/// Oklab color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Oklab {
    /// Lightness (0 to 1)
    pub l: f64,
    /// Green-red axis (unbounded)
    pub a: f64,
    /// Blue-yellow axis (unbounded)
    pub b: f64,
}

/// Oklab in polar form: lightness, chroma, hue
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Oklch {
    /// Lightness (0 to 1)
    pub l: f64,
    /// Chroma, nominally >= 0; negative values are tolerated
    pub c: f64,
    /// Hue in degrees [0, 360)
    pub h: f64,
}

impl Oklab {
    /// Create a new Oklab color
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Convert from D65-relative XYZ
    #[inline]
    pub fn from_xyz(xyz: Xyz) -> Self {
        let [l, a, b] = XYZ_TO_OKLAB.multiply_vec(xyz.to_array());
        Self { l, a, b }
    }

    /// Convert to D65-relative XYZ
    #[inline]
    pub fn to_xyz(&self) -> Xyz {
        Xyz::from_array(OKLAB_TO_XYZ.multiply_vec([self.l, self.a, self.b]))
    }

    /// Convert to polar form
    ///
    /// Hue is normalized into [0, 360); a = b = 0 yields hue 0.
    pub fn to_oklch(&self) -> Oklch {
        let hue = self.b.atan2(self.a).to_degrees();
        Oklch {
            l: self.l,
            c: (self.a * self.a + self.b * self.b).sqrt(),
            h: if hue >= 0.0 { hue } else { hue + 360.0 },
        }
    }

    /// Check if approximately equal to another Oklab color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

impl Oklch {
    /// Create a new Oklch color
    #[inline]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Convert to Cartesian form
    pub fn to_oklab(&self) -> Oklab {
        let (sin, cos) = self.h.to_radians().sin_cos();
        Oklab {
            l: self.l,
            a: self.c * cos,
            b: self.c * sin,
        }
    }

    /// Check if approximately equal to another Oklch color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.c - other.c).abs() < epsilon
            && (self.h - other.h).abs() < epsilon
    }
}
