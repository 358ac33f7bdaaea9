//! CIE Standard Illuminant White Points
//!
//! White points define the color of "white" for a given illuminant,
//! specified as CIE XYZ coordinates where Y = 1.0. Which white point an
//! XYZ value is relative to is a property of the conversion that
//! produced it, never of the value itself: the Lab hub is D50-relative,
//! every RGB matrix except ProPhoto's is D65-relative.
//!
//! Values are derived from the CSS Color 4 rational chromaticities,
//! evaluated in const context so no precision is lost up front.

use crate::color::Xyz;

/// A white point definition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    /// Name of the illuminant
    pub name: &'static str,
    /// CIE XYZ coordinates (Y normalized to 1.0)
    pub xyz: Xyz,
}

impl WhitePoint {
    /// Create a new white point
    pub const fn new(name: &'static str, x: f64, y: f64, z: f64) -> Self {
        Self {
            name,
            xyz: Xyz::new(x, y, z),
        }
    }
}

/// CIE Standard Illuminant D50 (Horizon Light)
///
/// Reference white of the Lab hub and of the ProPhoto RGB matrices.
/// Derived from the chromaticity (0.3457, 0.3585).
pub const D50: WhitePoint = WhitePoint::new(
    "D50",
    0.3457 / 0.3585,
    1.0,
    (1.0 - 0.3457 - 0.3585) / 0.3585,
);

/// CIE Standard Illuminant D65 (Noon Daylight)
///
/// Reference white of the sRGB, Display P3, A98 and Rec.2020 matrices.
/// Derived from the chromaticity (0.3127, 0.3290).
pub const D65: WhitePoint = WhitePoint::new(
    "D65",
    0.3127 / 0.3290,
    1.0,
    (1.0 - 0.3127 - 0.3290) / 0.3290,
);
