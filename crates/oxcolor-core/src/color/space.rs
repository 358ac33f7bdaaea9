//! Supported RGB color spaces
//!
//! [`RgbSpace`] ties each space to its transfer function pair and its
//! RGB↔XYZ matrix pair. Conversions between non-adjacent spaces are
//! compositions through the XYZ hub; nothing here special-cases
//! multi-hop paths.

use crate::color::{LinearRgb, Rgb, Xyz};
use crate::color::white_point::{D50, D65, WhitePoint};
use crate::math::gamma;
use crate::math::matrix::{
    A98_TO_XYZ, DISPLAY_P3_TO_XYZ, Matrix3x3, PROPHOTO_TO_XYZ, REC2020_TO_XYZ, SRGB_TO_XYZ,
    XYZ_TO_A98, XYZ_TO_DISPLAY_P3, XYZ_TO_PROPHOTO, XYZ_TO_REC2020, XYZ_TO_SRGB,
};

/// An RGB color space with a defined transfer curve and XYZ matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RgbSpace {
    /// sRGB (IEC 61966-2-1), D65
    Srgb,
    /// Display P3: P3 primaries with the sRGB transfer curve, D65
    DisplayP3,
    /// A98 RGB (Adobe RGB 1998), D65
    A98,
    /// ProPhoto RGB (ROMM), D50
    ProPhoto,
    /// Rec.2020 (ITU-R BT.2020-2), D65
    Rec2020,
}

impl RgbSpace {
    /// All supported spaces, for sweep-style tests and callers that
    /// enumerate conversions
    pub const ALL: [RgbSpace; 5] = [
        RgbSpace::Srgb,
        RgbSpace::DisplayP3,
        RgbSpace::A98,
        RgbSpace::ProPhoto,
        RgbSpace::Rec2020,
    ];

    /// The linear-RGB → XYZ matrix for this space
    pub const fn to_xyz_matrix(&self) -> &'static Matrix3x3 {
        match self {
            RgbSpace::Srgb => &SRGB_TO_XYZ,
            RgbSpace::DisplayP3 => &DISPLAY_P3_TO_XYZ,
            RgbSpace::A98 => &A98_TO_XYZ,
            RgbSpace::ProPhoto => &PROPHOTO_TO_XYZ,
            RgbSpace::Rec2020 => &REC2020_TO_XYZ,
        }
    }

    /// The XYZ → linear-RGB matrix for this space
    pub const fn from_xyz_matrix(&self) -> &'static Matrix3x3 {
        match self {
            RgbSpace::Srgb => &XYZ_TO_SRGB,
            RgbSpace::DisplayP3 => &XYZ_TO_DISPLAY_P3,
            RgbSpace::A98 => &XYZ_TO_A98,
            RgbSpace::ProPhoto => &XYZ_TO_PROPHOTO,
            RgbSpace::Rec2020 => &XYZ_TO_REC2020,
        }
    }

    /// The reference white the matrices of this space are relative to
    pub const fn white_point(&self) -> &'static WhitePoint {
        match self {
            RgbSpace::ProPhoto => &D50,
            _ => &D65,
        }
    }

    /// Decode one gamma-encoded channel to linear light
    #[inline]
    pub fn decode_channel(&self, c: f64) -> f64 {
        match self {
            RgbSpace::Srgb | RgbSpace::DisplayP3 => gamma::srgb_gamma_decode(c),
            RgbSpace::A98 => gamma::a98_gamma_decode(c),
            RgbSpace::ProPhoto => gamma::prophoto_gamma_decode(c),
            RgbSpace::Rec2020 => gamma::rec2020_gamma_decode(c),
        }
    }

    /// Encode one linear-light channel to gamma
    #[inline]
    pub fn encode_channel(&self, c: f64) -> f64 {
        match self {
            RgbSpace::Srgb | RgbSpace::DisplayP3 => gamma::srgb_gamma_encode(c),
            RgbSpace::A98 => gamma::a98_gamma_encode(c),
            RgbSpace::ProPhoto => gamma::prophoto_gamma_encode(c),
            RgbSpace::Rec2020 => gamma::rec2020_gamma_encode(c),
        }
    }

    /// Decode a gamma-encoded color to linear light
    #[inline]
    pub fn decode(&self, rgb: Rgb) -> LinearRgb {
        LinearRgb::new(
            self.decode_channel(rgb.r),
            self.decode_channel(rgb.g),
            self.decode_channel(rgb.b),
        )
    }

    /// Encode a linear-light color to gamma
    #[inline]
    pub fn encode(&self, rgb: LinearRgb) -> Rgb {
        Rgb::new(
            self.encode_channel(rgb.r),
            self.encode_channel(rgb.g),
            self.encode_channel(rgb.b),
        )
    }

    /// Convert linear-light RGB in this space to XYZ
    ///
    /// The result is relative to [`Self::white_point`]. No range
    /// validation: out-of-[0,1] channels represent out-of-gamut colors
    /// and pass through unchanged.
    #[inline]
    pub fn to_xyz(&self, rgb: LinearRgb) -> Xyz {
        Xyz::from_array(self.to_xyz_matrix().multiply_vec(rgb.to_array()))
    }

    /// Convert XYZ to linear-light RGB in this space
    #[inline]
    pub fn from_xyz(&self, xyz: Xyz) -> LinearRgb {
        LinearRgb::from_array(self.from_xyz_matrix().multiply_vec(xyz.to_array()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xyz_roundtrip_all_spaces() {
        let samples = [
            LinearRgb::new(0.0, 0.0, 0.0),
            LinearRgb::new(1.0, 1.0, 1.0),
            LinearRgb::new(0.25, 0.5, 0.75),
            LinearRgb::new(0.9, 0.05, 0.3),
            // out of gamut, must still round-trip
            LinearRgb::new(-0.2, 1.3, 0.5),
        ];
        for space in RgbSpace::ALL {
            for rgb in samples {
                let roundtrip = space.from_xyz(space.to_xyz(rgb));
                assert!(
                    roundtrip.approx_eq(&rgb, 1e-9),
                    "{space:?} XYZ roundtrip failed: {rgb:?} vs {roundtrip:?}"
                );
            }
        }
    }

    #[test]
    fn test_white_maps_to_reference_white() {
        for space in RgbSpace::ALL {
            let white = space.to_xyz(LinearRgb::new(1.0, 1.0, 1.0));
            let expected = space.white_point().xyz;
            assert!(
                white.approx_eq(&expected, 1e-3),
                "{space:?} white: {white:?} vs {expected:?}"
            );
        }
    }

    #[test]
    fn test_p3_shares_srgb_curve() {
        for c in [0.0, 0.002, 0.04045, 0.3, 1.0, -0.4] {
            assert_eq!(
                RgbSpace::Srgb.decode_channel(c),
                RgbSpace::DisplayP3.decode_channel(c)
            );
            assert_eq!(
                RgbSpace::Srgb.encode_channel(c),
                RgbSpace::DisplayP3.encode_channel(c)
            );
        }
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let rgb = Rgb::new(0.1, 0.6, 0.95);
        for space in RgbSpace::ALL {
            let roundtrip = space.encode(space.decode(rgb));
            assert!(
                roundtrip.approx_eq(&rgb, 1e-9),
                "{space:?} transfer roundtrip failed"
            );
        }
    }
}
