//! Gamma and transfer function operations
//!
//! One encode/decode pair per RGB space. Every function here is a pure
//! scalar map, continuous at its documented breakpoint, and
//! odd-symmetric around zero via [`spow`] so that out-of-gamut negative
//! channels pass through arithmetically instead of collapsing to NaN.
//!
//! Display P3 shares the sRGB pair exactly (same constants), so no
//! separate functions exist for it.

use crate::math::scalar::{sign, spow};

/// sRGB gamma decode (encoded → linear)
///
/// IEC 61966-2-1 transfer function, sign-extended. Also used for
/// Display P3.
#[inline]
pub fn srgb_gamma_decode(c: f64) -> f64 {
    let abs = c.abs();
    if abs <= 0.04045 {
        c / 12.92
    } else {
        sign(c) * ((abs + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB gamma encode (linear → encoded)
///
/// Inverse of [`srgb_gamma_decode`]; breakpoint at 0.0031308.
#[inline]
pub fn srgb_gamma_encode(c: f64) -> f64 {
    let abs = c.abs();
    if abs > 0.0031308 {
        sign(c) * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
    } else {
        12.92 * c
    }
}

/// A98 RGB gamma decode (encoded → linear)
///
/// Pure power law with the exact rational exponent 563/256 from the
/// Adobe RGB (1998) specification. No linear segment.
#[inline]
pub fn a98_gamma_decode(c: f64) -> f64 {
    spow(c, 563.0 / 256.0)
}

/// A98 RGB gamma encode (linear → encoded)
#[inline]
pub fn a98_gamma_encode(c: f64) -> f64 {
    spow(c, 256.0 / 563.0)
}

/// ProPhoto decode breakpoint (encoded side), 16/512
const PROPHOTO_ET2: f64 = 16.0 / 512.0;
/// ProPhoto encode breakpoint (linear side), 1/512
const PROPHOTO_ET: f64 = 1.0 / 512.0;

/// ProPhoto RGB gamma decode (encoded → linear)
#[inline]
pub fn prophoto_gamma_decode(c: f64) -> f64 {
    let abs = c.abs();
    if abs <= PROPHOTO_ET2 {
        c / 16.0
    } else {
        spow(c, 1.8)
    }
}

/// ProPhoto RGB gamma encode (linear → encoded)
#[inline]
pub fn prophoto_gamma_encode(c: f64) -> f64 {
    let abs = c.abs();
    if abs >= PROPHOTO_ET {
        spow(c, 1.0 / 1.8)
    } else {
        16.0 * c
    }
}

/// Rec.2020 curve gain constant α
const REC2020_ALPHA: f64 = 1.09929682680944;
/// Rec.2020 curve breakpoint constant β
const REC2020_BETA: f64 = 0.018053968510807;

/// Rec.2020 gamma decode (encoded → linear)
///
/// ITU-R BT.2020-2 reference OETF inverse, with the high-precision
/// α/β constants rather than the rounded 1.099/0.018 pair so the
/// curve is continuous at the breakpoint.
#[inline]
pub fn rec2020_gamma_decode(c: f64) -> f64 {
    let abs = c.abs();
    if abs < REC2020_BETA * 4.5 {
        c / 4.5
    } else {
        sign(c) * ((abs + REC2020_ALPHA - 1.0) / REC2020_ALPHA).powf(1.0 / 0.45)
    }
}

/// Rec.2020 gamma encode (linear → encoded)
#[inline]
pub fn rec2020_gamma_encode(c: f64) -> f64 {
    let abs = c.abs();
    if abs > REC2020_BETA {
        sign(c) * (REC2020_ALPHA * abs.powf(0.45) - (REC2020_ALPHA - 1.0))
    } else {
        4.5 * c
    }
}
