//! CSS boundary layer
//!
//! Formatting and clamping, not color math: scales the internal
//! turn-fraction hue unit to CSS degrees and [0, 1] fractions to
//! percentages or 0-255 channels, rounds to nearest integer, clamps
//! into declared ranges, and parses/serializes hex strings.
//!
//! `to_hex` emits standard lowercase `0-9a-f`. (The historical
//! serializer this replaces mapped digit values onto an ASCII range
//! starting at `'a'`, which is not hex at all; that is a deliberate
//! deviation.)

use crate::color::{Hsl, Hwb, Rgb};
use crate::error::{Error, Result};
use crate::math::scalar::{clamp01, fmod};

/// A CSS `rgb()` color: gamma-encoded channels as 0-255 integers
///
/// A serialization-only form of [`Rgb`]; all color math happens on the
/// floating-point types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct CssRgb {
    /// Red channel (0 to 255)
    pub r: u8,
    /// Green channel (0 to 255)
    pub g: u8,
    /// Blue channel (0 to 255)
    pub b: u8,
}

/// A CSS `hsl()` color: degree hue and integer percentages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CssHsl {
    /// Hue in degrees [0, 360)
    pub h: u16,
    /// Saturation as a percentage (0 to 100)
    pub s: u8,
    /// Lightness as a percentage (0 to 100)
    pub l: u8,
}

/// A CSS `hwb()` color: degree hue and integer percentages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CssHwb {
    /// Hue in degrees [0, 360)
    pub h: u16,
    /// Whiteness as a percentage (0 to 100)
    pub w: u8,
    /// Blackness as a percentage (0 to 100)
    pub b: u8,
}

/// Scale a [0, 1] fraction to a rounded, clamped integer percentage
#[inline]
fn to_percent(c: f64) -> u8 {
    (c * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Scale an internal turn-fraction hue to whole CSS degrees [0, 360)
#[inline]
fn to_degrees(h: f64) -> u16 {
    // rounding 359.6° would otherwise land on the excluded 360
    (fmod(h * 30.0, 360.0).round() as u16) % 360
}

impl CssRgb {
    /// Create a new CSS RGB color
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Quantize a gamma-encoded [`Rgb`] to 0-255 channels
    ///
    /// Out-of-gamut channels are clamped here, at the serialization
    /// boundary, and nowhere earlier.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let f = |c: f64| (c * 255.0).round().clamp(0.0, 255.0) as u8;
        Self {
            r: f(rgb.r),
            g: f(rgb.g),
            b: f(rgb.b),
        }
    }

    /// Widen back to the floating-point form
    pub fn to_rgb(&self) -> Rgb {
        Rgb::new(
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        )
    }

    /// Parse a 3- or 6-digit hex color, with or without a leading `#`
    ///
    /// A 3-digit channel `c` expands to `c + 16·c` (so `f` becomes
    /// `0xff`). Fails on any non-hex digit or other length.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();

        let nibble = |c: u8| -> Result<u8> {
            match c {
                b'0'..=b'9' => Ok(c - b'0'),
                b'a'..=b'f' => Ok(c - b'a' + 10),
                b'A'..=b'F' => Ok(c - b'A' + 10),
                _ => Err(Error::InvalidHexDigit(c as char)),
            }
        };

        match bytes.len() {
            3 => {
                let f = |c: u8| -> Result<u8> {
                    let n = nibble(c)?;
                    Ok(n + n * 16)
                };
                Ok(Self::new(f(bytes[0])?, f(bytes[1])?, f(bytes[2])?))
            }
            6 => {
                let f = |hi: u8, lo: u8| -> Result<u8> { Ok(nibble(hi)? * 16 + nibble(lo)?) };
                Ok(Self::new(
                    f(bytes[0], bytes[1])?,
                    f(bytes[2], bytes[3])?,
                    f(bytes[4], bytes[5])?,
                ))
            }
            len => Err(Error::InvalidHexLength(len)),
        }
    }

    /// Serialize as a lowercase 6-character hex string, no `#`
    pub fn to_hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl CssHsl {
    /// Create a new CSS HSL color
    #[inline]
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }

    /// Quantize an internal [`Hsl`] into CSS units
    pub fn from_hsl(hsl: Hsl) -> Self {
        Self {
            h: to_degrees(hsl.h),
            s: to_percent(hsl.s),
            l: to_percent(hsl.l),
        }
    }

    /// Widen to the internal turn-fraction form
    pub fn to_hsl(&self) -> Hsl {
        Hsl::new(
            fmod(self.h as f64 / 30.0, 12.0),
            clamp01(self.s as f64 / 100.0),
            clamp01(self.l as f64 / 100.0),
        )
    }
}

impl CssHwb {
    /// Create a new CSS HWB color
    #[inline]
    pub const fn new(h: u16, w: u8, b: u8) -> Self {
        Self { h, w, b }
    }

    /// Quantize an internal [`Hwb`] into CSS units
    pub fn from_hwb(hwb: Hwb) -> Self {
        Self {
            h: to_degrees(hwb.h),
            w: to_percent(hwb.w),
            b: to_percent(hwb.b),
        }
    }

    /// Widen to the internal turn-fraction form
    pub fn to_hwb(&self) -> Hwb {
        Hwb::new(
            fmod(self.h as f64 / 30.0, 12.0),
            clamp01(self.w as f64 / 100.0),
            clamp01(self.b as f64 / 100.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_short() {
        assert_eq!(CssRgb::from_hex("#fff").unwrap(), CssRgb::new(255, 255, 255));
        assert_eq!(CssRgb::from_hex("f00").unwrap(), CssRgb::new(255, 0, 0));
        assert_eq!(CssRgb::from_hex("#1a8").unwrap(), CssRgb::new(0x11, 0xaa, 0x88));
    }

    #[test]
    fn test_from_hex_long() {
        assert_eq!(CssRgb::from_hex("#000000").unwrap(), CssRgb::new(0, 0, 0));
        assert_eq!(
            CssRgb::from_hex("1280fe").unwrap(),
            CssRgb::new(0x12, 0x80, 0xfe)
        );
        assert_eq!(
            CssRgb::from_hex("#ABCDEF").unwrap(),
            CssRgb::new(0xab, 0xcd, 0xef)
        );
    }

    #[test]
    fn test_from_hex_bad_length() {
        assert_eq!(
            CssRgb::from_hex("#12"),
            Err(Error::InvalidHexLength(2))
        );
        assert_eq!(
            CssRgb::from_hex("#1234"),
            Err(Error::InvalidHexLength(4))
        );
        assert_eq!(CssRgb::from_hex(""), Err(Error::InvalidHexLength(0)));
    }

    #[test]
    fn test_from_hex_bad_digit() {
        assert_eq!(CssRgb::from_hex("zzz"), Err(Error::InvalidHexDigit('z')));
        assert_eq!(
            CssRgb::from_hex("#12g45f"),
            Err(Error::InvalidHexDigit('g'))
        );
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(CssRgb::new(255, 255, 255).to_hex(), "ffffff");
        assert_eq!(CssRgb::new(0, 0, 0).to_hex(), "000000");
        assert_eq!(CssRgb::new(0x12, 0x80, 0xfe).to_hex(), "1280fe");
    }

    #[test]
    fn test_hex_roundtrip() {
        for hex in ["000000", "ffffff", "1280fe", "a1b2c3"] {
            assert_eq!(CssRgb::from_hex(hex).unwrap().to_hex(), hex);
        }
    }

    #[test]
    fn test_rgb_scaling() {
        let css = CssRgb::from_rgb(Rgb::new(1.0, 0.5, 0.0));
        assert_eq!(css, CssRgb::new(255, 128, 0));

        // out-of-gamut clamps at this boundary only
        let css = CssRgb::from_rgb(Rgb::new(1.5, -0.2, 0.5));
        assert_eq!(css.r, 255);
        assert_eq!(css.g, 0);

        let rgb = CssRgb::new(255, 0, 51).to_rgb();
        assert!(rgb.approx_eq(&Rgb::new(1.0, 0.0, 0.2), 1e-9));
    }

    #[test]
    fn test_hsl_scaling() {
        // 240° blue → 8 turn-units
        let hsl = CssHsl::new(240, 100, 50).to_hsl();
        assert!((hsl.h - 8.0).abs() < 1e-9);
        assert!((hsl.s - 1.0).abs() < 1e-9);
        assert!((hsl.l - 0.5).abs() < 1e-9);

        let css = CssHsl::from_hsl(hsl);
        assert_eq!(css, CssHsl::new(240, 100, 50));
    }

    #[test]
    fn test_hue_rounding_stays_in_range() {
        // 11.995 turn-units = 359.85°, which rounds to 360 and must wrap
        let css = CssHsl::from_hsl(Hsl::new(11.995, 0.5, 0.5));
        assert_eq!(css.h, 0);
    }

    #[test]
    fn test_hwb_scaling() {
        let hwb = CssHwb::new(120, 20, 30).to_hwb();
        assert!((hwb.h - 4.0).abs() < 1e-9);
        assert!((hwb.w - 0.2).abs() < 1e-9);
        assert!((hwb.b - 0.3).abs() < 1e-9);

        assert_eq!(CssHwb::from_hwb(hwb), CssHwb::new(120, 20, 30));
    }
}
