//! # oxcolor - CSS color space conversion engine
//!
//! Bidirectional, numerically precise transforms between the CSS Color 4
//! color spaces: sRGB, Display P3, A98 RGB, ProPhoto RGB, Rec.2020 (each
//! in gamma-encoded and linear-light form), CIE XYZ, Lab, LCH, Oklab,
//! Oklch, HSL and HWB, plus the CSS-facing integer encodings and hex
//! strings.
//!
//! ## Goals
//!
//! - **Precise**: f64 throughout, exact rational constants, round trips
//!   within 1e-9
//! - **Total**: out-of-gamut channels, negative chroma and wild hues
//!   flow through arithmetically; only hex parsing can fail
//! - **Typed**: gamma-encoded [`Rgb`] and [`LinearRgb`] are distinct
//!   types, so encodings cannot be mixed by accident
//!
//! ## Quick Start
//!
//! ```
//! use oxcolor_core::{CssRgb, Oklab, RgbSpace};
//!
//! // hex → sRGB → XYZ → Oklch, one hop at a time
//! let css = CssRgb::from_hex("#1280fe").unwrap();
//! let linear = RgbSpace::Srgb.decode(css.to_rgb());
//! let xyz = RgbSpace::Srgb.to_xyz(linear);
//! let oklch = Oklab::from_xyz(xyz).to_oklch();
//!
//! // and back
//! let rgb = RgbSpace::Srgb.encode(RgbSpace::Srgb.from_xyz(oklch.to_oklab().to_xyz()));
//! assert_eq!(CssRgb::from_rgb(rgb).to_hex(), "1280fe");
//! ```
//!
//! Conversions between non-adjacent spaces are compositions through the
//! XYZ hub as above; the engine does not special-case multi-hop paths.
//! Reference whites are a property of the conversion used: the Lab hub
//! is D50-relative, every RGB matrix except ProPhoto's is D65-relative.

pub mod color;
pub mod css;
pub mod error;
pub mod math;

pub use color::{
    D50, D65, Hsl, Hwb, Lab, Lch, LinearRgb, Oklab, Oklch, Rgb, RgbSpace, WhitePoint, Xyz,
};
pub use css::{CssHsl, CssHwb, CssRgb};
pub use error::{Error, Result};
pub use math::Matrix3x3;

/// Version of oxcolor
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
