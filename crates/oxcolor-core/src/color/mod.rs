//! Color space types and conversions
//!
//! This module provides:
//! - CIE XYZ, the hub space all matrix conversions route through
//! - CIELAB / LCH (D50 hub) and Oklab / Oklch (D65, via LMS)
//! - Gamma-encoded and linear-light RGB with per-space conversions
//! - HSL and HWB, derived from RGB without the hub
//! - White point definitions

pub mod hsl;
pub mod hwb;
pub mod lab;
pub mod oklab;
pub mod rgb;
pub mod space;
pub mod white_point;
pub mod xyz;

pub use hsl::Hsl;
pub use hwb::Hwb;
pub use lab::{Lab, Lch};
pub use oklab::{Oklab, Oklch};
pub use rgb::{LinearRgb, Rgb};
pub use space::RgbSpace;
pub use white_point::{D50, D65, WhitePoint};
pub use xyz::Xyz;
