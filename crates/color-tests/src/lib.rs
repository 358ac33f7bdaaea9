//! # color-tests
//!
//! Cross-implementation test harness for oxcolor.
//!
//! This crate provides:
//! - Sample color generation (grids, gamut boundaries, seeded random)
//! - Round-trip sweeps over every supported conversion pair
//! - Parity tests against the `palette` crate where the models coincide
//!
//! ## What parity covers
//!
//! `palette` implements the same sRGB transfer curve, the same
//! HSL/HWB derivations and the same CIE Lab law, so those compare
//! directly (with loose tolerances where white-point constants differ
//! in the 5th decimal). `palette`'s Oklab applies the reference
//! cube-root LMS nonlinearity, while this engine uses the composed
//! linear matrix hub, so Oklab has no external reference here and is
//! covered by round-trip and matrix-inverse properties instead.

pub mod samples;

pub use samples::{gamut_boundary_samples, random_samples, rgb_grid};
