//! Mathematical operations for color conversion
//!
//! This module provides the foundational math used throughout oxcolor:
//! - 3x3 matrix operations and the RGB↔XYZ space constants
//! - Per-space gamma transfer function pairs
//! - Scalar helpers (positive modulo, sign-extended powers)

pub mod gamma;
pub mod matrix;
pub mod scalar;

pub use matrix::Matrix3x3;
pub use scalar::{clamp01, fmod, sign};
