//! RGB color primitives
//!
//! Two nominal types keep the encodings apart: [`Rgb`] is
//! gamma-encoded, [`LinearRgb`] is linear-light. The type system, not a
//! naming convention, prevents feeding an encoded triple into a matrix
//! that expects linear light. Which RGB *space* a value belongs to is
//! still the caller's context, tracked by which [`RgbSpace`] functions
//! it passes through.
//!
//! Both types are `repr(C)` and [`bytemuck::Pod`] so a renderer can
//! upload slices of them directly as vertex attributes.
//!
//! [`RgbSpace`]: crate::color::RgbSpace

/// A gamma-encoded RGB color, channels nominally in [0, 1]
///
/// Out-of-gamut values (channels outside [0, 1], including negative
/// ones) are legal and flow through every conversion unchanged;
/// call [`Rgb::clamp`] if clipping is wanted.
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Rgb {
    /// Red channel (0.0 to 1.0 nominal)
    pub r: f64,
    /// Green channel (0.0 to 1.0 nominal)
    pub g: f64,
    /// Blue channel (0.0 to 1.0 nominal)
    pub b: f64,
}

/// A linear-light RGB color, channels nominally in [0, 1]
///
/// Produced by decoding an [`Rgb`] through a space's transfer function,
/// or by converting XYZ through a space's matrix.
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct LinearRgb {
    /// Red channel (0.0 to 1.0 nominal)
    pub r: f64,
    /// Green channel (0.0 to 1.0 nominal)
    pub g: f64,
    /// Blue channel (0.0 to 1.0 nominal)
    pub b: f64,
}

impl Rgb {
    /// Create a new gamma-encoded RGB color
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create RGB from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            r: arr[0],
            g: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Clamp all channels to [0, 1]
    #[inline]
    pub fn clamp(&self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    /// Check if all channels are in [0, 1]
    #[inline]
    pub fn is_in_gamut(&self) -> bool {
        self.r >= 0.0
            && self.r <= 1.0
            && self.g >= 0.0
            && self.g <= 1.0
            && self.b >= 0.0
            && self.b <= 1.0
    }

    /// Check if approximately equal to another RGB color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }

    /// Black
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// White
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Red primary
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);

    /// Green primary
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);

    /// Blue primary
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);
}

impl LinearRgb {
    /// Create a new linear-light RGB color
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create linear RGB from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            r: arr[0],
            g: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Check if approximately equal to another linear RGB color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

impl From<[f64; 3]> for Rgb {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Rgb> for [f64; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.to_array()
    }
}

impl From<[f64; 3]> for LinearRgb {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<LinearRgb> for [f64; 3] {
    fn from(rgb: LinearRgb) -> Self {
        rgb.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        let rgb = Rgb::new(1.5, -0.5, 0.5);
        let clamped = rgb.clamp();
        assert_eq!(clamped.r, 1.0);
        assert_eq!(clamped.g, 0.0);
        assert_eq!(clamped.b, 0.5);
    }

    #[test]
    fn test_in_gamut() {
        assert!(Rgb::WHITE.is_in_gamut());
        assert!(Rgb::BLACK.is_in_gamut());
        assert!(!Rgb::new(1.5, 0.0, 0.0).is_in_gamut());
        assert!(!Rgb::new(0.0, -0.1, 0.0).is_in_gamut());
    }

    #[test]
    fn test_pod_layout() {
        // The renderer consumes these as raw vertex data
        let colors = [Rgb::RED, Rgb::GREEN];
        let bytes: &[u8] = bytemuck::cast_slice(&colors);
        assert_eq!(bytes.len(), 2 * 3 * size_of::<f64>());

        let floats: &[f64] = bytemuck::cast_slice(&colors);
        assert_eq!(floats, &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_array_conversion() {
        let arr = [0.1, 0.2, 0.3];
        let rgb = LinearRgb::from_array(arr);
        assert_eq!(rgb.to_array(), arr);
        let rgb2: LinearRgb = arr.into();
        assert_eq!(rgb, rgb2);
    }
}
