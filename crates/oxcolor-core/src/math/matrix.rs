//! 3x3 Matrix operations for color space transforms
//!
//! These matrices carry the RGB↔XYZ conversions for every supported
//! space. All operations use f64 for precision. The space constants are
//! written as exact rational fractions where CSS Color 4 defines them
//! that way; the division happens in const context, so nothing is
//! rounded before it is stored.

use std::ops::{Index, Mul};

/// A 3x3 matrix for color space transformations
///
/// Stored in row-major order: m[row][col]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3x3 {
    /// Matrix elements in row-major order
    pub m: [[f64; 3]; 3],
}

impl Matrix3x3 {
    /// Create a new matrix from row-major elements
    #[inline]
    pub const fn new(m: [[f64; 3]; 3]) -> Self {
        Self { m }
    }

    /// Create an identity matrix
    #[inline]
    pub const fn identity() -> Self {
        Self {
            m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Create a zero matrix
    #[inline]
    pub const fn zero() -> Self {
        Self {
            m: [[0.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
        }
    }

    /// Multiply this matrix by a 3-element vector
    ///
    /// Returns M × v
    #[inline]
    pub const fn multiply_vec(&self, v: [f64; 3]) -> [f64; 3] {
        [
            self.m[0][0] * v[0] + self.m[0][1] * v[1] + self.m[0][2] * v[2],
            self.m[1][0] * v[0] + self.m[1][1] * v[1] + self.m[1][2] * v[2],
            self.m[2][0] * v[0] + self.m[2][1] * v[1] + self.m[2][2] * v[2],
        ]
    }

    /// Multiply this matrix by another matrix
    ///
    /// Returns self × other. Row-major accumulation in a fixed order,
    /// so composed constants fold to the same bits on every build.
    /// `const` so matrix products can be precomputed at compile time.
    #[inline]
    pub const fn multiply(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        let mut i = 0;
        while i < 3 {
            let mut j = 0;
            while j < 3 {
                result.m[i][j] = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j];
                j += 1;
            }
            i += 1;
        }
        result
    }

    /// Check if this matrix is approximately equal to another
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        for i in 0..3 {
            for j in 0..3 {
                if (self.m[i][j] - other.m[i][j]).abs() > epsilon {
                    return false;
                }
            }
        }
        true
    }

    /// Check if this is approximately an identity matrix
    pub fn is_identity(&self, epsilon: f64) -> bool {
        self.approx_eq(&Self::identity(), epsilon)
    }
}

impl Default for Matrix3x3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Index<usize> for Matrix3x3 {
    type Output = [f64; 3];

    fn index(&self, row: usize) -> &Self::Output {
        &self.m[row]
    }
}

impl Mul for Matrix3x3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<[f64; 3]> for Matrix3x3 {
    type Output = [f64; 3];

    fn mul(self, rhs: [f64; 3]) -> Self::Output {
        self.multiply_vec(rhs)
    }
}

// ============================================================================
// Standard color space matrices (D65 white point, unless noted)
// ============================================================================

/// Linear sRGB to XYZ matrix (D65 white point)
///
/// Rational form from CSS Color 4, derived from IEC 61966-2-1:1999
/// chromaticities.
pub const SRGB_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [506752.0 / 1228815.0, 87881.0 / 245763.0, 12673.0 / 70218.0],
    [87098.0 / 409605.0, 175762.0 / 245763.0, 12673.0 / 175545.0],
    [7918.0 / 409605.0, 87881.0 / 737289.0, 1001167.0 / 1053270.0],
]);

/// XYZ to linear sRGB matrix (D65 white point)
///
/// Exact inverse of [`SRGB_TO_XYZ`]
pub const XYZ_TO_SRGB: Matrix3x3 = Matrix3x3::new([
    [12831.0 / 3959.0, -329.0 / 214.0, -1974.0 / 3959.0],
    [-851781.0 / 878810.0, 1648619.0 / 878810.0, 36519.0 / 878810.0],
    [705.0 / 12673.0, -2585.0 / 12673.0, 705.0 / 667.0],
]);

/// Linear Display P3 to XYZ matrix (D65 white point)
pub const DISPLAY_P3_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [608311.0 / 1250200.0, 189793.0 / 714400.0, 198249.0 / 1000160.0],
    [35783.0 / 156275.0, 247089.0 / 357200.0, 198249.0 / 2500400.0],
    [0.0, 32229.0 / 714400.0, 5220557.0 / 5000800.0],
]);

/// XYZ to linear Display P3 matrix (D65 white point)
pub const XYZ_TO_DISPLAY_P3: Matrix3x3 = Matrix3x3::new([
    [446124.0 / 178915.0, -333277.0 / 357830.0, -72051.0 / 178915.0],
    [-14852.0 / 17905.0, 63121.0 / 35810.0, 423.0 / 17905.0],
    [11844.0 / 330415.0, -50337.0 / 660830.0, 316169.0 / 330415.0],
]);

/// Linear A98 RGB (Adobe RGB 1998) to XYZ matrix (D65 white point)
pub const A98_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [573536.0 / 994567.0, 263643.0 / 1420810.0, 187206.0 / 994567.0],
    [591459.0 / 1989134.0, 6239551.0 / 9945670.0, 374412.0 / 4972835.0],
    [53769.0 / 1989134.0, 351524.0 / 4972835.0, 4929758.0 / 4972835.0],
]);

/// XYZ to linear A98 RGB matrix (D65 white point)
pub const XYZ_TO_A98: Matrix3x3 = Matrix3x3::new([
    [1829569.0 / 896150.0, -506331.0 / 896150.0, -308931.0 / 896150.0],
    [-851781.0 / 878810.0, 1648619.0 / 878810.0, 36519.0 / 878810.0],
    [16779.0 / 1248040.0, -147721.0 / 1248040.0, 1266979.0 / 1248040.0],
]);

/// Linear ProPhoto RGB to XYZ matrix (D50 white point)
///
/// ProPhoto is the one supported space whose matrices are D50-relative;
/// its XYZ output feeds the Lab hub without adaptation.
pub const PROPHOTO_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.79776664490064230, 0.13518129740053308, 0.03134773412839220],
    [0.28807482881940130, 0.71183523424187300, 0.00008993693872564],
    [0.00000000000000000, 0.00000000000000000, 0.82510460251046020],
]);

/// XYZ to linear ProPhoto RGB matrix (D50 white point)
pub const XYZ_TO_PROPHOTO: Matrix3x3 = Matrix3x3::new([
    [1.34578688164715830, -0.25557208737979464, -0.05110186497554526],
    [-0.54463070512490190, 1.50824774284514680, 0.02052744743642139],
    [0.00000000000000000, 0.00000000000000000, 1.21196754563894520],
]);

/// Linear Rec.2020 to XYZ matrix (D65 white point)
pub const REC2020_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [63426534.0 / 99577255.0, 20160776.0 / 139408157.0, 47086771.0 / 278816314.0],
    [26158966.0 / 99577255.0, 472592308.0 / 697040785.0, 8267143.0 / 139408157.0],
    [0.0, 19567812.0 / 697040785.0, 295819943.0 / 278816314.0],
]);

/// XYZ to linear Rec.2020 matrix (D65 white point)
pub const XYZ_TO_REC2020: Matrix3x3 = Matrix3x3::new([
    [30757411.0 / 17917100.0, -6372589.0 / 17917100.0, -4539589.0 / 17917100.0],
    [-19765991.0 / 29648200.0, 47925759.0 / 29648200.0, 467509.0 / 29648200.0],
    [792561.0 / 44930125.0, -1921689.0 / 44930125.0, 42328811.0 / 44930125.0],
]);
