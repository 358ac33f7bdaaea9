//! Scalar helpers shared by the conversion kernels
//!
//! Small, total functions over f64. Hue arithmetic in particular relies
//! on [`fmod`] because the `%` operator truncates toward zero and would
//! leave negative hues negative.

/// Equivalent to `n % m`, except that negative results are wrapped
/// back into `[0, m)`.
#[inline]
pub fn fmod(n: f64, m: f64) -> f64 {
    ((n % m) + m) % m
}

/// Constrain a value to the range `[0, 1]`
#[inline]
pub fn clamp01(n: f64) -> f64 {
    n.clamp(0.0, 1.0)
}

/// The sign of the given number
///
/// Zero maps to +1, which keeps `spow(0.0, k)` at exactly 0 for the
/// transfer curves; `f64::signum` would behave the same for +0 but
/// this form also treats -0 as positive.
#[inline]
pub fn sign(n: f64) -> f64 {
    if n < 0.0 { -1.0 } else { 1.0 }
}

/// Sign-extended power: `sign(c) * |c|^p`
///
/// The transfer curves are odd-symmetric around zero so that
/// out-of-gamut negative channels survive a round trip. A plain
/// `c.powf(p)` returns NaN for negative bases with fractional
/// exponents, so the sign is split off first.
#[inline]
pub fn spow(c: f64, p: f64) -> f64 {
    sign(c) * c.abs().powf(p)
}
