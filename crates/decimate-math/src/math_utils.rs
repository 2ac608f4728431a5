//! Scalar helpers shared by the vector types
//!
//! This module provides the tolerance constant that governs normalization and
//! approximate equality, the radian-to-degree factor, and generic clamp and
//! interpolation helpers.

use num_traits::Float;

/// Shared tolerance for all vector types.
///
/// A vector whose magnitude is at or below this value normalizes to zero, and
/// two vectors compare equal when the squared distance between them is below
/// it. The nearest `f32` is 9.99999944e-11.
pub const EPSILON: f32 = 1e-10;

/// Degrees per radian.
pub const RAD_TO_DEG: f32 = 180.0 / std::f32::consts::PI;

/// Clamps a value between a minimum and maximum
///
/// Values already in range are returned untouched. A NaN input is neither
/// below `min` nor above `max`, so it passes through unchanged.
///
/// # Examples
/// ```
/// use decimate_math::math_utils::clamp;
/// assert_eq!(clamp(5, 0, 10), 5);
/// assert_eq!(clamp(-5, 0, 10), 0);
/// assert_eq!(clamp(15.5, 0.0, 10.0), 10.0);
/// ```
#[inline]
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Linear interpolation between two values
///
/// # Arguments
/// * `a` - Start value
/// * `b` - End value
/// * `t` - Interpolation parameter (0.0 = a, 1.0 = b); not clamped
///
/// # Examples
/// ```
/// use decimate_math::math_utils::lerp;
/// assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
/// assert_eq!(lerp(0.0, 10.0, 1.5), 15.0);
/// ```
#[inline]
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Euclidean length of `components`, accumulated in `f64`.
///
/// The square of any finite `f32` fits in an `f64`, so a vector such as
/// `(1e20, 0, 0)` measures `1e20` rather than `inf`.
#[inline]
pub(crate) fn wide_magnitude(components: &[f32]) -> f64 {
    components
        .iter()
        .map(|&c| f64::from(c) * f64::from(c))
        .sum::<f64>()
        .sqrt()
}

/// Bit pattern used when hashing a vector component.
///
/// `-0.0` is folded onto `0.0` and every NaN onto one canonical NaN, so values
/// that compare equal under the vector equality also hash alike.
#[inline]
pub(crate) fn hash_bits(value: f32) -> u32 {
    if value == 0.0 {
        0
    } else if value.is_nan() {
        f32::NAN.to_bits()
    } else {
        value.to_bits()
    }
}
