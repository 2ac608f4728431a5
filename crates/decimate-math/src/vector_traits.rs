//! Capability shared by the fixed-size float vectors
//!
//! Code that works on "any of the vector types" (distance checks, generic
//! equality, normalization passes over attribute buffers) is written against
//! [`FloatVector`] instead of a concrete arity.

use std::fmt::Debug;

use crate::error::VectorResult;
use crate::math_utils::EPSILON;

pub trait FloatVector: Copy + Debug + PartialEq {
    /// Number of components.
    const DIM: usize;

    /// Vector with every component set to zero.
    const ZERO: Self;

    /// Returns component `index`, or an error if it is out of range.
    fn component(&self, index: usize) -> VectorResult<f32>;

    /// Sum of pairwise component products.
    fn dot(&self, other: &Self) -> f32;

    /// Component-wise `self - other`.
    fn sub_vector(&self, other: &Self) -> Self;

    /// Unit-length copy, or [`Self::ZERO`] when the magnitude is at or
    /// below [`EPSILON`].
    fn normalized(&self) -> Self;

    /// `self + (other - self) * t`, with `t` unclamped.
    fn lerp(&self, other: &Self, t: f32) -> Self;

    fn magnitude_squared(&self) -> f32;

    /// Euclidean length, finite for every finite vector.
    fn magnitude(&self) -> f32;

    /// True when the squared distance to `other` is below [`EPSILON`].
    fn approx_eq(&self, other: &Self) -> bool;
}

/// Squared Euclidean distance between two vectors of the same arity.
#[inline]
pub fn distance_squared<V: FloatVector>(a: &V, b: &V) -> f32 {
    a.sub_vector(b).magnitude_squared()
}

/// Euclidean distance between two vectors of the same arity.
#[inline]
pub fn distance<V: FloatVector>(a: &V, b: &V) -> f32 {
    distance_squared(a, b).sqrt()
}

/// Approximate equality with a caller-supplied squared-distance tolerance.
#[inline]
pub fn approx_eq_within<V: FloatVector>(a: &V, b: &V, tolerance: f32) -> bool {
    distance_squared(a, b) < tolerance
}

/// Returns true if the vector normalizes to a unit vector rather than zero.
#[inline]
pub fn is_normalizable<V: FloatVector>(v: &V) -> bool {
    v.magnitude() > EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Vector2f, Vector3f, Vector4f};

    fn sum_of_components<V: FloatVector>(v: &V) -> f32 {
        (0..V::DIM).filter_map(|i| v.component(i).ok()).sum()
    }

    #[test]
    fn test_dimensions() {
        assert_eq!(Vector2f::DIM, 2);
        assert_eq!(Vector3f::DIM, 3);
        assert_eq!(Vector4f::DIM, 4);
    }

    #[test]
    fn test_generic_access() {
        assert_eq!(sum_of_components(&Vector2f::new(1.0, 2.0)), 3.0);
        assert_eq!(sum_of_components(&Vector3f::new(1.0, 2.0, 3.0)), 6.0);
        assert_eq!(sum_of_components(&Vector4f::new(1.0, 2.0, 3.0, 4.0)), 10.0);
        assert!(<Vector3f as FloatVector>::component(&Vector3f::ZERO, 3).is_err());
    }

    #[test]
    fn test_generic_distance() {
        let a = Vector3f::new(0.0, 0.0, 0.0);
        let b = Vector3f::new(2.0, 3.0, 6.0);
        assert_eq!(distance_squared(&a, &b), 49.0);
        assert_eq!(distance(&a, &b), 7.0);
    }

    #[test]
    fn test_generic_equality() {
        let a = Vector4f::new(1.0, 1.0, 1.0, 1.0);
        let b = Vector4f::new(1.0, 1.0, 1.0, 1.001);
        assert!(FloatVector::approx_eq(&a, &a));
        assert!(!FloatVector::approx_eq(&a, &b));
        assert!(approx_eq_within(&a, &b, 1e-4));
    }

    fn generic_magnitude<V: FloatVector>(v: &V) -> f32 {
        v.magnitude()
    }

    #[test]
    fn test_generic_magnitude_matches_concrete() {
        let large = Vector3f::new(1e20, 0.0, 0.0);
        assert_eq!(generic_magnitude(&large), large.magnitude());
        assert_eq!(generic_magnitude(&large), 1e20);
        assert_eq!(generic_magnitude(&Vector2f::new(3.0, 4.0)), 5.0);
        assert_eq!(FloatVector::magnitude_squared(&Vector4f::splat(1.0)), 4.0);
        assert!(is_normalizable(&large));
    }

    #[test]
    fn test_is_normalizable() {
        assert!(is_normalizable(&Vector2f::new(0.0, 1e-3)));
        assert!(!is_normalizable(&Vector2f::ZERO));
        assert!(!is_normalizable(&Vector2f::new(1e-11, 0.0)));
    }
}
