//! Three-component single-precision vector
//!
//! Positions, normals and tangents. On top of the shared vector operations this
//! type provides the cross product, the angle between two directions and
//! Gram-Schmidt orthonormalization of a normal/tangent pair.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::error::{index_out_of_range, VectorResult};
use crate::format::{self, ComponentFormat};
use crate::math_utils::{self, hash_bits, RAD_TO_DEG};
use crate::vector2::Vector2f;
use crate::vector_double::Vector3d;
use crate::vector_int::Vector3i;
use crate::vector_traits::FloatVector;

/// A 3D vector with f32 components
///
/// Equality is approximate: two vectors are equal when the squared distance
/// between them is below [`Vector3f::EPSILON`].
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3f {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3f {
    /// Normalization and equality tolerance.
    pub const EPSILON: f32 = math_utils::EPSILON;
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };
    pub const ONE: Self = Self { x: 1.0, y: 1.0, z: 1.0 };
    pub const UNIT_X: Self = Self { x: 1.0, y: 0.0, z: 0.0 };
    pub const UNIT_Y: Self = Self { x: 0.0, y: 1.0, z: 0.0 };
    pub const UNIT_Z: Self = Self { x: 0.0, y: 0.0, z: 1.0 };

    /// Creates a new 3D float vector
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value
    #[inline]
    pub const fn splat(value: f32) -> Self {
        Self { x: value, y: value, z: value }
    }

    /// Creates a vector from a 2D vector and z component
    #[inline]
    pub const fn from_xy(v: Vector2f, z: f32) -> Self {
        Self { x: v.x, y: v.y, z }
    }

    /// Returns the xy components as a 2D vector
    #[inline]
    pub const fn xy(self) -> Vector2f {
        Vector2f::new(self.x, self.y)
    }

    /// Narrows a double-precision vector to `f32`.
    #[inline]
    pub fn from_double(v: Vector3d) -> Self {
        Self::new(v.x as f32, v.y as f32, v.z as f32)
    }

    #[inline]
    pub fn from_int(v: Vector3i) -> Self {
        Self::new(v.x as f32, v.y as f32, v.z as f32)
    }

    /// Widens to double precision. Always exact.
    #[inline]
    pub fn to_double(self) -> Vector3d {
        Vector3d::new(f64::from(self.x), f64::from(self.y), f64::from(self.z))
    }

    #[inline]
    pub fn set(&mut self, x: f32, y: f32, z: f32) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    fn component_ref(&self, index: usize) -> VectorResult<&f32> {
        match index {
            0 => Ok(&self.x),
            1 => Ok(&self.y),
            2 => Ok(&self.z),
            _ => Err(index_out_of_range(index, 3)),
        }
    }

    /// Returns component `index` (0 = x, 1 = y, 2 = z).
    #[inline]
    pub fn component(&self, index: usize) -> VectorResult<f32> {
        self.component_ref(index).copied()
    }

    pub fn component_mut(&mut self, index: usize) -> VectorResult<&mut f32> {
        match index {
            0 => Ok(&mut self.x),
            1 => Ok(&mut self.y),
            2 => Ok(&mut self.z),
            _ => Err(index_out_of_range(index, 3)),
        }
    }

    pub fn set_component(&mut self, index: usize, value: f32) -> VectorResult<()> {
        *self.component_mut(index)? = value;
        Ok(())
    }

    #[inline]
    pub fn add_vector(&self, other: &Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    #[inline]
    pub fn sub_vector(&self, other: &Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    #[inline]
    pub fn negated(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }

    #[inline]
    pub fn mul_scalar(&self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    /// Divides every component by `scalar`. Division by zero is not checked.
    #[inline]
    pub fn div_scalar(&self, scalar: f32) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }

    /// Component-wise product of two vectors.
    #[inline]
    pub fn scaled(a: &Self, b: &Self) -> Self {
        Self::new(a.x * b.x, a.y * b.y, a.z * b.z)
    }

    #[inline]
    pub fn scale(&mut self, by: &Self) {
        *self = Self::scaled(self, by);
    }

    #[inline]
    pub fn magnitude(&self) -> f32 {
        math_utils::wide_magnitude(&self.to_array()) as f32
    }

    #[inline]
    pub fn magnitude_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns a unit-length copy, or [`Vector3f::ZERO`] when the magnitude
    /// is at or below [`Vector3f::EPSILON`].
    #[inline]
    pub fn normalized(&self) -> Self {
        // Measured in f64 so that large finite vectors do not overflow to inf.
        let mag = math_utils::wide_magnitude(&self.to_array());
        if mag > f64::from(Self::EPSILON) {
            Self::new(
                (f64::from(self.x) / mag) as f32,
                (f64::from(self.y) / mag) as f32,
                (f64::from(self.z) / mag) as f32,
            )
        } else {
            Self::ZERO
        }
    }

    /// Normalizes the vector in place
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    #[inline]
    pub fn clamped(&self, min: f32, max: f32) -> Self {
        Self::new(
            math_utils::clamp(self.x, min, max),
            math_utils::clamp(self.y, min, max),
            math_utils::clamp(self.z, min, max),
        )
    }

    /// Clips each component into `[min, max]` in place.
    #[inline]
    pub fn clamp(&mut self, min: f32, max: f32) {
        *self = self.clamped(min, max);
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product `self × rhs` (right-handed).
    #[inline]
    pub fn cross(&self, rhs: &Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Angle between two directions in degrees, in `[0, 180]`.
    ///
    /// Both inputs are normalized first. If either is degenerate it becomes
    /// the zero vector, the dot product is 0 and the result is 90.
    pub fn angle(from: &Self, to: &Self) -> f32 {
        let from = from.normalized();
        let to = to.normalized();
        if from.exact_eq(&Self::ZERO) || to.exact_eq(&Self::ZERO) {
            log::trace!("angle between {:?} and {:?} with a degenerate input", from, to);
        }
        let cos = math_utils::clamp(from.dot(&to), -1.0, 1.0);
        cos.acos() * RAD_TO_DEG
    }

    /// Component of `self` along `unit_normal`, which must already be unit
    /// length (or zero).
    #[inline]
    pub fn project_on_normal(&self, unit_normal: &Self) -> Self {
        unit_normal.mul_scalar(self.dot(unit_normal))
    }

    /// Makes `normal` unit length and `tangent` a unit vector perpendicular
    /// to it (one Gram-Schmidt step).
    ///
    /// A degenerate normal becomes zero, in which case the tangent is only
    /// normalized. A tangent parallel to the normal becomes zero.
    pub fn ortho_normalize(normal: &mut Self, tangent: &mut Self) {
        normal.normalize();
        let projection = tangent.project_on_normal(normal);
        *tangent = tangent.sub_vector(&projection);
        tangent.normalize();

        if normal.exact_eq(&Self::ZERO) || tangent.exact_eq(&Self::ZERO) {
            log::trace!(
                "ortho_normalize collapsed to zero: normal={:?} tangent={:?}",
                normal,
                tangent
            );
        }
    }

    #[inline]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self::new(
            math_utils::lerp(self.x, other.x, t),
            math_utils::lerp(self.y, other.y, t),
            math_utils::lerp(self.z, other.z, t),
        )
    }

    #[inline]
    pub fn min(&self, other: &Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    #[inline]
    pub fn max(&self, other: &Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    #[inline]
    pub fn abs(&self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    #[inline]
    pub fn distance_squared(&self, other: &Self) -> f32 {
        self.sub_vector(other).magnitude_squared()
    }

    #[inline]
    pub fn distance(&self, other: &Self) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Squared distance below [`Vector3f::EPSILON`]. This is what `==` uses.
    #[inline]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.distance_squared(other) < Self::EPSILON
    }

    #[inline]
    pub fn approx_eq_within(&self, other: &Self, tolerance: f32) -> bool {
        self.distance_squared(other) < tolerance
    }

    #[inline]
    pub fn exact_eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }

    pub fn format_with(&self, format: &ComponentFormat) -> String {
        format::components_to_string(&self.to_array(), format)
    }

    /// Formats with a specifier such as `"F3"` or `"E2"`.
    pub fn to_string_with(&self, spec: &str) -> VectorResult<String> {
        let format: ComponentFormat = spec.parse()?;
        Ok(self.format_with(&format))
    }
}

impl FloatVector for Vector3f {
    const DIM: usize = 3;
    const ZERO: Self = Vector3f::ZERO;

    #[inline]
    fn component(&self, index: usize) -> VectorResult<f32> {
        Vector3f::component(self, index)
    }

    #[inline]
    fn dot(&self, other: &Self) -> f32 {
        Vector3f::dot(self, other)
    }

    #[inline]
    fn sub_vector(&self, other: &Self) -> Self {
        Vector3f::sub_vector(self, other)
    }

    #[inline]
    fn normalized(&self) -> Self {
        Vector3f::normalized(self)
    }

    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Vector3f::lerp(self, other, t)
    }

    #[inline]
    fn magnitude_squared(&self) -> f32 {
        Vector3f::magnitude_squared(self)
    }

    #[inline]
    fn magnitude(&self) -> f32 {
        Vector3f::magnitude(self)
    }

    #[inline]
    fn approx_eq(&self, other: &Self) -> bool {
        Vector3f::approx_eq(self, other)
    }
}

impl PartialEq for Vector3f {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl Hash for Vector3f {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(hash_bits(self.x) ^ (hash_bits(self.y) << 2) ^ (hash_bits(self.z) >> 2));
    }
}

impl fmt::Display for Vector3f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format::display_components(f, &self.to_array())
    }
}

impl From<[f32; 3]> for Vector3f {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3f> for [f32; 3] {
    #[inline]
    fn from(v: Vector3f) -> Self {
        v.to_array()
    }
}

impl From<Vector3i> for Vector3f {
    #[inline]
    fn from(v: Vector3i) -> Self {
        Self::from_int(v)
    }
}

impl From<Vector3f> for Vector3d {
    #[inline]
    fn from(v: Vector3f) -> Self {
        v.to_double()
    }
}

// Operator sugar over the named methods
impl Add for Vector3f {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        self.add_vector(&other)
    }
}

impl AddAssign for Vector3f {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = self.add_vector(&other);
    }
}

impl Sub for Vector3f {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        self.sub_vector(&other)
    }
}

impl SubAssign for Vector3f {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = self.sub_vector(&other);
    }
}

impl Neg for Vector3f {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.negated()
    }
}

impl Mul<f32> for Vector3f {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        self.mul_scalar(scalar)
    }
}

impl Mul<Vector3f> for f32 {
    type Output = Vector3f;
    #[inline]
    fn mul(self, v: Vector3f) -> Vector3f {
        v.mul_scalar(self)
    }
}

impl Mul for Vector3f {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        Self::scaled(&self, &other)
    }
}

impl MulAssign<f32> for Vector3f {
    #[inline]
    fn mul_assign(&mut self, scalar: f32) {
        *self = self.mul_scalar(scalar);
    }
}

impl Div<f32> for Vector3f {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f32) -> Self {
        self.div_scalar(scalar)
    }
}

impl DivAssign<f32> for Vector3f {
    #[inline]
    fn div_assign(&mut self, scalar: f32) {
        *self = self.div_scalar(scalar);
    }
}

impl Index<usize> for Vector3f {
    type Output = f32;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match self.component_ref(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl IndexMut<usize> for Vector3f {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.component_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VectorError;

    #[test]
    fn test_vector3f_creation() {
        let v = Vector3f::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);

        let v_splat = Vector3f::splat(5.0);
        assert!(v_splat.exact_eq(&Vector3f::new(5.0, 5.0, 5.0)));

        let v_xy = Vector3f::from_xy(Vector2f::new(1.0, 2.0), 3.0);
        assert!(v_xy.exact_eq(&v));
        assert!(v.xy().exact_eq(&Vector2f::new(1.0, 2.0)));
    }

    #[test]
    fn test_vector3f_operations() {
        let a = Vector3f::new(1.0, 2.0, 3.0);
        let b = Vector3f::new(4.0, 5.0, 6.0);

        assert!((a + b).exact_eq(&Vector3f::new(5.0, 7.0, 9.0)));
        assert!((b - a).exact_eq(&Vector3f::new(3.0, 3.0, 3.0)));
        assert!((-a).exact_eq(&Vector3f::new(-1.0, -2.0, -3.0)));
        assert!((0.5 * b).exact_eq(&Vector3f::new(2.0, 2.5, 3.0)));
        assert!((b / 2.0).exact_eq(&Vector3f::new(2.0, 2.5, 3.0)));

        let mut c = a;
        c.scale(&b);
        assert!(c.exact_eq(&Vector3f::new(4.0, 10.0, 18.0)));
    }

    #[test]
    fn test_cross() {
        assert!(Vector3f::UNIT_X
            .cross(&Vector3f::UNIT_Y)
            .exact_eq(&Vector3f::UNIT_Z));
        assert!(Vector3f::UNIT_Y
            .cross(&Vector3f::UNIT_X)
            .exact_eq(&Vector3f::new(0.0, 0.0, -1.0)));

        let a = Vector3f::new(1.0, 2.0, 3.0);
        let b = Vector3f::new(4.0, 5.0, 6.0);
        let cross = a.cross(&b);
        assert!(cross.exact_eq(&Vector3f::new(-3.0, 6.0, -3.0)));
        assert_eq!(cross.dot(&a), 0.0);
        assert_eq!(cross.dot(&b), 0.0);
    }

    #[test]
    fn test_vector3f_math() {
        let v = Vector3f::new(1.0, 2.0, 2.0);

        assert_eq!(v.dot(&v), 9.0);
        assert_eq!(v.magnitude(), 3.0);
        assert_eq!(v.magnitude_squared(), 9.0);

        let normalized = v.normalized();
        assert!((normalized.magnitude() - 1.0).abs() < 1e-6);
        assert_eq!(normalized, Vector3f::new(1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0));

        assert!(Vector3f::ZERO.normalized().exact_eq(&Vector3f::ZERO));
    }

    #[test]
    fn test_angle() {
        assert!((Vector3f::angle(&Vector3f::UNIT_X, &Vector3f::UNIT_Y) - 90.0).abs() < 1e-4);
        assert_eq!(Vector3f::angle(&Vector3f::UNIT_X, &(Vector3f::UNIT_X * 5.0)), 0.0);
        assert!((Vector3f::angle(&Vector3f::UNIT_X, &-Vector3f::UNIT_X) - 180.0).abs() < 1e-4);

        let diagonal = Vector3f::new(1.0, 1.0, 0.0);
        assert!((Vector3f::angle(&Vector3f::UNIT_X, &diagonal) - 45.0).abs() < 1e-4);
    }

    #[test]
    fn test_angle_is_never_nan() {
        let v = Vector3f::new(0.3, 0.7, 1.1);
        let angle = Vector3f::angle(&v, &(v * 3.0));
        assert!(!angle.is_nan());
        assert!(angle < 0.1);

        let degenerate = Vector3f::angle(&Vector3f::ZERO, &v);
        assert!((degenerate - 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_ortho_normalize() {
        let mut normal = Vector3f::new(0.0, 0.0, 2.0);
        let mut tangent = Vector3f::new(1.0, 0.0, 1.0);
        Vector3f::ortho_normalize(&mut normal, &mut tangent);

        assert!(normal.exact_eq(&Vector3f::UNIT_Z));
        assert!(tangent.exact_eq(&Vector3f::UNIT_X));
    }

    #[test]
    fn test_ortho_normalize_general() {
        let mut normal = Vector3f::new(1.0, 2.0, 3.0);
        let mut tangent = Vector3f::new(-2.0, 0.5, 4.0);
        Vector3f::ortho_normalize(&mut normal, &mut tangent);

        assert!((normal.magnitude() - 1.0).abs() < 1e-5);
        assert!((tangent.magnitude() - 1.0).abs() < 1e-5);
        assert!(normal.dot(&tangent).abs() < 1e-5);
    }

    #[test]
    fn test_ortho_normalize_degenerate() {
        let mut normal = Vector3f::ZERO;
        let mut tangent = Vector3f::new(0.0, 3.0, 0.0);
        Vector3f::ortho_normalize(&mut normal, &mut tangent);
        assert!(normal.exact_eq(&Vector3f::ZERO));
        assert!(tangent.exact_eq(&Vector3f::UNIT_Y));

        let mut normal = Vector3f::new(0.0, 0.0, 1.0);
        let mut tangent = Vector3f::new(0.0, 0.0, -4.0);
        Vector3f::ortho_normalize(&mut normal, &mut tangent);
        assert!(tangent.exact_eq(&Vector3f::ZERO));
    }

    #[test]
    fn test_clamp_and_lerp() {
        let v = Vector3f::new(-5.0, 0.5, 5.0);
        assert!(v.clamped(0.0, 1.0).exact_eq(&Vector3f::new(0.0, 0.5, 1.0)));

        let a = Vector3f::new(1.0, 2.0, 3.0);
        let b = Vector3f::new(3.0, 2.0, 1.0);
        assert!(a.lerp(&b, 0.5).exact_eq(&Vector3f::splat(2.0)));
        assert!(a.lerp(&b, 0.0).exact_eq(&a));
        assert!(a.lerp(&b, 1.0).exact_eq(&b));
    }

    #[test]
    fn test_vector_indexing() {
        let mut v3 = Vector3f::new(1.0, 2.0, 3.0);
        assert_eq!(v3[2], 3.0);

        v3[2] = 4.0;
        assert_eq!(v3.z, 4.0);

        assert_eq!(
            v3.component(3),
            Err(VectorError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    #[should_panic(expected = "out of range for a 3-component vector")]
    fn test_index_operator_panics() {
        let mut v = Vector3f::ZERO;
        v[3] = 1.0;
    }

    #[test]
    fn test_conversions() {
        let v = Vector3f::from(Vector3i::new(1, -2, 3));
        assert!(v.exact_eq(&Vector3f::new(1.0, -2.0, 3.0)));

        let wide: Vector3d = Vector3f::new(0.1, 0.2, 0.3).into();
        assert_eq!(wide.x, f64::from(0.1_f32));
        assert!(Vector3f::from_double(wide).exact_eq(&Vector3f::new(0.1, 0.2, 0.3)));
    }

    #[test]
    fn test_display() {
        let v = Vector3f::new(1.0, -2.0, 0.1);
        assert_eq!(v.to_string(), "(1.0, -2.0, 0.1)");
        assert_eq!(format!("{:.2}", v), "(1.00, -2.00, 0.10)");
        assert_eq!(v.to_string_with("G").unwrap(), "(1, -2, 0.1)");
    }
}
