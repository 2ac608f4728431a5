//! Two-component single-precision vector
//!
//! Used for texture coordinates and planar projections during simplification.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::error::{index_out_of_range, VectorResult};
use crate::format::{self, ComponentFormat};
use crate::math_utils::{self, hash_bits};
use crate::vector_double::Vector2d;
use crate::vector_int::Vector2i;
use crate::vector_traits::FloatVector;

/// A 2D vector with f32 components
///
/// Equality is approximate: two vectors are equal when the squared distance
/// between them is below [`Vector2f::EPSILON`]. Use [`Vector2f::exact_eq`] for
/// bit-level comparison.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2f {
    pub x: f32,
    pub y: f32,
}

impl Vector2f {
    /// Normalization and equality tolerance.
    pub const EPSILON: f32 = math_utils::EPSILON;
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub const ONE: Self = Self { x: 1.0, y: 1.0 };
    pub const UNIT_X: Self = Self { x: 1.0, y: 0.0 };
    pub const UNIT_Y: Self = Self { x: 0.0, y: 1.0 };

    /// Creates a new 2D float vector
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a vector with all components set to the same value
    #[inline]
    pub const fn splat(value: f32) -> Self {
        Self { x: value, y: value }
    }

    /// Narrows a double-precision vector. Components round to the nearest
    /// `f32`; values beyond the `f32` range become infinite.
    #[inline]
    pub fn from_double(v: Vector2d) -> Self {
        Self::new(v.x as f32, v.y as f32)
    }

    /// Converts an integer vector. Magnitudes above 2^24 may round.
    #[inline]
    pub fn from_int(v: Vector2i) -> Self {
        Self::new(v.x as f32, v.y as f32)
    }

    /// Widens to double precision. Always exact.
    #[inline]
    pub fn to_double(self) -> Vector2d {
        Vector2d::new(f64::from(self.x), f64::from(self.y))
    }

    /// Assigns both components.
    #[inline]
    pub fn set(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    #[inline]
    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    fn component_ref(&self, index: usize) -> VectorResult<&f32> {
        match index {
            0 => Ok(&self.x),
            1 => Ok(&self.y),
            _ => Err(index_out_of_range(index, 2)),
        }
    }

    /// Returns component `index` (0 = x, 1 = y).
    #[inline]
    pub fn component(&self, index: usize) -> VectorResult<f32> {
        self.component_ref(index).copied()
    }

    pub fn component_mut(&mut self, index: usize) -> VectorResult<&mut f32> {
        match index {
            0 => Ok(&mut self.x),
            1 => Ok(&mut self.y),
            _ => Err(index_out_of_range(index, 2)),
        }
    }

    pub fn set_component(&mut self, index: usize, value: f32) -> VectorResult<()> {
        *self.component_mut(index)? = value;
        Ok(())
    }

    #[inline]
    pub fn add_vector(&self, other: &Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    #[inline]
    pub fn sub_vector(&self, other: &Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    #[inline]
    pub fn negated(&self) -> Self {
        Self::new(-self.x, -self.y)
    }

    #[inline]
    pub fn mul_scalar(&self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }

    /// Divides every component by `scalar`. Division by zero is not checked.
    #[inline]
    pub fn div_scalar(&self, scalar: f32) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }

    /// Component-wise product of two vectors.
    #[inline]
    pub fn scaled(a: &Self, b: &Self) -> Self {
        Self::new(a.x * b.x, a.y * b.y)
    }

    /// Multiplies this vector component-wise by `by`.
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
        self.x * self.x + self.y * self.y
    }

    /// Returns a unit-length copy, or [`Vector2f::ZERO`] when the magnitude
    /// is at or below [`Vector2f::EPSILON`].
    #[inline]
    pub fn normalized(&self) -> Self {
        // Measured in f64 so that large finite vectors do not overflow to inf.
        let mag = math_utils::wide_magnitude(&self.to_array());
        if mag > f64::from(Self::EPSILON) {
            Self::new(
                (f64::from(self.x) / mag) as f32,
                (f64::from(self.y) / mag) as f32,
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

    /// Clips each component into `[min, max]`.
    #[inline]
    pub fn clamped(&self, min: f32, max: f32) -> Self {
        Self::new(
            math_utils::clamp(self.x, min, max),
            math_utils::clamp(self.y, min, max),
        )
    }

    #[inline]
    pub fn clamp(&mut self, min: f32, max: f32) {
        *self = self.clamped(min, max);
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Linear interpolation between two vectors. `t` is not clamped.
    #[inline]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self::new(
            math_utils::lerp(self.x, other.x, t),
            math_utils::lerp(self.y, other.y, t),
        )
    }

    /// Returns the component-wise minimum of two vectors
    #[inline]
    pub fn min(&self, other: &Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Returns the component-wise maximum of two vectors
    #[inline]
    pub fn max(&self, other: &Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    #[inline]
    pub fn abs(&self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn distance_squared(&self, other: &Self) -> f32 {
        self.sub_vector(other).magnitude_squared()
    }

    #[inline]
    pub fn distance(&self, other: &Self) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Squared distance below [`Vector2f::EPSILON`]. This is what `==` uses.
    #[inline]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.distance_squared(other) < Self::EPSILON
    }

    /// Squared distance below a caller-supplied tolerance.
    #[inline]
    pub fn approx_eq_within(&self, other: &Self, tolerance: f32) -> bool {
        self.distance_squared(other) < tolerance
    }

    /// Component-wise IEEE equality.
    #[inline]
    pub fn exact_eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
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

impl FloatVector for Vector2f {
    const DIM: usize = 2;
    const ZERO: Self = Vector2f::ZERO;

    #[inline]
    fn component(&self, index: usize) -> VectorResult<f32> {
        Vector2f::component(self, index)
    }

    #[inline]
    fn dot(&self, other: &Self) -> f32 {
        Vector2f::dot(self, other)
    }

    #[inline]
    fn sub_vector(&self, other: &Self) -> Self {
        Vector2f::sub_vector(self, other)
    }

    #[inline]
    fn normalized(&self) -> Self {
        Vector2f::normalized(self)
    }

    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Vector2f::lerp(self, other, t)
    }

    #[inline]
    fn magnitude_squared(&self) -> f32 {
        Vector2f::magnitude_squared(self)
    }

    #[inline]
    fn magnitude(&self) -> f32 {
        Vector2f::magnitude(self)
    }

    #[inline]
    fn approx_eq(&self, other: &Self) -> bool {
        Vector2f::approx_eq(self, other)
    }
}

impl PartialEq for Vector2f {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl Hash for Vector2f {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(hash_bits(self.x) ^ (hash_bits(self.y) << 2));
    }
}

impl fmt::Display for Vector2f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format::display_components(f, &self.to_array())
    }
}

impl From<[f32; 2]> for Vector2f {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2f> for [f32; 2] {
    #[inline]
    fn from(v: Vector2f) -> Self {
        v.to_array()
    }
}

impl From<Vector2i> for Vector2f {
    #[inline]
    fn from(v: Vector2i) -> Self {
        Self::from_int(v)
    }
}

impl From<Vector2f> for Vector2d {
    #[inline]
    fn from(v: Vector2f) -> Self {
        v.to_double()
    }
}

impl Add for Vector2f {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        self.add_vector(&other)
    }
}

impl AddAssign for Vector2f {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = self.add_vector(&other);
    }
}

impl Sub for Vector2f {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        self.sub_vector(&other)
    }
}

impl SubAssign for Vector2f {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = self.sub_vector(&other);
    }
}

impl Neg for Vector2f {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.negated()
    }
}

impl Mul<f32> for Vector2f {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        self.mul_scalar(scalar)
    }
}

impl Mul<Vector2f> for f32 {
    type Output = Vector2f;
    #[inline]
    fn mul(self, v: Vector2f) -> Vector2f {
        v.mul_scalar(self)
    }
}

impl Mul for Vector2f {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        Self::scaled(&self, &other)
    }
}

impl MulAssign<f32> for Vector2f {
    #[inline]
    fn mul_assign(&mut self, scalar: f32) {
        *self = self.mul_scalar(scalar);
    }
}

impl Div<f32> for Vector2f {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f32) -> Self {
        self.div_scalar(scalar)
    }
}

impl DivAssign<f32> for Vector2f {
    #[inline]
    fn div_assign(&mut self, scalar: f32) {
        *self = self.div_scalar(scalar);
    }
}

impl Index<usize> for Vector2f {
    type Output = f32;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match self.component_ref(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl IndexMut<usize> for Vector2f {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.component_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}
