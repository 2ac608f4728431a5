//! Four-component single-precision vector
//!
//! Homogeneous coordinates, tangents with handedness and vertex colors. Only
//! arithmetic and metric operations are defined; there is no cross product or
//! angle in four dimensions here.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::error::{index_out_of_range, VectorResult};
use crate::format::{self, ComponentFormat};
use crate::math_utils::{self, hash_bits};
use crate::vector3::Vector3f;
use crate::vector_double::Vector4d;
use crate::vector_int::Vector4i;
use crate::vector_traits::FloatVector;

/// A 4D vector with f32 components
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector4f {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vector4f {
    /// Normalization and equality tolerance.
    pub const EPSILON: f32 = math_utils::EPSILON;
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 0.0 };
    pub const ONE: Self = Self { x: 1.0, y: 1.0, z: 1.0, w: 1.0 };
    pub const UNIT_X: Self = Self { x: 1.0, y: 0.0, z: 0.0, w: 0.0 };
    pub const UNIT_Y: Self = Self { x: 0.0, y: 1.0, z: 0.0, w: 0.0 };
    pub const UNIT_Z: Self = Self { x: 0.0, y: 0.0, z: 1.0, w: 0.0 };
    pub const UNIT_W: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    /// Creates a new 4D float vector
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a vector with all components set to the same value
    #[inline]
    pub const fn splat(value: f32) -> Self {
        Self { x: value, y: value, z: value, w: value }
    }

    /// Creates a 4D vector from a 3D vector and w component
    #[inline]
    pub const fn from_xyz(v: Vector3f, w: f32) -> Self {
        Self { x: v.x, y: v.y, z: v.z, w }
    }

    /// Returns the xyz components as a 3D vector
    #[inline]
    pub const fn xyz(self) -> Vector3f {
        Vector3f::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn from_double(v: Vector4d) -> Self {
        Self::new(v.x as f32, v.y as f32, v.z as f32, v.w as f32)
    }

    #[inline]
    pub fn from_int(v: Vector4i) -> Self {
        Self::new(v.x as f32, v.y as f32, v.z as f32, v.w as f32)
    }

    #[inline]
    pub fn to_double(self) -> Vector4d {
        Vector4d::new(
            f64::from(self.x),
            f64::from(self.y),
            f64::from(self.z),
            f64::from(self.w),
        )
    }

    #[inline]
    pub fn set(&mut self, x: f32, y: f32, z: f32, w: f32) {
        *self = Self::new(x, y, z, w);
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    fn component_ref(&self, index: usize) -> VectorResult<&f32> {
        match index {
            0 => Ok(&self.x),
            1 => Ok(&self.y),
            2 => Ok(&self.z),
            3 => Ok(&self.w),
            _ => Err(index_out_of_range(index, 4)),
        }
    }

    #[inline]
    pub fn component(&self, index: usize) -> VectorResult<f32> {
        self.component_ref(index).copied()
    }

    pub fn component_mut(&mut self, index: usize) -> VectorResult<&mut f32> {
        match index {
            0 => Ok(&mut self.x),
            1 => Ok(&mut self.y),
            2 => Ok(&mut self.z),
            3 => Ok(&mut self.w),
            _ => Err(index_out_of_range(index, 4)),
        }
    }

    pub fn set_component(&mut self, index: usize, value: f32) -> VectorResult<()> {
        *self.component_mut(index)? = value;
        Ok(())
    }

    #[inline]
    pub fn add_vector(&self, other: &Self) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }

    #[inline]
    pub fn sub_vector(&self, other: &Self) -> Self {
        Self::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }

    #[inline]
    pub fn negated(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }

    #[inline]
    pub fn mul_scalar(&self, scalar: f32) -> Self {
        Self::new(
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
            self.w * scalar,
        )
    }

    #[inline]
    pub fn div_scalar(&self, scalar: f32) -> Self {
        Self::new(
            self.x / scalar,
            self.y / scalar,
            self.z / scalar,
            self.w / scalar,
        )
    }

    #[inline]
    pub fn scaled(a: &Self, b: &Self) -> Self {
        Self::new(a.x * b.x, a.y * b.y, a.z * b.z, a.w * b.w)
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
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Returns a unit-length copy, or [`Vector4f::ZERO`] when the magnitude
    /// is at or below [`Vector4f::EPSILON`].
    #[inline]
    pub fn normalized(&self) -> Self {
        // Measured in f64 so that large finite vectors do not overflow to inf.
        let mag = math_utils::wide_magnitude(&self.to_array());
        if mag > f64::from(Self::EPSILON) {
            Self::new(
                (f64::from(self.x) / mag) as f32,
                (f64::from(self.y) / mag) as f32,
                (f64::from(self.z) / mag) as f32,
                (f64::from(self.w) / mag) as f32,
            )
        } else {
            Self::ZERO
        }
    }

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
            math_utils::clamp(self.w, min, max),
        )
    }

    #[inline]
    pub fn clamp(&mut self, min: f32, max: f32) {
        *self = self.clamped(min, max);
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[inline]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self::new(
            math_utils::lerp(self.x, other.x, t),
            math_utils::lerp(self.y, other.y, t),
            math_utils::lerp(self.z, other.z, t),
            math_utils::lerp(self.w, other.w, t),
        )
    }

    #[inline]
    pub fn min(&self, other: &Self) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
            self.w.min(other.w),
        )
    }

    #[inline]
    pub fn max(&self, other: &Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
            self.w.max(other.w),
        )
    }

    #[inline]
    pub fn abs(&self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs(), self.w.abs())
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }

    #[inline]
    pub fn distance_squared(&self, other: &Self) -> f32 {
        self.sub_vector(other).magnitude_squared()
    }

    #[inline]
    pub fn distance(&self, other: &Self) -> f32 {
        self.distance_squared(other).sqrt()
    }

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
        self.x == other.x && self.y == other.y && self.z == other.z && self.w == other.w
    }

    pub fn format_with(&self, format: &ComponentFormat) -> String {
        format::components_to_string(&self.to_array(), format)
    }

    pub fn to_string_with(&self, spec: &str) -> VectorResult<String> {
        let format: ComponentFormat = spec.parse()?;
        Ok(self.format_with(&format))
    }
}

impl FloatVector for Vector4f {
    const DIM: usize = 4;
    const ZERO: Self = Vector4f::ZERO;

    #[inline]
    fn component(&self, index: usize) -> VectorResult<f32> {
        Vector4f::component(self, index)
    }

    #[inline]
    fn dot(&self, other: &Self) -> f32 {
        Vector4f::dot(self, other)
    }

    #[inline]
    fn sub_vector(&self, other: &Self) -> Self {
        Vector4f::sub_vector(self, other)
    }

    #[inline]
    fn normalized(&self) -> Self {
        Vector4f::normalized(self)
    }

    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Vector4f::lerp(self, other, t)
    }

    #[inline]
    fn magnitude_squared(&self) -> f32 {
        Vector4f::magnitude_squared(self)
    }

    #[inline]
    fn magnitude(&self) -> f32 {
        Vector4f::magnitude(self)
    }

    #[inline]
    fn approx_eq(&self, other: &Self) -> bool {
        Vector4f::approx_eq(self, other)
    }
}

impl PartialEq for Vector4f {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl Hash for Vector4f {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let combined = hash_bits(self.x)
            ^ (hash_bits(self.y) << 2)
            ^ (hash_bits(self.z) >> 2)
            ^ (hash_bits(self.w) >> 1);
        state.write_u32(combined);
    }
}

impl fmt::Display for Vector4f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format::display_components(f, &self.to_array())
    }
}

impl From<[f32; 4]> for Vector4f {
    #[inline]
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<Vector4f> for [f32; 4] {
    #[inline]
    fn from(v: Vector4f) -> Self {
        v.to_array()
    }
}

impl From<Vector4i> for Vector4f {
    #[inline]
    fn from(v: Vector4i) -> Self {
        Self::from_int(v)
    }
}

impl From<Vector4f> for Vector4d {
    #[inline]
    fn from(v: Vector4f) -> Self {
        v.to_double()
    }
}

impl Add for Vector4f {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        self.add_vector(&other)
    }
}

impl AddAssign for Vector4f {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = self.add_vector(&other);
    }
}

impl Sub for Vector4f {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        self.sub_vector(&other)
    }
}

impl SubAssign for Vector4f {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = self.sub_vector(&other);
    }
}

impl Neg for Vector4f {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.negated()
    }
}

impl Mul<f32> for Vector4f {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        self.mul_scalar(scalar)
    }
}

impl Mul<Vector4f> for f32 {
    type Output = Vector4f;
    #[inline]
    fn mul(self, v: Vector4f) -> Vector4f {
        v.mul_scalar(self)
    }
}

impl Mul for Vector4f {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        Self::scaled(&self, &other)
    }
}

impl MulAssign<f32> for Vector4f {
    #[inline]
    fn mul_assign(&mut self, scalar: f32) {
        *self = self.mul_scalar(scalar);
    }
}

impl Div<f32> for Vector4f {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f32) -> Self {
        self.div_scalar(scalar)
    }
}

impl DivAssign<f32> for Vector4f {
    #[inline]
    fn div_assign(&mut self, scalar: f32) {
        *self = self.div_scalar(scalar);
    }
}

impl Index<usize> for Vector4f {
    type Output = f32;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match self.component_ref(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl IndexMut<usize> for Vector4f {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.component_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}
