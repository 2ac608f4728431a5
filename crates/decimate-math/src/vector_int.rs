//! Integer-component vectors
//!
//! These only exist as conversion sources for the float vectors (grid
//! coordinates, quantized positions). Conversion to `f32` is widening and is
//! available through `From`.

use std::ops::{Add, Mul, Sub};

/// A 2D vector with integer components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2i {
    pub x: i32,
    pub y: i32,
}

/// A 3D vector with integer components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3i {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// A 4D vector with integer components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector4i {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub w: i32,
}

impl Vector2i {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn splat(value: i32) -> Self {
        Self { x: value, y: value }
    }

    #[inline]
    pub fn dot(self, other: Self) -> i32 {
        self.x * other.x + self.y * other.y
    }
}

impl Vector3i {
    pub const ZERO: Self = Self { x: 0, y: 0, z: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn splat(value: i32) -> Self {
        Self { x: value, y: value, z: value }
    }

    #[inline]
    pub fn dot(self, other: Self) -> i32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl Vector4i {
    pub const ZERO: Self = Self { x: 0, y: 0, z: 0, w: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32, z: i32, w: i32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn splat(value: i32) -> Self {
        Self { x: value, y: value, z: value, w: value }
    }

    #[inline]
    pub fn dot(self, other: Self) -> i32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }
}

impl Add for Vector2i {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2i {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<i32> for Vector2i {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: i32) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl Add for Vector3i {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vector3i {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<i32> for Vector3i {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: i32) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Add for Vector4i {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl Sub for Vector4i {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

impl Mul<i32> for Vector4i {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: i32) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar, self.w * scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_vectors() {
        let a = Vector2i::new(1, 2);
        let b = Vector2i::new(3, 4);

        assert_eq!(a + b, Vector2i::new(4, 6));
        assert_eq!(b - a, Vector2i::new(2, 2));
        assert_eq!(a * 3, Vector2i::new(3, 6));
        assert_eq!(a.dot(b), 11);

        let a3 = Vector3i::new(1, 2, 3);
        assert_eq!(a3 - a3, Vector3i::ZERO);
        assert_eq!(a3.dot(Vector3i::splat(1)), 6);

        let a4 = Vector4i::new(1, 2, 3, 4);
        assert_eq!(a4 + Vector4i::splat(1), Vector4i::new(2, 3, 4, 5));
        assert_eq!(a4.dot(a4), 30);
    }
}
