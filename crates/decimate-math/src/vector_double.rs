//! Double-precision vectors
//!
//! Higher-precision storage for accumulations (quadric error sums, centroid
//! averaging). Converting these to the `f32` vectors narrows and is only
//! available through the explicit `from_double` constructors.

/// A 2D vector with f64 components
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2d {
    pub x: f64,
    pub y: f64,
}

/// A 3D vector with f64 components
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A 4D vector with f64 components
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector4d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Vector2d {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn splat(value: f64) -> Self {
        Self { x: value, y: value }
    }
}

impl Vector3d {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn splat(value: f64) -> Self {
        Self { x: value, y: value, z: value }
    }
}

impl Vector4d {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn splat(value: f64) -> Self {
        Self { x: value, y: value, z: value, w: value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction() {
        assert_eq!(Vector2d::splat(1.5), Vector2d::new(1.5, 1.5));
        assert_eq!(Vector3d::default(), Vector3d::ZERO);
        assert_eq!(Vector4d::new(1.0, 2.0, 3.0, 4.0).w, 4.0);
    }
}
