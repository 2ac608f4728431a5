//! Decimate Math
//!
//! Fixed-size single-precision vectors used by mesh simplification. The three
//! vector types share one contract (see [`FloatVector`]) and define their
//! degenerate cases exactly: a vector whose magnitude is at or below
//! [`EPSILON`] normalizes to zero, and equality compares squared distance
//! against the same tolerance.

// =============================================================================
// Modules
// =============================================================================

pub mod error;
pub mod format;
pub mod math_utils;
pub mod vector2;
pub mod vector3;
pub mod vector4;
pub mod vector_double;
pub mod vector_int;
pub mod vector_traits;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{VectorError, VectorResult};
pub use format::ComponentFormat;
pub use math_utils::EPSILON;
pub use vector2::Vector2f;
pub use vector3::Vector3f;
pub use vector4::Vector4f;
pub use vector_double::{Vector2d, Vector3d, Vector4d};
pub use vector_int::{Vector2i, Vector3i, Vector4i};
pub use vector_traits::FloatVector;
