//! # umbra_math - Math Primitives for Decal Rendering
//!
//! Small math layer backing the shadow decal pipeline:
//! - `Vec3`/`Vec4`: SIMD-aligned single-precision vectors
//! - `Mat3`/`Mat4`: column-major matrices with point/vector transforms
//! - `Aabb`: axis-aligned bounds as reported by block outline shapes
//! - `Vec3d`: double-precision world coordinates for camera-relative math
//! - `ModelMatrices`: paired position/normal matrices with an orthonormal
//!   fast path for normal transformation

#![cfg_attr(not(feature = "std"), no_std)]

pub mod vector;
pub mod matrix;
pub mod bounds;
pub mod precision;
pub mod matrices;

pub use vector::*;
pub use matrix::*;
pub use bounds::*;
pub use precision::*;
pub use matrices::*;

/// Linear interpolation
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Clamp value between min and max
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
