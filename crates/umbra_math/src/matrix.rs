//! Column-major matrix types

use crate::vector::{Vec3, Vec4};
use core::ops::{Mul, MulAssign};

/// 3x3 matrix (column-major) - used as the normal matrix
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct Mat3 {
    pub cols: [Vec3; 3],
}

impl Mat3 {
    pub const IDENTITY: Self = Self {
        cols: [Vec3::X, Vec3::Y, Vec3::Z],
    };

    #[inline]
    pub const fn from_cols(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self { cols: [c0, c1, c2] }
    }

    #[inline]
    pub fn from_scale(scale: Vec3) -> Self {
        Self::from_cols(
            Vec3::new(scale.x, 0.0, 0.0),
            Vec3::new(0.0, scale.y, 0.0),
            Vec3::new(0.0, 0.0, scale.z),
        )
    }

    /// Extract the upper-left 3x3 block of a 4x4 matrix
    #[inline]
    pub fn from_mat4(m: &Mat4) -> Self {
        Self::from_cols(
            m.cols[0].truncate(),
            m.cols[1].truncate(),
            m.cols[2].truncate(),
        )
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(
            Vec3::new(self.cols[0].x, self.cols[1].x, self.cols[2].x),
            Vec3::new(self.cols[0].y, self.cols[1].y, self.cols[2].y),
            Vec3::new(self.cols[0].z, self.cols[1].z, self.cols[2].z),
        )
    }

    #[inline]
    pub fn determinant(&self) -> f32 {
        self.cols[0].x * (self.cols[1].y * self.cols[2].z - self.cols[2].y * self.cols[1].z)
            - self.cols[1].x * (self.cols[0].y * self.cols[2].z - self.cols[2].y * self.cols[0].z)
            + self.cols[2].x * (self.cols[0].y * self.cols[1].z - self.cols[1].y * self.cols[0].z)
    }

    /// Inverse of this matrix. Returns identity for singular input.
    pub fn inverse(&self) -> Self {
        let det = self.determinant();
        if det == 0.0 {
            return Self::IDENTITY;
        }
        let inv_det = 1.0 / det;

        let a = self.cols[0];
        let b = self.cols[1];
        let c = self.cols[2];

        // Adjugate, transposed into columns
        Self::from_cols(
            Vec3::new(
                (b.y * c.z - c.y * b.z) * inv_det,
                (c.y * a.z - a.y * c.z) * inv_det,
                (a.y * b.z - b.y * a.z) * inv_det,
            ),
            Vec3::new(
                (c.x * b.z - b.x * c.z) * inv_det,
                (a.x * c.z - c.x * a.z) * inv_det,
                (b.x * a.z - a.x * b.z) * inv_det,
            ),
            Vec3::new(
                (b.x * c.y - c.x * b.y) * inv_det,
                (c.x * a.y - a.x * c.y) * inv_det,
                (a.x * b.y - b.x * a.y) * inv_det,
            ),
        )
    }

    /// Normal matrix derivation: inverse-transpose, correct under
    /// non-uniform scale.
    #[inline]
    pub fn inverse_transpose(&self) -> Self {
        self.inverse().transpose()
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.cols[0] * rhs.x + self.cols[1] * rhs.y + self.cols[2] * rhs.z
    }
}

impl Mul for Mat3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_cols(self * rhs.cols[0], self * rhs.cols[1], self * rhs.cols[2])
    }
}

/// 4x4 matrix (column-major) - the model/view position transform
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct Mat4 {
    pub cols: [Vec4; 4],
}

impl Mat4 {
    pub const IDENTITY: Self = Self {
        cols: [Vec4::X, Vec4::Y, Vec4::Z, Vec4::W],
    };

    #[inline]
    pub const fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self { cols: [c0, c1, c2, c3] }
    }

    #[inline]
    pub fn from_translation(translation: Vec3) -> Self {
        Self::from_cols(
            Vec4::X,
            Vec4::Y,
            Vec4::Z,
            translation.extend(1.0),
        )
    }

    #[inline]
    pub fn from_scale(scale: Vec3) -> Self {
        Self::from_cols(
            Vec4::new(scale.x, 0.0, 0.0, 0.0),
            Vec4::new(0.0, scale.y, 0.0, 0.0),
            Vec4::new(0.0, 0.0, scale.z, 0.0),
            Vec4::W,
        )
    }

    pub fn from_rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_cols(
            Vec4::new(c, 0.0, -s, 0.0),
            Vec4::Y,
            Vec4::new(s, 0.0, c, 0.0),
            Vec4::W,
        )
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(
            Vec4::new(self.cols[0].x, self.cols[1].x, self.cols[2].x, self.cols[3].x),
            Vec4::new(self.cols[0].y, self.cols[1].y, self.cols[2].y, self.cols[3].y),
            Vec4::new(self.cols[0].z, self.cols[1].z, self.cols[2].z, self.cols[3].z),
            Vec4::new(self.cols[0].w, self.cols[1].w, self.cols[2].w, self.cols[3].w),
        )
    }

    /// Get the translation component
    #[inline]
    pub fn get_translation(&self) -> Vec3 {
        self.cols[3].truncate()
    }

    /// Transform a point (w=1)
    #[inline]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        let v = *self * point.extend(1.0);
        v.truncate() / v.w
    }

    /// Transform a direction vector (w=0)
    #[inline]
    pub fn transform_vector(&self, vector: Vec3) -> Vec3 {
        (*self * vector.extend(0.0)).truncate()
    }

    /// Convert to 2D array (column-major) - useful for GPU uniforms
    pub fn to_cols_array_2d(&self) -> [[f32; 4]; 4] {
        [
            self.cols[0].to_array(),
            self.cols[1].to_array(),
            self.cols[2].to_array(),
            self.cols[3].to_array(),
        ]
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Mat4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_cols(
            self * rhs.cols[0],
            self * rhs.cols[1],
            self * rhs.cols[2],
            self * rhs.cols[3],
        )
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        self.cols[0] * rhs.x + self.cols[1] * rhs.y + self.cols[2] * rhs.z + self.cols[3] * rhs.w
    }
}

impl MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mat4_identity() {
        let m = Mat4::IDENTITY;
        let v = Vec4::new(1.0, 2.0, 3.0, 1.0);
        assert_eq!(m * v, v);
    }

    #[test]
    fn test_mat4_translation() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let result = m.transform_point(Vec3::ZERO);
        assert!((result - Vec3::new(1.0, 2.0, 3.0)).length() < 1e-6);
    }

    #[test]
    fn test_mat3_inverse() {
        let m = Mat3::from_scale(Vec3::new(2.0, 4.0, 8.0));
        let inv = m.inverse();
        let id = m * inv;
        assert!((id.cols[0] - Vec3::X).length() < 1e-6);
        assert!((id.cols[1] - Vec3::Y).length() < 1e-6);
        assert!((id.cols[2] - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_mat3_inverse_transpose_rescales_normals() {
        // Squash along Y; the +Y normal must survive inverse-transpose
        // with its direction intact.
        let m = Mat3::from_scale(Vec3::new(1.0, 0.25, 1.0));
        let n = (m.inverse_transpose() * Vec3::Y).normalize();
        assert!((n - Vec3::Y).length() < 1e-6);
    }
}
