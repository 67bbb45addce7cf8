//! Paired model/normal matrices
//!
//! Render paths carry the current position transform together with its
//! derived normal matrix. When the position transform is known to be
//! orthonormal (rotation + translation only), normal transformation can
//! skip the renormalize step - the hot decal path relies on this.

use crate::matrix::{Mat3, Mat4};
use crate::vector::Vec3;

/// A position matrix with its matching normal matrix
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelMatrices {
    /// Full 4x4 model/view transform for positions
    pub position: Mat4,
    /// 3x3 normal matrix (inverse-transpose of the upper-left block)
    pub normal: Mat3,
    /// True when `position` is orthonormal, letting `transform_normal`
    /// skip normalization
    pub orthonormal: bool,
}

impl ModelMatrices {
    pub const IDENTITY: Self = Self {
        position: Mat4::IDENTITY,
        normal: Mat3::IDENTITY,
        orthonormal: true,
    };

    /// Build from an arbitrary position matrix, deriving the normal
    /// matrix. Conservatively assumes the transform may scale.
    pub fn from_position(position: Mat4) -> Self {
        Self {
            position,
            normal: Mat3::from_mat4(&position).inverse_transpose(),
            orthonormal: false,
        }
    }

    /// Build from known parts. The caller asserts `orthonormal`.
    pub const fn from_parts(position: Mat4, normal: Mat3, orthonormal: bool) -> Self {
        Self {
            position,
            normal,
            orthonormal,
        }
    }

    /// Transform a point through the position matrix
    #[inline]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.position.transform_point(point)
    }

    /// Transform a unit direction through the normal matrix.
    ///
    /// Skips the renormalize when the transform is flagged orthonormal.
    #[inline]
    pub fn transform_normal(&self, dir: Vec3) -> Vec3 {
        let n = self.normal * dir;
        if self.orthonormal { n } else { n.normalize() }
    }
}

impl Default for ModelMatrices {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_normal_passthrough() {
        let m = ModelMatrices::IDENTITY;
        assert_eq!(m.transform_normal(Vec3::Y), Vec3::Y);
    }

    #[test]
    fn test_scaled_normal_is_renormalized() {
        let m = ModelMatrices::from_position(Mat4::from_scale(Vec3::new(2.0, 0.5, 2.0)));
        let n = m.transform_normal(Vec3::Y);
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert!(n.y > 0.99);
    }

    #[test]
    fn test_orthonormal_skips_normalize() {
        // A pure rotation keeps unit length even without the normalize.
        let rot = Mat4::from_rotation_y(0.7);
        let m = ModelMatrices::from_parts(rot, Mat3::from_mat4(&rot), true);
        let n = m.transform_normal(Vec3::Y);
        assert!((n.length() - 1.0).abs() < 1e-6);
    }
}
