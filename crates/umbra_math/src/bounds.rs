//! Axis-aligned bounding boxes
//!
//! Block outline shapes report their footprint as an `Aabb` in
//! block-local space (a full cube is `UNIT`).

use crate::vector::Vec3;

/// Axis-Aligned Bounding Box
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// The unit cube [0,1]^3 - a full block's outline
    pub const UNIT: Self = Self {
        min: Vec3::ZERO,
        max: Vec3::ONE,
    };

    /// Create from min and max points
    #[inline]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create from a set of points
    pub fn from_points(points: &[Vec3]) -> Self {
        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);
        for &point in points {
            min = min.min(point);
            max = max.max(point);
        }
        Self { min, max }
    }

    /// Get the center point
    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get the size (full extents)
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Check if the box is valid (min <= max on all axes)
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z
    }

    /// A box with zero extent on some axis is degenerate but still valid;
    /// the decal path renders it as a zero-width strip.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        let size = self.size();
        size.x == 0.0 || size.y == 0.0 || size.z == 0.0
    }

    /// Translate by an offset
    #[inline]
    pub fn translated(&self, offset: Vec3) -> Self {
        Self::new(self.min + offset, self.max + offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_unit() {
        assert!(Aabb::UNIT.is_valid());
        assert!(!Aabb::UNIT.is_degenerate());
        assert_eq!(Aabb::UNIT.center(), Vec3::splat(0.5));
    }

    #[test]
    fn test_aabb_degenerate() {
        let strip = Aabb::new(Vec3::new(0.5, 0.0, 0.0), Vec3::new(0.5, 1.0, 1.0));
        assert!(strip.is_valid());
        assert!(strip.is_degenerate());
    }

    #[test]
    fn test_aabb_from_points() {
        let b = Aabb::from_points(&[Vec3::new(1.0, -1.0, 0.0), Vec3::new(-1.0, 2.0, 3.0)]);
        assert_eq!(b.min, Vec3::new(-1.0, -1.0, 0.0));
        assert_eq!(b.max, Vec3::new(1.0, 2.0, 3.0));
    }
}
