//! Shadow geometry and lighting resolution
//!
//! Turns a sampled ground outline into a flat camera-relative rectangle
//! with a resolved alpha, or nothing when the shadow would be invisible.

use umbra_math::{Aabb, Vec3d};

use crate::world::{BlockPos, DimensionInfo};

/// A flat, axis-aligned shadow rectangle in camera-relative space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowRect {
    pub min_x: f32,
    pub max_x: f32,
    /// The quad is flat; one Y for all four corners
    pub min_y: f32,
    pub min_z: f32,
    pub max_z: f32,
    /// Resolved opacity in [0, 1]
    pub alpha: f32,
}

/// Resolve the shadow rectangle for an entity standing in block `pos`.
///
/// `origin` is the entity's exact world position; vertex coordinates come
/// out relative to it. The alpha models three falloffs at once: the
/// caller's opacity, the entity's height above the block bottom, and the
/// ambient brightness (bright light washes contact shadows out):
///
/// ```text
/// alpha = (opacity - (origin.y - pos.y) / 2) * 0.5 * brightness(light)
/// ```
///
/// A negative raw alpha means no quad at all - `None`, not a fully
/// transparent draw. Values above 1 clamp to 1. The math runs in f64 and
/// narrows to f32 only at the rectangle boundary.
pub fn resolve_quad(
    pos: BlockPos,
    outline: Aabb,
    opacity: f32,
    origin: Vec3d,
    light: u8,
    dimension: DimensionInfo,
) -> Option<ShadowRect> {
    let brightness = dimension.brightness(light);
    let alpha =
        (f64::from(opacity) - (origin.y - f64::from(pos.y)) / 2.0) * 0.5 * f64::from(brightness);

    if alpha < 0.0 {
        return None;
    }
    let alpha = alpha.min(1.0) as f32;

    Some(ShadowRect {
        min_x: (f64::from(pos.x) + f64::from(outline.min.x) - origin.x) as f32,
        max_x: (f64::from(pos.x) + f64::from(outline.max.x) - origin.x) as f32,
        min_y: (f64::from(pos.y) + f64::from(outline.min.y) - origin.y) as f32,
        min_z: (f64::from(pos.z) + f64::from(outline.min.z) - origin.z) as f32,
        max_z: (f64::from(pos.z) + f64::from(outline.max.z) - origin.z) as f32,
        alpha,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIM: DimensionInfo = DimensionInfo::OVERWORLD;
    const POS: BlockPos = BlockPos::new(0, 10, 0);

    fn origin_at(y: f64) -> Vec3d {
        Vec3d::new(0.0, y, 0.0)
    }

    #[test]
    fn test_alpha_at_ground_level() {
        let rect = resolve_quad(POS, Aabb::UNIT, 1.0, origin_at(10.0), 15, DIM).unwrap();
        // (1.0 - 0) * 0.5 * brightness(15) = 0.5
        assert!((rect.alpha - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_alpha_monotonic_in_height() {
        let mut last = f32::MAX;
        for step in 0..8 {
            let y = 10.0 + f64::from(step) * 0.25;
            let rect = resolve_quad(POS, Aabb::UNIT, 1.0, origin_at(y), 15, DIM).unwrap();
            assert!(rect.alpha <= last);
            last = rect.alpha;
        }
    }

    #[test]
    fn test_negative_alpha_skips() {
        // opacity 1.0 runs out at 2 blocks above the block bottom
        assert!(resolve_quad(POS, Aabb::UNIT, 1.0, origin_at(12.5), 15, DIM).is_none());
    }

    #[test]
    fn test_alpha_clamps_to_one() {
        let rect = resolve_quad(POS, Aabb::UNIT, 4.0, origin_at(10.0), 15, DIM).unwrap();
        assert_eq!(rect.alpha, 1.0);
    }

    #[test]
    fn test_brightness_weakens_shadow() {
        let dim = resolve_quad(POS, Aabb::UNIT, 1.0, origin_at(10.0), 4, DIM).unwrap();
        let lit = resolve_quad(POS, Aabb::UNIT, 1.0, origin_at(10.0), 15, DIM).unwrap();
        assert!(dim.alpha < lit.alpha);
    }

    #[test]
    fn test_rect_is_camera_relative() {
        let pos = BlockPos::new(3, 10, -2);
        let origin = Vec3d::new(3.5, 10.0, -1.5);
        let rect = resolve_quad(pos, Aabb::UNIT, 1.0, origin, 15, DIM).unwrap();
        assert!((rect.min_x + 0.5).abs() < 1e-6);
        assert!((rect.max_x - 0.5).abs() < 1e-6);
        assert!((rect.min_y - 0.0).abs() < 1e-6);
        assert!((rect.min_z + 0.5).abs() < 1e-6);
        assert!((rect.max_z - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_outline_still_resolves() {
        let strip = Aabb::new(
            umbra_math::Vec3::new(0.5, 0.0, 0.0),
            umbra_math::Vec3::new(0.5, 1.0, 1.0),
        );
        let rect = resolve_quad(POS, strip, 1.0, origin_at(10.0), 15, DIM).unwrap();
        assert_eq!(rect.min_x, rect.max_x);
    }
}
