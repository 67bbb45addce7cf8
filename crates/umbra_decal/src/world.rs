//! World collaborator boundary
//!
//! The decal renderer never stores world data; it asks the host through
//! `WorldView` for the block beneath the entity, the light level at the
//! entity, and the dimension's lightmap behavior.

use umbra_math::{lerp, Aabb, Vec3d};

/// Integer block coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The block directly below
    #[inline]
    pub const fn down(self) -> Self {
        Self::new(self.x, self.y - 1, self.z)
    }

    /// The block containing a world position
    #[inline]
    pub fn containing(pos: Vec3d) -> Self {
        Self::new(
            pos.x.floor() as i32,
            pos.y.floor() as i32,
            pos.z.floor() as i32,
        )
    }
}

/// How a block participates in rendering
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderCategory {
    /// Not rendered at all (air, barriers, structure voids)
    Invisible,
    /// Rendered from a static model
    Model,
    /// Rendered by a dynamic entity renderer
    Animated,
}

/// What the world reports about one block for shadow purposes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundBlock {
    pub category: RenderCategory,
    /// True when the block fills its whole cell
    pub full_cube: bool,
    /// The outline shape's bounds in block-local space; `None` when the
    /// shape is empty
    pub outline: Option<Aabb>,
}

impl GroundBlock {
    /// A plain full solid block (a stone-like ground block)
    pub const SOLID: Self = Self {
        category: RenderCategory::Model,
        full_cube: true,
        outline: Some(Aabb::UNIT),
    };

    /// An invisible block (air)
    pub const AIR: Self = Self {
        category: RenderCategory::Invisible,
        full_cube: false,
        outline: None,
    };
}

/// Per-dimension lightmap behavior
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DimensionInfo {
    /// Baseline ambient light in [0, 1]; lifts the dark end of the curve
    pub ambient_light: f32,
}

impl DimensionInfo {
    /// Surface world: no ambient floor
    pub const OVERWORLD: Self = Self { ambient_light: 0.0 };

    /// Nether-like dimensions glow slightly everywhere
    pub const NETHER: Self = Self { ambient_light: 0.1 };

    /// Lightmap brightness for a discrete light level.
    ///
    /// The standard curve: linear fraction pushed through `f / (4 - 3f)`,
    /// then lifted toward 1.0 by the ambient floor. Monotonically
    /// increasing in the light level.
    pub fn brightness(&self, light_level: u8) -> f32 {
        let f = f32::from(light_level.min(15)) / 15.0;
        let curve = f / (4.0 - 3.0 * f);
        lerp(curve, 1.0, self.ambient_light)
    }
}

/// Read-only world queries the decal renderer depends on
pub trait WorldView {
    /// Block data at a position
    fn block_at(&self, pos: BlockPos) -> GroundBlock;

    /// Combined light level (0-15) at a position
    fn light_level(&self, pos: BlockPos) -> u8;

    /// The dimension the view belongs to
    fn dimension(&self) -> DimensionInfo;
}
