//! Ground sampling
//!
//! Decides whether the ground under an entity can receive a shadow decal
//! at all. Every rejection here is an expected, frequent condition and
//! returns a silent `None` - nothing in this module is an error.

use umbra_math::Aabb;

use crate::world::{BlockPos, RenderCategory, WorldView};

/// Light levels at or below this never receive a shadow; barely-lit
/// geometry is not worth the overdraw.
pub const MIN_SHADOW_LIGHT: u8 = 3;

/// The ground data a successful sample produces
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundSample {
    /// Outline bounds of the ground block, block-local
    pub outline: Aabb,
    /// Light level sampled at the entity position
    pub light: u8,
}

/// Sample the ground beneath `entity_pos`.
///
/// Rejects (in order): invisible or non-full-cube ground blocks, light at
/// the *entity* position at or below `min_light`, and empty outline
/// shapes. Degenerate (zero-extent) outlines are not rejected; the shape
/// query is trusted.
pub fn sample_ground(
    world: &dyn WorldView,
    entity_pos: BlockPos,
    min_light: u8,
) -> Option<GroundSample> {
    let below = entity_pos.down();
    let block = world.block_at(below);

    if block.category == RenderCategory::Invisible || !block.full_cube {
        return None;
    }

    let light = world.light_level(entity_pos);
    if light <= min_light {
        return None;
    }

    let outline = block.outline?;

    Some(GroundSample { outline, light })
}
