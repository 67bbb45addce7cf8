//! The shadow decal renderer entry point
//!
//! One call per visible entity per frame, on the render thread. The call
//! either reports `Ok(false)` (sink lacks the fast path; the caller runs
//! its generic path) or `Ok(true)` (handled - which may mean zero visual
//! output). Contract violations surface as `Err` after staging memory has
//! been released.

use umbra_math::{ModelMatrices, Vec3d};
use umbra_memory::StagingStack;
use umbra_vertex::{as_buffer_writer, VertexSink};

use crate::assemble::write_shadow_quad;
use crate::config::ShadowDecalConfig;
use crate::error::{Result, ShadowError};
use crate::geometry::resolve_quad;
use crate::sampler::sample_ground;
use crate::stats::DecalStats;
use crate::world::{BlockPos, WorldView};

/// Renders blob shadow decals through the packed-write fast path
pub struct ShadowDecalRenderer {
    config: ShadowDecalConfig,
    staging: StagingStack,
    stats: DecalStats,
}

impl ShadowDecalRenderer {
    /// Create a renderer. The config is validated (clamped) first.
    pub fn new(mut config: ShadowDecalConfig) -> Self {
        config.validate();
        log::debug!(
            "Shadow decal renderer: staging capacity {} bytes, min light {}",
            config.staging_capacity,
            config.min_light
        );
        let staging = StagingStack::new(config.staging_capacity);
        Self {
            config,
            staging,
            stats: DecalStats::default(),
        }
    }

    /// Current configuration
    pub fn config(&self) -> &ShadowDecalConfig {
        &self.config
    }

    /// Counters accumulated since the last `begin_frame`
    pub fn stats(&self) -> &DecalStats {
        &self.stats
    }

    /// Reset per-frame counters
    pub fn begin_frame(&mut self) {
        self.stats.reset();
    }

    /// Render one entity's shadow decal.
    ///
    /// * `pos` - the block the entity stands in
    /// * `origin` - the entity's exact world position; vertices come out
    ///   relative to it
    /// * `radius` - world-space decal radius (must be finite, positive)
    /// * `opacity` - caller-controlled base opacity
    ///
    /// Returns `Ok(false)` when the sink cannot take packed writes and
    /// the caller must run the generic path instead; `Ok(true)` in every
    /// other successful case, including the frequent zero-output ones.
    pub fn render(
        &mut self,
        matrices: &ModelMatrices,
        sink: &mut dyn VertexSink,
        world: &dyn WorldView,
        pos: BlockPos,
        origin: Vec3d,
        radius: f32,
        opacity: f32,
    ) -> Result<bool> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(ShadowError::InvalidRadius(radius));
        }

        // A disabled effect is still "handled": the generic path must not
        // draw the shadow either.
        if !self.config.enabled {
            return Ok(true);
        }

        let Some(writer) = as_buffer_writer(sink) else {
            self.stats.routed_generic += 1;
            return Ok(false);
        };

        let Some(sample) = sample_ground(world, pos, self.config.min_light) else {
            self.stats.culled_ground += 1;
            return Ok(true);
        };

        let dimension = world.dimension();
        let Some(rect) = resolve_quad(pos, sample.outline, opacity, origin, sample.light, dimension)
        else {
            self.stats.culled_alpha += 1;
            return Ok(true);
        };

        write_shadow_quad(matrices, writer, &self.staging, radius, &rect)?;
        self.stats.quads += 1;
        Ok(true)
    }
}

impl Default for ShadowDecalRenderer {
    fn default() -> Self {
        Self::new(ShadowDecalConfig::default())
    }
}
