//! # umbra_decal - Entity Blob-Shadow Decals
//!
//! Renders one flat rectangular shadow decal beneath an entity by writing
//! four packed vertices straight into the sink's buffer, replacing the
//! generic per-vertex emission path on sinks that support it.
//!
//! ## Pipeline
//!
//! 1. **Capability adapter** (`umbra_vertex::as_buffer_writer`) gates the
//!    fast path; a miss routes the caller back to the generic path.
//! 2. **Ground sampler** rejects invisible/non-full-cube ground, dark
//!    positions, and empty outline shapes.
//! 3. **Geometry resolver** turns the outline box, entity height, and
//!    light level into a flat rectangle with a clamped alpha - or nothing.
//! 4. **Vertex assembler** transforms the four corners and writes them
//!    through a transient staging scope in one bulk push.
//!
//! ## Example
//!
//! ```ignore
//! use umbra_decal::prelude::*;
//!
//! let mut renderer = ShadowDecalRenderer::new(ShadowDecalConfig::default());
//!
//! // Per frame, per visible entity:
//! renderer.begin_frame();
//! for entity in visible_entities {
//!     let handled = renderer.render(
//!         &matrices,
//!         &mut sink,
//!         &world,
//!         entity.block_pos(),
//!         entity.position(),
//!         entity.shadow_radius(),
//!         entity.shadow_opacity(),
//!     )?;
//!     if !handled {
//!         render_shadow_generic(&mut sink, entity);
//!     }
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod assemble;
pub mod config;
pub mod error;
pub mod geometry;
pub mod renderer;
pub mod sampler;
pub mod stats;
pub mod world;

pub use assemble::write_shadow_quad;
pub use config::ShadowDecalConfig;
pub use error::{Result, ShadowError};
pub use geometry::{resolve_quad, ShadowRect};
pub use renderer::ShadowDecalRenderer;
pub use sampler::{sample_ground, GroundSample};
pub use stats::DecalStats;
pub use world::{BlockPos, DimensionInfo, GroundBlock, RenderCategory, WorldView};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::ShadowDecalConfig;
    pub use crate::error::{Result, ShadowError};
    pub use crate::renderer::ShadowDecalRenderer;
    pub use crate::stats::DecalStats;
    pub use crate::world::{BlockPos, DimensionInfo, GroundBlock, RenderCategory, WorldView};
    pub use umbra_math::{ModelMatrices, Vec3d};
    pub use umbra_vertex::{BufferedSink, VertexSink};
}
