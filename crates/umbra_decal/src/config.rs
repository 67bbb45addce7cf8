//! Decal renderer configuration

use serde::{Deserialize, Serialize};

use crate::assemble::QUAD_BYTES;
use crate::sampler::MIN_SHADOW_LIGHT;

/// Shadow decal settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShadowDecalConfig {
    /// Render entity shadows at all
    pub enabled: bool,

    /// Light levels at or below this are skipped (0-15)
    pub min_light: u8,

    /// Staging stack capacity in bytes
    pub staging_capacity: usize,
}

impl Default for ShadowDecalConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_light: MIN_SHADOW_LIGHT,
            staging_capacity: 4 * 1024,
        }
    }
}

impl ShadowDecalConfig {
    /// Clamp values into their working ranges.
    ///
    /// The staging stack must hold at least one quad; light levels only
    /// go to 15.
    pub fn validate(&mut self) {
        if self.min_light > 15 {
            log::warn!("Shadow decal min_light {} clamped to 15", self.min_light);
            self.min_light = 15;
        }
        if self.staging_capacity < QUAD_BYTES {
            log::warn!(
                "Shadow decal staging capacity {} raised to one quad ({} bytes)",
                self.staging_capacity,
                QUAD_BYTES
            );
            self.staging_capacity = QUAD_BYTES;
        }
    }
}
