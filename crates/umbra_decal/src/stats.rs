//! Per-frame decal statistics

use serde::{Deserialize, Serialize};

/// Counters for one frame of shadow decal rendering
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecalStats {
    /// Quads written through the fast path
    pub quads: u32,
    /// Calls rejected by the ground sampler (invisible, partial, dark,
    /// or empty-outline ground)
    pub culled_ground: u32,
    /// Calls rejected by the alpha falloff (entity too high)
    pub culled_alpha: u32,
    /// Calls routed back to the generic path (sink lacks the fast write)
    pub routed_generic: u32,
}

impl DecalStats {
    /// Total calls observed this frame
    pub fn total_calls(&self) -> u32 {
        self.quads + self.culled_ground + self.culled_alpha + self.routed_generic
    }

    /// Clear all counters
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_and_reset() {
        let mut stats = DecalStats {
            quads: 3,
            culled_ground: 2,
            culled_alpha: 1,
            routed_generic: 4,
        };
        assert_eq!(stats.total_calls(), 10);
        stats.reset();
        assert_eq!(stats, DecalStats::default());
    }
}
