//! Bit packing for light, overlay, and normal fields

use umbra_math::Vec3;

/// Lightmap coordinates - two 16-bit texel coordinates in one word
pub mod light {
    /// Pack block and sky light coordinates (block in the low half,
    /// sky in the high half; each scaled by 16 texels)
    #[inline]
    pub const fn pack(block: u32, sky: u32) -> u32 {
        block << 4 | sky << 20
    }

    /// Both coordinates at their maximum (15) - the fixed value shadow
    /// decals are written with
    pub const MAX_LIGHT_COORD: u32 = pack(15, 15);
}

/// Overlay texture coordinates
pub mod overlay {
    /// Pack overlay u/v into one word (v in the high half)
    #[inline]
    pub const fn pack(u: u32, v: u32) -> u32 {
        v << 16 | u
    }

    /// The "no overlay" sentinel (u = 0, v = 10)
    pub const DEFAULT_UV: u32 = pack(0, 10);
}

/// Packed unit directions - one signed byte per axis
pub mod normal {
    use super::Vec3;

    /// Pack a unit direction: x in the low byte, then y, then z; the top
    /// byte stays zero. Each component maps [-1, 1] to [-127, 127].
    #[inline]
    pub fn pack(dir: Vec3) -> u32 {
        let x = snorm(dir.x);
        let y = snorm(dir.y);
        let z = snorm(dir.z);
        (x as u8 as u32) | (y as u8 as u32) << 8 | (z as u8 as u32) << 16
    }

    #[inline]
    fn snorm(v: f32) -> i8 {
        (v.clamp(-1.0, 1.0) * 127.0).round() as i8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_max_coordinate() {
        assert_eq!(light::MAX_LIGHT_COORD, 0x00F0_00F0);
    }

    #[test]
    fn test_overlay_default_uv() {
        assert_eq!(overlay::DEFAULT_UV, 0x000A_0000);
    }

    #[test]
    fn test_normal_axes() {
        assert_eq!(normal::pack(Vec3::Y), 0x0000_7F00);
        assert_eq!(normal::pack(Vec3::X), 0x0000_007F);
        assert_eq!(normal::pack(Vec3::Z), 0x007F_0000);
    }

    #[test]
    fn test_normal_negative_components() {
        // -1.0 maps to -127, stored as the two's-complement byte 0x81.
        assert_eq!(normal::pack(-Vec3::Y) & 0x0000_FF00, 0x0000_8100);
        // Top byte is always zero padding.
        assert_eq!(normal::pack(-Vec3::ONE.normalize()) & 0xFF00_0000, 0);
    }
}
