//! Packed ABGR color
//!
//! Colors are stored as a 32-bit little-endian word with the byte order
//! reversed from conventional RGBA: red in the low byte, alpha in the
//! most significant byte. This is the order the packed vertex buffer
//! format expects; it is packed explicitly here so the wire layout never
//! depends on struct layout or target conventions.

/// A packed ABGR color word
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct ColorAbgr(u32);

impl ColorAbgr {
    /// Fully opaque white - the base color of shadow decals
    pub const OPAQUE_WHITE: Self = Self(0xFFFF_FFFF);

    /// Pack from float components in [0, 1]
    #[inline]
    pub fn pack(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::from_bytes(unorm(r), unorm(g), unorm(b), unorm(a))
    }

    /// Pack from raw bytes
    #[inline]
    pub const fn from_bytes(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self((a as u32) << 24 | (b as u32) << 16 | (g as u32) << 8 | r as u32)
    }

    /// Replace the alpha byte, keeping RGB
    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self(self.0 & 0x00FF_FFFF | (unorm(alpha) as u32) << 24)
    }

    /// The raw packed word
    #[inline]
    pub const fn to_bits(self) -> u32 {
        self.0
    }

    /// The alpha byte (most significant)
    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }
}

/// Map [0, 1] to [0, 255], saturating outside the range
#[inline]
fn unorm(v: f32) -> u8 {
    (v * 255.0 + 0.5).clamp(0.0, 255.0) as u8
}
