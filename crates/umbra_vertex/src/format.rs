//! The packed model vertex record
//!
//! Fixed 36-byte stride, fields in declaration order, little-endian
//! words. Consumers index the buffer by `i * STRIDE`; the layout below is
//! the byte-for-byte contract both sides compile against.
//!
//! | offset | field    | encoding                         |
//! |--------|----------|----------------------------------|
//! | 0      | position | 3 x f32                          |
//! | 12     | color    | u32, ABGR byte order             |
//! | 16     | tex      | 2 x f32 (u, v)                   |
//! | 24     | light    | u32, two 16-bit lightmap coords  |
//! | 28     | overlay  | u32, overlay uv sentinel         |
//! | 32     | normal   | u32, signed byte per axis + pad  |

use crate::color::ColorAbgr;

/// Identifies a vertex layout across the sink boundary
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexFormat {
    /// Stable layout name
    pub name: &'static str,
    /// Bytes per vertex
    pub stride: usize,
}

/// GPU-ready packed model vertex
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelVertex {
    /// Camera-relative position
    pub position: [f32; 3],
    /// Packed ABGR color word
    pub color: u32,
    /// Texture coordinates
    pub tex: [f32; 2],
    /// Packed lightmap coordinates
    pub light: u32,
    /// Packed overlay coordinates
    pub overlay: u32,
    /// Packed signed-byte normal
    pub normal: u32,
}

impl ModelVertex {
    /// Bytes per vertex
    pub const STRIDE: usize = 36;

    /// Field byte offsets within one record
    pub const OFFSET_POSITION: usize = 0;
    pub const OFFSET_COLOR: usize = 12;
    pub const OFFSET_TEX: usize = 16;
    pub const OFFSET_LIGHT: usize = 24;
    pub const OFFSET_OVERLAY: usize = 28;
    pub const OFFSET_NORMAL: usize = 32;

    /// The format descriptor for this layout
    pub const FORMAT: VertexFormat = VertexFormat {
        name: "model",
        stride: Self::STRIDE,
    };

    /// Write one record into the first `STRIDE` bytes of `out`.
    ///
    /// Explicit little-endian writes; the buffer contents never depend on
    /// host struct layout.
    ///
    /// # Panics
    /// Panics if `out` is shorter than `STRIDE` bytes.
    #[inline]
    pub fn write(
        out: &mut [u8],
        position: [f32; 3],
        color: ColorAbgr,
        u: f32,
        v: f32,
        light: u32,
        overlay: u32,
        normal: u32,
    ) {
        let out = &mut out[..Self::STRIDE];
        out[0..4].copy_from_slice(&position[0].to_le_bytes());
        out[4..8].copy_from_slice(&position[1].to_le_bytes());
        out[8..12].copy_from_slice(&position[2].to_le_bytes());
        out[12..16].copy_from_slice(&color.to_bits().to_le_bytes());
        out[16..20].copy_from_slice(&u.to_le_bytes());
        out[20..24].copy_from_slice(&v.to_le_bytes());
        out[24..28].copy_from_slice(&light.to_le_bytes());
        out[28..32].copy_from_slice(&overlay.to_le_bytes());
        out[32..36].copy_from_slice(&normal.to_le_bytes());
    }
}

// The Pod struct and the explicit writes describe the same layout.
const _: () = assert!(core::mem::size_of::<ModelVertex>() == ModelVertex::STRIDE);
