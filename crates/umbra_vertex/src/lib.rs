//! # umbra_vertex - Packed Vertex Format and Sink Boundary
//!
//! The byte-level contract between the decal writer and the vertex sink:
//! - `ModelVertex`: fixed-stride packed record (position, color, uv,
//!   light, overlay, normal), little-endian, 36 bytes
//! - Bit packing for ABGR colors, lightmap coordinates, overlay sentinel,
//!   and signed-byte normals
//! - `VertexSink` / `VertexBufferWriter`: the capability seam between the
//!   generic per-vertex path and the bulk packed-write fast path
//!
//! Writer and sink must agree on this layout byte-for-byte; everything is
//! packed explicitly rather than left to structure layout.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod color;
pub mod error;
pub mod format;
pub mod packing;
pub mod sink;

pub use color::ColorAbgr;
pub use error::{Result, SinkError};
pub use format::{ModelVertex, VertexFormat};
pub use sink::{as_buffer_writer, BufferedSink, VertexBufferWriter, VertexSink};
