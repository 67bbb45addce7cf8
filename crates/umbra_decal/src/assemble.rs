//! Vertex assembly
//!
//! Transforms the four corners of a resolved shadow rectangle and writes
//! them as packed records through a transient staging scope, submitted to
//! the sink in a single push. The scope releases on every exit path, so a
//! failed push never leaks staging memory and never submits a partial
//! quad.

use umbra_math::{ModelMatrices, Vec3};
use umbra_memory::StagingStack;
use umbra_vertex::packing::{light, normal, overlay};
use umbra_vertex::{ColorAbgr, ModelVertex, VertexBufferWriter};

use crate::error::{Result, ShadowError};
use crate::geometry::ShadowRect;

/// Bytes staged per quad
pub const QUAD_BYTES: usize = 4 * ModelVertex::STRIDE;

/// Write one shadow quad through the fast path.
///
/// `radius` scales world extent onto a unit texture: `size = 0.5 /
/// radius`, so a decal always spans UV width 1 centered on 0.5. Corner
/// order is (minX,minZ), (minX,maxZ), (maxX,maxZ), (maxX,minZ) -
/// counter-clockwise seen from above, consistent with the shared +Y
/// normal.
pub fn write_shadow_quad(
    matrices: &ModelMatrices,
    writer: &mut dyn VertexBufferWriter,
    staging: &StagingStack,
    radius: f32,
    rect: &ShadowRect,
) -> Result<()> {
    let size = 0.5 / radius;

    let u1 = -rect.min_x * size + 0.5;
    let u2 = -rect.max_x * size + 0.5;
    let v1 = -rect.min_z * size + 0.5;
    let v2 = -rect.max_z * size + 0.5;

    let color = ColorAbgr::OPAQUE_WHITE.with_alpha(rect.alpha);
    let packed_normal = normal::pack(matrices.transform_normal(Vec3::Y));

    let corners = [
        (rect.min_x, rect.min_z, u1, v1),
        (rect.min_x, rect.max_z, u1, v2),
        (rect.max_x, rect.max_z, u2, v2),
        (rect.max_x, rect.min_z, u2, v1),
    ];

    let mut scope = staging
        .scope(QUAD_BYTES)
        .ok_or(ShadowError::StagingExhausted {
            needed: QUAD_BYTES,
            free: staging.free(),
        })?;

    {
        let bytes = scope.bytes_mut();
        for (i, &(x, z, u, v)) in corners.iter().enumerate() {
            let position = matrices.transform_point(Vec3::new(x, rect.min_y, z));
            ModelVertex::write(
                &mut bytes[i * ModelVertex::STRIDE..],
                position.to_array(),
                color,
                u,
                v,
                light::MAX_LIGHT_COORD,
                overlay::DEFAULT_UV,
                packed_normal,
            );
        }
    }

    writer.push(scope.bytes(), 4, ModelVertex::FORMAT)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use umbra_vertex::{BufferedSink, SinkError, VertexFormat};

    fn flat_rect() -> ShadowRect {
        ShadowRect {
            min_x: 0.0,
            max_x: 1.0,
            min_y: 0.0,
            min_z: 0.0,
            max_z: 1.0,
            alpha: 0.5,
        }
    }

    fn read_f32(bytes: &[u8], offset: usize) -> f32 {
        f32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
    }

    #[test]
    fn test_quad_corner_positions_and_uvs() {
        let mut sink = BufferedSink::new();
        let staging = StagingStack::new(QUAD_BYTES);
        write_shadow_quad(
            &ModelMatrices::IDENTITY,
            &mut sink,
            &staging,
            1.0,
            &flat_rect(),
        )
        .unwrap();

        assert_eq!(sink.vertex_count(), 4);
        let bytes = sink.bytes();

        // size = 0.5: corner (0,0) gets uv (0.5, 0.5), corner (1,1) gets
        // uv (0.0, 0.0); winding minmin -> minmax -> maxmax -> maxmin.
        let expected = [
            ((0.0, 0.0), (0.5, 0.5)),
            ((0.0, 1.0), (0.5, 0.0)),
            ((1.0, 1.0), (0.0, 0.0)),
            ((1.0, 0.0), (0.0, 0.5)),
        ];
        for (i, &((x, z), (u, v))) in expected.iter().enumerate() {
            let base = i * ModelVertex::STRIDE;
            assert_eq!(read_f32(bytes, base + ModelVertex::OFFSET_POSITION), x);
            assert_eq!(read_f32(bytes, base + ModelVertex::OFFSET_POSITION + 4), 0.0);
            assert_eq!(read_f32(bytes, base + ModelVertex::OFFSET_POSITION + 8), z);
            assert_eq!(read_f32(bytes, base + ModelVertex::OFFSET_TEX), u);
            assert_eq!(read_f32(bytes, base + ModelVertex::OFFSET_TEX + 4), v);
        }
    }

    #[test]
    fn test_shared_fields_are_uniform() {
        let mut sink = BufferedSink::new();
        let staging = StagingStack::new(QUAD_BYTES);
        write_shadow_quad(
            &ModelMatrices::IDENTITY,
            &mut sink,
            &staging,
            0.75,
            &flat_rect(),
        )
        .unwrap();

        let bytes = sink.bytes();
        let word = |i: usize, offset: usize| {
            u32::from_le_bytes(bytes[i * ModelVertex::STRIDE + offset..][..4].try_into().unwrap())
        };
        for i in 1..4 {
            assert_eq!(word(i, ModelVertex::OFFSET_COLOR), word(0, ModelVertex::OFFSET_COLOR));
            assert_eq!(word(i, ModelVertex::OFFSET_NORMAL), word(0, ModelVertex::OFFSET_NORMAL));
        }
        assert_eq!(word(0, ModelVertex::OFFSET_LIGHT), light::MAX_LIGHT_COORD);
        assert_eq!(word(0, ModelVertex::OFFSET_OVERLAY), overlay::DEFAULT_UV);
        // +Y normal through the identity transform
        assert_eq!(word(0, ModelVertex::OFFSET_NORMAL), 0x0000_7F00);
    }

    #[test]
    fn test_staging_released_after_write() {
        let mut sink = BufferedSink::new();
        let staging = StagingStack::new(QUAD_BYTES);
        for _ in 0..3 {
            write_shadow_quad(
                &ModelMatrices::IDENTITY,
                &mut sink,
                &staging,
                1.0,
                &flat_rect(),
            )
            .unwrap();
            assert_eq!(staging.used(), 0);
        }
        assert_eq!(sink.vertex_count(), 12);
    }

    #[test]
    fn test_staging_released_when_push_fails() {
        struct RejectingSink;
        impl VertexBufferWriter for RejectingSink {
            fn push(
                &mut self,
                _vertices: &[u8],
                _count: usize,
                format: VertexFormat,
            ) -> core::result::Result<(), SinkError> {
                Err(SinkError::FormatMismatch { expected: format, found: format })
            }
        }

        let staging = StagingStack::new(QUAD_BYTES);
        let err = write_shadow_quad(
            &ModelMatrices::IDENTITY,
            &mut RejectingSink,
            &staging,
            1.0,
            &flat_rect(),
        )
        .unwrap_err();
        assert!(matches!(err, ShadowError::Sink(_)));
        assert_eq!(staging.used(), 0);
    }

    #[test]
    fn test_exhausted_staging_is_an_error() {
        let mut sink = BufferedSink::new();
        let staging = StagingStack::new(QUAD_BYTES - 1);
        let err = write_shadow_quad(
            &ModelMatrices::IDENTITY,
            &mut sink,
            &staging,
            1.0,
            &flat_rect(),
        )
        .unwrap_err();
        assert!(matches!(err, ShadowError::StagingExhausted { .. }));
        assert_eq!(sink.vertex_count(), 0);
    }
}
