//! Heightfield triangulation shared by every terrain strategy.
//!
//! There is exactly one way a heightfield becomes triangles in this
//! engine; both the diamond-square and the chunked noise terrain go
//! through [`build_terrain_mesh`].

use massif_terrain::Heightfield;

use crate::vertex::TerrainVertex;

/// A triangulated terrain surface ready for GPU upload.
pub struct TerrainMesh {
    /// Interleaved vertex stream, one vertex per heightfield sample.
    pub vertices: Vec<TerrainVertex>,
    /// Triangle indices, three per triangle, `6 * (width-1) * (depth-1)`
    /// in total.
    pub indices: Vec<u32>,
}

impl TerrainMesh {
    /// Vertex stream as raw bytes for buffer upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index stream as raw bytes for buffer upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Triangulates a heightfield into a [`TerrainMesh`].
///
/// Emits one vertex per sample at `(world_scale * x, height, world_scale
/// * z)` with the field's central-difference normal, then two triangles
/// per grid cell. Cells are anchored at their low corner, so the last
/// row and column never anchor a cell and the index count is exactly
/// `6 * (width - 1) * (depth - 1)`.
///
/// Both triangles of a cell share the diagonal between the anchor's +x
/// and +z neighbors and wind counter-clockwise seen from above, keeping
/// front faces up.
pub fn build_terrain_mesh(field: &Heightfield, world_scale: f32) -> TerrainMesh {
    let width = field.width();
    let depth = field.depth();

    let mut vertices = Vec::with_capacity(width * depth);
    for z in 0..depth {
        for x in 0..width {
            vertices.push(TerrainVertex {
                position: [
                    x as f32 * world_scale,
                    field.get(x, z),
                    z as f32 * world_scale,
                ],
                normal: field.normal_at(x, z).to_array(),
            });
        }
    }

    let cells_x = width.saturating_sub(1);
    let cells_z = depth.saturating_sub(1);
    let mut indices = Vec::with_capacity(6 * cells_x * cells_z);
    let stride = width as u32;
    for z in 0..cells_z {
        for x in 0..cells_x {
            let anchor = (z * width + x) as u32;
            indices.extend_from_slice(&[anchor, anchor + stride, anchor + 1]);
            indices.extend_from_slice(&[anchor + 1, anchor + stride, anchor + stride + 1]);
        }
    }

    TerrainMesh { vertices, indices }
}
