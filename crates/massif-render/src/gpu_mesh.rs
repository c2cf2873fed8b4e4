//! GPU-resident terrain mesh: holds wgpu buffer handles for vertex/index data.
//!
//! [`GpuTerrainMesh`] wraps the buffers produced by uploading a
//! [`TerrainMesh`](massif_mesh::TerrainMesh) and exposes the metadata needed
//! to issue indexed draw calls. Buffers live as long as the handle; dropping
//! it releases them.

use massif_mesh::TerrainMesh;
use wgpu::util::DeviceExt;

/// A terrain chunk mesh that has been uploaded to the GPU.
pub struct GpuTerrainMesh {
    /// Vertex buffer on the GPU.
    pub vertex_buffer: wgpu::Buffer,
    /// Index buffer on the GPU.
    pub index_buffer: wgpu::Buffer,
    /// Number of indices (used in `draw_indexed`).
    pub index_count: u32,
    /// Number of vertices.
    pub vertex_count: u32,
    /// Size of the vertex buffer in bytes (for memory tracking).
    vertex_buffer_size: u64,
    /// Size of the index buffer in bytes (for memory tracking).
    index_buffer_size: u64,
}

impl GpuTerrainMesh {
    /// Uploads a [`TerrainMesh`] to the GPU, creating new buffers.
    pub fn upload(device: &wgpu::Device, mesh: &TerrainMesh) -> Self {
        let vertex_bytes = mesh.vertex_bytes();
        let index_bytes = mesh.index_bytes();

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("terrain_vertex_buffer"),
            contents: vertex_bytes,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("terrain_index_buffer"),
            contents: index_bytes,
            usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
            vertex_count: mesh.vertices.len() as u32,
            vertex_buffer_size: vertex_bytes.len() as u64,
            index_buffer_size: index_bytes.len() as u64,
        }
    }

    /// Total GPU memory consumed by this mesh's buffers in bytes.
    pub fn total_gpu_bytes(&self) -> u64 {
        self.vertex_buffer_size + self.index_buffer_size
    }

    /// Size of the vertex buffer in bytes.
    pub fn vertex_buffer_size(&self) -> u64 {
        self.vertex_buffer_size
    }

    /// Size of the index buffer in bytes.
    pub fn index_buffer_size(&self) -> u64 {
        self.index_buffer_size
    }

    /// Binds this mesh's buffers to a render pass.
    pub fn bind<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
    }

    /// Issues an indexed draw call for this mesh.
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass) {
        render_pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}
