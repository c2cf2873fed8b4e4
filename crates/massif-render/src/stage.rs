//! Render stage keeping GPU terrain meshes in sync with a [`TerrainWorld`].
//!
//! The stage compares its last-uploaded revision against the world's current
//! one; per-frame cost is a single integer comparison until a regeneration
//! actually happens, at which point every chunk is re-uploaded and the old
//! buffers are dropped.

use massif_terrain::HeightfieldGenerator;
use massif_world::TerrainWorld;

use crate::gpu_mesh::GpuTerrainMesh;

/// One GPU mesh per lattice cell plus the world revision they were built from.
pub struct TerrainRenderStage {
    /// Row-major over the lattice, matching [`TerrainWorld::meshes`].
    meshes: Vec<GpuTerrainMesh>,
    lattice: (usize, usize),
    /// World revision the current buffers were uploaded from. Starts at 0,
    /// below any world's initial revision, so the first sync always uploads.
    synced_revision: u64,
}

impl Default for TerrainRenderStage {
    fn default() -> Self {
        Self::new()
    }
}

impl TerrainRenderStage {
    /// Creates an empty stage; call [`sync`](Self::sync) before drawing.
    pub fn new() -> Self {
        Self {
            meshes: Vec::new(),
            lattice: (0, 0),
            synced_revision: 0,
        }
    }

    /// Re-uploads every chunk mesh if the world regenerated since the last
    /// sync. Returns `true` if an upload happened.
    pub fn sync<G: HeightfieldGenerator>(
        &mut self,
        device: &wgpu::Device,
        world: &TerrainWorld<G>,
    ) -> bool {
        if self.synced_revision == world.revision() {
            return false;
        }
        self.meshes = world
            .meshes()
            .iter()
            .map(|mesh| GpuTerrainMesh::upload(device, mesh))
            .collect();
        self.lattice = world.lattice();
        self.synced_revision = world.revision();
        log::debug!(
            "Uploaded {} terrain meshes ({} bytes) at revision {}",
            self.meshes.len(),
            self.total_gpu_bytes(),
            self.synced_revision
        );
        true
    }

    /// Binds and draws the mesh for one lattice cell.
    ///
    /// # Panics
    /// Panics if `coord` lies outside the synced lattice.
    pub fn draw_chunk<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>, coord: (usize, usize)) {
        let (cx, cz) = coord;
        let (x_chunks, z_chunks) = self.lattice;
        assert!(
            cx < x_chunks && cz < z_chunks,
            "chunk ({cx}, {cz}) outside {x_chunks}x{z_chunks} lattice"
        );
        let mesh = &self.meshes[cz * x_chunks + cx];
        mesh.bind(render_pass);
        mesh.draw(render_pass);
    }

    /// Binds and draws every chunk mesh in lattice order.
    pub fn draw_all<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        for mesh in &self.meshes {
            mesh.bind(render_pass);
            mesh.draw(render_pass);
        }
    }

    /// World revision the current buffers were uploaded from; 0 before the
    /// first sync.
    pub fn synced_revision(&self) -> u64 {
        self.synced_revision
    }

    /// Number of uploaded chunk meshes.
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    /// Whether any meshes have been uploaded yet.
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Total GPU memory held by all chunk buffers in bytes.
    pub fn total_gpu_bytes(&self) -> u64 {
        self.meshes.iter().map(GpuTerrainMesh::total_gpu_bytes).sum()
    }
}
