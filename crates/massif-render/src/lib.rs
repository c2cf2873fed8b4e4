//! GPU upload and draw layer for terrain meshes: buffer handles per chunk and
//! a revision-gated sync stage.

mod gpu_mesh;
mod stage;

pub use gpu_mesh::GpuTerrainMesh;
pub use stage::TerrainRenderStage;
