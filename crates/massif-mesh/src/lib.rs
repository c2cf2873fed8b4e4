//! Terrain mesh construction: heightfield triangulation and the canonical
//! GPU vertex format.

mod builder;
mod vertex;

pub use builder::{TerrainMesh, build_terrain_mesh};
pub use vertex::{
    TERRAIN_VERTEX_ATTRIBUTES, TERRAIN_VERTEX_LAYOUT, TerrainVertex, terrain_vertex_buffer_layout,
};
