//! World-level terrain orchestration: one facade owning a generator and the
//! meshes derived from it, rebuilt on parameter change.

mod world;

pub use world::TerrainWorld;
