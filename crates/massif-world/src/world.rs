//! Terrain world facade: owns a heightfield generator and keeps one triangle
//! mesh per lattice cell in sync with the generator's parameters.
//!
//! [`TerrainWorld`] is the single mutation point for terrain state. UI code
//! edits live parameters through [`generator_mut`](TerrainWorld::generator_mut)
//! and either calls [`regenerate_all`](TerrainWorld::regenerate_all) directly
//! or lets the once-per-frame [`update`](TerrainWorld::update) pick the
//! change up.

use massif_mesh::{TerrainMesh, build_terrain_mesh};
use massif_terrain::HeightfieldGenerator;
use tracing::info;

/// Owns a terrain generator plus the CPU meshes built from its heightfields.
///
/// Meshes are stored row-major over the lattice (`cz * x_chunks + cx`), one
/// per cell. A monotonically increasing revision counter is bumped on every
/// rebuild so downstream GPU caches can detect staleness by comparing
/// revisions instead of mesh contents.
pub struct TerrainWorld<G: HeightfieldGenerator> {
    generator: G,
    meshes: Vec<TerrainMesh>,
    /// Parameter snapshot the current meshes were built from.
    applied_params: G::Params,
    revision: u64,
}

impl<G: HeightfieldGenerator> TerrainWorld<G> {
    /// Wraps an already-populated generator and builds the initial meshes.
    ///
    /// Generator constructors run a full generation pass, so no regeneration
    /// happens here. The initial revision is 1.
    pub fn new(generator: G) -> Self {
        let applied_params = generator.params().clone();
        let mut world = Self {
            generator,
            meshes: Vec::new(),
            applied_params,
            revision: 1,
        };
        world.rebuild_meshes();
        world
    }

    /// Regenerates every heightfield, rebuilds every mesh, and bumps the
    /// revision.
    pub fn regenerate_all(&mut self) {
        self.generator.regenerate();
        self.rebuild_meshes();
        self.applied_params = self.generator.params().clone();
        self.revision += 1;
        let (x_chunks, z_chunks) = self.generator.lattice();
        info!(
            "Terrain regenerated: revision={}, chunks={}, triangles={}",
            self.revision,
            x_chunks * z_chunks,
            self.triangle_count()
        );
    }

    /// Regenerates only if the live parameters changed since the last rebuild.
    ///
    /// Intended to run once per frame: a parameter comparison when nothing
    /// changed, a full rebuild when something did. Returns `true` if a
    /// rebuild happened.
    pub fn update(&mut self) -> bool {
        if *self.generator.params() == self.applied_params {
            return false;
        }
        self.regenerate_all();
        true
    }

    /// Mesh for the lattice cell at `coord`.
    ///
    /// # Panics
    /// Panics if `coord` lies outside the lattice.
    pub fn mesh(&self, coord: (usize, usize)) -> &TerrainMesh {
        let (x_chunks, z_chunks) = self.generator.lattice();
        let (cx, cz) = coord;
        assert!(
            cx < x_chunks && cz < z_chunks,
            "chunk ({cx}, {cz}) outside {x_chunks}x{z_chunks} lattice"
        );
        &self.meshes[cz * x_chunks + cx]
    }

    /// All meshes in lattice row-major order.
    pub fn meshes(&self) -> &[TerrainMesh] {
        &self.meshes
    }

    /// Lattice dimensions in chunks, `(x_chunks, z_chunks)`.
    pub fn lattice(&self) -> (usize, usize) {
        self.generator.lattice()
    }

    /// Rebuild counter; starts at 1 and increments on every rebuild.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Total triangle count across all meshes.
    pub fn triangle_count(&self) -> usize {
        self.meshes.iter().map(TerrainMesh::triangle_count).sum()
    }

    /// The owned generator, for strategy-specific accessors such as height
    /// range or water level.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Mutable generator access for live parameter edits.
    ///
    /// Edits do not rebuild anything on their own; call
    /// [`regenerate_all`](Self::regenerate_all) or let
    /// [`update`](Self::update) detect the change.
    pub fn generator_mut(&mut self) -> &mut G {
        &mut self.generator
    }

    fn rebuild_meshes(&mut self) {
        let (x_chunks, z_chunks) = self.generator.lattice();
        let world_scale = self.generator.world_scale();
        self.meshes.clear();
        self.meshes.reserve(x_chunks * z_chunks);
        for cz in 0..z_chunks {
            for cx in 0..x_chunks {
                let field = self.generator.heightfield((cx, cz));
                self.meshes.push(build_terrain_mesh(field, world_scale));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use massif_terrain::{
        ChunkGenerator, ChunkLayout, DiamondSquareGenerator, DiamondSquareParams, NoiseParams,
    };

    fn small_chunk_world() -> TerrainWorld<ChunkGenerator> {
        let layout = ChunkLayout {
            x_chunks: 2,
            z_chunks: 1,
            chunk_width: 8,
            chunk_depth: 8,
        };
        let generator = ChunkGenerator::new(layout, 1.0, 42, NoiseParams::default())
            .unwrap_or_else(|e| panic!("valid layout rejected: {e}"));
        TerrainWorld::new(generator)
    }

    #[test]
    fn test_new_builds_one_mesh_per_lattice_cell() {
        let world = small_chunk_world();
        assert_eq!(world.meshes().len(), 2);
        assert_eq!(world.lattice(), (2, 1));
        // 8x8 heightfield: 7x7 cells, 2 triangles each.
        assert_eq!(world.mesh((0, 0)).indices.len(), 6 * 7 * 7);
        assert_eq!(world.mesh((1, 0)).vertices.len(), 64);
    }

    #[test]
    fn test_initial_revision_is_one() {
        let world = small_chunk_world();
        assert_eq!(world.revision(), 1);
    }

    #[test]
    fn test_regenerate_all_bumps_revision() {
        let mut world = small_chunk_world();
        world.regenerate_all();
        world.regenerate_all();
        assert_eq!(world.revision(), 3);
    }

    #[test]
    fn test_update_without_edits_is_a_no_op() {
        let mut world = small_chunk_world();
        let before = world.mesh((0, 0)).vertices.clone();
        assert!(!world.update());
        assert!(!world.update());
        assert_eq!(world.revision(), 1);
        assert_eq!(world.mesh((0, 0)).vertices, before);
    }

    #[test]
    fn test_update_detects_parameter_edit() {
        let mut world = small_chunk_world();
        let peak_before = world
            .mesh((0, 0))
            .vertices
            .iter()
            .map(|v| v.position[1])
            .fold(f32::NEG_INFINITY, f32::max);

        world.generator_mut().params_mut().mesh_height *= 2.0;
        assert!(world.update(), "edited params should trigger a rebuild");
        assert_eq!(world.revision(), 2);

        let peak_after = world
            .mesh((0, 0))
            .vertices
            .iter()
            .map(|v| v.position[1])
            .fold(f32::NEG_INFINITY, f32::max);
        assert!(
            peak_after > peak_before,
            "doubling mesh height should raise the peak: {peak_before} -> {peak_after}"
        );
        // Second frame with no further edits settles back to no-op.
        assert!(!world.update());
    }

    #[test]
    fn test_diamond_square_world_has_single_cell() {
        let params = DiamondSquareParams {
            roughness: 5.0,
            seed: 7,
        };
        let generator = DiamondSquareGenerator::with_exponent(4, 1.0, params)
            .unwrap_or_else(|e| panic!("valid exponent rejected: {e}"));
        let world = TerrainWorld::new(generator);
        assert_eq!(world.lattice(), (1, 1));
        assert_eq!(world.meshes().len(), 1);
        // 17x17 grid: 16x16 cells.
        assert_eq!(world.mesh((0, 0)).indices.len(), 6 * 16 * 16);
    }

    #[test]
    fn test_rebuild_follows_generator_reseed() {
        let mut world = small_chunk_world();
        let before = world.mesh((0, 0)).vertices.clone();

        world.generator_mut().reseed(99);
        // Reseeding is not a parameter edit; update() must not notice it.
        assert!(!world.update());
        assert_eq!(world.mesh((0, 0)).vertices, before);

        world.regenerate_all();
        assert_ne!(
            world.mesh((0, 0)).vertices,
            before,
            "new seed should produce different terrain"
        );
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_mesh_outside_lattice_panics() {
        let world = small_chunk_world();
        let _ = world.mesh((2, 0));
    }
}
