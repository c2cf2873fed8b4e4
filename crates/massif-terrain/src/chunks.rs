//! Chunked terrain generation from layered gradient noise.
//!
//! A fixed lattice of `chunk_width x chunk_depth` heightfields, each
//! generated independently from octave sums over one shared permutation
//! table. Adjacent chunks sample overlapping world coordinates along their
//! shared border, so the lattice tiles without seams.

use glam::Vec3;

use crate::error::TerrainError;
use crate::generator::HeightfieldGenerator;
use crate::heightfield::Heightfield;
use crate::layered::{LayeredNoise, LayeredParams};
use crate::noise::PermutationTable;

/// Smallest noise scale a live edit can reach; the scale divides sample
/// coordinates, so zero would blow the frequency up to infinity.
pub const MIN_NOISE_SCALE: f32 = 1e-3;

/// Fixed shape of the chunk lattice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChunkLayout {
    /// Chunk count along x. Default: 1.
    pub x_chunks: usize,
    /// Chunk count along z. Default: 1.
    pub z_chunks: usize,
    /// Samples per chunk along x. Default: 256.
    pub chunk_width: usize,
    /// Samples per chunk along z. Default: 256.
    pub chunk_depth: usize,
}

impl Default for ChunkLayout {
    fn default() -> Self {
        Self {
            x_chunks: 1,
            z_chunks: 1,
            chunk_width: 256,
            chunk_depth: 256,
        }
    }
}

impl ChunkLayout {
    /// Checks that the lattice holds at least one chunk per axis and each
    /// chunk at least one quad per axis.
    pub fn validate(&self) -> Result<(), TerrainError> {
        if self.x_chunks == 0 || self.z_chunks == 0 {
            return Err(TerrainError::EmptyLattice {
                x_chunks: self.x_chunks,
                z_chunks: self.z_chunks,
            });
        }
        if self.chunk_width < 2 || self.chunk_depth < 2 {
            return Err(TerrainError::ChunkTooSmall {
                width: self.chunk_width,
                depth: self.chunk_depth,
            });
        }
        Ok(())
    }
}

/// Live-tunable parameters for [`ChunkGenerator`].
///
/// UI sliders write these fields directly; out-of-range values are clamped
/// by [`sanitized`](NoiseParams::sanitized) when the next generation runs,
/// so any slider position still yields a renderable terrain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseParams {
    /// Octaves to sum per sample. Clamped to at least 1. Default: 8.
    pub octaves: u32,
    /// Divides sample coordinates; larger values zoom the terrain out.
    /// Clamped to at least [`MIN_NOISE_SCALE`]. Default: 128.0.
    pub noise_scale: f32,
    /// Amplitude falloff per octave. Clamped to at least 0. Default: 0.5.
    pub persistence: f32,
    /// Frequency growth per octave. Clamped to at least 1. Default: 2.0.
    pub lacunarity: f32,
    /// Vertical scale applied to the shaped noise. Default: 64.0.
    pub mesh_height: f32,
    /// Water line as a fraction of `mesh_height`; heights are floored at
    /// `water_height * 0.5 * mesh_height`. Clamped to `[0, 1]`.
    /// Default: 0.1.
    pub water_height: f32,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            octaves: 8,
            noise_scale: 128.0,
            persistence: 0.5,
            lacunarity: 2.0,
            mesh_height: 64.0,
            water_height: 0.1,
        }
    }
}

impl NoiseParams {
    /// Construction-time validation. Rejects values a fresh generator must
    /// not start from; later live edits are clamped instead of rejected.
    pub fn validate(&self) -> Result<(), TerrainError> {
        if self.octaves == 0 {
            return Err(TerrainError::ZeroOctaves);
        }
        if !(self.noise_scale > 0.0) || !self.noise_scale.is_finite() {
            return Err(TerrainError::InvalidNoiseScale(self.noise_scale));
        }
        Ok(())
    }

    /// The nearest generatable parameter set.
    pub fn sanitized(&self) -> Self {
        Self {
            octaves: self.octaves.max(1),
            noise_scale: self.noise_scale.max(MIN_NOISE_SCALE),
            persistence: self.persistence.max(0.0),
            lacunarity: self.lacunarity.max(1.0),
            mesh_height: self.mesh_height,
            water_height: self.water_height.clamp(0.0, 1.0),
        }
    }

    fn octave_params(&self) -> LayeredParams {
        LayeredParams {
            octaves: self.octaves,
            lacunarity: self.lacunarity,
            persistence: self.persistence,
        }
    }
}

/// Terrain generator over a lattice of noise chunks.
///
/// The lattice shape and world seed are fixed at construction (use
/// [`reseed`](ChunkGenerator::reseed) to swap the noise field);
/// [`NoiseParams`] stay editable for the whole lifetime. The constructor
/// generates every chunk immediately.
pub struct ChunkGenerator {
    layout: ChunkLayout,
    world_scale: f32,
    seed: u64,
    table: PermutationTable,
    params: NoiseParams,
    /// One heightfield per lattice cell, row-major by `(cz, cx)`.
    chunks: Vec<Heightfield>,
}

impl ChunkGenerator {
    /// Creates a generator and runs the first full generation pass.
    pub fn new(
        layout: ChunkLayout,
        world_scale: f32,
        seed: u64,
        params: NoiseParams,
    ) -> Result<Self, TerrainError> {
        layout.validate()?;
        params.validate()?;
        let chunks = (0..layout.x_chunks * layout.z_chunks)
            .map(|_| Heightfield::new(layout.chunk_width, layout.chunk_depth))
            .collect();
        let mut generator = Self {
            layout,
            world_scale,
            seed,
            table: PermutationTable::from_seed(seed),
            params,
            chunks,
        };
        generator.generate_all_chunks();
        Ok(generator)
    }

    /// The lattice shape.
    pub fn layout(&self) -> &ChunkLayout {
        &self.layout
    }

    /// The world seed the permutation table was shuffled from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Vertical scale currently applied to shaped noise.
    pub fn mesh_height(&self) -> f32 {
        self.params.mesh_height
    }

    /// World-space height of the water plane, the floor every generated
    /// height is clamped to.
    pub fn water_level(&self) -> f32 {
        let p = self.params.sanitized();
        p.water_height * 0.5 * p.mesh_height
    }

    /// World-space translation of chunk `(cx, cz)`.
    ///
    /// Offsets advance by `(side - 1)` samples so a chunk's first column
    /// lands exactly on its neighbor's last one.
    pub fn chunk_translation(&self, cx: usize, cz: usize) -> Vec3 {
        Vec3::new(
            (cx * (self.layout.chunk_width - 1)) as f32 * self.world_scale,
            0.0,
            (cz * (self.layout.chunk_depth - 1)) as f32 * self.world_scale,
        )
    }

    /// Replaces the permutation table with one shuffled from `seed`.
    ///
    /// Existing chunks keep their old heights until the next
    /// [`regenerate`](HeightfieldGenerator::regenerate).
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.table = PermutationTable::from_seed(seed);
    }

    /// The normalized noise map of one chunk, before height shaping.
    ///
    /// Each sample is `(octave_sum + 1) / max_amplitude`, which lands
    /// roughly in `[0, 1]` without a hard guarantee. Kept as its own stage
    /// so the pre-shaping surface can be inspected and tested directly.
    ///
    /// `cx`/`cz` must lie inside the lattice.
    pub fn noise_map(&self, cx: usize, cz: usize) -> Heightfield {
        self.assert_in_lattice(cx, cz);
        let p = self.params.sanitized();
        let sampler = LayeredNoise::new(self.table.clone(), p.octave_params());
        let max_amplitude = sampler.max_amplitude();

        // Offsetting by (side - 1) makes border samples of adjacent chunks
        // hit identical world coordinates, which is what keeps the lattice
        // seamless.
        let x_offset = (cx * (self.layout.chunk_width - 1)) as f32;
        let z_offset = (cz * (self.layout.chunk_depth - 1)) as f32;

        let mut map = Heightfield::new(self.layout.chunk_width, self.layout.chunk_depth);
        for z in 0..self.layout.chunk_depth {
            for x in 0..self.layout.chunk_width {
                let sample_x = (x as f32 + x_offset) / p.noise_scale;
                let sample_z = (z as f32 + z_offset) / p.noise_scale;
                let raw = sampler.sample(sample_x, sample_z);
                map.set(x, z, (raw + 1.0) / max_amplitude);
            }
        }
        map
    }

    /// Regenerates one chunk from the current parameters.
    ///
    /// `cx`/`cz` must lie inside the lattice.
    pub fn generate_chunk(&mut self, cx: usize, cz: usize) {
        let p = self.params.sanitized();
        let map = self.noise_map(cx, cz);
        let floor = p.water_height * 0.5 * p.mesh_height;

        let field = &mut self.chunks[cz * self.layout.x_chunks + cx];
        for z in 0..map.depth() {
            for x in 0..map.width() {
                // Cubing biases toward flat lowlands with sharp peaks; the
                // 1.1 factor lets the tallest features overshoot mesh_height.
                let eased = (map.get(x, z) * 1.1).powf(3.0) * p.mesh_height;
                field.set(x, z, eased.max(floor));
            }
        }
    }

    /// Regenerates every chunk in the lattice.
    pub fn generate_all_chunks(&mut self) {
        for cz in 0..self.layout.z_chunks {
            for cx in 0..self.layout.x_chunks {
                self.generate_chunk(cx, cz);
            }
        }
    }

    fn assert_in_lattice(&self, cx: usize, cz: usize) {
        assert!(
            cx < self.layout.x_chunks && cz < self.layout.z_chunks,
            "chunk ({cx}, {cz}) outside {}x{} lattice",
            self.layout.x_chunks,
            self.layout.z_chunks
        );
    }
}

impl HeightfieldGenerator for ChunkGenerator {
    type Params = NoiseParams;

    fn params(&self) -> &NoiseParams {
        &self.params
    }

    fn params_mut(&mut self) -> &mut NoiseParams {
        &mut self.params
    }

    fn lattice(&self) -> (usize, usize) {
        (self.layout.x_chunks, self.layout.z_chunks)
    }

    fn world_scale(&self) -> f32 {
        self.world_scale
    }

    fn regenerate(&mut self) {
        self.generate_all_chunks();
    }

    fn heightfield(&self, coord: (usize, usize)) -> &Heightfield {
        let (cx, cz) = coord;
        self.assert_in_lattice(cx, cz);
        &self.chunks[cz * self.layout.x_chunks + cx]
    }
}
