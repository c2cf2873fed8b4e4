//! Midpoint-displacement (diamond-square) heightfield generation.
//!
//! Subdivides a `(2^n + 1)`-sided grid: each round fills square centers
//! from their diagonal corners (diamond step), then edge midpoints from
//! their axis neighbors (square step), with a random offset whose range
//! halves every round. The displacement stream comes from a seeded ChaCha
//! generator, so a given seed always reproduces the same terrain.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::TerrainError;
use crate::generator::HeightfieldGenerator;
use crate::heightfield::Heightfield;

/// Live-tunable parameters for [`DiamondSquareGenerator`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiamondSquareParams {
    /// Initial displacement amplitude, halved every subdivision round.
    /// Negative or NaN values are treated as zero. Default: 7.0.
    pub roughness: f32,
    /// Seed of the displacement stream. Regenerating with an unchanged
    /// seed reproduces the terrain bit for bit; change the seed to roll
    /// a new one. Default: 0.
    pub seed: u64,
}

impl Default for DiamondSquareParams {
    fn default() -> Self {
        Self {
            roughness: 7.0,
            seed: 0,
        }
    }
}

/// Fractal heightfield generator over a single square grid.
///
/// The grid side is fixed at construction and must be `2^n + 1` so the
/// subdivision terminates exactly at single cells. The constructor
/// generates immediately; the heightfield is never observable empty.
pub struct DiamondSquareGenerator {
    side: usize,
    world_scale: f32,
    params: DiamondSquareParams,
    field: Heightfield,
    min_height: f32,
    max_height: f32,
}

impl DiamondSquareGenerator {
    /// Creates a generator over a `side x side` grid and runs the first
    /// generation.
    ///
    /// Fails with [`TerrainError::InvalidGridSide`] unless
    /// `side = 2^n + 1` for some `n >= 1`.
    pub fn new(
        side: usize,
        world_scale: f32,
        params: DiamondSquareParams,
    ) -> Result<Self, TerrainError> {
        if side < 3 || !(side - 1).is_power_of_two() {
            return Err(TerrainError::InvalidGridSide { side });
        }
        let mut generator = Self {
            side,
            world_scale,
            params,
            field: Heightfield::new(side, side),
            min_height: f32::INFINITY,
            max_height: f32::NEG_INFINITY,
        };
        generator.regenerate_field();
        Ok(generator)
    }

    /// Creates a generator with side `2^n + 1`.
    pub fn with_exponent(
        n: u32,
        world_scale: f32,
        params: DiamondSquareParams,
    ) -> Result<Self, TerrainError> {
        Self::new((1_usize << n) + 1, world_scale, params)
    }

    /// Grid side length.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Smallest and largest height assigned during the last generation,
    /// tracked across every cell including the corner seeds.
    pub fn height_range(&self) -> (f32, f32) {
        (self.min_height, self.max_height)
    }

    fn regenerate_field(&mut self) {
        let mut rng = ChaCha8Rng::seed_from_u64(self.params.seed);
        let initial_range = self.params.roughness.max(0.0);
        self.min_height = f32::INFINITY;
        self.max_height = f32::NEG_INFINITY;

        // Seed the four corners with independent draws.
        let last = self.side - 1;
        for (x, z) in [(0, 0), (last, 0), (0, last), (last, last)] {
            let h = rng.random_range(-initial_range..=initial_range);
            self.assign(x, z, h);
        }

        let mut step = self.side - 1;
        let mut range = initial_range;
        while step > 1 {
            let half = step / 2;
            self.diamond_pass(step, half, range, &mut rng);
            self.square_pass(step, half, range, &mut rng);
            step = half;
            range *= 0.5;
        }
    }

    /// Fills every center of a `step x step` square from its four diagonal
    /// corners. Centers always have all four corners in bounds.
    fn diamond_pass(&mut self, step: usize, half: usize, range: f32, rng: &mut ChaCha8Rng) {
        for z in (half..self.side).step_by(step) {
            for x in (half..self.side).step_by(step) {
                let sum = self.field.get(x - half, z - half)
                    + self.field.get(x + half, z - half)
                    + self.field.get(x - half, z + half)
                    + self.field.get(x + half, z + half);
                let offset = rng.random_range(-range..=range);
                self.assign(x, z, sum / 4.0 + offset);
            }
        }
    }

    /// Fills every edge midpoint from its in-bounds axis neighbors.
    ///
    /// Border midpoints have 2 or 3 neighbors; the average divides by the
    /// actual neighbor count, never a fixed 4.
    fn square_pass(&mut self, step: usize, half: usize, range: f32, rng: &mut ChaCha8Rng) {
        for z in (0..self.side).step_by(half) {
            let first_x = (z + half) % step;
            for x in (first_x..self.side).step_by(step) {
                let mut sum = 0.0;
                let mut neighbors = 0;
                if x >= half {
                    sum += self.field.get(x - half, z);
                    neighbors += 1;
                }
                if x + half < self.side {
                    sum += self.field.get(x + half, z);
                    neighbors += 1;
                }
                if z >= half {
                    sum += self.field.get(x, z - half);
                    neighbors += 1;
                }
                if z + half < self.side {
                    sum += self.field.get(x, z + half);
                    neighbors += 1;
                }
                let offset = rng.random_range(-range..=range);
                self.assign(x, z, sum / neighbors as f32 + offset);
            }
        }
    }

    fn assign(&mut self, x: usize, z: usize, height: f32) {
        self.min_height = self.min_height.min(height);
        self.max_height = self.max_height.max(height);
        self.field.set(x, z, height);
    }
}

impl HeightfieldGenerator for DiamondSquareGenerator {
    type Params = DiamondSquareParams;

    fn params(&self) -> &DiamondSquareParams {
        &self.params
    }

    fn params_mut(&mut self) -> &mut DiamondSquareParams {
        &mut self.params
    }

    fn lattice(&self) -> (usize, usize) {
        (1, 1)
    }

    fn world_scale(&self) -> f32 {
        self.world_scale
    }

    fn regenerate(&mut self) {
        self.regenerate_field();
    }

    fn heightfield(&self, coord: (usize, usize)) -> &Heightfield {
        assert_eq!(coord, (0, 0), "diamond-square lattice has a single cell");
        &self.field
    }
}
