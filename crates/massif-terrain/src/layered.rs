//! Multi-octave layered gradient noise sampler.
//!
//! Composites several octaves of the [`perlin`](crate::noise::perlin)
//! kernel, doubling frequency and damping amplitude per octave, to produce
//! terrain with features at many spatial scales.

use crate::noise::{PermutationTable, perlin};

/// Octave composition parameters for [`LayeredNoise`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayeredParams {
    /// Number of octaves to sum. More octaves add finer detail at the cost
    /// of extra kernel evaluations. Default: 8.
    pub octaves: u32,
    /// Frequency multiplier between successive octaves. Default: 2.0.
    pub lacunarity: f32,
    /// Amplitude multiplier between successive octaves. Default: 0.5.
    pub persistence: f32,
}

impl Default for LayeredParams {
    fn default() -> Self {
        Self {
            octaves: 8,
            lacunarity: 2.0,
            persistence: 0.5,
        }
    }
}

/// Sums octaves of gradient noise over one permutation table.
///
/// The first octave samples the kernel at the given coordinate with
/// amplitude 1; each following octave multiplies frequency by `lacunarity`
/// and amplitude by `persistence`.
pub struct LayeredNoise {
    table: PermutationTable,
    params: LayeredParams,
}

impl LayeredNoise {
    /// Creates a sampler over an existing permutation table.
    pub fn new(table: PermutationTable, params: LayeredParams) -> Self {
        Self { table, params }
    }

    /// Creates a sampler with a table shuffled from `seed`.
    pub fn from_seed(seed: u64, params: LayeredParams) -> Self {
        Self::new(PermutationTable::from_seed(seed), params)
    }

    /// Raw octave sum at `(x, z)`.
    ///
    /// The theoretical range is `[-max_amplitude, max_amplitude]` with
    /// `max_amplitude` the geometric sum of the octave amplitudes.
    pub fn sample(&self, x: f32, z: f32) -> f32 {
        let mut total = 0.0;
        let mut frequency = 1.0;
        let mut amplitude = 1.0;

        for _ in 0..self.params.octaves {
            let noise_val = perlin(x * frequency, z * frequency, &self.table);
            total += noise_val * amplitude;

            frequency *= self.params.lacunarity;
            amplitude *= self.params.persistence;
        }

        total
    }

    /// Sum of all octave amplitudes, `Σ persistence^i` for
    /// `i in 0..octaves`.
    ///
    /// Divides raw samples to normalize them toward `[-1, 1]`.
    pub fn max_amplitude(&self) -> f32 {
        let mut sum = 0.0;
        let mut amplitude = 1.0;
        for _ in 0..self.params.octaves {
            sum += amplitude;
            amplitude *= self.params.persistence;
        }
        sum
    }

    /// Current octave parameters.
    pub fn params(&self) -> &LayeredParams {
        &self.params
    }

    /// Replaces the permutation table with one shuffled from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.table = PermutationTable::from_seed(seed);
    }
}
