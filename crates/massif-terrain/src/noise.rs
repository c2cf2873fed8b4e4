//! 2D gradient (Perlin) noise over a seeded permutation table.
//!
//! This is the deterministic primitive under every layered terrain sampler:
//! a pure function of a sample coordinate and a [`PermutationTable`], with
//! quintic-fade interpolation and a gradient set whose output stays inside
//! `[-1, 1]`.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

/// Number of distinct lattice indices; the noise repeats with this period.
pub const TABLE_SIZE: usize = 256;

// Ken Perlin's published reference permutation of 0..=255.
const REFERENCE_PERM: [u8; TABLE_SIZE] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209, 76,
    132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173,
    186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212, 207, 206,
    59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44, 154, 163,
    70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232,
    178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162,
    241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157, 184, 84, 204,
    176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29, 24, 72, 243, 141,
    128, 195, 78, 66, 215, 61, 156, 180,
];

/// A permutation of `0..=255`, duplicated to 512 entries so the chained
/// corner lookups in [`perlin`] never need an explicit wrap.
///
/// A table is immutable once built; swapping in a new one (a reseed)
/// changes every subsequent noise value.
#[derive(Clone)]
pub struct PermutationTable {
    table: [u8; TABLE_SIZE * 2],
}

impl PermutationTable {
    /// Builds a table by shuffling `0..=255` with a ChaCha stream seeded
    /// from `seed`. The same seed always yields the same table on every
    /// platform.
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut base: [u8; TABLE_SIZE] = std::array::from_fn(|i| i as u8);
        base.shuffle(&mut rng);
        Self::from_base(base)
    }

    /// Ken Perlin's reference permutation, for output that matches the
    /// classic published noise exactly.
    pub fn reference() -> Self {
        Self::from_base(REFERENCE_PERM)
    }

    fn from_base(base: [u8; TABLE_SIZE]) -> Self {
        let mut table = [0; TABLE_SIZE * 2];
        table[..TABLE_SIZE].copy_from_slice(&base);
        table[TABLE_SIZE..].copy_from_slice(&base);
        Self { table }
    }

    #[inline]
    fn get(&self, index: usize) -> usize {
        self.table[index] as usize
    }
}

impl std::fmt::Debug for PermutationTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The 512 raw entries are noise to a log reader; show a fingerprint.
        f.debug_struct("PermutationTable")
            .field("head", &&self.table[..8])
            .finish()
    }
}

/// Samples 2D Perlin noise at `(x, z)`.
///
/// A total, pure function: identical inputs always give identical output,
/// and every input is valid. Lattice coordinates wrap modulo
/// [`TABLE_SIZE`], so arbitrarily large or negative sample positions are
/// safe. Output lies in `[-1, 1]` and is exactly `0.0` on integer lattice
/// points.
pub fn perlin(x: f32, z: f32, table: &PermutationTable) -> f32 {
    let cell_x = x.floor();
    let cell_z = z.floor();

    // Lattice cell, wrapped into the table's period.
    let xi = (cell_x as i64).rem_euclid(TABLE_SIZE as i64) as usize;
    let zi = (cell_z as i64).rem_euclid(TABLE_SIZE as i64) as usize;

    // Fractional position inside the cell, in [0, 1).
    let xf = x - cell_x;
    let zf = z - cell_z;

    let u = fade(xf);
    let v = fade(zf);

    // Hash the four cell corners through the doubled table.
    let corner_00 = table.get(table.get(xi) + zi);
    let corner_01 = table.get(table.get(xi) + zi + 1);
    let corner_10 = table.get(table.get(xi + 1) + zi);
    let corner_11 = table.get(table.get(xi + 1) + zi + 1);

    // Gradient dot products with the offset from each corner.
    let g00 = gradient(corner_00, xf, zf);
    let g10 = gradient(corner_10, xf - 1.0, zf);
    let g01 = gradient(corner_01, xf, zf - 1.0);
    let g11 = gradient(corner_11, xf - 1.0, zf - 1.0);

    let near = lerp(g00, g10, u);
    let far = lerp(g01, g11, u);
    lerp(near, far, v)
}

/// Ken Perlin's quintic fade `6t^5 - 15t^4 + 10t^3`.
///
/// Zero first and second derivatives at both ends make the noise C2
/// continuous across cell borders.
#[inline]
fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Dot product of one corner's gradient with the sample offset.
///
/// The low three hash bits select among the eight directions
/// `(±1, ±1)`, `(±1, 0)` and `(0, ±1)`; this set bounds the interpolated
/// noise to `[-1, 1]`.
#[inline]
fn gradient(hash: usize, x: f32, z: f32) -> f32 {
    match hash & 7 {
        0 => x + z,
        1 => x - z,
        2 => -x + z,
        3 => -x - z,
        4 => x,
        5 => -x,
        6 => z,
        _ => -z,
    }
}
