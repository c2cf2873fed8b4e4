//! Procedural heightfield generation: layered gradient-noise chunks and
//! diamond-square fractals behind one [`HeightfieldGenerator`] capability.
//!
//! Everything in this crate is pure CPU math. Generators own their
//! heightfields and their random state (seeded, deterministic); mesh
//! building and GPU upload live in the crates above.

mod chunks;
mod diamond_square;
mod error;
mod generator;
mod heightfield;
mod layered;
mod noise;

pub mod viz;

pub use chunks::{ChunkGenerator, ChunkLayout, MIN_NOISE_SCALE, NoiseParams};
pub use diamond_square::{DiamondSquareGenerator, DiamondSquareParams};
pub use error::TerrainError;
pub use generator::HeightfieldGenerator;
pub use heightfield::Heightfield;
pub use layered::{LayeredNoise, LayeredParams};
pub use noise::{PermutationTable, TABLE_SIZE, perlin};
