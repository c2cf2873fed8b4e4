//! Error types for terrain generator construction.

use thiserror::Error;

/// Errors raised when a terrain generator is constructed with parameters
/// that cannot produce a valid heightfield.
///
/// Live parameter edits after construction never produce these; they are
/// clamped to the nearest generatable value instead.
#[derive(Debug, Error)]
pub enum TerrainError {
    /// Diamond-square subdivision only terminates cleanly on grids whose
    /// side is `2^n + 1` for `n >= 1`.
    #[error("invalid diamond-square grid side {side}: side must be 2^n + 1 with n >= 1")]
    InvalidGridSide {
        /// The rejected side length.
        side: usize,
    },

    /// A chunk lattice needs at least one chunk along each axis.
    #[error("empty chunk lattice {x_chunks}x{z_chunks}: both axes must hold at least one chunk")]
    EmptyLattice {
        /// Requested chunk count along x.
        x_chunks: usize,
        /// Requested chunk count along z.
        z_chunks: usize,
    },

    /// A chunk needs at least 2 samples per axis to form a single quad.
    #[error("chunk dimensions {width}x{depth} too small: both axes need at least 2 samples")]
    ChunkTooSmall {
        /// Requested samples along x.
        width: usize,
        /// Requested samples along z.
        depth: usize,
    },

    /// The noise scale divides sample coordinates and must be positive.
    #[error("invalid noise scale {0}: scale must be finite and > 0")]
    InvalidNoiseScale(f32),

    /// At least one octave is required for a non-zero amplitude sum.
    #[error("octave count must be at least 1")]
    ZeroOctaves,
}
