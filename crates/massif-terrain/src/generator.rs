//! The capability every terrain strategy implements.

use crate::heightfield::Heightfield;

/// A terrain strategy owning a lattice of heightfields that it can rebuild
/// from its current parameters.
///
/// Generation is pure CPU work; implementations hold no graphics state.
/// The world facade drives this trait to detect parameter edits, trigger
/// rebuilds and hand heightfields to the mesh builder.
pub trait HeightfieldGenerator {
    /// The strategy's live-tunable parameter set. UI code writes fields
    /// through [`params_mut`](Self::params_mut); the facade compares
    /// snapshots of this type to detect edits, hence `PartialEq`.
    type Params: Clone + PartialEq;

    /// Current parameters.
    fn params(&self) -> &Self::Params;

    /// Mutable access to the parameters for live edits.
    ///
    /// Writing a value does not regenerate anything by itself; the next
    /// [`regenerate`](Self::regenerate) picks the new values up.
    fn params_mut(&mut self) -> &mut Self::Params;

    /// Lattice dimensions `(x_chunks, z_chunks)`. Strategies producing a
    /// single field report `(1, 1)`.
    fn lattice(&self) -> (usize, usize);

    /// World-space spacing between adjacent samples.
    fn world_scale(&self) -> f32;

    /// Rebuilds every heightfield from the current parameters, discarding
    /// all previous results.
    fn regenerate(&mut self);

    /// The heightfield of one lattice cell.
    ///
    /// `coord` must lie inside [`lattice`](Self::lattice); implementations
    /// panic on out-of-range coordinates.
    fn heightfield(&self, coord: (usize, usize)) -> &Heightfield;
}
