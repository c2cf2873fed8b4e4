//! Row-major storage for generated terrain heights.

use glam::Vec3;

/// A 2D grid of `f32` heights indexed by `(x, z)`, stored row-major.
///
/// This is the value every generation strategy produces and the mesh
/// builder consumes. It carries no generation state of its own; writing
/// and reading cells is all it does.
#[derive(Clone, Debug, PartialEq)]
pub struct Heightfield {
    width: usize,
    depth: usize,
    heights: Vec<f32>,
}

impl Heightfield {
    /// Creates a zero-filled heightfield with `width` samples along x and
    /// `depth` samples along z.
    pub fn new(width: usize, depth: usize) -> Self {
        Self {
            width,
            depth,
            heights: vec![0.0; width * depth],
        }
    }

    /// Sample count along x.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Sample count along z.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the height at `(x, z)`.
    ///
    /// Both coordinates must be inside the grid.
    #[inline]
    pub fn get(&self, x: usize, z: usize) -> f32 {
        assert!(
            x < self.width && z < self.depth,
            "heightfield access ({x}, {z}) outside {}x{} grid",
            self.width,
            self.depth
        );
        self.heights[z * self.width + x]
    }

    /// Sets the height at `(x, z)`.
    ///
    /// Both coordinates must be inside the grid.
    #[inline]
    pub fn set(&mut self, x: usize, z: usize, height: f32) {
        assert!(
            x < self.width && z < self.depth,
            "heightfield access ({x}, {z}) outside {}x{} grid",
            self.width,
            self.depth
        );
        self.heights[z * self.width + x] = height;
    }

    /// All heights in row-major order (z rows, x within a row).
    pub fn as_slice(&self) -> &[f32] {
        &self.heights
    }

    /// Smallest and largest stored height, or `None` for an empty grid.
    pub fn min_max(&self) -> Option<(f32, f32)> {
        let mut iter = self.heights.iter().copied();
        let first = iter.next()?;
        let (mut min, mut max) = (first, first);
        for h in iter {
            min = min.min(h);
            max = max.max(h);
        }
        Some((min, max))
    }

    /// Outward surface normal at `(x, z)` from central height differences.
    ///
    /// Interior samples use the gradient
    /// `gx = (h(x+1, z) - h(x-1, z)) / 2`, `gz = (h(x, z+1) - h(x, z-1)) / 2`
    /// and return the normalized `(-gx, 1, -gz)`. Border samples, which lack
    /// a neighbor on one side, return straight up.
    ///
    /// The result is always unit length and never NaN; the fixed `1.0` y
    /// component keeps the pre-normalization vector away from zero.
    pub fn normal_at(&self, x: usize, z: usize) -> Vec3 {
        if x == 0 || z == 0 || x + 1 >= self.width || z + 1 >= self.depth {
            return Vec3::Y;
        }
        let gx = (self.get(x + 1, z) - self.get(x - 1, z)) * 0.5;
        let gz = (self.get(x, z + 1) - self.get(x, z - 1)) * 0.5;
        Vec3::new(-gx, 1.0, -gz).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_heightfield_is_zeroed() {
        let field = Heightfield::new(4, 3);
        assert_eq!(field.width(), 4);
        assert_eq!(field.depth(), 3);
        assert_eq!(field.as_slice().len(), 12);
        assert!(field.as_slice().iter().all(|&h| h == 0.0));
    }

    #[test]
    fn test_set_get_roundtrip() {
        let mut field = Heightfield::new(5, 5);
        field.set(2, 3, 7.25);
        assert_eq!(field.get(2, 3), 7.25);
        // Row-major: (x=2, z=3) lands at index 3 * 5 + 2.
        assert_eq!(field.as_slice()[17], 7.25);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_out_of_bounds_get_panics() {
        let field = Heightfield::new(4, 4);
        field.get(4, 0);
    }

    #[test]
    fn test_min_max_scans_all_cells() {
        let mut field = Heightfield::new(3, 2);
        field.set(0, 0, -2.0);
        field.set(2, 1, 9.5);
        assert_eq!(field.min_max(), Some((-2.0, 9.5)));
    }

    #[test]
    fn test_min_max_empty_grid() {
        let field = Heightfield::new(0, 0);
        assert_eq!(field.min_max(), None);
    }

    #[test]
    fn test_border_normals_point_up() {
        let mut field = Heightfield::new(4, 4);
        for z in 0..4 {
            for x in 0..4 {
                field.set(x, z, (x + z) as f32 * 3.0);
            }
        }
        assert_eq!(field.normal_at(0, 2), Vec3::Y);
        assert_eq!(field.normal_at(2, 0), Vec3::Y);
        assert_eq!(field.normal_at(3, 2), Vec3::Y);
        assert_eq!(field.normal_at(2, 3), Vec3::Y);
    }

    #[test]
    fn test_interior_normal_tilts_against_slope() {
        let mut field = Heightfield::new(3, 3);
        // Heights rise along +x, flat along z.
        for z in 0..3 {
            for x in 0..3 {
                field.set(x, z, x as f32 * 2.0);
            }
        }
        let n = field.normal_at(1, 1);
        assert!(n.x < 0.0, "normal should lean against the +x slope, got {n}");
        assert!(n.y > 0.0, "normal should keep an upward component, got {n}");
        assert!((n.z).abs() < 1e-6, "flat z axis should give zero z, got {n}");
        assert!(
            (n.length() - 1.0).abs() < 1e-6,
            "normal must be unit length, got {}",
            n.length()
        );
    }

    #[test]
    fn test_flat_field_normal_is_up() {
        let field = Heightfield::new(5, 5);
        assert_eq!(field.normal_at(2, 2), Vec3::Y);
    }
}
