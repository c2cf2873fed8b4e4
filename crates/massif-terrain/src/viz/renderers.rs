//! Debug renderers mapping heightfields to color images.

use super::image::DebugImage;
use crate::heightfield::Heightfield;

/// Renders a heightfield as a color-banded elevation image, one pixel per
/// sample.
///
/// `height_range` is the `(min, max)` span to normalize against (a
/// diamond-square generator's recorded range, or the field's own
/// `min_max()`); `water_level` is the world-space height drawn as the
/// coastline. A degenerate range renders everything at mid elevation.
pub fn render_heightfield(
    field: &Heightfield,
    height_range: (f32, f32),
    water_level: f32,
) -> DebugImage {
    let (min, max) = height_range;
    let span = max - min;
    let water_line = if span > 0.0 {
        ((water_level - min) / span).clamp(0.0, 1.0)
    } else {
        0.5
    };

    let mut image = DebugImage::new(field.width() as u32, field.depth() as u32);
    for z in 0..field.depth() {
        for x in 0..field.width() {
            let normalized = if span > 0.0 {
                ((field.get(x, z) - min) / span).clamp(0.0, 1.0)
            } else {
                0.5
            };
            let [r, g, b] = height_to_color(normalized, water_line);
            image.set_pixel(x as u32, z as u32, [r, g, b, 255]);
        }
    }
    image
}

/// Maps a normalized height in `[0, 1]` to an RGB elevation band.
///
/// Below `water_line` the palette is water, deep to shallow; above it the
/// bands run sand, grass, rock, snow, with gradients inside the grass and
/// rock bands.
pub fn height_to_color(normalized: f32, water_line: f32) -> [u8; 3] {
    if normalized < water_line * 0.5 {
        // Deep water.
        [8, 18, 112]
    } else if normalized < water_line {
        // Shallows.
        [24, 84, 188]
    } else if normalized < water_line + 0.03 {
        // Sand at the coastline.
        [214, 198, 136]
    } else if normalized < 0.6 {
        let t = ((normalized - water_line) / (0.6 - water_line)).clamp(0.0, 1.0);
        [
            (36.0 + t * 72.0) as u8,
            (150.0 - t * 36.0) as u8,
            (42.0 + t * 14.0) as u8,
        ]
    } else if normalized < 0.8 {
        let t = (normalized - 0.6) / 0.2;
        [
            (116.0 + t * 34.0) as u8,
            (114.0 - t * 46.0) as u8,
            (56.0 + t * 16.0) as u8,
        ]
    } else {
        let t = ((normalized - 0.8) / 0.2).min(1.0);
        let snow = 160.0 + t * 95.0;
        [snow as u8, snow as u8, snow as u8]
    }
}

/// Renders per-sample surface normals as an RGB image, each axis mapped
/// from `[-1, 1]` to `[0, 255]`.
///
/// Uses the same central-difference normals as the mesh builder, so the
/// image shows exactly what shading will see.
pub fn render_normal_map(field: &Heightfield) -> DebugImage {
    let mut image = DebugImage::new(field.width() as u32, field.depth() as u32);
    for z in 0..field.depth() {
        for x in 0..field.width() {
            let n = field.normal_at(x, z);
            image.set_pixel(
                x as u32,
                z as u32,
                [encode_axis(n.x), encode_axis(n.y), encode_axis(n.z), 255],
            );
        }
    }
    image
}

#[inline]
fn encode_axis(component: f32) -> u8 {
    ((component * 0.5 + 0.5) * 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp_field(side: usize) -> Heightfield {
        let mut field = Heightfield::new(side, side);
        for z in 0..side {
            for x in 0..side {
                field.set(x, z, (x + z) as f32);
            }
        }
        field
    }

    #[test]
    fn test_render_matches_field_dimensions() {
        let field = ramp_field(24);
        let image = render_heightfield(&field, field.min_max().unwrap(), 5.0);
        assert_eq!(image.dimensions(), (24, 24));
        assert_eq!(image.pixels.len(), 24 * 24 * 4);
    }

    #[test]
    fn test_cells_below_water_render_blue() {
        let field = ramp_field(16);
        let image = render_heightfield(&field, field.min_max().unwrap(), 15.0);
        let [r, _, b, _] = image.get_pixel(0, 0);
        assert!(
            b > r,
            "the lowest corner sits under water and should render blue, got r={r} b={b}"
        );
    }

    #[test]
    fn test_ramp_covers_several_bands() {
        let field = ramp_field(32);
        let image = render_heightfield(&field, field.min_max().unwrap(), 8.0);
        assert!(
            image.unique_color_count() > 4,
            "a full ramp should cross water, sand, grass, rock and snow; got {} colors",
            image.unique_color_count()
        );
    }

    #[test]
    fn test_flat_field_renders_one_color() {
        let field = Heightfield::new(8, 8);
        let image = render_heightfield(&field, (0.0, 0.0), 0.0);
        assert_eq!(image.unique_color_count(), 1);
    }

    #[test]
    fn test_height_to_color_band_thresholds() {
        let water_line = 0.3;
        // Deep water below half the water line, shallows up to it.
        assert_eq!(height_to_color(0.1, water_line), [8, 18, 112]);
        assert_eq!(height_to_color(0.25, water_line), [24, 84, 188]);
        // Sand hugs the coastline.
        assert_eq!(height_to_color(0.31, water_line), [214, 198, 136]);
        // Grass band stays green-dominant.
        let [r, g, _] = height_to_color(0.45, water_line);
        assert!(g > r, "grass should be green-dominant, got r={r} g={g}");
        // Snow band is gray and brightens with height.
        let low_snow = height_to_color(0.85, water_line);
        let high_snow = height_to_color(1.0, water_line);
        assert_eq!(low_snow[0], low_snow[1]);
        assert_eq!(low_snow[1], low_snow[2]);
        assert!(
            high_snow[0] > low_snow[0],
            "snow should brighten toward the peak: {low_snow:?} vs {high_snow:?}"
        );
    }

    #[test]
    fn test_normal_map_flat_field_encodes_straight_up() {
        let field = Heightfield::new(8, 8);
        let image = render_normal_map(&field);
        assert_eq!(image.dimensions(), (8, 8));
        // (0, 1, 0) maps to (127, 255, 127).
        assert_eq!(image.get_pixel(4, 4), [127, 255, 127, 255]);
    }

    #[test]
    fn test_normal_map_slope_shifts_x_channel() {
        let mut field = Heightfield::new(8, 8);
        for z in 0..8 {
            for x in 0..8 {
                field.set(x, z, x as f32 * 4.0);
            }
        }
        let image = render_normal_map(&field);
        let [r, _, b, _] = image.get_pixel(4, 4);
        assert!(
            r < 127,
            "a +x slope tilts the normal toward -x, so red drops below center, got {r}"
        );
        assert_eq!(b, 127, "flat z axis keeps blue at center");
    }
}
