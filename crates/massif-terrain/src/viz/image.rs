//! Flat RGBA pixel buffer for terrain debug rendering.

/// A row-major RGBA8 image built up pixel by pixel on the CPU.
///
/// The raw bytes are public so exporters can hand them to an encoder
/// without a copy.
#[derive(Clone, Debug, PartialEq)]
pub struct DebugImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA bytes; always `width * height * 4` of them.
    pub pixels: Vec<u8>,
}

impl DebugImage {
    /// Creates an all-transparent-black image.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height * 4) as usize],
        }
    }

    /// Writes one pixel. `x` and `y` must be inside the image.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} image",
            self.width,
            self.height
        );
        let idx = ((y * self.width + x) * 4) as usize;
        self.pixels[idx..idx + 4].copy_from_slice(&rgba);
    }

    /// Reads one pixel. `x` and `y` must be inside the image.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} image",
            self.width,
            self.height
        );
        let idx = ((y * self.width + x) * 4) as usize;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of distinct colors in the image, alpha ignored.
    pub fn unique_color_count(&self) -> usize {
        let mut colors = std::collections::HashSet::new();
        for px in self.pixels.chunks_exact(4) {
            colors.insert([px[0], px[1], px[2]]);
        }
        colors.len()
    }

    /// Nearest-neighbor upscale by an integer factor.
    ///
    /// A factor of 0 is treated as 1; terrain grids are small, so exporters
    /// use this to blow images up to an inspectable size.
    pub fn scaled(&self, factor: u32) -> Self {
        let factor = factor.max(1);
        if factor == 1 {
            return self.clone();
        }
        let mut scaled = Self::new(self.width * factor, self.height * factor);
        for y in 0..scaled.height {
            for x in 0..scaled.width {
                scaled.set_pixel(x, y, self.get_pixel(x / factor, y / factor));
            }
        }
        scaled
    }
}
