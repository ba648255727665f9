use crate::types::{TEXTURE_HEIGHT, TEXTURE_WIDTH};

/// Video output of the core for one frame.
///
/// Pixels are packed RGBA words, row-major, `stride` words per row. The image
/// occupies the top-left `width` x `height` corner of the buffer.
#[derive(Debug, Clone, Copy)]
pub struct VideoFrame<'a> {
    pub width: u32,
    pub height: u32,
    pub stride: u32,
    pub pixels: &'a [u32],
}

impl<'a> VideoFrame<'a> {
    pub fn new(width: u32, height: u32, stride: u32, pixels: &'a [u32]) -> Self {
        Self {
            width,
            height,
            stride,
            pixels,
        }
    }

    /// Frame laid out in the fixed 256-wide source texture
    pub fn in_texture(width: u32, height: u32, pixels: &'a [u32]) -> Self {
        Self::new(width, height, TEXTURE_WIDTH, pixels)
    }

    /// Pixel at texel (`x`, `y`), black outside the buffer
    pub fn texel(&self, x: u32, y: u32) -> u32 {
        let index = y as usize * self.stride as usize + x as usize;
        self.pixels.get(index).copied().unwrap_or(0)
    }
}

/// Buffer sized for the largest image the core can produce
pub fn texture_buffer() -> Vec<u32> {
    vec![0; (TEXTURE_WIDTH * TEXTURE_HEIGHT) as usize]
}
