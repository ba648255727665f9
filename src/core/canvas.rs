use anyhow::{bail, Result};

use super::display_context::{DisplayContext, DisplayTarget};
use super::frame::VideoFrame;
use super::presenter::Presenter;
use crate::types::{TexturedQuad, TEXTURE_HEIGHT, TEXTURE_WIDTH};

/// Black, fully opaque
pub const CLEAR_COLOR: u32 = 0xff00_0000;

/// CPU framebuffer of one display
#[derive(Clone)]
pub struct Canvas {
    /// Packed RGBA pixels
    pixels: Vec<u32>,
    width: u32,
    height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![CLEAR_COLOR; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Canvas sized to `display`
    pub fn for_display(display: &DisplayContext) -> Self {
        Self {
            pixels: vec![CLEAR_COLOR; display.pixel_count()],
            width: display.width,
            height: display.height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Pixel data as bytes, four per pixel
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    /// Fill the canvas with `color`
    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Set single pixel
    fn set_pixel(&mut self, x: u32, y: u32, color: u32) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Rasterize `quad` with nearest-texel sampling from `frame`.
    ///
    /// A pixel is covered when its center lies inside the quad. Texel lookups
    /// clamp to the edge of the source texture.
    pub fn draw_quad(&mut self, quad: &TexturedQuad, frame: &VideoFrame<'_>) {
        let [half_w, half_h] = quad.half_extent();
        let [tex_u, tex_v] = quad.tex_extent();

        let width = self.width as f32;
        let height = self.height as f32;
        let left = (1.0 - half_w) * 0.5 * width;
        let right = (1.0 + half_w) * 0.5 * width;
        let top = (1.0 - half_h) * 0.5 * height;
        let bottom = (1.0 + half_h) * 0.5 * height;

        let (x0, x1) = covered_span(left, right, self.width);
        let (y0, y1) = covered_span(top, bottom, self.height);

        for y in y0..y1 {
            let v = (y as f32 + 0.5 - top) / (bottom - top) * tex_v;
            let texel_y = texel_index(v, TEXTURE_HEIGHT);
            for x in x0..x1 {
                let u = (x as f32 + 0.5 - left) / (right - left) * tex_u;
                let texel_x = texel_index(u, TEXTURE_WIDTH);
                self.set_pixel(x, y, frame.texel(texel_x, texel_y));
            }
        }
    }
}

/// Pixel indices whose centers fall in `[start, end)`, clipped to `0..limit`
fn covered_span(start: f32, end: f32, limit: u32) -> (u32, u32) {
    let first = (start - 0.5).ceil().clamp(0.0, limit as f32) as u32;
    let last = (end - 0.5).ceil().clamp(0.0, limit as f32) as u32;
    (first, last.max(first))
}

fn texel_index(coord: f32, size: u32) -> u32 {
    ((coord * size as f32) as u32).min(size - 1)
}

/// Reference presenter that renders both displays into CPU canvases
pub struct CanvasPresenter {
    primary: Canvas,
    secondary: Canvas,
    frames_presented: u64,
    in_frame: bool,
}

impl CanvasPresenter {
    pub fn new(primary: &DisplayContext, secondary: &DisplayContext) -> Self {
        Self {
            primary: Canvas::for_display(primary),
            secondary: Canvas::for_display(secondary),
            frames_presented: 0,
            in_frame: false,
        }
    }

    pub fn canvas(&self, target: DisplayTarget) -> &Canvas {
        match target {
            DisplayTarget::Primary => &self.primary,
            DisplayTarget::Secondary => &self.secondary,
        }
    }

    fn canvas_for(&mut self, display: &DisplayContext) -> Result<&mut Canvas> {
        let canvas = match display.target {
            DisplayTarget::Primary => &mut self.primary,
            DisplayTarget::Secondary => &mut self.secondary,
        };
        if (canvas.width, canvas.height) != (display.width, display.height) {
            bail!(
                "{} canvas is {}x{}, display is {}x{}",
                display.target.name(),
                canvas.width,
                canvas.height,
                display.width,
                display.height
            );
        }
        Ok(canvas)
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl Presenter for CanvasPresenter {
    fn begin_frame(&mut self) -> Result<()> {
        if self.in_frame {
            bail!("begin_frame called twice without end_frame");
        }
        self.in_frame = true;
        Ok(())
    }

    fn clear(&mut self, display: &DisplayContext) -> Result<()> {
        self.canvas_for(display)?.clear(CLEAR_COLOR);
        Ok(())
    }

    fn draw_quad(
        &mut self,
        display: &DisplayContext,
        quad: &TexturedQuad,
        frame: &VideoFrame<'_>,
    ) -> Result<()> {
        self.canvas_for(display)?.draw_quad(quad, frame);
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        if !self.in_frame {
            bail!("end_frame called without begin_frame");
        }
        self.in_frame = false;
        self.frames_presented += 1;
        Ok(())
    }
}
