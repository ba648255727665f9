use crate::types::{QuadVertex, TexturedQuad, TEXTURE_HEIGHT, TEXTURE_WIDTH};

use super::scale::{ScaledRect, Size};

/// Build the centered display quad for a source image of `source` texels.
///
/// Texture coordinates cover only the part of the 256x224 texture the source
/// occupies, with v flipped so that row 0 of the source lands at the top.
pub fn build_quad(rect: &ScaledRect, source: Size) -> TexturedQuad {
    let extent = rect.half_extent();
    let u = source.width / TEXTURE_WIDTH as f32;
    let v = source.height / TEXTURE_HEIGHT as f32;

    TexturedQuad {
        vertices: [
            QuadVertex::new([-extent.x, -extent.y], [0.0, v]),
            QuadVertex::new([extent.x, -extent.y], [u, v]),
            QuadVertex::new([extent.x, extent.y], [u, 0.0]),
            QuadVertex::new([-extent.x, extent.y], [0.0, 0.0]),
        ],
    }
}
