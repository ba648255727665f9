/// Width of the source texture the emulator renders into, in texels
pub const TEXTURE_WIDTH: u32 = 256;
/// Height of the source texture the emulator renders into, in texels
pub const TEXTURE_HEIGHT: u32 = 224;

/// Vertex of the textured display quad, laid out for direct upload
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    /// Normalized device coordinates, y up
    pub position: [f32; 2],
    /// Normalized texture coordinates into the 256x224 source texture
    pub tex_coord: [f32; 2],
}

impl QuadVertex {
    pub const fn new(position: [f32; 2], tex_coord: [f32; 2]) -> Self {
        Self { position, tex_coord }
    }
}

/// Four-vertex quad in draw order: bottom-left, bottom-right, top-right, top-left
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TexturedQuad {
    pub vertices: [QuadVertex; 4],
}

impl TexturedQuad {
    /// Raw vertex bytes for a presenter's vertex buffer
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Half-extent of the quad in normalized device coordinates
    pub fn half_extent(&self) -> [f32; 2] {
        self.vertices[2].position
    }

    /// Bottom-right texture coordinate, the used fraction of the source texture
    pub fn tex_extent(&self) -> [f32; 2] {
        self.vertices[1].tex_coord
    }
}
