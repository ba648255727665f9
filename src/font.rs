//! Metrics and placement for the GUI bitmap font.
//!
//! Glyph and icon cells are stored at half resolution and drawn at 2x, so every
//! metric reported here is twice the table value.

/// Rendered glyph height in pixels
pub const GLYPH_HEIGHT: u32 = 24;
/// Code points covered by the glyph table
pub const GLYPH_COUNT: usize = 128;
/// Substituted for code points outside the table
pub const FALLBACK_GLYPH: char = '?';

const DRAW_SCALE: u32 = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlyphMetric {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IconMetric {
    /// Position in the icon atlas
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Normal,
    MirrorHorizontal,
    MirrorVertical,
}

/// Where and how to draw an icon
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconPlacement {
    /// Top-left corner in pixels
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    /// -1.0 when mirrored along that axis
    pub flip_x: f32,
    pub flip_y: f32,
}

/// Glyph and icon metric tables
#[derive(Debug, Clone)]
pub struct FontMetrics {
    glyphs: Box<[GlyphMetric; GLYPH_COUNT]>,
    icons: Vec<IconMetric>,
}

impl FontMetrics {
    pub fn new(glyphs: [GlyphMetric; GLYPH_COUNT], icons: Vec<IconMetric>) -> Self {
        Self {
            glyphs: Box::new(glyphs),
            icons,
        }
    }

    /// Every glyph `width` x `height` in table units
    pub fn monospace(width: u32, height: u32, icons: Vec<IconMetric>) -> Self {
        Self::new([GlyphMetric { width, height }; GLYPH_COUNT], icons)
    }

    pub fn height(&self) -> u32 {
        GLYPH_HEIGHT
    }

    fn glyph(&self, glyph: char) -> GlyphMetric {
        let index = glyph as usize;
        if index < GLYPH_COUNT {
            self.glyphs[index]
        } else {
            self.glyphs[FALLBACK_GLYPH as usize]
        }
    }

    /// Drawn width of `glyph`
    pub fn glyph_width(&self, glyph: char) -> u32 {
        self.glyph(glyph).width * DRAW_SCALE
    }

    /// Drawn width of a run of text
    pub fn text_width(&self, text: &str) -> u32 {
        text.chars().map(|c| self.glyph_width(c)).sum()
    }

    /// Drawn size of `icon`; 0x0 for icons outside the table
    pub fn icon_size(&self, icon: usize) -> (u32, u32) {
        self.icons
            .get(icon)
            .map_or((0, 0), |m| (m.width * DRAW_SCALE, m.height * DRAW_SCALE))
    }

    /// Place `icon` relative to the anchor (`x`, `y`)
    pub fn icon_placement(
        &self,
        x: i32,
        y: i32,
        h_align: HAlign,
        v_align: VAlign,
        orientation: Orientation,
        icon: usize,
    ) -> Option<IconPlacement> {
        let metric = self.icons.get(icon)?;
        let (width, height) = (metric.width as i32, metric.height as i32);

        let x = match h_align {
            HAlign::Left => x,
            HAlign::Center => x - width,
            HAlign::Right => x - width * 2,
        };
        let y = match v_align {
            VAlign::Top => y,
            VAlign::Center => y - height,
            VAlign::Bottom => y - height * 2,
        };
        let (flip_x, flip_y) = match orientation {
            Orientation::Normal => (1.0, 1.0),
            Orientation::MirrorHorizontal => (-1.0, 1.0),
            Orientation::MirrorVertical => (1.0, -1.0),
        };

        Some(IconPlacement {
            x,
            y,
            width: metric.width * DRAW_SCALE,
            height: metric.height * DRAW_SCALE,
            flip_x,
            flip_y,
        })
    }

    /// Size for an explicitly sized icon draw; zero means the icon's own size
    pub fn icon_draw_size(&self, icon: usize, width: u32, height: u32) -> Option<(u32, u32)> {
        let metric = self.icons.get(icon)?;
        let width = if width == 0 { metric.width * DRAW_SCALE } else { width };
        let height = if height == 0 { metric.height * DRAW_SCALE } else { height };
        Some((width, height))
    }
}
