use thiserror::Error;

use crate::core::display_context::DisplayTarget;

/// Width/height pair in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width as f32, height as f32)
    }
}

/// How the source image is fitted into a viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum ScreenMode {
    /// Largest integer magnification that fits
    #[default]
    PixelAccurate = 0,
    /// Largest uniform magnification that fits
    AspectFit = 1,
    /// Fill the viewport, ignoring aspect ratio
    Stretched = 2,
}

impl ScreenMode {
    /// Number of modes, the modulus for cycling
    pub const COUNT: u32 = 3;

    pub const ALL: [ScreenMode; 3] = [
        ScreenMode::PixelAccurate,
        ScreenMode::AspectFit,
        ScreenMode::Stretched,
    ];

    /// Decode a stored mode index, rejecting out-of-range values
    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(self) -> u32 {
        self as u32
    }

    /// Next mode in cycle order, wrapping after `Stretched`
    pub fn next(self) -> Self {
        Self::ALL[((self.index() + 1) % Self::COUNT) as usize]
    }

    /// Menu label
    pub fn label(self) -> &'static str {
        match self {
            ScreenMode::PixelAccurate => "Pixel-Accurate",
            ScreenMode::AspectFit => "Aspect-Ratio Fit",
            ScreenMode::Stretched => "Stretched",
        }
    }
}

/// Half-extents of the destination quad in normalized device coordinates.
///
/// The quad is always centered in the viewport, so a scale of `(1, 1)`
/// covers it edge to edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledRect {
    pub scale_x: f32,
    pub scale_y: f32,
}

impl ScaledRect {
    pub const FULL: ScaledRect = ScaledRect { scale_x: 1.0, scale_y: 1.0 };

    pub fn half_extent(&self) -> glam::Vec2 {
        glam::Vec2::new(self.scale_x, self.scale_y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ScaleError {
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
    #[error("invalid source dimensions {width}x{height}")]
    InvalidDimension { width: f32, height: f32 },
}

/// Fit `source` into `viewport` according to `mode`
pub fn compute_scale(
    source: Size,
    viewport: Size,
    mode: ScreenMode,
    target: DisplayTarget,
) -> Result<ScaledRect, ScaleError> {
    compute_cropped_scale(source, source, viewport, mode, target)
}

/// Fit a source whose visible `content` may be a sub-rectangle of `texture`.
///
/// The magnification factor is chosen from `content`; the resulting extents are
/// those of the whole `texture` at that factor, so a cropped border lands
/// outside the viewport.
pub fn compute_cropped_scale(
    texture: Size,
    content: Size,
    viewport: Size,
    mode: ScreenMode,
    target: DisplayTarget,
) -> Result<ScaledRect, ScaleError> {
    if !viewport.is_valid() {
        return Err(ScaleError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    for size in [texture, content] {
        if !size.is_valid() {
            return Err(ScaleError::InvalidDimension {
                width: size.width,
                height: size.height,
            });
        }
    }

    let limiting = (content.width / viewport.width).max(content.height / viewport.height);

    let factor = match mode {
        ScreenMode::Stretched => return Ok(ScaledRect::FULL),
        ScreenMode::AspectFit => 1.0 / limiting,
        ScreenMode::PixelAccurate => {
            let integer = (1.0 / limiting).floor();
            // Integer steps only on the primary display; the secondary one always fits
            if integer >= 1.0 && target == DisplayTarget::Primary {
                integer
            } else {
                1.0 / limiting
            }
        }
    };

    Ok(ScaledRect {
        scale_x: texture.width / viewport.width * factor,
        scale_y: texture.height / viewport.height * factor,
    })
}
