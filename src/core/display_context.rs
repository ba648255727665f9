use crate::math::Size;

/// Which of the two physical displays a draw is aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayTarget {
    /// External display (TV)
    Primary,
    /// Integrated gamepad display
    Secondary,
}

impl DisplayTarget {
    /// Draw order within a frame
    pub const ALL: [DisplayTarget; 2] = [DisplayTarget::Primary, DisplayTarget::Secondary];

    pub fn is_secondary(self) -> bool {
        self == DisplayTarget::Secondary
    }

    pub fn name(self) -> &'static str {
        match self {
            DisplayTarget::Primary => "tv",
            DisplayTarget::Secondary => "drc",
        }
    }
}

/// Display context - a physical render target and its fixed dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayContext {
    pub target: DisplayTarget,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl DisplayContext {
    pub const PRIMARY_WIDTH: u32 = 1920;
    pub const PRIMARY_HEIGHT: u32 = 1080;
    pub const SECONDARY_WIDTH: u32 = 854;
    pub const SECONDARY_HEIGHT: u32 = 480;

    pub fn new(target: DisplayTarget, width: u32, height: u32) -> Self {
        Self { target, width, height }
    }

    /// 1920x1080 external display
    pub fn primary() -> Self {
        Self::new(DisplayTarget::Primary, Self::PRIMARY_WIDTH, Self::PRIMARY_HEIGHT)
    }

    /// 854x480 gamepad display
    pub fn secondary() -> Self {
        Self::new(DisplayTarget::Secondary, Self::SECONDARY_WIDTH, Self::SECONDARY_HEIGHT)
    }

    /// Dimensions as floating-point viewport size
    pub fn size(&self) -> Size {
        Size::from((self.width, self.height))
    }

    /// Total number of pixels
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_dimensions() {
        let ctx = DisplayContext::primary();
        assert_eq!(ctx.target, DisplayTarget::Primary);
        assert_eq!((ctx.width, ctx.height), (1920, 1080));
    }

    #[test]
    fn test_secondary_dimensions() {
        let ctx = DisplayContext::secondary();
        assert!(ctx.target.is_secondary());
        assert_eq!(ctx.size(), Size::new(854.0, 480.0));
    }

    #[test]
    fn test_pixel_count() {
        let ctx = DisplayContext::new(DisplayTarget::Primary, 100, 100);
        assert_eq!(ctx.pixel_count(), 10_000);
    }

    #[test]
    fn test_target_order_and_names() {
        assert_eq!(DisplayTarget::ALL[0], DisplayTarget::Primary);
        assert_eq!(DisplayTarget::Primary.name(), "tv");
        assert_eq!(DisplayTarget::Secondary.name(), "drc");
    }
}
