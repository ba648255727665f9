// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "letterbox")]
#[command(about = "Headless dual-screen display front-end", long_about = None)]
pub struct Cli {
    /// Settings file, created on first save
    #[arg(long, default_value = "letterbox.json")]
    pub config: PathBuf,

    /// Source image size, WIDTHxHEIGHT
    #[arg(long, default_value = "240x160", value_parser = parse_dimensions)]
    pub source: (u32, u32),

    /// Primary display size, WIDTHxHEIGHT
    #[arg(long, default_value = "1920x1080", value_parser = parse_dimensions)]
    pub tv: (u32, u32),

    /// Secondary display size, WIDTHxHEIGHT
    #[arg(long, default_value = "854x480", value_parser = parse_dimensions)]
    pub drc: (u32, u32),

    /// Screen mode override: 0 pixel-accurate, 1 aspect fit, 2 stretched
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..3))]
    pub mode: Option<u32>,

    /// Crop the border of 256x224 sources
    #[arg(long, overrides_with = "no_crop")]
    pub crop: bool,

    /// Show the border of 256x224 sources, overriding the config
    #[arg(long = "no-crop", overrides_with = "crop")]
    pub no_crop: bool,

    /// Cycle the screen mode this many times and save the result
    #[arg(long, default_value = "0")]
    pub cycle: u32,

    /// Frames to run
    #[arg(long, default_value = "1")]
    pub frames: u32,

    /// Run with the frame limiter off
    #[arg(long = "fast-forward")]
    pub fast_forward: bool,

    /// Disable UI elements and console output
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}

impl Cli {
    /// Border crop requested on the command line, if any
    pub fn border_crop(&self) -> Option<bool> {
        match (self.crop, self.no_crop) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// Parse `WIDTHxHEIGHT`
pub fn parse_dimensions(value: &str) -> Result<(u32, u32), String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {value:?}"))?;
    let width = width.trim().parse::<u32>().map_err(|e| format!("bad width: {e}"))?;
    let height = height.trim().parse::<u32>().map_err(|e| format!("bad height: {e}"))?;
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimensions() {
        assert_eq!(parse_dimensions("256x224"), Ok((256, 224)));
        assert_eq!(parse_dimensions("854X480"), Ok((854, 480)));
        assert!(parse_dimensions("256").is_err());
        assert!(parse_dimensions("ax3").is_err());
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["letterbox"]);
        assert_eq!(cli.source, (240, 160));
        assert_eq!(cli.tv, (1920, 1080));
        assert_eq!(cli.mode, None);
        assert_eq!(cli.frames, 1);
        assert!(!cli.no_ui);
    }

    #[test]
    fn test_mode_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["letterbox", "--mode", "3"]).is_err());
        let cli = Cli::parse_from(["letterbox", "--mode", "2", "--crop"]);
        assert_eq!(cli.mode, Some(2));
        assert_eq!(cli.border_crop(), Some(true));
    }

    #[test]
    fn test_border_crop_flags() {
        assert_eq!(Cli::parse_from(["letterbox"]).border_crop(), None);
        assert_eq!(Cli::parse_from(["letterbox", "--no-crop"]).border_crop(), Some(false));
        // Last flag wins
        let cli = Cli::parse_from(["letterbox", "--crop", "--no-crop"]);
        assert_eq!(cli.border_crop(), Some(false));
        let cli = Cli::parse_from(["letterbox", "--no-crop", "--crop"]);
        assert_eq!(cli.border_crop(), Some(true));
    }
}
