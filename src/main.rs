use anyhow::{Context, Result};
use clap::Parser;

use letterbox::cli::Cli;
use letterbox::config::ConfigStore;
use letterbox::core::settings::{BORDER_CROP_KEY, SCREEN_MODE_KEY};
use letterbox::core::{
    CanvasPresenter, DisplayContext, DisplayTarget, PadSource, RunnerCallbacks, SystemEvents,
    SystemStatus, VideoFrame,
};
use letterbox::display::{Display, DrawOutcome};
use letterbox::frontend::Frontend;
use letterbox::types::{TEXTURE_HEIGHT, TEXTURE_WIDTH};

/// Pad with nothing held
struct IdlePad;

impl PadSource for IdlePad {
    fn read_hold(&mut self) -> Option<u32> {
        Some(0)
    }
}

/// Stays in the foreground for a fixed number of frames, then exits
struct FrameBudget {
    remaining: u32,
}

impl SystemEvents for FrameBudget {
    fn process_messages(&mut self) -> SystemStatus {
        if self.remaining == 0 {
            return SystemStatus::Exiting;
        }
        self.remaining -= 1;
        SystemStatus::InForeground
    }

    fn release_foreground(&mut self) {}
}

/// Checkerboard of 8x8 cells so that scaling is visible in the canvases
fn fill_test_pattern(buffer: &mut [u32], width: u32, height: u32) {
    for y in 0..height.min(TEXTURE_HEIGHT) {
        for x in 0..width.min(TEXTURE_WIDTH) {
            let light = ((x / 8) + (y / 8)) % 2 == 0;
            buffer[(y * TEXTURE_WIDTH + x) as usize] =
                if light { 0xffff_ffff } else { 0xff40_4040 };
        }
    }
}

#[derive(Debug, Default)]
struct Tally {
    drawn: u32,
    throttled: u32,
    skipped: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = ConfigStore::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(mode) = cli.mode {
        config.set_uint(SCREEN_MODE_KEY, mode);
    }
    if let Some(crop) = cli.border_crop() {
        config.set_bool(BORDER_CROP_KEY, crop);
    }

    let primary = DisplayContext::new(DisplayTarget::Primary, cli.tv.0, cli.tv.1);
    let secondary = DisplayContext::new(DisplayTarget::Secondary, cli.drc.0, cli.drc.1);
    let presenter = CanvasPresenter::new(&primary, &secondary);
    let display = Display::with_viewports(presenter, primary, secondary);
    let mut frontend = Frontend::new(display, IdlePad, FrameBudget { remaining: cli.frames });

    frontend.setup(&config);
    frontend.game_loaded(&config);
    frontend.set_frame_limiter(!cli.fast_forward);

    for _ in 0..cli.cycle {
        frontend.increment_screen_mode(&mut config);
    }
    if cli.cycle > 0 {
        config.save().context("saving settings")?;
    }

    let (width, height) = cli.source;
    fill_test_pattern(frontend.video_buffer_mut(), width, height);

    let mut tally = Tally::default();
    while frontend.running() {
        match frontend.draw_frame(width, height)? {
            DrawOutcome::Drawn => tally.drawn += 1,
            DrawOutcome::Throttled => tally.throttled += 1,
            DrawOutcome::Skipped(_) => tally.skipped += 1,
            DrawOutcome::Stopped => break,
        }
    }
    frontend.teardown();

    if cli.no_ui {
        return Ok(());
    }

    let settings = *frontend.settings();
    println!("mode: {} (crop {})", settings.screen_mode.label(), settings.border_crop);
    match frontend
        .display()
        .placements(&VideoFrame::in_texture(width, height, &[]), &settings)
    {
        Ok(placements) => {
            for placement in placements {
                let display = placement.display;
                println!(
                    "{:>3} {}x{}: scale ({:.4}, {:.4}) -> {:.1}x{:.1} px",
                    display.target.name(),
                    display.width,
                    display.height,
                    placement.rect.scale_x,
                    placement.rect.scale_y,
                    placement.rect.scale_x * display.width as f32,
                    placement.rect.scale_y * display.height as f32,
                );
            }
        }
        Err(err) => println!("no geometry: {err}"),
    }
    println!(
        "frames: {} drawn, {} throttled, {} skipped",
        tally.drawn, tally.throttled, tally.skipped
    );

    Ok(())
}
