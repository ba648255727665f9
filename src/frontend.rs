use anyhow::Result;

use crate::config::ConfigStore;
use crate::core::{
    default_game_map, default_gui_map, texture_buffer, AudioPost, AudioRing, DisplaySettings,
    FrameSkipper, GbaKey, GuiInput, InputMap, Lifecycle, PadSource, PadState, Presenter,
    RunnerCallbacks, SystemEvents, VideoFrame,
};
use crate::display::{Display, DrawOutcome};

/// Dual-screen platform front-end driven by the host runner
pub struct Frontend<P: Presenter, I: PadSource, S: SystemEvents> {
    display: Display<P>,
    pad: I,
    system: S,
    settings: DisplaySettings,
    game_map: InputMap<GbaKey>,
    gui_map: InputMap<GuiInput>,
    skipper: FrameSkipper,
    lifecycle: Lifecycle,
    audio: AudioRing,
    video: Vec<u32>,
}

impl<P: Presenter, I: PadSource, S: SystemEvents> Frontend<P, I, S> {
    pub fn new(display: Display<P>, pad: I, system: S) -> Self {
        let settings = DisplaySettings::default();
        Self {
            display,
            pad,
            system,
            skipper: FrameSkipper::new(settings.fast_forward_cap),
            settings,
            game_map: default_game_map(),
            gui_map: default_gui_map(),
            lifecycle: Lifecycle::new(),
            audio: AudioRing::new(),
            video: texture_buffer(),
        }
    }

    pub fn settings(&self) -> &DisplaySettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut DisplaySettings {
        &mut self.settings
    }

    /// Buffer the core renders into, 256 pixels per row
    pub fn video_buffer_mut(&mut self) -> &mut [u32] {
        &mut self.video
    }

    pub fn game_map_mut(&mut self) -> &mut InputMap<GbaKey> {
        &mut self.game_map
    }

    pub fn audio_mut(&mut self) -> &mut AudioRing {
        &mut self.audio
    }

    pub fn display(&self) -> &Display<P> {
        &self.display
    }

    pub fn pad_mut(&mut self) -> &mut I {
        &mut self.pad
    }
}

impl<P: Presenter, I: PadSource, S: SystemEvents> RunnerCallbacks for Frontend<P, I, S> {
    fn setup(&mut self, config: &ConfigStore) {
        self.settings.load_screen_mode(config);
        log::info!("front-end ready, screen mode {}", self.settings.screen_mode.label());
    }

    fn teardown(&mut self) {
        log::info!("front-end teardown after {} frames", self.skipper.frames_seen());
    }

    fn game_loaded(&mut self, config: &ConfigStore) {
        self.settings.load(config);
        self.skipper.set_cap(self.settings.fast_forward_cap);
        log::info!(
            "game loaded: mode {}, border crop {}, fast forward cap {}",
            self.settings.screen_mode.label(),
            self.settings.border_crop,
            self.settings.fast_forward_cap
        );
    }

    fn game_unloaded(&mut self) {
        self.audio.clear();
    }

    fn draw_frame(&mut self, width: u32, height: u32) -> Result<DrawOutcome> {
        if !self.lifecycle.is_running() {
            return Ok(DrawOutcome::Stopped);
        }
        if !self.skipper.tick(self.settings.frame_limiter) {
            return Ok(DrawOutcome::Throttled);
        }

        let settings = self.settings;
        let frame = VideoFrame::in_texture(width, height, &self.video);
        self.display.draw_frame(&frame, &settings)
    }

    fn draw_screenshot(&mut self, pixels: &[u32], width: u32, height: u32) -> Result<DrawOutcome> {
        if !self.lifecycle.is_running() {
            return Ok(DrawOutcome::Stopped);
        }
        let frame = VideoFrame::new(width, height, width, pixels);
        self.display.draw_screenshot(&frame, &self.settings)
    }

    fn poll_game_input(&mut self) -> u16 {
        let state = PadState::read(&mut self.pad);
        // Ten emulated keys, the mask always fits
        self.game_map.key_bits(&state) as u16
    }

    fn poll_gui_input(&mut self) -> u32 {
        let state = PadState::read(&mut self.pad);
        self.gui_map.key_bits(&state)
    }

    fn increment_screen_mode(&mut self, config: &mut ConfigStore) {
        self.settings.cycle_screen_mode(config);
    }

    fn set_frame_limiter(&mut self, limit: bool) {
        if self.settings.frame_limiter != limit {
            log::debug!("frame limiter {}", if limit { "on" } else { "off" });
        }
        self.settings.frame_limiter = limit;
    }

    fn post_audio(&mut self, left: &[i16], right: &[i16]) -> AudioPost {
        self.audio.post(left, right)
    }

    fn running(&mut self) -> bool {
        self.lifecycle.poll(&mut self.system)
    }
}
