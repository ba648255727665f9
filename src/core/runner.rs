use anyhow::Result;

use super::audio::AudioPost;
use crate::config::ConfigStore;
use crate::display::DrawOutcome;

/// Callbacks the host GUI runner invokes on the platform front-end
pub trait RunnerCallbacks {
    /// Once, before the first game is loaded
    fn setup(&mut self, config: &ConfigStore);

    /// Once, after the last game is unloaded
    fn teardown(&mut self) {}

    fn game_loaded(&mut self, config: &ConfigStore);

    fn game_unloaded(&mut self) {}

    fn paused(&mut self) {
        self.game_unloaded();
    }

    fn unpaused(&mut self, config: &ConfigStore) {
        self.game_loaded(config);
    }

    /// Before the core runs a frame
    fn prepare_for_frame(&mut self) {}

    /// Present the core's current video buffer at `width` x `height`
    fn draw_frame(&mut self, width: u32, height: u32) -> Result<DrawOutcome>;

    /// Present a still image, such as a save state thumbnail
    fn draw_screenshot(&mut self, pixels: &[u32], width: u32, height: u32) -> Result<DrawOutcome>;

    /// Mask of emulated keys held on the pad
    fn poll_game_input(&mut self) -> u16;

    /// Mask of menu inputs held on the pad
    fn poll_gui_input(&mut self) -> u32;

    fn increment_screen_mode(&mut self, config: &mut ConfigStore);

    fn set_frame_limiter(&mut self, limit: bool);

    /// Queue one buffer of core audio
    fn post_audio(&mut self, left: &[i16], right: &[i16]) -> AudioPost;

    /// Pump system messages; false once the process should exit
    fn running(&mut self) -> bool;
}
