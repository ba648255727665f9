use crate::config::ConfigStore;
use crate::math::{ScreenMode, Size};

pub const SCREEN_MODE_KEY: &str = "screenMode";
pub const BORDER_CROP_KEY: &str = "sgb.borderCrop";
pub const FAST_FORWARD_CAP_KEY: &str = "fastForwardCap";

/// Padded source size produced when a border is rendered around the screen
pub const BORDERED_SOURCE: (u32, u32) = (256, 224);
/// Visible screen inside the border
pub const CROPPED_CONTENT: (u32, u32) = (160, 144);

pub const DEFAULT_FAST_FORWARD_CAP: u32 = 10;

/// Choices offered for the fast-forward cap
pub const FAST_FORWARD_CAPS: [u32; 16] = [2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 20, 30];

/// Source dimensions fed to the scaling policy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceGeometry {
    /// Full size of the image in the source texture
    pub texture: Size,
    /// Part of it that must fit on screen
    pub content: Size,
}

impl SourceGeometry {
    pub fn is_cropped(&self) -> bool {
        self.texture != self.content
    }
}

/// Display and pacing settings shared by every render call.
///
/// `Copy` so that a renderer can take a per-frame snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplaySettings {
    pub screen_mode: ScreenMode,
    pub border_crop: bool,
    pub frame_limiter: bool,
    pub fast_forward_cap: u32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            screen_mode: ScreenMode::default(),
            border_crop: false,
            frame_limiter: true,
            fast_forward_cap: DEFAULT_FAST_FORWARD_CAP,
        }
    }
}

impl DisplaySettings {
    /// Apply recognised keys from `config`, leaving the rest untouched
    pub fn load(&mut self, config: &ConfigStore) {
        self.load_screen_mode(config);

        if let Some(crop) = config.get_bool(BORDER_CROP_KEY) {
            self.border_crop = crop;
        }

        if let Some(cap) = config.get_uint(FAST_FORWARD_CAP_KEY) {
            if cap == 0 {
                log::warn!("ignoring {FAST_FORWARD_CAP_KEY} = 0");
            } else {
                self.fast_forward_cap = cap;
            }
        }
    }

    /// Read only the screen mode, as done on setup
    pub fn load_screen_mode(&mut self, config: &ConfigStore) {
        let Some(index) = config.get_uint(SCREEN_MODE_KEY) else {
            return;
        };
        match ScreenMode::from_index(index) {
            Some(mode) => self.screen_mode = mode,
            None => log::warn!("ignoring out-of-range {SCREEN_MODE_KEY} = {index}"),
        }
    }

    /// Advance to the next screen mode and record it in `config`
    pub fn cycle_screen_mode(&mut self, config: &mut ConfigStore) -> ScreenMode {
        self.screen_mode = self.screen_mode.next();
        config.set_uint(SCREEN_MODE_KEY, self.screen_mode.index());
        log::info!("screen mode: {}", self.screen_mode.label());
        self.screen_mode
    }

    /// Source sizes after applying the border crop
    pub fn effective_source(&self, width: u32, height: u32) -> SourceGeometry {
        let texture = Size::from((width, height));
        let content = if self.border_crop && (width, height) == BORDERED_SOURCE {
            Size::from(CROPPED_CONTENT)
        } else {
            texture
        };
        SourceGeometry { texture, content }
    }
}

/// Extra option exposed in the runner's settings menu
#[derive(Debug, Clone, PartialEq)]
pub struct MenuOption {
    pub title: &'static str,
    pub key: &'static str,
    /// Default state index
    pub default_state: usize,
    /// State labels and the value each one stores
    pub states: Vec<(String, u32)>,
}

/// Options this front-end adds to the runner's settings menu
pub fn menu_options() -> Vec<MenuOption> {
    vec![
        MenuOption {
            title: "Screen mode",
            key: SCREEN_MODE_KEY,
            default_state: ScreenMode::default().index() as usize,
            states: ScreenMode::ALL
                .iter()
                .map(|mode| (mode.label().to_owned(), mode.index()))
                .collect(),
        },
        MenuOption {
            title: "Fast forward cap",
            key: FAST_FORWARD_CAP_KEY,
            default_state: 7,
            states: FAST_FORWARD_CAPS.iter().map(|cap| (cap.to_string(), *cap)).collect(),
        },
    ]
}
