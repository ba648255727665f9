pub mod cli;
pub mod config;
pub mod core;
pub mod display;
pub mod font;
pub mod frontend;
pub mod math;
pub mod types;

pub use config::{ConfigError, ConfigStore};
pub use display::{Display, DrawOutcome};
pub use frontend::Frontend;
pub use math::{compute_cropped_scale, compute_scale, ScaleError, ScaledRect, ScreenMode, Size};
