pub mod audio;
pub mod canvas;
pub mod controller;
pub mod display_context;
pub mod frame;
pub mod input_adapter;
pub mod lifecycle;
pub mod presenter;
pub mod runner;
pub mod settings;
pub mod timer;

pub use audio::{AudioPost, AudioRing, StereoSample};
pub use canvas::{Canvas, CanvasPresenter};
pub use controller::{Controller, PadButton, PadSource, PadState};
pub use display_context::{DisplayContext, DisplayTarget};
pub use frame::{texture_buffer, VideoFrame};
pub use input_adapter::{default_game_map, default_gui_map, GbaKey, GuiInput, InputMap, MappedKey};
pub use lifecycle::{Lifecycle, SystemEvents, SystemStatus};
pub use presenter::Presenter;
pub use runner::RunnerCallbacks;
pub use settings::{DisplaySettings, SourceGeometry};
pub use timer::FrameSkipper;
