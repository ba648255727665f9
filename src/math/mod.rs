mod quad;
mod scale;

pub use quad::build_quad;
pub use scale::{compute_cropped_scale, compute_scale, ScaleError, ScaledRect, ScreenMode, Size};
