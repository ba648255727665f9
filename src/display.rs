use anyhow::Result;

use crate::core::{DisplayContext, DisplaySettings, DisplayTarget, Presenter, VideoFrame};
use crate::math::{build_quad, compute_cropped_scale, ScaleError, ScaledRect};
use crate::types::TexturedQuad;

/// Result of a draw request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOutcome {
    Drawn,
    /// Frame dropped because its geometry could not be computed
    Skipped(ScaleError),
    /// Frame counted but not drawn while fast forwarding
    Throttled,
    /// Front-end no longer running
    Stopped,
}

/// Geometry computed for one display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub display: DisplayContext,
    pub rect: ScaledRect,
    pub quad: TexturedQuad,
}

/// Display combines the presenter with the two physical displays
pub struct Display<P: Presenter> {
    presenter: P,
    primary: DisplayContext,
    secondary: DisplayContext,
}

impl<P: Presenter> Display<P> {
    /// Create display with the standard viewports
    pub fn new(presenter: P) -> Self {
        Self::with_viewports(presenter, DisplayContext::primary(), DisplayContext::secondary())
    }

    pub fn with_viewports(
        presenter: P,
        primary: DisplayContext,
        secondary: DisplayContext,
    ) -> Self {
        Self {
            presenter,
            primary,
            secondary,
        }
    }

    pub fn context(&self, target: DisplayTarget) -> DisplayContext {
        match target {
            DisplayTarget::Primary => self.primary,
            DisplayTarget::Secondary => self.secondary,
        }
    }

    /// Geometry of `frame` on both displays, in draw order
    pub fn placements(
        &self,
        frame: &VideoFrame<'_>,
        settings: &DisplaySettings,
    ) -> Result<[Placement; 2], ScaleError> {
        let source = settings.effective_source(frame.width, frame.height);
        let place = |display: DisplayContext| -> Result<Placement, ScaleError> {
            let rect = compute_cropped_scale(
                source.texture,
                source.content,
                display.size(),
                settings.screen_mode,
                display.target,
            )?;
            Ok(Placement {
                display,
                rect,
                quad: build_quad(&rect, source.texture),
            })
        };
        Ok([place(self.primary)?, place(self.secondary)?])
    }

    /// Draw one emulated frame on both displays
    pub fn draw_frame(
        &mut self,
        frame: &VideoFrame<'_>,
        settings: &DisplaySettings,
    ) -> Result<DrawOutcome> {
        self.draw(frame, settings, false)
    }

    /// Draw a still image on both displays, clearing each first
    pub fn draw_screenshot(
        &mut self,
        frame: &VideoFrame<'_>,
        settings: &DisplaySettings,
    ) -> Result<DrawOutcome> {
        self.draw(frame, settings, true)
    }

    fn draw(
        &mut self,
        frame: &VideoFrame<'_>,
        settings: &DisplaySettings,
        clear: bool,
    ) -> Result<DrawOutcome> {
        let placements = match self.placements(frame, settings) {
            Ok(placements) => placements,
            Err(err) => {
                log::warn!("skipping {}x{} frame: {err}", frame.width, frame.height);
                return Ok(DrawOutcome::Skipped(err));
            }
        };

        self.presenter.begin_frame()?;
        // end_frame runs even when a draw fails
        let drawn = self.draw_placements(&placements, frame, settings, clear);
        let ended = self.presenter.end_frame();
        drawn?;
        ended?;

        Ok(DrawOutcome::Drawn)
    }

    fn draw_placements(
        &mut self,
        placements: &[Placement],
        frame: &VideoFrame<'_>,
        settings: &DisplaySettings,
        clear: bool,
    ) -> Result<()> {
        for placement in placements {
            if clear {
                self.presenter.clear(&placement.display)?;
            }
            log::debug!(
                "{}: {:?} {}x{} -> scale ({:.4}, {:.4})",
                placement.display.target.name(),
                settings.screen_mode,
                frame.width,
                frame.height,
                placement.rect.scale_x,
                placement.rect.scale_y
            );
            self.presenter.draw_quad(&placement.display, &placement.quad, frame)?;
        }
        Ok(())
    }

    /// Access presenter
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Access mutable presenter
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}
