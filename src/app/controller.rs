use std::path::Path;
use std::time::Instant;

use image::DynamicImage;
use tracing::{debug, info, warn};

use crate::app::error::AppError;
use crate::app::events::AppEvent;
use crate::app::state::{AppState, ViewMode};
use crate::engine::adjustments::{Adjustments, Parameter};
use crate::engine::codec::ImageCodec;
use crate::engine::pipeline::enhance;

pub struct ApplicationController {
    codec: Box<dyn ImageCodec>,
    state: AppState,
    #[cfg(test)]
    enhance_runs: u64,
}

impl ApplicationController {
    pub fn new(codec: Box<dyn ImageCodec>) -> Self {
        Self {
            codec,
            state: AppState::default(),
            #[cfg(test)]
            enhance_runs: 0,
        }
    }

    pub fn adjustments(&self) -> Adjustments {
        self.state.adjustments
    }

    pub fn view_mode(&self) -> ViewMode {
        self.state.view_mode
    }

    pub fn has_image(&self) -> bool {
        self.state.images.original.is_some()
    }

    pub fn displayed_image(&self) -> Option<&DynamicImage> {
        self.state.displayed_image()
    }

    pub fn display_generation(&self) -> u64 {
        self.state.display_generation
    }

    pub fn dispatch(&mut self, event: AppEvent) -> Result<(), AppError> {
        let result = match event {
            AppEvent::SetParameter(parameter, raw) => {
                self.set_parameter(parameter, raw);
                Ok(())
            }
            AppEvent::ToggleView => {
                self.toggle_view();
                Ok(())
            }
            AppEvent::ResetAdjustments => {
                self.reset_adjustments();
                Ok(())
            }
            AppEvent::OpenImage(path) => self.open_image(&path),
            AppEvent::SaveImage(path) => self.save_image(&path),
        };

        if let Err(error) = &result {
            warn!("{error}");
        }
        result
    }

    /// The first edit after an upload switches the preview to the enhanced image.
    pub fn set_parameter(&mut self, parameter: Parameter, raw: u32) {
        if !self.state.adjustments.set(parameter, raw) {
            return;
        }
        if self.state.reveal_on_edit && self.has_image() {
            self.state.reveal_on_edit = false;
            self.state.view_mode = ViewMode::Enhanced;
        }
        self.recompute();
    }

    pub fn toggle_view(&mut self) {
        self.state.reveal_on_edit = false;
        self.state.view_mode = self.state.view_mode.toggled();
        self.state.display_generation += 1;
        debug!(view_mode = ?self.state.view_mode, "view toggled");
    }

    pub fn reset_adjustments(&mut self) {
        self.state.adjustments.reset();
        self.recompute();
    }

    /// Replaces the original image. On failure the current images are kept.
    pub fn open_image(&mut self, path: &Path) -> Result<(), AppError> {
        let image = self.codec.decode(path)?;
        info!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "image loaded"
        );

        self.state.images.original = Some(image);
        self.state.view_mode = ViewMode::Original;
        self.state.reveal_on_edit = true;
        self.state.adjustments.reset();
        self.state.display_generation += 1;
        self.recompute();
        Ok(())
    }

    pub fn enhanced_image(&self) -> Result<&DynamicImage, AppError> {
        self.state
            .images
            .enhanced
            .as_ref()
            .ok_or(AppError::NothingToSave)
    }

    pub fn save_image(&self, path: &Path) -> Result<(), AppError> {
        let enhanced = self.enhanced_image()?;
        self.codec.encode(enhanced, path)?;
        info!(path = %path.display(), "image saved");
        Ok(())
    }

    // The enhanced image is refreshed even while the original is on screen.
    fn recompute(&mut self) {
        let Some(original) = self.state.images.original.as_ref() else {
            return;
        };

        let started = Instant::now();
        let factors = self.state.adjustments.factors();
        self.state.images.enhanced = Some(enhance(original, factors));
        #[cfg(test)]
        {
            self.enhance_runs += 1;
        }
        debug!(
            saturation = factors.saturation,
            contrast = factors.contrast,
            exposure = factors.exposure,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "enhanced image recomputed"
        );

        if self.state.view_mode == ViewMode::Enhanced {
            self.state.display_generation += 1;
        }
    }
}
