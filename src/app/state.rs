use image::DynamicImage;

use crate::engine::adjustments::Adjustments;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Original,
    Enhanced,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Original => Self::Enhanced,
            Self::Enhanced => Self::Original,
        }
    }
}

/// The loaded photo and the latest result of the enhancement pipeline.
#[derive(Debug, Clone, Default)]
pub struct ImageStore {
    pub original: Option<DynamicImage>,
    pub enhanced: Option<DynamicImage>,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub images: ImageStore,
    pub adjustments: Adjustments,
    pub view_mode: ViewMode,
    /// Bumped whenever the image on screen may have changed.
    pub display_generation: u64,
    /// Set by an upload, cleared by the first edit or an explicit toggle.
    pub reveal_on_edit: bool,
}

impl AppState {
    pub fn displayed_image(&self) -> Option<&DynamicImage> {
        match self.view_mode {
            ViewMode::Original => self.images.original.as_ref(),
            ViewMode::Enhanced => self.images.enhanced.as_ref(),
        }
    }
}
