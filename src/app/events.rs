use std::path::PathBuf;

use crate::engine::adjustments::Parameter;

#[derive(Debug, Clone)]
pub enum AppEvent {
    SetParameter(Parameter, u32),
    ToggleView,
    ResetAdjustments,
    OpenImage(PathBuf),
    SaveImage(PathBuf),
}
