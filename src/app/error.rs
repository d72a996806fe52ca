use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to open image {path:?}: {message}")]
    Decode { path: PathBuf, message: String },

    #[error("failed to save image {path:?}: {message}")]
    Encode { path: PathBuf, message: String },

    #[error("unsupported image format: {0:?} (use .png, .jpg or .jpeg)")]
    UnsupportedFormat(PathBuf),

    #[error("there is no enhanced image to save, upload an image first")]
    NothingToSave,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to start UI: {0}")]
    Ui(String),
}
