use std::fs;
use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader};
use tempfile::NamedTempFile;

use crate::app::error::AppError;

pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
    Unsupported,
}

impl ImageKind {
    fn format(self) -> Option<ImageFormat> {
        match self {
            Self::Png => Some(ImageFormat::Png),
            Self::Jpeg => Some(ImageFormat::Jpeg),
            Self::Unsupported => None,
        }
    }
}

pub fn detect_image_kind(path: &Path) -> ImageKind {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return ImageKind::Unsupported;
    };
    match ext.to_ascii_lowercase().as_str() {
        "png" => ImageKind::Png,
        "jpg" | "jpeg" => ImageKind::Jpeg,
        _ => ImageKind::Unsupported,
    }
}

pub trait ImageCodec {
    fn decode(&self, path: &Path) -> Result<DynamicImage, AppError>;

    fn encode(&self, image: &DynamicImage, path: &Path) -> Result<(), AppError>;
}

#[derive(Debug, Default)]
pub struct ImageCrateCodec;

impl ImageCodec for ImageCrateCodec {
    fn decode(&self, path: &Path) -> Result<DynamicImage, AppError> {
        let decode_error = |message: String| AppError::Decode {
            path: path.to_path_buf(),
            message,
        };

        ImageReader::open(path)
            .map_err(|error| decode_error(error.to_string()))?
            .with_guessed_format()
            .map_err(|error| decode_error(error.to_string()))?
            .decode()
            .map_err(|error| decode_error(error.to_string()))
    }

    /// Encodes into a temporary file next to `path` and renames it into place,
    /// so a failed encode never leaves a truncated file at the destination.
    fn encode(&self, image: &DynamicImage, path: &Path) -> Result<(), AppError> {
        let format = detect_image_kind(path)
            .format()
            .ok_or_else(|| AppError::UnsupportedFormat(path.to_path_buf()))?;
        let encode_error = |message: String| AppError::Encode {
            path: path.to_path_buf(),
            message,
        };

        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(directory)?;
        let mut staging = NamedTempFile::new_in(directory)?;

        // JPEG has no alpha channel.
        let result = if format == ImageFormat::Jpeg && image.color().has_alpha() {
            DynamicImage::ImageRgb8(image.to_rgb8()).write_to(staging.as_file_mut(), format)
        } else {
            image.write_to(staging.as_file_mut(), format)
        };
        result.map_err(|error| encode_error(error.to_string()))?;

        staging
            .persist(path)
            .map_err(|error| encode_error(error.error.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb, Rgba, RgbaImage};
    use tempfile::TempDir;

    #[test]
    fn detect_image_kind_handles_supported_formats() {
        assert_eq!(detect_image_kind(Path::new("a.png")), ImageKind::Png);
        assert_eq!(detect_image_kind(Path::new("a.PNG")), ImageKind::Png);
        assert_eq!(detect_image_kind(Path::new("a.jpg")), ImageKind::Jpeg);
        assert_eq!(detect_image_kind(Path::new("a.jpeg")), ImageKind::Jpeg);
        assert_eq!(
            detect_image_kind(Path::new("a.bmp")),
            ImageKind::Unsupported
        );
        assert_eq!(detect_image_kind(Path::new("noext")), ImageKind::Unsupported);
    }

    #[test]
    fn png_roundtrip_preserves_pixels() {
        let dir = TempDir::new().expect("tempdir should be created");
        let path = dir.path().join("sample.png");
        let img = ImageBuffer::from_fn(32, 16, |x, y| Rgb([x as u8, y as u8, 200_u8]));
        let original = DynamicImage::ImageRgb8(img);

        ImageCrateCodec
            .encode(&original, &path)
            .expect("png should be saved");
        let decoded = ImageCrateCodec.decode(&path).expect("png should decode");

        assert_eq!(decoded.to_rgb8(), original.to_rgb8());
    }

    #[test]
    fn jpeg_save_drops_alpha() {
        let dir = TempDir::new().expect("tempdir should be created");
        let path = dir.path().join("sample.jpg");
        let image =
            DynamicImage::ImageRgba8(RgbaImage::from_pixel(20, 10, Rgba([90, 90, 90, 128])));

        ImageCrateCodec
            .encode(&image, &path)
            .expect("jpeg should be saved");
        let decoded = ImageCrateCodec.decode(&path).expect("jpeg should decode");

        assert_eq!((decoded.width(), decoded.height()), (20, 10));
        assert!(!decoded.color().has_alpha());
    }

    #[test]
    fn decode_reports_garbage_files() {
        let dir = TempDir::new().expect("tempdir should be created");
        let path = dir.path().join("broken.png");
        fs::write(&path, b"definitely not a png").expect("file should be written");

        let result = ImageCrateCodec.decode(&path);
        assert!(matches!(result, Err(AppError::Decode { .. })));
    }

    #[test]
    fn decode_reports_missing_files() {
        let dir = TempDir::new().expect("tempdir should be created");
        let result = ImageCrateCodec.decode(&dir.path().join("missing.jpg"));
        assert!(matches!(result, Err(AppError::Decode { .. })));
    }

    #[test]
    fn failed_encode_keeps_existing_target_and_leaves_no_staging_file() {
        let dir = TempDir::new().expect("tempdir should be created");
        let path = dir.path().join("out.png");
        fs::write(&path, b"previous").expect("file should be written");

        let result = ImageCrateCodec.encode(&DynamicImage::new_rgb8(0, 0), &path);

        assert!(matches!(result, Err(AppError::Encode { .. })));
        assert_eq!(fs::read(&path).expect("target readable"), b"previous");
        let entries: Vec<_> = fs::read_dir(dir.path())
            .expect("read dir")
            .map(|entry| entry.expect("entry").file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("out.png")]);
    }

    #[test]
    fn encode_rejects_unknown_extension_without_writing() {
        let dir = TempDir::new().expect("tempdir should be created");
        let path = dir.path().join("out.bmp");
        let image = DynamicImage::ImageRgb8(ImageBuffer::from_pixel(4, 4, Rgb([1_u8, 2, 3])));

        let result = ImageCrateCodec.encode(&image, &path);
        assert!(matches!(result, Err(AppError::UnsupportedFormat(_))));
        assert_eq!(fs::read_dir(dir.path()).expect("read dir").count(), 0);
    }
}
