use eframe::egui::{vec2, ColorImage, Vec2};
use image::imageops::FilterType;
use image::DynamicImage;

/// Largest size with the same aspect ratio as `width`x`height` that fits
/// inside `max_width`x`max_height`. Scales up as well as down.
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }

    let scale = f64::min(
        f64::from(max_width) / f64::from(width),
        f64::from(max_height) / f64::from(height),
    );
    let fitted_width = (f64::from(width) * scale).round().max(1.0) as u32;
    let fitted_height = (f64::from(height) * scale).round().max(1.0) as u32;
    (fitted_width.min(max_width), fitted_height.min(max_height))
}

/// On-screen size of a preview texture: never larger than the texture, the
/// preview box, or the space the panel has left.
pub fn display_size(texture_size: [usize; 2], available: Vec2, max_size: [u32; 2]) -> Vec2 {
    let bound_width = available.x.min(max_size[0] as f32).max(0.0);
    let bound_height = available.y.min(max_size[1] as f32).max(0.0);
    let (width, height) = (texture_size[0] as f32, texture_size[1] as f32);
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }

    let scale = (bound_width / width).min(bound_height / height).min(1.0);
    vec2(width * scale, height * scale)
}

/// Smoothly rescales `image` into the preview box and converts it for egui.
pub fn preview_color_image(image: &DynamicImage, max_size: [u32; 2]) -> ColorImage {
    let (width, height) = fit_within(image.width(), image.height(), max_size[0], max_size[1]);
    let scaled = if (width, height) == (image.width(), image.height()) {
        image.to_rgba8()
    } else {
        image
            .resize_exact(width, height, FilterType::Triangle)
            .to_rgba8()
    };

    ColorImage::from_rgba_unmultiplied(
        [scaled.width() as usize, scaled.height() as usize],
        scaled.as_raw(),
    )
}
