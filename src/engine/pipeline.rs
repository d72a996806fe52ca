use image::{DynamicImage, ImageBuffer, Luma, LumaA, Rgba, RgbaImage};

use crate::engine::adjustments::EnhanceFactors;

/// Applies saturation, then contrast, then brightness to `original`.
///
/// Every stage blends its input against a degenerate image and allocates a
/// new buffer, so `original` is never touched. The result has the same
/// channel layout as the source at 8 bits per channel.
pub fn enhance(original: &DynamicImage, factors: EnhanceFactors) -> DynamicImage {
    let source = original.to_rgba8();
    let saturated = adjust_saturation(&source, factors.saturation);
    let contrasted = adjust_contrast(&saturated, factors.contrast);
    let brightened = adjust_brightness(&contrasted, factors.exposure);

    // Gray input stays gray through every stage, so any one channel is the luma.
    let color = original.color();
    match (color.has_color(), color.has_alpha()) {
        (true, true) => DynamicImage::ImageRgba8(brightened),
        (true, false) => DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(brightened).to_rgb8()),
        (false, true) => DynamicImage::ImageLumaA8(ImageBuffer::from_fn(
            brightened.width(),
            brightened.height(),
            |x, y| {
                let pixel = brightened.get_pixel(x, y);
                LumaA([pixel[0], pixel[3]])
            },
        )),
        (false, false) => DynamicImage::ImageLuma8(ImageBuffer::from_fn(
            brightened.width(),
            brightened.height(),
            |x, y| Luma([brightened.get_pixel(x, y)[0]]),
        )),
    }
}

/// Blends each pixel toward its own luma. 0 is grayscale, 1 is identity.
pub fn adjust_saturation(image: &RgbaImage, factor: f32) -> RgbaImage {
    map_pixels(
        image,
        |pixel| {
            let gray = luma(pixel);
            [gray, gray, gray]
        },
        factor,
    )
}

/// Blends each pixel toward the rounded mean luma of the whole image.
pub fn adjust_contrast(image: &RgbaImage, factor: f32) -> RgbaImage {
    let mean = mean_luma(image);
    map_pixels(image, |_| [mean, mean, mean], factor)
}

/// Blends each pixel toward black. 0 is black, 1 is identity.
pub fn adjust_brightness(image: &RgbaImage, factor: f32) -> RgbaImage {
    map_pixels(image, |_| [0, 0, 0], factor)
}

fn map_pixels<F>(image: &RgbaImage, degenerate: F, factor: f32) -> RgbaImage
where
    F: Fn(&Rgba<u8>) -> [u8; 3],
{
    let mut output = RgbaImage::new(image.width(), image.height());
    for (source, target) in image.pixels().zip(output.pixels_mut()) {
        let base = degenerate(source);
        *target = Rgba([
            blend_channel(base[0], source[0], factor),
            blend_channel(base[1], source[1], factor),
            blend_channel(base[2], source[2], factor),
            source[3],
        ]);
    }
    output
}

pub fn blend_channel(degenerate: u8, source: u8, factor: f32) -> u8 {
    let value = degenerate as f32 + factor * (source as f32 - degenerate as f32);
    if value <= 0.0 {
        0
    } else if value >= 255.0 {
        255
    } else {
        value as u8
    }
}

/// ITU-R 601-2 luma in 16.16 fixed point.
pub fn luma(pixel: &Rgba<u8>) -> u8 {
    let weighted = u32::from(pixel[0]) * 19595
        + u32::from(pixel[1]) * 38470
        + u32::from(pixel[2]) * 7471
        + 0x8000;
    (weighted >> 16) as u8
}

pub fn mean_luma(image: &RgbaImage) -> u8 {
    let count = u64::from(image.width()) * u64::from(image.height());
    if count == 0 {
        return 0;
    }
    let total: u64 = image.pixels().map(|pixel| u64::from(luma(pixel))).sum();
    let mean = total as f64 / count as f64;
    (mean + 0.5).floor().min(255.0) as u8
}
