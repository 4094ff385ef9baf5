use std::path::Path;

use image::{ImageFormat, Rgb};
use ndarray::Array2;

use crate::error::{PrismError, Result};
use crate::frame::ColorFrame;

/// Whether `save_color_image` knows the extension of `path`.
pub fn is_supported_output(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("png" | "tif" | "tiff")
    )
}

/// Save a ColorFrame as 16-bit RGB TIFF.
pub fn save_color_tiff(color: &ColorFrame, path: &Path) -> Result<()> {
    let h = color.height();
    let w = color.width();

    let mut pixels: Vec<u16> = Vec::with_capacity(h * w * 3);
    for row in 0..h {
        for col in 0..w {
            for channel in color.channels() {
                pixels.push((channel.data[[row, col]].clamp(0.0, 1.0) * 65535.0) as u16);
            }
        }
    }

    let img = image::ImageBuffer::<Rgb<u16>, Vec<u16>>::from_raw(w as u32, h as u32, pixels)
        .ok_or_else(|| PrismError::Config("pixel buffer does not match image size".into()))?;
    img.save_with_format(path, ImageFormat::Tiff)?;
    Ok(())
}

/// Save a ColorFrame as 8-bit RGB PNG.
pub fn save_color_png(color: &ColorFrame, path: &Path) -> Result<()> {
    let h = color.height();
    let w = color.width();

    let mut img = image::RgbImage::new(w as u32, h as u32);
    for row in 0..h {
        for col in 0..w {
            let [r, g, b] = color
                .channels()
                .map(|channel| (channel.data[[row, col]].clamp(0.0, 1.0) * 255.0).round() as u8);
            img.put_pixel(col as u32, row as u32, Rgb([r, g, b]));
        }
    }

    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save a ColorFrame, choosing format from file extension.
pub fn save_color_image(color: &ColorFrame, path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("png") => save_color_png(color, path),
        _ => save_color_tiff(color, path),
    }
}

/// Load any image the `image` crate decodes into a ColorFrame in [0, 1].
/// Grayscale inputs are replicated into all three channels.
pub fn load_color_image(path: &Path) -> Result<ColorFrame> {
    let img = image::open(path)?;
    let rgb = img.to_rgb16();
    let (w, h) = rgb.dimensions();
    let (h, w) = (h as usize, w as usize);

    let mut red = Array2::<f32>::zeros((h, w));
    let mut green = Array2::<f32>::zeros((h, w));
    let mut blue = Array2::<f32>::zeros((h, w));

    for (col, row, pixel) in rgb.enumerate_pixels() {
        let (r, c) = (row as usize, col as usize);
        red[[r, c]] = pixel.0[0] as f32 / 65535.0;
        green[[r, c]] = pixel.0[1] as f32 / 65535.0;
        blue[[r, c]] = pixel.0[2] as f32 / 65535.0;
    }

    Ok(ColorFrame::from_channels(red, green, blue))
}
