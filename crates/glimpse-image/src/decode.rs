use crate::{Frame, ImageError, PixelFormat};
use crates_image::DynamicImage;
use std::path::Path;

fn decode_image_inner(data: &[u8]) -> Result<Frame, ImageError> {
    let img = crates_image::load_from_memory(data)?;

    match img {
        DynamicImage::ImageLuma8(buf) => {
            let (w, h) = buf.dimensions();
            Frame::new(PixelFormat::Gray8, w, h, buf.into_raw())
        }
        DynamicImage::ImageRgb8(buf) => {
            let (w, h) = buf.dimensions();
            Frame::new(PixelFormat::Rgb8, w, h, buf.into_raw())
        }
        DynamicImage::ImageRgba8(buf) => {
            let (w, h) = buf.dimensions();
            Frame::new(PixelFormat::Rgba8, w, h, buf.into_raw())
        }
        other => {
            // 16-bit, float and luma-alpha images are reduced to 8-bit RGB
            let rgb = other.to_rgb8();
            let (w, h) = rgb.dimensions();
            Frame::new(PixelFormat::Rgb8, w, h, rgb.into_raw())
        }
    }
}

/// Decodes an encoded still image (png, jpeg, ...) into a frame.
///
/// 8-bit gray, RGB and RGBA images keep their layout; everything else is
/// converted to `Rgb8`. The CPU-bound decoding work runs on tokio's
/// blocking thread pool.
///
/// # Errors
///
/// Returns `ImageError::Decode` if the data is invalid or the format is unsupported.
pub async fn decode_image(data: &[u8]) -> Result<Frame, ImageError> {
    let owned = data.to_vec();
    tokio::task::spawn_blocking(move || decode_image_inner(&owned))
        .await
        .map_err(|e| ImageError::Decode(e.to_string()))?
}

/// Reads and decodes an image file.
pub async fn decode_image_file(path: impl AsRef<Path>) -> Result<Frame, ImageError> {
    let data = tokio::fs::read(path.as_ref()).await?;
    tokio::task::spawn_blocking(move || decode_image_inner(&data))
        .await
        .map_err(|e| ImageError::Decode(e.to_string()))?
}
