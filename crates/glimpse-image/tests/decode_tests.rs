use crates_image::ImageEncoder;
use glimpse_image::{ImageError, PixelFormat, decode_image, decode_image_file};

fn encode_png_rgb(width: u32, height: u32) -> Vec<u8> {
    let img = crates_image::RgbImage::from_fn(width, height, |x, y| {
        crates_image::Rgb([(x * 40) as u8, (y * 40) as u8, 200])
    });
    let mut buffer = Vec::new();
    crates_image::codecs::png::PngEncoder::new(&mut buffer)
        .write_image(img.as_raw(), width, height, crates_image::ExtendedColorType::Rgb8)
        .unwrap();
    buffer
}

#[tokio::test]
async fn test_decode_png_rgb() {
    let frame = decode_image(&encode_png_rgb(3, 2)).await.unwrap();
    assert_eq!(frame.format(), PixelFormat::Rgb8);
    assert_eq!((frame.width(), frame.height()), (3, 2));
    assert_eq!(frame.rgb_at(2, 1), [80, 40, 200]);
}

#[tokio::test]
async fn test_decode_png_16bit_is_reduced_to_rgb8() {
    let img = crates_image::ImageBuffer::<crates_image::Rgb<u16>, Vec<u16>>::from_pixel(
        2,
        2,
        crates_image::Rgb([65535, 0, 0]),
    );
    let mut buffer = Vec::new();
    crates_image::DynamicImage::ImageRgb16(img)
        .write_to(
            &mut std::io::Cursor::new(&mut buffer),
            crates_image::ImageFormat::Png,
        )
        .unwrap();

    let frame = decode_image(&buffer).await.unwrap();
    assert_eq!(frame.format(), PixelFormat::Rgb8);
    assert_eq!(frame.rgb_at(0, 0), [255, 0, 0]);
}

#[tokio::test]
async fn test_decode_garbage_fails() {
    let result = decode_image(&[0, 1, 2, 3]).await;
    assert!(matches!(result, Err(ImageError::Decode(_))));
}

#[tokio::test]
async fn test_decode_image_file() {
    let path = std::env::temp_dir().join(format!("glimpse-decode-{}.png", std::process::id()));
    std::fs::write(&path, encode_png_rgb(2, 2)).unwrap();

    let frame = decode_image_file(&path).await.unwrap();
    assert_eq!((frame.width(), frame.height()), (2, 2));

    std::fs::remove_file(&path).ok();
}

#[tokio::test]
async fn test_decode_missing_file_is_io_error() {
    let result = decode_image_file("/nonexistent/glimpse/frame.png").await;
    assert!(matches!(result, Err(ImageError::Io(_))));
}
