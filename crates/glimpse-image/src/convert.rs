use crate::{PixelFormat, pixelformat::chroma_size};

/// BT.601 YUV-to-RGB conversion for a single pixel (fixed-point, shift 8).
pub fn yuv_to_rgb(y: u8, u: u8, v: u8) -> [u8; 3] {
    let y = y as i32;
    let u = u as i32 - 128;
    let v = v as i32 - 128;
    let r = (y + ((359 * v) >> 8)).clamp(0, 255) as u8;
    let g = (y - ((88 * u + 183 * v) >> 8)).clamp(0, 255) as u8;
    let b = (y + ((454 * u) >> 8)).clamp(0, 255) as u8;
    [r, g, b]
}

/// Read pixel `(x, y)` of a buffer as RGB.
///
/// The buffer must already be validated against `format.frame_len`.
pub(crate) fn sample_rgb(
    format: PixelFormat,
    data: &[u8],
    width: u32,
    height: u32,
    x: u32,
    y: u32,
) -> [u8; 3] {
    let w = width as usize;
    let luma_len = w * height as usize;
    let (x, y) = (x as usize, y as usize);

    match format {
        PixelFormat::Rgb8 => {
            let i = (y * w + x) * 3;
            [data[i], data[i + 1], data[i + 2]]
        }
        PixelFormat::Rgba8 => {
            let i = (y * w + x) * 4;
            [data[i], data[i + 1], data[i + 2]]
        }
        PixelFormat::Gray8 => {
            let v = data[y * w + x];
            [v, v, v]
        }
        PixelFormat::Yuyv => {
            // Y0 U Y1 V shared by each horizontal pixel pair
            let pair = (y * w + (x & !1)) * 2;
            let luma = if x & 1 == 0 { data[pair] } else { data[pair + 2] };
            yuv_to_rgb(luma, data[pair + 1], data[pair + 3])
        }
        PixelFormat::I420 => {
            let (cw, ch) = chroma_size(width, height);
            let c = (y / 2) * cw + x / 2;
            let u = data[luma_len + c];
            let v = data[luma_len + cw * ch + c];
            yuv_to_rgb(data[y * w + x], u, v)
        }
        PixelFormat::Nv12 | PixelFormat::Nv21 => {
            let (cw, _) = chroma_size(width, height);
            let c = luma_len + (y / 2) * cw * 2 + (x / 2) * 2;
            let (u, v) = if format == PixelFormat::Nv12 {
                (data[c], data[c + 1])
            } else {
                (data[c + 1], data[c])
            };
            yuv_to_rgb(data[y * w + x], u, v)
        }
    }
}

/// Convert a whole buffer to packed RGB, 3 bytes per pixel.
pub(crate) fn to_rgb_bytes(format: PixelFormat, data: &[u8], width: u32, height: u32) -> Vec<u8> {
    let pixel_count = width as usize * height as usize;
    if format == PixelFormat::Rgb8 {
        return data[..pixel_count * 3].to_vec();
    }

    let mut rgb = Vec::with_capacity(pixel_count * 3);
    for y in 0..height {
        for x in 0..width {
            rgb.extend_from_slice(&sample_rgb(format, data, width, height, x, y));
        }
    }
    rgb
}
