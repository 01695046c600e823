use crate::ImageError;

// fourcc codes
pub(crate) const FOURCC_RGB8: u32 = u32::from_le_bytes(*b"RGB3");
pub(crate) const FOURCC_RGBA8: u32 = u32::from_le_bytes(*b"AB24");
pub(crate) const FOURCC_GRAY8: u32 = u32::from_le_bytes(*b"GREY");
pub(crate) const FOURCC_YUYV: u32 = u32::from_le_bytes(*b"YUYV");
pub(crate) const FOURCC_YU12: u32 = u32::from_le_bytes(*b"YU12");
pub(crate) const FOURCC_NV12: u32 = u32::from_le_bytes(*b"NV12");
pub(crate) const FOURCC_NV21: u32 = u32::from_le_bytes(*b"NV21");

/// Convert a fourcc code to a readable 4-character string.
pub fn fourcc_to_string(fourcc: u32) -> String {
    String::from_utf8_lossy(&fourcc.to_le_bytes()).into_owned()
}

/// Storage layout of a frame's pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// Packed `R, G, B`, 3 bytes per pixel.
    Rgb8,
    /// Packed `R, G, B, A`, 4 bytes per pixel.
    Rgba8,
    /// One luma byte per pixel.
    Gray8,
    /// Packed 4:2:2, `Y0 U Y1 V` per pixel pair. Width must be even.
    Yuyv,
    /// Planar 4:2:0: full Y plane, then quarter-size U and V planes.
    I420,
    /// Semi-planar 4:2:0: Y plane, then interleaved `U V`.
    Nv12,
    /// Semi-planar 4:2:0: Y plane, then interleaved `V U`.
    Nv21,
}

impl PixelFormat {
    pub fn from_fourcc(fourcc: u32) -> Result<Self, ImageError> {
        match fourcc {
            FOURCC_RGB8 => Ok(PixelFormat::Rgb8),
            FOURCC_RGBA8 => Ok(PixelFormat::Rgba8),
            FOURCC_GRAY8 => Ok(PixelFormat::Gray8),
            FOURCC_YUYV => Ok(PixelFormat::Yuyv),
            FOURCC_YU12 => Ok(PixelFormat::I420),
            FOURCC_NV12 => Ok(PixelFormat::Nv12),
            FOURCC_NV21 => Ok(PixelFormat::Nv21),
            _ => Err(ImageError::UnsupportedFormat(fourcc_to_string(fourcc))),
        }
    }

    pub fn as_fourcc(&self) -> u32 {
        match self {
            PixelFormat::Rgb8 => FOURCC_RGB8,
            PixelFormat::Rgba8 => FOURCC_RGBA8,
            PixelFormat::Gray8 => FOURCC_GRAY8,
            PixelFormat::Yuyv => FOURCC_YUYV,
            PixelFormat::I420 => FOURCC_YU12,
            PixelFormat::Nv12 => FOURCC_NV12,
            PixelFormat::Nv21 => FOURCC_NV21,
        }
    }

    /// Minimum buffer size in bytes for a `width` x `height` frame, or
    /// `None` if it does not fit in `usize`.
    pub fn frame_len(&self, width: u32, height: u32) -> Option<usize> {
        let luma = (width as usize).checked_mul(height as usize)?;
        match self {
            PixelFormat::Rgb8 => luma.checked_mul(3),
            PixelFormat::Rgba8 => luma.checked_mul(4),
            PixelFormat::Gray8 => Some(luma),
            PixelFormat::Yuyv => luma.checked_mul(2),
            PixelFormat::I420 | PixelFormat::Nv12 | PixelFormat::Nv21 => {
                let (cw, ch) = chroma_size(width, height);
                cw.checked_mul(ch)?.checked_mul(2)?.checked_add(luma)
            }
        }
    }
}

/// Chroma plane dimensions for 4:2:0 formats (odd sizes round up).
pub(crate) fn chroma_size(width: u32, height: u32) -> (usize, usize) {
    (width.div_ceil(2) as usize, height.div_ceil(2) as usize)
}
