use crate::{
    ImageError, PixelFormat,
    convert::{sample_rgb, to_rgb_bytes},
};
use glimpse_base::Tensor;

/// One camera image: an immutable pixel buffer with its geometry and format.
#[derive(Clone, PartialEq)]
pub struct Frame {
    format: PixelFormat,
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("format", &self.format)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("data", &format_args!("<{} bytes>", self.data.len()))
            .finish()
    }
}

impl Frame {
    /// Wrap a pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns `ImageError::InvalidFrame` if either dimension is zero, if a
    /// YUYV frame has an odd width, if the required size overflows `usize`,
    /// or if `data` is shorter than the format requires. Trailing bytes past the required length are allowed.
    pub fn new(
        format: PixelFormat,
        width: u32,
        height: u32,
        data: Vec<u8>,
    ) -> Result<Self, ImageError> {
        if width == 0 || height == 0 {
            return Err(ImageError::InvalidFrame(format!(
                "empty frame: {width}x{height}"
            )));
        }
        if format == PixelFormat::Yuyv && width % 2 != 0 {
            return Err(ImageError::InvalidFrame(format!(
                "YUYV width must be even, got {width}"
            )));
        }
        let expected = format.frame_len(width, height).ok_or_else(|| {
            ImageError::InvalidFrame(format!(
                "{:?} {}x{} is too large to address",
                format, width, height
            ))
        })?;
        if data.len() < expected {
            return Err(ImageError::InvalidFrame(format!(
                "{:?} {}x{} needs {} bytes, got {}",
                format,
                width,
                height,
                expected,
                data.len()
            )));
        }
        Ok(Self {
            format,
            width,
            height,
            data,
        })
    }

    /// Build a frame from an HWC tensor with 1, 3 or 4 channels.
    pub fn from_tensor(tensor: Tensor<u8>) -> Result<Self, ImageError> {
        let [height, width, channels] = tensor.shape[..] else {
            return Err(ImageError::InvalidFrame(format!(
                "expected [H, W, C] tensor, got {:?}",
                tensor.shape
            )));
        };
        let format = match channels {
            1 => PixelFormat::Gray8,
            3 => PixelFormat::Rgb8,
            4 => PixelFormat::Rgba8,
            _ => {
                return Err(ImageError::InvalidFrame(format!(
                    "unsupported channel count: {channels}"
                )));
            }
        };
        let dimension = |value: usize| {
            u32::try_from(value).map_err(|_| {
                ImageError::InvalidFrame(format!("tensor dimension {value} exceeds u32"))
            })
        };
        Self::new(format, dimension(width)?, dimension(height)?, tensor.data)
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// RGB value of pixel `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the frame.
    pub fn rgb_at(&self, x: u32, y: u32) -> [u8; 3] {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} frame",
            self.width,
            self.height
        );
        sample_rgb(self.format, &self.data, self.width, self.height, x, y)
    }

    /// Convert to an RGB tensor with shape `[height, width, 3]`.
    pub fn to_rgb8(&self) -> Result<Tensor<u8>, ImageError> {
        let rgb = to_rgb_bytes(self.format, &self.data, self.width, self.height);
        Ok(Tensor::new(
            vec![self.height as usize, self.width as usize, 3],
            rgb,
        )?)
    }
}
