use std::fmt;

#[derive(Debug)]
pub enum ImageError {
    Decode(String),
    Io(String),
    InvalidFrame(String),
    UnsupportedFormat(String),
    InvalidRotation(i32),
    Tensor(glimpse_base::TensorError),
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::Decode(msg) => write!(f, "decode error: {msg}"),
            ImageError::Io(msg) => write!(f, "io error: {msg}"),
            ImageError::InvalidFrame(msg) => write!(f, "invalid frame: {msg}"),
            ImageError::UnsupportedFormat(fourcc) => {
                write!(f, "unsupported pixel format: {fourcc}")
            }
            ImageError::InvalidRotation(degrees) => {
                write!(f, "invalid rotation: {degrees} (expected 0, 90, 180 or 270)")
            }
            ImageError::Tensor(err) => write!(f, "tensor error: {err}"),
        }
    }
}

impl std::error::Error for ImageError {}

impl From<crates_image::ImageError> for ImageError {
    fn from(err: crates_image::ImageError) -> Self {
        ImageError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for ImageError {
    fn from(err: std::io::Error) -> Self {
        ImageError::Io(err.to_string())
    }
}

impl From<glimpse_base::TensorError> for ImageError {
    fn from(err: glimpse_base::TensorError) -> Self {
        ImageError::Tensor(err)
    }
}
