//! Camera frames for the glimpse ecosystem.
//!
//! A `Frame` is an immutable pixel buffer in one of the formats cameras
//! commonly deliver. Frames can be sampled pixel by pixel as RGB regardless
//! of their storage format, converted to an HWC `Tensor<u8>`, or decoded
//! from encoded still images.

pub mod convert;
pub mod decode;
pub mod error;
pub mod frame;
pub mod pixelformat;
pub mod rotation;

pub use decode::{decode_image, decode_image_file};
pub use error::ImageError;
pub use frame::Frame;
pub use pixelformat::PixelFormat;
pub use rotation::Rotation;
