use crate::InferError;
use glimpse_base::Tensor;
use glimpse_image::{Frame, Rotation};

/// Per-channel normalization applied after scaling pixels to `[0, 1]`:
/// `(value - mean[c]) / std[c]`, channels in RGB order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalization {
    pub mean: [f32; 3],
    pub std: [f32; 3],
}

impl Normalization {
    /// ImageNet statistics used by torchvision-trained models.
    pub const IMAGENET: Normalization = Normalization {
        mean: [0.485, 0.456, 0.406],
        std: [0.229, 0.224, 0.225],
    };

    /// Plain `[0, 1]` scaling.
    pub const UNIT: Normalization = Normalization {
        mean: [0.0; 3],
        std: [1.0; 3],
    };

    fn apply(&self, channel: usize, value: u8) -> f32 {
        (value as f32 / 255.0 - self.mean[channel]) / self.std[channel]
    }
}

impl Default for Normalization {
    fn default() -> Self {
        Self::IMAGENET
    }
}

/// Nearest-neighbor source offsets for each of `out` output positions,
/// cropping the centered window of `out * scale` pixels from `len`.
fn sample_positions(len: u32, out: u32, scale: f32) -> Vec<u32> {
    let window = out as f32 * scale;
    let offset = (len as f32 - window) / 2.0;
    (0..out)
        .map(|i| {
            let pos = offset + (i as f32 + 0.5) * scale;
            (pos.floor().max(0.0) as u32).min(len - 1)
        })
        .collect()
}

/// Convert a camera frame into a model input tensor.
///
/// The frame is rotated upright by `rotation`, the largest centered region
/// with the aspect ratio of `width` x `height` is cropped out and resampled
/// (nearest neighbor) to exactly that size, and every pixel is normalized.
///
/// Returns an NCHW tensor of shape `[1, 3, height, width]`, channels RGB.
pub fn center_crop_tensor(
    frame: &Frame,
    rotation: Rotation,
    width: u32,
    height: u32,
    normalization: &Normalization,
) -> Result<Tensor<f32>, InferError> {
    if width == 0 || height == 0 {
        return Err(InferError::ShapeMismatch {
            expected: "non-empty input size".to_string(),
            got: format!("{width}x{height}"),
        });
    }

    let plane = (width as usize)
        .checked_mul(height as usize)
        .filter(|plane| plane.checked_mul(3).is_some())
        .ok_or_else(|| InferError::ShapeMismatch {
            expected: "addressable input size".to_string(),
            got: format!("{width}x{height}"),
        })?;

    let (src_w, src_h) = (frame.width(), frame.height());
    let (upright_w, upright_h) = rotation.upright_size(src_w, src_h);
    let scale = (upright_w as f32 / width as f32).min(upright_h as f32 / height as f32);

    let xs = sample_positions(upright_w, width, scale);
    let ys = sample_positions(upright_h, height, scale);

    let mut data = vec![0.0f32; 3 * plane];
    for (ty, &uy) in ys.iter().enumerate() {
        for (tx, &ux) in xs.iter().enumerate() {
            let (sx, sy) = rotation.source_coords(ux, uy, src_w, src_h);
            let rgb = frame.rgb_at(sx, sy);
            let offset = ty * width as usize + tx;
            for (c, &value) in rgb.iter().enumerate() {
                data[c * plane + offset] = normalization.apply(c, value);
            }
        }
    }

    Ok(Tensor::new(
        vec![1, 3, height as usize, width as usize],
        data,
    )?)
}
